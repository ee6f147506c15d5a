use super::*;
use crate::draw::{Color, Stroke, color::*};
use crate::export::ExportError;
use crate::input::{Action, PointerEvent, PointerId, Tool, WidthPreset};

const FINGER: PointerId = PointerId(0);
const SECOND_FINGER: PointerId = PointerId(1);

fn create_test_session() -> DrawingSession {
    DrawingSession::new(SessionSettings {
        pen_color: RED,
        pen_width: 3.0,
        ..SessionSettings::default()
    })
}

fn draw(session: &mut DrawingSession, points: &[(f64, f64)]) {
    let (&(x0, y0), rest) = points.split_first().unwrap();
    session.on_pointer_down(FINGER, x0, y0);
    for &(x, y) in rest {
        session.on_pointer_move(FINGER, x, y);
    }
    let &(xn, yn) = points.last().unwrap();
    session.on_pointer_up(FINGER, xn, yn);
}

#[test]
fn test_gesture_commits_all_sampled_points() {
    let mut session = create_test_session();

    session.on_pointer_down(FINGER, 10.0, 10.0);
    session.on_pointer_move(FINGER, 20.0, 10.0);
    session.on_pointer_move(FINGER, 20.0, 20.0);
    session.on_pointer_up(FINGER, 20.0, 20.0);

    let mut expected = Stroke::new((10.0, 10.0), RED, 3.0);
    expected.push_point((20.0, 10.0));
    expected.push_point((20.0, 20.0));

    assert_eq!(session.committed_strokes(), &[expected]);
    assert!(session.active_stroke().is_none());
    assert_eq!(session.state(), &DrawingState::Idle);
}

#[test]
fn test_each_gesture_commits_exactly_one_stroke() {
    let mut session = create_test_session();

    for i in 0..5 {
        let offset = i as f64 * 10.0;
        draw(&mut session, &[(offset, 0.0), (offset, 5.0), (offset, 9.0)]);
        assert_eq!(session.committed_strokes().len(), i + 1);
        assert!(session.active_stroke().is_none());
    }
}

#[test]
fn test_press_and_release_commits_dot() {
    let mut session = create_test_session();

    session.on_pointer_down(FINGER, 42.0, 24.0);
    session.on_pointer_up(FINGER, 42.0, 24.0);

    let strokes = session.committed_strokes();
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].points(), &[(42.0, 24.0)]);
    assert!(strokes[0].is_dot());
}

#[test]
fn test_active_stroke_exists_only_mid_gesture() {
    let mut session = create_test_session();
    assert!(session.active_stroke().is_none());

    session.on_pointer_down(FINGER, 1.0, 1.0);
    assert!(session.is_drawing());
    session.on_pointer_move(FINGER, 2.0, 2.0);
    assert_eq!(session.active_stroke().unwrap().points().len(), 2);
    assert!(session.committed_strokes().is_empty());

    session.on_pointer_up(FINGER, 2.0, 2.0);
    assert!(!session.is_drawing());
}

#[test]
fn test_moves_and_releases_while_idle_are_ignored() {
    let mut session = create_test_session();

    session.on_pointer_move(FINGER, 5.0, 5.0);
    session.on_pointer_up(FINGER, 5.0, 5.0);

    assert!(session.committed_strokes().is_empty());
    assert!(session.active_stroke().is_none());
}

#[test]
fn test_style_is_snapshotted_at_gesture_start() {
    let mut session = create_test_session();

    session.on_pointer_down(FINGER, 0.0, 0.0);
    session.set_color(BLUE);
    session.set_width(12.0);
    session.set_tool(Tool::Eraser);
    session.on_pointer_move(FINGER, 5.0, 5.0);
    session.on_pointer_up(FINGER, 5.0, 5.0);

    let stroke = &session.committed_strokes()[0];
    assert_eq!(stroke.color(), RED);
    assert_eq!(stroke.width(), 3.0);

    // The changes apply to the next gesture
    draw(&mut session, &[(1.0, 1.0), (2.0, 2.0)]);
    let next = &session.committed_strokes()[1];
    assert_eq!(next.color(), TAN);
    assert_eq!(next.width(), 10.0);
}

#[test]
fn test_eraser_ignores_pen_settings() {
    let mut session = create_test_session();
    session.set_color(ORANGE);
    session.set_width(25.0);
    session.set_tool(Tool::Eraser);

    draw(&mut session, &[(3.0, 3.0), (9.0, 9.0)]);

    let stroke = &session.committed_strokes()[0];
    assert_eq!(stroke.color(), session.background());
    assert_eq!(stroke.width(), session.settings().eraser_width);
}

#[test]
fn test_eraser_strokes_are_ordinary_committed_strokes() {
    let mut session = create_test_session();
    draw(&mut session, &[(0.0, 0.0), (10.0, 10.0)]);
    session.toggle_eraser();
    draw(&mut session, &[(0.0, 10.0), (10.0, 0.0)]);

    assert_eq!(session.committed_strokes().len(), 2);
    assert!(session.undo());
    assert_eq!(session.committed_strokes().len(), 1);
    assert_eq!(session.committed_strokes()[0].color(), RED);
}

#[test]
fn test_undo_restores_prior_list() {
    let mut session = create_test_session();
    draw(&mut session, &[(0.0, 0.0), (1.0, 1.0)]);
    draw(&mut session, &[(5.0, 5.0)]);
    let before = session.committed_strokes().to_vec();

    draw(&mut session, &[(7.0, 7.0), (8.0, 9.0)]);
    assert!(session.undo());

    assert_eq!(session.committed_strokes(), before.as_slice());
}

#[test]
fn test_undo_pops_in_reverse_and_is_noop_when_empty() {
    let mut session = create_test_session();
    draw(&mut session, &[(1.0, 1.0)]);
    draw(&mut session, &[(2.0, 2.0)]);
    draw(&mut session, &[(3.0, 3.0)]);
    let strokes = session.committed_strokes().to_vec();

    assert!(session.undo());
    assert_eq!(session.committed_strokes(), &strokes[..2]);

    assert!(session.undo());
    assert!(session.undo());
    assert!(session.committed_strokes().is_empty());

    assert!(!session.undo());
    assert!(session.committed_strokes().is_empty());
}

#[test]
fn test_undo_is_disabled_mid_gesture() {
    let mut session = create_test_session();
    draw(&mut session, &[(1.0, 1.0), (2.0, 2.0)]);

    session.on_pointer_down(FINGER, 10.0, 10.0);
    assert!(!session.undo());
    assert_eq!(session.committed_strokes().len(), 1);
    assert!(session.active_stroke().is_some());

    session.on_pointer_up(FINGER, 10.0, 10.0);
    assert_eq!(session.committed_strokes().len(), 2);
}

#[test]
fn test_clear_discards_committed_and_active() {
    let mut session = create_test_session();
    draw(&mut session, &[(1.0, 1.0)]);
    draw(&mut session, &[(2.0, 2.0)]);
    draw(&mut session, &[(3.0, 3.0)]);
    session.on_pointer_down(FINGER, 4.0, 4.0);
    session.on_pointer_move(FINGER, 5.0, 5.0);

    session.clear();

    assert!(session.committed_strokes().is_empty());
    assert!(session.active_stroke().is_none());

    // The lifted finger after a clear does not resurrect the stroke
    session.on_pointer_up(FINGER, 5.0, 5.0);
    assert!(session.committed_strokes().is_empty());

    // Idempotent
    session.clear();
    assert!(session.committed_strokes().is_empty());
}

#[test]
fn test_second_pointer_is_ignored() {
    let mut session = create_test_session();

    session.on_pointer_down(FINGER, 0.0, 0.0);
    session.on_pointer_down(SECOND_FINGER, 50.0, 50.0);
    session.on_pointer_move(SECOND_FINGER, 60.0, 60.0);
    session.on_pointer_move(FINGER, 1.0, 1.0);
    session.on_pointer_up(SECOND_FINGER, 60.0, 60.0);

    assert!(session.is_drawing());
    assert_eq!(
        session.active_stroke().unwrap().points(),
        &[(0.0, 0.0), (1.0, 1.0)]
    );

    session.on_pointer_up(FINGER, 1.0, 1.0);
    assert_eq!(session.committed_strokes().len(), 1);
}

#[test]
fn test_cancel_discards_active_stroke() {
    let mut session = create_test_session();
    draw(&mut session, &[(1.0, 1.0)]);

    session.on_pointer_down(FINGER, 2.0, 2.0);
    session.on_pointer_move(FINGER, 3.0, 3.0);
    session.on_pointer_cancel(SECOND_FINGER);
    assert!(session.is_drawing());

    session.on_pointer_cancel(FINGER);
    assert!(!session.is_drawing());
    assert_eq!(session.committed_strokes().len(), 1);
}

#[test]
fn test_handle_pointer_dispatches_events() {
    let mut session = create_test_session();
    let events = [
        PointerEvent::Down {
            pointer: FINGER,
            x: 10.0,
            y: 10.0,
        },
        PointerEvent::Move {
            pointer: FINGER,
            x: 20.0,
            y: 10.0,
        },
        PointerEvent::Up {
            pointer: FINGER,
            x: 20.0,
            y: 10.0,
        },
    ];
    for event in events {
        session.handle_pointer(event);
    }

    assert_eq!(
        session.committed_strokes()[0].points(),
        &[(10.0, 10.0), (20.0, 10.0)]
    );
}

#[test]
fn test_width_is_clamped_and_presets_apply() {
    let mut session = create_test_session();

    session.set_width(0.0);
    assert_eq!(session.current_width(), 1.0);
    session.set_width(999.0);
    assert_eq!(session.current_width(), 50.0);
    session.set_width(f64::NAN);
    assert_eq!(session.current_width(), 50.0);
    session.set_width(f64::INFINITY);
    assert_eq!(session.current_width(), 50.0);

    session.on_pointer_down(FINGER, 1.0, 1.0);
    assert_eq!(session.active_stroke().unwrap().width(), 50.0);
    session.on_pointer_up(FINGER, 1.0, 1.0);

    session.select_width_preset(WidthPreset::Small);
    assert_eq!(session.current_width(), 2.0);
    session.handle_action(Action::SetWidthLarge);
    assert_eq!(session.current_width(), 12.0);
    session.handle_action(Action::SetWidthMedium);
    assert_eq!(session.current_width(), 5.0);
}

#[test]
fn test_actions_select_tools_and_colors() {
    let mut session = create_test_session();

    session.handle_action(Action::ToggleEraser);
    assert_eq!(session.tool(), Tool::Eraser);
    session.handle_action(Action::ToggleEraser);
    assert_eq!(session.tool(), Tool::Pen);
    session.handle_action(Action::SelectEraser);
    assert_eq!(session.tool(), Tool::Eraser);
    session.handle_action(Action::SelectPen);
    assert_eq!(session.tool(), Tool::Pen);

    session.handle_action(Action::SetColorOrange);
    assert_eq!(session.current_color(), ORANGE);
    session.handle_action(Action::SetColorWhite);
    assert_eq!(session.current_color(), WHITE);
}

#[test]
fn test_clear_and_undo_actions() {
    let mut session = create_test_session();
    draw(&mut session, &[(1.0, 1.0)]);
    draw(&mut session, &[(2.0, 2.0)]);

    session.handle_action(Action::Undo);
    assert_eq!(session.committed_strokes().len(), 1);
    session.handle_action(Action::Clear);
    assert!(session.committed_strokes().is_empty());
}

#[test]
fn test_save_action_is_parked_for_host() {
    let mut session = create_test_session();
    assert!(!session.take_save_request());

    session.handle_action(Action::Save);
    assert!(session.take_save_request());
    assert!(!session.take_save_request());
}

#[test]
fn test_redraw_flag_tracks_changes() {
    let mut session = create_test_session();
    assert!(session.take_redraw());
    assert!(!session.take_redraw());

    session.on_pointer_down(FINGER, 1.0, 1.0);
    assert!(session.take_redraw());
    session.on_pointer_move(FINGER, 2.0, 2.0);
    assert!(session.take_redraw());
    session.on_pointer_up(FINGER, 2.0, 2.0);
    assert!(session.take_redraw());

    // Setting the same value again is not a change
    session.set_color(RED);
    assert!(!session.take_redraw());
    // Undo on empty is not a change either
    session.clear();
    assert!(session.take_redraw());
    session.undo();
    assert!(!session.take_redraw());
}

#[test]
fn test_every_completed_gesture_commits_one_stroke() {
    let mut session = create_test_session();
    for i in 0..300 {
        let before = session.committed_strokes().len();
        draw(&mut session, &[(i as f64, 1.0)]);
        assert_eq!(session.committed_strokes().len(), before + 1);
    }

    // A gesture still in contact is kept when the drawing is exported
    session.on_pointer_down(FINGER, 7.0, 7.0);
    session.on_pointer_move(FINGER, 8.0, 8.0);
    let snapshot = session.prepare_export().unwrap();
    assert_eq!(snapshot.strokes.len(), 301);
    assert_eq!(
        snapshot.strokes.last().unwrap().points(),
        &[(7.0, 7.0), (8.0, 8.0)]
    );
}

#[test]
fn test_prepare_export_finalizes_active_gesture() {
    let mut session = create_test_session();
    draw(&mut session, &[(1.0, 1.0), (2.0, 2.0)]);
    session.on_pointer_down(FINGER, 5.0, 5.0);
    session.on_pointer_move(FINGER, 6.0, 6.0);

    let snapshot = session.prepare_export().unwrap();

    assert!(!session.is_drawing());
    assert_eq!(session.committed_strokes().len(), 2);
    assert_eq!(snapshot.strokes, session.committed_strokes());
    assert_eq!(snapshot.background, TAN);
    assert_eq!((snapshot.width, snapshot.height), (1080, 1440));
}

#[test]
fn test_prepare_export_with_nothing_drawn() {
    let mut session = create_test_session();
    assert!(matches!(
        session.prepare_export(),
        Err(ExportError::NothingToSave)
    ));
}

#[test]
fn test_canvas_dimensions_feed_snapshot() {
    let mut session = create_test_session();
    session.update_canvas_dimensions(320, 240);
    assert!(session.take_redraw());
    draw(&mut session, &[(1.0, 1.0)]);

    let snapshot = session.prepare_export().unwrap();
    assert_eq!((snapshot.width, snapshot.height), (320, 240));
}

#[test]
fn test_render_paints_active_stroke_on_top() {
    let mut session = create_test_session();
    session.set_width(8.0);
    draw(&mut session, &[(0.0, 10.0), (20.0, 10.0)]);
    session.set_color(Color::from_rgb8(0, 0, 255));
    session.on_pointer_down(FINGER, 10.0, 0.0);
    session.on_pointer_move(FINGER, 10.0, 20.0);

    let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 20, 20).unwrap();
    let ctx = cairo::Context::new(&surface).unwrap();
    session.render(&ctx);
    drop(ctx);

    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let at = |x: usize, y: usize| {
        let offset = y * stride + x * 4;
        [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
    };
    // Crossing point shows the blue in-progress stroke (BGRA byte order)
    assert_eq!(at(10, 10), [0xFF, 0, 0, 0xFF]);
    // Committed red stroke elsewhere
    assert_eq!(at(2, 10), [0, 0, 0xFF, 0xFF]);
    // Background in the corner
    assert_eq!(at(0, 0), [0x8C, 0xB4, 0xD2, 0xFF]);
}

#[test]
fn test_active_bounds_follow_gesture() {
    let mut session = create_test_session();
    assert!(session.active_bounds().is_none());

    session.on_pointer_down(FINGER, 10.0, 10.0);
    session.on_pointer_move(FINGER, 30.0, 40.0);
    let rect = session.active_bounds().unwrap();
    assert!(rect.x <= 10 && rect.y <= 10);
    assert!(rect.x + rect.width >= 30 && rect.y + rect.height >= 40);
}

#[test]
fn test_active_bounds_far_off_canvas() {
    let mut session = create_test_session();
    session.on_pointer_down(FINGER, -1e10, 5.0);

    let rect = session.active_bounds().unwrap();
    assert_eq!(rect.x, i32::MIN);
    assert!(rect.width > 0);
}
