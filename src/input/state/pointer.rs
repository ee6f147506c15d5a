use crate::draw::Stroke;
use crate::input::events::{PointerEvent, PointerId};
use log::debug;

use super::{DrawingSession, DrawingState};

impl DrawingSession {
    /// Dispatches a raw pointer event to the matching handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { pointer, x, y } => self.on_pointer_down(pointer, x, y),
            PointerEvent::Move { pointer, x, y } => self.on_pointer_move(pointer, x, y),
            PointerEvent::Up { pointer, x, y } => self.on_pointer_up(pointer, x, y),
            PointerEvent::Cancel { pointer } => self.on_pointer_cancel(pointer),
        }
    }

    /// Processes a contact with the canvas.
    ///
    /// # Behavior
    /// - While Idle: snapshots the current tool and style into a new stroke
    ///   seeded with the contact point and starts drawing
    /// - While drawing: the contact is ignored, the first pointer keeps the gesture
    pub fn on_pointer_down(&mut self, pointer: PointerId, x: f64, y: f64) {
        match &self.state {
            DrawingState::Idle => {
                let (color, width) = self.stroke_style();
                debug!(
                    "Gesture start ({:?}) at ({x:.1}, {y:.1}) with {:?}, width {width:.1}",
                    pointer, self.tool
                );
                self.state = DrawingState::Drawing {
                    pointer,
                    stroke: Stroke::new((x, y), color, width),
                };
                self.needs_redraw = true;
            }
            DrawingState::Drawing { pointer: owner, .. } => {
                debug!("Ignoring contact from {:?}; {:?} owns the gesture", pointer, owner);
            }
        }
    }

    /// Processes pointer motion while in contact.
    ///
    /// Appends the sample to the active stroke when it comes from the pointer
    /// that owns the gesture. Samples are never dropped or smoothed.
    pub fn on_pointer_move(&mut self, pointer: PointerId, x: f64, y: f64) {
        if let DrawingState::Drawing {
            pointer: owner,
            stroke,
        } = &mut self.state
            && *owner == pointer
        {
            stroke.push_point((x, y));
            self.needs_redraw = true;
        }
    }

    /// Processes the end of a contact.
    ///
    /// Commits the active stroke when the owning pointer lifts. The release
    /// position is not recorded; a gesture with no motion commits as a dot.
    pub fn on_pointer_up(&mut self, pointer: PointerId, _x: f64, _y: f64) {
        match &self.state {
            DrawingState::Drawing { pointer: owner, .. } if *owner == pointer => {
                self.finish_gesture();
            }
            DrawingState::Drawing { .. } => {
                debug!("Ignoring release from non-owning {:?}", pointer);
            }
            DrawingState::Idle => {}
        }
    }

    /// Processes a platform cancellation of the gesture.
    ///
    /// The active stroke is discarded without being committed.
    pub fn on_pointer_cancel(&mut self, pointer: PointerId) {
        if let DrawingState::Drawing { pointer: owner, .. } = &self.state
            && *owner == pointer
        {
            debug!("Gesture cancelled by platform; discarding active stroke");
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
        }
    }
}
