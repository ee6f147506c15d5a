//! Drawing state machine and session state.

use crate::draw::{
    Color, Frame, Stroke,
    color::{BLACK, TAN},
};
use crate::input::{events::PointerId, tool::Tool};

/// Current gesture state machine.
///
/// `Drawing` exists exactly while one pointer is in contact with the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// No pointer in contact - waiting for a gesture
    Idle,
    /// A gesture is in progress
    Drawing {
        /// The contact that owns this gesture; other pointers are ignored
        pointer: PointerId,
        /// The in-progress stroke, style fixed at gesture start
        stroke: Stroke,
    },
}

/// Parameters a session is created with (usually from [`crate::Config`]).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Initial pen color
    pub pen_color: Color,
    /// Initial pen width in pixels
    pub pen_width: f64,
    /// Widths behind the small / medium / large presets
    pub width_presets: [f64; 3],
    /// Smallest pen width accepted by `set_width`
    pub min_width: f64,
    /// Largest pen width accepted by `set_width`
    pub max_width: f64,
    /// Fixed eraser width
    pub eraser_width: f64,
    /// Paper color; eraser strokes paint with it
    pub background: Color,
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            pen_color: BLACK,
            pen_width: 3.0,
            width_presets: [2.0, 5.0, 12.0],
            min_width: 1.0,
            max_width: 50.0,
            eraser_width: 10.0,
            background: TAN,
            canvas_width: 1080,
            canvas_height: 1440,
        }
    }
}

/// One drawing screen's worth of state.
///
/// Holds the committed strokes, the gesture state machine and the current
/// tool/style selection. Every method is synchronous and meant to be called
/// from the UI thread in response to pointer events or button presses; after
/// each call the host checks [`DrawingSession::take_redraw`] and repaints with
/// [`DrawingSession::render`].
#[derive(Debug)]
pub struct DrawingSession {
    /// Committed strokes in z-order
    pub(super) frame: Frame,
    /// Gesture state machine
    pub(super) state: DrawingState,
    /// Tool used for the next gesture
    pub(super) tool: Tool,
    /// Pen color used for the next gesture
    pub(super) current_color: Color,
    /// Pen width used for the next gesture
    pub(super) current_width: f64,
    pub(super) settings: SessionSettings,
    /// Whether the display needs to be redrawn
    pub(super) needs_redraw: bool,
    /// Set by the Save action; consumed by the host
    pub(super) save_requested: bool,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

impl DrawingSession {
    /// Creates an empty session with the pen selected.
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            frame: Frame::new(),
            state: DrawingState::Idle,
            tool: Tool::Pen,
            current_color: settings.pen_color,
            current_width: settings.pen_width,
            settings,
            needs_redraw: true,
            save_requested: false,
        }
    }

    /// Committed strokes, earliest first.
    pub fn committed_strokes(&self) -> &[Stroke] {
        self.frame.strokes()
    }

    /// The in-progress stroke, if a gesture is active.
    pub fn active_stroke(&self) -> Option<&Stroke> {
        match &self.state {
            DrawingState::Drawing { stroke, .. } => Some(stroke),
            DrawingState::Idle => None,
        }
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn current_width(&self) -> f64 {
        self.current_width
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn background(&self) -> Color {
        self.settings.background
    }

    /// Returns whether a repaint is pending and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Returns whether the Save action was triggered and clears the request.
    pub fn take_save_request(&mut self) -> bool {
        std::mem::take(&mut self.save_requested)
    }

    /// Updates the canvas size after the host lays out the drawing area.
    pub fn update_canvas_dimensions(&mut self, width: u32, height: u32) {
        if (width, height) != (self.settings.canvas_width, self.settings.canvas_height) {
            self.settings.canvas_width = width;
            self.settings.canvas_height = height;
            self.needs_redraw = true;
        }
    }

    /// Color and width a gesture started now would use.
    pub(super) fn stroke_style(&self) -> (Color, f64) {
        match self.tool {
            Tool::Pen => (self.current_color, self.current_width),
            Tool::Eraser => (self.settings.background, self.settings.eraser_width),
        }
    }

    /// Commits the active stroke, if any, and returns to `Idle`.
    ///
    /// Returns `true` when a stroke was added to the frame.
    pub(super) fn finish_gesture(&mut self) -> bool {
        let DrawingState::Drawing { stroke, .. } =
            std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return false;
        };

        self.frame.add_stroke(stroke);
        self.needs_redraw = true;
        log::debug!("Committed stroke #{}", self.frame.len());
        true
    }
}
