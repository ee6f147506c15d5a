use crate::draw::{Color, color::*};
use crate::input::{
    events::Action,
    tool::{Tool, WidthPreset},
};

use super::{DrawingSession, DrawingState};

impl DrawingSession {
    /// Removes every committed stroke and discards any in-progress gesture.
    ///
    /// Idempotent.
    pub fn clear(&mut self) {
        if self.frame.is_empty() && !self.is_drawing() {
            return;
        }
        log::info!("Clearing {} stroke(s)", self.frame.len());
        self.frame.clear();
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
    }

    /// Removes the most recently committed stroke.
    ///
    /// No-op when nothing is committed or while a gesture is in progress.
    /// Returns `true` if a stroke was removed.
    pub fn undo(&mut self) -> bool {
        if self.is_drawing() {
            log::debug!("Undo ignored during an active gesture");
            return false;
        }
        if self.frame.undo().is_some() {
            self.needs_redraw = true;
            true
        } else {
            false
        }
    }

    /// Selects the tool for subsequent gestures.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::debug!("Tool changed: {:?} -> {:?}", self.tool, tool);
            self.tool = tool;
            self.needs_redraw = true;
        }
    }

    /// Switches between pen and eraser.
    pub fn toggle_eraser(&mut self) {
        let next = match self.tool {
            Tool::Pen => Tool::Eraser,
            Tool::Eraser => Tool::Pen,
        };
        self.set_tool(next);
    }

    /// Sets the pen color for subsequent gestures.
    pub fn set_color(&mut self, color: Color) {
        if self.current_color != color {
            self.current_color = color;
            self.needs_redraw = true;
        }
    }

    /// Sets the pen width for subsequent gestures, clamped to the configured range.
    ///
    /// Non-finite widths are ignored.
    pub fn set_width(&mut self, width: f64) {
        if !width.is_finite() {
            log::warn!("Ignoring non-finite pen width {width}");
            return;
        }
        let clamped = width.clamp(self.settings.min_width, self.settings.max_width);
        if clamped != width {
            log::warn!("Pen width {width:.1} out of range, using {clamped:.1}");
        }
        if self.current_width != clamped {
            self.current_width = clamped;
            self.needs_redraw = true;
        }
    }

    /// Sets the pen width to one of the small / medium / large presets.
    pub fn select_width_preset(&mut self, preset: WidthPreset) {
        self.set_width(self.settings.width_presets[preset.index()]);
    }

    /// Handles a toolbar or style-selector control.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Clear => self.clear(),
            Action::Undo => {
                self.undo();
            }
            Action::SelectPen => self.set_tool(Tool::Pen),
            Action::SelectEraser => self.set_tool(Tool::Eraser),
            Action::ToggleEraser => self.toggle_eraser(),
            Action::SetColorBlack => self.set_color(BLACK),
            Action::SetColorWhite => self.set_color(WHITE),
            Action::SetColorRed => self.set_color(RED),
            Action::SetColorOrange => self.set_color(ORANGE),
            Action::SetColorBlue => self.set_color(BLUE),
            Action::SetWidthSmall => self.select_width_preset(WidthPreset::Small),
            Action::SetWidthMedium => self.select_width_preset(WidthPreset::Medium),
            Action::SetWidthLarge => self.select_width_preset(WidthPreset::Large),
            Action::Save => {
                // Saving needs the host's save manager; park the request for it
                log::debug!("Save requested");
                self.save_requested = true;
            }
        }
    }
}
