//! UI input state
//!
//! Level state (`is_down`) follows raw events as they arrive. Edge flags
//! (`went_down`, `went_up`) are derived once per frame by comparing the level
//! against the level latched at the end of the previous frame, so a transition
//! is visible for exactly one frame no matter how long the button is held.

use crate::foundation::math::{v2i, Vec2i};

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Raw event delivered by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved to a pixel position
    PointerMoved {
        /// X in pixels from the left edge
        x: i32,
        /// Y in pixels from the top edge
        y: i32,
    },
    /// Button pressed
    ButtonPressed(MouseButton),
    /// Button released
    ButtonReleased(MouseButton),
}

/// Pointer state as seen by widgets
#[derive(Debug, Clone)]
pub struct InputState {
    pointer: Vec2i,
    is_down: bool,
    went_down: bool,
    went_up: bool,
    /// Level at the start of event processing for the current frame
    was_down: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Pointer at the origin, button up
    pub fn new() -> Self {
        Self {
            pointer: v2i(0, 0),
            is_down: false,
            went_down: false,
            went_up: false,
            was_down: false,
        }
    }

    /// Apply one raw event. Only the left button drives widgets.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMoved { x, y } => self.pointer = v2i(x, y),
            InputEvent::ButtonPressed(MouseButton::Left) => self.is_down = true,
            InputEvent::ButtonReleased(MouseButton::Left) => self.is_down = false,
            InputEvent::ButtonPressed(_) | InputEvent::ButtonReleased(_) => {}
        }
    }

    /// Derive this frame's edge flags from the level latched last frame
    pub fn resolve_edges(&mut self) {
        self.went_down = !self.was_down && self.is_down;
        self.went_up = self.was_down && !self.is_down;
    }

    /// Clear edge flags and latch the level for the next frame
    pub fn end_frame(&mut self) {
        self.went_down = false;
        self.went_up = false;
        self.was_down = self.is_down;
    }

    /// Pointer position in pixels
    pub fn pointer(&self) -> Vec2i {
        self.pointer
    }

    /// Button held
    pub fn is_down(&self) -> bool {
        self.is_down
    }

    /// Button not held
    pub fn is_up(&self) -> bool {
        !self.is_down
    }

    /// Button pressed this frame
    pub fn went_down(&self) -> bool {
        self.went_down
    }

    /// Button released this frame
    pub fn went_up(&self) -> bool {
        self.went_up
    }
}
