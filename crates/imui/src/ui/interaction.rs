//! Hot / active / hover bookkeeping
//!
//! - `hot`: the widget that would start an interaction if pressed now.
//! - `active`: the widget that captured the current press.
//! - `hover`: what the pointer was over according to *last* frame's hit tests.
//! - `next_hover`: what it is over according to this frame's hit tests.
//!
//! `hover` lags one frame behind on purpose: hit testing happens in
//! declaration order, so the final answer for a frame is only known once
//! every widget has been declared.

use super::id::WidgetId;

/// Interaction state of one UI surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    hot: Option<WidgetId>,
    active: Option<WidgetId>,
    hover: Option<WidgetId>,
    next_hover: Option<WidgetId>,
}

impl InteractionState {
    /// Nothing hot, active or hovered
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hot widget
    pub fn hot(&self) -> Option<WidgetId> {
        self.hot
    }

    /// Current active widget
    pub fn active(&self) -> Option<WidgetId> {
        self.active
    }

    /// Widget under the pointer as of the start of this frame
    pub fn hover(&self) -> Option<WidgetId> {
        self.hover
    }

    /// Widget under the pointer as seen so far this frame
    pub fn next_hover(&self) -> Option<WidgetId> {
        self.next_hover
    }

    /// Whether `id` is hot
    pub fn is_hot(&self, id: WidgetId) -> bool {
        self.hot == Some(id)
    }

    /// Whether `id` is active
    pub fn is_active(&self, id: WidgetId) -> bool {
        self.active == Some(id)
    }

    /// Whether `id` was hovered as of the start of this frame
    pub fn is_hover(&self, id: WidgetId) -> bool {
        self.hover == Some(id)
    }

    /// Make `id` hot unless some widget is active. Returns whether `id` is hot.
    pub fn set_hot(&mut self, id: WidgetId) -> bool {
        if self.active.is_none() && self.hot != Some(id) {
            log::trace!("hot -> {id:?}");
            self.hot = Some(id);
        }
        self.is_hot(id)
    }

    /// Capture the pointer for `id`
    pub fn set_active(&mut self, id: WidgetId) {
        log::trace!("active -> {id:?}");
        self.active = Some(id);
    }

    /// Release the capture
    pub fn clear_active(&mut self) {
        if let Some(id) = self.active.take() {
            log::trace!("active released by {id:?}");
        }
    }

    /// Record that the pointer is inside `id` this frame; later calls win
    pub fn set_next_hover(&mut self, id: WidgetId) {
        self.next_hover = Some(id);
    }

    /// Promote `next_hover` and drop a stale hot widget
    ///
    /// Hot is cleared when nothing is active and the pointer is no longer
    /// over the hot widget.
    pub fn end_frame(&mut self) {
        self.hover = self.next_hover.take();
        if self.active.is_none() && self.hot.is_some() && self.hot != self.hover {
            log::trace!("hot cleared (was {:?})", self.hot);
            self.hot = None;
        }
    }

    /// Forget everything, e.g. when the UI surface is torn down
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
