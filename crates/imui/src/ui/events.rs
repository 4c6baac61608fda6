//! Interactions committed during a frame

use super::id::WidgetId;

/// Something a widget did this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UIEvent {
    /// Button click committed
    Clicked(WidgetId),
    /// Checkbox toggled
    Toggled {
        /// Checkbox identity
        id: WidgetId,
        /// New value
        checked: bool,
    },
    /// Slider value changed
    ValueChanged {
        /// Slider identity
        id: WidgetId,
        /// New value
        value: f32,
    },
}

impl UIEvent {
    /// Widget that produced the event
    pub fn widget(&self) -> WidgetId {
        match *self {
            UIEvent::Clicked(id) => id,
            UIEvent::Toggled { id, .. } | UIEvent::ValueChanged { id, .. } => id,
        }
    }
}
