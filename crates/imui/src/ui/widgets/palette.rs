//! Fixed widget colors

use super::WidgetState;
use crate::foundation::math::{rgba, Vec4};

/// Window / panel background
pub fn container_background() -> Vec4 {
    rgba(0.12, 0.12, 0.14, 0.92)
}

/// Button at rest
pub fn button_idle() -> Vec4 {
    rgba(0.25, 0.27, 0.32, 1.0)
}

/// Button under the pointer
pub fn button_hot() -> Vec4 {
    rgba(0.35, 0.38, 0.45, 1.0)
}

/// Button held down
pub fn button_active() -> Vec4 {
    rgba(0.18, 0.20, 0.24, 1.0)
}

/// Button on the frame its click committed
pub fn button_clicked() -> Vec4 {
    rgba(0.30, 0.55, 0.85, 1.0)
}

/// Background for a widget in `state`
pub fn frame(state: WidgetState) -> Vec4 {
    match state {
        WidgetState::Normal => button_idle(),
        WidgetState::Hovered => button_hot(),
        WidgetState::Pressed => button_active(),
    }
}

/// Checkbox indicator
pub fn indicator(checked: bool) -> Vec4 {
    if checked {
        rgba(0.30, 0.55, 0.85, 1.0)
    } else {
        rgba(0.08, 0.08, 0.10, 1.0)
    }
}

/// Slider thumb
pub fn thumb(active: bool) -> Vec4 {
    if active {
        rgba(0.45, 0.70, 0.95, 1.0)
    } else {
        rgba(0.70, 0.72, 0.78, 1.0)
    }
}
