//! Frame-level scenario tests
//!
//! These drive a whole `UIContext` through scripted frames, the way a
//! windowing loop would.

mod widgets;

use crate::ui::context::UIContext;
use crate::ui::input::{InputEvent, MouseButton};

pub(super) const DT: f32 = 1.0 / 60.0;

pub(super) const DOWN: InputEvent = InputEvent::ButtonPressed(MouseButton::Left);
pub(super) const UP: InputEvent = InputEvent::ButtonReleased(MouseButton::Left);

pub(super) fn move_to(x: i32, y: i32) -> InputEvent {
    InputEvent::PointerMoved { x, y }
}

/// Deliver `events`, then run one full frame with `body` as the declarations
pub(super) fn frame<R>(ui: &mut UIContext, events: &[InputEvent], body: impl FnOnce(&mut UIContext) -> R) -> R {
    ui.handle_events(events.iter().copied());
    ui.begin_frame(DT);
    let result = body(ui);
    ui.end_frame();
    result
}
