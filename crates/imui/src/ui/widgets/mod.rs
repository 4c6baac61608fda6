//! Widget behaviors
//!
//! Every interactive widget runs the same skeleton against its rectangle for
//! the current frame:
//!
//! 1. hot/active acquisition only while it is the hover widget from last frame
//! 2. `set_hot` fails while another widget is active
//! 3. a press while hot makes it active
//! 4. a release while active clears active, and commits if the pointer is
//!    still inside
//! 5. if the pointer is inside, it bids for next frame's hover
//!
//! The active widget keeps running step 4 wherever the pointer is, so a drag
//! off the widget still ends with a release.

pub mod button;
pub mod checkbox;
pub mod container;
pub(crate) mod palette;
pub mod slider;

use super::context::UIContext;
use super::geometry::Rect;
use super::id::WidgetId;
use super::layout;
use super::widget::{Layout, WidgetFlags, WidgetHandle};

/// Visual state of an interactive widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    /// Not under the pointer
    #[default]
    Normal,
    /// Hot: would capture a press
    Hovered,
    /// Active: holds the pointer
    Pressed,
}

/// Outcome of running the interaction skeleton for one widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    /// Released inside: the action happens
    pub committed: bool,
    /// State after this frame's interaction
    pub state: WidgetState,
}

/// Flags shared by every clickable leaf
pub(crate) const INTERACTIVE: WidgetFlags = WidgetFlags::CLICKABLE
    .union(WidgetFlags::HOT_ANIMATION)
    .union(WidgetFlags::ACTIVE_ANIMATION);

impl UIContext {
    /// Open a leaf widget and place `declared` inside its parent
    ///
    /// Returns the handle and the resolved rectangle. Leaves must be closed
    /// with `end_widget`.
    pub(crate) fn begin_leaf(&mut self, id: WidgetId, declared: Rect, flags: WidgetFlags) -> (WidgetHandle, Rect) {
        let handle = self.open_widget(id);
        let parent = self.parent_of(handle);
        let rect = layout::resolve(&self.registry, parent, declared);

        let widget = &mut self.registry[handle];
        widget.flags = flags;
        widget.layout = Layout::None;
        widget.pos = rect.pos;
        widget.dim = rect.dim;
        (handle, rect)
    }

    /// Run the hot/active/hover skeleton for `id` at `rect`
    pub(crate) fn interact(&mut self, id: WidgetId, rect: Rect) -> Response {
        let inside = rect.contains(self.input.pointer());
        let mut response = Response::default();

        if self.interaction.is_hover(id) && self.interaction.set_hot(id) && self.input.went_down() {
            self.interaction.set_active(id);
        }

        if self.interaction.is_active(id) && self.input.went_up() {
            response.committed = inside;
            self.interaction.clear_active();
        }

        if inside {
            self.interaction.set_next_hover(id);
        }

        response.state = if self.interaction.is_active(id) {
            WidgetState::Pressed
        } else if self.interaction.is_hot(id) {
            WidgetState::Hovered
        } else {
            WidgetState::Normal
        };
        response
    }
}
