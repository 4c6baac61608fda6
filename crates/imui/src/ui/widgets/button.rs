//! Push button

use super::{palette, INTERACTIVE};
use crate::ui::context::UIContext;
use crate::ui::draw::DrawCommand;
use crate::ui::events::UIEvent;
use crate::ui::geometry::Rect;
use crate::ui::id::WidgetId;
use crate::ui::widget::WidgetKind;

impl UIContext {
    /// Declare a button. Returns `true` on the frame a click commits.
    ///
    /// A click is a press on the button followed by a release with the
    /// pointer still inside it.
    pub fn button(&mut self, id: impl Into<WidgetId>, rect: Rect) -> bool {
        let id = id.into();
        let (handle, rect) = self.begin_leaf(id, rect, INTERACTIVE);
        let response = self.interact(id, rect);

        let color = if response.committed {
            palette::button_clicked()
        } else {
            palette::frame(response.state)
        };

        let widget = &mut self.registry[handle];
        widget.kind = WidgetKind::Button;
        widget.draws.push(DrawCommand::rect(rect, color));

        if response.committed {
            log::debug!("Button {:?} clicked", id);
            self.events.push(UIEvent::Clicked(id));
        }

        self.end_widget();
        response.committed
    }
}
