//! Checkbox

use super::{palette, INTERACTIVE};
use crate::ui::context::UIContext;
use crate::ui::draw::DrawCommand;
use crate::ui::events::UIEvent;
use crate::ui::geometry::Rect;
use crate::ui::id::WidgetId;
use crate::ui::widget::WidgetKind;

impl UIContext {
    /// Declare a checkbox bound to `value`
    ///
    /// A committed click flips `value`. Returns whether it flipped this frame.
    pub fn checkbox(&mut self, id: impl Into<WidgetId>, rect: Rect, value: &mut bool) -> bool {
        let id = id.into();
        let (handle, rect) = self.begin_leaf(id, rect, INTERACTIVE);
        let response = self.interact(id, rect);

        if response.committed {
            *value = !*value;
            log::debug!("Checkbox {:?} -> {}", id, *value);
            self.events.push(UIEvent::Toggled { id, checked: *value });
        }

        let indicator = rect.inset(rect.dim.x.min(rect.dim.y) / 4);
        let widget = &mut self.registry[handle];
        widget.kind = WidgetKind::Checkbox { checked: *value };
        widget.draws.push(DrawCommand::rect(rect, palette::frame(response.state)));
        widget.draws.push(DrawCommand::rect(indicator, palette::indicator(*value)));

        self.end_widget();
        response.committed
    }
}
