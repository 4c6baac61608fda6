//! Containers (windows, panels)

use crate::foundation::math::Vec2i;
use crate::ui::context::UIContext;
use crate::ui::geometry::Rect;
use crate::ui::id::WidgetId;
use crate::ui::layout;
use crate::ui::widget::{Layout, WidgetFlags, WidgetHandle, WidgetKind};

impl UIContext {
    /// Open a container at `pos` that places its children with `layout`
    ///
    /// Inside a column or row `pos` is a displacement from the parent's next
    /// free slot. The container's size is computed from its children after the
    /// frame is declared, and its background is painted behind them.
    pub fn begin_container(&mut self, id: impl Into<WidgetId>, pos: Vec2i, layout: Layout) -> WidgetHandle {
        let handle = self.open_widget(id.into());
        let parent = self.parent_of(handle);
        let placed = layout::resolve(&self.registry, parent, Rect::from_pos_dim(pos, Vec2i::zeros()));
        let margin = self.layout_margin();

        let widget = &mut self.registry[handle];
        widget.flags = WidgetFlags::CONTAINER | WidgetFlags::DRAW_BACKGROUND;
        widget.layout = layout;
        widget.kind = WidgetKind::Container;
        widget.pos = placed.pos;
        widget.offset = layout::initial_offset(layout, margin);
        handle
    }

    /// Close the innermost container
    pub fn end_container(&mut self) {
        self.end_widget();
    }
}
