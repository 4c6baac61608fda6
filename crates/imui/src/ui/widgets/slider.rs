//! Horizontal slider

use super::{palette, WidgetState, INTERACTIVE};
use crate::foundation::math::utils;
use crate::ui::context::UIContext;
use crate::ui::draw::DrawCommand;
use crate::ui::events::UIEvent;
use crate::ui::geometry::Rect;
use crate::ui::id::WidgetId;
use crate::ui::widget::WidgetKind;

/// Thumb width in pixels (narrower if the slider itself is narrower)
pub const THUMB_WIDTH: i32 = 8;

impl UIContext {
    /// Declare a slider over the configured default range (`[-1, 1]` unless
    /// changed). Returns whether `value` changed this frame.
    pub fn slider(&mut self, id: impl Into<WidgetId>, rect: Rect, value: &mut f32) -> bool {
        let (min, max) = self.default_slider_range();
        self.slider_range(id, rect, value, min, max)
    }

    /// Declare a slider mapping the rectangle's width onto `[min, max]`
    ///
    /// While the slider holds the pointer, `value` follows the pointer's X
    /// position, clamped to the range even when the pointer leaves the
    /// rectangle.
    pub fn slider_range(&mut self, id: impl Into<WidgetId>, rect: Rect, value: &mut f32, min: f32, max: f32) -> bool {
        let id = id.into();
        let (handle, rect) = self.begin_leaf(id, rect, INTERACTIVE);
        let response = self.interact(id, rect);

        let before = *value;
        if self.interaction.is_active(id) && self.input.is_down() {
            let pointer_x = self.input.pointer().x as f32;
            let t = utils::clamp(
                utils::inverse_lerp(rect.pos.x as f32, rect.max_x() as f32, pointer_x),
                0.0,
                1.0,
            );
            *value = utils::clamp(utils::lerp(min, max, t), min, max);
        }

        let changed = *value != before;
        if changed {
            log::trace!("Slider {:?} -> {}", id, *value);
            self.events.push(UIEvent::ValueChanged { id, value: *value });
        }

        let thumb = thumb_rect(rect, *value, min, max);
        let widget = &mut self.registry[handle];
        widget.kind = WidgetKind::Slider { value: *value };
        widget.draws.push(DrawCommand::rect(rect, palette::frame(response.state)));
        widget.draws.push(DrawCommand::rect(thumb, palette::thumb(response.state == WidgetState::Pressed)));

        self.end_widget();
        changed
    }
}

/// Thumb rectangle for `value` on a track at `track`
fn thumb_rect(track: Rect, value: f32, min: f32, max: f32) -> Rect {
    let width = THUMB_WIDTH.min(track.dim.x);
    let t = utils::clamp(utils::inverse_lerp(min, max, value), 0.0, 1.0);
    let travel = (track.dim.x - width) as f32;
    let x = track.pos.x + (travel * t).round() as i32;
    Rect::new(x, track.pos.y, width, track.dim.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumb_at_ends_of_track() {
        let track = Rect::new(400, 10, 200, 20);
        assert_eq!(thumb_rect(track, -1.0, -1.0, 1.0), Rect::new(400, 10, 8, 20));
        assert_eq!(thumb_rect(track, 1.0, -1.0, 1.0), Rect::new(592, 10, 8, 20));
        assert_eq!(thumb_rect(track, 0.0, -1.0, 1.0), Rect::new(496, 10, 8, 20));
    }

    #[test]
    fn test_thumb_clamped_to_track() {
        let track = Rect::new(0, 0, 100, 10);
        assert_eq!(thumb_rect(track, 5.0, 0.0, 1.0).pos.x, 92);
        assert_eq!(thumb_rect(Rect::new(0, 0, 4, 4), 0.5, 0.0, 1.0).dim.x, 4);
    }
}
