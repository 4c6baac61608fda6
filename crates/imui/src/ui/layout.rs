//! Layout
//!
//! Placement happens while widgets are declared: a column or row container
//! hands out slots from its `offset` cursor, so a child's rectangle is known
//! by the time its hit test runs. Sizing happens afterwards: once the tree is
//! complete, [`run`] walks it bottom-up and computes every container's `dim`
//! from its children.

use super::geometry::Rect;
use super::registry::Registry;
use super::tree::{children, post_order};
use super::widget::{Layout, Widget, WidgetHandle};
use crate::foundation::math::{v2i, Vec2i};

/// Cursor value for an empty container
pub fn initial_offset(layout: Layout, margin: i32) -> Vec2i {
    match layout {
        Layout::Column | Layout::Row => v2i(margin, margin),
        Layout::None | Layout::Grid => Vec2i::zeros(),
    }
}

/// Resolve where a child declared with `declared` goes inside `parent`
///
/// In a column or row the declared position is a displacement from the next
/// free slot; elsewhere it is absolute.
pub fn resolve(registry: &Registry, parent: WidgetHandle, declared: Rect) -> Rect {
    let parent = &registry[parent];
    match parent.layout {
        Layout::Column | Layout::Row => declared.translated(parent.pos + parent.offset),
        Layout::None | Layout::Grid => declared,
    }
}

/// Move `parent`'s cursor past a child of size `dim`
pub fn advance(registry: &mut Registry, parent: WidgetHandle, dim: Vec2i, margin: i32) {
    let parent = &mut registry[parent];
    match parent.layout {
        Layout::Column => parent.offset.y += dim.y + margin,
        Layout::Row => parent.offset.x += dim.x + margin,
        Layout::None | Layout::Grid => {}
    }
}

/// Size of a container from its children
///
/// - column: widest child + 2·margin by Σ heights + margin·(n+1)
/// - row: the same with axes swapped
/// - none / grid: bounding box of the children relative to the container
///   position, plus margin
pub fn measure(registry: &Registry, container: WidgetHandle, margin: i32) -> Vec2i {
    let widget = &registry[container];
    let kids: Vec<&Widget> =
        children(registry, container).map(|child| &registry[child]).collect();
    let count = kids.len() as i32;

    match widget.layout {
        Layout::Column => {
            let width = kids.iter().map(|k| k.dim.x).max().unwrap_or(0);
            let height: i32 = kids.iter().map(|k| k.dim.y).sum();
            v2i(width + 2 * margin, height + margin * (count + 1))
        }
        Layout::Row => {
            let width: i32 = kids.iter().map(|k| k.dim.x).sum();
            let height = kids.iter().map(|k| k.dim.y).max().unwrap_or(0);
            v2i(width + margin * (count + 1), height + 2 * margin)
        }
        Layout::None | Layout::Grid => {
            if kids.is_empty() {
                return Vec2i::zeros();
            }
            let extent = kids.iter().fold(Vec2i::zeros(), |acc, k| {
                let far = k.pos + k.dim - widget.pos;
                v2i(acc.x.max(far.x), acc.y.max(far.y))
            });
            v2i(extent.x.max(0) + margin, extent.y.max(0) + margin)
        }
    }
}

/// Layout pass: size every container, children first
pub fn run(registry: &mut Registry, root: Option<WidgetHandle>, margin: i32) {
    for handle in post_order(registry, root) {
        if registry[handle].is_container() {
            let dim = measure(registry, handle, margin);
            registry[handle].dim = dim;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::id::WidgetId;
    use crate::ui::tree::FrameTree;
    use crate::ui::widget::WidgetFlags;

    const MARGIN: i32 = 4;

    fn container(registry: &mut Registry, tree: &mut FrameTree, raw: u64, pos: Vec2i, layout: Layout) -> WidgetHandle {
        let handle = tree.begin(registry, WidgetId::new(raw), 1);
        let widget = &mut registry[handle];
        widget.flags = WidgetFlags::CONTAINER;
        widget.layout = layout;
        widget.pos = pos;
        widget.offset = initial_offset(layout, MARGIN);
        handle
    }

    fn leaf(registry: &mut Registry, tree: &mut FrameTree, raw: u64, declared: Rect) -> Rect {
        let parent = tree.current().unwrap();
        let handle = tree.begin(registry, WidgetId::new(raw), 1);
        let rect = resolve(registry, parent, declared);
        registry[handle].pos = rect.pos;
        registry[handle].dim = rect.dim;
        advance(registry, parent, rect.dim, MARGIN);
        tree.end(registry);
        rect
    }

    #[test]
    fn test_column_stacks_and_sizes() {
        let mut registry = Registry::new();
        let mut tree = FrameTree::new();
        let window = container(&mut registry, &mut tree, 0, v2i(10, 10), Layout::Column);
        let first = leaf(&mut registry, &mut tree, 1, Rect::new(0, 0, 100, 20));
        let second = leaf(&mut registry, &mut tree, 2, Rect::new(0, 0, 60, 30));
        tree.end(&registry);

        assert_eq!(first.pos, v2i(14, 14));
        assert_eq!(second.pos, v2i(14, 38));

        run(&mut registry, tree.root(), MARGIN);
        assert_eq!(registry[window].dim, v2i(108, 62));
    }

    #[test]
    fn test_row_stacks_horizontally() {
        let mut registry = Registry::new();
        let mut tree = FrameTree::new();
        let window = container(&mut registry, &mut tree, 0, v2i(0, 0), Layout::Row);
        let first = leaf(&mut registry, &mut tree, 1, Rect::new(0, 0, 50, 20));
        let second = leaf(&mut registry, &mut tree, 2, Rect::new(0, 2, 50, 40));
        tree.end(&registry);

        assert_eq!(first.pos, v2i(4, 4));
        assert_eq!(second.pos, v2i(58, 6));

        run(&mut registry, tree.root(), MARGIN);
        assert_eq!(registry[window].dim, v2i(112, 48));
    }

    #[test]
    fn test_free_layout_uses_bounding_box() {
        let mut registry = Registry::new();
        let mut tree = FrameTree::new();
        let window = container(&mut registry, &mut tree, 0, v2i(100, 100), Layout::None);
        let placed = leaf(&mut registry, &mut tree, 1, Rect::new(120, 110, 50, 50));
        tree.end(&registry);

        assert_eq!(placed, Rect::new(120, 110, 50, 50));
        run(&mut registry, tree.root(), MARGIN);
        assert_eq!(registry[window].dim, v2i(74, 64));
    }

    #[test]
    fn test_grid_behaves_like_none() {
        let mut registry = Registry::new();
        let mut tree = FrameTree::new();
        container(&mut registry, &mut tree, 0, v2i(0, 0), Layout::Grid);
        let placed = leaf(&mut registry, &mut tree, 1, Rect::new(5, 5, 10, 10));
        tree.end(&registry);
        assert_eq!(placed, Rect::new(5, 5, 10, 10));
    }

    #[test]
    fn test_nested_containers_sized_bottom_up() {
        let mut registry = Registry::new();
        let mut tree = FrameTree::new();
        let outer = container(&mut registry, &mut tree, 0, v2i(0, 0), Layout::Column);
        let inner = container(&mut registry, &mut tree, 1, v2i(4, 4), Layout::Row);
        leaf(&mut registry, &mut tree, 2, Rect::new(0, 0, 10, 10));
        leaf(&mut registry, &mut tree, 3, Rect::new(0, 0, 10, 10));
        tree.end(&registry);
        tree.end(&registry);

        run(&mut registry, tree.root(), MARGIN);
        assert_eq!(registry[inner].dim, v2i(32, 18));
        assert_eq!(registry[outer].dim, v2i(40, 26));
    }

    #[test]
    fn test_empty_column_is_margins_only() {
        let mut registry = Registry::new();
        let mut tree = FrameTree::new();
        let window = container(&mut registry, &mut tree, 0, v2i(0, 0), Layout::Column);
        tree.end(&registry);
        run(&mut registry, tree.root(), MARGIN);
        assert_eq!(registry[window].dim, v2i(8, 4));
    }
}
