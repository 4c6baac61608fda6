//! Frame tree builder
//!
//! Rebuilds the widget hierarchy every frame from begin/end calls. The links
//! themselves live on the widgets (see [`TreeLinks`](super::widget::TreeLinks));
//! this type only tracks the root and the cursor.

use super::error::{fatal, UsageError};
use super::id::WidgetId;
use super::registry::Registry;
use super::widget::{WidgetFlags, WidgetHandle};

/// Root and cursor of the tree being built this frame
#[derive(Debug, Default)]
pub struct FrameTree {
    root: Option<WidgetHandle>,
    current: Option<WidgetHandle>,
}

impl FrameTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's root and cursor
    pub fn reset(&mut self) {
        self.root = None;
        self.current = None;
    }

    /// Root of this frame's tree; `None` if nothing was declared
    pub fn root(&self) -> Option<WidgetHandle> {
        self.root
    }

    /// Innermost open widget (the root when nothing is open)
    pub fn current(&self) -> Option<WidgetHandle> {
        self.current
    }

    /// Whether a widget other than the root is open
    pub fn has_open_widget(&self) -> bool {
        self.current.is_some() && self.current != self.root
    }

    /// Open widget `id` as the last child of the cursor and make it the cursor
    ///
    /// # Panics
    /// If `id` is [`WidgetId::ROOT`] or was already declared during `frame`.
    pub fn begin(&mut self, registry: &mut Registry, id: WidgetId, frame: u64) -> WidgetHandle {
        if id == WidgetId::ROOT {
            fatal(UsageError::ReservedIdentity);
        }
        if let Some(existing) = registry.handle_of(id) {
            if registry[existing].last_frame == frame {
                fatal(UsageError::DuplicateIdentity(id));
            }
        }

        let parent = self.ensure_root(registry, frame);
        let handle = registry.get_or_create(id);
        registry[handle].last_frame = frame;
        Self::append_child(registry, parent, handle);
        self.current = Some(handle);
        handle
    }

    /// Close the innermost open widget and return it
    ///
    /// # Panics
    /// If no widget is open.
    pub fn end(&mut self, registry: &Registry) -> WidgetHandle {
        let closing = match self.current {
            Some(handle) if Some(handle) != self.root => handle,
            _ => fatal(UsageError::EndWithoutBegin),
        };
        self.current = registry[closing].links.parent;
        closing
    }

    /// Check that every begin was matched by an end
    ///
    /// # Panics
    /// With [`UsageError::UnbalancedWidgets`] otherwise.
    pub fn finish(&self, registry: &Registry) {
        if !self.has_open_widget() {
            return;
        }
        let mut open = 0;
        let mut cursor = self.current;
        while let Some(handle) = cursor {
            if Some(handle) == self.root {
                break;
            }
            open += 1;
            cursor = registry[handle].links.parent;
        }
        let innermost = self.current.map_or(WidgetId::ROOT, |handle| registry[handle].id);
        fatal(UsageError::UnbalancedWidgets { open, innermost });
    }

    fn ensure_root(&mut self, registry: &mut Registry, frame: u64) -> WidgetHandle {
        if let Some(current) = self.current {
            return current;
        }
        let root = registry.get_or_create(WidgetId::ROOT);
        let widget = &mut registry[root];
        widget.last_frame = frame;
        widget.flags = WidgetFlags::CONTAINER;
        self.root = Some(root);
        self.current = Some(root);
        root
    }

    fn append_child(registry: &mut Registry, parent: WidgetHandle, child: WidgetHandle) {
        let previous_last = registry[parent].links.last;
        match previous_last {
            Some(last) => registry[last].links.next = Some(child),
            None => registry[parent].links.first = Some(child),
        }
        let links = &mut registry[child].links;
        links.prev = previous_last;
        links.parent = Some(parent);
        registry[parent].links.last = Some(child);
    }
}

/// Children of a widget in declaration order
pub fn children(registry: &Registry, parent: WidgetHandle) -> Children<'_> {
    Children { registry, next: registry[parent].links.first }
}

/// Iterator returned by [`children`]
pub struct Children<'a> {
    registry: &'a Registry,
    next: Option<WidgetHandle>,
}

impl Iterator for Children<'_> {
    type Item = WidgetHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.next?;
        self.next = self.registry[handle].links.next;
        Some(handle)
    }
}

/// Pre-order traversal (parents before children, siblings in declaration order)
pub fn depth_first(registry: &Registry, root: Option<WidgetHandle>) -> Vec<WidgetHandle> {
    let mut order = Vec::new();
    let mut stack: Vec<WidgetHandle> = root.into_iter().collect();
    while let Some(handle) = stack.pop() {
        order.push(handle);
        let first_child_index = stack.len();
        stack.extend(children(registry, handle));
        stack[first_child_index..].reverse();
    }
    order
}

/// Post-order traversal (children before parents)
pub fn post_order(registry: &Registry, root: Option<WidgetHandle>) -> Vec<WidgetHandle> {
    let mut order = Vec::new();
    let mut stack: Vec<(WidgetHandle, bool)> = root.into_iter().map(|h| (h, false)).collect();
    while let Some((handle, expanded)) = stack.pop() {
        if expanded {
            order.push(handle);
            continue;
        }
        stack.push((handle, true));
        let first_child_index = stack.len();
        stack.extend(children(registry, handle).map(|child| (child, false)));
        stack[first_child_index..].reverse();
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(registry: &Registry, handles: &[WidgetHandle]) -> Vec<u64> {
        handles.iter().map(|&h| registry[h].id.raw()).collect()
    }

    #[test]
    fn test_nested_build() {
        let mut registry = Registry::new();
        let mut tree = FrameTree::new();

        let window = tree.begin(&mut registry, WidgetId::new(0), 1);
        let a = tree.begin(&mut registry, WidgetId::new(1), 1);
        tree.end(&registry);
        let b = tree.begin(&mut registry, WidgetId::new(2), 1);
        tree.end(&registry);
        tree.end(&registry);
        tree.finish(&registry);

        let root = tree.root().unwrap();
        assert_eq!(registry[root].id, WidgetId::ROOT);
        assert_eq!(tree.current(), Some(root));
        assert_eq!(registry[window].links.parent, Some(root));
        assert_eq!(registry[window].links.first, Some(a));
        assert_eq!(registry[window].links.last, Some(b));
        assert_eq!(registry[a].links.next, Some(b));
        assert_eq!(registry[b].links.prev, Some(a));
        assert!(registry[a].links.prev.is_none());
        assert!(registry[b].links.next.is_none());
        assert_eq!(children(&registry, window).collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn test_traversal_orders() {
        let mut registry = Registry::new();
        let mut tree = FrameTree::new();
        tree.begin(&mut registry, WidgetId::new(0), 1);
        tree.begin(&mut registry, WidgetId::new(1), 1);
        tree.end(&registry);
        tree.end(&registry);
        tree.begin(&mut registry, WidgetId::new(2), 1);
        tree.end(&registry);

        let pre = depth_first(&registry, tree.root());
        assert_eq!(ids(&registry, &pre[1..]), vec![0, 1, 2]);
        let post = post_order(&registry, tree.root());
        assert_eq!(ids(&registry, &post[..3]), vec![1, 0, 2]);
        assert_eq!(post.last().copied(), tree.root());
    }

    #[test]
    fn test_conditional_children_rebuild() {
        let mut registry = Registry::new();
        let mut tree = FrameTree::new();
        let parent = tree.begin(&mut registry, WidgetId::new(0), 1);
        tree.begin(&mut registry, WidgetId::new(1), 1);
        tree.end(&registry);
        tree.end(&registry);

        tree.reset();
        tree.begin(&mut registry, WidgetId::new(0), 2);
        tree.end(&registry);
        tree.finish(&registry);

        assert_eq!(children(&registry, parent).count(), 0);
    }

    #[test]
    fn test_empty_frame_has_no_root() {
        let registry = Registry::new();
        let tree = FrameTree::new();
        tree.finish(&registry);
        assert!(tree.root().is_none());
        assert!(depth_first(&registry, tree.root()).is_empty());
    }

    #[test]
    #[should_panic(expected = "end_widget called with no open widget")]
    fn test_end_without_begin() {
        let registry = Registry::new();
        let mut tree = FrameTree::new();
        tree.end(&registry);
    }

    #[test]
    #[should_panic(expected = "still open at end of frame")]
    fn test_unbalanced_detected() {
        let mut registry = Registry::new();
        let mut tree = FrameTree::new();
        tree.begin(&mut registry, WidgetId::new(0), 1);
        tree.begin(&mut registry, WidgetId::new(1), 1);
        tree.end(&registry);
        tree.finish(&registry);
    }

    #[test]
    #[should_panic(expected = "declared twice")]
    fn test_duplicate_identity_in_frame() {
        let mut registry = Registry::new();
        let mut tree = FrameTree::new();
        tree.begin(&mut registry, WidgetId::new(5), 1);
        tree.end(&registry);
        tree.begin(&mut registry, WidgetId::new(5), 1);
    }
}
