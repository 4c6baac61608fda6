//! Widget registry
//!
//! Owns every widget ever declared. Widgets live in a slot-map arena so the
//! tree can refer to them by handle; an identity map finds the handle.

use std::collections::HashMap;

use slotmap::SlotMap;

use super::id::WidgetId;
use super::widget::{Widget, WidgetHandle};

/// Persistent identity → widget store
#[derive(Debug, Default)]
pub struct Registry {
    widgets: SlotMap<WidgetHandle, Widget>,
    by_id: HashMap<WidgetId, WidgetHandle>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `id`, creating a zeroed widget on first use
    ///
    /// An existing widget has its frame-local state reset, since last frame's
    /// links are stale by the time it is declared again.
    pub fn get_or_create(&mut self, id: WidgetId) -> WidgetHandle {
        if let Some(&handle) = self.by_id.get(&id) {
            self.widgets[handle].reset_frame_state();
            return handle;
        }

        let handle = self.widgets.insert(Widget::new(id));
        self.by_id.insert(id, handle);
        log::debug!("Created widget {:?} ({} registered)", id, self.widgets.len());
        handle
    }

    /// Handle for `id`, if it was ever declared
    pub fn handle_of(&self, id: WidgetId) -> Option<WidgetHandle> {
        self.by_id.get(&id).copied()
    }

    /// Widget by handle
    pub fn get(&self, handle: WidgetHandle) -> Option<&Widget> {
        self.widgets.get(handle)
    }

    /// Mutable widget by handle
    pub fn get_mut(&mut self, handle: WidgetHandle) -> Option<&mut Widget> {
        self.widgets.get_mut(handle)
    }

    /// Widget by identity
    pub fn find(&self, id: WidgetId) -> Option<&Widget> {
        self.handle_of(id).and_then(|handle| self.widgets.get(handle))
    }

    /// Number of registered widgets
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// All widgets, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (WidgetHandle, &Widget)> {
        self.widgets.iter()
    }

    /// Free every widget. Calling it again is a no-op.
    pub fn release_all(&mut self) {
        if self.widgets.is_empty() {
            return;
        }
        log::debug!("Releasing {} widgets", self.widgets.len());
        self.widgets.clear();
        self.by_id.clear();
    }
}

impl std::ops::Index<WidgetHandle> for Registry {
    type Output = Widget;

    fn index(&self, handle: WidgetHandle) -> &Widget {
        &self.widgets[handle]
    }
}

impl std::ops::IndexMut<WidgetHandle> for Registry {
    fn index_mut(&mut self, handle: WidgetHandle) -> &mut Widget {
        &mut self.widgets[handle]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::v2i;
    use crate::ui::widget::WidgetFlags;

    #[test]
    fn test_same_id_same_widget() {
        let mut registry = Registry::new();
        let a = registry.get_or_create(WidgetId::new(1));
        registry[a].flags = WidgetFlags::CLICKABLE;
        registry[a].dim = v2i(10, 10);

        let again = registry.get_or_create(WidgetId::new(1));
        assert_eq!(a, again);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry[again].flags, WidgetFlags::CLICKABLE);
        assert_eq!(registry[again].dim, v2i(10, 10));
    }

    #[test]
    fn test_distinct_ids_never_alias() {
        let mut registry = Registry::new();
        let a = registry.get_or_create(WidgetId::new(1));
        let b = registry.get_or_create(WidgetId::new(2));
        assert_ne!(a, b);
        assert_eq!(registry.handle_of(WidgetId::new(2)), Some(b));
        assert!(registry.handle_of(WidgetId::new(3)).is_none());
    }

    #[test]
    fn test_lookup_clears_links() {
        let mut registry = Registry::new();
        let a = registry.get_or_create(WidgetId::new(1));
        let b = registry.get_or_create(WidgetId::new(2));
        registry[a].links.first = Some(b);
        registry[a].links.parent = Some(b);

        registry.get_or_create(WidgetId::new(1));
        assert!(registry[a].links.first.is_none());
        assert!(registry[a].links.parent.is_none());
    }

    #[test]
    fn test_release_all_is_idempotent() {
        let mut registry = Registry::new();
        registry.get_or_create(WidgetId::new(1));
        registry.get_or_create(WidgetId::new(2));
        registry.release_all();
        assert!(registry.is_empty());
        registry.release_all();
        assert!(registry.find(WidgetId::new(1)).is_none());
    }
}
