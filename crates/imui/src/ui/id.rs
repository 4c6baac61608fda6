//! Widget identity
//!
//! A [`WidgetId`] is whatever token the caller uses to say "this is the same
//! widget as last frame". The UI never derives it from the widget's contents,
//! it only compares it.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stable, caller-supplied identity of a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Identity of the synthetic root every frame's tree hangs from
    pub const ROOT: WidgetId = WidgetId(u64::MAX);

    /// Create an identity from a raw value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Hash a label into an identity
    ///
    /// The result is stable for the lifetime of the process, which is all the
    /// UI needs. Do not persist it.
    pub fn from_label(label: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        label.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Derive a child identity, e.g. for widgets declared in a loop
    pub fn with_index(self, index: usize) -> Self {
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        index.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Raw value
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for WidgetId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<&str> for WidgetId {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}
