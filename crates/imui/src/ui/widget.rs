//! Persistent widget record

use bitflags::bitflags;
use slotmap::new_key_type;

use super::draw::DrawCommand;
use super::id::WidgetId;
use crate::foundation::math::Vec2i;

new_key_type! {
    /// Stable handle to a widget in the registry arena
    pub struct WidgetHandle;
}

bitflags! {
    /// Orthogonal widget capabilities
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WidgetFlags: u32 {
        /// Reacts to pointer presses
        const CLICKABLE        = 1 << 0;
        /// Container paints its background after layout
        const DRAW_BACKGROUND  = 1 << 1;
        /// Lays out children
        const CONTAINER        = 1 << 2;
        /// Children are clipped to the container (not enforced by the core)
        const CLIPPING         = 1 << 3;
        /// Shows hot feedback
        const HOT_ANIMATION    = 1 << 4;
        /// Shows active feedback
        const ACTIVE_ANIMATION = 1 << 5;
    }
}

/// How a container places its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Children use their declared rectangles as-is
    #[default]
    None,
    /// Children stacked top to bottom
    Column,
    /// Children stacked left to right
    Row,
    /// Reserved; currently behaves like `None`
    Grid,
}

/// What the widget was last declared as
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WidgetKind {
    /// Not declared through a behavior yet (plain `begin_widget`)
    #[default]
    Plain,
    /// Window or panel holding children
    Container,
    /// Push button
    Button,
    /// Toggle with its last seen value
    Checkbox {
        /// Value after this frame's interaction
        checked: bool,
    },
    /// Horizontal slider with its last seen value
    Slider {
        /// Value after this frame's interaction
        value: f32,
    },
}

/// Frame-local hierarchy links. Rebuilt every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeLinks {
    /// Enclosing widget
    pub parent: Option<WidgetHandle>,
    /// First child in declaration order
    pub first: Option<WidgetHandle>,
    /// Last child in declaration order
    pub last: Option<WidgetHandle>,
    /// Next sibling
    pub next: Option<WidgetHandle>,
    /// Previous sibling
    pub prev: Option<WidgetHandle>,
}

/// Widget state that survives across frames
#[derive(Debug, Clone)]
pub struct Widget {
    /// Caller-supplied identity
    pub id: WidgetId,
    /// Capabilities
    pub flags: WidgetFlags,
    /// Child placement mode
    pub layout: Layout,
    /// Last declared kind
    pub kind: WidgetKind,
    /// Resolved top-left position this frame
    pub pos: Vec2i,
    /// Size; computed by the layout pass for containers
    pub dim: Vec2i,
    /// Placement cursor for the next child, relative to `pos`
    pub offset: Vec2i,
    /// Hierarchy links for the current frame
    pub links: TreeLinks,
    /// Frame number of the last declaration
    pub last_frame: u64,
    /// Commands recorded this frame, painted in tree order
    pub draws: Vec<DrawCommand>,
}

impl Widget {
    /// Fresh widget with everything zeroed
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            flags: WidgetFlags::empty(),
            layout: Layout::None,
            kind: WidgetKind::Plain,
            pos: Vec2i::zeros(),
            dim: Vec2i::zeros(),
            offset: Vec2i::zeros(),
            links: TreeLinks::default(),
            last_frame: 0,
            draws: Vec::new(),
        }
    }

    /// Drop last frame's links and recorded commands
    pub fn reset_frame_state(&mut self) {
        self.links = TreeLinks::default();
        self.offset = Vec2i::zeros();
        self.draws.clear();
    }

    /// Whether this widget lays out children
    pub fn is_container(&self) -> bool {
        self.flags.contains(WidgetFlags::CONTAINER)
    }
}
