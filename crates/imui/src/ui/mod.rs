//! UI System Module
//!
//! Immediate-mode widgets over a retained registry.
//!
//! Architecture:
//! - UIContext: frame protocol, owns all state for one UI surface
//! - registry / tree: persistent widget records and the per-frame hierarchy
//! - input / interaction: pointer edges and hot/active/hover tracking
//! - widgets/: button, checkbox, slider and container behaviors
//! - layout: placement during declaration, sizing after it
//! - draw / backend: the command buffer and the renderer interface

pub mod backend;
pub mod context;
pub mod draw;
pub mod error;
pub mod events;
pub mod geometry;
pub mod id;
pub mod input;
pub mod interaction;
pub mod layout;
pub mod registry;
pub mod tree;
pub mod widget;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use backend::{RecordingBackend, UIRenderBackend};
pub use context::{FrameStats, UIContext};
pub use draw::{DrawBuffer, DrawCommand, OverflowPolicy};
pub use error::{UIError, UsageError};
pub use events::UIEvent;
pub use geometry::{rect_mesh, Rect, RectMesh, RectVertex};
pub use id::WidgetId;
pub use input::{InputEvent, InputState, MouseButton};
pub use interaction::InteractionState;
pub use widget::{Layout, Widget, WidgetFlags, WidgetHandle, WidgetKind};
pub use widgets::{Response, WidgetState};
