//! UI error types
//!
//! [`UIError`] covers the few things that can fail at runtime (backend
//! submission, configuration). [`UsageError`] describes programming mistakes;
//! those are never returned, the UI panics with the message instead.

use thiserror::Error;

use super::id::WidgetId;
use crate::config::ConfigError;

/// Recoverable UI errors
#[derive(Error, Debug)]
pub enum UIError {
    /// The render backend rejected a frame
    #[error("Render backend error: {0}")]
    Backend(Box<dyn std::error::Error>),

    /// Invalid or unreadable configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Misuse of the frame protocol. Always fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// `end_widget` with no widget open
    #[error("end_widget called with no open widget")]
    EndWithoutBegin,

    /// Frame ended with widgets still open
    #[error("unbalanced begin/end: {open} widget(s) still open at end of frame (innermost {innermost:?})")]
    UnbalancedWidgets {
        /// Number of widgets left open
        open: usize,
        /// Identity of the innermost open widget
        innermost: WidgetId,
    },

    /// Same identity declared twice in one frame
    #[error("widget {0:?} declared twice in the same frame")]
    DuplicateIdentity(WidgetId),

    /// `WidgetId::ROOT` used by application code
    #[error("WidgetId::ROOT is reserved for the tree root")]
    ReservedIdentity,

    /// Draw buffer full under `OverflowPolicy::Abort`
    #[error("draw command buffer overflow (capacity {capacity})")]
    DrawBufferOverflow {
        /// Configured capacity
        capacity: usize,
    },

    /// `begin_frame` while a frame is still open
    #[error("begin_frame called while frame {0} is still open")]
    FrameAlreadyOpen(u64),

    /// Declaration or `end_frame` outside `begin_frame`/`end_frame`
    #[error("no frame is open; call begin_frame first")]
    NoOpenFrame,

    /// `render` between `begin_frame` and `end_frame`
    #[error("render called while frame {0} is still open")]
    RenderDuringFrame(u64),
}

/// Abort on a usage error
#[cold]
#[track_caller]
pub(crate) fn fatal(error: UsageError) -> ! {
    log::error!("UI usage error: {error}");
    panic!("{error}");
}
