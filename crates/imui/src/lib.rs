//! # imui
//!
//! An immediate-mode UI core: application code declares widgets every frame,
//! the context keeps the little state that has to survive between frames and
//! turns each frame into a list of colored rectangles for a renderer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use imui::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut ui = UIContext::new(UIConfig::default())?;
//!     let mut backend = RecordingBackend::new();
//!     let mut volume = 0.5;
//!
//!     ui.handle_event(InputEvent::PointerMoved { x: 40, y: 30 });
//!     ui.begin_frame(1.0 / 60.0);
//!     ui.begin_container("settings", v2i(10, 10), Layout::Column);
//!     if ui.button("apply", Rect::new(0, 0, 120, 24)) {
//!         println!("applied");
//!     }
//!     ui.slider("volume", Rect::new(0, 0, 120, 16), &mut volume);
//!     ui.end_container();
//!     ui.end_frame();
//!     ui.render(&mut backend)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::float_cmp
)]

pub mod config;
pub mod foundation;
pub mod ui;

/// Common imports for UI users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, UIConfig},
        foundation::{
            math::{rgba, v2i, Vec2i, Vec4},
            time::FrameClock,
        },
        ui::{
            DrawCommand, InputEvent, Layout, MouseButton, OverflowPolicy, Rect, RecordingBackend,
            UIContext, UIError, UIEvent, UIRenderBackend, WidgetId,
        },
    };
}
