//! # UI Configuration
//!
//! Tunables for a [`UIContext`](crate::ui::UIContext). Everything here has a
//! sensible default, so most applications only override the viewport.

use serde::{Serialize, Deserialize};

use super::{Config, ConfigError};
use crate::foundation::math::{v2i, Vec2i};
use crate::ui::draw::OverflowPolicy;

/// Default number of draw commands a frame may emit
pub const DEFAULT_DRAW_CAPACITY: usize = 1024;

/// Configuration for one UI surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    /// Maximum draw commands per frame
    pub draw_capacity: usize,
    /// What to do when a frame emits more than `draw_capacity` commands
    pub overflow_policy: OverflowPolicy,
    /// Margin in pixels around and between children of laid-out containers
    pub layout_margin: i32,
    /// Range used by `UIContext::slider` (min, max)
    pub slider_range: [f32; 2],
    /// Initial viewport size in pixels (width, height)
    pub viewport: [i32; 2],
    /// Default log filter for binaries that call `logging::init_with_level`
    pub log_level: String,
}

impl UIConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            draw_capacity: DEFAULT_DRAW_CAPACITY,
            overflow_policy: OverflowPolicy::Abort,
            layout_margin: 4,
            slider_range: [-1.0, 1.0],
            viewport: [800, 600],
            log_level: "info".to_string(),
        }
    }

    /// Set the draw command capacity
    pub fn with_draw_capacity(mut self, capacity: usize) -> Self {
        self.draw_capacity = capacity;
        self
    }

    /// Set the overflow policy
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Set the layout margin
    pub fn with_layout_margin(mut self, margin: i32) -> Self {
        self.layout_margin = margin;
        self
    }

    /// Set the default slider range
    pub fn with_slider_range(mut self, min: f32, max: f32) -> Self {
        self.slider_range = [min, max];
        self
    }

    /// Set the initial viewport size
    pub fn with_viewport(mut self, width: i32, height: i32) -> Self {
        self.viewport = [width, height];
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Viewport as a vector
    pub fn viewport_size(&self) -> Vec2i {
        v2i(self.viewport[0], self.viewport[1])
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.draw_capacity == 0 {
            return Err(ConfigError::Invalid("draw_capacity must be at least 1".to_string()));
        }
        if self.layout_margin < 0 {
            return Err(ConfigError::Invalid(format!(
                "layout_margin must not be negative, got {}",
                self.layout_margin
            )));
        }
        let [min, max] = self.slider_range;
        if !(min < max) {
            return Err(ConfigError::Invalid(format!(
                "slider_range min must be below max, got [{min}, {max}]"
            )));
        }
        if self.viewport[0] <= 0 || self.viewport[1] <= 0 {
            return Err(ConfigError::Invalid(format!(
                "viewport must be positive, got {}x{}",
                self.viewport[0], self.viewport[1]
            )));
        }
        Ok(())
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for UIConfig {}
