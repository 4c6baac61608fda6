//! UI Render Backend Trait
//!
//! Defines the interface between the UI core and whatever rasterizes its
//! rectangles. Keeps the core independent of OpenGL/Vulkan/software specifics.

use super::draw::DrawCommand;
use crate::foundation::math::Vec2i;

/// Backend-agnostic rectangle renderer
pub trait UIRenderBackend {
    /// Rasterize each command as a filled rectangle, in order (back to front),
    /// into a target of `viewport` pixels and present
    fn submit(&mut self, commands: &[DrawCommand], viewport: Vec2i) -> Result<(), Box<dyn std::error::Error>>;
}

/// Backend that keeps a copy of every submitted frame
///
/// Useful headless, in tests and for tooling that inspects UI output.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    /// Submitted frames, oldest first
    pub frames: Vec<Vec<DrawCommand>>,
    /// Viewport of the most recent pass
    pub viewport: Vec2i,
}

impl RecordingBackend {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recent frame
    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl UIRenderBackend for RecordingBackend {
    fn submit(&mut self, commands: &[DrawCommand], viewport: Vec2i) -> Result<(), Box<dyn std::error::Error>> {
        self.viewport = viewport;
        self.frames.push(commands.to_vec());
        Ok(())
    }
}
