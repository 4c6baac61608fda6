//! Vertex-batching backend
//!
//! Does what a GPU backend would do before issuing draw calls: triangulate
//! every rectangle into one shared vertex buffer and record a draw range per
//! color. Nothing is rasterized; the batch is only measured and logged.

use imui::foundation::math::{Vec2i, Vec4};
use imui::ui::{DrawCommand, RectVertex, UIRenderBackend};

/// Vertices per rectangle (two triangles)
const VERTICES_PER_RECT: usize = 6;

/// One draw call: `count` vertices starting at `start`, filled with `color`
#[derive(Debug, Clone, Copy)]
pub struct DrawRange {
    pub start: usize,
    pub count: usize,
    pub color: Vec4,
}

/// Backend that batches rectangles into a vertex buffer
#[derive(Debug, Default)]
pub struct MeshBatchBackend {
    vertices: Vec<RectVertex>,
    draws: Vec<DrawRange>,
    frames: u64,
    total_bytes: usize,
}

impl MeshBatchBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex data of the last submitted frame
    pub fn vertices(&self) -> &[RectVertex] {
        &self.vertices
    }

    /// Draw ranges of the last submitted frame
    pub fn draws(&self) -> &[DrawRange] {
        &self.draws
    }

    /// Frames submitted so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Bytes of vertex data uploaded over all frames
    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }
}

impl UIRenderBackend for MeshBatchBackend {
    fn submit(&mut self, commands: &[DrawCommand], viewport: Vec2i) -> Result<(), Box<dyn std::error::Error>> {
        self.vertices.clear();
        self.draws.clear();

        for command in commands {
            let start = self.vertices.len();
            self.vertices.extend_from_slice(command.mesh().vertices());
            self.draws.push(DrawRange { start, count: VERTICES_PER_RECT, color: command.color });
        }

        for (i, range) in self.draws.iter().enumerate() {
            log::trace!(
                "  Rect {}: vertices {}..{}, color: {:?}",
                i,
                range.start,
                range.start + range.count,
                range.color
            );
        }

        let bytes: &[u8] = bytemuck::cast_slice(&self.vertices);
        self.frames += 1;
        self.total_bytes += bytes.len();

        log::debug!(
            "Batch {}: {} rects, {} vertices, {} bytes, viewport {}x{}",
            self.frames,
            self.draws.len(),
            self.vertices.len(),
            bytes.len(),
            viewport.x,
            viewport.y
        );
        Ok(())
    }
}
