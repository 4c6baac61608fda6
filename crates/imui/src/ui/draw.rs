//! Draw command buffer
//!
//! A frame's output is nothing more than a list of filled rectangles. The
//! buffer is bounded; what happens when it fills up is an [`OverflowPolicy`].

use serde::{Serialize, Deserialize};

use super::error::{fatal, UsageError};
use super::geometry::{rect_mesh, Rect, RectMesh};
use crate::foundation::math::{Vec2i, Vec4};

/// A filled, axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Top-left corner in pixels
    pub pos: Vec2i,
    /// Size in pixels
    pub dim: Vec2i,
    /// RGBA color
    pub color: Vec4,
}

impl DrawCommand {
    /// Command covering `rect`
    pub fn rect(rect: Rect, color: Vec4) -> Self {
        Self { pos: rect.pos, dim: rect.dim, color }
    }

    /// Triangulated rectangle for backends that draw triangles
    pub fn mesh(&self) -> RectMesh {
        rect_mesh(self.pos, self.dim)
    }
}

/// Behavior when a frame emits more commands than the buffer holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Treat overflow as a programming error and panic
    #[default]
    Abort,
    /// Drop the excess commands and log a warning
    Drop,
}

/// Bounded, per-frame list of draw commands
#[derive(Debug)]
pub struct DrawBuffer {
    commands: Vec<DrawCommand>,
    capacity: usize,
    policy: OverflowPolicy,
    dropped: usize,
}

impl DrawBuffer {
    /// Create a buffer holding at most `capacity` commands
    pub fn new(capacity: usize, policy: OverflowPolicy) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            capacity,
            policy,
            dropped: 0,
        }
    }

    /// Append a command
    ///
    /// # Panics
    /// When full and the policy is [`OverflowPolicy::Abort`].
    pub fn push(&mut self, command: DrawCommand) {
        if self.commands.len() >= self.capacity {
            match self.policy {
                OverflowPolicy::Abort => fatal(UsageError::DrawBufferOverflow { capacity: self.capacity }),
                OverflowPolicy::Drop => {
                    self.dropped += 1;
                    return;
                }
            }
        }
        self.commands.push(command);
    }

    /// Append a rectangle
    pub fn push_rect(&mut self, rect: Rect, color: Vec4) {
        self.push(DrawCommand::rect(rect, color));
    }

    /// Commands recorded since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands recorded
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands are recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Maximum number of commands
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Commands dropped since the last clear (only under `OverflowPolicy::Drop`)
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Truncate to zero; keeps the allocation
    pub fn clear(&mut self) {
        self.commands.clear();
        self.dropped = 0;
    }
}
