//! Rectangles, hit testing and rectangle triangulation

use bytemuck::{Pod, Zeroable};

use crate::foundation::math::{v2i, Vec2i};

/// Axis-aligned rectangle in pixel space (top-left origin, Y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2i,
    /// Width and height
    pub dim: Vec2i,
}

impl Rect {
    /// Create a rectangle from position and size components
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { pos: v2i(x, y), dim: v2i(w, h) }
    }

    /// Create a rectangle from position and size vectors
    pub fn from_pos_dim(pos: Vec2i, dim: Vec2i) -> Self {
        Self { pos, dim }
    }

    /// Right edge
    pub fn max_x(&self) -> i32 {
        self.pos.x + self.dim.x
    }

    /// Bottom edge
    pub fn max_y(&self) -> i32 {
        self.pos.y + self.dim.y
    }

    /// Inclusive point test; a point on any edge is inside.
    pub fn contains(&self, point: Vec2i) -> bool {
        point.x >= self.pos.x
            && point.x <= self.max_x()
            && point.y >= self.pos.y
            && point.y <= self.max_y()
    }

    /// Shrink by `amount` on every side, never below zero size
    pub fn inset(&self, amount: i32) -> Rect {
        Rect {
            pos: self.pos + v2i(amount, amount),
            dim: v2i((self.dim.x - 2 * amount).max(0), (self.dim.y - 2 * amount).max(0)),
        }
    }

    /// Same size, moved by `offset`
    pub fn translated(&self, offset: Vec2i) -> Rect {
        Rect { pos: self.pos + offset, dim: self.dim }
    }
}

/// Vertex of a rectangle mesh, laid out for direct GPU upload
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct RectVertex {
    /// Position in pixels
    pub position: [i32; 2],
}

impl From<Vec2i> for RectVertex {
    fn from(v: Vec2i) -> Self {
        Self { position: [v.x, v.y] }
    }
}

/// One triangle of a rectangle mesh
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Triangle {
    /// Corners in winding order
    pub v: [RectVertex; 3],
}

/// Two triangles covering a rectangle
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct RectMesh {
    /// Upper-left and lower-right halves
    pub t: [Triangle; 2],
}

impl RectMesh {
    /// The six vertices in draw order
    pub fn vertices(&self) -> &[RectVertex] {
        bytemuck::cast_slice(&self.t)
    }
}

/// Triangulate a rectangle
///
/// First triangle: top-left, bottom-left, top-right.
/// Second triangle: top-right, bottom-left, bottom-right.
pub fn rect_mesh(pos: Vec2i, dim: Vec2i) -> RectMesh {
    let top_right = v2i(pos.x + dim.x, pos.y);
    let bottom_left = v2i(pos.x, pos.y + dim.y);
    RectMesh {
        t: [
            Triangle { v: [pos.into(), bottom_left.into(), top_right.into()] },
            Triangle { v: [top_right.into(), bottom_left.into(), (pos + dim).into()] },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges_inclusive() {
        let rect = Rect::new(100, 100, 200, 100);
        assert!(rect.contains(v2i(150, 150)));
        assert!(rect.contains(v2i(100, 100)));
        assert!(rect.contains(v2i(300, 200)));
        assert!(!rect.contains(v2i(50, 50)));
        assert!(!rect.contains(v2i(301, 150)));
    }

    #[test]
    fn test_inset_clamps_to_zero() {
        let rect = Rect::new(0, 0, 10, 4);
        assert_eq!(rect.inset(2), Rect::new(2, 2, 6, 0));
        assert_eq!(rect.inset(3).dim, v2i(4, 0));
    }

    #[test]
    fn test_rect_mesh_corners() {
        let mesh = rect_mesh(v2i(10, 20), v2i(30, 40));
        let positions: Vec<[i32; 2]> = mesh.vertices().iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![[10, 20], [10, 60], [40, 20], [40, 20], [10, 60], [40, 60]]
        );
    }

    #[test]
    fn test_mesh_is_plain_bytes() {
        let mesh = rect_mesh(v2i(0, 0), v2i(1, 1));
        let bytes: &[u8] = bytemuck::bytes_of(&mesh);
        assert_eq!(bytes.len(), 6 * 2 * std::mem::size_of::<i32>());
    }
}
