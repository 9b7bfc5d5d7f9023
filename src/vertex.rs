//! # Vertex Module
//!
//! Vertex format and geometry of the demo's box. The box is the unit cube scaled to span
//! `[-1, 1]` on every axis, built from four vertices per face so every face gets its own flat
//! color. Triangles are wound counter-clockwise as seen from outside the box, matching the
//! pipeline's `FrontFace::Ccw` with back-face culling.
//!
//! ```ignore
//! let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
//!     label: Some("Box Vertex Buffer"),
//!     contents: bytemuck::cast_slice(&BOX_VERTICES),
//!     usage: wgpu::BufferUsages::VERTEX,
//! });
//! ```

/// A single vertex of the box: homogeneous position and RGBA color.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// `[x, y, z, w]` in object space, `w` is always 1.
    pub position: [f32; 4],

    /// `[r, g, b, a]` in `[0, 1]`.
    pub color: [f32; 4],
}

impl Vertex {
    const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z, 1.0],
            color,
        }
    }

    /// Shader locations: `0` is the position, `1` the color.
    pub fn vertex_attributes() -> Vec<wgpu::VertexAttribute> {
        wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4].to_vec()
    }

    /// Buffer layout for a tightly packed array of `Vertex`.
    pub fn description(attributes: &[wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }
}

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
const MAGENTA: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

/// The 24 box vertices, four per face in the order `+Z, -Z, +X, -X, +Y, -Y`.
///
/// Within a face the vertices run counter-clockwise when the face is viewed from outside.
pub const BOX_VERTICES: [Vertex; 24] = [
    // +Z
    Vertex::new(-1.0, -1.0, 1.0, BLUE),
    Vertex::new(1.0, -1.0, 1.0, BLUE),
    Vertex::new(1.0, 1.0, 1.0, BLUE),
    Vertex::new(-1.0, 1.0, 1.0, BLUE),
    // -Z
    Vertex::new(1.0, -1.0, -1.0, YELLOW),
    Vertex::new(-1.0, -1.0, -1.0, YELLOW),
    Vertex::new(-1.0, 1.0, -1.0, YELLOW),
    Vertex::new(1.0, 1.0, -1.0, YELLOW),
    // +X
    Vertex::new(1.0, -1.0, 1.0, RED),
    Vertex::new(1.0, -1.0, -1.0, RED),
    Vertex::new(1.0, 1.0, -1.0, RED),
    Vertex::new(1.0, 1.0, 1.0, RED),
    // -X
    Vertex::new(-1.0, -1.0, -1.0, CYAN),
    Vertex::new(-1.0, -1.0, 1.0, CYAN),
    Vertex::new(-1.0, 1.0, 1.0, CYAN),
    Vertex::new(-1.0, 1.0, -1.0, CYAN),
    // +Y
    Vertex::new(-1.0, 1.0, 1.0, GREEN),
    Vertex::new(1.0, 1.0, 1.0, GREEN),
    Vertex::new(1.0, 1.0, -1.0, GREEN),
    Vertex::new(-1.0, 1.0, -1.0, GREEN),
    // -Y
    Vertex::new(-1.0, -1.0, -1.0, MAGENTA),
    Vertex::new(1.0, -1.0, -1.0, MAGENTA),
    Vertex::new(1.0, -1.0, 1.0, MAGENTA),
    Vertex::new(-1.0, -1.0, 1.0, MAGENTA),
];

/// Two triangles per face, 36 indices in total.
pub const BOX_INDICES: [u32; 36] = box_indices();

const fn box_indices() -> [u32; 36] {
    let mut indices = [0u32; 36];
    let mut face = 0;
    while face < 6 {
        let base = (face * 4) as u32;
        let i = face * 6;
        indices[i] = base;
        indices[i + 1] = base + 1;
        indices[i + 2] = base + 2;
        indices[i + 3] = base;
        indices[i + 4] = base + 2;
        indices[i + 5] = base + 3;
        face += 1;
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra_glm as glm;

    fn position(index: u32) -> glm::Vec3 {
        let [x, y, z, _] = BOX_VERTICES[index as usize].position;
        glm::vec3(x, y, z)
    }

    #[test]
    fn box_has_thirty_six_indices_in_range() {
        assert_eq!(BOX_INDICES.len(), 36);
        assert!(BOX_INDICES.iter().all(|&i| (i as usize) < BOX_VERTICES.len()));
    }

    #[test]
    fn every_triangle_faces_outward() {
        for triangle in BOX_INDICES.chunks(3) {
            let (a, b, c) = (position(triangle[0]), position(triangle[1]), position(triangle[2]));
            let normal = glm::cross(&(b - a), &(c - a));
            let centroid = (a + b + c) / 3.0;
            assert!(
                glm::dot(&normal, &centroid) > 0.0,
                "triangle {triangle:?} is wound clockwise from outside"
            );
        }
    }

    #[test]
    fn stride_matches_vertex_size() {
        let attributes = Vertex::vertex_attributes();
        let layout = Vertex::description(&attributes);
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.len(), 2);
    }
}
