//! # Frame
//!
//! Holds the projection half of the view setup. The demo computes it once at startup from the
//! configured screen aspect ratio and never touches it again.

use nalgebra_glm as glm;

/// Vertical field of view in degrees.
pub const FIELD_OF_VIEW_DEGREES: f32 = 45.0;

/// Distance of the near clipping plane.
pub const NEAR_PLANE: f32 = 1.0;

/// Distance of the far clipping plane.
pub const FAR_PLANE: f32 = 100.0;

/// Perspective projection storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Camera-to-clip transform. Depth maps to `[0, 1]` as `wgpu` expects.
    pub projection_matrix: glm::Mat4,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            projection_matrix: glm::Mat4::identity(),
        }
    }
}

impl Frame {
    /// Creates a frame with the demo's perspective for the given aspect ratio.
    pub fn new(aspect_ratio: f32) -> Self {
        let mut frame = Self::default();
        frame.set_perspective(
            FIELD_OF_VIEW_DEGREES.to_radians(),
            aspect_ratio,
            NEAR_PLANE,
            FAR_PLANE,
        );
        frame
    }

    /// Replaces the stored projection with a right-handed perspective.
    ///
    /// `fovy` is in radians.
    pub fn set_perspective(&mut self, fovy: f32, aspect_ratio: f32, near: f32, far: f32) {
        self.projection_matrix = glm::perspective_rh_zo(aspect_ratio, fovy, near, far);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(frame: &Frame, z: f32) -> f32 {
        let clip = frame.projection_matrix * glm::vec4(0.0, 0.0, z, 1.0);
        clip.z / clip.w
    }

    #[test]
    fn near_and_far_planes_map_to_depth_range() {
        let frame = Frame::new(16.0 / 9.0);
        assert!(project(&frame, -NEAR_PLANE).abs() < 1e-5);
        assert!((project(&frame, -FAR_PLANE) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn aspect_ratio_scales_horizontal_axis() {
        let frame = Frame::new(2.0);
        let m = frame.projection_matrix;
        assert!((m[(1, 1)] / m[(0, 0)] - 2.0).abs() < 1e-5);
    }
}
