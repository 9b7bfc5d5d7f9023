//! # Camera
//!
//! A free-flying camera described by a position, a view direction and an up vector. It only
//! supports the two motions the demo needs: turning around the world's vertical axis and moving
//! along the current view direction. The view matrix is derived on demand.

use nalgebra_glm as glm;

/// Camera state queried once per frame for its view matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space.
    pub position: glm::Vec3,

    /// Unit vector the camera looks along.
    pub view_dir: glm::Vec3,

    /// Unit vector pointing up in camera space, kept orthogonal to `view_dir`.
    pub up_vector: glm::Vec3,
}

impl Default for Camera {
    /// At the origin, looking down `-Z` with `+Y` up.
    fn default() -> Self {
        Self {
            position: glm::vec3(0.0, 0.0, 0.0),
            view_dir: glm::vec3(0.0, 0.0, -1.0),
            up_vector: glm::vec3(0.0, 1.0, 0.0),
        }
    }
}

impl Camera {
    /// Turns the camera around the world `Y` axis by `angle` radians.
    ///
    /// Positive angles turn left (counter-clockwise seen from above).
    pub fn rotate_y(&mut self, angle: f32) {
        let axis = glm::Vec3::y();
        self.view_dir = glm::normalize(&glm::rotate_vec3(&self.view_dir, angle, &axis));
        self.up_vector = glm::normalize(&glm::rotate_vec3(&self.up_vector, angle, &axis));
    }

    /// Moves the camera `distance` units along its view direction. Negative values move back.
    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.view_dir * distance;
    }

    /// World-to-camera transform for the current state.
    pub fn view_matrix(&self) -> glm::Mat4 {
        glm::look_at_rh(
            &self.position,
            &(self.position + self.view_dir),
            &self.up_vector,
        )
    }

    /// Heading around `Y` in radians, zero when looking down `-Z`, positive to the left.
    pub fn yaw(&self) -> f32 {
        (-self.view_dir.x).atan2(-self.view_dir.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn assert_vec_eq(actual: &glm::Vec3, expected: &glm::Vec3) {
        assert!(
            (actual - expected).norm() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn default_view_is_identity() {
        let camera = Camera::default();
        let view = camera.view_matrix();
        let identity = glm::Mat4::identity();
        assert!((view - identity).abs().max() < EPSILON);
    }

    #[test]
    fn quarter_turn_left_looks_down_negative_x() {
        let mut camera = Camera::default();
        camera.rotate_y(FRAC_PI_2);
        assert_vec_eq(&camera.view_dir, &glm::vec3(-1.0, 0.0, 0.0));
        assert_vec_eq(&camera.up_vector, &glm::vec3(0.0, 1.0, 0.0));
        assert!((camera.yaw() - FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn rotations_compose_additively() {
        let mut stepped = Camera::default();
        stepped.rotate_y(0.3);
        stepped.rotate_y(0.4);

        let mut once = Camera::default();
        once.rotate_y(0.7);

        assert_vec_eq(&stepped.view_dir, &once.view_dir);
        assert!((stepped.yaw() - 0.7).abs() < EPSILON);
    }

    #[test]
    fn move_forward_follows_view_direction() {
        let mut camera = Camera::default();
        camera.move_forward(5.0);
        assert_vec_eq(&camera.position, &glm::vec3(0.0, 0.0, -5.0));

        camera.rotate_y(FRAC_PI_2);
        camera.move_forward(-2.0);
        assert_vec_eq(&camera.position, &glm::vec3(2.0, 0.0, -5.0));
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let mut camera = Camera::default();
        camera.rotate_y(0.25);
        camera.move_forward(3.0);
        let eye = camera.position;
        let transformed = camera.view_matrix() * glm::vec4(eye.x, eye.y, eye.z, 1.0);
        assert!(glm::vec4_to_vec3(&transformed).norm() < EPSILON);
    }
}
