use winit::keyboard::KeyCode;

use crate::camera::Camera;

/// Distance travelled per `W`/`S` press.
pub const MOVE_AMOUNT: f32 = 5.0;

/// Angle turned per `A`/`D` press, in degrees.
pub const ROTATION_AMOUNT_DEGREES: f32 = 5.0;

/// A single discrete camera motion triggered by one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    RotateLeft,
    RotateRight,
    MoveForward,
    MoveBackward,
}

impl CameraCommand {
    /// Maps the demo's control keys. Every other key is ignored.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyA => Some(Self::RotateLeft),
            KeyCode::KeyD => Some(Self::RotateRight),
            KeyCode::KeyW => Some(Self::MoveForward),
            KeyCode::KeyS => Some(Self::MoveBackward),
            _ => None,
        }
    }

    /// Applies the full increment of this command to `camera`, once.
    pub fn apply(self, camera: &mut Camera) {
        let rotation = ROTATION_AMOUNT_DEGREES.to_radians();
        match self {
            Self::RotateLeft => camera.rotate_y(rotation),
            Self::RotateRight => camera.rotate_y(-rotation),
            Self::MoveForward => camera.move_forward(MOVE_AMOUNT),
            Self::MoveBackward => camera.move_forward(-MOVE_AMOUNT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-5;

    fn press(camera: &mut Camera, key: KeyCode) {
        if let Some(command) = CameraCommand::from_key(key) {
            command.apply(camera);
        }
    }

    #[test]
    fn only_wasd_are_mapped() {
        assert_eq!(CameraCommand::from_key(KeyCode::KeyA), Some(CameraCommand::RotateLeft));
        assert_eq!(CameraCommand::from_key(KeyCode::KeyD), Some(CameraCommand::RotateRight));
        assert_eq!(CameraCommand::from_key(KeyCode::KeyW), Some(CameraCommand::MoveForward));
        assert_eq!(CameraCommand::from_key(KeyCode::KeyS), Some(CameraCommand::MoveBackward));
        assert_eq!(CameraCommand::from_key(KeyCode::KeyQ), None);
        assert_eq!(CameraCommand::from_key(KeyCode::Space), None);
    }

    #[test]
    fn a_and_d_turn_by_five_degrees() {
        let mut camera = Camera::default();
        press(&mut camera, KeyCode::KeyA);
        assert!((camera.yaw() - PI / 36.0).abs() < EPSILON);

        press(&mut camera, KeyCode::KeyA);
        assert!((camera.yaw() - 2.0 * PI / 36.0).abs() < EPSILON);

        press(&mut camera, KeyCode::KeyD);
        press(&mut camera, KeyCode::KeyD);
        press(&mut camera, KeyCode::KeyD);
        assert!((camera.yaw() + PI / 36.0).abs() < EPSILON);
    }

    #[test]
    fn w_and_s_move_five_units_along_view() {
        let mut camera = Camera::default();
        press(&mut camera, KeyCode::KeyW);
        assert!((camera.position - glm_vec(0.0, 0.0, -5.0)).norm() < EPSILON);

        press(&mut camera, KeyCode::KeyS);
        press(&mut camera, KeyCode::KeyS);
        assert!((camera.position - glm_vec(0.0, 0.0, 5.0)).norm() < EPSILON);
    }

    #[test]
    fn movement_uses_current_heading() {
        let mut camera = Camera::default();
        for _ in 0..18 {
            press(&mut camera, KeyCode::KeyA);
        }
        press(&mut camera, KeyCode::KeyW);
        assert!((camera.position - glm_vec(-5.0, 0.0, 0.0)).norm() < 1e-4);
    }

    #[test]
    fn unmapped_key_leaves_camera_untouched() {
        let mut camera = Camera::default();
        press(&mut camera, KeyCode::KeyE);
        assert_eq!(camera, Camera::default());
    }

    fn glm_vec(x: f32, y: f32, z: f32) -> nalgebra_glm::Vec3 {
        nalgebra_glm::vec3(x, y, z)
    }
}
