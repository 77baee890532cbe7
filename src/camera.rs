use crate::config::{MOUSE_SENSITIVITY, PITCH_LIMIT};
use macroquad::camera::Camera3D;
use macroquad::math::{Vec2, Vec3, vec3};

/// First-person flight camera. Owns the drone's position; the integrator and
/// the signal logic read and write it through this struct.
///
/// Yaw/pitch are kept in degrees. Yaw -90 faces -Z, pitch is clamped short of
/// straight up/down so the basis stays well defined.
#[derive(Debug, Clone)]
pub struct FlightCamera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    last_mouse: Option<Vec2>,
}

impl FlightCamera {
    pub fn new(position: Vec3) -> Self {
        let mut camera = FlightCamera {
            position,
            yaw: -90.0,
            pitch: 0.0,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            last_mouse: None,
        };
        camera.refresh_basis();
        camera
    }

    /// Feed the absolute mouse position for this frame. The first sample only
    /// primes the delta origin so the view does not jump on startup.
    pub fn track_mouse(&mut self, mouse: Vec2) {
        if let Some(last) = self.last_mouse {
            let dx = mouse.x - last.x;
            let dy = last.y - mouse.y; // Screen y grows downward; invert so mouse up pitches up
            self.apply_look(dx, dy);
        }
        self.last_mouse = Some(mouse);
    }

    /// Rotate by a mouse delta, `dy` positive meaning pitch up.
    pub fn apply_look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch + dy * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.refresh_basis();
    }

    // Rebuild the orthonormal basis from yaw/pitch
    fn refresh_basis(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        self.front = vec3(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(Vec3::Y).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Render camera for the 3-D pass.
    pub fn camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position,
            target: self.position + self.front,
            up: self.up,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use macroquad::math::vec2;

    #[test]
    fn test_initial_basis_faces_negative_z() {
        let camera = FlightCamera::new(vec3(0.0, 2.0, 15.0));
        assert_approx_eq!(camera.front().x, 0.0, 1e-6);
        assert_approx_eq!(camera.front().y, 0.0, 1e-6);
        assert_approx_eq!(camera.front().z, -1.0, 1e-6);
        assert_approx_eq!(camera.right().x, 1.0, 1e-6);
        assert_approx_eq!(camera.up().y, 1.0, 1e-6);
    }

    #[test]
    fn test_quarter_turn_right_faces_positive_x() {
        let mut camera = FlightCamera::new(Vec3::ZERO);
        // 900 pixels at 0.1 deg/pixel = 90 degrees of yaw
        camera.apply_look(900.0, 0.0);
        assert_approx_eq!(camera.yaw(), 0.0, 1e-4);
        assert_approx_eq!(camera.front().x, 1.0, 1e-5);
        assert_approx_eq!(camera.front().z, 0.0, 1e-5);
        assert_approx_eq!(camera.right().z, 1.0, 1e-5);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = FlightCamera::new(Vec3::ZERO);
        camera.apply_look(0.0, 1e6);
        assert_approx_eq!(camera.pitch(), PITCH_LIMIT);
        camera.apply_look(0.0, -1e7);
        assert_approx_eq!(camera.pitch(), -PITCH_LIMIT);
        // Basis stays orthonormal at the clamp
        assert_approx_eq!(camera.front().length(), 1.0, 1e-5);
        assert_approx_eq!(camera.front().dot(camera.right()), 0.0, 1e-5);
    }

    #[test]
    fn test_first_mouse_sample_only_primes() {
        let mut camera = FlightCamera::new(Vec3::ZERO);
        let before = camera.front();
        camera.track_mouse(vec2(400.0, 300.0));
        assert_approx_eq!(camera.front().x, before.x, 1e-6);
        assert_approx_eq!(camera.front().z, before.z, 1e-6);

        camera.track_mouse(vec2(500.0, 300.0));
        assert!(camera.yaw() > -90.0);
    }
}
