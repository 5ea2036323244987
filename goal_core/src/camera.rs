//! Camera math for both demos
//!
//! The viewer orbits the goal under mouse control; the game camera trails the ball
//! with a fixed viewing direction.

use glam::{Mat4, Vec3};

use crate::params::Params;

/// Perspective projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Perspective {
    pub fn new(aspect: f32) -> Self {
        Self {
            fov_y_deg: Params::CAMERA_FOV_DEG,
            aspect,
            near: Params::CAMERA_NEAR,
            far: Params::CAMERA_FAR,
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }
}

/// Camera on a sphere around a target point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub yaw: f32,   // radians, about +Y
    pub pitch: f32, // radians, above the XZ plane
    pub enabled: bool,
    pub rotate_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
}

impl OrbitCamera {
    const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;
    const ZOOM_STEP: f32 = 0.95;

    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target,
            radius,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
            enabled: true,
            rotate_speed: 1.0,
            min_radius: 0.5,
            max_radius: 500.0,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.radius * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Drag by (dx, dy) pixels on a viewport `viewport_height` pixels tall
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !self.enabled || viewport_height <= 0.0 {
            return;
        }
        let per_pixel = std::f32::consts::TAU / viewport_height * self.rotate_speed;
        self.yaw -= dx * per_pixel;
        self.pitch = (self.pitch + dy * per_pixel).clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
    }

    /// Wheel zoom: positive delta moves away, negative moves closer
    pub fn zoom(&mut self, delta: f32) {
        if !self.enabled || delta == 0.0 {
            return;
        }
        let radius = if delta > 0.0 {
            self.radius / Self::ZOOM_STEP
        } else {
            self.radius * Self::ZOOM_STEP
        };
        self.radius = radius.clamp(self.min_radius, self.max_radius);
    }
}

/// Camera that eases toward a point offset from the ball, never turning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    pub home: Vec3,
    pub eye: Vec3,
    pub direction: Vec3,
    pub offset: Vec3,
    pub lerp: f32,
}

impl FollowCamera {
    pub fn new(eye: Vec3, look_at: Vec3, offset: Vec3, lerp: f32) -> Self {
        Self {
            home: eye,
            eye,
            direction: (look_at - eye).normalize_or_zero(),
            offset,
            lerp,
        }
    }

    /// Move a fraction of the way toward `ball + offset`
    pub fn update(&mut self, ball: Vec3) {
        self.eye = self.eye.lerp(ball + self.offset, self.lerp);
    }

    pub fn reset(&mut self) {
        self.eye = self.home;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.direction, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_round_trips_eye() {
        let eye = Vec3::new(0.0, 1.0, 5.0);
        let camera = OrbitCamera::looking_at(eye, Vec3::ZERO);
        assert!((camera.eye() - eye).length() < 1e-5);
    }

    #[test]
    fn test_orbit_pitch_is_clamped() {
        let mut camera = OrbitCamera::looking_at(Vec3::new(0.0, 1.0, 5.0), Vec3::ZERO);
        camera.rotate(0.0, 100_000.0, 800.0);
        assert!(camera.pitch <= 89f32.to_radians() + 1e-6);
        camera.rotate(0.0, -200_000.0, 800.0);
        assert!(camera.pitch >= -89f32.to_radians() - 1e-6);
    }

    #[test]
    fn test_orbit_keeps_distance_when_rotating() {
        let mut camera = OrbitCamera::looking_at(Vec3::new(0.0, 1.0, 5.0), Vec3::ZERO);
        let radius = camera.radius;
        camera.rotate(120.0, -40.0, 800.0);
        assert!((camera.eye().length() - radius).abs() < 1e-4);
    }

    #[test]
    fn test_orbit_zoom_is_clamped() {
        let mut camera = OrbitCamera::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        camera.zoom(-1.0);
        assert!((camera.radius - 4.75).abs() < 1e-5);
        for _ in 0..500 {
            camera.zoom(-1.0);
        }
        assert_eq!(camera.radius, camera.min_radius);
        for _ in 0..500 {
            camera.zoom(1.0);
        }
        assert_eq!(camera.radius, camera.max_radius);
    }

    #[test]
    fn test_disabled_orbit_ignores_input() {
        let mut camera = OrbitCamera::looking_at(Vec3::new(0.0, 1.0, 5.0), Vec3::ZERO);
        camera.enabled = false;
        let before = camera;
        camera.rotate(50.0, 50.0, 800.0);
        camera.zoom(1.0);
        assert_eq!(camera, before);
    }

    #[test]
    fn test_follow_camera_converges() {
        let mut camera = FollowCamera::new(
            Vec3::new(-5.0, 30.0, 120.0),
            Vec3::new(1.0, -30.0, 20.0),
            Vec3::new(-5.0, 30.0, 50.0),
            0.1,
        );
        let ball = Vec3::new(10.0, 5.0, 0.0);
        let first = camera.eye;
        camera.update(ball);
        let target = ball + camera.offset;
        assert!((camera.eye - (first + (target - first) * 0.1)).length() < 1e-4);
        for _ in 0..200 {
            camera.update(ball);
        }
        assert!((camera.eye - target).length() < 1e-3);

        camera.reset();
        assert_eq!(camera.eye, Vec3::new(-5.0, 30.0, 120.0));
    }

    #[test]
    fn test_follow_direction_is_fixed() {
        let mut camera = FollowCamera::new(
            Vec3::new(-5.0, 30.0, 120.0),
            Vec3::new(1.0, -30.0, 20.0),
            Vec3::new(-5.0, 30.0, 50.0),
            0.1,
        );
        let direction = camera.direction;
        camera.update(Vec3::new(40.0, 0.0, -80.0));
        assert_eq!(camera.direction, direction);
    }
}
