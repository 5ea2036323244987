//! Affine transform helpers
//!
//! Transforms are composed in application order: each step is pre-multiplied onto
//! the accumulated matrix, so `rotate_x` followed by `translate` rotates first.

use glam::{Mat4, Quat, Vec3};

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Matrix built up one step at a time, each step applied after the previous ones
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformChain(Mat4);

impl Default for TransformChain {
    fn default() -> Self {
        Self(Mat4::IDENTITY)
    }
}

impl TransformChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(self, step: Mat4) -> Self {
        Self(step * self.0)
    }

    pub fn rotate_x(self, angle: f32) -> Self {
        self.then(Mat4::from_rotation_x(angle))
    }

    pub fn rotate_y(self, angle: f32) -> Self {
        self.then(Mat4::from_rotation_y(angle))
    }

    pub fn translate(self, offset: Vec3) -> Self {
        self.then(Mat4::from_translation(offset))
    }

    pub fn scale(self, factor: f32) -> Self {
        self.then(Mat4::from_scale(Vec3::splat(factor)))
    }

    pub fn matrix(self) -> Mat4 {
        self.0
    }
}

/// Uniform scale about `anchor` (translate to origin, scale, translate back)
pub fn scale_about(anchor: Vec3, factor: f32) -> Mat4 {
    TransformChain::new()
        .translate(-anchor)
        .scale(factor)
        .translate(anchor)
        .matrix()
}

/// Rotate a point about `anchor`
pub fn rotate_point_about(point: Vec3, anchor: Vec3, rotation: Quat) -> Vec3 {
    anchor + rotation * (point - anchor)
}
