//! Per-frame camera and lighting uniform

use glam::{Mat4, Vec3};
use goal_core::{Light, Perspective};

pub const MAX_DIRECTIONAL_LIGHTS: usize = 2;

/// Projection fixed at load time plus the demo's current view
pub struct Camera {
    pub perspective: Perspective,
    pub view: Mat4,
    pub eye: Vec3,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        let aspect = width as f32 / height.max(1) as f32;
        Self {
            perspective: Perspective::new(aspect),
            view: Mat4::IDENTITY,
            eye: Vec3::ZERO,
        }
    }

    pub fn set_view(&mut self, view: Mat4, eye: Vec3) {
        self.view = view;
        self.eye = eye;
    }

    pub fn view_proj(&self) -> Mat4 {
        self.perspective.projection() * self.view
    }
}

/// Scene uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    view_proj: [[f32; 4]; 4],                         // 64 bytes
    eye: [f32; 4],                                    // 16 bytes
    ambient: [f32; 4],                                // 16 bytes
    light_dirs: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS],   // 32 bytes
    light_colors: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS], // 32 bytes
    light_count: [u32; 4],                            // 16 bytes
    _padding: [f32; 20],                              // 80 bytes padding to reach 256
}

impl SceneUniform {
    pub fn new(camera: &Camera, lights: &[Light]) -> Self {
        let mut uniform = Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            ambient: [0.0; 4],
            light_dirs: [[0.0; 4]; MAX_DIRECTIONAL_LIGHTS],
            light_colors: [[0.0; 4]; MAX_DIRECTIONAL_LIGHTS],
            light_count: [0; 4],
            _padding: [0.0; 20],
        };

        let mut ambient = Vec3::ZERO;
        let mut count = 0;
        for light in lights {
            match *light {
                Light::Ambient { color, intensity } => {
                    let lit = color.scaled(intensity);
                    ambient += Vec3::new(lit.r, lit.g, lit.b);
                }
                Light::Directional {
                    color,
                    intensity,
                    position,
                } => {
                    if count == MAX_DIRECTIONAL_LIGHTS {
                        log::warn!("Only {} directional lights are drawn", MAX_DIRECTIONAL_LIGHTS);
                        continue;
                    }
                    uniform.light_dirs[count] = position.normalize_or_zero().extend(0.0).to_array();
                    uniform.light_colors[count] = color.scaled(intensity).to_rgba(1.0);
                    count += 1;
                }
            }
        }
        uniform.ambient = ambient.extend(1.0).to_array();
        uniform.light_count[0] = count as u32;
        uniform
    }
}
