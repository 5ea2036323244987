//! Scene description handed to the renderer each frame

use glam::Vec3;

use crate::material::Color;
use crate::primitives::RenderItem;

#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Color(Color),
    /// Cube map faces: +X, -X, +Y, -Y, +Z, -Z
    Skybox([&'static str; 6]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    /// Shines from `position` toward the origin
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
}

/// Flat scene graph: every item carries its full world transform
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Background,
    pub lights: Vec<Light>,
    pub items: Vec<RenderItem>,
}

impl Scene {
    pub fn new(background: Background) -> Self {
        Self {
            background,
            lights: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn add(&mut self, item: RenderItem) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = RenderItem>) {
        self.items.extend(items);
    }

    /// Single white ambient light
    pub fn with_viewer_lighting(mut self) -> Self {
        self.add_light(Light::Ambient {
            color: Color::WHITE,
            intensity: 1.0,
        });
        self
    }

    /// Dim ambient light plus two directional lights from opposite sides of the field
    pub fn with_stadium_lighting(mut self) -> Self {
        self.add_light(Light::Directional {
            color: Color::WHITE,
            intensity: 1.0,
            position: Vec3::new(1.0, 0.0, 1.0),
        });
        self.add_light(Light::Directional {
            color: Color::WHITE,
            intensity: 1.0,
            position: Vec3::new(-1.0, 0.0, -1.0),
        });
        self.add_light(Light::Ambient {
            color: Color::from_hex(0x404040),
            intensity: 1.0,
        });
        self
    }
}
