use glam::{Mat4, Quat, Vec3};

use crate::curve::QuadraticBezier;
use crate::material::{Color, Material};
use crate::params::Params;
use crate::primitives::{Describe, RenderItem, Shape};

/// Ball component - position plus accumulated spin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub radius: f32,
    pub position: Vec3,
    pub orientation: Quat,
    pub material: Material,
}

impl Ball {
    pub fn new(radius: f32, position: Vec3, material: Material) -> Self {
        Self {
            radius,
            position,
            orientation: Quat::IDENTITY,
            material,
        }
    }

    /// Return to `position` with no spin
    pub fn reset(&mut self, position: Vec3) {
        self.position = position;
        self.orientation = Quat::IDENTITY;
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }
}

impl Describe for Ball {
    fn describe(&self) -> RenderItem {
        RenderItem::new(
            Shape::Sphere {
                radius: self.radius,
            },
            self.material,
            self.transform(),
        )
    }
}

/// Card colour, which sets its penalty weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardCategory {
    Yellow,
    Red,
}

impl CardCategory {
    pub fn color(self) -> Color {
        match self {
            CardCategory::Yellow => Color::CARD_YELLOW,
            CardCategory::Red => Color::CARD_RED,
        }
    }

    /// Penalty points, in yellow-card units
    pub fn penalty_weight(self) -> u32 {
        match self {
            CardCategory::Yellow => 1,
            CardCategory::Red => Params::RED_CARD_WEIGHT,
        }
    }
}

/// Card component - an obstacle sitting on one of the ball curves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub curve_index: usize,
    /// Arc-length parameter of the card on its curve
    pub t: f32,
    pub category: CardCategory,
    pub position: Vec3,
    pub visible: bool,
    pub texture: Option<&'static str>,
}

impl Card {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        width: f32,
        height: f32,
        depth: f32,
        curve_index: usize,
        curve: &QuadraticBezier,
        t: f32,
        category: CardCategory,
        texture: Option<&'static str>,
    ) -> Self {
        Self {
            width,
            height,
            depth,
            curve_index,
            t,
            category,
            position: curve.point_at(t),
            visible: true,
            texture,
        }
    }

    /// Hide the card; returns false if it was already struck
    pub fn strike(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    pub fn restore(&mut self) {
        self.visible = true;
    }
}

impl Describe for Card {
    fn describe(&self) -> RenderItem {
        let material = match self.texture {
            Some(path) => Material::textured(path, self.category.color()),
            None => Material::phong(self.category.color()),
        };
        RenderItem::new(
            Shape::Cuboid {
                width: self.width,
                height: self.height,
                depth: self.depth,
            },
            material,
            Mat4::from_translation(self.position),
        )
        .with_visibility(self.visible)
    }
}
