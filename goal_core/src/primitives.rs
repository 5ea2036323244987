//! Primitive solids the scenes are composed from
//!
//! Each record is plain data; [`Describe`] turns it into exactly one [`RenderItem`]
//! with its model transform already composed.

use glam::{Mat4, Vec3};

use crate::material::Material;
use crate::transform::{degrees_to_radians, TransformChain};

/// Geometry in local space, tessellated by the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    /// Along the Y axis, centred on the origin
    Cylinder { radius: f32, height: f32 },
    /// In the XY plane, centred on the origin
    Torus { radius: f32, tube: f32 },
    /// In the XY plane, facing +Z
    Plane { width: f32, height: f32 },
    Triangle { vertices: [Vec3; 3] },
    Cuboid { width: f32, height: f32, depth: f32 },
    Polyline { points: Vec<Vec3> },
}

/// One renderable object: geometry, surface and placement
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub shape: Shape,
    pub material: Material,
    pub transform: Mat4,
    pub visible: bool,
}

impl RenderItem {
    pub fn new(shape: Shape, material: Material, transform: Mat4) -> Self {
        Self {
            shape,
            material,
            transform,
            visible: true,
        }
    }

    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Apply a parent (group) transform on top of this item's own
    pub fn transformed(mut self, group: Mat4) -> Self {
        self.transform = group * self.transform;
        self
    }

    pub fn translation(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }
}

/// Common "describe geometry" capability of every primitive
pub trait Describe {
    fn describe(&self) -> RenderItem;
}

/// Cylindrical goal post, optionally tilted about X then Y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalPost {
    pub radius: f32,
    pub height: f32,
    pub position: Vec3,
    pub x_angle: f32, // radians
    pub y_angle: f32, // radians
    pub material: Material,
}

impl Describe for GoalPost {
    fn describe(&self) -> RenderItem {
        let mut chain = TransformChain::new();
        if self.x_angle != 0.0 {
            chain = chain.rotate_x(self.x_angle);
        }
        if self.y_angle != 0.0 {
            chain = chain.rotate_y(self.y_angle);
        }
        RenderItem::new(
            Shape::Cylinder {
                radius: self.radius,
                height: self.height,
            },
            self.material,
            chain.translate(self.position).matrix(),
        )
    }
}

/// Torus ring lying flat on the ground around a post foot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostBase {
    pub radius: f32,
    pub tube_radius: f32,
    pub position: Vec3,
    pub material: Material,
}

impl Describe for PostBase {
    fn describe(&self) -> RenderItem {
        RenderItem::new(
            Shape::Torus {
                radius: self.radius,
                tube: self.tube_radius,
            },
            self.material,
            TransformChain::new()
                .rotate_x(degrees_to_radians(-90.0))
                .translate(self.position)
                .matrix(),
        )
    }
}

/// Side net, given directly in goal-group coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularNet {
    pub vertices: [Vec3; 3],
    pub material: Material,
}

impl Describe for TriangularNet {
    fn describe(&self) -> RenderItem {
        RenderItem::new(
            Shape::Triangle {
                vertices: self.vertices,
            },
            self.material,
            Mat4::IDENTITY,
        )
    }
}

/// Rear net panel, tilted back by the goal's angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularNet {
    pub width: f32,
    pub height: f32,
    pub position: Vec3,
    pub angle_to_back: f32, // radians
    pub material: Material,
}

impl Describe for RectangularNet {
    fn describe(&self) -> RenderItem {
        let mut chain = TransformChain::new();
        if self.angle_to_back != 0.0 {
            chain = chain.rotate_x(self.angle_to_back);
        }
        RenderItem::new(
            Shape::Plane {
                width: self.width,
                height: self.height,
            },
            self.material,
            chain.translate(self.position).matrix(),
        )
    }
}

/// Ground plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub length: f32,
    pub material: Material,
}

impl Describe for Field {
    fn describe(&self) -> RenderItem {
        RenderItem::new(
            Shape::Plane {
                width: self.width,
                height: self.length,
            },
            self.material,
            TransformChain::new()
                .rotate_x(degrees_to_radians(-90.0))
                .matrix(),
        )
    }
}

/// Visible trace of a ball path
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePath {
    pub points: Vec<Vec3>,
    pub material: Material,
    pub visible: bool,
}

impl Describe for CurvePath {
    fn describe(&self) -> RenderItem {
        RenderItem::new(
            Shape::Polyline {
                points: self.points.clone(),
            },
            self.material,
            Mat4::IDENTITY,
        )
        .with_visibility(self.visible)
    }
}
