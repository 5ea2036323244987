//! Procedural soccer goal
//!
//! All placement is derived from a small parameter set (height, anchor, angle to
//! back). Rescaling keeps the base parameters untouched and counts scale steps, so the
//! posts, nets and bases always agree with the derived metrics and a shrink/expand
//! round trip lands exactly on the starting height.

use glam::{Mat4, Vec3};

use crate::config::GoalHeightBounds;
use crate::material::{Color, Material};
use crate::params::Params;
use crate::primitives::{
    Describe, GoalPost, PostBase, RectangularNet, RenderItem, TriangularNet,
};
use crate::transform::{degrees_to_radians, scale_about};

/// Input parameters of a goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalParams {
    pub height: f32,
    /// Centre of the goal line on the ground
    pub anchor: Vec3,
    pub angle_to_back_deg: f32,
    pub post_radius: f32,
    pub post_base_radius: f32,
    pub net_color: Color,
    pub net_opacity: f32,
    pub post_color: Color,
}

impl GoalParams {
    /// Goal proportioned to a ball of `ball_radius`
    pub fn for_ball(ball_radius: f32, anchor: Vec3) -> Self {
        Self {
            height: ball_radius * Params::GOAL_HEIGHT_IN_BALLS,
            anchor,
            angle_to_back_deg: Params::GOAL_ANGLE_TO_BACK,
            post_radius: ball_radius / Params::POST_RADIUS_DIVISOR,
            post_base_radius: ball_radius / Params::POST_BASE_RADIUS_DIVISOR,
            net_color: Color::LIGHT_GRAY,
            net_opacity: 1.0,
            post_color: Color::WHITE,
        }
    }

    pub fn with_net_opacity(mut self, opacity: f32) -> Self {
        self.net_opacity = opacity;
        self
    }
}

/// Placement measurements derived from height, anchor and angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalMetrics {
    pub height: f32,
    pub width: f32,
    pub field_level: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub mid_back_margin: f32,
    pub back_margin: f32,
    pub back_height: f32,
}

impl GoalMetrics {
    pub fn derive(height: f32, anchor: Vec3, angle_to_back: f32) -> Self {
        let width = height * Params::GOAL_WIDTH_RATIO;
        let depth_slope = angle_to_back.tan();
        Self {
            height,
            width,
            field_level: anchor.y + height / 2.0,
            left_margin: anchor.x - width / 2.0,
            right_margin: anchor.x + width / 2.0,
            mid_back_margin: anchor.z - depth_slope * height / 2.0,
            back_margin: anchor.z - depth_slope * height,
            back_height: height / angle_to_back.cos(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    params: GoalParams,
    scale_steps: i32,
    metrics: GoalMetrics,
}

impl Goal {
    pub fn new(params: GoalParams) -> Self {
        Self::with_scale_steps(params, 0)
    }

    fn with_scale_steps(params: GoalParams, scale_steps: i32) -> Self {
        let scale = Params::GOAL_SCALE_FACTOR.powi(scale_steps);
        let metrics = GoalMetrics::derive(
            params.height * scale,
            params.anchor,
            degrees_to_radians(params.angle_to_back_deg),
        );
        Self {
            params,
            scale_steps,
            metrics,
        }
    }

    pub fn metrics(&self) -> &GoalMetrics {
        &self.metrics
    }

    pub fn height(&self) -> f32 {
        self.metrics.height
    }

    pub fn width(&self) -> f32 {
        self.metrics.width
    }

    pub fn anchor(&self) -> Vec3 {
        self.params.anchor
    }

    pub fn angle_to_back(&self) -> f32 {
        degrees_to_radians(self.params.angle_to_back_deg)
    }

    pub fn scale_steps(&self) -> i32 {
        self.scale_steps
    }

    /// Current size relative to the constructed goal
    pub fn scale(&self) -> f32 {
        Params::GOAL_SCALE_FACTOR.powi(self.scale_steps)
    }

    /// Scale about the anchor applied to every child
    pub fn group_transform(&self) -> Mat4 {
        scale_about(self.params.anchor, self.scale())
    }

    /// One step smaller (height × 0.95). Unbounded; see [`Goal::shrink_within`].
    pub fn shrink(&self) -> Self {
        Self::with_scale_steps(self.params, self.scale_steps + 1)
    }

    /// One step larger (height ÷ 0.95). Unbounded; see [`Goal::expand_within`].
    pub fn expand(&self) -> Self {
        Self::with_scale_steps(self.params, self.scale_steps - 1)
    }

    /// Shrink only while the height is above the lower bound
    pub fn shrink_within(&self, bounds: &GoalHeightBounds) -> Option<Self> {
        bounds.allows_shrink(self.height()).then(|| self.shrink())
    }

    /// Expand only while the height is below the upper bound
    pub fn expand_within(&self, bounds: &GoalHeightBounds) -> Option<Self> {
        bounds.allows_expand(self.height()).then(|| self.expand())
    }

    /// Children at constructed size, in goal-group coordinates
    pub fn children(&self) -> Vec<RenderItem> {
        let p = &self.params;
        let m = GoalMetrics::derive(p.height, p.anchor, self.angle_to_back());
        let angle = self.angle_to_back();
        let (x, y, z) = (p.anchor.x, p.anchor.y, p.anchor.z);

        let post_material = Material::phong(p.post_color);
        let net_material = Material::phong(p.net_color)
            .with_opacity(p.net_opacity)
            .double_sided();

        let post = |height: f32, position: Vec3, x_angle: f32, y_angle: f32| GoalPost {
            radius: p.post_radius,
            height,
            position,
            x_angle,
            y_angle,
            material: post_material,
        };
        let base = |position: Vec3| PostBase {
            radius: p.post_base_radius,
            tube_radius: p.post_radius,
            position,
            material: post_material,
        };
        let side_net = |margin: f32| TriangularNet {
            vertices: [
                Vec3::new(margin, y, z),
                Vec3::new(margin, y + m.height, z),
                Vec3::new(margin, y, m.back_margin),
            ],
            material: net_material,
        };
        let quarter = degrees_to_radians(90.0);

        vec![
            // front posts
            post(m.height, Vec3::new(m.left_margin, m.field_level, z), 0.0, 0.0).describe(),
            post(m.height, Vec3::new(m.right_margin, m.field_level, z), 0.0, 0.0).describe(),
            // crossbar
            post(
                m.width + p.post_radius,
                Vec3::new(x, y + m.height, z),
                quarter,
                quarter,
            )
            .describe(),
            // back posts
            post(
                m.back_height,
                Vec3::new(m.left_margin, m.field_level, m.mid_back_margin),
                angle,
                0.0,
            )
            .describe(),
            post(
                m.back_height,
                Vec3::new(m.right_margin, m.field_level, m.mid_back_margin),
                angle,
                0.0,
            )
            .describe(),
            // post bases
            base(Vec3::new(m.left_margin, y, z)).describe(),
            base(Vec3::new(m.right_margin, y, z)).describe(),
            base(Vec3::new(m.left_margin, y, m.back_margin)).describe(),
            base(Vec3::new(m.right_margin, y, m.back_margin)).describe(),
            // nets
            RectangularNet {
                width: m.width,
                height: m.back_height,
                position: Vec3::new(x, m.field_level, m.mid_back_margin),
                angle_to_back: angle,
                material: net_material,
            }
            .describe(),
            side_net(m.left_margin).describe(),
            side_net(m.right_margin).describe(),
        ]
    }

    /// Children with the current group scale applied
    pub fn render_items(&self) -> Vec<RenderItem> {
        let group = self.group_transform();
        self.children()
            .into_iter()
            .map(|child| child.transformed(group))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Shape;

    fn viewer_goal() -> Goal {
        Goal::new(GoalParams::for_ball(0.2, Vec3::new(0.0, 0.0, -1.0)))
    }

    #[test]
    fn test_width_is_three_heights() {
        for height in [0.5, 1.0, 3.2, 14.9, 40.0] {
            for angle in [0.0, 15.0, 45.0, 60.0] {
                let params = GoalParams {
                    height,
                    angle_to_back_deg: angle,
                    ..GoalParams::for_ball(1.0, Vec3::ZERO)
                };
                let goal = Goal::new(params);
                assert_eq!(goal.width(), 3.0 * goal.height());
                assert_eq!(
                    goal.metrics().back_height,
                    height / degrees_to_radians(angle).cos()
                );
            }
        }
    }

    #[test]
    fn test_metrics_formulas() {
        let goal = Goal::new(GoalParams::for_ball(2.5, Vec3::new(0.0, 0.0, -100.0)));
        let m = goal.metrics();
        assert_eq!(m.height, 40.0);
        assert_eq!(m.width, 120.0);
        assert_eq!(m.field_level, 20.0);
        assert_eq!(m.left_margin, -60.0);
        assert_eq!(m.right_margin, 60.0);
        // tan(45°) = 1
        assert!((m.mid_back_margin - -120.0).abs() < 1e-3);
        assert!((m.back_margin - -140.0).abs() < 1e-3);
        assert!((m.back_height - 40.0 * std::f32::consts::SQRT_2).abs() < 1e-3);
    }

    #[test]
    fn test_goal_has_twelve_children() {
        let items = viewer_goal().render_items();
        assert_eq!(items.len(), 12);
        let cylinders = items
            .iter()
            .filter(|i| matches!(i.shape, Shape::Cylinder { .. }))
            .count();
        let tori = items
            .iter()
            .filter(|i| matches!(i.shape, Shape::Torus { .. }))
            .count();
        let triangles = items
            .iter()
            .filter(|i| matches!(i.shape, Shape::Triangle { .. }))
            .count();
        assert_eq!(cylinders, 5, "Two posts, crossbar, two back posts");
        assert_eq!(tori, 4, "Four post bases");
        assert_eq!(triangles, 2, "Two side nets");
    }

    #[test]
    fn test_shrink_then_expand_restores_height() {
        let goal = viewer_goal();
        let mut scaled = goal.clone();
        for _ in 0..7 {
            scaled = scaled.shrink();
        }
        assert!(scaled.height() < goal.height());
        for _ in 0..7 {
            scaled = scaled.expand();
        }
        assert_eq!(scaled.height(), goal.height());
        assert_eq!(scaled.metrics(), goal.metrics());
        assert_eq!(scaled.group_transform(), Mat4::IDENTITY);
    }

    #[test]
    fn test_shrink_scales_by_factor() {
        let goal = viewer_goal();
        let smaller = goal.shrink();
        assert!((smaller.height() - goal.height() * 0.95).abs() < 1e-6);
        assert_eq!(smaller.width(), smaller.height() * 3.0);
        let larger = goal.expand();
        assert!((larger.height() - goal.height() / 0.95).abs() < 1e-5);
    }

    #[test]
    fn test_scaled_children_match_metrics() {
        let goal = viewer_goal().shrink().shrink().shrink();
        let items = goal.render_items();
        let m = goal.metrics();

        let left_post = items[0].translation();
        assert!((left_post.x - m.left_margin).abs() < 1e-5);
        assert!((left_post.y - m.field_level).abs() < 1e-5);

        let back_base = items[7].translation();
        assert!((back_base.z - m.back_margin).abs() < 1e-5);

        let rear_net = items[9].translation();
        assert!((rear_net.z - m.mid_back_margin).abs() < 1e-5);
    }

    #[test]
    fn test_anchor_is_fixed_under_scaling() {
        let goal = viewer_goal().shrink();
        let anchor = goal.anchor();
        let moved = goal.group_transform().transform_point3(anchor);
        assert!((moved - anchor).length() < 1e-6);
    }

    #[test]
    fn test_bounds_stop_rescaling() {
        let bounds = GoalHeightBounds::new(1.0, 15.0);
        let params = GoalParams {
            height: 0.99,
            ..GoalParams::for_ball(0.2, Vec3::ZERO)
        };
        let tiny = Goal::new(params);
        assert!(tiny.shrink_within(&bounds).is_none());
        assert!(tiny.expand_within(&bounds).is_some());

        let mut goal = viewer_goal();
        let mut steps = 0;
        while let Some(next) = goal.expand_within(&bounds) {
            goal = next;
            steps += 1;
            assert!(steps < 100, "Expansion must stop at the upper bound");
        }
        assert!(goal.height() >= 15.0);
        assert!(goal.height() < 15.0 / 0.95);
    }

    #[test]
    fn test_net_material_is_double_sided() {
        let params = GoalParams::for_ball(2.5, Vec3::ZERO).with_net_opacity(0.4);
        let items = Goal::new(params).render_items();
        for net in &items[9..] {
            assert!(net.material.double_sided);
            assert_eq!(net.material.opacity, 0.4);
        }
        assert!(!items[0].material.is_transparent());
    }
}
