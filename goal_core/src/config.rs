use glam::Vec3;

use crate::goal::GoalParams;
use crate::material::Color;
use crate::params::Params;

/// Exclusive height range inside which the goal may still be rescaled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalHeightBounds {
    pub min: f32,
    pub max: f32,
}

impl Default for GoalHeightBounds {
    fn default() -> Self {
        Self::new(Params::GOAL_HEIGHT_MIN, Params::GOAL_HEIGHT_MAX)
    }
}

impl GoalHeightBounds {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn allows_shrink(&self, height: f32) -> bool {
        height > self.min
    }

    pub fn allows_expand(&self, height: f32) -> bool {
        height < self.max
    }
}

/// How the cards are distributed over the curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardLayout {
    #[default]
    Classic,
    /// Curve and colour of each card drawn from a seeded generator
    Shuffled { seed: u64 },
}

/// Goal viewer configuration
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub background: Color,
    pub ball_radius: f32,
    pub ball_color: Color,
    pub ball_position: Vec3,
    pub field_width: f32,
    pub field_length: f32,
    pub field_color: Color,
    pub goal: GoalParams,
    pub height_bounds: GoalHeightBounds,
    pub ball_speed: f32,
    pub ball_speed_min: f32,
    pub ball_speed_max: f32,
    pub ball_speed_step: f32,
    pub camera_eye: Vec3,
    pub camera_target: Vec3,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let ball_radius = Params::VIEWER_BALL_RADIUS;
        Self {
            background: Color::FOREST_GREEN,
            ball_radius,
            ball_color: Color::BLACK,
            ball_position: Vec3::new(0.0, ball_radius, Params::VIEWER_BALL_Z),
            field_width: Params::VIEWER_FIELD_WIDTH,
            field_length: Params::VIEWER_FIELD_LENGTH,
            field_color: Color::LIGHT_GREEN,
            goal: GoalParams::for_ball(ball_radius, Vec3::new(0.0, 0.0, Params::VIEWER_GOAL_Z)),
            height_bounds: GoalHeightBounds::default(),
            ball_speed: Params::BALL_SPEED_DEFAULT,
            ball_speed_min: Params::BALL_SPEED_MIN,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_step: Params::BALL_SPEED_STEP,
            camera_eye: Params::VIEWER_CAMERA_EYE,
            camera_target: Vec3::ZERO,
        }
    }
}

impl ViewerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a ball rotation speed to the configured range
    pub fn clamp_ball_speed(&self, speed: f32) -> f32 {
        speed.clamp(self.ball_speed_min, self.ball_speed_max)
    }
}

/// Goal-scoring game configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub ball_radius: f32,
    pub ball_start: Vec3,
    pub goal: GoalParams,
    pub lap_ms: f64,
    pub lap_end_t: f32,
    pub ball_spin: f32,
    pub card_width: f32,
    pub card_height: f32,
    pub card_depth: f32,
    pub card_layout: CardLayout,
    /// Control and end point of each curve; all curves start at `ball_start`
    pub curve_controls: Vec<[Vec3; 2]>,
    pub default_curve: usize,
    pub curve_path_segments: usize,
    pub camera_eye: Vec3,
    pub camera_look_at: Vec3,
    pub camera_follow_offset: Vec3,
    pub camera_follow_lerp: f32,
    pub skybox: [&'static str; 6],
    pub ball_texture: &'static str,
    pub yellow_card_texture: &'static str,
    pub red_card_texture: &'static str,
}

impl Default for GameConfig {
    fn default() -> Self {
        let ball_radius = Params::BALL_RADIUS;
        Self {
            ball_radius,
            ball_start: Vec3::new(0.0, 0.0, Params::GOAL_DISTANCE),
            goal: GoalParams::for_ball(ball_radius, Vec3::new(0.0, 0.0, -Params::GOAL_DISTANCE))
                .with_net_opacity(Params::GOAL_NET_OPACITY),
            lap_ms: Params::LAP_MS,
            lap_end_t: Params::LAP_END_T,
            ball_spin: Params::BALL_SPIN,
            card_width: ball_radius * Params::CARD_WIDTH_IN_BALLS,
            card_height: ball_radius * Params::CARD_HEIGHT_IN_BALLS,
            card_depth: Params::CARD_DEPTH,
            card_layout: CardLayout::Classic,
            curve_controls: vec![
                [Vec3::new(-30.0, 0.0, 50.0), Vec3::new(-40.0, 5.0, -120.0)],
                [Vec3::new(20.0, 20.0, 50.0), Vec3::new(5.0, 15.0, -120.0)],
                [Vec3::new(25.0, 0.0, 50.0), Vec3::new(50.0, 30.0, -115.0)],
            ],
            default_curve: Params::DEFAULT_CURVE,
            curve_path_segments: Params::CURVE_PATH_SEGMENTS,
            camera_eye: Params::GAME_CAMERA_EYE,
            camera_look_at: Params::GAME_CAMERA_LOOK_AT,
            camera_follow_offset: Params::CAMERA_FOLLOW_OFFSET,
            camera_follow_lerp: Params::CAMERA_FOLLOW_LERP,
            skybox: [
                "pitch/right.jpg",
                "pitch/left.jpg",
                "pitch/top.jpg",
                "pitch/bottom.jpg",
                "pitch/front.jpg",
                "pitch/back.jpg",
            ],
            ball_texture: "textures/soccer_ball.jpg",
            yellow_card_texture: "textures/yellow_card.jpg",
            red_card_texture: "textures/red_card.jpg",
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_card_layout(mut self, layout: CardLayout) -> Self {
        self.card_layout = layout;
        self
    }

    /// Distance below which the ball strikes a card
    pub fn strike_distance(&self) -> f32 {
        self.ball_radius + self.card_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_bounds_are_exclusive() {
        let bounds = GoalHeightBounds::default();
        assert!(!bounds.allows_shrink(1.0));
        assert!(bounds.allows_shrink(1.01));
        assert!(!bounds.allows_expand(15.0));
        assert!(bounds.allows_expand(14.99));
    }

    #[test]
    fn test_viewer_defaults() {
        let config = ViewerConfig::new();
        assert!((config.goal.height - 3.2).abs() < 1e-6, "Goal is 16 balls tall");
        assert_eq!(config.ball_position.y, config.ball_radius, "Ball rests on the field");
        assert_eq!(config.goal.net_opacity, 1.0);
    }

    #[test]
    fn test_viewer_clamp_ball_speed() {
        let config = ViewerConfig::new();
        assert_eq!(config.clamp_ball_speed(0.0), 0.1);
        assert_eq!(config.clamp_ball_speed(42.0), 10.0);
        assert_eq!(config.clamp_ball_speed(2.5), 2.5);
    }

    #[test]
    fn test_game_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.goal.height, 40.0);
        assert_eq!(config.goal.anchor.z, -100.0);
        assert_eq!(config.curve_controls.len(), 3);
        assert_eq!(config.default_curve, 1, "Centre curve is selected first");
        assert_eq!(config.strike_distance(), 3.0);
        assert_eq!(config.card_layout, CardLayout::Classic);
    }
}
