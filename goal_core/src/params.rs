use glam::Vec3;

/// Tuning parameters for the goal viewer and the goal-scoring game
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Goal
    pub const GOAL_HEIGHT_IN_BALLS: f32 = 16.0;
    pub const GOAL_WIDTH_RATIO: f32 = 3.0;
    pub const GOAL_ANGLE_TO_BACK: f32 = 45.0; // degrees
    pub const GOAL_SCALE_FACTOR: f32 = 0.95;
    pub const GOAL_HEIGHT_MIN: f32 = 1.0;
    pub const GOAL_HEIGHT_MAX: f32 = 15.0;
    pub const POST_RADIUS_DIVISOR: f32 = 4.0; // post radius = ball radius / 4
    pub const POST_BASE_RADIUS_DIVISOR: f32 = 3.5;

    // Viewer
    pub const VIEWER_BALL_RADIUS: f32 = 0.2;
    pub const VIEWER_BALL_Z: f32 = 1.0;
    pub const VIEWER_GOAL_Z: f32 = -1.0;
    pub const VIEWER_FIELD_WIDTH: f32 = 50.0;
    pub const VIEWER_FIELD_LENGTH: f32 = 100.0;
    pub const VIEWER_CAMERA_EYE: Vec3 = Vec3::new(0.0, 1.0, 5.0);
    pub const BALL_SPEED_DEFAULT: f32 = 1.0; // degrees per frame
    pub const BALL_SPEED_MIN: f32 = 0.1;
    pub const BALL_SPEED_MAX: f32 = 10.0;
    pub const BALL_SPEED_STEP: f32 = 0.1;

    // Game
    pub const BALL_RADIUS: f32 = 2.5;
    pub const GOAL_DISTANCE: f32 = 100.0;
    pub const GOAL_NET_OPACITY: f32 = 0.4;
    pub const LAP_MS: f64 = 5000.0;
    pub const LAP_END_T: f32 = 0.99;
    pub const BALL_SPIN: f32 = 0.1; // radians per tick about each axis
    pub const CARD_WIDTH_IN_BALLS: f32 = 3.0;
    pub const CARD_HEIGHT_IN_BALLS: f32 = 5.0;
    pub const CARD_DEPTH: f32 = 0.5;
    pub const DEFAULT_CURVE: usize = 1;
    pub const CURVE_PATH_SEGMENTS: usize = 50;
    pub const ARC_LENGTH_DIVISIONS: usize = 200;
    pub const TICK_RATE: f64 = 30.0; // frames per second

    // Game camera
    pub const GAME_CAMERA_EYE: Vec3 = Vec3::new(-5.0, 30.0, 120.0);
    pub const GAME_CAMERA_LOOK_AT: Vec3 = Vec3::new(1.0, -30.0, 20.0);
    pub const CAMERA_FOLLOW_OFFSET: Vec3 = Vec3::new(-5.0, 30.0, 50.0);
    pub const CAMERA_FOLLOW_LERP: f32 = 0.1;

    // Camera projection
    pub const CAMERA_FOV_DEG: f32 = 75.0;
    pub const CAMERA_NEAR: f32 = 0.1;
    pub const CAMERA_FAR: f32 = 1000.0;

    // Score
    pub const SCORE_MAX: f32 = 100.0;
    pub const SCORE_HALF_LIFE: f32 = 10.0; // penalty points that halve the score
    pub const RED_CARD_WEIGHT: u32 = 10;
}
