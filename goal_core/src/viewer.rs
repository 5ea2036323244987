//! Goal model viewer: a goal, a ball and a field with keyboard toggles

use glam::{Mat4, Quat, Vec3};

use crate::camera::OrbitCamera;
use crate::components::Ball;
use crate::config::ViewerConfig;
use crate::demo::Demo;
use crate::goal::Goal;
use crate::input::{Command, Keymap};
use crate::material::Material;
use crate::primitives::{Describe, Field};
use crate::resources::RoundSummary;
use crate::scene::{Background, Scene};
use crate::systems::orbit_ball;
use crate::transform::degrees_to_radians;

/// Toggles and speed driven by the keyboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerState {
    pub orbit_enabled: bool,
    pub wireframe: bool,
    pub rotate_x: bool,
    pub rotate_y: bool,
    /// Degrees per frame for the rotation animations
    pub ball_speed: f32,
}

impl ViewerState {
    pub fn new(ball_speed: f32) -> Self {
        Self {
            orbit_enabled: true,
            wireframe: false,
            rotate_x: false,
            rotate_y: false,
            ball_speed,
        }
    }
}

pub struct GoalViewer {
    config: ViewerConfig,
    goal: Goal,
    ball: Ball,
    field: Field,
    state: ViewerState,
    camera: OrbitCamera,
}

impl GoalViewer {
    pub fn new(config: ViewerConfig) -> Self {
        let goal = Goal::new(config.goal);
        let ball = Ball::new(
            config.ball_radius,
            config.ball_position,
            Material::phong(config.ball_color),
        );
        let field = Field {
            width: config.field_width,
            length: config.field_length,
            material: Material::phong(config.field_color),
        };
        let state = ViewerState::new(config.ball_speed);
        let camera = OrbitCamera::looking_at(config.camera_eye, config.camera_target);

        Self {
            config,
            goal,
            ball,
            field,
            state,
            camera,
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::ToggleOrbit => {
                self.state.orbit_enabled = !self.state.orbit_enabled;
                self.camera.enabled = self.state.orbit_enabled;
            }
            Command::ToggleWireframe => self.state.wireframe = !self.state.wireframe,
            Command::ToggleRotateX => self.state.rotate_x = !self.state.rotate_x,
            Command::ToggleRotateY => self.state.rotate_y = !self.state.rotate_y,
            Command::ShrinkGoal => {
                if let Some(goal) = self.goal.shrink_within(&self.config.height_bounds) {
                    self.goal = goal;
                    log::debug!("Goal shrunk to height {:.3}", self.goal.height());
                }
            }
            Command::ExpandGoal => {
                if let Some(goal) = self.goal.expand_within(&self.config.height_bounds) {
                    self.goal = goal;
                    log::debug!("Goal expanded to height {:.3}", self.goal.height());
                }
            }
            Command::SpeedUp => self.change_speed(self.config.ball_speed_step),
            Command::SlowDown => self.change_speed(-self.config.ball_speed_step),
            Command::PreviousCurve
            | Command::NextCurve
            | Command::Launch
            | Command::ToggleCurvePath => {}
        }
    }

    fn change_speed(&mut self, delta: f32) {
        let step = self.config.ball_speed_step;
        // Snap to whole steps so repeated presses do not drift
        let speed = ((self.state.ball_speed + delta) / step).round() * step;
        self.state.ball_speed = self.config.clamp_ball_speed(speed);
    }

    /// One animation frame: rotate the ball about the goal anchor
    pub fn step(&mut self) {
        let angle = degrees_to_radians(-self.state.ball_speed);
        let anchor = self.goal.anchor();
        if self.state.rotate_x {
            orbit_ball(&mut self.ball, anchor, Quat::from_rotation_x(angle));
        }
        if self.state.rotate_y {
            orbit_ball(&mut self.ball, anchor, Quat::from_rotation_y(angle));
        }
    }

    pub fn build_scene(&self) -> Scene {
        let mut scene = Scene::new(Background::Color(self.config.background)).with_viewer_lighting();
        scene.add(self.field.describe());
        scene.add(self.ball.describe());
        scene.extend(self.goal.render_items());
        scene
    }
}

impl Demo for GoalViewer {
    fn name(&self) -> &'static str {
        "goal-viewer"
    }

    fn keymap(&self) -> Keymap {
        Keymap::Viewer
    }

    fn handle(&mut self, command: Command, _now_ms: f64) {
        self.apply(command);
    }

    fn tick(&mut self, _now_ms: f64) -> Option<RoundSummary> {
        self.step();
        None
    }

    fn scene(&self) -> Scene {
        self.build_scene()
    }

    fn view(&self) -> Mat4 {
        self.camera.view()
    }

    fn eye(&self) -> Vec3 {
        self.camera.eye()
    }

    fn wireframe(&self) -> bool {
        self.state.wireframe
    }

    fn orbit_mut(&mut self) -> Option<&mut OrbitCamera> {
        Some(&mut self.camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer() -> GoalViewer {
        GoalViewer::new(ViewerConfig::new())
    }

    #[test]
    fn test_initial_state() {
        let viewer = viewer();
        let state = viewer.state();
        assert!(state.orbit_enabled);
        assert!(!state.wireframe);
        assert!(!state.rotate_x && !state.rotate_y);
        assert_eq!(state.ball_speed, 1.0);
    }

    #[test]
    fn test_toggles() {
        let mut viewer = viewer();
        viewer.apply(Command::ToggleOrbit);
        assert!(!viewer.state().orbit_enabled);
        assert!(!viewer.camera().enabled, "Camera follows the orbit flag");
        viewer.apply(Command::ToggleWireframe);
        assert!(viewer.wireframe());
        viewer.apply(Command::ToggleRotateX);
        viewer.apply(Command::ToggleRotateY);
        assert!(viewer.state().rotate_x && viewer.state().rotate_y);
        viewer.apply(Command::ToggleRotateX);
        assert!(!viewer.state().rotate_x);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut viewer = viewer();
        for _ in 0..200 {
            viewer.apply(Command::SpeedUp);
        }
        assert!((viewer.state().ball_speed - 10.0).abs() < 1e-5);
        for _ in 0..200 {
            viewer.apply(Command::SlowDown);
        }
        assert!((viewer.state().ball_speed - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_goal_rescale_respects_bounds() {
        let mut viewer = viewer();
        let start = viewer.goal().height();
        viewer.apply(Command::ShrinkGoal);
        assert!((viewer.goal().height() - start * 0.95).abs() < 1e-5);

        for _ in 0..200 {
            viewer.apply(Command::ShrinkGoal);
        }
        let floor = viewer.goal().height();
        assert!(floor <= 1.0 && floor > 0.95, "Stops at the first height not above 1");

        for _ in 0..200 {
            viewer.apply(Command::ExpandGoal);
        }
        assert!(viewer.goal().height() >= 15.0);
        assert!(viewer.goal().height() < 15.0 / 0.95);
    }

    #[test]
    fn test_rotation_animates_ball() {
        let mut viewer = viewer();
        let start = viewer.ball().position;
        viewer.step();
        assert_eq!(viewer.ball().position, start, "No motion while animations are off");

        viewer.apply(Command::ToggleRotateY);
        viewer.step();
        assert!(viewer.ball().position.distance(start) > 1e-4);
    }

    #[test]
    fn test_game_commands_are_ignored() {
        let mut viewer = viewer();
        let before = *viewer.state();
        viewer.apply(Command::Launch);
        viewer.apply(Command::NextCurve);
        assert_eq!(*viewer.state(), before);
    }

    #[test]
    fn test_scene_layout_is_stable() {
        let mut viewer = viewer();
        let first = viewer.scene();
        assert_eq!(first.items.len(), 14, "Field, ball and twelve goal parts");
        viewer.apply(Command::ShrinkGoal);
        viewer.apply(Command::ToggleRotateX);
        viewer.step();
        let second = viewer.scene();
        assert_eq!(second.items.len(), first.items.len());
        for (a, b) in first.items.iter().zip(&second.items) {
            assert_eq!(a.shape, b.shape, "Geometry never changes, only transforms");
        }
        assert_eq!(first.background, Background::Color(crate::material::Color::FOREST_GREEN));
    }
}
