//! Goal-scoring game: pick a curve, launch the ball and dodge the cards on the way

use glam::{Mat4, Vec3};
use hecs::{Entity, World};
use rand::Rng;

use crate::camera::FollowCamera;
use crate::components::{Ball, Card, CardCategory};
use crate::config::{CardLayout, GameConfig};
use crate::curve::{curves_from, QuadraticBezier};
use crate::demo::Demo;
use crate::goal::Goal;
use crate::input::{Command, Keymap};
use crate::material::{Color, Material};
use crate::params::Params;
use crate::primitives::{CurvePath, Describe};
use crate::resources::{Events, GameRng, GameState, RoundSummary};
use crate::scene::{Background, Scene};
use crate::systems::*;
use crate::{spawn_ball, spawn_card};

/// Card placement: curve index, arc-length t, category
const CLASSIC_CARDS: [(usize, f32, CardCategory); 9] = [
    (0, 0.15, CardCategory::Yellow),
    (2, 0.25, CardCategory::Yellow),
    (1, 0.35, CardCategory::Red),
    (2, 0.45, CardCategory::Yellow),
    (0, 0.55, CardCategory::Red),
    (1, 0.65, CardCategory::Yellow),
    (2, 0.75, CardCategory::Red),
    (1, 0.85, CardCategory::Yellow),
    (0, 0.95, CardCategory::Yellow),
];

const RED_CARD_PROBABILITY: f64 = 1.0 / 3.0;

/// Where each card goes for the given layout. Placements on curves that do not
/// exist are dropped.
pub fn card_placements(
    layout: CardLayout,
    curve_count: usize,
) -> Vec<(usize, f32, CardCategory)> {
    if curve_count == 0 {
        return Vec::new();
    }
    match layout {
        CardLayout::Classic => CLASSIC_CARDS
            .iter()
            .copied()
            .filter(|(curve, _, _)| *curve < curve_count)
            .collect(),
        CardLayout::Shuffled { seed } => {
            let mut rng = GameRng::new(seed);
            CLASSIC_CARDS
                .iter()
                .map(|&(_, t, _)| {
                    let curve = rng.0.gen_range(0..curve_count);
                    let category = if rng.0.gen_bool(RED_CARD_PROBABILITY) {
                        CardCategory::Red
                    } else {
                        CardCategory::Yellow
                    };
                    (curve, t, category)
                })
                .collect()
        }
    }
}

pub struct GoalGame {
    world: World,
    config: GameConfig,
    curves: Vec<QuadraticBezier>,
    paths: Vec<Vec<Vec3>>,
    goal: Goal,
    ball: Entity,
    cards: Vec<Entity>,
    state: GameState,
    camera: FollowCamera,
    events: Events,
}

impl GoalGame {
    pub fn new(config: GameConfig) -> Self {
        let curves = curves_from(config.ball_start, &config.curve_controls);
        let paths = curves
            .iter()
            .map(|curve| curve.sample_points(config.curve_path_segments))
            .collect();

        let mut world = World::new();
        let ball = spawn_ball(
            &mut world,
            Ball::new(
                config.ball_radius,
                config.ball_start,
                Material::textured(config.ball_texture, Color::WHITE),
            ),
        );

        let cards = card_placements(config.card_layout, curves.len())
            .into_iter()
            .map(|(curve_index, t, category)| {
                let texture = match category {
                    CardCategory::Yellow => config.yellow_card_texture,
                    CardCategory::Red => config.red_card_texture,
                };
                let card = Card::new(
                    config.card_width,
                    config.card_height,
                    config.card_depth,
                    curve_index,
                    &curves[curve_index],
                    t,
                    category,
                    Some(texture),
                );
                spawn_card(&mut world, card)
            })
            .collect();

        let selected = config.default_curve.min(curves.len().saturating_sub(1));
        let camera = FollowCamera::new(
            config.camera_eye,
            config.camera_look_at,
            config.camera_follow_offset,
            config.camera_follow_lerp,
        );

        Self {
            world,
            goal: Goal::new(config.goal),
            curves,
            paths,
            ball,
            cards,
            state: GameState::new(selected),
            camera,
            events: Events::new(),
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn curves(&self) -> &[QuadraticBezier] {
        &self.curves
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    /// Cards in spawn order
    pub fn cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .filter_map(|&entity| self.world.get::<&Card>(entity).ok().map(|card| *card))
            .collect()
    }

    pub fn apply(&mut self, command: Command, now_ms: f64) {
        match command {
            Command::PreviousCurve => self.state.select_previous_curve(),
            Command::NextCurve => self.state.select_next_curve(self.curves.len()),
            Command::ToggleCurvePath => {
                self.state.curve_path_visible = !self.state.curve_path_visible
            }
            Command::Launch => {
                if self.state.launch(now_ms) {
                    log::info!("Ball launched along curve {}", self.state.selected_curve);
                }
            }
            Command::ToggleOrbit
            | Command::ToggleWireframe
            | Command::ToggleRotateX
            | Command::ToggleRotateY
            | Command::ShrinkGoal
            | Command::ExpandGoal
            | Command::SpeedUp
            | Command::SlowDown => {}
        }
    }

    /// Run one game tick at `now_ms`
    pub fn update(&mut self, now_ms: f64) -> &Events {
        // Clear events at start of tick
        self.events.clear();

        if !self.state.animating {
            return &self.events;
        }

        let curve = match self.curves.get(self.state.selected_curve) {
            Some(curve) => curve,
            None => return &self.events,
        };

        let elapsed = now_ms - self.state.round_started_at;

        // 1. Move and spin the ball
        let t = advance_ball(
            &mut self.world,
            curve,
            elapsed,
            self.config.lap_ms,
            self.config.ball_spin,
        );
        self.state.t = t;

        // 2. Strike cards in reach
        detect_collisions(
            &mut self.world,
            self.state.selected_curve,
            self.config.strike_distance(),
            &mut self.state.tally,
            &mut self.events,
        );

        // 3. Trail the ball
        if let Some(ball) = self.ball() {
            self.camera.update(ball.position);
        }

        // 4. Score
        update_score(&mut self.state);

        // 5. End of lap
        if lap_complete(t, elapsed, self.config.lap_ms, self.config.lap_end_t) {
            finish_round(&mut self.state, &mut self.events);
            self.restart();
        }

        &self.events
    }

    /// Back to the starting position; the best score survives
    pub fn restart(&mut self) {
        reset_round(&mut self.world, &mut self.state, self.config.ball_start);
        self.camera.reset();
    }

    pub fn build_scene(&self) -> Scene {
        let mut scene = Scene::new(Background::Skybox(self.config.skybox)).with_stadium_lighting();
        scene.extend(self.goal.render_items());
        if let Some(ball) = self.ball() {
            scene.add(ball.describe());
        }
        scene.extend(self.cards().iter().map(Describe::describe));
        for (index, points) in self.paths.iter().enumerate() {
            let path = CurvePath {
                points: points.clone(),
                material: Material::line(Color::RED),
                visible: self.state.curve_path_visible && index == self.state.selected_curve,
            };
            scene.add(path.describe());
        }
        scene
    }
}

impl Demo for GoalGame {
    fn name(&self) -> &'static str {
        "goal-game"
    }

    fn keymap(&self) -> Keymap {
        Keymap::Game
    }

    fn handle(&mut self, command: Command, now_ms: f64) {
        self.apply(command, now_ms);
    }

    fn tick(&mut self, now_ms: f64) -> Option<RoundSummary> {
        self.update(now_ms).round_over
    }

    fn scene(&self) -> Scene {
        self.build_scene()
    }

    fn view(&self) -> Mat4 {
        self.camera.view()
    }

    fn eye(&self) -> Vec3 {
        self.camera.eye
    }

    fn tick_rate(&self) -> Option<f64> {
        Some(Params::TICK_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GoalGame {
        GoalGame::new(GameConfig::new())
    }

    #[test]
    fn test_classic_layout() {
        let game = game();
        let cards = game.cards();
        assert_eq!(cards.len(), 9);
        let reds = cards
            .iter()
            .filter(|c| c.category == CardCategory::Red)
            .count();
        assert_eq!(reds, 3);
        for curve in 0..3 {
            let on_curve = cards.iter().filter(|c| c.curve_index == curve).count();
            assert_eq!(on_curve, 3, "Three cards per curve");
        }
        let first = cards[0];
        assert_eq!(first.curve_index, 0);
        assert!((first.position - game.curves()[0].point_at(0.15)).length() < 1e-4);
    }

    #[test]
    fn test_shuffled_layout_is_seeded() {
        let a = card_placements(CardLayout::Shuffled { seed: 7 }, 3);
        let b = card_placements(CardLayout::Shuffled { seed: 7 }, 3);
        assert_eq!(a, b, "Same seed, same layout");
        assert_eq!(a.len(), 9);
        for ((curve, t, _), (_, classic_t, _)) in a.iter().zip(CLASSIC_CARDS.iter()) {
            assert!(*curve < 3);
            assert_eq!(t, classic_t, "Shuffling keeps the t values");
        }
    }

    #[test]
    fn test_layout_without_curves_is_empty() {
        assert!(card_placements(CardLayout::Classic, 0).is_empty());
        assert_eq!(card_placements(CardLayout::Classic, 1).len(), 3);
    }

    #[test]
    fn test_tick_is_noop_until_launch() {
        let mut game = game();
        let events = game.update(1000.0);
        assert!(events.cards_struck.is_empty());
        assert!(events.round_over.is_none());
        assert_eq!(game.ball().map(|b| b.position), Some(Vec3::new(0.0, 0.0, 100.0)));
        assert_eq!(game.camera().eye, Params::GAME_CAMERA_EYE);
    }

    #[test]
    fn test_curve_selection_is_clamped() {
        let mut game = game();
        assert_eq!(game.state().selected_curve, 1);
        game.apply(Command::NextCurve, 0.0);
        game.apply(Command::NextCurve, 0.0);
        assert_eq!(game.state().selected_curve, 2);
        for _ in 0..4 {
            game.apply(Command::PreviousCurve, 0.0);
        }
        assert_eq!(game.state().selected_curve, 0);
    }

    #[test]
    fn test_launch_moves_ball_and_camera() {
        let mut game = game();
        game.apply(Command::Launch, 1000.0);
        assert!(game.state().animating);

        game.update(2000.0);
        let ball = game.ball().map(|b| b.position);
        let expected = game.curves()[1].point_at(0.2);
        assert!(ball.map_or(false, |p| (p - expected).length() < 1e-3));
        assert_ne!(game.camera().eye, Params::GAME_CAMERA_EYE);
    }

    #[test]
    fn test_second_launch_is_ignored() {
        let mut game = game();
        game.apply(Command::Launch, 1000.0);
        game.apply(Command::Launch, 3000.0);
        assert_eq!(game.state().round_started_at, 1000.0);
    }

    #[test]
    fn test_curve_path_visibility() {
        let mut game = game();
        let hidden = game.scene();
        let paths: Vec<_> = hidden.items.iter().rev().take(3).collect();
        assert!(paths.iter().all(|item| !item.visible));

        game.apply(Command::ToggleCurvePath, 0.0);
        let shown = game.scene();
        let visible: Vec<bool> = shown.items[shown.items.len() - 3..]
            .iter()
            .map(|item| item.visible)
            .collect();
        assert_eq!(visible, vec![false, true, false], "Only the selected curve");
    }

    #[test]
    fn test_scene_layout() {
        let game = game();
        let scene = game.scene();
        assert_eq!(scene.items.len(), 12 + 1 + 9 + 3);
        assert!(matches!(scene.background, Background::Skybox(_)));
        assert_eq!(scene.lights.len(), 3);
    }

    #[test]
    fn test_demo_tick_rate() {
        let game = game();
        assert_eq!(game.tick_rate(), Some(30.0));
        assert_eq!(game.keymap(), Keymap::Game);
    }
}
