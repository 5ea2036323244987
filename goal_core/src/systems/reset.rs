use glam::Vec3;
use hecs::World;

use crate::components::{Ball, Card};
use crate::resources::GameState;

/// Put the round back to its starting position: counters cleared, every card shown,
/// ball at `ball_start` with no spin
pub fn reset_round(world: &mut World, state: &mut GameState, ball_start: Vec3) {
    state.tally.reset();
    state.recompute_score();
    state.animating = false;
    state.t = 0.0;

    for (_entity, card) in world.query_mut::<&mut Card>() {
        card.restore();
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(ball_start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CardCategory;
    use crate::curve::QuadraticBezier;
    use crate::material::{Color, Material};

    #[test]
    fn test_reset_round() {
        let start = Vec3::new(0.0, 0.0, 100.0);
        let curve = QuadraticBezier::new(
            start,
            Vec3::new(-30.0, 0.0, 50.0),
            Vec3::new(-40.0, 5.0, -120.0),
        );
        let mut world = World::new();
        let mut card = Card::new(7.5, 12.5, 0.5, 0, &curve, 0.15, CardCategory::Yellow, None);
        card.strike();
        world.spawn((card,));
        world.spawn((Ball::new(2.5, curve.point_at(0.7), Material::phong(Color::WHITE)),));

        let mut state = GameState::new(0);
        state.tally.record(CardCategory::Yellow);
        state.tally.record(CardCategory::Red);
        state.recompute_score();
        state.animating = true;

        reset_round(&mut world, &mut state, start);

        assert_eq!(state.tally.yellow, 0);
        assert_eq!(state.tally.red, 0);
        assert_eq!(state.score(), 100.0);
        assert!(!state.animating);
        for (_e, card) in world.query::<&Card>().iter() {
            assert!(card.visible, "Every card is shown again");
        }
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.position, start);
        }
    }
}
