use hecs::World;

use crate::components::{Ball, Card};
use crate::resources::{Events, Tally};

/// Strike every visible card on the selected curve closer to the ball than
/// `strike_distance`.
///
/// A card counts once: striking hides it, and hidden cards are skipped until restored.
pub fn detect_collisions(
    world: &mut World,
    selected_curve: usize,
    strike_distance: f32,
    tally: &mut Tally,
    events: &mut Events,
) {
    let ball_pos = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.position)
    };

    let Some(ball_pos) = ball_pos else {
        return; // No ball in world
    };

    for (_entity, card) in world.query_mut::<&mut Card>() {
        if !card.visible || card.curve_index != selected_curve {
            continue;
        }
        if card.position.distance(ball_pos) < strike_distance && card.strike() {
            tally.record(card.category);
            events.cards_struck.push(card.category);
            log::debug!(
                "{:?} card struck on curve {} at t={:.2}",
                card.category,
                card.curve_index,
                card.t
            );
        }
    }
}
