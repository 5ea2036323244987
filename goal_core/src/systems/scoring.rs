use crate::resources::{Events, GameState, RoundSummary};

/// Re-derive the score from the card counts
pub fn update_score(state: &mut GameState) {
    state.recompute_score();
}

/// Close the running round: stop animating, keep the best score and report it
pub fn finish_round(state: &mut GameState, events: &mut Events) -> RoundSummary {
    state.animating = false;
    state.recompute_score();
    state.best_score = state.best_score.max(state.score());

    let summary = RoundSummary {
        score: state.score(),
        best: state.best_score,
    };
    events.round_over = Some(summary);
    log::info!(
        "Round over: score {:.3} (yellow {}, red {}), best {:.3}",
        summary.score,
        state.tally.yellow,
        state.tally.red,
        summary.best
    );
    summary
}
