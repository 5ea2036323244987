use crate::components::CardCategory;
use crate::params::Params;

/// Round score from the card counts: 100 × 2^(−(yellow + 10·red) / 10)
pub fn calculate_score(yellow: u32, red: u32) -> f32 {
    let penalty =
        yellow * CardCategory::Yellow.penalty_weight() + red * CardCategory::Red.penalty_weight();
    Params::SCORE_MAX * 2f32.powf(-(penalty as f32) / Params::SCORE_HALF_LIFE)
}

/// Cards struck during the current round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub yellow: u32,
    pub red: u32,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: CardCategory) {
        match category {
            CardCategory::Yellow => self.yellow += 1,
            CardCategory::Red => self.red += 1,
        }
    }

    pub fn score(&self) -> f32 {
        calculate_score(self.yellow, self.red)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Outcome of a completed lap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSummary {
    pub score: f32,
    pub best: f32,
}

impl RoundSummary {
    /// Text for the end-of-round dialog
    pub fn message(&self) -> String {
        format!(
            "Your score: {:.3}\nHighest score: {:.3}",
            self.score, self.best
        )
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub cards_struck: Vec<CardCategory>,
    pub round_over: Option<RoundSummary>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cards_struck.clear();
        self.round_over = None;
    }
}

/// Seeded generator for shuffled card layouts
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

/// Mutable game state, owned by the game and passed to each system
#[derive(Debug, Clone)]
pub struct GameState {
    pub selected_curve: usize,
    pub animating: bool,
    pub round_started_at: f64, // ms
    pub curve_path_visible: bool,
    pub tally: Tally,
    pub best_score: f32,
    /// Lap parameter from the latest tick
    pub t: f32,
    score: f32,
}

impl GameState {
    pub fn new(selected_curve: usize) -> Self {
        Self {
            selected_curve,
            animating: false,
            round_started_at: 0.0,
            curve_path_visible: false,
            tally: Tally::new(),
            best_score: 0.0,
            t: 0.0,
            score: Params::SCORE_MAX,
        }
    }

    /// Score as of the last recompute
    pub fn score(&self) -> f32 {
        self.score
    }

    /// Re-derive the score from the card counts
    pub fn recompute_score(&mut self) {
        self.score = self.tally.score();
    }

    pub fn select_previous_curve(&mut self) {
        self.selected_curve = self.selected_curve.saturating_sub(1);
    }

    pub fn select_next_curve(&mut self, curve_count: usize) {
        self.selected_curve = (self.selected_curve + 1).min(curve_count.saturating_sub(1));
    }

    /// Start a round at `now_ms` unless one is running; returns whether it started
    pub fn launch(&mut self, now_ms: f64) -> bool {
        if self.animating {
            return false;
        }
        self.animating = true;
        self.round_started_at = now_ms;
        true
    }
}
