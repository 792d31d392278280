//! Selection model — a cosmetic probability shown next to the ATS score.
//!
//! The scoring pipeline never depends on it. `Screener` carries it as an
//! `Option<Arc<dyn SelectionModel>>` so it can be swapped or disabled via config.

pub mod logistic;

pub use logistic::LogisticRegression;

/// Experience level passed for every resume; no resume field feeds it yet.
pub const PLACEHOLDER_EXPERIENCE_LEVEL: f64 = 1.0;

pub trait SelectionModel: Send + Sync {
    /// Probability in `[0, 1]` that a candidate with these features is selected.
    fn predict_probability(&self, skill_count: usize, experience_level: f64) -> f64;
}
