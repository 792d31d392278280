use tracing::debug;

use crate::model::SelectionModel;

/// One labelled training row: (skills_count, experience, selected).
pub type TrainingRow = (f64, f64, bool);

/// The synthetic rows the model has always been trained on.
pub const TRAINING_ROWS: &[TrainingRow] = &[
    (2.0, 0.0, false),
    (4.0, 1.0, false),
    (6.0, 2.0, true),
    (8.0, 3.0, true),
    (10.0, 4.0, true),
];

const LEARNING_RATE: f64 = 0.01;
const MAX_ITERATIONS: usize = 20_000;
const TOLERANCE: f64 = 1e-6;

/// Two-feature logistic regression with an unpenalized intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    pub weights: [f64; 2],
    pub intercept: f64,
}

impl LogisticRegression {
    /// Fits by batch gradient descent on
    /// `0.5 * |w|^2 + c * Σ log_loss`, the usual L2-penalized objective.
    pub fn fit(rows: &[TrainingRow], c: f64) -> Self {
        let mut weights = [0.0_f64; 2];
        let mut intercept = 0.0_f64;
        let mut iterations = 0;

        for _ in 0..MAX_ITERATIONS {
            iterations += 1;
            let mut grad_w = [weights[0], weights[1]];
            let mut grad_b = 0.0;

            for &(x0, x1, selected) in rows {
                let p = sigmoid(weights[0] * x0 + weights[1] * x1 + intercept);
                let residual = p - if selected { 1.0 } else { 0.0 };
                grad_w[0] += c * residual * x0;
                grad_w[1] += c * residual * x1;
                grad_b += c * residual;
            }

            weights[0] -= LEARNING_RATE * grad_w[0];
            weights[1] -= LEARNING_RATE * grad_w[1];
            intercept -= LEARNING_RATE * grad_b;

            let norm = (grad_w[0].powi(2) + grad_w[1].powi(2) + grad_b.powi(2)).sqrt();
            if norm < TOLERANCE {
                break;
            }
        }

        debug!(?weights, intercept, iterations, "Selection model fitted");
        Self { weights, intercept }
    }

    /// The model trained on [`TRAINING_ROWS`] with `C = 1.0`.
    pub fn trained_default() -> Self {
        Self::fit(TRAINING_ROWS, 1.0)
    }
}

impl SelectionModel for LogisticRegression {
    fn predict_probability(&self, skill_count: usize, experience_level: f64) -> f64 {
        let z = self.weights[0] * skill_count as f64
            + self.weights[1] * experience_level
            + self.intercept;
        sigmoid(z).clamp(0.0, 1.0)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
