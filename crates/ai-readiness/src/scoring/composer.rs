use serde::{Deserialize, Serialize};

use super::warnings::{clamped, CalcWarning};

/// Display range for the composed AI-Readiness score.
pub const DISPLAY_MIN: f64 = 0.0;
pub const DISPLAY_MAX: f64 = 100.0;

/// Composite AI-Readiness score.
///
/// `value` is clipped to the display range; `unclipped` keeps the raw
/// formula output for diagnostics, since a large beta can push it past 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub value: f64,
    pub unclipped: f64,
    pub alpha: f64,
    pub beta: f64,
}

/// AI-R = alpha * V^R + (1 - alpha) * H^R + beta * Synergy%.
///
/// Pure and deterministic: identical inputs always yield identical output.
/// Alpha is clamped to [0, 1] and beta floored at 0, with warnings recorded
/// rather than failures.
pub fn compose(
    v_r: f64,
    h_r: f64,
    synergy_percent: f64,
    alpha: f64,
    beta: f64,
    warnings: &mut Vec<CalcWarning>,
) -> CompositeScore {
    let alpha = clamped("alpha", alpha, 0.0, 1.0, warnings);
    let beta = clamped("beta", beta, 0.0, f64::MAX, warnings);

    let unclipped = alpha * v_r + (1.0 - alpha) * h_r + beta * synergy_percent;

    CompositeScore {
        value: unclipped.clamp(DISPLAY_MIN, DISPLAY_MAX),
        unclipped,
        alpha,
        beta,
    }
}
