use serde::Serialize;
use serde_json::Value;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;
pub const NEUTRAL_MIDPOINT: f64 = 50.0;

/// Uniform output shape for the five top-level dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreDimension {
    pub name: String,
    pub score: f64,
    pub confidence: f64,
    pub details: Value,
}

impl ScoreDimension {
    pub fn new(name: &str, score: f64, confidence: f64, details: Value) -> Self {
        Self {
            name: name.to_string(),
            score: clamp_score(score),
            confidence: clamp_score(confidence),
            details,
        }
    }
}

/// Clamp to [0, 100] and round to one decimal. NaN maps to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return SCORE_MIN;
    }
    round1(value.clamp(SCORE_MIN, SCORE_MAX))
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// How much data backs a score: `samples / full` as a percentage, capped.
pub fn sample_confidence(samples: usize, full: usize) -> f64 {
    if full == 0 {
        return SCORE_MAX;
    }
    clamp_score(samples as f64 / full as f64 * SCORE_MAX)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Coefficient of variation (population). 0 for fewer than two samples or a zero mean.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    if m <= 0.0 {
        return 0.0;
    }
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt() / m
}
