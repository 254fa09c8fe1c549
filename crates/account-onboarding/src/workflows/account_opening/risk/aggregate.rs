use super::factor::{RiskFactor, RiskLevel};

const EMPTY_FACTOR_SCORE: u8 = 50;

/// Weighted mean of factor scores, rounded and clamped, with its classification.
///
/// Weights are used as given; they are not rescaled to sum to one.
pub(crate) fn aggregate(factors: &[RiskFactor]) -> (u8, RiskLevel) {
    let total_weight: f64 = factors.iter().map(|factor| factor.weight()).sum();
    if factors.is_empty() || total_weight <= 0.0 || !total_weight.is_finite() {
        return (EMPTY_FACTOR_SCORE, RiskLevel::Medium);
    }

    let weighted: f64 = factors
        .iter()
        .map(|factor| f64::from(factor.score()) * factor.weight())
        .sum();
    let score = (weighted / total_weight).round().clamp(0.0, 100.0) as u8;

    (score, RiskLevel::from_score(score))
}
