//! Total-FLOPs estimation
//!
//! `FLOPs ≈ multiplier × P × D` with P the per-token active parameter count
//! and D the token count (LLMCarbon eq. 4 for training, eq. 5 for
//! inference).

use crate::error::CarbonError;

/// Total floating-point operations for a workload.
///
/// `multiplier` is 6 for training (forward + backward) and 2 for inference
/// (forward only); see [`crate::config::Phase::flop_multiplier`].
pub fn total_flops(
    effective_parameters: f64,
    token_count: f64,
    multiplier: f64,
) -> Result<f64, CarbonError> {
    if !(effective_parameters > 0.0) {
        return Err(CarbonError::invalid(
            "effective_parameters",
            format!("must be > 0, got {}", effective_parameters),
        ));
    }
    if !(token_count > 0.0) {
        return Err(CarbonError::invalid(
            "token_count",
            format!("must be > 0, got {}", token_count),
        ));
    }
    if !(multiplier > 0.0) {
        return Err(CarbonError::invalid(
            "multiplier",
            format!("must be > 0, got {}", multiplier),
        ));
    }
    Ok(effective_parameters * token_count * multiplier)
}
