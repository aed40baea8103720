use serde::{Deserialize, Serialize};

/// Workload phase; determines the per-token-per-parameter FLOPs multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Train,
    Infer,
}

impl Phase {
    /// Training does a forward and backward pass (~6 FLOPs per token per
    /// parameter); inference is forward-only (~2).
    pub fn flop_multiplier(&self) -> f64 {
        match self {
            Phase::Train => 6.0,
            Phase::Infer => 2.0,
        }
    }
}

/// Workload configuration
///
/// Token count is absolute; the CLI converts from trillions (train) or
/// thousands (infer) before constructing this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadSpec {
    pub phase: Phase,
    pub token_count: f64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            phase: Phase::Train,
            token_count: 300e12,
        }
    }
}
