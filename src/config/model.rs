use serde::{Deserialize, Serialize};

/// Model architecture class for the FLOPs formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    /// Every parameter is active for every token
    Dense,
    /// Only the base/expert-subset parameters are active per token
    Moe,
}

/// Model configuration
///
/// Parameter counts are absolute (not billions); the CLI converts before
/// constructing this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    pub model_type: ModelType,
    pub total_parameters: f64,
    /// Active parameter count for MoE models; ignored for dense.
    pub base_model_parameters: f64,
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            model_type: ModelType::Dense,
            total_parameters: 175e9,
            base_model_parameters: 2.3e9,
        }
    }
}

impl ModelSpec {
    /// Per-token active parameter count used by the FLOPs formula.
    ///
    /// MoE models route each token through the base/expert subset only, so
    /// their effective count is `base_model_parameters`.
    pub fn effective_parameters(&self) -> f64 {
        match self.model_type {
            ModelType::Dense => self.total_parameters,
            ModelType::Moe => self.base_model_parameters,
        }
    }
}
