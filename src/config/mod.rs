pub mod facility;
pub mod hardware;
pub mod model;
pub mod workload;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use facility::FacilitySpec;
pub use hardware::HardwareSpec;
pub use model::{ModelSpec, ModelType};
pub use workload::{Phase, WorkloadSpec};

/// Main configuration for a carbon estimation run
///
/// One fully-populated record per run; the calculator never reads ambient
/// state. All fields are absolute units (parameter counts, token counts,
/// efficiency as a fraction) — unit conversion from CLI-friendly forms
/// (billions, trillions, percent) happens in the CLI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub model: ModelSpec,
    pub workload: WorkloadSpec,
    pub hardware: HardwareSpec,
    pub facility: FacilitySpec,
    /// Reference-server embodied-carbon dataset; only consulted for
    /// training runs, and its absence degrades to operational-only.
    pub embodied_data: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelSpec::default(),
            workload: WorkloadSpec::default(),
            hardware: HardwareSpec::default(),
            facility: FacilitySpec::default(),
            embodied_data: None,
        }
    }
}

impl Config {
    /// Defaults for the given phase (training token defaults don't make
    /// sense for inference, so the token count switches with the phase).
    pub fn for_phase(phase: Phase) -> Self {
        let token_count = match phase {
            Phase::Train => 300e12,
            Phase::Infer => 5e3,
        };
        Self {
            workload: WorkloadSpec { phase, token_count },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.total_parameters, 175e9);
        assert_eq!(config.hardware.device, "V100");
        assert_eq!(config.hardware.device_count, 10_000);
        assert_eq!(config.facility.pue, 1.1);
        assert!(config.embodied_data.is_none());
    }

    #[test]
    fn test_for_phase_tokens() {
        assert_eq!(Config::for_phase(Phase::Train).workload.token_count, 300e12);
        assert_eq!(Config::for_phase(Phase::Infer).workload.token_count, 5e3);
    }
}
