//! Carbon calculator: validate, compute, report
//!
//! One `run()` is a single forward pass over immutable inputs; there is no
//! retained state between runs and no retry path, since any failure is a
//! bad input rather than a transient fault.

use serde::{Deserialize, Serialize};

use crate::config::{Config, ModelType, Phase};
use crate::error::CarbonError;
use crate::estimate;
use crate::hardware::{peak_flops, EmbodiedCarbonTable};

/// Result record for one estimation run; constructed once, immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonResult {
    pub execution_time_seconds: f64,
    pub total_energy_mwh: f64,
    pub operational_co2_tonnes: f64,
    /// Zero unless the embodied extension ran
    pub embodied_co2_tonnes: f64,
    pub total_co2_tonnes: f64,
}

impl CarbonResult {
    pub fn execution_time_days(&self) -> f64 {
        self.execution_time_seconds / 86_400.0
    }
}

/// Estimates the carbon footprint of one training or inference workload.
///
/// Polymorphic over [`Phase`]: the phase selects the FLOPs multiplier and
/// whether the embodied-carbon extension is attempted.
pub struct CarbonCalculator {
    config: Config,
}

impl CarbonCalculator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full estimation pipeline.
    ///
    /// Validation happens before any arithmetic: the device lookup first,
    /// then numeric ranges in pipeline order. A missing or malformed
    /// embodied dataset degrades to an operational-only result with a
    /// warning; every other failure aborts the run.
    pub fn run(&self) -> Result<CarbonResult, CarbonError> {
        let peak = peak_flops(&self.config.hardware.device)?;
        self.check_model_invariants()?;

        let flops = estimate::total_flops(
            self.config.model.effective_parameters(),
            self.config.workload.token_count,
            self.config.workload.phase.flop_multiplier(),
        )?;
        let execution_time_seconds = estimate::execution_time_seconds(
            flops,
            self.config.hardware.device_count,
            peak,
            self.config.hardware.efficiency_fraction,
        )?;
        let energy_kwh = estimate::total_energy_kwh(
            self.config.hardware.device_count,
            self.config.hardware.system_power_watts,
            execution_time_seconds,
            self.config.facility.pue,
        )?;
        let operational_co2_tonnes = estimate::operational_tonnes(
            energy_kwh,
            self.config.facility.grid_co2_intensity_g_per_kwh,
        )?;

        let embodied_co2_tonnes = match self.embodied_co2_tonnes(execution_time_seconds) {
            Ok(Some(tonnes)) => tonnes,
            Ok(None) => 0.0,
            Err(CarbonError::MissingHardwareData(reason)) => {
                tracing::warn!(%reason, "embodied data unavailable, reporting operational carbon only");
                0.0
            }
            Err(other) => return Err(other),
        };

        Ok(CarbonResult {
            execution_time_seconds,
            total_energy_mwh: energy_kwh / 1000.0,
            operational_co2_tonnes,
            embodied_co2_tonnes,
            total_co2_tonnes: operational_co2_tonnes + embodied_co2_tonnes,
        })
    }

    /// Amortized embodied carbon for this run, without the degrade-to-zero
    /// fallback `run()` applies. `Ok(None)` means the extension does not
    /// apply (inference, or no dataset configured).
    pub fn embodied_co2_tonnes(
        &self,
        execution_time_seconds: f64,
    ) -> Result<Option<f64>, CarbonError> {
        if self.config.workload.phase != Phase::Train {
            return Ok(None);
        }
        let Some(path) = &self.config.embodied_data else {
            return Ok(None);
        };
        let table = EmbodiedCarbonTable::load(path)?;
        let tonnes =
            table.amortized_tonnes(execution_time_seconds, self.config.hardware.device_count)?;
        Ok(Some(tonnes))
    }

    fn check_model_invariants(&self) -> Result<(), CarbonError> {
        if !(self.config.model.total_parameters > 0.0) {
            return Err(CarbonError::invalid(
                "total_parameters",
                format!("must be > 0, got {}", self.config.model.total_parameters),
            ));
        }
        if self.config.model.model_type == ModelType::Moe
            && self.config.model.base_model_parameters > self.config.model.total_parameters
        {
            return Err(CarbonError::invalid(
                "base_model_parameters",
                "must not exceed total_parameters for MoE models",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HardwareSpec, ModelSpec, WorkloadSpec};

    fn training_config() -> Config {
        // Scenario: 175B dense, 300T tokens, 1024 V100s at 25%
        Config {
            model: ModelSpec {
                total_parameters: 175e9,
                ..Default::default()
            },
            workload: WorkloadSpec {
                phase: Phase::Train,
                token_count: 300e12,
            },
            hardware: HardwareSpec {
                device: "V100".to_string(),
                device_count: 1024,
                efficiency_fraction: 0.25,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_training_scenario_reference_numbers() {
        let result = CarbonCalculator::new(training_config()).run().unwrap();

        // flops = 6 * 175e9 * 300e12 = 3.15e26
        // time = 3.15e26 / (1024 * 125e12 * 0.25) = 9.84375e9 s
        let expected_secs = 9.84375e9;
        assert!((result.execution_time_seconds - expected_secs).abs() / expected_secs < 1e-12);

        // energy = (1024 * 330 / 1000) kW * (t / 3600) h * 1.1 / 1000 MWh
        let expected_mwh = (1024.0 * 330.0 / 1000.0) * (expected_secs / 3600.0) * 1.1 / 1000.0;
        assert!((result.total_energy_mwh - expected_mwh).abs() / expected_mwh < 1e-12);

        // co2 = kwh * 429 / 1e6
        let expected_co2 = expected_mwh * 1000.0 * 429.0 / 1e6;
        assert!((result.operational_co2_tonnes - expected_co2).abs() / expected_co2 < 1e-12);

        assert_eq!(result.embodied_co2_tonnes, 0.0);
        assert_eq!(result.total_co2_tonnes, result.operational_co2_tonnes);
    }

    #[test]
    fn test_inference_scenario_reference_numbers() {
        // 70B dense, 5M tokens, 8 A100s at 30%
        let config = Config {
            model: ModelSpec {
                total_parameters: 70e9,
                ..Default::default()
            },
            workload: WorkloadSpec {
                phase: Phase::Infer,
                token_count: 5e6,
            },
            hardware: HardwareSpec {
                device: "A100".to_string(),
                device_count: 8,
                efficiency_fraction: 0.30,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = CarbonCalculator::new(config).run().unwrap();

        // flops = 2 * 70e9 * 5e6 = 7e17; time = 7e17 / (8 * 312e12 * 0.3)
        let expected_secs = 7e17 / (8.0 * 312e12 * 0.30);
        assert!((result.execution_time_seconds - expected_secs).abs() / expected_secs < 1e-12);
        assert!(result.execution_time_seconds < 1000.0);
    }

    #[test]
    fn test_moe_uses_base_parameters() {
        let mut dense = training_config();
        let mut moe = training_config();
        moe.model.model_type = ModelType::Moe;
        moe.model.base_model_parameters = 2.3e9;
        dense.model.total_parameters = moe.model.total_parameters;

        let dense_result = CarbonCalculator::new(dense).run().unwrap();
        let moe_result = CarbonCalculator::new(moe).run().unwrap();

        // 2.3e9 active vs 175e9 total
        let ratio = moe_result.execution_time_seconds / dense_result.execution_time_seconds;
        assert!((ratio - 2.3e9 / 175e9).abs() < 1e-12);
    }

    #[test]
    fn test_moe_base_exceeding_total_rejected() {
        let mut config = training_config();
        config.model.model_type = ModelType::Moe;
        config.model.total_parameters = 1e9;
        config.model.base_model_parameters = 2.3e9;
        let err = CarbonCalculator::new(config).run().unwrap_err();
        assert!(
            matches!(err, CarbonError::InvalidParameter { field, .. } if field == "base_model_parameters")
        );
    }

    #[test]
    fn test_unknown_device_takes_priority() {
        let mut config = training_config();
        config.hardware.device = "GTX1080".to_string();
        config.workload.token_count = -1.0; // also invalid
        let err = CarbonCalculator::new(config).run().unwrap_err();
        assert!(matches!(err, CarbonError::UnknownDevice(_)));
    }

    #[test]
    fn test_zero_tokens_rejected() {
        let mut config = training_config();
        config.workload.token_count = 0.0;
        let err = CarbonCalculator::new(config).run().unwrap_err();
        assert!(
            matches!(err, CarbonError::InvalidParameter { field, .. } if field == "token_count")
        );
    }

    #[test]
    fn test_missing_embodied_dataset_degrades() {
        let mut config = training_config();
        config.embodied_data = Some("definitely/not/here.csv".into());
        let result = CarbonCalculator::new(config).run().unwrap();
        assert_eq!(result.embodied_co2_tonnes, 0.0);
        assert!(result.operational_co2_tonnes > 0.0);
    }

    #[test]
    fn test_embodied_not_attempted_for_inference() {
        let mut config = training_config();
        config.workload.phase = Phase::Infer;
        config.workload.token_count = 5e6;
        config.embodied_data = Some("definitely/not/here.csv".into());
        let calc = CarbonCalculator::new(config);
        assert!(matches!(calc.embodied_co2_tonnes(100.0), Ok(None)));
    }
}
