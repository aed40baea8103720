//! CLI command implementations

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use llmcarbon::config::{
    Config, FacilitySpec, HardwareSpec, ModelSpec, ModelType, Phase, WorkloadSpec,
};
use llmcarbon::error::CarbonError;
use llmcarbon::{CarbonCalculator, CarbonResult};

use super::CommonArgs;

pub fn train(common: CommonArgs, train_tokens_t: f64, hardware_csv: PathBuf) -> Result<()> {
    let output = common.output.clone();
    let mut config = build_config(&common, Phase::Train, train_tokens_t * 1e12)?;
    config.embodied_data = Some(hardware_csv);

    let result = CarbonCalculator::new(config).run()?;

    println!();
    println!("╔══════════════════════════════════════════════════╗");
    println!("║        LLM Training Carbon Footprint             ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!("  Estimated run time:  {:.2} days", result.execution_time_days());
    println!("  Energy consumed:     {:.2} MWh", result.total_energy_mwh);
    println!("  Operational carbon:  {:.4} tCO2eq", result.operational_co2_tonnes);
    if result.embodied_co2_tonnes > 0.0 {
        println!("  Embodied carbon:     {:.4} tCO2eq", result.embodied_co2_tonnes);
        println!("  ────────────────────────────────────");
        println!("  Total footprint:     {:.4} tCO2eq", result.total_co2_tonnes);
    }
    print_disclaimer();

    write_output(output, &result)
}

pub fn infer(common: CommonArgs, infer_tokens_k: f64) -> Result<()> {
    let output = common.output.clone();
    let config = build_config(&common, Phase::Infer, infer_tokens_k * 1e3)?;

    let result = CarbonCalculator::new(config).run()?;

    println!();
    println!("╔══════════════════════════════════════════════════╗");
    println!("║        LLM Inference Carbon Footprint            ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!("  Estimated run time:  {:.2} seconds", result.execution_time_seconds);
    println!("  Energy consumed:     {:.6} MWh", result.total_energy_mwh);
    println!("  Operational carbon:  {:.6} tCO2eq", result.operational_co2_tonnes);
    print_disclaimer();

    write_output(output, &result)
}

/// Convert CLI-friendly units (billions, percent) into the absolute-valued
/// config record the calculator consumes.
fn build_config(common: &CommonArgs, phase: Phase, token_count: f64) -> Result<Config> {
    let model_type = match common.model_type.to_lowercase().as_str() {
        "dense" => ModelType::Dense,
        "moe" => ModelType::Moe,
        other => {
            return Err(CarbonError::InvalidParameter {
                field: "model_type",
                reason: format!("expected 'dense' or 'moe', got '{}'", other),
            }
            .into())
        }
    };

    Ok(Config {
        model: ModelSpec {
            model_type,
            total_parameters: common.parameters_b * 1e9,
            base_model_parameters: common.base_model_params_b * 1e9,
        },
        workload: WorkloadSpec { phase, token_count },
        hardware: HardwareSpec {
            device: common.device.clone(),
            device_count: common.device_num,
            system_power_watts: common.system_power_w,
            efficiency_fraction: common.hardware_efficiency_perc / 100.0,
        },
        facility: FacilitySpec {
            pue: common.pue,
            grid_co2_intensity_g_per_kwh: common.co2_intensity_g_kwh,
        },
        embodied_data: None,
    })
}

fn write_output(path: Option<PathBuf>, result: &CarbonResult) -> Result<()> {
    if let Some(path) = path {
        let json = serde_json::to_string_pretty(result)?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("  Result written to {}", path.display());
    }
    Ok(())
}

fn print_disclaimer() {
    println!();
    println!("  Estimates follow the LLMCarbon model; actual emissions vary");
    println!("  with utilization, batch sizes, and grid mix.");
    println!();
}
