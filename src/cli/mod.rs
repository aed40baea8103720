pub mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "llmcarbon")]
#[command(about = "Carbon footprint estimation for LLM workloads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Flags shared by both subcommands
#[derive(Args)]
pub struct CommonArgs {
    /// Model type: dense or moe
    #[arg(long, default_value = "dense")]
    pub model_type: String,
    /// Total model parameters in billions
    #[arg(long, default_value_t = 175.0)]
    pub parameters_b: f64,
    /// Active/base parameters in billions (MoE only)
    #[arg(long, default_value_t = 2.3)]
    pub base_model_params_b: f64,
    /// Accelerator: V100, H100, A100, TPUv3 or TPUv4
    #[arg(long, default_value = "V100")]
    pub device: String,
    /// Number of accelerators
    #[arg(long, default_value_t = 10_000)]
    pub device_num: u64,
    /// Average system power per device in watts
    #[arg(long, default_value_t = 330.0)]
    pub system_power_w: f64,
    /// Realized share of peak throughput, in percent (0-100]
    #[arg(long, default_value_t = 19.7)]
    pub hardware_efficiency_perc: f64,
    /// Datacenter Power Usage Effectiveness
    #[arg(long, default_value_t = 1.1)]
    pub pue: f64,
    /// Grid carbon intensity in gCO2eq/kWh
    #[arg(long, default_value_t = 429.0)]
    pub co2_intensity_g_kwh: f64,
    /// Write the result record to a JSON file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the carbon footprint of a training run
    Train {
        #[command(flatten)]
        common: CommonArgs,
        /// Tokens processed during training, in trillions
        #[arg(long, default_value_t = 300.0)]
        train_tokens_t: f64,
        /// Reference-server embodied-carbon dataset (CSV); skipped with a
        /// warning when missing
        #[arg(long, default_value = "hardware.csv")]
        hardware_csv: PathBuf,
    },
    /// Estimate the carbon footprint of serving inference requests
    Infer {
        #[command(flatten)]
        common: CommonArgs,
        /// Tokens processed during inference, in thousands
        #[arg(long, default_value_t = 5.0)]
        infer_tokens_k: f64,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train {
            common,
            train_tokens_t,
            hardware_csv,
        } => commands::train(common, train_tokens_t, hardware_csv),
        Commands::Infer {
            common,
            infer_tokens_k,
        } => commands::infer(common, infer_tokens_k),
    }
}
