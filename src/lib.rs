//! Carbon footprint estimation for LLM training and inference
//!
//! Implements the operational-carbon model from the LLMCarbon paper
//! (Faiz et al., 2024): parameter and token counts give total FLOPs, the
//! fleet's achieved throughput gives execution time, power draw and PUE
//! give energy, grid intensity gives CO2. Training runs can additionally
//! amortize a reference server's embodied carbon over the fraction of its
//! lifetime the job consumes.
//!
//! ## Main Components
//!
//! - `config`: per-run value objects (model, workload, hardware, facility)
//! - `hardware`: accelerator peak-throughput table and the embodied-carbon
//!   reference dataset
//! - `estimate`: the pure arithmetic chain
//! - `calculator`: orchestration and the result record

pub mod calculator;
pub mod config;
pub mod error;
pub mod estimate;
pub mod hardware;

pub use calculator::{CarbonCalculator, CarbonResult};
pub use config::Config;
pub use error::CarbonError;
