use serde::{Deserialize, Serialize};

/// Hardware fleet configuration
///
/// `device` is a key into the peak-throughput table in
/// [`crate::hardware::profiles`]; `efficiency_fraction` is the realized
/// share of peak compute, in (0, 1] after the CLI converts from percent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareSpec {
    pub device: String,
    pub device_count: u64,
    pub system_power_watts: f64,
    pub efficiency_fraction: f64,
}

impl Default for HardwareSpec {
    fn default() -> Self {
        Self {
            device: "V100".to_string(),
            device_count: 10_000,
            system_power_watts: 330.0,
            efficiency_fraction: 0.197,
        }
    }
}
