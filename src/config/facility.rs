use serde::{Deserialize, Serialize};

/// Datacenter facility configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilitySpec {
    /// Power Usage Effectiveness: facility power over IT power, >= 1.0
    pub pue: f64,
    /// Grid carbon intensity in gCO2eq per kWh
    pub grid_co2_intensity_g_per_kwh: f64,
}

impl Default for FacilitySpec {
    fn default() -> Self {
        Self {
            pue: 1.1,
            // US national average
            grid_co2_intensity_g_per_kwh: 429.0,
        }
    }
}
