//! Operational carbon from grid intensity

use crate::error::CarbonError;

/// Operational CO2 in tonnes: energy times grid intensity, grams to tonnes.
pub fn operational_tonnes(
    total_energy_kwh: f64,
    grid_co2_intensity_g_per_kwh: f64,
) -> Result<f64, CarbonError> {
    if !(grid_co2_intensity_g_per_kwh >= 0.0) {
        return Err(CarbonError::invalid(
            "grid_co2_intensity_g_per_kwh",
            format!("must be >= 0, got {}", grid_co2_intensity_g_per_kwh),
        ));
    }
    Ok(total_energy_kwh * grid_co2_intensity_g_per_kwh / 1_000_000.0)
}
