//! Execution time and facility energy estimation

use crate::error::CarbonError;

/// Wall-clock time to burn through `total_flops` on the fleet.
///
/// Inputs are validated here so a zero device count or efficiency surfaces
/// as an error instead of an infinite duration.
pub fn execution_time_seconds(
    total_flops: f64,
    device_count: u64,
    peak_flops_per_device: f64,
    efficiency_fraction: f64,
) -> Result<f64, CarbonError> {
    if device_count == 0 {
        return Err(CarbonError::invalid("device_count", "must be >= 1"));
    }
    if !(peak_flops_per_device > 0.0) {
        return Err(CarbonError::invalid(
            "peak_flops_per_device",
            format!("must be > 0, got {}", peak_flops_per_device),
        ));
    }
    if !(efficiency_fraction > 0.0 && efficiency_fraction <= 1.0) {
        return Err(CarbonError::invalid(
            "efficiency_fraction",
            format!("must be in (0, 1], got {}", efficiency_fraction),
        ));
    }
    let achieved = device_count as f64 * peak_flops_per_device * efficiency_fraction;
    Ok(total_flops / achieved)
}

/// Facility energy in kWh: fleet IT power times runtime, uplifted by PUE
/// for cooling and distribution overhead.
pub fn total_energy_kwh(
    device_count: u64,
    system_power_watts: f64,
    execution_time_seconds: f64,
    pue: f64,
) -> Result<f64, CarbonError> {
    if !(system_power_watts > 0.0) {
        return Err(CarbonError::invalid(
            "system_power_watts",
            format!("must be > 0, got {}", system_power_watts),
        ));
    }
    if !(pue >= 1.0) {
        return Err(CarbonError::invalid(
            "pue",
            format!("must be >= 1.0 (facility draws at least IT power), got {}", pue),
        ));
    }
    let fleet_power_kw = device_count as f64 * system_power_watts / 1000.0;
    Ok(fleet_power_kw * (execution_time_seconds / 3600.0) * pue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_time_v100_cluster() {
        // 3.15e26 FLOPs on 1024 V100s at 25% of 125 TFLOPs
        let secs = execution_time_seconds(3.15e26, 1024, 125e12, 0.25).unwrap();
        assert!((secs - 9.84375e9).abs() / 9.84375e9 < 1e-12);
    }

    #[test]
    fn test_time_inverse_in_fleet_and_efficiency() {
        let base = execution_time_seconds(1e24, 100, 125e12, 0.2).unwrap();
        let double_fleet = execution_time_seconds(1e24, 200, 125e12, 0.2).unwrap();
        let double_eff = execution_time_seconds(1e24, 100, 125e12, 0.4).unwrap();
        assert!((double_fleet - base / 2.0).abs() / base < 1e-12);
        assert!((double_eff - base / 2.0).abs() / base < 1e-12);
    }

    #[test]
    fn test_zero_inputs_error_not_infinity() {
        assert!(execution_time_seconds(1e24, 0, 125e12, 0.2).is_err());
        assert!(execution_time_seconds(1e24, 100, 0.0, 0.2).is_err());
        assert!(execution_time_seconds(1e24, 100, 125e12, 0.0).is_err());
    }

    #[test]
    fn test_efficiency_above_one_rejected() {
        assert!(execution_time_seconds(1e24, 100, 125e12, 1.5).is_err());
    }

    #[test]
    fn test_energy_formula() {
        // 1000 devices at 330 W for one hour at PUE 1.1
        let kwh = total_energy_kwh(1000, 330.0, 3600.0, 1.1).unwrap();
        assert!((kwh - 363.0).abs() < 1e-9);
    }

    #[test]
    fn test_energy_linear_in_pue() {
        let low = total_energy_kwh(1000, 330.0, 3600.0, 1.1).unwrap();
        let high = total_energy_kwh(1000, 330.0, 3600.0, 2.2).unwrap();
        assert!((high - 2.0 * low).abs() < 1e-9);
    }

    #[test]
    fn test_sub_unity_pue_rejected() {
        assert!(total_energy_kwh(1000, 330.0, 3600.0, 0.9).is_err());
    }
}
