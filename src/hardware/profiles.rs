//! Accelerator peak-throughput table

use crate::error::CarbonError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Published peak throughput in TFLOPs by accelerator
/// (LLMCarbon, Faiz et al. 2024, Table 4)
pub static PEAK_TFLOPS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut t = HashMap::new();
    t.insert("V100", 125.0);
    t.insert("H100", 1979.0);
    t.insert("A100", 312.0);
    t.insert("TPUv3", 123.0);
    t.insert("TPUv4", 275.0);
    t
});

/// Supported device names, in the order shown to users
pub const SUPPORTED_DEVICES: [&str; 5] = ["V100", "H100", "A100", "TPUv3", "TPUv4"];

/// Peak theoretical throughput for a device, in FLOPs per second
pub fn peak_flops(device: &str) -> Result<f64, CarbonError> {
    PEAK_TFLOPS
        .get(device)
        .map(|tflops| tflops * 1e12)
        .ok_or_else(|| CarbonError::UnknownDevice(device.to_string()))
}
