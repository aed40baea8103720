//! Closed-form estimation chain: FLOPs → execution time → energy → CO2

pub mod carbon;
pub mod compute;
pub mod energy;

pub use carbon::operational_tonnes;
pub use compute::total_flops;
pub use energy::{execution_time_seconds, total_energy_kwh};
