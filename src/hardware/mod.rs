pub mod embodied;
pub mod profiles;

pub use embodied::{EmbodiedCarbonTable, HARDWARE_LIFESPAN_YEARS};
pub use profiles::{peak_flops, PEAK_TFLOPS, SUPPORTED_DEVICES};
