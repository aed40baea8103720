//! Embodied-carbon reference dataset and amortization
//!
//! Reads a row-structured `hardware.csv` describing one reference server:
//! per-component manufacturing footprint as unit size (die area in cm2 or
//! capacity in GB) times carbon-per-area (CPA) times component count. The
//! job is charged the fraction of the server's lifetime it consumes, scaled
//! to the fleet size of the run.

use crate::error::CarbonError;
use std::fs;
use std::path::Path;

/// Assumed operational lifetime of the reference hardware
pub const HARDWARE_LIFESPAN_YEARS: f64 = 5.0;

const LIFESPAN_SECONDS: f64 = HARDWARE_LIFESPAN_YEARS * 365.0 * 24.0 * 3600.0;

/// Share of server embodied carbon attributed to components not listed in
/// the dataset (mainboard, chassis, PSU), per LLMCarbon Table 5
const OTHER_COMPONENTS_SHARE: f64 = 0.15;

/// One component row of the reference-server dataset
#[derive(Debug, Clone)]
pub struct ComponentRow {
    pub name: String,
    /// Die area in cm2 or capacity in GB, per component
    pub unit: f64,
    /// kgCO2eq per cm2 or per GB
    pub cpa_kg_per_unit: f64,
    /// Components of this kind in the reference server
    pub count: f64,
}

/// Parsed embodied-carbon dataset for one reference server configuration
#[derive(Debug, Clone)]
pub struct EmbodiedCarbonTable {
    rows: Vec<ComponentRow>,
}

impl EmbodiedCarbonTable {
    /// Read and parse the dataset; opened, read fully, and closed here.
    pub fn load(path: &Path) -> Result<Self, CarbonError> {
        let text = fs::read_to_string(path).map_err(|e| {
            CarbonError::MissingHardwareData(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&text)
    }

    /// Parse CSV text with header
    /// `hardware,unit (cm2 or GB),CPA (kgCO2/cm2 or GB),num`.
    ///
    /// Columns are located by header prefix so unit annotations in the
    /// header don't have to match exactly.
    pub fn parse(text: &str) -> Result<Self, CarbonError> {
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());
        let header = lines
            .next()
            .ok_or_else(|| CarbonError::MissingHardwareData("dataset is empty".to_string()))?;

        let columns: Vec<String> = header
            .split(',')
            .map(|c| c.trim().to_lowercase())
            .collect();
        let col = |prefix: &str| -> Result<usize, CarbonError> {
            columns
                .iter()
                .position(|c| c.starts_with(prefix))
                .ok_or_else(|| {
                    CarbonError::MissingHardwareData(format!("missing '{}' column", prefix))
                })
        };
        let unit_col = col("unit")?;
        let cpa_col = col("cpa")?;
        let num_col = col("num")?;

        let mut rows = Vec::new();
        for (lineno, line) in lines.enumerate() {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let field = |idx: usize| -> Result<f64, CarbonError> {
                let raw = fields.get(idx).ok_or_else(|| {
                    CarbonError::MissingHardwareData(format!(
                        "row {}: missing column {}",
                        lineno + 2,
                        idx + 1
                    ))
                })?;
                let value: f64 = raw.parse().map_err(|_| {
                    CarbonError::MissingHardwareData(format!(
                        "row {}: '{}' is not a number",
                        lineno + 2,
                        raw
                    ))
                })?;
                if !value.is_finite() || value < 0.0 {
                    return Err(CarbonError::MissingHardwareData(format!(
                        "row {}: negative or non-finite value {}",
                        lineno + 2,
                        value
                    )));
                }
                Ok(value)
            };

            rows.push(ComponentRow {
                name: fields.first().unwrap_or(&"").to_string(),
                unit: field(unit_col)?,
                cpa_kg_per_unit: field(cpa_col)?,
                count: field(num_col)?,
            });
        }

        if rows.is_empty() {
            return Err(CarbonError::MissingHardwareData(
                "dataset has a header but no component rows".to_string(),
            ));
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ComponentRow] {
        &self.rows
    }

    /// Accelerator count in the reference server; the amortized share is
    /// rescaled from this to the run's fleet size.
    pub fn reference_device_count(&self) -> Result<f64, CarbonError> {
        let gpu = self
            .rows
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case("gpu") || r.name.eq_ignore_ascii_case("tpu"))
            .ok_or_else(|| {
                CarbonError::MissingHardwareData(
                    "no GPU/TPU row to take the reference device count from".to_string(),
                )
            })?;
        if gpu.count <= 0.0 {
            return Err(CarbonError::MissingHardwareData(
                "reference device count must be positive".to_string(),
            ));
        }
        Ok(gpu.count)
    }

    /// Total embodied carbon of the reference server in kgCO2eq, including
    /// the uplift for unlisted components.
    pub fn total_embodied_kg(&self) -> f64 {
        let listed: f64 = self
            .rows
            .iter()
            .map(|r| r.unit * r.cpa_kg_per_unit * r.count)
            .sum();
        listed / (1.0 - OTHER_COMPONENTS_SHARE)
    }

    /// Embodied carbon attributable to this run, in tonnes: the reference
    /// server's footprint, prorated by the fraction of its lifetime the job
    /// consumes and by fleet size relative to the reference configuration.
    pub fn amortized_tonnes(
        &self,
        execution_time_seconds: f64,
        device_count: u64,
    ) -> Result<f64, CarbonError> {
        let reference_count = self.reference_device_count()?;
        let lifetime_fraction = execution_time_seconds / LIFESPAN_SECONDS;
        let fleet_scale = device_count as f64 / reference_count;
        Ok(self.total_embodied_kg() * lifetime_fraction * fleet_scale / 1000.0)
    }
}
