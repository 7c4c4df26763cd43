use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, info, warn};
use polars::frame::DataFrame;

use crate::config::Config;
use crate::error::PrescriptorResult;
use crate::formatters::{CSVFormatter, OutputGenerator};

// Re-exports
pub use column_names as COL;

// Modules
pub mod column_names;
pub mod config;
pub mod dates;
pub mod error;
pub mod formatters;
pub mod historical;
pub mod interventions;
pub mod prescription;

/// Parameters of a single prescription run.
#[derive(Debug, Clone, PartialEq)]
pub struct PrescribeParams {
    /// First day to prescribe for, included
    pub start_date: NaiveDate,
    /// Last day to prescribe for, included
    pub end_date: NaiveDate,
    /// Path to the table of past interventions
    pub interventions_past: PathBuf,
}

impl PrescribeParams {
    /// Builds params from `YYYY-MM-DD` date strings.
    pub fn new<P: Into<PathBuf>>(
        start_date: &str,
        end_date: &str,
        interventions_past: P,
    ) -> PrescriptorResult<Self> {
        Ok(Self {
            start_date: dates::parse_date(start_date)?,
            end_date: dates::parse_date(end_date)?,
            interventions_past: interventions_past.into(),
        })
    }
}

/// Type for generating maximum-stringency prescriptions
#[derive(Debug, Default)]
pub struct Prescriptor {
    pub config: Config,
}

impl Prescriptor {
    /// Setup the Prescriptor object with default configuration
    pub fn new() -> Self {
        Self::new_with_config(Config::default())
    }

    /// Setup the Prescriptor object with custom configuration
    pub fn new_with_config(config: Config) -> Self {
        debug!("config: {config:?}");
        Self { config }
    }

    /// Generates the prescriptions table for every geo in the historical data and every day of
    /// the requested range.
    pub fn prescribe(&self, params: &PrescribeParams) -> PrescriptorResult<DataFrame> {
        let historical = historical::load_historical(&params.interventions_past, &self.config)?;
        let geos = historical::geos(&historical)?;
        let dates = dates::date_range(params.start_date, params.end_date);
        if dates.is_empty() {
            warn!(
                "start date {} is after end date {}, no prescriptions will be generated",
                params.start_date, params.end_date
            );
        }
        prescription::max_prescriptions(&geos, &dates)
    }

    /// Generates prescriptions and writes them as CSV to `output_file`, creating any missing
    /// parent directories and overwriting an existing file.
    pub fn prescribe_to_file<P: AsRef<Path>>(
        &self,
        params: &PrescribeParams,
        output_file: P,
    ) -> PrescriptorResult<()> {
        let mut prescriptions = self.prescribe(params)?;
        write_output(CSVFormatter, &mut prescriptions, output_file)
    }
}

/// Writes `df` to `output_file` with the given generator, creating parent directories as needed.
pub fn write_output<T, P>(
    output_generator: T,
    df: &mut DataFrame,
    output_file: P,
) -> PrescriptorResult<()>
where
    T: OutputGenerator,
    P: AsRef<Path>,
{
    let output_file = output_file.as_ref();
    if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut f = File::create(output_file)?;
    output_generator.save(&mut f, df)?;
    info!("wrote {} rows to {}", df.height(), output_file.display());
    Ok(())
}

/// Generates maximum-stringency prescriptions from `start_date` to `end_date` (both `YYYY-MM-DD`,
/// inclusive) for every geo in `historical_path` and writes them to `output_path`.
pub fn generate<P, Q>(
    start_date: &str,
    end_date: &str,
    historical_path: P,
    output_path: Q,
) -> PrescriptorResult<()>
where
    P: Into<PathBuf>,
    Q: AsRef<Path>,
{
    let params = PrescribeParams::new(start_date, end_date, historical_path)?;
    Prescriptor::new().prescribe_to_file(&params, output_path)
}
