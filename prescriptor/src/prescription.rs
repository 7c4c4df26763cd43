use chrono::NaiveDate;
use itertools::Itertools;
use log::debug;
use polars::prelude::*;

use crate::dates::format_date;
use crate::error::PrescriptorResult;
use crate::historical::Geo;
use crate::interventions::INTERVENTION_MAXIMA;
use crate::COL;

/// Value of the `PrescriptionIndex` column of every generated row.
pub const PRESCRIPTION_INDEX: i32 = 0;

/// Builds the prescriptions table: one row per geo per date, geos in the given order and dates
/// ascending within each geo, with every intervention column set to its maximum value.
pub fn max_prescriptions(geos: &[Geo], dates: &[NaiveDate]) -> PrescriptorResult<DataFrame> {
    let height = geos.len() * dates.len();
    let formatted_dates = dates.iter().map(format_date).collect_vec();

    let mut country_names: Vec<&str> = Vec::with_capacity(height);
    let mut region_names: Vec<Option<&str>> = Vec::with_capacity(height);
    let mut date_values: Vec<&str> = Vec::with_capacity(height);
    for geo in geos {
        for date in &formatted_dates {
            country_names.push(&geo.country_name);
            region_names.push(geo.region_name.as_deref());
            date_values.push(date);
        }
    }

    let mut columns = vec![
        Series::new(COL::COUNTRY_NAME, country_names),
        Series::new(COL::REGION_NAME, region_names),
        Series::new(COL::DATE, date_values),
    ];
    columns.extend(
        INTERVENTION_MAXIMA
            .iter()
            .map(|&(column, max)| Series::new(column, vec![max; height])),
    );
    columns.push(Series::new(
        COL::PRESCRIPTION_INDEX,
        vec![PRESCRIPTION_INDEX; height],
    ));

    let df = DataFrame::new(columns)?;
    debug!(
        "built {} prescriptions for {} geos over {} days",
        df.height(),
        geos.len(),
        dates.len()
    );
    Ok(df)
}
