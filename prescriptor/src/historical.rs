//! Loading of the historical interventions table and derivation of the geos it covers.

use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::path::Path;

use itertools::izip;
use log::{debug, info, warn};
use polars::prelude::*;

use crate::config::{Config, InputEncoding};
use crate::error::{PrescriptorError, PrescriptorResult};
use crate::COL;

/// A jurisdiction: a country, optionally narrowed to one of its regions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Geo {
    pub country_name: String,
    pub region_name: Option<String>,
}

impl Geo {
    pub fn new(country_name: &str, region_name: Option<&str>) -> Self {
        Self {
            country_name: country_name.to_string(),
            region_name: region_name.map(str::to_string),
        }
    }
}

/// Decodes raw file contents into text. Latin-1 maps each byte to the code point of the same value.
pub fn decode(bytes: Vec<u8>, encoding: InputEncoding) -> PrescriptorResult<String> {
    match encoding {
        InputEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        InputEncoding::Utf8 => String::from_utf8(bytes).map_err(|err| {
            PrescriptorError::DataFormat(format!("input is not valid UTF-8: {err}"))
        }),
    }
}

/// Parses the text of a historical interventions table. Every column is read as a string and the
/// required columns must be present.
pub fn read_historical(text: String, config: &Config) -> PrescriptorResult<DataFrame> {
    let separator = u8::try_from(config.separator)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            PrescriptorError::DataFormat(format!(
                "separator '{}' is not a single ASCII character",
                config.separator
            ))
        })?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_separator(separator))
        .into_reader_with_file_handle(Cursor::new(text.into_bytes()))
        .finish()
        .map_err(|err| PrescriptorError::DataFormat(err.to_string()))?;

    let column_names = df.get_column_names();
    for required in COL::REQUIRED_HISTORICAL_COLUMNS {
        if !column_names.contains(&required) {
            return Err(PrescriptorError::MissingColumn(required.to_string()));
        }
    }
    Ok(df)
}

/// Reads the historical interventions table at `path`.
pub fn load_historical<P: AsRef<Path>>(path: P, config: &Config) -> PrescriptorResult<DataFrame> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|err| {
        PrescriptorError::DataFormat(format!("failed to read {}: {err}", path.display()))
    })?;
    let df = read_historical(decode(bytes, config.input_encoding)?, config)?;
    info!("loaded {} historical rows from {}", df.height(), path.display());
    Ok(df)
}

/// Returns the distinct geos of a historical table. Countries are ordered by first appearance, and
/// the regions of each country by their first appearance among that country's rows. A missing
/// region is a region of its own, and an empty name (quoted or not) counts as missing. Rows without
/// a country name are skipped.
pub fn geos(df: &DataFrame) -> PrescriptorResult<Vec<Geo>> {
    let mut countries: Vec<(&str, Vec<Option<&str>>)> = vec![];
    let mut country_idx: HashMap<&str, usize> = HashMap::new();
    let mut seen: HashSet<(&str, Option<&str>)> = HashSet::new();
    let mut skipped = 0usize;

    for (country, region) in izip!(
        df.column(COL::COUNTRY_NAME)?.str()?,
        df.column(COL::REGION_NAME)?.str()?
    ) {
        let region = region.filter(|r| !r.is_empty());
        let Some(country) = country.filter(|c| !c.is_empty()) else {
            skipped += 1;
            continue;
        };
        let idx = *country_idx.entry(country).or_insert_with(|| {
            countries.push((country, vec![]));
            countries.len() - 1
        });
        if seen.insert((country, region)) {
            countries[idx].1.push(region);
        }
    }
    if skipped > 0 {
        debug!("skipped {skipped} rows without a {}", COL::COUNTRY_NAME);
    }

    let geos: Vec<Geo> = countries
        .into_iter()
        .flat_map(|(country, regions)| {
            regions
                .into_iter()
                .map(move |region| Geo::new(country, region))
        })
        .collect();
    if geos.is_empty() {
        warn!("historical data contains no geos");
    }
    debug!("found {} geos", geos.len());
    Ok(geos)
}
