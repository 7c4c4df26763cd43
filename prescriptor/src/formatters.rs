use std::io::{Cursor, Write};

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{PrescriptorError, PrescriptorResult};

/// Trait to define output generators. `save` writes the serialized
/// `DataFrame` to a writer and `format` returns it as a string.
pub trait OutputGenerator {
    fn save(&self, writer: &mut impl Write, df: &mut DataFrame) -> PrescriptorResult<()>;
    fn format(&self, df: &mut DataFrame) -> PrescriptorResult<String> {
        // Just creating an empty vec to store the buffered output
        let mut data: Vec<u8> = vec![];
        let mut buff = Cursor::new(&mut data);
        self.save(&mut buff, df)?;

        String::from_utf8(data).map_err(|err| anyhow::Error::from(err).into())
    }
}

/// Format the results as a comma separated file with a header row and
/// no index column. Missing values are written as empty fields.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CSVFormatter;

impl OutputGenerator for CSVFormatter {
    fn save(&self, writer: &mut impl Write, df: &mut DataFrame) -> PrescriptorResult<()> {
        CsvWriter::new(writer)
            .include_header(true)
            .with_separator(b',')
            .finish(df)
            .map_err(|err| match err {
                PolarsError::IO { .. } => PrescriptorError::Io(std::io::Error::other(err)),
                err => err.into(),
            })
    }
}
