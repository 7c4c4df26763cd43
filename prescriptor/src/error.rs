//! Error types.

use polars::error::PolarsError;

/// The two classes of failure a prescription run can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or incomplete input: unreadable historical table, missing columns, bad dates.
    DataFormat,
    /// Filesystem failure while creating or writing the output.
    Io,
}

#[derive(thiserror::Error, Debug)]
pub enum PrescriptorError {
    #[error("Invalid historical data: {0}")]
    DataFormat(String),
    #[error("Historical data is missing required column: {0}")]
    MissingColumn(String),
    #[error("Invalid date '{value}', expected YYYY-MM-DD: {reason}")]
    InvalidDate { value: String, reason: String },
    #[error("Wrapped IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Wrapped polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Wrapped anyhow error: {0}")]
    AnyhowError(#[from] anyhow::Error),
}

impl PrescriptorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::PolarsError(PolarsError::IO { .. }) => ErrorKind::Io,
            Self::DataFormat(_)
            | Self::MissingColumn(_)
            | Self::InvalidDate { .. }
            | Self::PolarsError(_)
            | Self::AnyhowError(_) => ErrorKind::DataFormat,
        }
    }
}

pub type PrescriptorResult<T> = Result<T, PrescriptorError>;

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_anyhow() {
        let anyhow_error = anyhow!("An anyhow error");
        let prescriptor_error: PrescriptorError = anyhow_error.into();
        assert_eq!(
            prescriptor_error.to_string(),
            "Wrapped anyhow error: An anyhow error"
        );
    }

    #[test]
    fn errors_should_be_classified() {
        let io_error: PrescriptorError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(io_error.kind(), ErrorKind::Io);
        assert_eq!(
            PrescriptorError::MissingColumn("RegionName".into()).kind(),
            ErrorKind::DataFormat
        );
        assert_eq!(
            PrescriptorError::InvalidDate {
                value: "2020/08/01".into(),
                reason: "input contains invalid characters".into()
            }
            .kind(),
            ErrorKind::DataFormat
        );
        let polars_error: PrescriptorError =
            PolarsError::ComputeError("could not parse".into()).into();
        assert_eq!(polars_error.kind(), ErrorKind::DataFormat);
    }
}
