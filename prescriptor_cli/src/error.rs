use prescriptor::error::PrescriptorError;

#[derive(thiserror::Error, Debug)]
pub enum PrescriptorCliError {
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
    #[error("prescriptor error: {0}")]
    PrescriptorError(#[from] PrescriptorError),
    #[error("Invalid TOML in config file: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type PrescriptorCliResult<T> = Result<T, PrescriptorCliError>;
