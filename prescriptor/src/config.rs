use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Character encoding of the historical interventions file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum InputEncoding {
    /// ISO-8859-1, the encoding the published intervention files use.
    #[default]
    #[serde(alias = "iso-8859-1")]
    #[strum(to_string = "latin1", serialize = "iso-8859-1")]
    Latin1,
    #[serde(alias = "utf-8")]
    #[strum(to_string = "utf8", serialize = "utf-8")]
    Utf8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub input_encoding: InputEncoding,
    /// Field separator of the historical interventions file.
    pub separator: char,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_encoding: InputEncoding::Latin1,
            separator: ',',
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn config_should_deserialize_with_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = toml::from_str(
            r#"
            input_encoding = "utf-8"
            separator = ";"
            "#,
        )
        .unwrap();
        assert_eq!(config.input_encoding, InputEncoding::Utf8);
        assert_eq!(config.separator, ';');
    }

    #[test]
    fn encoding_should_parse_case_insensitively() {
        assert_eq!(
            InputEncoding::from_str("ISO-8859-1").unwrap(),
            InputEncoding::Latin1
        );
        assert_eq!(InputEncoding::from_str("UTF8").unwrap(), InputEncoding::Utf8);
        assert!(InputEncoding::from_str("utf-16").is_err());
        assert_eq!(InputEncoding::Latin1.to_string(), "latin1");
    }
}
