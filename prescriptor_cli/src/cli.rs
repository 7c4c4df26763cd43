use std::ffi::OsString;

use clap::Parser;
use log::info;
use prescriptor::{config::Config, PrescribeParams, Prescriptor};

use crate::error::PrescriptorCliResult;

const INTERVENTIONS_PAST_SHORT: &str = "-ip";
const INTERVENTIONS_PAST_LONG: &str = "--interventions_past";

/// The entrypoint for the CLI.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generates prescriptions with every intervention at its maximum value",
    long_about = None,
    name = "prescriptor"
)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "start_date",
        value_name = "YYYY-MM-DD",
        help = "Start date from which to prescribe, included. For example 2020-08-01"
    )]
    start_date: String,
    #[arg(
        short = 'e',
        long = "end_date",
        value_name = "YYYY-MM-DD",
        help = "End date for the last prescription, included. For example 2020-08-31"
    )]
    end_date: String,
    #[arg(
        long = "interventions_past",
        value_name = "PATH",
        help = "The path to a .csv file of previous intervention plans and cases (short: -ip)"
    )]
    interventions_past: String,
    #[arg(
        short = 'o',
        long = "output_file",
        value_name = "PATH",
        help = "The path to an intervention plan .csv file"
    )]
    output_file: String,
}

impl Cli {
    pub fn run(&self, config: Config) -> PrescriptorCliResult<()> {
        info!("Running prescriptor");
        println!(
            "Generating prescriptions from {} to {}...",
            self.start_date, self.end_date
        );
        let params = PrescribeParams::new(
            &self.start_date,
            &self.end_date,
            &self.interventions_past,
        )?;
        Prescriptor::new_with_config(config).prescribe_to_file(&params, &self.output_file)?;
        println!("Done!");
        Ok(())
    }
}

/// Rewrites the two-letter short flag `-ip` (also `-ip=<path>`) to `--interventions_past`, which
/// clap cannot express as a short flag. Arguments after `--` are left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            if arg == INTERVENTIONS_PAST_SHORT {
                return INTERVENTIONS_PAST_LONG.into();
            }
            match arg
                .to_str()
                .and_then(|s| s.strip_prefix(INTERVENTIONS_PAST_SHORT))
                .and_then(|s| s.strip_prefix('='))
            {
                Some(path) => format!("{INTERVENTIONS_PAST_LONG}={path}").into(),
                None => arg,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use prescriptor::error::ErrorKind;
    use tempfile::tempdir;

    use super::*;
    use crate::error::PrescriptorCliError;

    fn fixture() -> String {
        format!(
            "{}/../test_data/historical_ip.csv",
            env!("CARGO_MANIFEST_DIR")
        )
    }

    #[test]
    fn cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_normalize_args() {
        let args = normalize_args([
            "prescriptor",
            "-s",
            "2020-08-01",
            "-ip",
            "past.csv",
            "-ip=other.csv",
            "--",
            "-ip",
        ]);
        assert_eq!(
            args,
            vec![
                "prescriptor",
                "-s",
                "2020-08-01",
                "--interventions_past",
                "past.csv",
                "--interventions_past=other.csv",
                "--",
                "-ip",
            ]
        );
    }

    #[test]
    fn short_and_long_flags_should_parse() {
        let short = Cli::try_parse_from(normalize_args([
            "prescriptor",
            "-s",
            "2020-08-01",
            "-e",
            "2020-08-05",
            "-ip",
            "none.txt",
            "-o",
            "test/max_prescriptions.csv",
        ]))
        .unwrap();
        let long = Cli::try_parse_from(normalize_args([
            "prescriptor",
            "--start_date",
            "2020-08-01",
            "--end_date=2020-08-05",
            "--interventions_past",
            "none.txt",
            "--output_file",
            "test/max_prescriptions.csv",
        ]))
        .unwrap();
        assert_eq!(short.start_date, long.start_date);
        assert_eq!(short.end_date, long.end_date);
        assert_eq!(short.interventions_past, "none.txt");
        assert_eq!(short.interventions_past, long.interventions_past);
        assert_eq!(short.output_file, long.output_file);
    }

    #[test]
    fn missing_flags_should_fail() {
        assert!(Cli::try_parse_from(["prescriptor", "-s", "2020-08-01"]).is_err());
    }

    #[test]
    fn run_should_write_prescriptions() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("test").join("max_prescriptions.csv");
        let output_str = output.to_string_lossy().to_string();
        let fixture = fixture();
        let cli = Cli::try_parse_from(normalize_args([
            "prescriptor",
            "-s",
            "2020-08-01",
            "-e",
            "2020-08-05",
            "-ip",
            fixture.as_str(),
            "-o",
            output_str.as_str(),
        ]))
        .unwrap();
        cli.run(Config::default()).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        // header plus 6 geos over 5 days
        assert_eq!(written.lines().count(), 1 + 6 * 5);
        assert!(written.contains("Curaçao,,2020-08-03,3,3,2,4,2,3,2,4,2,3,2,4,0"));
    }

    #[test]
    fn run_with_bad_date_should_be_data_format_error() {
        let dir = tempdir().unwrap();
        let cli = Cli {
            start_date: "2020-08-01".into(),
            end_date: "August 5th".into(),
            interventions_past: fixture(),
            output_file: dir.path().join("out.csv").to_string_lossy().to_string(),
        };
        match cli.run(Config::default()) {
            Err(PrescriptorCliError::PrescriptorError(err)) => {
                assert_eq!(err.kind(), ErrorKind::DataFormat)
            }
            other => panic!("expected a prescriptor error, got {other:?}"),
        }
        assert!(!dir.path().join("out.csv").exists());
    }
}
