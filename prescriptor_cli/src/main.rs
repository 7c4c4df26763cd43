mod cli;
mod error;

use clap::Parser;
use cli::{normalize_args, Cli};
use error::PrescriptorCliResult;
use log::debug;
use prescriptor::config::Config;

const DEFAULT_LOGGING_LEVEL: &str = "warn";

fn main() -> PrescriptorCliResult<()> {
    // Set RUST_LOG to `DEFAULT_LOGGING_LEVEL` if not set
    let _ =
        std::env::var("RUST_LOG").map_err(|_| std::env::set_var("RUST_LOG", DEFAULT_LOGGING_LEVEL));
    pretty_env_logger::init_timed();
    let args = Cli::parse_from(normalize_args(std::env::args_os()));
    debug!("args: {args:?}");
    let config: Config = read_config_from_toml()?;
    debug!("config: {config:?}");

    args.run(config)
}

fn read_config_from_toml() -> PrescriptorCliResult<Config> {
    // Linux: ~/.config/prescriptor/config.toml
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(Config::default());
    };
    let file_path = config_dir.join("prescriptor").join("config.toml");
    match std::fs::read_to_string(&file_path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("Error reading config file: {}", file_path.display()))
            .into()),
    }
}
