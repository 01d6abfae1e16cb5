use std::path::PathBuf;

use clap::Parser;
use forecast_core::{
    Config, Coverage, Overrides, check_coverage, provider_from_config, store_dataset,
    validate_args,
};
use tracing::debug;

pub const PROGRAM_NAME: &str = "forecast";

pub const BANNER: &str =
    "BEWARE: as of November 2024, the API contains no data issued before July 2024";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "Fetch forecasts for a country and check they cover the requested dates"
)]
pub struct Cli {
    /// Config file to use instead of the one in the platform config directory.
    #[arg(long, env = "FORECAST_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// File holding the API key.
    #[arg(long, env = "FORECAST_KEY_FILE", value_name = "PATH")]
    pub key_file: Option<PathBuf>,

    /// Base URL of the forecast API.
    #[arg(long, env = "FORECAST_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Directory fetched datasets are written to.
    #[arg(long, env = "FORECAST_OUTPUT_DIR", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Log progress to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// <country> <start-date> <end-date>, dates as DD-MM-YYYY.
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub positional: Vec<String>,
}

impl Cli {
    /// Validate, fetch, store and check. Every failure comes back as an
    /// error for the caller to report.
    pub async fn run(self) -> anyhow::Result<Coverage> {
        let tokens: Vec<String> = std::iter::once(PROGRAM_NAME.to_owned())
            .chain(self.positional)
            .collect();
        let request = validate_args(tokens.as_slice())?;
        debug!(?request, "arguments validated");

        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        config.apply_overrides(Overrides {
            base_url: self.base_url,
            key_file: self.key_file,
            output_dir: self.output_dir,
        });

        let provider = provider_from_config(&config)?;
        let dataset = provider.fetch_forecasts(&request).await?;
        store_dataset(&config.output_dir(), &request, &dataset)?;

        let coverage = check_coverage(&dataset, &request)?;
        println!("{coverage}");

        Ok(coverage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use forecast_core::ValidationError;

    #[test]
    fn command_and_usage_share_the_program_name() {
        assert_eq!(Cli::command().get_name(), PROGRAM_NAME);

        let usage = ValidationError::Usage { found: 1 }.to_string();
        assert!(usage.contains(&format!("Usage: {PROGRAM_NAME} <country>")));
        assert!(usage.contains(&format!("Example: {PROGRAM_NAME} Mali")));
    }

    #[test]
    fn parses_positionals_and_flags() {
        let cli = Cli::parse_from([
            "forecast",
            "--key-file",
            "k.txt",
            "-v",
            "Mali",
            "01-10-2024",
            "10-10-2024",
        ]);

        assert_eq!(cli.key_file, Some(PathBuf::from("k.txt")));
        assert!(cli.verbose);
        assert_eq!(cli.positional, vec!["Mali", "01-10-2024", "10-10-2024"]);
    }

    #[test]
    fn positionals_are_collected_whatever_their_count() {
        let cli = Cli::parse_from(["forecast", "Mali"]);
        assert_eq!(cli.positional, vec!["Mali"]);

        let cli = Cli::parse_from(["forecast", "Mali", "a", "b", "c", "d"]);
        assert_eq!(cli.positional.len(), 5);

        let cli = Cli::parse_from(["forecast"]);
        assert!(cli.positional.is_empty());
    }
}
