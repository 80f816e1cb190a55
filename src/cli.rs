//! Command-line interface components.

use crate::config::StatsConfig;
use crate::constants::{DEFAULT_INPUT_PATH, DEFAULT_SAMPLE_KEY};
use crate::ingest::load_cells;
use crate::report::{CollectionReport, OutputFormat};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "cell_stats")]
#[command(about = "Report descriptive statistics for a mobile phone specification dataset")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the phone dataset CSV
    #[arg(value_name = "DATASET_PATH", default_value = DEFAULT_INPUT_PATH)]
    pub dataset_path: PathBuf,

    /// Report output format
    #[arg(short, long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Phone to print as the sample record, as "<oem>-<model>"
    #[arg(long, value_name = "KEY", default_value = DEFAULT_SAMPLE_KEY)]
    pub sample: String,

    /// Skip rows with the wrong number of fields instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Treat the first line of the file as data
    #[arg(long)]
    pub no_headers: bool,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Get the log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Layer the flags over the default configuration
    pub fn to_config(&self) -> StatsConfig {
        let mut config = StatsConfig::default()
            .with_input_path(&self.dataset_path)
            .with_sample_key(&self.sample);
        if self.no_headers {
            config = config.without_headers();
        }
        if self.skip_malformed {
            config = config.with_skip_malformed_rows();
        }
        config
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cell_stats={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load the dataset, compute every statistic and render the report
pub fn run(args: &Args) -> Result<String> {
    let config = args.to_config();
    config.validate().context("Invalid configuration")?;

    let ingest = load_cells(&config).with_context(|| {
        format!(
            "Failed to load phone dataset from {}",
            config.input_path.display()
        )
    })?;

    let report = CollectionReport::build(&ingest.cells, &config);
    info!("Computed statistics for {} phones", report.total_phones);

    report
        .render(args.format)
        .context("Failed to render report")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["cell_stats"]);

        assert_eq!(args.dataset_path, PathBuf::from("resources/cells.csv"));
        assert_eq!(args.format, OutputFormat::Human);
        assert_eq!(args.sample, "Google-Pixel 4 XL");
        assert_eq!(args.get_log_level(), "info");
        assert_eq!(args.to_config(), StatsConfig::default());
    }

    #[test]
    fn test_args_to_config() {
        let args = Args::parse_from([
            "cell_stats",
            "/data/phones.csv",
            "--format",
            "json",
            "--sample",
            "Apple-iPhone 11",
            "--skip-malformed",
            "--no-headers",
            "--verbose",
        ]);

        let config = args.to_config();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.get_log_level(), "debug");
        assert_eq!(config.input_path, PathBuf::from("/data/phones.csv"));
        assert_eq!(config.sample_key, "Apple-iPhone 11");
        assert!(!config.has_headers);
        assert!(config.skip_malformed_rows);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["cell_stats", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_run_missing_dataset() {
        let args = Args::parse_from(["cell_stats", "/nonexistent/cells.csv"]);
        let err = run(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("Dataset not found"));
    }
}
