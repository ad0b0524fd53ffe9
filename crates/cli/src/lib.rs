pub mod shell;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tally_core::config::{AppConfig, ConfigOverrides, LoadOptions, LogFormat};

#[derive(Debug, Parser)]
#[command(
    name = "tally",
    about = "Interactive shopping tally and bill check",
    long_about = "Select products from the catalog, add your own, and check the bill \
                  total against your balance. All state lives in memory for one session.",
    after_help = "Examples:\n  tally\n  tally --currency '$'\n  tally --script < commands.txt"
)]
pub struct Cli {
    #[arg(long, help = "Path to a tally.toml config file")]
    config: Option<PathBuf>,
    #[arg(long, help = "Currency symbol used when rendering prices")]
    currency: Option<String>,
    #[arg(long, help = "Log level (trace|debug|info|warn|error)")]
    log_level: Option<String>,
    #[arg(long, help = "Log format (compact|pretty|json)")]
    log_format: Option<String>,
    #[arg(long, help = "Read commands from stdin until EOF without redrawing the screen")]
    script: bool,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let log_format = match cli.log_format.as_deref().map(str::parse::<LogFormat>).transpose() {
        Ok(value) => value,
        Err(error) => {
            eprintln!("tally: {error}");
            return ExitCode::from(2);
        }
    };

    let config = match AppConfig::load(LoadOptions {
        config_path: cli.config,
        require_file: false,
        overrides: ConfigOverrides {
            currency_symbol: cli.currency,
            log_level: cli.log_level,
            log_format,
        },
    }) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("tally: {error}");
            return ExitCode::from(2);
        }
    };

    init_logging(&config);

    let result = if cli.script {
        let stdin = std::io::stdin();
        shell::script(stdin.lock(), &config).map(|output| print!("{output}"))
    } else {
        shell::interactive(&config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("tally: {error}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &AppConfig) {
    use tally_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}
