//! raven CLI
//!
//! Browse tickets, alerts and automations from the terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{ConfigBuilder, WriteLogger};

use raven::config::{
    open_log_file, parse_log_level, Config, DEFAULT_LOG_LEVEL, ENV_LOG_FILE, ENV_LOG_LEVEL,
};

#[derive(Parser)]
#[command(name = "raven")]
#[command(about = "Browse tickets, alerts and automations from the terminal")]
#[command(version)]
struct Cli {
    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, env = ENV_LOG_LEVEL, default_value = DEFAULT_LOG_LEVEL, value_parser = parse_log_level)]
    log_level: LevelFilter,

    /// Log file location (default: user cache directory)
    #[arg(long, env = ENV_LOG_FILE)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::new(cli.log_level, cli.log_file);

    init_logging(&config);
    info!("raven starting (log level {})", config.log_level);

    match raven::tui::run() {
        Ok(()) => {
            info!("raven exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("event loop failed: {}", e);
            eprintln!("Alas, there's been an error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Route `log` output to the configured file. Failure here is not fatal:
/// the navigator runs without a log.
fn init_logging(config: &Config) {
    if config.log_level == LevelFilter::Off {
        return;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match open_log_file(&config.log_file) {
        Ok(file) => {
            let _ = WriteLogger::init(config.log_level, log_config, file);
        }
        Err(e) => eprintln!("Warning: {}; continuing without a log file", e),
    }
}
