//! CLI for the global and local aligners and the bloom filter sketch.

mod commands;
mod data;
mod utils;

use clap::Parser;

use commands::Commands;

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The name of the log file, written under `./logs/`.
    #[arg(short('l'), long, default_value = "shell")]
    log_name: String,

    /// The most verbose level written to the log file.
    #[arg(long, value_enum, default_value = "debug")]
    log_level: LogLevel,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// The levels selectable with `--log-level`.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// A summary of each run.
    Info,
    /// Table construction and alignment counts.
    Debug,
    /// Every alignment as the traceback emits it.
    Trace,
}

impl From<LogLevel> for ftlog::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = utils::configure_logger(&args.log_name, args.log_level.into())?;
    ftlog::info!("{args:?}");
    ftlog::info!("Log file: {log_path:?}");

    match args.command {
        Commands::Align(align_args) => commands::align::run(&align_args)?,
        Commands::Bloom(bloom_args) => commands::bloom::run(&bloom_args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Args, LogLevel};
    use crate::commands::Commands;

    #[test]
    fn definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse() -> Result<(), String> {
        let args = Args::try_parse_from(["shell", "--log-level", "trace", "align", "-x", "AC", "-y", "AGC", "-g", "-4"])
            .map_err(|e| e.to_string())?;
        assert_eq!(args.log_level, LogLevel::Trace);
        assert_eq!(ftlog::LevelFilter::from(args.log_level), ftlog::LevelFilter::Trace);
        assert!(matches!(args.command, Commands::Align(_)));

        let args = Args::try_parse_from(["shell", "bloom", "-r", "GATTACA", "-q", "TACA", "-w", "3"])
            .map_err(|e| e.to_string())?;
        assert_eq!(args.log_level, LogLevel::Debug);
        assert!(matches!(args.command, Commands::Bloom(_)));

        assert!(Args::try_parse_from(["shell", "align", "-x", "AC"]).is_err());

        Ok(())
    }
}
