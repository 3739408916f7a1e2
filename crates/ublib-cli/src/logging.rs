use log::LevelFilter;
use stderrlog::{LogLevelNum, Timestamp};

/// Levels in increasing verbosity.
const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Logging flags shared by every subcommand.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence all log messages.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Raise verbosity one level per use, above the command default.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prefix log lines with a timestamp.
    #[arg(long)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective level for a command whose quiet-less default is `default`.
    pub fn level_filter(
        &self,
        default: LevelFilter,
    ) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        let base = LEVELS.iter().position(|&l| l == default).unwrap_or(0);
        LEVELS[(base + self.verbose as usize).min(LEVELS.len() - 1)]
    }

    /// Install the stderr logger for the `ublib` crates only.
    pub fn setup_logging(
        &self,
        default: LevelFilter,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let level = self.level_filter(default);
        let verbosity = match level {
            LevelFilter::Off => LogLevelNum::Off,
            LevelFilter::Error => LogLevelNum::Error,
            LevelFilter::Warn => LogLevelNum::Warn,
            LevelFilter::Info => LogLevelNum::Info,
            LevelFilter::Debug => LogLevelNum::Debug,
            LevelFilter::Trace => LogLevelNum::Trace,
        };

        stderrlog::new()
            .module("ublib")
            .quiet(level == LevelFilter::Off)
            .verbosity(verbosity)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
