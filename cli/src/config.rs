use clap::Parser;
use std::path::PathBuf;

use cubesum_core::io::RunOptions;

#[derive(Parser, Debug)]
#[command(
    name = "cubesum",
    version,
    about = "Point updates and box sums over a sparse 3D grid"
)]
pub struct Config {
    /// Read test cases from this file instead of standard input.
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Reject coordinates outside the declared grid size `N`, rather than only
    /// those outside the universe rounded up to a power of two.
    #[arg(long)]
    pub strict: bool,

    /// Minimum level of log messages written to standard error.
    #[arg(long, default_value = "warn")]
    pub log_level: log::Level,
}

impl Config {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            strict_bounds: self.strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::parse_from(["cubesum"]);
        assert_eq!(None, config.input);
        assert_eq!(log::Level::Warn, config.log_level);
        assert_eq!(RunOptions::default(), config.run_options());
    }

    #[test]
    fn test_config_flags() {
        let config =
            Config::parse_from(["cubesum", "--strict", "--log-level", "debug", "-i", "cases.txt"]);
        assert!(config.run_options().strict_bounds);
        assert_eq!(log::Level::Debug, config.log_level);
        assert_eq!(Some(PathBuf::from("cases.txt")), config.input);
    }
}
