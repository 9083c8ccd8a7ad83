//! CLI argument definitions.
//!
//! pipdeck has no subcommands: running it with no arguments opens the main
//! menu. The flags below only override where things live and how the
//! registry fan-out behaves.

use clap::Parser;
use std::path::PathBuf;

/// pipdeck - Interactive terminal manager for installed Python packages.
#[derive(Debug, Default, Parser)]
#[command(name = "pipdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Python interpreter whose packages are managed
    #[arg(long, env = "PIPDECK_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Registry cache file
    #[arg(long, env = "PIPDECK_CACHE_FILE", value_name = "PATH")]
    pub cache_file: Option<PathBuf>,

    /// Action log file
    #[arg(long, env = "PIPDECK_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Concurrent registry lookups
    #[arg(long, env = "PIPDECK_WORKERS", value_name = "N")]
    pub workers: Option<usize>,

    /// Seconds a cached registry entry stays fresh
    #[arg(long, env = "PIPDECK_CACHE_TTL", value_name = "SECS")]
    pub cache_ttl: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments() {
        let cli = Cli::try_parse_from(["pipdeck"]).unwrap();
        assert!(!cli.debug);
        assert!(!cli.no_color);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "pipdeck",
            "--python",
            "/usr/bin/python3.12",
            "--cache-file",
            "/tmp/cache.json",
            "--workers",
            "4",
            "--cache-ttl",
            "60",
            "--no-color",
            "--debug",
        ])
        .unwrap();

        assert_eq!(cli.python, Some(PathBuf::from("/usr/bin/python3.12")));
        assert_eq!(cli.cache_file, Some(PathBuf::from("/tmp/cache.json")));
        assert_eq!(cli.workers, Some(4));
        assert_eq!(cli.cache_ttl, Some(60));
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn rejects_non_numeric_workers() {
        assert!(Cli::try_parse_from(["pipdeck", "--workers", "many"]).is_err());
    }

    #[test]
    fn rejects_subcommands() {
        assert!(Cli::try_parse_from(["pipdeck", "run"]).is_err());
    }
}
