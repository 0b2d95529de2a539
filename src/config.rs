//! Command-line configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

/// File name used when `--best-score-file` is not given
pub const DEFAULT_BEST_SCORE_FILE: &str = ".block-blast-best.json";

#[derive(Debug, Clone, Parser)]
#[command(name = "block-blast", version, about = "Place blocks on an 8x8 grid to clear rows and columns")]
pub struct Cli {
    /// Seed for block generation (defaults to the clock)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Where the best score is kept
    #[arg(long, value_name = "PATH")]
    pub best_score_file: Option<PathBuf>,

    /// Write logs to this file (the terminal is owned by the game)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log debug messages
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    /// Explicit path, else `$HOME/.block-blast-best.json`, else the working
    /// directory.
    pub fn best_score_path(&self) -> PathBuf {
        if let Some(path) = &self.best_score_file {
            return path.clone();
        }
        match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(DEFAULT_BEST_SCORE_FILE),
            None => PathBuf::from(DEFAULT_BEST_SCORE_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_flags() {
        let cli = Cli::parse_from([
            "block-blast",
            "--seed",
            "42",
            "--best-score-file",
            "/tmp/best.json",
            "--log-file",
            "/tmp/bb.log",
            "-v",
        ]);
        assert_eq!(cli.seed_or_clock(), 42);
        assert_eq!(cli.best_score_path(), PathBuf::from("/tmp/best.json"));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/bb.log")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_defaults_are_optional() {
        let cli = Cli::parse_from(["block-blast"]);
        assert!(cli.seed.is_none());
        assert!(!cli.verbose);
        assert!(cli.best_score_path().ends_with(DEFAULT_BEST_SCORE_FILE));
    }
}
