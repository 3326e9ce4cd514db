//! Command line arguments for the `tower` binary

use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

/// Seed used when neither a feed nor a seed is given.
pub const DEFAULT_SAMPLE_SEED: u64 = 2024;

/// Floor-by-floor inventory report, or a JSON-lines query session
#[derive(Parser, Debug, Clone, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// path to a JSON unit feed exported from the store
    #[arg(long, conflicts_with = "sample")]
    pub feed: Option<PathBuf>,

    /// generate a seeded sample tower instead of reading a feed
    #[arg(long)]
    pub sample: Option<u64>,

    /// read JSON commands from stdin and answer on stdout
    #[arg(long, default_value_t = false)]
    pub query: bool,

    /// log at debug level
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn sample_seed(&self) -> u64 {
        self.sample.unwrap_or(DEFAULT_SAMPLE_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sample_report() {
        let args = CliArgs::parse_from(["tower"]);
        assert!(args.feed.is_none());
        assert!(!args.query);
        assert_eq!(args.sample_seed(), DEFAULT_SAMPLE_SEED);
    }

    #[test]
    fn parses_feed_and_query() {
        let args = CliArgs::parse_from(["tower", "--feed", "units.json", "--query"]);
        assert_eq!(args.feed, Some(PathBuf::from("units.json")));
        assert!(args.query);
    }

    #[test]
    fn feed_and_sample_conflict() {
        assert!(CliArgs::try_parse_from(["tower", "--feed", "a.json", "--sample", "3"]).is_err());
    }
}
