//! Command-line definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use marquee_core::UnparseablePolicy;

#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Group a release catalogue into released and upcoming titles")]
#[command(version)]
pub struct Cli {
    /// JSON catalogue (array of releases, or {"releases": [...]})
    #[arg(long, env = "MARQUEE_INPUT", global = true)]
    pub input: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD); defaults to the local date
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    /// Where releases with an unreadable date go
    #[arg(long, value_enum, default_value_t = Unparseable::Upcoming, global = true)]
    pub unparseable: Unparseable,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the full grouped view
    Group {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the latest release, or null
    Latest,

    /// Print upcoming releases, soonest first
    Upcoming {
        /// Only print the first N
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unparseable {
    Upcoming,
    Skip,
}

impl From<Unparseable> for UnparseablePolicy {
    fn from(value: Unparseable) -> Self {
        match value {
            Unparseable::Upcoming => UnparseablePolicy::Upcoming,
            Unparseable::Skip => UnparseablePolicy::Skip,
        }
    }
}
