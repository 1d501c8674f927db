//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

/// Classic data structures and algorithm drills
#[derive(Parser, Debug)]
#[command(name = "drills")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity: -v info, -vv debug, -vvv trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding a local .drills.toml (default: cwd)
    #[arg(
        short = 'C',
        long,
        global = true,
        env = "DRILLS_CONFIG_DIR",
        value_hint = ValueHint::DirPath
    )]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List primes in an inclusive range
    Primes {
        #[arg(allow_negative_numbers = true)]
        start: i32,
        #[arg(allow_negative_numbers = true)]
        end: i32,
    },

    /// Greatest common divisor and least common multiple
    Gcd {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },

    /// Binary search (iterative and recursive) in ascending values
    Search {
        /// Value to find
        #[arg(allow_negative_numbers = true)]
        target: i32,
        /// Ascending values to search
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Bubble sort values
    Sort {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Check for a palindrome, ignoring spaces and case
    Palindrome {
        /// Words are joined with single spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Check that (), {} and [] are balanced
    Balanced {
        expr: String,
    },

    /// Swap two integers through references
    Swap {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },

    /// Count how often each value occurs
    Frequency {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Run a fixed data-structure demo
    Demo {
        #[arg(value_enum, default_value_t = DemoKind::All)]
        kind: DemoKind,
    },

    /// Interactive numbered menu (reads stdin)
    Menu,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    List,
    Stack,
    Queue,
    Tree,
    All,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create global config template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
