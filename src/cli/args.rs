//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Blood type inheritance: possible child blood types and a step-by-step inheritance tree
#[derive(Parser, Debug)]
#[command(name = "bloodline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Directory with a local .bloodline.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List possible child blood types
    Resolve {
        /// First parent, e.g. A+
        #[arg(value_name = "PARENT1")]
        parent1: String,
        /// Second parent, e.g. O-
        #[arg(value_name = "PARENT2")]
        parent2: String,
        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },

    /// Show the inheritance tree
    Tree {
        /// First parent, e.g. A+
        #[arg(value_name = "PARENT1")]
        parent1: String,
        /// Second parent, e.g. O-
        #[arg(value_name = "PARENT2")]
        parent2: String,
        /// Print the {name, children} hierarchy document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reveal the inheritance tree node by node
    Reveal {
        /// First parent, e.g. A+
        #[arg(value_name = "PARENT1")]
        parent1: String,
        /// Second parent, e.g. O-
        #[arg(value_name = "PARENT2")]
        parent2: String,
        /// Delay between nodes in milliseconds (overrides config)
        #[arg(long, conflicts_with = "instant")]
        interval_ms: Option<u64>,
        /// Render everything at once
        #[arg(long)]
        instant: bool,
    },

    /// Explain a tree label or blood type
    Explain {
        /// Label, e.g. "AB-" or "Parent 1: O+"
        label: String,
    },

    /// Show children for every pair of blood types
    Table {
        /// Print JSON reports
        #[arg(long)]
        json: bool,
    },

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

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create config template
    Init {
        /// Create local config in the config directory instead of the global one
        #[arg(short, long)]
        local: bool,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
