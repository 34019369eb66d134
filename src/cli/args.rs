//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Admin route table generator for MFD projects
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: vtgen.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a vtgen.toml into the current directory
    #[command(visible_alias = "i")]
    Init {
        /// Print the config instead of writing it
        #[arg(short, long)]
        dry: bool,
    },

    /// Generate the admin route file
    #[command(visible_alias = "r")]
    Routes {
        #[command(flatten)]
        args: RoutesArgs,
    },

    /// Print route records as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Check the MFD project for broken references and reserved names
    #[command(visible_alias = "c")]
    Check {
        /// MFD project file
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        mfd: Option<PathBuf>,

        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },
}

/// Project selection shared by `routes` and `query`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// MFD project file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub mfd: Option<PathBuf>,

    /// Only these namespaces (repeat or comma-separate)
    #[arg(short, long = "namespace", value_delimiter = ',')]
    pub namespaces: Vec<String>,

    /// Only these entities (repeat or comma-separate)
    #[arg(short, long = "entity", value_delimiter = ',')]
    pub entities: Vec<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Routes command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RoutesArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Frontend root directory
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Add webpackChunkName comments to imports
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub chunk_names: Option<bool>,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Commands::Init { .. } => false,
            Commands::Routes { args } => args.project.verbose,
            Commands::Query { args } => args.project.verbose,
            Commands::Check { verbose, .. } => *verbose,
        }
    }
}
