//! Command-line interface definitions.

use crate::icon::{Branch, Category};
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// bettergovicon asset pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: icons.toml)
    #[arg(short = 'C', long, default_value = "icons.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable debug output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new icon with explicit metadata
    #[command(visible_alias = "a")]
    Add {
        /// Path to the source SVG file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        svg_path: PathBuf,

        #[command(flatten)]
        args: AddArgs,
    },

    /// Process an SVG, auto-detecting agency metadata from the filename
    #[command(visible_alias = "p")]
    Process {
        /// Path to the source SVG file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        svg_path: PathBuf,

        #[command(flatten)]
        args: ProcessArgs,
    },

    /// Validate an SVG against the icon standards
    #[command(visible_alias = "v")]
    Validate {
        /// Path to the SVG file to check
        #[arg(value_hint = clap::ValueHint::FilePath)]
        svg_path: PathBuf,

        /// Show parsed details (viewBox, dimensions, stroke width)
        #[arg(short, long)]
        verbose: bool,
    },

    /// List icons in the collection
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Regenerate framework artifacts for every stored icon
    #[command(visible_alias = "g")]
    Generate {
        /// Regenerate even when all artifacts already exist
        #[arg(short, long)]
        force: bool,
    },

    /// Remove an icon and all of its generated artifacts
    #[command(visible_alias = "rm")]
    Remove {
        /// Icon name, acronym, or part of the display name
        name: String,

        #[command(flatten)]
        args: RemoveArgs,
    },

    /// Create the project directory skeleton
    Init,

    /// Build the website catalog JSON files under docs/
    Catalog,
}

/// Add command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct AddArgs {
    /// Agency display name (e.g., "Department of Health")
    #[arg(long)]
    pub agency: String,

    /// Full official name; defaults to the agency name
    #[arg(long)]
    pub official_name: Option<String>,

    /// Agency acronym, used as the exported component name
    #[arg(long)]
    pub acronym: String,

    /// Government branch
    #[arg(long, value_enum)]
    pub branch: Branch,

    /// Category within the branch
    #[arg(long, value_enum)]
    pub category: Category,

    /// Icon description
    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated search keywords
    #[arg(long, value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Official agency website URL
    #[arg(long)]
    pub official_website: Option<String>,

    /// Icon author; defaults to the configured author
    #[arg(long)]
    pub author: Option<String>,

    /// Whether this is the official agency logo
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub official: Option<bool>,

    /// Whether usage permission has been confirmed
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub permission: Option<bool>,

    /// Show what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Process command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ProcessArgs {
    /// Show what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// List command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Only show icons in this category
    #[arg(short, long, value_enum)]
    pub category: Option<Category>,

    /// Only show icons matching all of these keywords
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: ListFormat,
}

/// List output formats
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Table,
    Json,
    Csv,
}

/// Remove command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RemoveArgs {
    /// On an ambiguous match, remove the first candidate without prompting
    #[arg(short, long)]
    pub force: bool,

    /// Show what would be deleted without deleting anything
    #[arg(long)]
    pub dry_run: bool,
}
