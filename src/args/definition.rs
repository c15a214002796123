//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// Recipe Finder - search Spoonacular recipes, inspect nutrition and keep favorites
#[derive(Parser, Debug)]
#[command(name = "recipe-finder")]
#[command(version)]
#[command(about = "Search recipes by ingredients or cuisine, inspect nutrition and keep favorites", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Specify the configuration directory (default: ~/.config/recipe-finder)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}
