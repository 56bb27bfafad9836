//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;
use relint_core::PlanOptions;

/// relint - configurable linter front end
#[derive(Parser)]
#[command(name = "relint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File patterns to lint (`**` matches across directories)
    pub patterns: Vec<String>,

    /// Path to the configuration TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Space-separated globs of files to exclude
    #[arg(long, value_name = "GLOBS")]
    pub exclude: Option<String>,

    /// Formatter to be used for the output (cli, json)
    #[arg(short, long)]
    pub formatter: Option<String>,

    /// Print the resolved plan as JSON instead of running it
    #[arg(long)]
    pub print_plan: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            config_path: self.config.clone(),
            exclude: self.exclude.clone().unwrap_or_default(),
            formatter: self.formatter.clone(),
            patterns: self.patterns.clone(),
        }
    }
}
