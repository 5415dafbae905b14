use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_existing_directory, validate_existing_file, validate_non_empty_string, Validate,
};

#[derive(Debug, Parser)]
#[command(name = "dc-validator")]
#[command(version, about = "Dublin Core YAML metadata validator")]
pub struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a single Dublin Core YAML file
    Validate(ValidateArgs),
    /// Validate every matching YAML file in a directory
    Batch(BatchArgs),
    /// Print or save the bundled example document
    Example(ExampleArgs),
    /// Show supported elements and validation levels
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Summary,
    Detailed,
}

#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Path to the YAML file to validate
    pub file: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Show per-element count details")]
    pub details: bool,

    #[arg(short, long, help = "Suppress all output except errors")]
    pub quiet: bool,

    #[arg(short, long, help = "Save the JSON report to a file")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Parser)]
pub struct BatchArgs {
    /// Directory containing YAML files to validate
    pub directory: PathBuf,

    #[arg(short, long, default_value = "*.yaml", help = "File name pattern (glob style)")]
    pub pattern: String,

    #[arg(short, long, help = "Search recursively in subdirectories")]
    pub recursive: bool,

    #[arg(long, help = "Stop at the first failing file")]
    pub fail_fast: bool,

    #[arg(short = 's', long, help = "Show only summary statistics")]
    pub summary_only: bool,

    #[arg(short, long, help = "Save the batch JSON report to a file")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Parser)]
pub struct ExampleArgs {
    #[arg(short = 's', long, help = "Save the example YAML to a file")]
    pub save: Option<PathBuf>,

    #[arg(long, help = "Skip validating the example document")]
    pub no_validate: bool,
}

impl Validate for ValidateArgs {
    fn validate(&self) -> Result<()> {
        validate_existing_file("file", &self.file)
    }
}

impl Validate for BatchArgs {
    fn validate(&self) -> Result<()> {
        validate_existing_directory("directory", &self.directory)?;
        validate_non_empty_string("pattern", &self.pattern)
    }
}
