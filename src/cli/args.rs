use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "acli")]
#[command(version)]
#[command(about = "Command-line client for the Acquia Cloud platform", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration
    Init,
    /// Inspect the Cloud API spec and its fixture examples
    Spec {
        /// Path to the Cloud API OpenAPI document
        #[arg(long, env = "ACLI_SPEC_FILE")]
        spec_file: Option<PathBuf>,

        /// Directory holding the parsed-spec cache records
        #[arg(long, env = "ACLI_SPEC_CACHE_DIR")]
        cache_dir: Option<PathBuf>,

        #[command(subcommand)]
        command: SpecCommands,
    },
    /// Remote IDE helpers
    #[command(subcommand)]
    Ide(IdeCommands),
}

#[derive(Subcommand, Debug)]
pub enum SpecCommands {
    /// Print the example response body for a path/method/status
    Response {
        path: String,
        method: String,
        status: u16,
    },
    /// Print the example POST request body for a path
    RequestBody { path: String },
    /// Show the spec cache state
    Status,
    /// Remove the on-disk spec cache records
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum IdeCommands {
    /// Print the SSH key label derived for an IDE
    SshKeyLabel { label: String, uuid: String },
    /// Print the SSH key filename derived for an IDE
    SshKeyFilename { uuid: String },
    /// Exit non-zero unless running inside an Acquia Remote IDE
    Verify,
}
