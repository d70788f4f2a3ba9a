use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI tool that autolinks native iOS module packages into a generated Swift module provider
#[derive(Parser, Debug)]
#[command(name = "podlink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve iOS descriptors for module packages
    Resolve {
        /// Package directories to resolve
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Opaque flags forwarded into each descriptor, as a JSON object
        #[arg(long)]
        flags: Option<String>,

        /// Also resolve each module's header search name via `pod ipc spec`
        #[arg(long)]
        headers: bool,
    },
    /// Generate the Swift package list for module packages
    Generate {
        /// Package directories to include
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Path of the Swift file to write; its file name becomes the class name
        #[arg(long)]
        target: PathBuf,

        /// Opaque flags forwarded into each descriptor, as a JSON object
        #[arg(long)]
        flags: Option<String>,
    },
}
