//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --api-url, --config) are inherited by all subcommands
//! - Running without a subcommand starts the interactive wizard

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::{LicenseType, MediaType, Specification};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// railgen - compose Responsible AI Licenses (RAIL)
#[derive(Parser, Debug)]
#[command(name = "railgen")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'railgen' without arguments to compose a license interactively.")]
pub struct Cli {
    /// Output NDJSON events for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// License service base URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file (default: ./railgen.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the license service is reachable
    Status,

    /// List domains, sources and restrictions
    Catalog,

    /// Compose and submit a license without prompts
    Generate {
        /// Name of the artefact being licensed
        #[arg(short, long)]
        name: String,

        /// License type (default from config)
        #[arg(short, long, value_enum)]
        license: Option<LicenseType>,

        /// Artefact kinds covered (repeatable or comma-separated)
        #[arg(short, long = "spec", value_enum, value_delimiter = ',')]
        specs: Vec<Specification>,

        /// Optional restriction ids to include (repeatable or comma-separated)
        #[arg(short, long = "restriction", value_name = "ID", value_delimiter = ',')]
        restrictions: Vec<u32>,

        /// Do not allow derivatives
        #[arg(long, conflicts_with = "research_only")]
        no_derivatives: bool,

        /// Restrict use to research
        #[arg(long)]
        research_only: bool,

        /// Print the request payload without submitting
        #[arg(long)]
        dry_run: bool,

        /// Format of the generated license text
        #[arg(short, long, value_enum)]
        format: Option<MediaType>,

        /// Also download the generated license into this directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Download the generated text of a stored license
    Download {
        /// License id returned on submission
        id: String,

        /// Format of the generated license text
        #[arg(short, long, value_enum)]
        format: Option<MediaType>,

        /// Write into this directory instead of stdout
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Artefact name used in the file name
        #[arg(long)]
        name: Option<String>,

        /// License label used in the file name (e.g. OpenRAIL-M)
        #[arg(long)]
        label: Option<String>,
    },
}
