//! railgen CLI - compose Responsible AI Licenses
//!
//! Usage: railgen [COMMAND]
//!
//! Commands:
//!   status    Check that the license service is reachable
//!   catalog   List domains, sources and restrictions
//!   generate  Compose and submit a license without prompts
//!   download  Download the generated text of a stored license
//!
//! Without a command railgen starts the interactive wizard.

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use railgen::presentation::{resolve_config, Cli, Commands};

use commands::download::DownloadOptions;
use commands::generate::GenerateOptions;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            ui::error::print_error(&e, json);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr; `RAILGEN_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("RAILGEN_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn run(cli: Cli) -> Result<i32> {
    let (config, warnings) = resolve_config(&cli)?;
    let ui = UiContext::new(cli.json, cli.color, &config);
    commands::print_config_warnings(&warnings, &ui);

    match dispatch(cli.command, &config, &ui) {
        Ok(code) => Ok(code),
        Err(e) => {
            crate::ui::error::print_error(&e, ui.json);
            Ok(1)
        }
    }
}

fn dispatch(command: Option<Commands>, config: &railgen::Config, ui: &UiContext) -> Result<i32> {
    match command {
        None => commands::interactive::cmd_interactive(config, ui)?,
        Some(Commands::Status) => {
            if !commands::status::cmd_status(config, ui)? {
                return Ok(1);
            }
        }
        Some(Commands::Catalog) => commands::catalog::cmd_catalog(config, ui)?,
        Some(Commands::Generate {
            name,
            license,
            specs,
            restrictions,
            no_derivatives,
            research_only,
            dry_run,
            format,
            output,
        }) => commands::generate::cmd_generate(
            GenerateOptions {
                name,
                license,
                specs,
                restrictions,
                no_derivatives,
                research_only,
                dry_run,
                format,
                output,
            },
            config,
            ui,
        )?,
        Some(Commands::Download {
            id,
            format,
            output,
            name,
            label,
        }) => commands::download::cmd_download(
            DownloadOptions {
                id,
                format,
                output,
                name,
                label,
            },
            config,
            ui,
        )?,
    }
    Ok(0)
}
