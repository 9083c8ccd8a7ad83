//! pipdeck CLI entry point.

use std::fs::{self, OpenOptions};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use pipdeck::actions::{ActionExecutor, PipInstaller};
use pipdeck::aggregator::InfoAggregator;
use pipdeck::cache::CacheStore;
use pipdeck::cli::Cli;
use pipdeck::config::Settings;
use pipdeck::menu::MenuShell;
use pipdeck::packages::PipList;
use pipdeck::registry::PipIndex;
use pipdeck::shell::{install_interrupt_handler, INTERRUPT_MESSAGE};
use pipdeck::ui::{TerminalUI, UserInterface};
use pipdeck::PipdeckError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber, writing to the log file.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(settings: &Settings) -> anyhow::Result<()> {
    if let Some(parent) = settings.log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_path)
        .with_context(|| format!("Failed to open log file {}", settings.log_path.display()))?;

    let filter = if settings.debug {
        EnvFilter::new("pipdeck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pipdeck=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .try_init()?;

    Ok(())
}

fn run(settings: &Settings, ui: &mut TerminalUI) -> pipdeck::Result<()> {
    let cache = Arc::new(CacheStore::load(&settings.cache_path, settings.cache_ttl)?);
    let source = Arc::new(PipIndex::new(&settings.python));
    let aggregator = InfoAggregator::new(cache, source, settings.workers);

    let inspector = PipList::new(&settings.python);
    let executor = ActionExecutor::new(Box::new(PipInstaller::new(&settings.python)));

    MenuShell::new(&inspector, &aggregator, &executor).run(ui)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
        console::set_colors_enabled(false);
    }

    let settings = Settings::from_cli(&cli);
    let mut ui = TerminalUI::new();

    if !ui.is_interactive() {
        eprintln!("Error: {}", PipdeckError::NotInteractive);
        return ExitCode::from(1);
    }

    if let Err(e) = init_tracing(&settings) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    tracing::debug!("pipdeck starting with settings: {:?}", settings);

    install_interrupt_handler();

    match run(&settings, &mut ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(PipdeckError::Interrupted) => {
            ui.message(&format!("\n{}", INTERRUPT_MESSAGE));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
