//! CLI entrypoint for quotebox
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use quotebox_application::{
    CopiedContent, CopyQuoteUseCase, ExportParams, ExportQuotesUseCase, LoadProgressNotifier,
    LoadQuotesUseCase, NoProgress, PickQuoteUseCase, QuoteSource,
};
use quotebox_domain::{OutputFormat, QuoteStore};
use quotebox_infrastructure::{
    ConfigLoader, FileConfig, FileQuoteSource, TxtFileExporter, default_clipboard,
};
use quotebox_presentation::{
    Cli, Command, ConsoleFormatter, ExportFactory, OutputConfig, ProgressReporter, QuoteRepl,
    ReplConfig,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_SOURCE_FILE: &str = "quotes.txt";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref());

    info!("Starting quotebox");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    let output = output_config(&cli, &config);
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let source = build_source(&cli, &config)?;
    let loader = LoadQuotesUseCase::new(source);
    let copier = CopyQuoteUseCase::new(default_clipboard());
    let exporter = export_factory(&config);

    let mut store = QuoteStore::new();
    let progress: Box<dyn LoadProgressNotifier> = if output.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };
    let loaded = loader.execute_with_progress(&mut store, progress.as_ref()).await;

    let command = cli.selected_command();

    // Interactive mode starts even without quotes; /reload can retry
    if command == Command::Interactive {
        if let Err(e) = &loaded {
            warn!("Starting with an empty store: {}", e);
        }
        let repl_config = ReplConfig {
            reveal_delay: Duration::from_millis(config.repl.reveal_delay_ms),
            history_file: config.repl.history_path(),
        };
        let mut repl = QuoteRepl::new(store, loader, copier, exporter)
            .with_initial_load(&loaded)
            .with_output(output)
            .with_config(repl_config);
        repl.run().await?;
        return Ok(());
    }

    let loaded = loaded?;
    let formatter = ConsoleFormatter::new(output.theme);

    match command {
        Command::Pick { count } => {
            if loaded.is_empty() {
                bail!("No quotes found in {}", loaded.source);
            }
            let selections = PickQuoteUseCase::new().execute_many(&mut store, count)?;
            match output.format {
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_selections_json(&selections))
                }
                OutputFormat::Text => {
                    for selection in &selections {
                        println!("{}", formatter.format_selection(selection, store.len()));
                    }
                }
            }
        }
        Command::List => match output.format {
            OutputFormat::Json => println!(
                "{}",
                ConsoleFormatter::format_listing_json(&loaded.source, store.get_all())
            ),
            OutputFormat::Text => {
                if loaded.is_empty() {
                    bail!("No quotes found in {}", loaded.source);
                }
                println!("{}", formatter.format_listing(store.get_all()));
            }
        },
        Command::Export { output: path } => {
            let result = exporter(path.as_deref()).execute(&store).await?;
            match output.format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_export_json(&result)),
                OutputFormat::Text => println!(
                    "{}",
                    formatter.format_success(&ConsoleFormatter::export_message(&result))
                ),
            }
        }
        Command::Copy { number, all } => {
            let copied = if all {
                copier.copy_all(&store)?
            } else if let Some(number) = number {
                copier.copy_number(&store, number)?
            } else {
                PickQuoteUseCase::new().execute(&mut store)?;
                copier.copy_current(&store)?
            };
            let message = match copied {
                CopiedContent::Quote(quote) => format!("Copied: {}", quote),
                CopiedContent::All(count) => format!("Copied {} quotes", count),
            };
            if !output.quiet {
                println!("{}", formatter.format_success(&message));
            }
        }
        // Handled before the store is consumed by the REPL
        Command::Interactive => {}
    }

    Ok(())
}

/// Install the tracing subscriber; the returned guard flushes the log file
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "quotebox.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// CLI flags win over the config file
fn output_config(cli: &Cli, config: &FileConfig) -> OutputConfig {
    OutputConfig {
        format: cli
            .output_format
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        theme: cli.theme.map(Into::into).unwrap_or(config.output.theme),
        color: config.output.color && !cli.no_color,
        quiet: cli.quiet,
    }
}

fn build_source(cli: &Cli, config: &FileConfig) -> Result<Arc<dyn QuoteSource>> {
    // A path on the command line overrides a url in the config file and vice versa
    let url = cli
        .url
        .clone()
        .or_else(|| cli.source.is_none().then(|| config.source.url.clone()).flatten());

    if let Some(url) = url {
        return http_source(url);
    }

    let path = cli
        .source
        .clone()
        .or_else(|| config.source.path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_FILE));

    Ok(Arc::new(FileQuoteSource::new(path)))
}

#[cfg(feature = "http-source")]
fn http_source(url: String) -> Result<Arc<dyn QuoteSource>> {
    Ok(Arc::new(quotebox_infrastructure::HttpQuoteSource::new(url)?))
}

#[cfg(not(feature = "http-source"))]
fn http_source(url: String) -> Result<Arc<dyn QuoteSource>> {
    bail!("Cannot fetch {}: built without the http-source feature", url)
}

fn export_factory(config: &FileConfig) -> ExportFactory {
    let params: ExportParams = config.export_params();
    let directory = config
        .export
        .directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    Arc::new(move |path: Option<&Path>| {
        let sink = match path {
            Some(path) => TxtFileExporter::at_path(path),
            None => TxtFileExporter::in_directory(&directory),
        };
        ExportQuotesUseCase::new(Arc::new(sink), params.clone())
    })
}
