//! Interactive quote session

use super::command::ReplCommand;
use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{ProgressReporter, reveal_pause};
use quotebox_application::{
    CopiedContent, CopyQuoteUseCase, ExportQuotesUseCase, LoadQuotesError, LoadQuotesOutput,
    LoadQuotesUseCase, NoProgress, PickQuoteUseCase,
};
use quotebox_domain::QuoteStore;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 500;

/// Builds the export use case for an optional explicit output path
pub type ExportFactory = Arc<dyn Fn(Option<&Path>) -> ExportQuotesUseCase + Send + Sync>;

/// What the caller should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Outcome of the most recent load, shown in the banner
#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadStatus {
    Loaded(LoadQuotesOutput),
    Failed(String),
}

/// Interactive REPL over a quote store
pub struct QuoteRepl {
    store: QuoteStore,
    loader: LoadQuotesUseCase,
    picker: PickQuoteUseCase,
    copier: CopyQuoteUseCase,
    exporter: ExportFactory,
    formatter: ConsoleFormatter,
    output: OutputConfig,
    config: ReplConfig,
    load_status: LoadStatus,
}

impl QuoteRepl {
    /// Create a new REPL over an already loaded store
    pub fn new(
        store: QuoteStore,
        loader: LoadQuotesUseCase,
        copier: CopyQuoteUseCase,
        exporter: ExportFactory,
    ) -> Self {
        let load_status = LoadStatus::Loaded(LoadQuotesOutput {
            source: loader.source_name(),
            count: store.len(),
        });
        Self {
            store,
            loader,
            picker: PickQuoteUseCase::new(),
            copier,
            exporter,
            formatter: ConsoleFormatter::default(),
            output: OutputConfig::default(),
            config: ReplConfig::default(),
            load_status,
        }
    }

    /// Record how the store was loaded before the REPL started
    pub fn with_initial_load(mut self, result: &Result<LoadQuotesOutput, LoadQuotesError>) -> Self {
        self.record_load(result);
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.formatter = ConsoleFormatter::new(output.theme);
        self.output = output;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// Run the interactive REPL until `/quit` or end of input
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();
        if let Some(history) = self.open_history() {
            editor = editor.with_history(Box::new(history));
        }
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("quotebox".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let command = ReplCommand::parse(&line);
                    if self.handle(command).await == Flow::Exit {
                        break;
                    }
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                _ => {
                    println!("^C");
                }
            }
        }

        Ok(())
    }

    fn open_history(&self) -> Option<FileBackedHistory> {
        let path = self.config.history_path()?;
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => Some(history),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                None
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│               Quotebox - Random             │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Source: {}", self.loader.source_name());
        let line = match &self.load_status {
            LoadStatus::Loaded(_) => self.formatter.format_status(&self.load_message()),
            LoadStatus::Failed(_) => self.formatter.format_error(&self.load_message()),
        };
        println!("{}", line);
        println!();
        Self::print_help();
    }

    fn record_load(&mut self, result: &Result<LoadQuotesOutput, LoadQuotesError>) {
        self.load_status = match result {
            Ok(output) => LoadStatus::Loaded(output.clone()),
            Err(e) => LoadStatus::Failed(e.to_string()),
        };
    }

    /// Status text for the most recent load
    fn load_message(&self) -> String {
        match &self.load_status {
            LoadStatus::Loaded(output) => ConsoleFormatter::load_message(output),
            LoadStatus::Failed(message) => message.clone(),
        }
    }

    fn print_help() {
        println!("Commands:");
        println!("  <enter>, g        - Show a random quote");
        println!("  /copy [N], /c     - Copy the last quote (or quote N)");
        println!("  /copy-all         - Copy every quote as a numbered list");
        println!("  /list, /l         - Show all quotes");
        println!("  /export [PATH]    - Save all quotes to a text file");
        println!("  /reload           - Re-read the quote source");
        println!("  /crt              - Toggle the CRT theme");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }

    /// Execute one command
    pub async fn handle(&mut self, command: ReplCommand) -> Flow {
        debug!("REPL command: {:?}", command);

        match command {
            ReplCommand::Generate => self.generate().await,
            ReplCommand::CopyCurrent => {
                let result = self.copier.copy_current(&self.store);
                self.report_copy(result);
            }
            ReplCommand::CopyNumber(number) => {
                let result = self.copier.copy_number(&self.store, number);
                self.report_copy(result);
            }
            ReplCommand::CopyAll => {
                let result = self.copier.copy_all(&self.store);
                self.report_copy(result);
            }
            ReplCommand::List => {
                if self.store.is_empty() {
                    println!("{}", self.formatter.format_error("No quotes available"));
                } else {
                    println!("{}", self.formatter.format_listing(self.store.get_all()));
                }
            }
            ReplCommand::Export(path) => self.export(path.as_deref()).await,
            ReplCommand::Reload => self.reload().await,
            ReplCommand::ToggleTheme => {
                let theme = self.formatter.theme().toggled();
                self.formatter.set_theme(theme);
                println!("{}", self.formatter.format_status(&format!("Theme: {}", theme)));
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Quit => {
                println!("Bye!");
                return Flow::Exit;
            }
            ReplCommand::Unknown(input) => {
                println!("Unknown command: {}", input);
                println!("Type /help for available commands");
            }
        }

        Flow::Continue
    }

    async fn generate(&mut self) {
        if self.store.is_empty() {
            println!(
                "{}",
                self.formatter
                    .format_status("No quotes available, load data first (/reload)")
            );
            return;
        }

        if !self.output.quiet {
            reveal_pause(self.config.reveal_delay).await;
        }

        match self.picker.execute(&mut self.store) {
            Ok(selection) => {
                println!();
                println!(
                    "{}",
                    self.formatter.format_selection(&selection, self.store.len())
                );
                println!();
            }
            Err(e) => println!("{}", self.formatter.format_error(&e.to_string())),
        }
    }

    fn report_copy<E: std::fmt::Display>(&self, result: Result<CopiedContent, E>) {
        let line = match result {
            Ok(CopiedContent::Quote(_)) => self.formatter.format_success("Copied!"),
            Ok(CopiedContent::All(count)) => self
                .formatter
                .format_success(&format!("Copied {} quotes", count)),
            Err(e) => self.formatter.format_error(&e.to_string()),
        };
        println!("{}", line);
    }

    async fn export(&self, path: Option<&Path>) {
        let use_case = (self.exporter)(path);
        let line = match use_case.execute(&self.store).await {
            Ok(output) => self
                .formatter
                .format_success(&ConsoleFormatter::export_message(&output)),
            Err(e) => self.formatter.format_error(&e.to_string()),
        };
        println!("{}", line);
    }

    async fn reload(&mut self) {
        let result = if self.output.quiet {
            self.loader.execute_with_progress(&mut self.store, &NoProgress).await
        } else {
            self.loader
                .execute_with_progress(&mut self.store, &ProgressReporter::new())
                .await
        };

        self.record_load(&result);
        let line = match result {
            Ok(_) => self.formatter.format_status(&self.load_message()),
            Err(_) => self.formatter.format_error(&self.load_message()),
        };
        println!("{}", line);
    }
}
