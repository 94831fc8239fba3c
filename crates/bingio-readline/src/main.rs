use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use bingio_core::config::AssistantConfig;
use bingio_core::session::ChatMessage;
use bingio_interaction::InteractionManager;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec!["/reset".to_string()],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Prints one assistant message with its dimmed timestamp line.
fn print_assistant_message(msg: &ChatMessage) {
    for line in msg.text.lines() {
        println!("{}", line.bright_blue());
    }
    println!("{}", msg.timestamp.bright_black());
    println!();
}

/// The main entry point for the Bingio chat REPL.
///
/// Sets up a rustyline-based REPL that:
/// 1. Creates a single in-memory chat session
/// 2. Drains assistant messages from an mpsc channel on a background task,
///    so delayed recommendations print when they complete
/// 3. Provides command completion for /reset
/// 4. Handles quit/exit and Ctrl-D, discarding pending replies on teardown
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ===== Session Setup =====
    let config = AssistantConfig::default();
    let assistant_name = config.assistant_name.clone();

    let (outbound_tx, mut outbound_rx) = mpsc::channel::<ChatMessage>(32);
    let manager = InteractionManager::new("cli-session", config, outbound_tx);

    // Spawn display task for assistant messages
    let display_task = tokio::spawn(async move {
        while let Some(msg) = outbound_rx.recv().await {
            print_assistant_message(&msg);
        }
    });

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", format!("=== Chat with {assistant_name} ===").bright_magenta().bold());
    println!(
        "{}",
        "Type '/reset' to start a new chat, or 'quit' to exit.".bright_black()
    );
    println!();

    manager.greet().await?;

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // Skip empty lines
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                if trimmed == "/reset" {
                    manager.reset().await?;
                    continue;
                }

                // Echo user input in green
                println!("{}", format!("> {}", trimmed).green());

                if let Err(e) = manager.handle_input(trimmed).await {
                    eprintln!("{}", format!("Error: {:?}", e).red());
                    break;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    // Tear the session down; pending deferred replies are discarded.
    manager.close();
    drop(manager);

    // The display task ends once the session (and its sender) is gone.
    let _ = display_task.await;

    Ok(())
}
