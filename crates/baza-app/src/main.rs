//! BAZA Assistant binary - composition root.
//!
//! 1. Parse CLI flags and load configuration from TOML
//! 2. Install tracing (stderr) at the resolved level
//! 3. Load the intent catalog (built-in or from file)
//! 4. Run the chat widget against stdin/stdout until /quit or EOF

mod cli;
mod render;
mod repl;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use baza_chat::{ChatWidget, IntentCatalog, MessageSink};
use baza_core::BazaConfig;

use crate::cli::CliArgs;
use crate::render::TerminalSink;
use crate::repl::Command;

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

/// Load the config file before the global subscriber exists; its warnings
/// still go to stderr.
fn load_config(path: &Path) -> BazaConfig {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::with_default(subscriber, || BazaConfig::load_or_default(path))
}

fn load_catalog(path: Option<&str>) -> Result<IntentCatalog, baza_chat::CatalogError> {
    match path {
        Some(p) => IntentCatalog::load(Path::new(p)),
        None => Ok(IntentCatalog::builtin()),
    }
}

/// Print header and greeting the first time the panel opens.
fn show_panel(widget: &mut ChatWidget) {
    println!(
        "{}",
        render::format_toggle(widget.toggle_icon(), Some(widget.placeholder()))
    );
    if let Some(greeting) = widget.take_greeting() {
        println!("{}", render::format_header(widget.header()));
        let intro = baza_chat::Message::assistant(greeting);
        println!(
            "{}",
            render::format_message(&widget.header().assistant_name, &intro)
        );
    }
}

fn show_toggle(widget: &mut ChatWidget) {
    if widget.is_open() {
        show_panel(widget);
    } else {
        println!("{}", render::format_toggle(widget.toggle_icon(), None));
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let config_file = args.resolve_config_path();
    let mut config = load_config(&config_file);
    args.apply(&mut config);

    init_tracing(&config.general.log_level);
    tracing::info!("Starting BAZA Assistant v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    let catalog = load_catalog(config.chat.catalog_path.as_deref())?;
    let sink: Arc<dyn MessageSink> = Arc::new(TerminalSink::new(config.chat.assistant_name.clone()));
    let mut widget = ChatWidget::new(&config.chat, catalog, Some(sink));

    show_toggle(&mut widget);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Toggle => {
                widget.toggle();
                show_toggle(&mut widget);
            }
            Command::Open => {
                widget.open();
                show_toggle(&mut widget);
            }
            Command::Close => {
                widget.close();
                show_toggle(&mut widget);
            }
            Command::Faq => println!("{}", render::format_faq(widget.catalog())),
            Command::Transcript => println!("{}", widget.transcript_json()?),
            Command::Help => println!("{}", repl::HELP),
            Command::Quit => break,
            Command::Unknown(name) => println!("unknown command /{name}, try /help"),
            Command::Say(text) => {
                if !widget.is_open() {
                    println!("{}", render::format_toggle(widget.toggle_icon(), None));
                    continue;
                }
                widget.set_input(text);
                widget.send();
            }
        }
    }

    // Deliver replies that are still in flight before exiting.
    widget.settle().await;
    tracing::info!(messages = widget.messages().len(), "BAZA Assistant stopped");
    Ok(())
}
