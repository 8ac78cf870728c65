use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use panel::approval::client::ApprovalClient;
use panel::config::{self, Config};
use panel::lang;
use panel::page::controls::ApprovalControl;
use panel::page::flash::FlashKind;
use panel::runtime::Console;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "panel=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load()?;
    let args = cli::Cli::parse();

    match args.command {
        cli::Commands::Approve {
            user_id,
            requestor_id,
        } => run_decision(&cfg, "approve", user_id, requestor_id).await,
        cli::Commands::Reject {
            user_id,
            requestor_id,
        } => run_decision(&cfg, "reject", user_id, requestor_id).await,
        cli::Commands::Submit {
            action,
            user_id,
            requestor_id,
        } => run_decision(&cfg, &action, user_id, requestor_id).await,
        cli::Commands::Languages => {
            print_languages(&cfg);
            Ok(())
        }
    }
}

/// Drive one decision through the runtime exactly as a page would: a
/// pending row, a control activation, a settlement, flash feedback.
async fn run_decision(
    cfg: &Config,
    action: &str,
    user_id: String,
    requestor_id: String,
) -> anyhow::Result<()> {
    let client = ApprovalClient::from_config(cfg);
    let mut console = Console::new(Arc::new(client), cfg.flash_clear());

    let row = console.state.listing.insert(&user_id, &requestor_id);
    let control = ApprovalControl {
        action: action.to_string(),
        user_id,
        requestor_id,
    };

    console.submit_approval(&control, row);
    let event = console
        .next_event()
        .await
        .context("event queue closed before the decision settled")?;
    console.apply(event);

    for message in console.state.flash.messages() {
        match message.kind {
            FlashKind::Success => println!("✓ {}", message.text),
            FlashKind::Error => eprintln!("✗ {}", message.text),
        }
    }

    // The row's fate is the outcome: still listed means not accepted.
    if console.state.listing.contains(row) {
        std::process::exit(1);
    }
    Ok(())
}

fn print_languages(cfg: &Config) {
    for (code, name) in lang::SUPPORTED_LANGUAGES {
        let marker = match &cfg.language {
            Some(active) if active.as_str() == *code => "*",
            _ => " ",
        };
        println!("{marker} {code}  {name:<12} {}", lang::switch_path(code));
    }
}
