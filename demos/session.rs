//! Session Example
//!
//! Replays a scripted session of form and cart events, then prints the
//! resulting cart.
//!
//! Use `-f` to load a fixture set by name from `fixtures/sessions`
//! Use `-p` to load a session file from any path
//! Set `RUST_LOG=carrito=debug` to trace every event

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use carrito::{fixtures::SessionFixture, receipt::Receipt};

/// Arguments for the session example
#[derive(Debug, Parser)]
struct SessionArgs {
    /// Fixture set to replay
    #[clap(short, long, default_value = "demo")]
    fixture: String,

    /// Session file to replay instead of a named fixture set
    #[clap(short, long)]
    path: Option<PathBuf>,
}

/// Session Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = SessionArgs::parse();

    let fixture = match args.path.as_deref() {
        Some(path) => SessionFixture::from_path(path)?,
        None => SessionFixture::from_set(&args.fixture)?,
    };

    let currency = fixture.currency()?;
    let state = fixture.replay();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    Receipt::from_cart(state.cart(), currency)?.write_to(&mut handle)?;

    println!("\nReplayed {} events", fixture.events.len());

    Ok(())
}
