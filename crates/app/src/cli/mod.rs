use std::error::Error;

use clap::{Parser, Subcommand};

mod catalog;
mod offers;

#[derive(Debug, Parser)]
#[command(name = "perks-app", about = "Perks CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Catalog(catalog::CatalogCommand),
    Offers(offers::OffersCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Catalog(command) => catalog::run(command),
            Commands::Offers(command) => offers::run(command).await,
        }
    }
}

/// Render an error and its whole source chain on one line.
fn describe(context: &str, error: &dyn Error) -> String {
    let mut message = format!("{context}: {error}");
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
