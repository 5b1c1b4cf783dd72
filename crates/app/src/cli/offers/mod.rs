use clap::{Args, Subcommand};

mod eligible;

#[derive(Debug, Args)]
pub(crate) struct OffersCommand {
    #[command(subcommand)]
    command: OffersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OffersSubcommand {
    /// List the offers a customer qualifies for
    Eligible(eligible::EligibleOffersArgs),
}

pub(crate) async fn run(command: OffersCommand) -> Result<(), String> {
    match command.command {
        OffersSubcommand::Eligible(args) => eligible::run(args).await,
    }
}
