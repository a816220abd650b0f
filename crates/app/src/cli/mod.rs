use clap::{Parser, Subcommand};
use vitrine_app::config::LoggingConfig;

mod admin;
mod catalog;
mod order;
mod table;

#[derive(Debug, Parser)]
#[command(name = "vitrine", about = "Vitrine storefront CLI", long_about = None)]
pub(crate) struct Cli {
    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the shopper catalog
    Catalog(catalog::CatalogCommand),

    /// Build the order message for a cart file
    Order(order::OrderArgs),

    /// Sign in and manage products
    Admin(admin::AdminCommand),
}

impl Cli {
    /// Parse arguments after loading `.env` when present.
    pub(crate) fn load() -> Self {
        _ = dotenvy::dotenv();

        Self::parse()
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Catalog(command) => catalog::run(command).await,
            Commands::Order(args) => order::run(&args),
            Commands::Admin(command) => admin::run(command).await,
        }
    }
}
