//! Vitrine CLI

use std::process;

use vitrine_app::observability;

mod cli;

#[tokio::main]
pub async fn main() {
    let cli = cli::Cli::load();

    if let Err(error) = observability::init_logging(&cli.logging) {
        eprintln!("{error}");
    }

    if let Err(error) = cli.run().await {
        eprintln!("{error}");
        process::exit(1);
    }
}
