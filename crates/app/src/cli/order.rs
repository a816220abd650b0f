use std::path::PathBuf;

use clap::Args;
use vitrine::fixtures::CartFixture;
use vitrine_app::config::OrderConfig;

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// YAML cart file
    #[arg(long)]
    cart: PathBuf,

    #[command(flatten)]
    order: OrderConfig,
}

pub(crate) fn run(args: &OrderArgs) -> Result<(), String> {
    let cart = CartFixture::from_path(&args.cart)
        .and_then(CartFixture::into_cart)
        .map_err(|error| format!("failed to load cart {}: {error}", args.cart.display()))?;

    let template = args.order.template();
    let message = template.render(&cart).map_err(|error| error.to_string())?;
    let link = template.link(&cart).map_err(|error| error.to_string())?;

    println!("{message}");
    println!();
    println!("{link}");

    Ok(())
}
