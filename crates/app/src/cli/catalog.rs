use clap::{Args, Subcommand};
use vitrine::products::ProductId;
use vitrine_app::{config::ApiConfig, context::AppContext};

use crate::cli::table::{page_footer, products_table};

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(flatten)]
    api: ApiConfig,

    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// List active products
    List(ListArgs),

    /// List the active variations of a product
    Variations(VariationsArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Name search term
    #[arg(long, default_value = "")]
    search: String,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Debug, Args)]
struct VariationsArgs {
    /// Parent product id
    parent_id: String,
}

pub(crate) async fn run(command: CatalogCommand) -> Result<(), String> {
    let context = AppContext::from_config(&command.api).map_err(|error| error.to_string())?;
    let catalog = context.catalog();

    match command.command {
        CatalogSubcommand::List(args) => {
            catalog
                .refresh()
                .await
                .map_err(|error| format!("{error}: {}", error_source(&error)))?;

            let page = catalog
                .page(&args.search, args.page)
                .map_err(|error| error.to_string())?;

            if page.items.is_empty() {
                println!("Nenhum produto encontrado.");
                return Ok(());
            }

            println!(
                "{}",
                products_table(&page.items, |product| catalog.image_url(product), false)
            );
            println!("{}", page_footer(&page));
        }
        CatalogSubcommand::Variations(args) => {
            let parent = ProductId::new(args.parent_id);

            let variations = catalog
                .variations(&parent)
                .await
                .map_err(|error| format!("{error}: {}", error_source(&error)))?;

            if variations.is_empty() {
                println!("Nenhuma variação disponível para o produto {parent}.");
                return Ok(());
            }

            println!(
                "{}",
                products_table(&variations, |product| catalog.image_url(product), false)
            );

            for variation in &variations {
                if let Some(description) = variation.description_text() {
                    println!("{}: {description}", variation.name);
                }
            }
        }
    }

    Ok(())
}

pub(crate) fn error_source(error: &dyn std::error::Error) -> String {
    error
        .source()
        .map_or_else(|| "no further detail".to_string(), ToString::to_string)
}
