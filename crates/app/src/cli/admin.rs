use std::path::PathBuf;

use clap::{Args, Subcommand};
use vitrine::{
    listing::{ListingQuery, StatusFilter},
    products::ProductId,
};
use vitrine_app::{
    admin::{AdminService, Committed},
    api::ImageUpload,
    config::{AdminCredentialsConfig, ApiConfig},
    context::AppContext,
    store::Refresh,
};
use zeroize::Zeroizing;

use crate::cli::{
    catalog::error_source,
    table::{page_footer, products_table},
};

#[derive(Debug, Args)]
pub(crate) struct AdminCommand {
    #[command(flatten)]
    api: ApiConfig,

    #[command(flatten)]
    credentials: AdminCredentialsConfig,

    /// Username to sign in with
    #[arg(long)]
    username: String,

    /// Password to sign in with
    #[arg(long, env = "VITRINE_PASSWORD", hide_env_values = true)]
    password: String,

    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminSubcommand {
    /// List products, active or not
    List(ListArgs),

    /// Flip a product's active flag
    Toggle(ProductArgs),

    /// Upload a product image
    Upload(UploadArgs),

    /// Start a product re-synchronisation job
    Sync,

    /// Show inventory statistics
    Stats,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Name search term
    #[arg(long, default_value = "")]
    search: String,

    /// Status filter (todos, ativos, inativos)
    #[arg(long, default_value = "todos")]
    status: StatusFilter,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Debug, Args)]
struct ProductArgs {
    /// Product id
    product_id: String,
}

#[derive(Debug, Args)]
struct UploadArgs {
    /// Product id
    product_id: String,

    /// Image file
    file: PathBuf,
}

pub(crate) async fn run(command: AdminCommand) -> Result<(), String> {
    let password = Zeroizing::new(command.password);

    let authenticator = command
        .credentials
        .authenticator()
        .map_err(|error| error.to_string())?;

    let context = AppContext::from_config(&command.api).map_err(|error| error.to_string())?;

    let admin = context
        .admin(&authenticator, &command.username, &password)
        .map_err(|error| error.to_string())?;

    load(&admin).await?;

    match command.command {
        AdminSubcommand::List(args) => list(&admin, args),
        AdminSubcommand::Toggle(args) => toggle(&admin, args).await,
        AdminSubcommand::Upload(args) => upload(&admin, args).await,
        AdminSubcommand::Sync => sync(&admin).await,
        AdminSubcommand::Stats => stats(&admin),
    }
}

async fn load(admin: &AdminService) -> Result<Refresh, String> {
    admin
        .refresh()
        .await
        .map_err(|error| format!("Erro ao carregar produtos: {}", error_source(&error)))
}

fn list(admin: &AdminService, args: ListArgs) -> Result<(), String> {
    let page = admin
        .page(&ListingQuery::admin(args.search, args.status, args.page))
        .map_err(|error| error.to_string())?;

    if page.items.is_empty() {
        println!("Nenhum produto encontrado.");
        return Ok(());
    }

    println!(
        "{}",
        products_table(&page.items, |product| admin.image_url(product), true)
    );
    println!("{}", page_footer(&page));

    Ok(())
}

async fn toggle(admin: &AdminService, args: ProductArgs) -> Result<(), String> {
    let product = admin
        .toggle_active(&ProductId::new(args.product_id))
        .await
        .map_err(|error| format!("Erro ao alterar status: {error}"))?;

    let status = if product.active { "ativo" } else { "inativo" };

    println!("{} agora está {status}.", product.name);

    Ok(())
}

async fn upload(admin: &AdminService, args: UploadArgs) -> Result<(), String> {
    let bytes = tokio::fs::read(&args.file)
        .await
        .map_err(|error| format!("failed to read {}: {error}", args.file.display()))?;

    let file_name = args
        .file
        .file_name()
        .map_or_else(|| "imagem".to_string(), |name| name.to_string_lossy().into_owned());

    let image = ImageUpload {
        content_type: ImageUpload::guess_content_type(&file_name).map(String::from),
        file_name,
        bytes,
    };

    let committed = admin
        .upload_image(&ProductId::new(args.product_id), image)
        .await
        .map_err(|error| format!("Erro ao enviar imagem: {error}"))?;

    println!("Imagem atualizada com sucesso!");
    report_reload(committed);

    Ok(())
}

async fn sync(admin: &AdminService) -> Result<(), String> {
    let committed = admin
        .start_sync()
        .await
        .map_err(|error| format!("Erro ao atualizar os produtos: {error}"))?;

    println!("Sincronização de produtos iniciada.");
    report_reload(committed);

    Ok(())
}

fn report_reload(committed: Committed) {
    if committed == Committed::ReloadFailed {
        eprintln!("Erro ao recarregar produtos; a listagem exibida pode estar desatualizada.");
    }
}

fn stats(admin: &AdminService) -> Result<(), String> {
    let stats = admin.stats().map_err(|error| error.to_string())?;

    println!("Total de produtos: {}", stats.total);
    println!("Ativos: {}", stats.active);
    println!("Inativos: {}", stats.inactive);
    println!("Valor em estoque: {}", stats.stock_value);

    Ok(())
}
