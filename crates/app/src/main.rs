//! Catalog administration CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use catalog_app::{
    database,
    products::{PgProductsService, ProductsService},
};

#[derive(Debug, Parser)]
#[command(name = "catalog-app", about = "Product catalog administration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db(DbCommand),

    /// Product inspection
    Products(ProductsCommand),
}

#[derive(Debug, Args)]
struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending schema migrations
    Migrate(ConnectionArgs),
}

#[derive(Debug, Args)]
struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// Print every product, most expensive first
    List(ConnectionArgs),
}

#[derive(Debug, Args)]
struct ConnectionArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to apply migrations: {0}")]
    Migrate(#[source] sqlx::migrate::MigrateError),

    #[error("failed to list products: {0}")]
    Products(#[source] catalog_app::products::ProductsServiceError),
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Db(DbCommand {
            command: DbSubcommand::Migrate(args),
        }) => migrate(args).await,
        Commands::Products(ProductsCommand {
            command: ProductsSubcommand::List(args),
        }) => list_products(args).await,
    }
}

async fn migrate(args: ConnectionArgs) -> Result<(), CliError> {
    let pool = database::connect(&args.database_url, 1)
        .await
        .map_err(CliError::Connect)?;

    database::migrate(&pool).await.map_err(CliError::Migrate)?;

    println!("migrations applied");

    Ok(())
}

async fn list_products(args: ConnectionArgs) -> Result<(), CliError> {
    let pool = database::connect(&args.database_url, 1)
        .await
        .map_err(CliError::Connect)?;

    let products = PgProductsService::new(database::Db::new(pool))
        .list_products()
        .await
        .map_err(CliError::Products)?;

    for product in products {
        let availability = if product.availability {
            "available"
        } else {
            "unavailable"
        };

        println!(
            "{}\t{}\t{:.2}\t{availability}",
            product.id, product.name, product.price
        );
    }

    Ok(())
}
