//! Seed script - populates the dashboard database with the demo dataset
//!
//! Run with:
//! ```
//! cargo run --bin seed
//! ```

use dashboard_seed::config::SeedConfig;
use dashboard_seed::db::Seeder;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = run().await {
        tracing::error!(%error, "An error occurred while attempting to seed the database");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = SeedConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    let seeder = Seeder::new(pool).with_hash_cost(config.hash_cost);
    let summary = seeder.seed_all().await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Users: {}", summary.users);
    tracing::info!("  Customers: {}", summary.customers);
    tracing::info!("  Invoices: {}", summary.invoices);
    tracing::info!("  Revenue entries: {}", summary.revenue);

    Ok(())
}
