//! Creates the schema if needed and inserts the fixed exhibitions.

use std::error::Error;

use dotenvy::dotenv;

use museum_ticketing_server::config::Config;
use museum_ticketing_server::{db, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let pool = db::connect(&config).await?;
    db::migrate(&pool).await?;

    let inserted = db::seed_events(&pool).await?;
    tracing::info!(inserted, "Seeding finished");

    pool.close().await;
    Ok(())
}
