use std::error::Error;

use dotenvy::dotenv;
use tokio::net::TcpListener;

use museum_ticketing_server::config::Config;
use museum_ticketing_server::routes::create_routes;
use museum_ticketing_server::state::AppState;
use museum_ticketing_server::{db, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let addr = config.bind_addr()?;

    let pool = db::connect(&config).await?;
    tracing::info!("Successfully connected to database");

    db::migrate(&pool).await?;
    tracing::info!("Migrations run successfully");

    if config.seed_events {
        db::seed_events(&pool).await?;
    }

    let app = create_routes(AppState::new(pool, config));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
