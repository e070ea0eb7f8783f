use std::env;

use tokio::net::TcpListener;
use tracing::{error, info};
use users_backend::{config::Config, database::pool::create_pool, routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let config_path = env::args().nth(1).unwrap_or_else(|| "config.yml".to_string());
    let config = match Config::from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };
    info!("Loaded configuration from {}", config_path);

    let pool = match create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(2);
        }
    };
    info!("Database connection established");

    let app_state = AppState::new(pool);

    info!("Loading routes...");
    for (method, path) in routes::ROUTES {
        info!("{} {}", method, path);
    }
    let app = routes::router(app_state);

    let addr = config.server.address();
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr.as_str()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
