use tracing_subscriber::EnvFilter;

use dentiq::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await;
    let storage = startup::build_storage(&config).await;
    let carrier = startup::build_carrier_client(&config);

    let state = AppState {
        db,
        storage,
        carrier,
    };

    let app = router::routes().with_state(state);

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Starting server on {}", address);

    axum::serve(listener, app)
        .await
        .expect("Server exited with an error");
}
