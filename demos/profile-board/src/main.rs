mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    eprintln!("Initializing spellscan SDK...");
    let sdk = spellscan_sdk::AsyncSpellscanSdk::builder()
        .build()
        .await
        .expect("Failed to initialize spellscan SDK");
    eprintln!("SDK ready.");

    let state = Arc::new(AppState { sdk });

    let app = Router::new()
        .route("/", get(routes::board::board_page))
        .route("/api/profiles", get(routes::profiles::list_profiles))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = "0.0.0.0:3000";
    eprintln!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
