//! # Ordering backend
//!
//! HTTP backend for a small restaurant's online ordering flow. Customers
//! build a cart in the client, then submit it here; the server validates,
//! stamps an order id and timestamp, and appends one row to the shared
//! Google Sheet the kitchen works from.
//!
//!
//!
//! # General Infrastructure
//!
//! - One `POST /orders` endpoint, JSON in and out
//! - 400 for validation failures, 500 when the sheet append fails
//! - The sheet is the only store: no database, no local order copy
//! - Row layout: Timestamp | Order ID | Name | Item Details | Total Price
//!   | Notes | Status
//!
//!
//!
//! # Notes
//!
//! ## Why no retry on the append
//!
//! The append is fire-and-forget with no idempotency key, so an automatic
//! retry could double-book an order the sheet already took. Retry stays a
//! manual user action, and a duplicate row from a double submit is an
//! accepted gap the kitchen resolves by eye.
//!
//! ## Duplicate submissions
//!
//! The client disables its submit control while a request is in flight.
//! Separate sessions (or tabs) are not deduplicated; the sheet's own write
//! serialization governs final row order.
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::post,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod sheets;
pub mod state;

use routes::orders_handler;
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/orders", post(orders_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
