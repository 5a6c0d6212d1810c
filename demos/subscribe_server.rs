//! Subscription proxy server
//!
//! Runs the `POST /api/subscribe` endpoint against the real Brevo API.
//! Requires `BREVO_API_KEY` in the environment; without it every request
//! answers with the configuration error.
//!
//! Run with: cargo run --example subscribe_server

use cookingtemps::api;
use cookingtemps::config::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,cookingtemps=debug")
        .init();

    api::serve(Config::load()).await
}
