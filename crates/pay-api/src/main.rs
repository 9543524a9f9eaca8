//! # PayPal Orders RS
//!
//! Order creation and capture relay in front of the PayPal REST API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export PAYPAL_CLIENT_ID=...
//! export PAYPAL_CLIENT_SECRET=...
//! export PORT=8888
//!
//! # Run the server
//! paypal-orders
//! ```

use pay_api::{routes, AppConfig, AppState};
use pay_paypal::PayPalConfig;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    if json_logs {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    // Print banner
    print_banner();

    let paypal = PayPalConfig::from_env();
    if !paypal.credentials.is_complete() {
        warn!("PAYPAL_CLIENT_ID / PAYPAL_CLIENT_SECRET not set; every order call will fail");
    }
    info!(
        "PayPal API: {} (sandbox={})",
        paypal.api_base_url,
        paypal.is_sandbox()
    );

    // Initialize application state
    let state = AppState::new(AppConfig::from_env(), paypal)?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.provider());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Server listening at http://{}/", addr);

    if !is_prod {
        info!("Create: POST http://{}/api/orders", addr);
        info!("Capture: POST http://{}/api/orders/{{order_id}}/capture", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  PayPal Orders RS
  ━━━━━━━━━━━━━━━━━━━━━━━
  Create & capture relay
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
