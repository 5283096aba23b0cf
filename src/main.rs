//! ussd-billing - Multi-tenant USSD session and billing core
//!
//! Entry point. Architecture:
//!
//! ```text
//! ┌────────────┐    ┌───────────┐    ┌────────────┐    ┌────────────┐
//! │ Aggregator │───▶│  Gateway  │───▶│ Menu walk  │───▶│ CON/END    │
//! │ (callback) │    │  (axum)   │    │ + ledger   │    │ plain text │
//! └────────────┘    └───────────┘    └────────────┘    └────────────┘
//!
//! Completion notifications take a separate path: acknowledged
//! immediately, reconciled (status + token debit) in a spawned task.
//! ```

use std::sync::Arc;

use rust_decimal::Decimal;

use ussd_billing::config::AppConfig;
use ussd_billing::db::Database;
use ussd_billing::gateway::state::AppState;
use ussd_billing::menu::StaticMenuRegistry;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = ussd_billing::logging::init_logging(&config);

    tracing::info!("Starting ussd-billing in {} mode", env);

    let db = match Database::connect(&config.postgres_url).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            eprintln!("❌ FATAL: Failed to connect to PostgreSQL: {}", e);
            std::process::exit(1);
        }
    };
    println!("🗄️  PostgreSQL connected");

    let registry = Arc::new(StaticMenuRegistry::with_builtin_handlers());
    println!(
        "📋 Static menu handlers registered: {}",
        registry.len()
    );

    let default_multiplier = Decimal::from(config.billing.default_ussd_multiplier);
    let state = Arc::new(AppState::new(db, registry, default_multiplier));

    let port = get_port_override().unwrap_or(config.gateway.port);
    ussd_billing::gateway::run_server(&config.gateway.host, port, state).await;
}
