pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Start the HTTP gateway server
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) {
    // Aggregator-facing routes: form in, plain text out
    let ussd_routes = Router::new()
        .route("/callback", post(handlers::callback::ussd_callback))
        .route("/events", post(handlers::events::ussd_events));

    // Menu-builder management routes
    let management_routes = Router::new()
        .route(
            "/clients/{client_id}/menus",
            get(handlers::menus::list_menus).post(handlers::menus::create_menu),
        )
        .route(
            "/clients/{client_id}/menus/{menu_id}",
            get(handlers::menus::get_menu),
        )
        .route(
            "/clients/{client_id}/menus/{menu_id}/activate",
            post(handlers::menus::activate_menu),
        )
        .route(
            "/clients/{client_id}/menus/{menu_id}/items",
            post(handlers::menus::add_menu_node),
        )
        .route(
            "/menus/items/{item_id}",
            put(handlers::menus::update_menu_node).delete(handlers::menus::delete_menu_node),
        );

    let app = Router::new()
        .route("/api/v1/health", get(handlers::health::health))
        .nest("/ussd", ussd_routes)
        .nest("/api/v1", management_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📞 USSD callback:  POST /ussd/callback");
    println!("💰 USSD events:    POST /ussd/events");
    println!("📖 API Docs: http://{}/docs", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
