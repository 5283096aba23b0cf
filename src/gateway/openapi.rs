//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "USSD Billing Core API",
        version = "1.0.0",
        description = "Multi-tenant USSD session and menu-resolution engine with asynchronous billing reconciliation."
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        // Aggregator-facing endpoints
        crate::gateway::handlers::callback::ussd_callback,
        crate::gateway::handlers::events::ussd_events,
        // Management endpoints
        crate::gateway::handlers::menus::list_menus,
        crate::gateway::handlers::menus::create_menu,
        crate::gateway::handlers::menus::activate_menu,
        crate::gateway::handlers::menus::get_menu,
        crate::gateway::handlers::menus::add_menu_node,
        crate::gateway::handlers::menus::update_menu_node,
        crate::gateway::handlers::menus::delete_menu_node,
        crate::gateway::handlers::health::health,
    ),
    tags(
        (name = "USSD", description = "Aggregator callback and notification endpoints (plain text responses)"),
        (name = "Menus", description = "Menu-builder management endpoints"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "USSD Billing Core API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/ussd/callback"));
        assert!(paths.paths.contains_key("/ussd/events"));
        assert!(paths.paths.contains_key("/api/v1/health"));
        assert!(
            paths
                .paths
                .contains_key("/api/v1/clients/{client_id}/menus")
        );
    }
}
