//! Menu-builder management handlers
//!
//! JSON surface consumed by the dashboard. The caller's identity is supplied
//! by the upstream access-control layer as the `client_id` path parameter;
//! this core assumes the call is already authorized.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, error_codes, ok};
use crate::menu::{MenuDefinition, MenuNode, MenuStore, ResponseKind};

#[derive(Debug, Deserialize)]
pub struct CreateMenuRequest {
    pub menu_name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddNodeRequest {
    #[serde(default)]
    pub parent_item_id: Option<i64>,
    pub option_trigger: String,
    /// "CON" or "END"
    pub response_type: String,
    pub response_text: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNodeRequest {
    pub option_trigger: String,
    pub response_type: String,
    pub response_text: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct MenuDetailResponse {
    pub menu: MenuDefinition,
    pub items: Vec<MenuNode>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub removed: u64,
}

/// List a client's menus
///
/// GET /api/v1/clients/{client_id}/menus
#[utoipa::path(
    get,
    path = "/api/v1/clients/{client_id}/menus",
    responses(
        (status = 200, description = "All menus owned by the client")
    ),
    tag = "Menus"
)]
pub async fn list_menus(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<i64>,
) -> ApiResult<Vec<MenuDefinition>> {
    let menus = MenuStore::list_menus(state.db.pool(), client_id).await?;
    ok(menus)
}

/// Create a new (inactive) menu
///
/// POST /api/v1/clients/{client_id}/menus
#[utoipa::path(
    post,
    path = "/api/v1/clients/{client_id}/menus",
    request_body(content = String, description = "JSON: {menu_name}", content_type = "application/json"),
    responses(
        (status = 200, description = "Menu created, id returned"),
        (status = 400, description = "Missing menu name")
    ),
    tag = "Menus"
)]
pub async fn create_menu(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<i64>,
    Json(req): Json<CreateMenuRequest>,
) -> ApiResult<CreatedResponse> {
    if req.menu_name.trim().is_empty() {
        return ApiError::bad_request("A menu name is required").into_err();
    }

    let id = MenuStore::create_menu(state.db.pool(), client_id, req.menu_name.trim()).await?;
    ok(CreatedResponse { id })
}

/// Activate a menu, deactivating the client's others atomically
///
/// POST /api/v1/clients/{client_id}/menus/{menu_id}/activate
#[utoipa::path(
    post,
    path = "/api/v1/clients/{client_id}/menus/{menu_id}/activate",
    responses(
        (status = 200, description = "Menu is now the client's only active menu"),
        (status = 404, description = "Menu not found or not owned by the client")
    ),
    tag = "Menus"
)]
pub async fn activate_menu(
    State(state): State<Arc<AppState>>,
    Path((client_id, menu_id)): Path<(i64, i64)>,
) -> ApiResult<()> {
    let activated = MenuStore::set_active(state.db.pool(), client_id, menu_id).await?;
    if !activated {
        return ApiError::not_found(
            error_codes::MENU_NOT_FOUND,
            format!("Menu {menu_id} not found"),
        )
        .into_err();
    }
    ok(())
}

/// Fetch a menu with its full node list
///
/// GET /api/v1/clients/{client_id}/menus/{menu_id}
#[utoipa::path(
    get,
    path = "/api/v1/clients/{client_id}/menus/{menu_id}",
    responses(
        (status = 200, description = "Menu definition and its items"),
        (status = 404, description = "Menu not found or not owned by the client")
    ),
    tag = "Menus"
)]
pub async fn get_menu(
    State(state): State<Arc<AppState>>,
    Path((client_id, menu_id)): Path<(i64, i64)>,
) -> ApiResult<MenuDetailResponse> {
    let Some(menu) = MenuStore::get_menu(state.db.pool(), client_id, menu_id).await? else {
        return ApiError::not_found(
            error_codes::MENU_NOT_FOUND,
            format!("Menu {menu_id} not found"),
        )
        .into_err();
    };

    let items = MenuStore::list_nodes(state.db.pool(), menu_id).await?;
    ok(MenuDetailResponse { menu, items })
}

/// Add a node to a menu
///
/// POST /api/v1/clients/{client_id}/menus/{menu_id}/items
#[utoipa::path(
    post,
    path = "/api/v1/clients/{client_id}/menus/{menu_id}/items",
    request_body(content = String, description = "JSON: {parent_item_id?, option_trigger, response_type, response_text}", content_type = "application/json"),
    responses(
        (status = 200, description = "Node created, id returned"),
        (status = 400, description = "Invalid response type"),
        (status = 404, description = "Menu not found or not owned by the client")
    ),
    tag = "Menus"
)]
pub async fn add_menu_node(
    State(state): State<Arc<AppState>>,
    Path((client_id, menu_id)): Path<(i64, i64)>,
    Json(req): Json<AddNodeRequest>,
) -> ApiResult<CreatedResponse> {
    let kind = ResponseKind::parse(&req.response_type).map_err(ApiError::from)?;

    // Ownership check before touching the node table
    if MenuStore::get_menu(state.db.pool(), client_id, menu_id)
        .await?
        .is_none()
    {
        return ApiError::not_found(
            error_codes::MENU_NOT_FOUND,
            format!("Menu {menu_id} not found"),
        )
        .into_err();
    }

    let id = MenuStore::add_node(
        state.db.pool(),
        menu_id,
        req.parent_item_id,
        &req.option_trigger,
        kind,
        &req.response_text,
    )
    .await?;
    ok(CreatedResponse { id })
}

/// Update an existing menu node
///
/// PUT /api/v1/menus/items/{item_id}
#[utoipa::path(
    put,
    path = "/api/v1/menus/items/{item_id}",
    request_body(content = String, description = "JSON: {option_trigger, response_type, response_text}", content_type = "application/json"),
    responses(
        (status = 200, description = "Node updated"),
        (status = 404, description = "Node not found")
    ),
    tag = "Menus"
)]
pub async fn update_menu_node(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<i64>,
    Json(req): Json<UpdateNodeRequest>,
) -> ApiResult<()> {
    let kind = ResponseKind::parse(&req.response_type).map_err(ApiError::from)?;

    let updated = MenuStore::update_node(
        state.db.pool(),
        item_id,
        &req.option_trigger,
        kind,
        &req.response_text,
    )
    .await?;
    if !updated {
        return ApiError::not_found(
            error_codes::MENU_ITEM_NOT_FOUND,
            format!("Menu item {item_id} not found"),
        )
        .into_err();
    }
    ok(())
}

/// Delete a node and its entire subtree
///
/// DELETE /api/v1/menus/items/{item_id}
#[utoipa::path(
    delete,
    path = "/api/v1/menus/items/{item_id}",
    responses(
        (status = 200, description = "Node and all descendants removed"),
        (status = 404, description = "Node not found")
    ),
    tag = "Menus"
)]
pub async fn delete_menu_node(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<i64>,
) -> ApiResult<DeletedResponse> {
    let removed = MenuStore::delete_node(state.db.pool(), item_id).await?;
    if removed == 0 {
        return ApiError::not_found(
            error_codes::MENU_ITEM_NOT_FOUND,
            format!("Menu item {item_id} not found"),
        )
        .into_err();
    }
    ok(DeletedResponse { removed })
}
