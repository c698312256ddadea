use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::cargo_controller::CargoController;
use crate::controllers::dispatch_controller::DispatchController;
use crate::dto::common::ApiResponse;
use crate::middleware::auth::require_auth;
use crate::models::cargo_item::Cargo;
use crate::models::dispatch::{CreateDispatchRequest, Dispatch, UpdateDispatchRequest};
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// Gestión de despachos: todas las operaciones requieren autenticación
pub fn create_dispatch_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_dispatch))
        .route("/", get(list_dispatches))
        .route("/:id", get(get_dispatch))
        .route("/:id", put(update_dispatch))
        .route("/:id", delete(delete_dispatch))
        .route("/:id/cargo", get(list_dispatch_cargo))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

async fn create_dispatch(
    State(state): State<AppState>,
    Json(request): Json<CreateDispatchRequest>,
) -> AppResult<Json<ApiResponse<Dispatch>>> {
    let controller = DispatchController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_dispatch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Dispatch>> {
    let controller = DispatchController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_dispatches(State(state): State<AppState>) -> AppResult<Json<Vec<Dispatch>>> {
    let controller = DispatchController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

/// Cargas pertenecientes a un despacho
async fn list_dispatch_cargo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Cargo>>> {
    let controller = CargoController::new(state.pool.clone());
    let response = controller.list_by_dispatch(id).await?;
    Ok(Json(response))
}

async fn update_dispatch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDispatchRequest>,
) -> AppResult<Json<ApiResponse<Dispatch>>> {
    let controller = DispatchController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_dispatch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let controller = DispatchController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Despacho eliminado exitosamente junto con sus cargas"
    })))
}
