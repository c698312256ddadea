use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::cargo_controller::CargoController;
use crate::dto::common::{ApiResponse, SearchParams};
use crate::middleware::auth::require_auth;
use crate::models::cargo_item::{Cargo, CreateCargoRequest, UpdateCargoRequest};
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// Lectura pública, escritura autenticada
pub fn create_cargo_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_cargo))
        .route("/:id", get(get_cargo));

    let protected = Router::new()
        .route("/", post(create_cargo))
        .route("/:id", put(update_cargo))
        .route("/:id", delete(delete_cargo))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    public.merge(protected)
}

async fn create_cargo(
    State(state): State<AppState>,
    Json(request): Json<CreateCargoRequest>,
) -> AppResult<Json<ApiResponse<Cargo>>> {
    let controller = CargoController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_cargo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Cargo>> {
    let controller = CargoController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_cargo(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Cargo>>> {
    let controller = CargoController::new(state.pool.clone());
    let response = controller.list(params).await?;
    Ok(Json(response))
}

async fn update_cargo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCargoRequest>,
) -> AppResult<Json<ApiResponse<Cargo>>> {
    let controller = CargoController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_cargo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let controller = CargoController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Carga eliminada exitosamente"
    })))
}
