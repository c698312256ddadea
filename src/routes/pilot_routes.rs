use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::pilot_controller::PilotController;
use crate::dto::common::ApiResponse;
use crate::middleware::auth::require_auth;
use crate::models::pilot::{CreatePilotRequest, Pilot, UpdatePilotRequest};
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// Gestión de pilotos: todas las operaciones requieren autenticación
pub fn create_pilot_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_pilot))
        .route("/", get(list_pilots))
        .route("/:id", get(get_pilot))
        .route("/:id", put(update_pilot))
        .route("/:id", delete(delete_pilot))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

async fn create_pilot(
    State(state): State<AppState>,
    Json(request): Json<CreatePilotRequest>,
) -> AppResult<Json<ApiResponse<Pilot>>> {
    let controller = PilotController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_pilot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Pilot>> {
    let controller = PilotController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_pilots(State(state): State<AppState>) -> AppResult<Json<Vec<Pilot>>> {
    let controller = PilotController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_pilot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePilotRequest>,
) -> AppResult<Json<ApiResponse<Pilot>>> {
    let controller = PilotController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_pilot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let controller = PilotController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Piloto eliminado exitosamente"
    })))
}
