use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::aircraft_controller::AircraftController;
use crate::dto::common::{ApiResponse, SearchParams};
use crate::middleware::auth::require_auth;
use crate::models::aircraft::{Aircraft, CreateAircraftRequest, UpdateAircraftRequest};
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// Lectura pública, escritura autenticada
pub fn create_aircraft_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_aircraft))
        .route("/:id", get(get_aircraft));

    let protected = Router::new()
        .route("/", post(create_aircraft))
        .route("/:id", put(update_aircraft))
        .route("/:id", delete(delete_aircraft))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    public.merge(protected)
}

async fn create_aircraft(
    State(state): State<AppState>,
    Json(request): Json<CreateAircraftRequest>,
) -> AppResult<Json<ApiResponse<Aircraft>>> {
    let controller = AircraftController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_aircraft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Aircraft>> {
    let controller = AircraftController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_aircraft(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Aircraft>>> {
    let controller = AircraftController::new(state.pool.clone());
    let response = controller.list(params).await?;
    Ok(Json(response))
}

async fn update_aircraft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAircraftRequest>,
) -> AppResult<Json<ApiResponse<Aircraft>>> {
    let controller = AircraftController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_aircraft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let controller = AircraftController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Aeronave eliminada exitosamente"
    })))
}
