use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::route_controller::RouteController;
use crate::dto::common::{ApiResponse, RouteListParams};
use crate::middleware::auth::require_auth;
use crate::models::route::{CreateRouteRequest, Route, UpdateRouteRequest};
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// Lectura pública, escritura autenticada
pub fn create_route_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_routes))
        .route("/:id", get(get_route));

    let protected = Router::new()
        .route("/", post(create_route))
        .route("/:id", put(update_route))
        .route("/:id", delete(delete_route))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    public.merge(protected)
}

async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteRequest>,
) -> AppResult<Json<ApiResponse<Route>>> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Route>> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_routes(
    State(state): State<AppState>,
    Query(params): Query<RouteListParams>,
) -> AppResult<Json<Vec<Route>>> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.list(params).await?;
    Ok(Json(response))
}

async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRouteRequest>,
) -> AppResult<Json<ApiResponse<Route>>> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let controller = RouteController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Ruta eliminada exitosamente"
    })))
}
