use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, RouteListParams};
use crate::models::route::{CreateRouteRequest, Route, TransportMode, UpdateRouteRequest};
use crate::repositories::route_repository::RouteRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::require_not_empty;

pub struct RouteController {
    repository: RouteRepository,
}

impl RouteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateRouteRequest) -> Result<ApiResponse<Route>, AppError> {
        request.validate()?;
        require_not_empty("origin", &request.origin)?;
        require_not_empty("destination", &request.destination)?;

        let mode = TransportMode::parse(&request.transport_mode).ok_or_else(|| {
            AppError::Validation(format!(
                "Modo de transporte inválido: '{}' (se espera LAND o AIR)",
                request.transport_mode
            ))
        })?;

        let route = self
            .repository
            .create(request.origin, request.destination, mode.as_str(), request.distance_km)
            .await?;

        Ok(ApiResponse::success_with_message(
            route,
            "Ruta creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Route, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Route", &id))
    }

    pub async fn list(&self, params: RouteListParams) -> Result<Vec<Route>, AppError> {
        self.repository
            .list(params.search.as_deref(), params.ordering.as_deref())
            .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateRouteRequest,
    ) -> Result<ApiResponse<Route>, AppError> {
        request.validate()?;

        let transport_mode = match request.transport_mode {
            Some(raw) => Some(
                TransportMode::parse(&raw)
                    .ok_or_else(|| {
                        AppError::Validation(format!(
                            "Modo de transporte inválido: '{}' (se espera LAND o AIR)",
                            raw
                        ))
                    })?
                    .as_str()
                    .to_string(),
            ),
            None => None,
        };

        let route = self
            .repository
            .update(id, request.origin, request.destination, transport_mode, request.distance_km)
            .await?;

        Ok(ApiResponse::success_with_message(
            route,
            "Ruta actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
