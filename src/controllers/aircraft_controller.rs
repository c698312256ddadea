use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, SearchParams};
use crate::models::aircraft::{Aircraft, CreateAircraftRequest, UpdateAircraftRequest};
use crate::repositories::aircraft_repository::AircraftRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::validation::require_not_empty;

pub struct AircraftController {
    repository: AircraftRepository,
}

impl AircraftController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AircraftRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAircraftRequest,
    ) -> Result<ApiResponse<Aircraft>, AppError> {
        request.validate()?;
        require_not_empty("registration", &request.registration)?;
        require_not_empty("aircraft_type", &request.aircraft_type)?;

        if self
            .repository
            .registration_exists(&request.registration, None)
            .await?
        {
            return Err(conflict_error("Aircraft", "registration", &request.registration));
        }

        let aircraft = self
            .repository
            .create(
                request.registration,
                request.aircraft_type,
                request.capacity_kg,
                request.active.unwrap_or(true),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            aircraft,
            "Aeronave creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Aircraft, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Aircraft", &id))
    }

    pub async fn list(&self, params: SearchParams) -> Result<Vec<Aircraft>, AppError> {
        self.repository.list(params.search.as_deref()).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAircraftRequest,
    ) -> Result<ApiResponse<Aircraft>, AppError> {
        request.validate()?;

        if let Some(ref registration) = request.registration {
            if self
                .repository
                .registration_exists(registration, Some(id))
                .await?
            {
                return Err(conflict_error("Aircraft", "registration", registration));
            }
        }

        let aircraft = self
            .repository
            .update(
                id,
                request.registration,
                request.aircraft_type,
                request.capacity_kg,
                request.active,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            aircraft,
            "Aeronave actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
