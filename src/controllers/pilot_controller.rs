use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::models::pilot::{CreatePilotRequest, Pilot, UpdatePilotRequest};
use crate::repositories::pilot_repository::PilotRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::validation::require_not_empty;

pub struct PilotController {
    repository: PilotRepository,
}

impl PilotController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PilotRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreatePilotRequest) -> Result<ApiResponse<Pilot>, AppError> {
        request.validate()?;
        require_not_empty("name", &request.name)?;
        require_not_empty("national_id", &request.national_id)?;

        if self
            .repository
            .national_id_exists(&request.national_id, None)
            .await?
        {
            return Err(conflict_error("Pilot", "national_id", &request.national_id));
        }

        let pilot = self
            .repository
            .create(
                request.name,
                request.national_id,
                request.certification,
                request.active.unwrap_or(true),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            pilot,
            "Piloto creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Pilot, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Pilot", &id))
    }

    pub async fn list(&self) -> Result<Vec<Pilot>, AppError> {
        self.repository.list().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdatePilotRequest,
    ) -> Result<ApiResponse<Pilot>, AppError> {
        request.validate()?;

        if let Some(ref national_id) = request.national_id {
            if self
                .repository
                .national_id_exists(national_id, Some(id))
                .await?
            {
                return Err(conflict_error("Pilot", "national_id", national_id));
            }
        }

        let pilot = self
            .repository
            .update(id, request.name, request.national_id, request.certification, request.active)
            .await?;

        Ok(ApiResponse::success_with_message(
            pilot,
            "Piloto actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
