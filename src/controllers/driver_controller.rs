use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::models::driver::{CreateDriverRequest, Driver, UpdateDriverRequest};
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::validation::require_not_empty;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateDriverRequest) -> Result<ApiResponse<Driver>, AppError> {
        request.validate()?;
        require_not_empty("name", &request.name)?;
        require_not_empty("national_id", &request.national_id)?;

        if self
            .repository
            .national_id_exists(&request.national_id, None)
            .await?
        {
            return Err(conflict_error("Driver", "national_id", &request.national_id));
        }

        let driver = self
            .repository
            .create(
                request.name,
                request.national_id,
                request.license,
                request.active.unwrap_or(true),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            driver,
            "Conductor creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Driver, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", &id))
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        self.repository.list().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDriverRequest,
    ) -> Result<ApiResponse<Driver>, AppError> {
        request.validate()?;

        if let Some(ref national_id) = request.national_id {
            if self
                .repository
                .national_id_exists(national_id, Some(id))
                .await?
            {
                return Err(conflict_error("Driver", "national_id", national_id));
            }
        }

        let driver = self
            .repository
            .update(id, request.name, request.national_id, request.license, request.active)
            .await?;

        Ok(ApiResponse::success_with_message(
            driver,
            "Conductor actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
