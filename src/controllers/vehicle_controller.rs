use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, SearchParams};
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::validation::require_not_empty;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;
        require_not_empty("plate", &request.plate)?;
        require_not_empty("vehicle_type", &request.vehicle_type)?;

        // Verificar que la patente no exista
        if self.repository.plate_exists(&request.plate, None).await? {
            return Err(conflict_error("Vehicle", "plate", &request.plate));
        }

        let vehicle = self
            .repository
            .create(
                request.plate,
                request.vehicle_type,
                request.capacity_kg,
                request.active.unwrap_or(true),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Vehicle, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id))
    }

    pub async fn list(&self, params: SearchParams) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list(params.search.as_deref()).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;

        // Re-validar unicidad de la patente si cambia
        if let Some(ref plate) = request.plate {
            if self.repository.plate_exists(plate, Some(id)).await? {
                return Err(conflict_error("Vehicle", "plate", plate));
            }
        }

        let vehicle = self
            .repository
            .update(id, request.plate, request.vehicle_type, request.capacity_kg, request.active)
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
