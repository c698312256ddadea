use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, SearchParams};
use crate::models::cargo_item::{Cargo, CreateCargoRequest, UpdateCargoRequest};
use crate::repositories::cargo_repository::CargoRepository;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::dispatch_repository::DispatchRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::require_not_empty;

pub struct CargoController {
    repository: CargoRepository,
    dispatches: DispatchRepository,
    clients: ClientRepository,
}

impl CargoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CargoRepository::new(pool.clone()),
            dispatches: DispatchRepository::new(pool.clone()),
            clients: ClientRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCargoRequest) -> Result<ApiResponse<Cargo>, AppError> {
        request.validate()?;
        require_not_empty("description", &request.description)?;

        // El despacho dueño es obligatorio y debe existir; nada se escribe
        // si la verificación falla.
        if self.dispatches.find_by_id(request.dispatch_id).await?.is_none() {
            return Err(not_found_error("Dispatch", &request.dispatch_id));
        }

        if let Some(client_id) = request.client_id {
            if self.clients.find_by_id(client_id).await?.is_none() {
                return Err(not_found_error("Client", &client_id));
            }
        }

        let cargo = self
            .repository
            .create(
                request.dispatch_id,
                request.client_id,
                request.description,
                request.weight_kg,
                request.declared_value,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            cargo,
            "Carga creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Cargo, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Cargo", &id))
    }

    pub async fn list(&self, params: SearchParams) -> Result<Vec<Cargo>, AppError> {
        self.repository.list(params.search.as_deref()).await
    }

    pub async fn list_by_dispatch(&self, dispatch_id: Uuid) -> Result<Vec<Cargo>, AppError> {
        if self.dispatches.find_by_id(dispatch_id).await?.is_none() {
            return Err(not_found_error("Dispatch", &dispatch_id));
        }
        self.repository.find_by_dispatch(dispatch_id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCargoRequest,
    ) -> Result<ApiResponse<Cargo>, AppError> {
        request.validate()?;

        if let Some(Some(client_id)) = request.client_id {
            if self.clients.find_by_id(client_id).await?.is_none() {
                return Err(not_found_error("Client", &client_id));
            }
        }

        let cargo = self
            .repository
            .update(
                id,
                request.client_id,
                request.description,
                request.weight_kg,
                request.declared_value,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            cargo,
            "Carga actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
