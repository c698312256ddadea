use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, SearchParams};
use crate::models::client::{Client, CreateClientRequest, UpdateClientRequest};
use crate::repositories::client_repository::ClientRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};
use crate::utils::validation::require_not_empty;

pub struct ClientController {
    repository: ClientRepository,
}

impl ClientController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateClientRequest) -> Result<ApiResponse<Client>, AppError> {
        request.validate()?;
        require_not_empty("name", &request.name)?;
        require_not_empty("national_id", &request.national_id)?;

        if self
            .repository
            .national_id_exists(&request.national_id, None)
            .await?
        {
            return Err(conflict_error("Client", "national_id", &request.national_id));
        }

        let client = self
            .repository
            .create(request.name, request.national_id, request.phone, request.email)
            .await?;

        Ok(ApiResponse::success_with_message(
            client,
            "Cliente creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Client, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Client", &id))
    }

    pub async fn list(&self, params: SearchParams) -> Result<Vec<Client>, AppError> {
        self.repository.list(params.search.as_deref()).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateClientRequest,
    ) -> Result<ApiResponse<Client>, AppError> {
        request.validate()?;

        if let Some(ref national_id) = request.national_id {
            if self
                .repository
                .national_id_exists(national_id, Some(id))
                .await?
            {
                return Err(conflict_error("Client", "national_id", national_id));
            }
        }

        let client = self
            .repository
            .update(id, request.name, request.national_id, request.phone, request.email)
            .await?;

        Ok(ApiResponse::success_with_message(
            client,
            "Cliente actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
