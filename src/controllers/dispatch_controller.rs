use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::models::dispatch::{
    CreateDispatchRequest, Dispatch, DispatchStatus, UpdateDispatchRequest,
};
use crate::repositories::dispatch_repository::{DispatchRefs, DispatchRepository};
use crate::utils::errors::{not_found_error, AppError};

pub struct DispatchController {
    repository: DispatchRepository,
}

impl DispatchController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DispatchRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateDispatchRequest,
    ) -> Result<ApiResponse<Dispatch>, AppError> {
        request.validate()?;

        let status = match request.status.as_deref() {
            Some(raw) => parse_status(raw)?,
            None => DispatchStatus::default(),
        };

        let refs = DispatchRefs {
            route_id: request.route_id,
            vehicle_id: request.vehicle_id,
            aircraft_id: request.aircraft_id,
            driver_id: request.driver_id,
            pilot_id: request.pilot_id,
        };
        self.check_refs(&refs).await?;

        // El schema no exige exclusividad vehículo/aeronave ni
        // conductor/piloto: se acepta cualquier combinación.
        let dispatch = self
            .repository
            .create(request.dispatch_date, status.as_str(), request.shipping_cost, refs)
            .await?;

        Ok(ApiResponse::success_with_message(
            dispatch,
            "Despacho creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Dispatch, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Dispatch", &id))
    }

    pub async fn list(&self) -> Result<Vec<Dispatch>, AppError> {
        self.repository.list().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDispatchRequest,
    ) -> Result<ApiResponse<Dispatch>, AppError> {
        request.validate()?;

        let status = match request.status.as_deref() {
            Some(raw) => Some(parse_status(raw)?),
            None => None,
        };

        // Solo se verifica existencia para referencias que se están asignando;
        // Some(None) desasocia y no necesita verificación.
        let refs = DispatchRefs {
            route_id: request.route_id.flatten(),
            vehicle_id: request.vehicle_id.flatten(),
            aircraft_id: request.aircraft_id.flatten(),
            driver_id: request.driver_id.flatten(),
            pilot_id: request.pilot_id.flatten(),
        };
        self.check_refs(&refs).await?;

        let dispatch = self
            .repository
            .update(
                id,
                request.dispatch_date,
                status.map(|s| s.as_str()),
                request.shipping_cost,
                request.route_id,
                request.vehicle_id,
                request.aircraft_id,
                request.driver_id,
                request.pilot_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            dispatch,
            "Despacho actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    /// Verificar que toda referencia asignada apunte a un registro existente.
    /// Una referencia a un id inexistente es NotFound, no ValidationError.
    async fn check_refs(&self, refs: &DispatchRefs) -> Result<(), AppError> {
        if let Some(id) = refs.route_id {
            if !self.repository.route_exists(id).await? {
                return Err(not_found_error("Route", &id));
            }
        }
        if let Some(id) = refs.vehicle_id {
            if !self.repository.vehicle_exists(id).await? {
                return Err(not_found_error("Vehicle", &id));
            }
        }
        if let Some(id) = refs.aircraft_id {
            if !self.repository.aircraft_exists(id).await? {
                return Err(not_found_error("Aircraft", &id));
            }
        }
        if let Some(id) = refs.driver_id {
            if !self.repository.driver_exists(id).await? {
                return Err(not_found_error("Driver", &id));
            }
        }
        if let Some(id) = refs.pilot_id {
            if !self.repository.pilot_exists(id).await? {
                return Err(not_found_error("Pilot", &id));
            }
        }
        Ok(())
    }
}

fn parse_status(raw: &str) -> Result<DispatchStatus, AppError> {
    DispatchStatus::parse(raw).ok_or_else(|| {
        AppError::Validation(format!(
            "Estado inválido: '{}' (se espera PENDING, IN_TRANSIT o DELIVERED)",
            raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert!(parse_status("PENDING").is_ok());
        assert!(parse_status("IN_TRANSIT").is_ok());
        assert!(parse_status("DELIVERED").is_ok());
        assert!(matches!(parse_status("ENTREGADO"), Err(AppError::Validation(_))));
    }
}
