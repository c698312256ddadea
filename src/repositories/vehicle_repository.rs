use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::{map_unique_violation, AppError};

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        plate: String,
        vehicle_type: String,
        capacity_kg: i32,
        active: bool,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, plate, vehicle_type, capacity_kg, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plate)
        .bind(vehicle_type)
        .bind(capacity_kg)
        .bind(active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "La patente ya está registrada"))?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = if let Some(term) = search {
            sqlx::query_as::<_, Vehicle>(
                r#"
                SELECT * FROM vehicles
                WHERE plate ILIKE $1 OR vehicle_type ILIKE $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(format!("%{}%", term))
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?
        };

        Ok(vehicles)
    }

    pub async fn plate_exists(&self, plate: &str, exclude_id: Option<Uuid>) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE plate = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(plate)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        plate: Option<String>,
        vehicle_type: Option<String>,
        capacity_kg: Option<i32>,
        active: Option<bool>,
    ) -> Result<Vehicle, AppError> {
        // Un solo statement: sin ventana entre leer y escribir, y un vehículo
        // borrado en paralelo se reporta como NotFound.
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET plate = COALESCE($2, plate),
                vehicle_type = COALESCE($3, vehicle_type),
                capacity_kg = COALESCE($4, capacity_kg),
                active = COALESCE($5, active)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(plate)
        .bind(vehicle_type)
        .bind(capacity_kg)
        .bind(active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "La patente ya está registrada"))?
        .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehicle)
    }

    /// Borrar el vehículo anulando primero la referencia en los despachos,
    /// todo dentro de una transacción.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let nullified = sqlx::query("UPDATE dispatches SET vehicle_id = NULL WHERE vehicle_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        tx.commit().await?;

        tracing::info!(
            "Vehículo {} eliminado; {} despachos quedaron sin vehículo",
            id,
            nullified.rows_affected()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::dispatch_repository::{DispatchRefs, DispatchRepository};
    use crate::repositories::route_repository::RouteRepository;
    use chrono::NaiveDate;

    #[sqlx::test]
    async fn test_delete_nullifies_only_vehicle_ref(pool: PgPool) {
        let routes = RouteRepository::new(pool.clone());
        let vehicles = VehicleRepository::new(pool.clone());
        let dispatches = DispatchRepository::new(pool.clone());

        let route = routes
            .create("Santiago".to_string(), "Iquique".to_string(), "LAND", 1800.0)
            .await
            .unwrap();
        let vehicle = vehicles
            .create("AB1234".to_string(), "truck".to_string(), 5000, true)
            .await
            .unwrap();

        let dispatch = dispatches
            .create(
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                "PENDING",
                120000.0,
                DispatchRefs {
                    route_id: Some(route.id),
                    vehicle_id: Some(vehicle.id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        vehicles.delete(vehicle.id).await.unwrap();

        // Solo cae la referencia al vehículo; el resto del despacho queda intacto
        let after = dispatches.find_by_id(dispatch.id).await.unwrap().unwrap();
        assert_eq!(after.vehicle_id, None);
        assert_eq!(after.route_id, Some(route.id));
        assert_eq!(after.status, "PENDING");
        assert!(vehicles.find_by_id(vehicle.id).await.unwrap().is_none());
    }

    #[sqlx::test]
    async fn test_update_after_delete_is_not_found(pool: PgPool) {
        let vehicles = VehicleRepository::new(pool);
        let vehicle = vehicles
            .create("CD5678".to_string(), "van".to_string(), 1200, true)
            .await
            .unwrap();
        vehicles.delete(vehicle.id).await.unwrap();

        let result = vehicles
            .update(vehicle.id, None, Some("truck".to_string()), None, None)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
