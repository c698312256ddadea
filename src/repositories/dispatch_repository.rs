use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::dispatch::Dispatch;
use crate::utils::errors::{map_reference_violation, AppError};

/// Referencias opcionales de un despacho, ya resueltas por el controller
#[derive(Debug, Default, Clone, Copy)]
pub struct DispatchRefs {
    pub route_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub aircraft_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub pilot_id: Option<Uuid>,
}

pub struct DispatchRepository {
    pool: PgPool,
}

impl DispatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        dispatch_date: NaiveDate,
        status: &str,
        shipping_cost: f64,
        refs: DispatchRefs,
    ) -> Result<Dispatch, AppError> {
        let dispatch = sqlx::query_as::<_, Dispatch>(
            r#"
            INSERT INTO dispatches
                (id, dispatch_date, status, shipping_cost,
                 route_id, vehicle_id, aircraft_id, driver_id, pilot_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(dispatch_date)
        .bind(status)
        .bind(shipping_cost)
        .bind(refs.route_id)
        .bind(refs.vehicle_id)
        .bind(refs.aircraft_id)
        .bind(refs.driver_id)
        .bind(refs.pilot_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_reference_violation(e, "Alguna referencia del despacho ya no existe"))?;

        Ok(dispatch)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Dispatch>, AppError> {
        let dispatch = sqlx::query_as::<_, Dispatch>("SELECT * FROM dispatches WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(dispatch)
    }

    pub async fn list(&self) -> Result<Vec<Dispatch>, AppError> {
        let dispatches =
            sqlx::query_as::<_, Dispatch>("SELECT * FROM dispatches ORDER BY dispatch_date DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(dispatches)
    }

    /// Actualización parcial. Las referencias llegan con doble Option:
    /// None = conservar, Some(None) = desasociar, Some(Some(id)) = reasignar.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        dispatch_date: Option<NaiveDate>,
        status: Option<&str>,
        shipping_cost: Option<f64>,
        route_id: Option<Option<Uuid>>,
        vehicle_id: Option<Option<Uuid>>,
        aircraft_id: Option<Option<Uuid>>,
        driver_id: Option<Option<Uuid>>,
        pilot_id: Option<Option<Uuid>>,
    ) -> Result<Dispatch, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Despacho no encontrado".to_string()))?;

        let dispatch = sqlx::query_as::<_, Dispatch>(
            r#"
            UPDATE dispatches
            SET dispatch_date = $2, status = $3, shipping_cost = $4,
                route_id = $5, vehicle_id = $6, aircraft_id = $7,
                driver_id = $8, pilot_id = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dispatch_date.unwrap_or(current.dispatch_date))
        .bind(status.map(str::to_string).unwrap_or(current.status))
        .bind(shipping_cost.unwrap_or(current.shipping_cost))
        .bind(route_id.unwrap_or(current.route_id))
        .bind(vehicle_id.unwrap_or(current.vehicle_id))
        .bind(aircraft_id.unwrap_or(current.aircraft_id))
        .bind(driver_id.unwrap_or(current.driver_id))
        .bind(pilot_id.unwrap_or(current.pilot_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_reference_violation(e, "Alguna referencia del despacho ya no existe"))?
        .ok_or_else(|| AppError::NotFound("Despacho no encontrado".to_string()))?;

        Ok(dispatch)
    }

    /// Borrar el despacho junto con TODAS sus cargas, en una transacción.
    /// Un cascade parcial (algunas cargas borradas, otras colgando) nunca
    /// es un estado observable.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let cargo_deleted = sqlx::query("DELETE FROM cargo WHERE dispatch_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM dispatches WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound("Despacho no encontrado".to_string()));
        }

        tx.commit().await?;

        tracing::info!(
            "Despacho {} eliminado junto con {} cargas",
            id,
            cargo_deleted.rows_affected()
        );
        Ok(())
    }

    // Verificaciones de existencia para las foreign keys del despacho.
    // Tablas fijas de una lista blanca, nunca input del usuario.

    pub async fn route_exists(&self, id: Uuid) -> Result<bool, AppError> {
        self.exists_in("routes", id).await
    }

    pub async fn vehicle_exists(&self, id: Uuid) -> Result<bool, AppError> {
        self.exists_in("vehicles", id).await
    }

    pub async fn aircraft_exists(&self, id: Uuid) -> Result<bool, AppError> {
        self.exists_in("aircraft", id).await
    }

    pub async fn driver_exists(&self, id: Uuid) -> Result<bool, AppError> {
        self.exists_in("drivers", id).await
    }

    pub async fn pilot_exists(&self, id: Uuid) -> Result<bool, AppError> {
        self.exists_in("pilots", id).await
    }

    async fn exists_in(&self, table: &'static str, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as(&format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", table))
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::cargo_repository::CargoRepository;
    use crate::repositories::route_repository::RouteRepository;
    use crate::repositories::vehicle_repository::VehicleRepository;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[sqlx::test]
    async fn test_delete_removes_exactly_its_cargo(pool: PgPool) {
        let dispatches = DispatchRepository::new(pool.clone());
        let cargo = CargoRepository::new(pool.clone());

        let kept = dispatches
            .create(june_first(), "PENDING", 80000.0, DispatchRefs::default())
            .await
            .unwrap();
        let doomed = dispatches
            .create(june_first(), "PENDING", 90000.0, DispatchRefs::default())
            .await
            .unwrap();

        let kept_cargo = cargo
            .create(kept.id, None, "furniture".to_string(), 120.0, 200000.0)
            .await
            .unwrap();
        cargo
            .create(doomed.id, None, "glassware".to_string(), 40.0, 90000.0)
            .await
            .unwrap();

        dispatches.delete(doomed.id).await.unwrap();

        // Las cargas del despacho borrado desaparecen; las del otro siguen
        assert!(dispatches.find_by_id(doomed.id).await.unwrap().is_none());
        assert!(cargo.find_by_dispatch(doomed.id).await.unwrap().is_empty());
        let remaining = cargo.find_by_dispatch(kept.id).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept_cargo.id);
    }

    #[sqlx::test]
    async fn test_dispatch_lifecycle(pool: PgPool) {
        let routes = RouteRepository::new(pool.clone());
        let vehicles = VehicleRepository::new(pool.clone());
        let dispatches = DispatchRepository::new(pool.clone());
        let cargo = CargoRepository::new(pool.clone());

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
                june_first(),
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
        let item = cargo
            .create(dispatch.id, None, "electronics".to_string(), 300.0, 500000.0)
            .await
            .unwrap();

        vehicles.delete(vehicle.id).await.unwrap();

        let after = dispatches.find_by_id(dispatch.id).await.unwrap().unwrap();
        assert_eq!(after.vehicle_id, None);
        assert_eq!(after.route_id, Some(route.id));
        let untouched = cargo.find_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(untouched.description, "electronics");

        dispatches.delete(dispatch.id).await.unwrap();

        assert!(cargo.find_by_id(item.id).await.unwrap().is_none());
    }
}
