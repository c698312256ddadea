use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::aircraft::Aircraft;
use crate::utils::errors::{map_unique_violation, AppError};

pub struct AircraftRepository {
    pool: PgPool,
}

impl AircraftRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        registration: String,
        aircraft_type: String,
        capacity_kg: i32,
        active: bool,
    ) -> Result<Aircraft, AppError> {
        let aircraft = sqlx::query_as::<_, Aircraft>(
            r#"
            INSERT INTO aircraft (id, registration, aircraft_type, capacity_kg, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(registration)
        .bind(aircraft_type)
        .bind(capacity_kg)
        .bind(active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "La matrícula ya está registrada"))?;

        Ok(aircraft)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Aircraft>, AppError> {
        let aircraft = sqlx::query_as::<_, Aircraft>("SELECT * FROM aircraft WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(aircraft)
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Aircraft>, AppError> {
        let aircraft = if let Some(term) = search {
            sqlx::query_as::<_, Aircraft>(
                r#"
                SELECT * FROM aircraft
                WHERE registration ILIKE $1 OR aircraft_type ILIKE $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(format!("%{}%", term))
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Aircraft>("SELECT * FROM aircraft ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?
        };

        Ok(aircraft)
    }

    pub async fn registration_exists(
        &self,
        registration: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM aircraft WHERE registration = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(registration)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        registration: Option<String>,
        aircraft_type: Option<String>,
        capacity_kg: Option<i32>,
        active: Option<bool>,
    ) -> Result<Aircraft, AppError> {
        // Un solo statement: sin ventana entre leer y escribir, y una
        // aeronave borrada en paralelo se reporta como NotFound.
        let aircraft = sqlx::query_as::<_, Aircraft>(
            r#"
            UPDATE aircraft
            SET registration = COALESCE($2, registration),
                aircraft_type = COALESCE($3, aircraft_type),
                capacity_kg = COALESCE($4, capacity_kg),
                active = COALESCE($5, active)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(registration)
        .bind(aircraft_type)
        .bind(capacity_kg)
        .bind(active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "La matrícula ya está registrada"))?
        .ok_or_else(|| AppError::NotFound("Aeronave no encontrada".to_string()))?;

        Ok(aircraft)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let nullified =
            sqlx::query("UPDATE dispatches SET aircraft_id = NULL WHERE aircraft_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

        let deleted = sqlx::query("DELETE FROM aircraft WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound("Aeronave no encontrada".to_string()));
        }

        tx.commit().await?;

        tracing::info!(
            "Aeronave {} eliminada; {} despachos quedaron sin aeronave",
            id,
            nullified.rows_affected()
        );
        Ok(())
    }
}
