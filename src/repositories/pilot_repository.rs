use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::pilot::Pilot;
use crate::utils::errors::{map_unique_violation, AppError};

pub struct PilotRepository {
    pool: PgPool,
}

impl PilotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        national_id: String,
        certification: String,
        active: bool,
    ) -> Result<Pilot, AppError> {
        let pilot = sqlx::query_as::<_, Pilot>(
            r#"
            INSERT INTO pilots (id, name, national_id, certification, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(national_id)
        .bind(certification)
        .bind(active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "El RUT ya está registrado"))?;

        Ok(pilot)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Pilot>, AppError> {
        let pilot = sqlx::query_as::<_, Pilot>("SELECT * FROM pilots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(pilot)
    }

    pub async fn list(&self) -> Result<Vec<Pilot>, AppError> {
        let pilots = sqlx::query_as::<_, Pilot>("SELECT * FROM pilots ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(pilots)
    }

    pub async fn national_id_exists(
        &self,
        national_id: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM pilots WHERE national_id = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(national_id)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        national_id: Option<String>,
        certification: Option<String>,
        active: Option<bool>,
    ) -> Result<Pilot, AppError> {
        // Un solo statement: sin ventana entre leer y escribir, y un piloto
        // borrado en paralelo se reporta como NotFound.
        let pilot = sqlx::query_as::<_, Pilot>(
            r#"
            UPDATE pilots
            SET name = COALESCE($2, name),
                national_id = COALESCE($3, national_id),
                certification = COALESCE($4, certification),
                active = COALESCE($5, active)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(national_id)
        .bind(certification)
        .bind(active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "El RUT ya está registrado"))?
        .ok_or_else(|| AppError::NotFound("Piloto no encontrado".to_string()))?;

        Ok(pilot)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let nullified = sqlx::query("UPDATE dispatches SET pilot_id = NULL WHERE pilot_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM pilots WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound("Piloto no encontrado".to_string()));
        }

        tx.commit().await?;

        tracing::info!(
            "Piloto {} eliminado; {} despachos quedaron sin piloto",
            id,
            nullified.rows_affected()
        );
        Ok(())
    }
}
