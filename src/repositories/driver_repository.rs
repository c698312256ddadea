use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::driver::Driver;
use crate::utils::errors::{map_unique_violation, AppError};

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        national_id: String,
        license: String,
        active: bool,
    ) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (id, name, national_id, license, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(national_id)
        .bind(license)
        .bind(active)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "El RUT ya está registrado"))?;

        Ok(driver)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(drivers)
    }

    pub async fn national_id_exists(
        &self,
        national_id: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM drivers WHERE national_id = $1 AND ($2::uuid IS NULL OR id <> $2))",
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
        license: Option<String>,
        active: Option<bool>,
    ) -> Result<Driver, AppError> {
        // Un solo statement: sin ventana entre leer y escribir, y un
        // conductor borrado en paralelo se reporta como NotFound.
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET name = COALESCE($2, name),
                national_id = COALESCE($3, national_id),
                license = COALESCE($4, license),
                active = COALESCE($5, active)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(national_id)
        .bind(license)
        .bind(active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "El RUT ya está registrado"))?
        .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

        Ok(driver)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let nullified = sqlx::query("UPDATE dispatches SET driver_id = NULL WHERE driver_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound("Conductor no encontrado".to_string()));
        }

        tx.commit().await?;

        tracing::info!(
            "Conductor {} eliminado; {} despachos quedaron sin conductor",
            id,
            nullified.rows_affected()
        );
        Ok(())
    }
}
