use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::cargo_item::Cargo;
use crate::utils::errors::{map_reference_violation, AppError};

pub struct CargoRepository {
    pool: PgPool,
}

impl CargoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        dispatch_id: Uuid,
        client_id: Option<Uuid>,
        description: String,
        weight_kg: f64,
        declared_value: f64,
    ) -> Result<Cargo, AppError> {
        let cargo = sqlx::query_as::<_, Cargo>(
            r#"
            INSERT INTO cargo
                (id, dispatch_id, client_id, description, weight_kg, declared_value, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(dispatch_id)
        .bind(client_id)
        .bind(description)
        .bind(weight_kg)
        .bind(declared_value)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_reference_violation(e, "El despacho o cliente referenciado ya no existe"))?;

        Ok(cargo)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Cargo>, AppError> {
        let cargo = sqlx::query_as::<_, Cargo>("SELECT * FROM cargo WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cargo)
    }

    /// Listado con búsqueda por descripción o nombre del cliente dueño
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Cargo>, AppError> {
        let cargo = if let Some(term) = search {
            sqlx::query_as::<_, Cargo>(
                r#"
                SELECT c.* FROM cargo c
                LEFT JOIN clients cl ON cl.id = c.client_id
                WHERE c.description ILIKE $1 OR cl.name ILIKE $1
                ORDER BY c.created_at DESC
                "#,
            )
            .bind(format!("%{}%", term))
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Cargo>("SELECT * FROM cargo ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?
        };

        Ok(cargo)
    }

    pub async fn find_by_dispatch(&self, dispatch_id: Uuid) -> Result<Vec<Cargo>, AppError> {
        let cargo = sqlx::query_as::<_, Cargo>(
            "SELECT * FROM cargo WHERE dispatch_id = $1 ORDER BY created_at DESC",
        )
        .bind(dispatch_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cargo)
    }

    pub async fn update(
        &self,
        id: Uuid,
        client_id: Option<Option<Uuid>>,
        description: Option<String>,
        weight_kg: Option<f64>,
        declared_value: Option<f64>,
    ) -> Result<Cargo, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Carga no encontrada".to_string()))?;

        let cargo = sqlx::query_as::<_, Cargo>(
            r#"
            UPDATE cargo
            SET client_id = $2, description = $3, weight_kg = $4, declared_value = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(client_id.unwrap_or(current.client_id))
        .bind(description.unwrap_or(current.description))
        .bind(weight_kg.unwrap_or(current.weight_kg))
        .bind(declared_value.unwrap_or(current.declared_value))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_reference_violation(e, "El cliente referenciado ya no existe"))?
        .ok_or_else(|| AppError::NotFound("Carga no encontrada".to_string()))?;

        Ok(cargo)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM cargo WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Carga no encontrada".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn test_create_with_unknown_dispatch_is_not_found(pool: PgPool) {
        let cargo = CargoRepository::new(pool.clone());

        // La FK de la base respalda la verificación del controller: un
        // despacho desaparecido entre chequeo e INSERT termina en 404
        let result = cargo
            .create(Uuid::new_v4(), None, "electronics".to_string(), 300.0, 500000.0)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        // Y nada quedó escrito
        let all = cargo.list(None).await.unwrap();
        assert!(all.is_empty());
    }
}
