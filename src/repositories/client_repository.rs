use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::client::Client;
use crate::utils::errors::{map_unique_violation, AppError};

pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        national_id: String,
        phone: Option<String>,
        email: Option<String>,
    ) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (id, name, national_id, phone, email, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(national_id)
        .bind(phone)
        .bind(email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "El RUT ya está registrado"))?;

        Ok(client)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Client>, AppError> {
        let clients = if let Some(term) = search {
            sqlx::query_as::<_, Client>(
                r#"
                SELECT * FROM clients
                WHERE name ILIKE $1 OR national_id ILIKE $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(format!("%{}%", term))
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?
        };

        Ok(clients)
    }

    pub async fn national_id_exists(
        &self,
        national_id: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM clients WHERE national_id = $1 AND ($2::uuid IS NULL OR id <> $2))",
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
        phone: Option<String>,
        email: Option<String>,
    ) -> Result<Client, AppError> {
        // Un solo statement: sin ventana entre leer y escribir, y un cliente
        // borrado en paralelo se reporta como NotFound.
        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = COALESCE($2, name),
                national_id = COALESCE($3, national_id),
                phone = COALESCE($4, phone),
                email = COALESCE($5, email)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(national_id)
        .bind(phone)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "El RUT ya está registrado"))?
        .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        Ok(client)
    }

    /// Borrar el cliente dejando sus cargas huérfanas de cliente (SET NULL),
    /// nunca borrándolas. Una sola transacción.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let nullified = sqlx::query("UPDATE cargo SET client_id = NULL WHERE client_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound("Cliente no encontrado".to_string()));
        }

        tx.commit().await?;

        tracing::info!(
            "Cliente {} eliminado; {} cargas quedaron sin cliente",
            id,
            nullified.rows_affected()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::cargo_repository::CargoRepository;
    use crate::repositories::dispatch_repository::{DispatchRefs, DispatchRepository};
    use chrono::NaiveDate;

    #[sqlx::test]
    async fn test_delete_leaves_cargo_with_null_client(pool: PgPool) {
        let clients = ClientRepository::new(pool.clone());
        let dispatches = DispatchRepository::new(pool.clone());
        let cargo = CargoRepository::new(pool.clone());

        let client = clients
            .create("Comercial Andina".to_string(), "76.543.210-K".to_string(), None, None)
            .await
            .unwrap();
        let dispatch = dispatches
            .create(
                NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                "PENDING",
                50000.0,
                DispatchRefs::default(),
            )
            .await
            .unwrap();
        let item = cargo
            .create(dispatch.id, Some(client.id), "textiles".to_string(), 80.0, 150000.0)
            .await
            .unwrap();

        clients.delete(client.id).await.unwrap();

        // La carga sobrevive al cliente, solo pierde la referencia
        let after = cargo.find_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(after.client_id, None);
        assert_eq!(after.dispatch_id, dispatch.id);
        assert!(clients.find_by_id(client.id).await.unwrap().is_none());
    }
}
