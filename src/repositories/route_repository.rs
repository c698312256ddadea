use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::route::Route;
use crate::utils::errors::AppError;

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        origin: String,
        destination: String,
        transport_mode: &str,
        distance_km: f64,
    ) -> Result<Route, AppError> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (id, origin, destination, transport_mode, distance_km, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(origin)
        .bind(destination)
        .bind(transport_mode)
        .bind(distance_km)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(route)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Route>, AppError> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(route)
    }

    pub async fn list(
        &self,
        search: Option<&str>,
        ordering: Option<&str>,
    ) -> Result<Vec<Route>, AppError> {
        let order_clause = order_clause(ordering)?;

        let routes = if let Some(term) = search {
            sqlx::query_as::<_, Route>(&format!(
                r#"
                SELECT * FROM routes
                WHERE origin ILIKE $1 OR destination ILIKE $1 OR transport_mode ILIKE $1
                ORDER BY {}
                "#,
                order_clause
            ))
            .bind(format!("%{}%", term))
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Route>(&format!("SELECT * FROM routes ORDER BY {}", order_clause))
                .fetch_all(&self.pool)
                .await?
        };

        Ok(routes)
    }

    pub async fn update(
        &self,
        id: Uuid,
        origin: Option<String>,
        destination: Option<String>,
        transport_mode: Option<String>,
        distance_km: Option<f64>,
    ) -> Result<Route, AppError> {
        // Un solo statement: sin ventana entre leer y escribir, y una ruta
        // borrada en paralelo se reporta como NotFound.
        let route = sqlx::query_as::<_, Route>(
            r#"
            UPDATE routes
            SET origin = COALESCE($2, origin),
                destination = COALESCE($3, destination),
                transport_mode = COALESCE($4, transport_mode),
                distance_km = COALESCE($5, distance_km)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(origin)
        .bind(destination)
        .bind(transport_mode)
        .bind(distance_km)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Ruta no encontrada".to_string()))?;

        Ok(route)
    }

    /// Borrar la ruta anulando primero la referencia en los despachos.
    ///
    /// Ambas operaciones van en una transacción: ningún lector concurrente
    /// puede observar un despacho apuntando a una ruta inexistente.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let nullified = sqlx::query("UPDATE dispatches SET route_id = NULL WHERE route_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound("Ruta no encontrada".to_string()));
        }

        tx.commit().await?;

        tracing::info!(
            "Ruta {} eliminada; {} despachos quedaron sin ruta",
            id,
            nullified.rows_affected()
        );
        Ok(())
    }
}

/// Traducir el parámetro ?ordering= a una cláusula ORDER BY segura.
/// Solo se aceptan columnas de la lista blanca; el prefijo '-' invierte.
fn order_clause(ordering: Option<&str>) -> Result<&'static str, AppError> {
    match ordering {
        None => Ok("created_at DESC"),
        Some("origin") => Ok("origin ASC"),
        Some("-origin") => Ok("origin DESC"),
        Some("distance_km") => Ok("distance_km ASC"),
        Some("-distance_km") => Ok("distance_km DESC"),
        Some(other) => Err(AppError::Validation(format!(
            "Ordenamiento no soportado: '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_clause_whitelist() {
        assert_eq!(order_clause(None).unwrap(), "created_at DESC");
        assert_eq!(order_clause(Some("origin")).unwrap(), "origin ASC");
        assert_eq!(order_clause(Some("-origin")).unwrap(), "origin DESC");
        assert_eq!(order_clause(Some("distance_km")).unwrap(), "distance_km ASC");
        assert_eq!(order_clause(Some("-distance_km")).unwrap(), "distance_km DESC");
    }

    #[test]
    fn test_order_clause_rejects_unknown_column() {
        // Cualquier cosa fuera de la lista blanca es error, nunca SQL interpolado
        assert!(order_clause(Some("id; DROP TABLE routes")).is_err());
        assert!(order_clause(Some("destination")).is_err());
    }
}
