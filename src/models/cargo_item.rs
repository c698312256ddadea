//! Modelo de Cargo
//!
//! Detalle de la mercancía enviada. Cada carga pertenece obligatoriamente a
//! un despacho (borrar el despacho borra sus cargas) y opcionalmente a un
//! cliente (borrar el cliente deja la carga sin cliente).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cargo {
    pub id: Uuid,
    pub dispatch_id: Uuid,
    pub client_id: Option<Uuid>,
    pub description: String,
    pub weight_kg: f64,
    pub declared_value: f64,
    pub created_at: DateTime<Utc>,
}

/// Request para crear una nueva carga
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCargoRequest {
    pub dispatch_id: Uuid,

    pub client_id: Option<Uuid>,

    #[validate(length(min = 1, max = 200))]
    pub description: String,

    #[validate(range(min = 0.0))]
    pub weight_kg: f64,

    #[validate(range(min = 0.0))]
    pub declared_value: f64,
}

/// Request para actualizar una carga existente.
///
/// dispatch_id no es actualizable: una carga queda ligada a su despacho
/// de por vida. client_id usa doble Option para poder desasociarse.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCargoRequest {
    #[serde(default, deserialize_with = "crate::models::dispatch::double_option")]
    pub client_id: Option<Option<Uuid>>,

    #[validate(length(min = 1, max = 200))]
    pub description: Option<String>,

    #[validate(range(min = 0.0))]
    pub weight_kg: Option<f64>,

    #[validate(range(min = 0.0))]
    pub declared_value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_negative_weight() {
        let request = CreateCargoRequest {
            dispatch_id: Uuid::new_v4(),
            client_id: None,
            description: "electronics".to_string(),
            weight_kg: -1.0,
            declared_value: 500000.0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_valid() {
        let request = CreateCargoRequest {
            dispatch_id: Uuid::new_v4(),
            client_id: None,
            description: "electronics".to_string(),
            weight_kg: 300.0,
            declared_value: 500000.0,
        };
        assert!(request.validate().is_ok());
    }
}
