//! Modelo de Client
//!
//! Clientes que solicitan servicios de despacho.
//! Mapea a la tabla clients con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub national_id: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un nuevo cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 150))]
    pub name: String,

    #[validate(length(min = 1, max = 12))]
    pub national_id: String,

    #[validate(length(max = 15))]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
}

/// Request para actualizar un cliente existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 150))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 12))]
    pub national_id: Option<String>,

    #[validate(length(max = 15))]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_invalid_email() {
        let request = CreateClientRequest {
            name: "Comercial Andes".to_string(),
            national_id: "76.111.222-3".to_string(),
            phone: None,
            email: Some("no-es-email".to_string()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_optional_fields_absent() {
        let request = CreateClientRequest {
            name: "Comercial Andes".to_string(),
            national_id: "76.111.222-3".to_string(),
            phone: None,
            email: None,
        };
        assert!(request.validate().is_ok());
    }
}
