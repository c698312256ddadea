//! Modelo de Driver
//!
//! Personal terrestre. Mapea a la tabla drivers con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub national_id: String,
    pub license: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un nuevo conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 12))]
    pub national_id: String,

    #[validate(length(min = 1, max = 50))]
    pub license: String,

    pub active: Option<bool>,
}

/// Request para actualizar un conductor existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 12))]
    pub national_id: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub license: Option<String>,

    pub active: Option<bool>,
}
