//! Modelo de Pilot
//!
//! Personal aéreo. Mapea a la tabla pilots con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pilot {
    pub id: Uuid,
    pub name: String,
    pub national_id: String,
    pub certification: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un nuevo piloto
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePilotRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 12))]
    pub national_id: String,

    #[validate(length(min = 1, max = 100))]
    pub certification: String,

    pub active: Option<bool>,
}

/// Request para actualizar un piloto existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePilotRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 12))]
    pub national_id: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub certification: Option<String>,

    pub active: Option<bool>,
}
