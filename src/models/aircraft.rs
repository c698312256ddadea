//! Modelo de Aircraft
//!
//! Aviones y helicópteros. Mapea a la tabla aircraft con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Aircraft {
    pub id: Uuid,
    pub registration: String,
    pub aircraft_type: String,
    pub capacity_kg: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request para crear una nueva aeronave
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAircraftRequest {
    #[validate(length(min = 1, max = 20))]
    pub registration: String,

    #[validate(length(min = 1, max = 50))]
    pub aircraft_type: String,

    #[validate(range(min = 0))]
    pub capacity_kg: i32,

    pub active: Option<bool>,
}

/// Request para actualizar una aeronave existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAircraftRequest {
    #[validate(length(min = 1, max = 20))]
    pub registration: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub aircraft_type: Option<String>,

    #[validate(range(min = 0))]
    pub capacity_kg: Option<i32>,

    pub active: Option<bool>,
}
