//! Modelo de Vehicle
//!
//! Camiones, furgones y otros vehículos terrestres.
//! Mapea a la tabla vehicles con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub plate: String,
    pub vehicle_type: String,
    pub capacity_kg: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 10))]
    pub plate: String,

    #[validate(length(min = 1, max = 50))]
    pub vehicle_type: String,

    #[validate(range(min = 0))]
    pub capacity_kg: i32,

    pub active: Option<bool>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 10))]
    pub plate: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub vehicle_type: Option<String>,

    #[validate(range(min = 0))]
    pub capacity_kg: Option<i32>,

    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_negative_capacity() {
        let request = CreateVehicleRequest {
            plate: "AB1234".to_string(),
            vehicle_type: "truck".to_string(),
            capacity_kg: -100,
            active: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_valid() {
        let request = CreateVehicleRequest {
            plate: "AB1234".to_string(),
            vehicle_type: "truck".to_string(),
            capacity_kg: 5000,
            active: None,
        };
        assert!(request.validate().is_ok());
    }
}
