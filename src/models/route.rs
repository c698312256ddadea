//! Modelo de Route
//!
//! Rutas terrestres o aéreas entre un origen y un destino.
//! Mapea a la tabla routes con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Modo de transporte de una ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    Land,
    Air,
}

impl TransportMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LAND" => Some(TransportMode::Land),
            "AIR" => Some(TransportMode::Air),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Land => "LAND",
            TransportMode::Air => "AIR",
        }
    }
}

/// Route principal - mapea exactamente a la tabla routes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub transport_mode: String,
    pub distance_km: f64,
    pub created_at: DateTime<Utc>,
}

/// Request para crear una nueva ruta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    #[validate(length(min = 1, max = 100))]
    pub origin: String,

    #[validate(length(min = 1, max = 100))]
    pub destination: String,

    pub transport_mode: String,

    #[validate(range(min = 0.0))]
    pub distance_km: f64,
}

/// Request para actualizar una ruta existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRouteRequest {
    #[validate(length(min = 1, max = 100))]
    pub origin: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub destination: Option<String>,

    pub transport_mode: Option<String>,

    #[validate(range(min = 0.0))]
    pub distance_km: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_mode_parse() {
        assert_eq!(TransportMode::parse("LAND"), Some(TransportMode::Land));
        assert_eq!(TransportMode::parse("AIR"), Some(TransportMode::Air));
        assert_eq!(TransportMode::parse("SEA"), None);
        assert_eq!(TransportMode::parse("land"), None);
    }

    #[test]
    fn test_transport_mode_roundtrip() {
        for mode in [TransportMode::Land, TransportMode::Air] {
            assert_eq!(TransportMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn test_create_request_rejects_negative_distance() {
        let request = CreateRouteRequest {
            origin: "Santiago".to_string(),
            destination: "Iquique".to_string(),
            transport_mode: "LAND".to_string(),
            distance_km: -5.0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_zero_distance() {
        let request = CreateRouteRequest {
            origin: "Santiago".to_string(),
            destination: "Santiago".to_string(),
            transport_mode: "LAND".to_string(),
            distance_km: 0.0,
        };
        assert!(request.validate().is_ok());
    }
}
