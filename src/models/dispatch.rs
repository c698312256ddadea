//! Modelo de Dispatch
//!
//! El registro central del sistema: relaciona una ruta con un activo de
//! transporte y su operador. Todas las referencias son opcionales y se
//! anulan (SET NULL) cuando el registro referenciado se borra; el despacho
//! en sí nunca muere por ese cascade.
//!
//! Nota de dominio: el schema permite vehículo y aeronave (o conductor y
//! piloto) simultáneos, o ninguno.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Estado de un despacho
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatchStatus {
    Pending,
    InTransit,
    Delivered,
}

impl DispatchStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(DispatchStatus::Pending),
            "IN_TRANSIT" => Some(DispatchStatus::InTransit),
            "DELIVERED" => Some(DispatchStatus::Delivered),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStatus::Pending => "PENDING",
            DispatchStatus::InTransit => "IN_TRANSIT",
            DispatchStatus::Delivered => "DELIVERED",
        }
    }
}

impl Default for DispatchStatus {
    fn default() -> Self {
        DispatchStatus::Pending
    }
}

/// Dispatch principal - mapea exactamente a la tabla dispatches
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Dispatch {
    pub id: Uuid,
    pub dispatch_date: NaiveDate,
    pub status: String,
    pub shipping_cost: f64,
    pub route_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub aircraft_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub pilot_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un nuevo despacho
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDispatchRequest {
    pub dispatch_date: NaiveDate,

    /// PENDING si no se especifica
    pub status: Option<String>,

    #[validate(range(min = 0.0))]
    pub shipping_cost: f64,

    pub route_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub aircraft_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub pilot_id: Option<Uuid>,
}

/// Request para actualizar un despacho existente.
///
/// Las foreign keys usan doble Option: ausente = no tocar,
/// null explícito = desasociar la referencia.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDispatchRequest {
    pub dispatch_date: Option<NaiveDate>,

    pub status: Option<String>,

    #[validate(range(min = 0.0))]
    pub shipping_cost: Option<f64>,

    #[serde(default, deserialize_with = "double_option")]
    pub route_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub vehicle_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub aircraft_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub driver_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub pilot_id: Option<Option<Uuid>>,
}

/// Distinguir "campo ausente" de "campo presente con null" en el JSON:
/// cualquier valor presente (incluido null) se envuelve en Some.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(DispatchStatus::parse("PENDING"), Some(DispatchStatus::Pending));
        assert_eq!(DispatchStatus::parse("IN_TRANSIT"), Some(DispatchStatus::InTransit));
        assert_eq!(DispatchStatus::parse("DELIVERED"), Some(DispatchStatus::Delivered));
        assert_eq!(DispatchStatus::parse("EN RUTA"), None);
        assert_eq!(DispatchStatus::parse(""), None);
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(DispatchStatus::default(), DispatchStatus::Pending);
    }

    #[test]
    fn test_update_request_distinguishes_absent_from_null() {
        let absent: UpdateDispatchRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(absent.vehicle_id, None);

        let cleared: UpdateDispatchRequest = serde_json::from_str(r#"{"vehicle_id": null}"#).unwrap();
        assert_eq!(cleared.vehicle_id, Some(None));

        let id = Uuid::new_v4();
        let set: UpdateDispatchRequest =
            serde_json::from_str(&format!(r#"{{"vehicle_id": "{}"}}"#, id)).unwrap();
        assert_eq!(set.vehicle_id, Some(Some(id)));
    }

    #[test]
    fn test_create_request_rejects_negative_cost() {
        let request = CreateDispatchRequest {
            dispatch_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            status: None,
            shipping_cost: -1.0,
            route_id: None,
            vehicle_id: None,
            aircraft_id: None,
            driver_id: None,
            pilot_id: None,
        };
        assert!(request.validate().is_err());
    }
}
