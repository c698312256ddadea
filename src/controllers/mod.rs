//! Controllers de la aplicación
//!
//! Orquestan validación, verificación de unicidad/referencias y acceso a
//! los repositorios. Toda validación ocurre antes de cualquier escritura.

pub mod aircraft_controller;
pub mod auth_controller;
pub mod cargo_controller;
pub mod client_controller;
pub mod dispatch_controller;
pub mod driver_controller;
pub mod pilot_controller;
pub mod route_controller;
pub mod vehicle_controller;
