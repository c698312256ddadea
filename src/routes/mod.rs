//! Routers de la API
//!
//! Un router por entidad. Los de lectura pública separan el sub-router
//! protegido con el middleware de autenticación; despachos, conductores y
//! pilotos van completamente protegidos.

pub mod aircraft_routes;
pub mod auth_routes;
pub mod cargo_routes;
pub mod client_routes;
pub mod dispatch_routes;
pub mod driver_routes;
pub mod pilot_routes;
pub mod route_routes;
pub mod vehicle_routes;
