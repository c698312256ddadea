//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula el SQL de su entidad. Los cascades
//! (nullify en despachos, borrado de cargas) viven aquí, siempre dentro de
//! transacciones explícitas.

pub mod aircraft_repository;
pub mod cargo_repository;
pub mod client_repository;
pub mod dispatch_repository;
pub mod driver_repository;
pub mod pilot_repository;
pub mod route_repository;
pub mod user_repository;
pub mod vehicle_repository;
