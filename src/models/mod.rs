//! Modelos de datos del sistema de logística
//!
//! Un módulo por entidad, cada uno con su struct principal (mapeo 1:1 a la
//! tabla) y sus requests de creación/actualización.

pub mod aircraft;
pub mod cargo_item;
pub mod client;
pub mod dispatch;
pub mod driver;
pub mod pilot;
pub mod route;
pub mod user;
pub mod vehicle;
