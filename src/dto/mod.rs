//! Data transfer objects de la API

pub mod auth_dto;
pub mod common;
