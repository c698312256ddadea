//! DTOs compartidos por todos los endpoints

use serde::{Deserialize, Serialize};

/// Response genérica de la API
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

/// Query params de búsqueda por substring (?search=...)
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// Query params de listado de rutas: búsqueda más ordenamiento.
///
/// ordering acepta origin / distance_km, con prefijo '-' para descendente.
#[derive(Debug, Default, Deserialize)]
pub struct RouteListParams {
    pub search: Option<String>,
    pub ordering: Option<String>,
}
