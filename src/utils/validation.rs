//! Utilidades de validación
//!
//! Complementan las validaciones derive de los DTOs; ninguna mutación se
//! ejecuta si alguna verificación falla.

use crate::utils::errors::AppError;

/// Validar que un string no esté vacío ni sea solo espacios.
/// Las validaciones length() de los DTOs no cubren el caso "   ".
pub fn require_not_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("El campo '{}' es requerido", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_not_empty() {
        assert!(require_not_empty("origin", "Santiago").is_ok());
        assert!(require_not_empty("origin", "").is_err());
        assert!(require_not_empty("origin", "   ").is_err());
    }

    #[test]
    fn test_require_not_empty_error_names_field() {
        let err = require_not_empty("plate", " ").unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("plate")));
    }
}
