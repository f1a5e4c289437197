//! Utilidades de validación
//!
//! Funciones custom usadas por los derives de `validator` en los DTOs.

use validator::ValidationError;

/// El teléfono de una solicitud de facturación solo admite dígitos
pub fn validate_telefono_digits(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        let mut error = ValidationError::new("telefono");
        error.message = Some("El teléfono solo debe contener números".into());
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté compuesto solo de espacios
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("No puede estar vacío".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telefono_accepts_digits_only() {
        assert!(validate_telefono_digits("987654321").is_ok());
        assert!(validate_telefono_digits("98-765").is_err());
        assert!(validate_telefono_digits("").is_err());
    }

    #[test]
    fn blank_strings_are_rejected() {
        assert!(validate_not_blank("Laboratorio").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }
}
