//! Credential checks shared by the login and register forms

pub const MIN_PASSWORD_LEN: usize = 8;

/// `local@domain` with both parts non-empty and no whitespace
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("El correo es obligatorio".to_string());
    }
    if !is_valid_email(email) {
        return Err("Correo electrónico no válido".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "La contraseña debe tener al menos {} caracteres",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("ray@example.com"));
        assert!(!is_valid_email("ray@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ray example.com"));
        assert!(!is_valid_email("a@b@c"));
    }

    #[test]
    fn test_credentials() {
        assert!(validate_credentials("ray@example.com", "12345678").is_ok());
        assert!(validate_credentials("", "12345678").is_err());
        assert!(validate_credentials("ray@example.com", "1234567").is_err());
    }
}
