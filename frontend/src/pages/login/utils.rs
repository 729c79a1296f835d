use crate::{
    api::ApiError,
    utils::validation::{require, validate_email},
};

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    validate_email(email)?;
    require("Password", password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            validate_credentials("", "secret").unwrap_err().message,
            "Email is required"
        );
        assert_eq!(
            validate_credentials("ada@example.com", "").unwrap_err().message,
            "Password is required"
        );
    }

    #[test]
    fn rejects_malformed_email() {
        let err = validate_credentials("not-an-email", "secret").unwrap_err();
        assert_eq!(err.code, ApiError::VALIDATION);
    }

    #[test]
    fn accepts_valid_credentials() {
        assert!(validate_credentials(" ada@example.com ", "secret").is_ok());
    }
}
