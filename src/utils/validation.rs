use axum::{http::StatusCode, Json};
use regex::Regex;
use serde_json::json;
use validator::{ValidationError, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

pub fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    let phone_regex = Regex::new(r"^\+?[0-9]{7,15}$").map_err(|err| {
        tracing::error!("Invalid phone number pattern: {}", err);
        ValidationError::new("INVALID_PATTERN")
    })?;

    if !phone_regex.is_match(phone_number) {
        return Err(error("INVALID_PHONE_NUMBER", "must be a valid phone number"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_international_phone_numbers() {
        assert!(validate_phone_number("+218912345678").is_ok());
        assert!(validate_phone_number("0912345678").is_ok());
    }

    #[test]
    fn rejects_malformed_phone_numbers() {
        assert!(validate_phone_number("12-34").is_err());
        assert!(validate_phone_number("phone").is_err());
    }
}
