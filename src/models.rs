//! Request DTOs passed from the transport layer into the use cases.
//!
//! Constraints are declared with `validator` derives and checked by the use case
//! before any transaction is opened.

use validator::{Validate, ValidationError};

/// Create or overwrite a field
#[derive(Debug, Clone, Validate)]
pub struct FieldRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 3, max = 50))]
    pub field_type: String,
    #[validate(length(max = 50))]
    pub description: String,
    #[validate(range(min = 1, message = "price must be greater than 0"))]
    pub price: u32,
}

/// New account details
#[derive(Clone, Validate)]
pub struct UserCreateRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 4, max = 255))]
    pub name: String,
    #[validate(length(min = 8, max = 255))]
    pub password: String,
    #[validate(length(min = 8, max = 20), custom(function = "validate_numeric"))]
    pub phone_number: String,
}

#[derive(Clone, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 8, max = 255))]
    pub password: String,
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateEmailRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 4, max = 255))]
    pub name: String,
    #[validate(length(min = 8, max = 20), custom(function = "validate_numeric"))]
    pub phone_number: String,
}

// Passwords stay out of logs.
impl std::fmt::Debug for UserCreateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreateRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("phone_number", &self.phone_number)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for UpdatePasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdatePasswordRequest").finish_non_exhaustive()
    }
}

fn validate_numeric(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("numeric"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_field() -> FieldRequest {
        FieldRequest {
            name: "Court A".to_string(),
            field_type: "futsal".to_string(),
            description: "Indoor court".to_string(),
            price: 150_000,
        }
    }

    fn valid_user() -> UserCreateRequest {
        UserCreateRequest {
            email: "budi@example.com".to_string(),
            name: "Budi".to_string(),
            password: "hunter2hunter2".to_string(),
            phone_number: "081234567890".to_string(),
        }
    }

    #[test]
    fn test_field_request_constraints() {
        assert!(valid_field().validate().is_ok());

        let empty_name = FieldRequest {
            name: String::new(),
            ..valid_field()
        };
        assert!(empty_name.validate().is_err());

        let short_type = FieldRequest {
            field_type: "ab".to_string(),
            ..valid_field()
        };
        assert!(short_type.validate().is_err());

        let long_description = FieldRequest {
            description: "x".repeat(51),
            ..valid_field()
        };
        assert!(long_description.validate().is_err());

        let free = FieldRequest {
            price: 0,
            ..valid_field()
        };
        assert!(free.validate().is_err());
    }

    #[test]
    fn test_user_create_request_constraints() {
        assert!(valid_user().validate().is_ok());

        let bad_email = UserCreateRequest {
            email: "not-an-email".to_string(),
            ..valid_user()
        };
        assert!(bad_email.validate().is_err());

        let short_name = UserCreateRequest {
            name: "Bo".to_string(),
            ..valid_user()
        };
        assert!(short_name.validate().is_err());

        let short_password = UserCreateRequest {
            password: "1234567".to_string(),
            ..valid_user()
        };
        assert!(short_password.validate().is_err());

        let letters_in_phone = UserCreateRequest {
            phone_number: "08123abc90".to_string(),
            ..valid_user()
        };
        assert!(letters_in_phone.validate().is_err());

        let short_phone = UserCreateRequest {
            phone_number: "0812".to_string(),
            ..valid_user()
        };
        assert!(short_phone.validate().is_err());
    }

    #[test]
    fn test_debug_output_hides_password() {
        let rendered = format!("{:?}", valid_user());
        assert!(!rendered.contains("hunter2"));

        let rendered = format!(
            "{:?}",
            UpdatePasswordRequest {
                password: "hunter2hunter2".to_string()
            }
        );
        assert!(!rendered.contains("hunter2"));
    }
}
