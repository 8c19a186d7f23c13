use serde::Deserialize;

use super::{is_valid_email, FieldErrors};
use crate::database::store::{NewUser, UserPatch};
use crate::error::ApiError;

const NAME_MIN_LEN: usize = 2;
const PASSWORD_MIN_LEN: usize = 6;

/// POST /users body
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CreateUserRequest {
    /// All three fields required: name >= 2 chars, well-formed email,
    /// password >= 6 chars.
    pub fn validate(self) -> Result<NewUser, ApiError> {
        let mut errors = FieldErrors::new();

        match &self.name {
            Some(name) if name.chars().count() >= NAME_MIN_LEN => {}
            Some(_) => errors.add("name", "name must be at least 2 characters"),
            None => errors.add("name", "name is required"),
        }

        match &self.email {
            Some(email) if is_valid_email(email) => {}
            Some(_) => errors.add("email", "email must be a valid email address"),
            None => errors.add("email", "email is required"),
        }

        match &self.password {
            Some(password) if password.chars().count() >= PASSWORD_MIN_LEN => {}
            Some(_) => errors.add("password", "password must be at least 6 characters"),
            None => errors.add("password", "password is required"),
        }

        errors.into_result()?;

        Ok(NewUser {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        })
    }
}

/// PUT /users/:id body; absent fields leave the stored values untouched
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserRequest {
    /// Same constraints as creation, each applied only when the field is present.
    pub fn validate(self) -> Result<UserPatch, ApiError> {
        let mut errors = FieldErrors::new();

        if let Some(name) = &self.name {
            if name.chars().count() < NAME_MIN_LEN {
                errors.add("name", "name must be at least 2 characters");
            }
        }

        if let Some(email) = &self.email {
            if !is_valid_email(email) {
                errors.add("email", "email must be a valid email address");
            }
        }

        if let Some(password) = &self.password {
            if password.chars().count() < PASSWORD_MIN_LEN {
                errors.add("password", "password must be at least 6 characters");
            }
        }

        errors.into_result()?;

        Ok(UserPatch {
            name: self.name,
            email: self.email,
            password: self.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: Option<&str>, email: Option<&str>, password: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            name: name.map(String::from),
            email: email.map(String::from),
            password: password.map(String::from),
        }
    }

    #[test]
    fn valid_creation_passes() {
        let new = create(Some("Ann"), Some("a@x.com"), Some("secret1"))
            .validate()
            .expect("valid");
        assert_eq!(new.email, "a@x.com");
    }

    #[test]
    fn short_name_fails() {
        let err = create(Some("A"), Some("a@x.com"), Some("secret1"))
            .validate()
            .unwrap_err();
        assert!(err.to_json()["field_errors"]["name"].is_string());
    }

    #[test]
    fn missing_fields_are_reported_together() {
        let err = create(None, None, None).validate().unwrap_err();
        let body = err.to_json();
        assert_eq!(body["field_errors"].as_object().unwrap().len(), 3);
    }

    #[test]
    fn short_password_fails() {
        let err = create(Some("Ann"), Some("a@x.com"), Some("five5"))
            .validate()
            .unwrap_err();
        assert!(err.to_json()["field_errors"]["password"].is_string());
    }

    #[test]
    fn update_allows_absent_fields() {
        let patch = UpdateUserRequest {
            name: Some("Bea".to_string()),
            email: None,
            password: None,
        }
        .validate()
        .expect("valid");
        assert_eq!(patch.name.as_deref(), Some("Bea"));
        assert!(patch.email.is_none());
    }

    #[test]
    fn update_still_checks_present_fields() {
        let err = UpdateUserRequest {
            name: None,
            email: Some("not-an-email".to_string()),
            password: None,
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
