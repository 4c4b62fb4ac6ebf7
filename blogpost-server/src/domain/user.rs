use super::display_name;
use super::error::DomainError;

#[derive(Debug, Clone, Default)]
pub(crate) struct RegisterRequest {
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct Registration {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
}

impl RegisterRequest {
    pub(crate) fn validate(self) -> Result<Registration, DomainError> {
        Ok(Registration {
            username: self.username.ok_or(DomainError::MissingField("username"))?,
            password: self.password.ok_or(DomainError::MissingField("password"))?,
            first_name: self
                .first_name
                .ok_or(DomainError::MissingField("firstName"))?,
            last_name: self.last_name.ok_or(DomainError::MissingField("lastName"))?,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
}

impl User {
    pub(crate) fn real_name(&self) -> String {
        display_name(Some(&self.first_name), Some(&self.last_name))
    }
}

#[cfg(test)]
mod tests {
    use super::{DomainError, RegisterRequest, User};

    fn full_request() -> RegisterRequest {
        RegisterRequest {
            username: Some("ann".to_string()),
            password: Some("x".to_string()),
            first_name: Some("Ann".to_string()),
            last_name: Some("Lee".to_string()),
        }
    }

    #[test]
    fn register_request_names_first_missing_field() {
        let req = RegisterRequest {
            username: None,
            password: None,
            ..full_request()
        };
        assert!(matches!(
            req.validate(),
            Err(DomainError::MissingField("username"))
        ));

        let req = RegisterRequest {
            last_name: None,
            ..full_request()
        };
        let err = req.validate().expect_err("lastName must be required");
        assert_eq!(err.to_string(), "Missing `lastName` in request body");
    }

    #[test]
    fn register_request_passes_values_through() {
        let registration = full_request().validate().expect("must be valid");
        assert_eq!(registration.username, "ann");
        assert_eq!(registration.password, "x");
        assert_eq!(registration.first_name, "Ann");
        assert_eq!(registration.last_name, "Lee");
    }

    #[test]
    fn real_name_is_trimmed() {
        let user = User {
            id: 1,
            username: "ann".to_string(),
            first_name: "Ann".to_string(),
            last_name: String::new(),
        };
        assert_eq!(user.real_name(), "Ann");
    }
}
