use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

#[derive(Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credentials {{username={}, password=MASKED}}", self.username)
    }
}

/// Bearer token handed back by the backend once logged in.
#[derive(Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct LoginResponse {
    token: String,
}

impl Debug for LoginResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LoginResponse {{token=MASKED}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mask_password() {
        let credentials = Credentials::new("sensei".to_owned(), "secret".to_owned());
        assert_eq!(
            "Credentials {username=sensei, password=MASKED}",
            format!("{credentials:?}")
        );
    }

    #[test]
    fn should_deserialize_login_response() {
        let response: LoginResponse = serde_json::from_str(r#"{"token":"abc.def"}"#).unwrap();
        assert_eq!("abc.def", response.token());
        assert_eq!("LoginResponse {token=MASKED}", format!("{response:?}"));
    }
}
