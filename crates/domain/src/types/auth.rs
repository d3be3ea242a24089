//! Session types for the remote API

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a session was authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoginMethod {
    /// A stored JSON Web Token was reused; no login request was sent.
    Jwt,
    /// Username and password were exchanged for a fresh token.
    #[default]
    Password,
}

crate::impl_label_conversions!(LoginMethod {
    Jwt => "JWT",
    Password => "Password",
});

/// Authenticated session handed to every request.
///
/// Owned by the caller and passed explicitly; nothing about it is global.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub jwt: String,
    pub method: LoginMethod,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("jwt", &"<redacted>").field("method", &self.method).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_token() {
        let session = Session { jwt: "secret-token".into(), method: LoginMethod::Jwt };
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("Jwt"));
    }

    #[test]
    fn login_method_labels() {
        assert_eq!(LoginMethod::Jwt.to_string(), "JWT");
        assert_eq!("password".parse::<LoginMethod>().unwrap(), LoginMethod::Password);
    }
}
