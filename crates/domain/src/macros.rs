//! Macro for implementing Display and FromStr for label enums
//!
//! Several small enums (login method, store backend) travel through config
//! files, environment variables and log lines as plain strings. This macro
//! gives them one canonical spelling for output and case-insensitive parsing
//! for input.
//!
//! # Example
//!
//! ```rust
//! use duosync_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Backend {
//!     Json,
//!     Sqlite,
//! }
//!
//! impl_label_conversions!(Backend {
//!     Json => "json",
//!     Sqlite => "sqlite",
//! });
//!
//! assert_eq!("SQLite".parse::<Backend>().unwrap(), Backend::Sqlite);
//! assert_eq!(Backend::Json.to_string(), "json");
//! ```

/// Implements Display and FromStr for a fieldless enum.
///
/// * Display writes the label exactly as given.
/// * FromStr compares ASCII case-insensitively and reports the enum name on
///   failure.
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($label),)+
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($label) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Method {
        Jwt,
        Password,
    }

    impl_label_conversions!(Method {
        Jwt => "JWT",
        Password => "Password",
    });

    #[test]
    fn display_keeps_canonical_spelling() {
        assert_eq!(Method::Jwt.to_string(), "JWT");
        assert_eq!(Method::Password.to_string(), "Password");
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(Method::from_str("jwt").unwrap(), Method::Jwt);
        assert_eq!(Method::from_str(" PASSWORD ").unwrap(), Method::Password);
    }

    #[test]
    fn parsing_rejects_unknown_labels() {
        let err = Method::from_str("oauth").unwrap_err();
        assert_eq!(err, "Invalid Method: oauth");
        assert!(Method::from_str("").is_err());
    }
}
