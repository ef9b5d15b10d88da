//! Authentication primitives such as login credentials and OTP inputs.
//!
//! Keep inbound payload parsing outside the shell by exposing constructors
//! that validate string inputs before a caller talks to a port or service.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Domain error returned when authentication payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
    /// E-mail address did not have the shape `local@domain`.
    InvalidEmail {
        /// The rejected input.
        value: String,
    },
    /// One-time-password code was blank once trimmed.
    EmptyOtpCode,
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::InvalidEmail { value } => {
                write!(f, "'{value}' is not a plausible e-mail address")
            }
            Self::EmptyOtpCode => write!(f, "one-time password must not be empty"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

/// The actor a session runs as.
///
/// The admin flag is the only authorisation signal in this system; there is
/// no richer permission model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    /// Browsing without logging in.
    #[default]
    Guest,
    /// Authenticated via OTP.
    User,
    /// Authenticated with administrator credentials.
    Admin,
}

impl Actor {
    /// Whether this actor may perform administrative operations.
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this actor has logged in at all.
    pub fn is_authenticated(self) -> bool {
        !matches!(self, Self::Guest)
    }
}

/// Validated login credentials used by the admin authentication port.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use app::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("admin", "newadmin").unwrap();
/// assert_eq!(creds.username(), "admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    ///
    /// # Errors
    ///
    /// Returns [`AuthValidationError`] when either part is blank.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, AuthValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(AuthValidationError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(AuthValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// A plausibility-checked e-mail address for OTP delivery.
///
/// Full RFC validation belongs to the external OTP backend; this type only
/// rejects inputs that cannot possibly be addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and normalises an e-mail address input.
    ///
    /// # Errors
    ///
    /// Returns [`AuthValidationError::InvalidEmail`] when the trimmed input
    /// does not have a non-empty local part and domain around a single `@`.
    pub fn parse(input: &str) -> Result<Self, AuthValidationError> {
        let trimmed = input.trim();
        let mut parts = trimmed.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(trimmed.to_owned()))
            }
            _ => Err(AuthValidationError::InvalidEmail {
                value: input.to_owned(),
            }),
        }
    }

    /// The normalised address.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user-supplied one-time-password code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    /// Parses a one-time-password input.
    ///
    /// # Errors
    ///
    /// Returns [`AuthValidationError::EmptyOtpCode`] when the trimmed input
    /// is empty.
    pub fn parse(input: &str) -> Result<Self, AuthValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AuthValidationError::EmptyOtpCode);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The trimmed code.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "pw", AuthValidationError::EmptyUsername)]
    #[case("   ", "pw", AuthValidationError::EmptyUsername)]
    #[case("user", "", AuthValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: AuthValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  admin  ", "newadmin")]
    #[case("alice", "correct horse battery staple")]
    fn valid_credentials_trim_username(#[case] username: &str, #[case] password: &str) {
        let creds = LoginCredentials::try_from_parts(username, password)
            .expect("valid inputs should succeed");
        assert_eq!(creds.username(), username.trim());
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    #[case("someone@example.com")]
    #[case("  padded@example.com  ")]
    fn plausible_emails_parse(#[case] input: &str) {
        let email = EmailAddress::parse(input).expect("plausible address");
        assert_eq!(email.as_str(), input.trim());
    }

    #[rstest]
    #[case("")]
    #[case("no-at-sign")]
    #[case("@example.com")]
    #[case("someone@")]
    #[case("a@b@c")]
    fn implausible_emails_are_rejected(#[case] input: &str) {
        assert!(matches!(
            EmailAddress::parse(input),
            Err(AuthValidationError::InvalidEmail { .. })
        ));
    }

    #[rstest]
    #[case(Actor::Guest, false, false)]
    #[case(Actor::User, false, true)]
    #[case(Actor::Admin, true, true)]
    fn actor_flags(#[case] actor: Actor, #[case] admin: bool, #[case] authenticated: bool) {
        assert_eq!(actor.is_admin(), admin);
        assert_eq!(actor.is_authenticated(), authenticated);
    }

    #[test]
    fn otp_codes_trim_and_reject_blank_input() {
        let code = OtpCode::parse(" 424242 ").expect("non-empty code");
        assert_eq!(code.as_str(), "424242");
        assert_eq!(
            OtpCode::parse("   "),
            Err(AuthValidationError::EmptyOtpCode)
        );
    }
}
