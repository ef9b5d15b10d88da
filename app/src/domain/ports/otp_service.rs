//! Driving port for OTP-based user login.

use crate::domain::auth::{Actor, EmailAddress, OtpCode};
use crate::domain::error::ShellError;

/// Domain use-case port for one-time-password authentication.
///
/// The backing implementation is an external API; the port keeps its shape
/// out of the shell. Both calls are synchronous: the whole system runs on
/// a single UI event loop.
#[cfg_attr(test, mockall::automock)]
pub trait OtpService {
    /// Request an OTP delivery to `email`.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] when the backing service refuses the request.
    fn request_otp(&self, email: &EmailAddress) -> Result<(), ShellError>;

    /// Verify a previously delivered OTP and return the authenticated actor.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] with [`crate::domain::ErrorCode::Unauthorized`]
    /// when the code does not match.
    fn verify_otp(&self, email: &EmailAddress, code: &OtpCode) -> Result<Actor, ShellError>;
}

/// Development fixture standing in for the external OTP backend.
///
/// Accepts every delivery request and verifies a single well-known code.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOtpService;

impl FixtureOtpService {
    /// The code the fixture accepts.
    pub const DEV_CODE: &'static str = "424242";
}

impl OtpService for FixtureOtpService {
    fn request_otp(&self, _email: &EmailAddress) -> Result<(), ShellError> {
        Ok(())
    }

    fn verify_otp(&self, _email: &EmailAddress, code: &OtpCode) -> Result<Actor, ShellError> {
        if code.as_str() == Self::DEV_CODE {
            Ok(Actor::User)
        } else {
            Err(ShellError::unauthorized("invalid one-time password"))
        }
    }
}
