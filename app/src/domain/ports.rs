//! Driving ports for authentication use-cases.
//!
//! In hexagonal terms these are *driving* ports: the application shell
//! calls them to authenticate without knowing (or importing) the backing
//! infrastructure. The real OTP backend is an external HTTP service; in
//! this repository only the port and a development fixture exist, which
//! keeps shell tests deterministic.

mod admin_login_service;
mod otp_service;

pub use admin_login_service::{AdminLoginService, FixtureAdminLoginService};
pub use otp_service::{FixtureOtpService, OtpService};
