//! Driving port for administrator login.

use crate::domain::auth::{Actor, LoginCredentials};
use crate::domain::error::ShellError;

/// Domain use-case port for administrator authentication.
pub trait AdminLoginService {
    /// Validate credentials and return the authenticated actor.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] with [`crate::domain::ErrorCode::Unauthorized`]
    /// when the credentials are not recognised.
    fn authenticate(&self, credentials: &LoginCredentials) -> Result<Actor, ShellError>;
}

/// In-memory authenticator used until a real credential store is wired.
///
/// This preserves the existing development behaviour: `admin` / `newadmin`
/// authenticates successfully as an administrator.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAdminLoginService;

impl AdminLoginService for FixtureAdminLoginService {
    fn authenticate(&self, credentials: &LoginCredentials) -> Result<Actor, ShellError> {
        if credentials.username() == "admin" && credentials.password() == "newadmin" {
            Ok(Actor::Admin)
        } else {
            Err(ShellError::unauthorized("invalid username or password"))
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;
    use crate::domain::error::ErrorCode;

    #[rstest]
    #[case("admin", "newadmin", true)]
    #[case("admin", "wrong", false)]
    #[case("other", "newadmin", false)]
    fn fixture_login_behaves_like_the_development_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let service = FixtureAdminLoginService;
        let creds =
            LoginCredentials::try_from_parts(username, password).expect("credentials shape");
        match (should_succeed, service.authenticate(&creds)) {
            (true, Ok(actor)) => assert!(actor.is_admin()),
            (false, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(actor)) => panic!("expected failure, got actor: {actor:?}"),
        }
    }
}
