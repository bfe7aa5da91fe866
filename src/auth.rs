//! Session gate in front of the private survey results.
//!
//! The expected credential pair comes from the environment (the deployment
//! secrets); a [`Session`] token is issued once per invocation and checked
//! at the CLI boundary only — it is never threaded through the engine.

use std::env;

pub const USERNAME_VAR: &str = "SONDAGE_USERNAME";
pub const PASSWORD_VAR: &str = "SONDAGE_PASSWORD";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("identifiants requis ({} / {} sont configurés)", USERNAME_VAR, PASSWORD_VAR)]
    MissingCredentials,
    #[error("identifiants incorrects")]
    BadCredentials,
}

/// Capability token proving the gate was passed.
///
/// Only [`authenticate`] can construct one.
#[derive(Debug)]
pub struct Session {
    _private: (),
}

/// Check the supplied credentials against the configured pair.
///
/// When no pair is configured in the environment the gate is open (local
/// analysis of a file the operator already has).
pub fn authenticate(username: Option<&str>, password: Option<&str>) -> Result<Session, AuthError> {
    let expected = match (env::var(USERNAME_VAR), env::var(PASSWORD_VAR)) {
        (Ok(user), Ok(pass)) => Some((user, pass)),
        _ => None,
    };

    match expected {
        None => Ok(Session { _private: () }),
        Some((expected_user, expected_pass)) => match (username, password) {
            (Some(user), Some(pass)) if user == expected_user && pass == expected_pass => {
                Ok(Session { _private: () })
            }
            (Some(_), Some(_)) => Err(AuthError::BadCredentials),
            _ => Err(AuthError::MissingCredentials),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var based cases are exercised serially to avoid cross-test races
    // on the process environment.
    #[test]
    fn gate_behavior() {
        env::remove_var(USERNAME_VAR);
        env::remove_var(PASSWORD_VAR);
        assert!(authenticate(None, None).is_ok());

        env::set_var(USERNAME_VAR, "staff");
        env::set_var(PASSWORD_VAR, "secret");
        assert!(matches!(
            authenticate(None, None),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            authenticate(Some("staff"), Some("wrong")),
            Err(AuthError::BadCredentials)
        ));
        assert!(authenticate(Some("staff"), Some("secret")).is_ok());

        env::remove_var(USERNAME_VAR);
        env::remove_var(PASSWORD_VAR);
    }
}
