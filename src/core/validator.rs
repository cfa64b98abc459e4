//! Validator capability for judging session acceptability.
//!
//! Validators are independent checks over a borrowed session. The
//! aggregation layer treats them purely as a polymorphic capability:
//! allow-list lookups, directory calls, and ad-hoc closures all qualify.

use super::error::ValidationError;
use super::session::Session;

/// Capability that judges one session and reports acceptance or a
/// specific rejection reason.
///
/// The contract assumes nothing about side effects; a validator that
/// performs a blocking external call owns its own timeout policy.
///
/// # Example
///
/// ```rust
/// use gatecheck::core::{Session, ValidationError, Validator};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct ProxySession {
///     email: String,
/// }
///
/// impl Session for ProxySession {
///     fn subject(&self) -> &str {
///         &self.email
///     }
/// }
///
/// struct EmailAllowList {
///     allowed: Vec<String>,
/// }
///
/// impl Validator<ProxySession> for EmailAllowList {
///     fn validate(&self, session: &ProxySession) -> Result<(), ValidationError> {
///         if self.allowed.iter().any(|a| a == &session.email) {
///             Ok(())
///         } else {
///             Err(ValidationError::InvalidEmailAddress)
///         }
///     }
/// }
///
/// let allow_list = EmailAllowList {
///     allowed: vec!["user@example.com".to_string()],
/// };
/// let session = ProxySession {
///     email: "user@example.com".to_string(),
/// };
/// assert!(allow_list.validate(&session).is_ok());
/// ```
pub trait Validator<S: Session>: Send + Sync {
    /// Judge the session. `Ok(())` means the check passed.
    fn validate(&self, session: &S) -> Result<(), ValidationError>;
}

/// Plain functions and closures are validators, so one-off checks need
/// no dedicated type.
impl<S, F> Validator<S> for F
where
    S: Session,
    F: Fn(&S) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, session: &S) -> Result<(), ValidationError> {
        self(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct TestSession {
        email: String,
    }

    impl Session for TestSession {
        fn subject(&self) -> &str {
            &self.email
        }
    }

    fn session(email: &str) -> TestSession {
        TestSession {
            email: email.to_string(),
        }
    }

    struct DomainValidator {
        domain: String,
    }

    impl Validator<TestSession> for DomainValidator {
        fn validate(&self, session: &TestSession) -> Result<(), ValidationError> {
            if session.email.ends_with(&self.domain) {
                Ok(())
            } else {
                Err(ValidationError::InvalidEmailAddress)
            }
        }
    }

    #[test]
    fn struct_validator_accepts_and_rejects() {
        let validator = DomainValidator {
            domain: "@example.com".to_string(),
        };

        assert!(validator.validate(&session("user@example.com")).is_ok());
        assert_eq!(
            validator.validate(&session("user@other.org")),
            Err(ValidationError::InvalidEmailAddress)
        );
    }

    #[test]
    fn closure_is_a_validator() {
        let always_fail =
            |_: &TestSession| Err(ValidationError::rejected("maintenance window"));

        assert_eq!(
            always_fail.validate(&session("user@example.com")),
            Err(ValidationError::rejected("maintenance window"))
        );
    }

    #[test]
    fn validator_is_deterministic() {
        let validator = DomainValidator {
            domain: "@example.com".to_string(),
        };
        let session = session("user@example.com");

        let result1 = validator.validate(&session);
        let result2 = validator.validate(&session);
        assert_eq!(result1, result2);
    }

    #[test]
    fn validator_does_not_mutate_session() {
        let validator = DomainValidator {
            domain: "@example.com".to_string(),
        };
        let session = session("user@example.com");
        let before = session.clone();

        let _ = validator.validate(&session);
        assert_eq!(session, before);
    }
}
