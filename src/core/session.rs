//! Core Session trait for authenticated session payloads.
//!
//! Callers define their own session type; the aggregation layer only
//! borrows it and hands it to validators, never inspecting its fields.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for authenticated session payloads.
///
/// The validation layer treats sessions as opaque: it borrows a session
/// for the duration of one aggregation call and passes it to each
/// validator unchanged. Concrete validators decide which fields matter.
///
/// # Required Traits
///
/// - `Clone`: sessions must be cloneable for caller-side bookkeeping
/// - `PartialEq`: sessions must be comparable for test assertions
/// - `Debug`: sessions must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: sessions must be serializable because
///   callers persist them (cookie and header stores)
///
/// # Example
///
/// ```rust
/// use gatecheck::core::Session;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct ProxySession {
///     email: String,
///     groups: Vec<String>,
/// }
///
/// impl Session for ProxySession {
///     fn subject(&self) -> &str {
///         &self.email
///     }
/// }
/// ```
pub trait Session:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Identifier of the authenticated principal, for display/logging.
    ///
    /// Returns a string reference into the session; the validation layer
    /// itself never calls this, but callers use it when reporting which
    /// session was rejected.
    fn subject(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct TestSession {
        email: String,
        groups: Vec<String>,
    }

    impl Session for TestSession {
        fn subject(&self) -> &str {
            &self.email
        }
    }

    fn session() -> TestSession {
        TestSession {
            email: "user@example.com".to_string(),
            groups: vec!["engineering".to_string()],
        }
    }

    #[test]
    fn subject_returns_principal_identifier() {
        assert_eq!(session().subject(), "user@example.com");
    }

    #[test]
    fn session_serializes_correctly() {
        let session = session();
        let json = serde_json::to_string(&session).unwrap();
        let deserialized: TestSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, deserialized);
    }

    #[test]
    fn session_is_cloneable() {
        let session = session();
        let cloned = session.clone();
        assert_eq!(session, cloned);
    }

    #[test]
    fn session_is_comparable() {
        let a = session();
        let b = session();
        let mut c = session();
        c.email = "other@example.com".to_string();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
