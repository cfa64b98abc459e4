//! Gatecheck: session validation for authentication proxies
//!
//! Gatecheck decides whether an authenticated session is still acceptable.
//! It runs a list of independent validation checks against one session and
//! aggregates every failure without short-circuiting, so callers see the
//! complete rejection reason set. A grace-period variant tolerates
//! eventual-consistency lag in upstream group-membership data by dropping
//! group-validation failures that are still inside their transition window.
//!
//! # Core Concepts
//!
//! - **Session**: opaque authenticated-session payload via the `Session` trait
//! - **Validator**: independent check producing acceptance or a specific error
//! - **Aggregation**: run all validators, collect all failures, in order
//! - **Grace period**: bounded tolerance for stale group-membership data
//!
//! # Example
//!
//! ```rust
//! use gatecheck::core::{Session, ValidationError, Validator};
//! use gatecheck::validation::run_validators;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! struct ProxySession {
//!     email: String,
//! }
//!
//! impl Session for ProxySession {
//!     fn subject(&self) -> &str {
//!         &self.email
//!     }
//! }
//!
//! let validators: Vec<Box<dyn Validator<ProxySession>>> = vec![
//!     Box::new(|s: &ProxySession| {
//!         if s.email.ends_with("@example.com") {
//!             Ok(())
//!         } else {
//!             Err(ValidationError::InvalidEmailAddress)
//!         }
//!     }),
//! ];
//!
//! let session = ProxySession {
//!     email: "user@example.com".to_string(),
//! };
//! let errors = run_validators(&validators, &session);
//! assert!(errors.is_empty()); // empty result is the sole "valid" signal
//! ```

pub mod core;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{GroupValidationError, Session, ValidationError, Validator};
pub use crate::validation::{
    run_validators, run_validators_with_grace_period, ValidatorStack, ValidatorStackBuilder,
};
