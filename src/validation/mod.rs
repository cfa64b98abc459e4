//! Aggregation and grace-period policy over session validators.
//!
//! Two aggregation operations run every validator in order, without
//! short-circuiting, so callers see the complete rejection reason set:
//!
//! - [`run_validators`] collects every failure.
//! - [`run_validators_with_grace_period`] additionally drops
//!   group-validation failures still inside their transition window,
//!   tolerating eventual-consistency lag in the upstream directory.
//!
//! [`ValidatorStack`] pairs an ordered validator collection with these
//! operations and a builder for declarative assembly.
//!
//! # Example
//!
//! ```rust
//! use gatecheck::core::Session;
//! use gatecheck::validation::ValidatorStackBuilder;
//! use serde::{Deserialize, Serialize};
//!
//! # #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! # struct ProxySession { email: String }
//! # impl Session for ProxySession {
//! #     fn subject(&self) -> &str { &self.email }
//! # }
//! let stack = ValidatorStackBuilder::new()
//!     .require_pred(
//!         |s: &ProxySession| s.email.ends_with("@example.com"),
//!         "email domain not permitted".to_string(),
//!     )
//!     .build();
//!
//! let session = ProxySession { email: "user@example.com".to_string() };
//! assert!(stack.run(&session).is_empty());
//! ```

pub mod builder;
pub mod runner;
pub mod stack;

// Re-export commonly used items
pub use builder::ValidatorStackBuilder;
pub use runner::{run_validators, run_validators_with_grace_period};
pub use stack::ValidatorStack;
