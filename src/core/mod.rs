//! Core session validation types.
//!
//! This module contains the pure capability layer of the crate:
//! - Session payloads via the `Session` trait
//! - Validation checks via the `Validator` trait
//! - The closed error taxonomy produced by validators
//!
//! All logic in this module is pure (no side effects); concrete
//! validators own whatever I/O their checks require.

mod error;
mod session;
mod validator;

pub use error::{GroupValidationError, ValidationError};
pub use session::Session;
pub use validator::Validator;
