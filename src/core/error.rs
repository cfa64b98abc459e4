//! Validation errors and grace-period eligibility.

use chrono::{DateTime, Utc};
use std::time::Duration;
use thiserror::Error;

/// Errors a validator can report for a session.
///
/// The set is closed so the grace-period filter can match exhaustively
/// instead of probing error values at runtime. Display strings are
/// appropriate for showing to the end user.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// The session's email address failed an allow-list check.
    #[error("Invalid Email Address In Session State")]
    InvalidEmailAddress,

    /// Generic failure with an end-user displayable reason.
    #[error("{reason}")]
    Rejected { reason: String },

    /// Group membership could not be verified against the directory.
    ///
    /// The only variant the grace-period filter may drop.
    #[error(transparent)]
    Group(#[from] GroupValidationError),
}

impl ValidationError {
    /// Generic rejection with a displayable reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// Failure of a group-membership check, with grace-period eligibility.
///
/// The group validator that produced this error owns the grace-period
/// bookkeeping: it records when the session's membership became
/// unverifiable and how long the transition window is. This crate only
/// evaluates the resulting predicate.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Invalid Group Membership In Session State")]
pub struct GroupValidationError {
    /// When the session's group membership became unverifiable.
    pub unverifiable_since: DateTime<Utc>,

    /// How long an unverifiable membership is tolerated.
    pub grace_period: Duration,
}

impl GroupValidationError {
    pub fn new(unverifiable_since: DateTime<Utc>, grace_period: Duration) -> Self {
        Self {
            unverifiable_since,
            grace_period,
        }
    }

    /// Whether this failure is still inside its transition window.
    ///
    /// In-grace failures are dropped by the grace-period aggregation so a
    /// session is not rejected the instant upstream group data goes stale.
    pub fn is_within_grace_period(&self) -> bool {
        self.elapsed() < self.grace_period
    }

    /// Time since membership became unverifiable (clamped at zero).
    pub fn elapsed(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.unverifiable_since)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}
