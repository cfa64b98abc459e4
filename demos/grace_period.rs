//! Grace-Period Filtering
//!
//! This example demonstrates how group-membership failures are tolerated
//! for a bounded transition window.
//!
//! Key concepts:
//! - A directory-backed group validator that reports GroupValidationError
//! - run vs run_with_grace_period on the same stack
//! - In-grace failures are dropped; expired ones surface normally
//!
//! Run with: cargo run --example grace_period

use chrono::{DateTime, Utc};
use gatecheck::core::{GroupValidationError, Session, ValidationError, Validator};
use gatecheck::validation::ValidatorStackBuilder;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct ProxySession {
    email: String,
}

impl Session for ProxySession {
    fn subject(&self) -> &str {
        &self.email
    }
}

/// Stand-in for a validator backed by an external directory service.
///
/// The real thing would query the directory and track, per user, when
/// membership last verified. Here the lookup outcome is fixed so the
/// example is deterministic.
struct GroupMembershipValidator {
    membership_verifiable: bool,
    unverifiable_since: DateTime<Utc>,
    grace_period: Duration,
}

impl Validator<ProxySession> for GroupMembershipValidator {
    fn validate(&self, _session: &ProxySession) -> Result<(), ValidationError> {
        if self.membership_verifiable {
            Ok(())
        } else {
            Err(ValidationError::Group(GroupValidationError::new(
                self.unverifiable_since,
                self.grace_period,
            )))
        }
    }
}

fn report(label: &str, errors: &[ValidationError]) {
    if errors.is_empty() {
        println!("  {label}: session accepted");
    } else {
        println!("  {label}: session rejected");
        for err in errors {
            println!("    - {err}");
        }
    }
}

fn main() {
    println!("=== Grace-Period Filtering Example ===\n");

    let session = ProxySession {
        email: "user@example.com".to_string(),
    };
    let grace_period = Duration::from_secs(3600);

    // Directory went stale two minutes ago: still inside the window.
    println!("Membership unverifiable for 2 minutes (1h grace period):");
    let stack = ValidatorStackBuilder::new()
        .with(GroupMembershipValidator {
            membership_verifiable: false,
            unverifiable_since: Utc::now() - chrono::Duration::minutes(2),
            grace_period,
        })
        .build();
    report("run                  ", &stack.run(&session));
    report("run_with_grace_period", &stack.run_with_grace_period(&session));
    println!("  -> the lagging directory does not bounce the session\n");

    // Stale for two hours: the window has elapsed.
    println!("Membership unverifiable for 2 hours (1h grace period):");
    let stack = ValidatorStackBuilder::new()
        .with(GroupMembershipValidator {
            membership_verifiable: false,
            unverifiable_since: Utc::now() - chrono::Duration::hours(2),
            grace_period,
        })
        .build();
    report("run                  ", &stack.run(&session));
    report("run_with_grace_period", &stack.run_with_grace_period(&session));
    println!("  -> past the window, both variants reject identically\n");

    // Generic failures are never grace-filtered.
    println!("Generic failure alongside an in-grace group failure:");
    let stack = ValidatorStackBuilder::new()
        .require_pred(|_: &ProxySession| false, "account suspended".to_string())
        .with(GroupMembershipValidator {
            membership_verifiable: false,
            unverifiable_since: Utc::now(),
            grace_period,
        })
        .build();
    report("run                  ", &stack.run(&session));
    report("run_with_grace_period", &stack.run_with_grace_period(&session));
    println!("  -> only the group failure is absorbed, never generic ones");

    println!("\n=== Example Complete ===");
}
