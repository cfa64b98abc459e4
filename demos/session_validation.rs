//! Session Validation
//!
//! This example demonstrates running a validator stack against proxy
//! sessions and reading the aggregated result.
//!
//! Key concepts:
//! - Caller-defined session payloads via the Session trait
//! - Struct and closure validators
//! - Full aggregation: every failure reported, in validator order
//!
//! Run with: cargo run --example session_validation

use gatecheck::core::{Session, ValidationError, Validator};
use gatecheck::validation::ValidatorStackBuilder;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct ProxySession {
    email: String,
    groups: Vec<String>,
}

impl Session for ProxySession {
    fn subject(&self) -> &str {
        &self.email
    }
}

/// Allow-list check a proxy would configure from its settings file.
struct EmailAllowList {
    allowed_domains: Vec<String>,
}

impl Validator<ProxySession> for EmailAllowList {
    fn validate(&self, session: &ProxySession) -> Result<(), ValidationError> {
        let permitted = self
            .allowed_domains
            .iter()
            .any(|domain| session.email.ends_with(domain.as_str()));
        if permitted {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmailAddress)
        }
    }
}

fn main() {
    println!("=== Session Validation Example ===\n");

    let stack = ValidatorStackBuilder::new()
        .with(EmailAllowList {
            allowed_domains: vec!["@example.com".to_string()],
        })
        .require_pred(
            |s: &ProxySession| !s.groups.is_empty(),
            "user belongs to no groups".to_string(),
        )
        .build();

    println!("Configured {} validators\n", stack.len());

    // A session that passes every check
    let good = ProxySession {
        email: "user@example.com".to_string(),
        groups: vec!["engineering".to_string()],
    };
    let errors = stack.run(&good);
    println!("Session for {}: {} errors", good.subject(), errors.len());
    println!("  -> empty result is the sole \"valid\" signal\n");

    // A session that fails both checks; both failures are reported
    let bad = ProxySession {
        email: "intruder@other.org".to_string(),
        groups: vec![],
    };
    let errors = stack.run(&bad);
    println!("Session for {}: {} errors", bad.subject(), errors.len());
    for err in &errors {
        println!("  - {err}");
    }
    println!("  -> no short-circuit: the caller sees every reason at once");

    println!("\n=== Example Complete ===");
}
