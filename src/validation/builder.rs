//! Builder API for assembling validator stacks.

use crate::core::{Session, ValidationError, Validator};
use crate::validation::stack::ValidatorStack;

/// Builder for creating an ordered validator stack
pub struct ValidatorStackBuilder<S: Session> {
    validators: Vec<Box<dyn Validator<S>>>,
}

impl<S: Session> ValidatorStackBuilder<S> {
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Append a validator. Stack order follows insertion order.
    pub fn with<V>(mut self, validator: V) -> Self
    where
        V: Validator<S> + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    /// Append a simple predicate check with a displayable rejection reason
    pub fn require_pred<F>(mut self, predicate: F, reason: String) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        let check = move |session: &S| {
            if predicate(session) {
                Ok(())
            } else {
                Err(ValidationError::Rejected {
                    reason: reason.clone(),
                })
            }
        };
        self.validators.push(Box::new(check));
        self
    }

    /// Build the validator stack
    pub fn build(self) -> ValidatorStack<S> {
        ValidatorStack {
            validators: self.validators,
        }
    }
}

impl<S: Session> Default for ValidatorStackBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

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

    fn session(email: &str, groups: &[&str]) -> TestSession {
        TestSession {
            email: email.to_string(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn require_pred_passes_and_fails() {
        let stack = ValidatorStackBuilder::new()
            .require_pred(
                |s: &TestSession| s.email.ends_with("@example.com"),
                "email domain not permitted".to_string(),
            )
            .build();

        assert!(stack.run(&session("user@example.com", &[])).is_empty());
        assert_eq!(
            stack.run(&session("user@other.org", &[])),
            vec![ValidationError::rejected("email domain not permitted")]
        );
    }

    #[test]
    fn builder_preserves_insertion_order() {
        let stack = ValidatorStackBuilder::new()
            .require_pred(|_: &TestSession| false, "one".to_string())
            .require_pred(|_: &TestSession| false, "two".to_string())
            .require_pred(|_: &TestSession| false, "three".to_string())
            .build();

        let reasons: Vec<String> = stack
            .run(&session("user@example.com", &[]))
            .iter()
            .map(|e| e.to_string())
            .collect();
        assert_eq!(reasons, vec!["one", "two", "three"]);
    }

    #[test]
    fn with_accepts_struct_validators_and_closures() {
        struct RequireGroup {
            group: String,
        }

        impl Validator<TestSession> for RequireGroup {
            fn validate(&self, session: &TestSession) -> Result<(), ValidationError> {
                if session.groups.contains(&self.group) {
                    Ok(())
                } else {
                    Err(ValidationError::rejected("missing required group"))
                }
            }
        }

        let stack = ValidatorStackBuilder::new()
            .with(RequireGroup {
                group: "engineering".to_string(),
            })
            .with(|_: &TestSession| -> Result<(), ValidationError> { Ok(()) })
            .build();

        assert!(stack.run(&session("a@example.com", &["engineering"])).is_empty());
        assert_eq!(stack.run(&session("a@example.com", &[])).len(), 1);
    }
}
