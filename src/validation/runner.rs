//! Sequential validator execution and error aggregation.

use crate::core::{Session, ValidationError, Validator};

/// Runs each passed in validator and returns the errors they reported,
/// in validator order. If an empty vec is returned, it can be assumed
/// all passed in validators were successful.
///
/// Every validator runs regardless of earlier failures; the caller sees
/// the complete rejection reason set in one pass.
pub fn run_validators<S: Session>(
    validators: &[Box<dyn Validator<S>>],
    session: &S,
) -> Vec<ValidationError> {
    let mut validator_errors = Vec::with_capacity(validators.len());

    for validator in validators {
        if let Err(err) = validator.validate(session) {
            validator_errors.push(err);
        }
    }
    validator_errors
}

/// Wraps [`run_validators`], dropping group-validation errors that are
/// still within their grace period. Errors for sessions within the grace
/// period are ignored; every other error is retained in order.
///
/// This is purely a filter over the aggregated result; it invokes no
/// additional validators and introduces no new failure modes.
pub fn run_validators_with_grace_period<S: Session>(
    validators: &[Box<dyn Validator<S>>],
    session: &S,
) -> Vec<ValidationError> {
    let mut validator_errors = Vec::with_capacity(validators.len());

    for err in run_validators(validators, session) {
        if let ValidationError::Group(group) = &err {
            if group.is_within_grace_period() {
                continue;
            }
        }
        validator_errors.push(err);
    }
    validator_errors
}
