//! Ordered validator collections with aggregation methods.

use crate::core::{Session, ValidationError, Validator};
use crate::validation::builder::ValidatorStackBuilder;
use crate::validation::runner::{run_validators, run_validators_with_grace_period};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// An ordered collection of validators for one session type.
///
/// Order is significant: aggregation results list failures in the order
/// validators were added, and callers may display them in that order.
pub struct ValidatorStack<S: Session> {
    pub(crate) validators: Vec<Box<dyn Validator<S>>>,
}

impl<S: Session> ValidatorStack<S> {
    pub fn builder() -> ValidatorStackBuilder<S> {
        ValidatorStackBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Run every validator against the session and collect all failures.
    ///
    /// See [`run_validators`].
    pub fn run(&self, session: &S) -> Vec<ValidationError> {
        run_validators(&self.validators, session)
    }

    /// Run every validator, dropping in-grace group-validation failures.
    ///
    /// See [`run_validators_with_grace_period`].
    pub fn run_with_grace_period(&self, session: &S) -> Vec<ValidationError> {
        run_validators_with_grace_period(&self.validators, session)
    }

    /// [`ValidatorStack::run`] expressed as an accumulating `Validation`:
    /// success iff no validator failed.
    pub fn enforce(&self, session: &S) -> Validation<(), NonEmptyVec<ValidationError>> {
        Self::accumulate(self.run(session))
    }

    /// [`ValidatorStack::run_with_grace_period`] expressed as an
    /// accumulating `Validation`.
    pub fn enforce_with_grace_period(
        &self,
        session: &S,
    ) -> Validation<(), NonEmptyVec<ValidationError>> {
        Self::accumulate(self.run_with_grace_period(session))
    }

    fn accumulate(errors: Vec<ValidationError>) -> Validation<(), NonEmptyVec<ValidationError>> {
        let failures: Vec<Validation<(), NonEmptyVec<ValidationError>>> =
            errors.into_iter().map(|err| Validation::fail(err)).collect();
        Validation::all_vec(failures).map(|_| ())
    }
}
