//! Form controller: field values, touched flags, field errors and the
//! idle → submitting → settled lifecycle of one form.
//!
//! Validation runs in "on touched" mode: a field is checked when it loses
//! focus and on every change after that, and its error is only visible once
//! the field is touched. Submitting touches every field.

use super::schemas::{FieldErrors, FieldValues, Schema};
use std::{collections::BTreeSet, marker::PhantomData};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settlement {
    Success,
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Settled(Settlement),
}

/// Why [`FormState::begin_submit`] did not start a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked<F: Ord> {
    /// A request from this form is still in flight.
    InFlight,
    Invalid(FieldErrors<F>),
}

pub struct FormState<S: Schema> {
    values: FieldValues<S::Field>,
    touched: BTreeSet<S::Field>,
    errors: FieldErrors<S::Field>,
    phase: SubmitPhase,
    schema: PhantomData<fn() -> S>,
}

impl<S: Schema> Clone for FormState<S> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            touched: self.touched.clone(),
            errors: self.errors.clone(),
            phase: self.phase.clone(),
            schema: PhantomData,
        }
    }
}

impl<S: Schema> Default for FormState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schema> FormState<S> {
    pub fn new() -> Self {
        Self {
            values: S::FIELDS
                .iter()
                .map(|field| (*field, String::new()))
                .collect(),
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            phase: SubmitPhase::Idle,
            schema: PhantomData,
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn value(&self, field: S::Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub fn set_value(&mut self, field: S::Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
        if self.touched.contains(&field) {
            self.revalidate(field);
        }
    }

    /// Marks the field touched and validates it.
    pub fn blur(&mut self, field: S::Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    pub fn is_touched(&self, field: S::Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error to render next to the field, if any.
    pub fn visible_error(&self, field: S::Field) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// The submit control is disabled only while a request is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting()
    }

    /// Form-level error from the last settled submit.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SubmitPhase::Settled(Settlement::Error(message)) => Some(message),
            _ => None,
        }
    }

    /// Validates the whole form and, when it passes, enters `Submitting` and
    /// returns the typed value to send. A failed validation keeps the current
    /// phase and never reaches the network.
    pub fn begin_submit(&mut self) -> Result<S::Output, SubmitBlocked<S::Field>> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }

        self.touched.extend(S::FIELDS.iter().copied());
        match S::validate(&self.values) {
            Ok(output) => {
                self.errors = FieldErrors::new();
                self.phase = SubmitPhase::Submitting;
                Ok(output)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitBlocked::Invalid(errors))
            }
        }
    }

    /// Ends the in-flight submit. Ignored unless the form is submitting.
    pub fn settle(&mut self, outcome: Result<(), String>) {
        if !self.is_submitting() {
            return;
        }
        self.phase = SubmitPhase::Settled(match outcome {
            Ok(()) => Settlement::Success,
            Err(message) => Settlement::Error(message),
        });
    }

    fn revalidate(&mut self, field: S::Field) {
        let message = match S::validate(&self.values) {
            Ok(_) => None,
            Err(errors) => errors.get(field).map(str::to_string),
        };

        let mut errors = FieldErrors::new();
        for other in self.errors.fields().filter(|other| *other != field) {
            if let Some(existing) = self.errors.get(other) {
                errors.add(other, existing);
            }
        }
        if let Some(message) = message {
            errors.add(field, message);
        }
        self.errors = errors;
    }
}
