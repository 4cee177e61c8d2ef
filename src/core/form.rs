use anyhow::Context;
use tracing::{debug, warn};

use crate::{
    core::{
        payment::{PaymentGateway, SubmissionFuture},
        store::FormStore,
        validate::validate,
    },
    models::{
        ButtonLabel, FieldName, FormFields, FormStep, Order, SubmissionStatus, ValidationError,
    },
};

/// Outcome of pressing the form's action button.
pub enum Advance {
    /// Moved forward one data-entry step; the new step is already persisted.
    StepChanged(FormStep),
    /// Validation failed; the errors are available via [`FormController::errors`].
    ValidationFailed,
    /// A submission is in flight. The caller drives the future and feeds
    /// the resolved status back via [`FormController::finish_submission`].
    SubmissionStarted(SubmissionFuture),
}

/// Owns all mutable form state and the transition/validation logic. The
/// store and payment gateway are injected so tests can use doubles.
#[derive(Debug)]
pub struct FormController<S, G> {
    step: FormStep,
    quantity: u32,
    fields: FormFields,
    status: SubmissionStatus,
    submitting: bool,
    errors: Vec<ValidationError>,
    unit_price: f64,
    currency: String,
    store: S,
    gateway: G,
}

impl<S: FormStore, G: PaymentGateway> FormController<S, G> {
    /// Create a controller, rehydrating step and fields from the store.
    /// Unreadable persisted values are logged and fall back to defaults,
    /// matching the start-fresh behavior of an absent store.
    pub fn new(store: S, gateway: G, unit_price: f64, currency: impl Into<String>) -> Self {
        let step = store
            .load_step()
            .unwrap_or_else(|e| {
                warn!(error = %e, "ignoring unreadable persisted step");
                None
            })
            .unwrap_or(FormStep::Quantity);
        let fields = store
            .load_fields()
            .unwrap_or_else(|e| {
                warn!(error = %e, "ignoring unreadable persisted fields");
                None
            })
            .unwrap_or_default();
        Self {
            step,
            quantity: 1,
            fields,
            status: SubmissionStatus::default(),
            submitting: false,
            errors: Vec::new(),
            unit_price,
            currency: currency.into(),
            store,
            gateway,
        }
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn error_for(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn order(&self) -> Order {
        Order {
            bags: self.quantity,
            unit_price: self.unit_price,
            currency: self.currency.clone(),
        }
    }

    pub fn total_label(&self) -> String {
        self.order().total_label()
    }

    /// Retry after a failed booking, Book on the final data-entry step,
    /// Next everywhere else.
    pub fn button_label(&self) -> ButtonLabel {
        if self.status == SubmissionStatus::Failure {
            ButtonLabel::Retry
        } else if self.step > FormStep::PersonalDetails {
            ButtonLabel::Book
        } else {
            ButtonLabel::Next
        }
    }

    pub fn increment_quantity(&mut self) {
        self.quantity += 1;
    }

    /// No-op at the floor of one bag.
    pub fn decrement_quantity(&mut self) {
        if self.can_decrement() {
            self.quantity -= 1;
        }
    }

    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }

    /// Merge a single field update and persist the fields immediately.
    pub fn change_field(&mut self, field: FieldName, value: impl Into<String>) -> anyhow::Result<()> {
        self.fields.set(field, value.into());
        self.store
            .save_fields(&self.fields)
            .context("Failed to persist form fields")?;
        debug!(%field, "field updated");
        Ok(())
    }

    /// Handle the action button. Before the final data-entry step this
    /// moves forward one step and persists it; on the final step it
    /// validates and, if clean, starts a submission.
    pub fn advance(&mut self) -> anyhow::Result<Advance> {
        if let Some(next) = self.step.next() {
            self.store
                .save_step(next)
                .context("Failed to persist form step")?;
            self.step = next;
            debug!(step = ?next, "advanced to next step");
            return Ok(Advance::StepChanged(next));
        }
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            debug!(count = self.errors.len(), "validation failed");
            return Ok(Advance::ValidationFailed);
        }
        self.submitting = true;
        debug!(bags = self.quantity, "submission started");
        Ok(Advance::SubmissionStarted(Box::pin(
            self.gateway.process(self.order()),
        )))
    }

    /// Record the gateway outcome once its future resolves.
    pub fn finish_submission(&mut self, status: SubmissionStatus) {
        self.submitting = false;
        self.status = status;
        debug!(?status, "submission resolved");
    }
}
