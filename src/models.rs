use serde::{Deserialize, Serialize};

/// Default price per bag of cookies.
pub const DEFAULT_PRICE: f64 = 5.90;
/// Default currency symbol appended to totals.
pub const DEFAULT_CURRENCY: &str = "$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
    Quantity,
    PersonalDetails,
    PaymentDetails,
}

impl FormStep {
    /// The step reached by pressing "Next", or `None` on the final
    /// data-entry step (where the button submits instead).
    pub fn next(self) -> Option<FormStep> {
        match self {
            FormStep::Quantity => Some(FormStep::PersonalDetails),
            FormStep::PersonalDetails => Some(FormStep::PaymentDetails),
            FormStep::PaymentDetails => None,
        }
    }
}

impl PartialOrd for FormStep {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FormStep {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        i64::from(*self).cmp(&i64::from(*other))
    }
}

impl TryFrom<i64> for FormStep {
    type Error = anyhow::Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FormStep::Quantity),
            2 => Ok(FormStep::PersonalDetails),
            3 => Ok(FormStep::PaymentDetails),
            _ => Err(anyhow::anyhow!("Invalid FormStep value: {}", value)),
        }
    }
}

impl From<FormStep> for i64 {
    fn from(step: FormStep) -> Self {
        match step {
            FormStep::Quantity => 1,
            FormStep::PersonalDetails => 2,
            FormStep::PaymentDetails => 3,
        }
    }
}

/// Outcome of the simulated booking attempt. A `Failure` is a normal
/// domain outcome (the user retries), never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    NotSubmitted,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLabel {
    Next,
    Book,
    Retry,
}

impl ButtonLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonLabel::Next => "Next",
            ButtonLabel::Book => "Book",
            ButtonLabel::Retry => "Retry",
        }
    }
}

impl std::fmt::Display for ButtonLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    CardDetail,
    Name,
    Email,
}

impl FieldName {
    /// Key used in the persisted `formData` object.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::CardDetail => "cardDetail",
            FieldName::Name => "name",
            FieldName::Email => "email",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user-entered field values, serialized with the legacy camelCase
/// keys so an existing `formData` entry rehydrates unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub card_detail: String,
    pub name: String,
    pub email: String,
}

impl FormFields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::CardDetail => &self.card_detail,
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::CardDetail => self.card_detail = value,
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: FieldName,
    pub message: String,
}

/// What the user is about to book, handed to the payment gateway.
#[derive(Debug, Clone)]
pub struct Order {
    pub bags: u32,
    pub unit_price: f64,
    pub currency: String,
}

impl Order {
    pub fn total(&self) -> f64 {
        f64::from(self.bags) * self.unit_price
    }

    /// Total rendered as `{amount:.2}{currency}`, e.g. `17.70$`.
    pub fn total_label(&self) -> String {
        format!("{:.2}{}", self.total(), self.currency)
    }
}
