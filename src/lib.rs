pub mod core;
pub mod models;

pub use crate::core::{
    Advance, FixedGateway, FormController, FormStore, JsonFileStore, MemoryStore, PaymentGateway,
    RandomGateway, SubmissionFuture, validate,
};
pub use models::{
    ButtonLabel, DEFAULT_CURRENCY, DEFAULT_PRICE, FieldName, FormFields, FormStep, Order,
    SubmissionStatus, ValidationError,
};

#[cfg(feature = "gui")]
pub mod gui;
