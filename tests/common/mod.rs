mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from bagbook for tests
pub use bagbook::{
    Advance, ButtonLabel, FieldName, FixedGateway, FormController, FormStep, FormStore,
    JsonFileStore, MemoryStore, SubmissionStatus,
};
