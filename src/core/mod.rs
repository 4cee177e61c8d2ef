mod form;
mod payment;
mod store;
mod validate;

pub use form::{Advance, FormController};
pub use payment::{FixedGateway, PaymentGateway, RandomGateway, SubmissionFuture};
pub use store::{FormStore, JsonFileStore, MemoryStore};
pub use validate::validate;
