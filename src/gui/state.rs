use crate::core::{FormController, JsonFileStore, RandomGateway};

#[derive(Debug)]
pub struct AppState {
    pub controller: FormController<JsonFileStore, RandomGateway>,
}
