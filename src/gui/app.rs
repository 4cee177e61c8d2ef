use std::path::PathBuf;

use iced::{Element, Task, Theme};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, booking_form::BookingFormScreen},
};
use crate::core::{FormController, JsonFileStore, RandomGateway};

#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub data_dir: PathBuf,
    pub price: f64,
    pub currency: String,
}

pub struct BookingApp {
    state: AppState,
    screen: ScreenData,
}

impl BookingApp {
    fn new(store: JsonFileStore, config: &GuiConfig) -> Self {
        let controller = FormController::new(
            store,
            RandomGateway::new(),
            config.price,
            config.currency.clone(),
        );
        Self {
            state: AppState { controller },
            screen: ScreenData::BookingForm(BookingFormScreen),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|message| match message {
                ScreenMessage::ScreenMessage(message) => message,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    fn view(&self) -> Element<'_, Message> {
        self.screen.view(&self.state).map(|message| match message {
            ScreenMessage::ScreenMessage(message) => message,
            ScreenMessage::ParentMessage(never) => match never {},
        })
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Open the store and run the booking window until it is closed.
pub fn run(config: GuiConfig) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&config.data_dir)?;
    iced::application(
        move || (BookingApp::new(store.clone(), &config), Task::none()),
        BookingApp::update,
        BookingApp::view,
    )
    .title("Cody's Cookie Store - Booking")
    .theme(BookingApp::theme)
    .run()?;
    Ok(())
}
