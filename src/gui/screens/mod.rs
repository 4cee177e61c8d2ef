pub mod booking_form;
pub mod booking_success;

use iced::{Element, Task};

use crate::{
    gui::{AppState, Message},
    models::SubmissionStatus,
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    BookingForm(booking_form::BookingFormScreen),
    BookingSuccess(booking_success::BookingSuccessScreen),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::BookingForm(screen) => screen.view(state).map(Message::BookingForm),
            ScreenData::BookingSuccess(screen) => screen.view(state).map(Message::BookingSuccess),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => {
                *x = screen;
                Task::none()
            }
            (ScreenData::BookingForm(page), Message::BookingForm(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::BookingForm)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    booking_form::ParentMessage::SubmissionResolved(status) => {
                        state.controller.finish_submission(status);
                        if status == SubmissionStatus::Success {
                            Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                                ScreenData::BookingSuccess(
                                    booking_success::BookingSuccessScreen,
                                ),
                            )))
                        } else {
                            // Failure keeps the form up with a Retry button.
                            Task::none()
                        }
                    }
                },
            },
            (ScreenData::BookingSuccess(page), Message::BookingSuccess(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::BookingSuccess)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {},
            },
            _ => Task::none(),
        }
    }
}
