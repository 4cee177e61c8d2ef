use crate::gui::screens::{
    ScreenData, ScreenMessage, booking_form::BookingFormScreen,
    booking_success::BookingSuccessScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    BookingForm(ScreenMessage<BookingFormScreen>),
    BookingSuccess(ScreenMessage<BookingSuccessScreen>),
    ChangeScreen(ScreenData),
}
