use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, row, space, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::Advance,
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{labeled_input, step_indicator},
    },
    models::{FieldName, FormStep, SubmissionStatus},
};

#[derive(Debug, Clone)]
pub struct BookingFormScreen;

#[derive(Debug, Clone)]
pub enum BookingFormMessage {
    IncrementQuantity,
    DecrementQuantity,
    FieldChanged(FieldName, String),
    SubmitPressed,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    SubmissionResolved(SubmissionStatus),
}

impl Screen for BookingFormScreen {
    type Message = BookingFormMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let controller = &state.controller;

        if controller.is_submitting() {
            return container(text("Placing Booking").size(24))
                .center_x(iced::Length::Fill)
                .center_y(iced::Length::Fill)
                .into();
        }

        let quantity_card = container(
            column![
                text("Booking storage at:"),
                text("Cody's Cookie Store").size(20),
                row![
                    text("Number of bags"),
                    button(text("-")).on_press_maybe(
                        controller
                            .can_decrement()
                            .then_some(BookingFormMessage::DecrementQuantity)
                    ),
                    text(controller.quantity().to_string()),
                    button(text("+")).on_press(BookingFormMessage::IncrementQuantity),
                ]
                .spacing(10)
                .align_y(Center),
            ]
            .spacing(10),
        )
        .style(bordered_box)
        .padding(15);

        let mut content = column![step_indicator(controller.step()), quantity_card].spacing(20);

        if controller.step() >= FormStep::PersonalDetails {
            content = content.push(
                container(
                    column![
                        labeled_input(
                            "Name",
                            "Jane Doe",
                            &controller.fields().name,
                            controller.error_for(FieldName::Name),
                            |value| BookingFormMessage::FieldChanged(FieldName::Name, value),
                        ),
                        labeled_input(
                            "Email",
                            "jane@example.com",
                            &controller.fields().email,
                            controller.error_for(FieldName::Email),
                            |value| BookingFormMessage::FieldChanged(FieldName::Email, value),
                        ),
                    ]
                    .spacing(10),
                )
                .style(bordered_box)
                .padding(15),
            );
        }

        if controller.step() >= FormStep::PaymentDetails {
            content = content.push(
                container(labeled_input(
                    "Card Details",
                    "Card number",
                    &controller.fields().card_detail,
                    controller.error_for(FieldName::CardDetail),
                    |value| BookingFormMessage::FieldChanged(FieldName::CardDetail, value),
                ))
                .style(bordered_box)
                .padding(15),
            );
        }

        let button_style: fn(&iced::Theme, button::Status) -> button::Style =
            if controller.status() == SubmissionStatus::Failure {
                button::danger
            } else {
                button::primary
            };
        let action_button = button(text(controller.button_label().to_string()))
            .style(button_style)
            .on_press(BookingFormMessage::SubmitPressed);

        content = content.push(
            row![
                column![
                    text(format!("{} bags", controller.quantity())),
                    text(controller.total_label()),
                ]
                .spacing(5),
                space::horizontal(),
                action_button,
            ]
            .align_y(Center),
        );

        // parent messages only arise from the submission task
        let form: Element<'a, BookingFormMessage> = container(content.padding(20).max_width(600))
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into();
        form.map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        let controller = &mut state.controller;
        match message {
            BookingFormMessage::IncrementQuantity => {
                controller.increment_quantity();
                Task::none()
            }
            BookingFormMessage::DecrementQuantity => {
                controller.decrement_quantity();
                Task::none()
            }
            BookingFormMessage::FieldChanged(field, value) => {
                if let Err(e) = controller.change_field(field, value) {
                    tracing::warn!(error = %e, "failed to persist field change");
                }
                Task::none()
            }
            BookingFormMessage::SubmitPressed => match controller.advance() {
                Ok(Advance::SubmissionStarted(future)) => Task::perform(future, |status| {
                    ScreenMessage::ParentMessage(ParentMessage::SubmissionResolved(status))
                }),
                Ok(Advance::StepChanged(_)) | Ok(Advance::ValidationFailed) => Task::none(),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to persist step change");
                    Task::none()
                }
            },
        }
    }
}
