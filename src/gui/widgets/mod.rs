use iced::{
    Color, Element, Theme, border,
    widget::{column, container, container::Style, row, text, text_input},
};
use iced_widget::container::bordered_box;

use crate::models::{FormStep, ValidationError};

fn step_style(step: FormStep, current: FormStep) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let style = bordered_box(theme).border(border::width(2));
        // steps already reached are grayed out
        if step <= current {
            let mut color_rgba = theme.palette().background.into_rgba8();
            color_rgba[0] /= 2;
            color_rgba[1] /= 2;
            color_rgba[2] /= 2;
            style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
        } else {
            style.background(theme.palette().background)
        }
    }
}

/// Row of bordered boxes marking progress through the form.
pub fn step_indicator<'a, Message: 'a>(current: FormStep) -> Element<'a, Message> {
    row![
        container(text("Bags"))
            .style(step_style(FormStep::Quantity, current))
            .padding(10),
        container(text("Personal Details"))
            .style(step_style(FormStep::PersonalDetails, current))
            .padding(10),
        container(text("Payment"))
            .style(step_style(FormStep::PaymentDetails, current))
            .padding(10),
    ]
    .spacing(10)
    .into()
}

/// A labeled text input with its validation error, if any, inline below.
pub fn labeled_input<'a, Message: Clone + 'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    error: Option<&'a ValidationError>,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let mut content = column![
        text(label),
        text_input(placeholder, value).on_input(on_input),
    ]
    .spacing(5);
    if let Some(error) = error {
        content = content.push(text(error.message.as_str()).size(13).style(text::danger));
    }
    content.into()
}
