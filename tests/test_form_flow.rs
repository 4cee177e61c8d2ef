mod common;

use std::time::Duration;

use bagbook::{DEFAULT_CURRENCY, DEFAULT_PRICE};
use common::*;

#[test]
fn quantity_never_drops_below_one() {
    let mut controller = make_controller(SubmissionStatus::Success);
    assert_eq!(controller.quantity(), 1);
    assert!(!controller.can_decrement());

    controller.decrement_quantity();
    assert_eq!(controller.quantity(), 1);

    controller.increment_quantity();
    assert_eq!(controller.quantity(), 2);
    assert!(controller.can_decrement());

    controller.decrement_quantity();
    assert_eq!(controller.quantity(), 1);
    assert!(!controller.can_decrement());
}

#[test]
fn steps_advance_forward_one_at_a_time() -> anyhow::Result<()> {
    let mut controller = make_controller(SubmissionStatus::Success);
    assert_eq!(controller.step(), FormStep::Quantity);
    assert_eq!(controller.button_label(), ButtonLabel::Next);

    let outcome = controller.advance()?;
    assert!(matches!(
        outcome,
        Advance::StepChanged(FormStep::PersonalDetails)
    ));
    assert_eq!(controller.step(), FormStep::PersonalDetails);
    assert_eq!(controller.button_label(), ButtonLabel::Next);

    let outcome = controller.advance()?;
    assert!(matches!(
        outcome,
        Advance::StepChanged(FormStep::PaymentDetails)
    ));
    assert_eq!(controller.step(), FormStep::PaymentDetails);
    assert_eq!(controller.button_label(), ButtonLabel::Book);
    Ok(())
}

#[test]
fn total_reflects_quantity_and_price() {
    let mut controller = make_controller(SubmissionStatus::Success);
    controller.increment_quantity();
    controller.increment_quantity();
    assert_eq!(controller.quantity(), 3);
    assert_eq!(controller.total_label(), "17.70$");
}

#[tokio::test(start_paused = true)]
async fn booking_resolves_after_the_simulated_delay() -> anyhow::Result<()> {
    let mut controller = FormController::new(
        MemoryStore::default(),
        FixedGateway::with_delay(SubmissionStatus::Success, Duration::from_secs(3)),
        DEFAULT_PRICE,
        DEFAULT_CURRENCY,
    );
    advance_to_payment(&mut controller)?;
    fill_valid_fields(&mut controller)?;

    let Advance::SubmissionStarted(future) = controller.advance()? else {
        panic!("expected submission to start");
    };
    assert!(controller.is_submitting());
    assert!(controller.errors().is_empty());

    let status = future.await;
    controller.finish_submission(status);
    assert!(!controller.is_submitting());
    assert_eq!(controller.status(), SubmissionStatus::Success);
    assert_eq!(controller.button_label(), ButtonLabel::Book);
    Ok(())
}

#[tokio::test]
async fn failed_booking_offers_retry() -> anyhow::Result<()> {
    let mut controller = make_controller(SubmissionStatus::Failure);
    advance_to_payment(&mut controller)?;
    fill_valid_fields(&mut controller)?;

    let Advance::SubmissionStarted(future) = controller.advance()? else {
        panic!("expected submission to start");
    };
    controller.finish_submission(future.await);
    assert_eq!(controller.status(), SubmissionStatus::Failure);
    assert_eq!(controller.button_label(), ButtonLabel::Retry);

    // Retry keeps the step and goes straight back into submission.
    let outcome = controller.advance()?;
    assert!(matches!(outcome, Advance::SubmissionStarted(_)));
    assert_eq!(controller.step(), FormStep::PaymentDetails);
    Ok(())
}
