use bagbook::{
    DEFAULT_CURRENCY, DEFAULT_PRICE, FieldName, FixedGateway, FormController, MemoryStore,
    SubmissionStatus,
};

/// Controller over an in-memory store with a deterministic zero-delay gateway.
pub fn make_controller(outcome: SubmissionStatus) -> FormController<MemoryStore, FixedGateway> {
    FormController::new(
        MemoryStore::default(),
        FixedGateway::new(outcome),
        DEFAULT_PRICE,
        DEFAULT_CURRENCY,
    )
}

/// Fill in the field values the booking form accepts.
pub fn fill_valid_fields(
    controller: &mut FormController<MemoryStore, FixedGateway>,
) -> anyhow::Result<()> {
    controller.change_field(FieldName::Name, "Jane")?;
    controller.change_field(FieldName::Email, "jane@x.com")?;
    controller.change_field(FieldName::CardDetail, "4111111111111111")?;
    Ok(())
}

/// Press "Next" through the data-entry steps up to the payment step.
pub fn advance_to_payment(
    controller: &mut FormController<MemoryStore, FixedGateway>,
) -> anyhow::Result<()> {
    controller.advance()?;
    controller.advance()?;
    Ok(())
}
