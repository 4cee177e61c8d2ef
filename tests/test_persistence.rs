mod common;

use bagbook::{DEFAULT_CURRENCY, DEFAULT_PRICE, FormFields};
use common::*;

fn make_file_controller(
    dir: &std::path::Path,
) -> anyhow::Result<FormController<JsonFileStore, FixedGateway>> {
    let store = JsonFileStore::new(dir)?;
    Ok(FormController::new(
        store,
        FixedGateway::new(SubmissionStatus::Success),
        DEFAULT_PRICE,
        DEFAULT_CURRENCY,
    ))
}

#[test]
fn restart_resumes_step_and_fields() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;

    {
        let mut controller = make_file_controller(dir.path())?;
        controller.change_field(FieldName::Name, "Jane")?;
        controller.change_field(FieldName::Email, "jane@x.com")?;
        controller.advance()?;
        controller.advance()?;
    }

    let controller = make_file_controller(dir.path())?;
    assert_eq!(controller.step(), FormStep::PaymentDetails);
    assert_eq!(controller.fields().name, "Jane");
    assert_eq!(controller.fields().email, "jane@x.com");
    assert_eq!(controller.fields().card_detail, "");
    Ok(())
}

#[test]
fn fresh_store_yields_defaults() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let controller = make_file_controller(dir.path())?;
    assert_eq!(controller.step(), FormStep::Quantity);
    assert_eq!(controller.fields(), &FormFields::default());
    Ok(())
}

#[test]
fn step_is_written_only_on_advance() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let mut controller = make_file_controller(dir.path())?;

    controller.change_field(FieldName::Name, "Jane")?;
    assert!(!dir.path().join("formStep").exists());
    assert!(dir.path().join("formData").exists());

    controller.advance()?;
    let raw = std::fs::read_to_string(dir.path().join("formStep"))?;
    assert_eq!(raw, "2");
    Ok(())
}

#[test]
fn fields_are_stored_under_legacy_keys() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let mut controller = make_file_controller(dir.path())?;
    controller.change_field(FieldName::CardDetail, "4111111111111111")?;

    let raw = std::fs::read_to_string(dir.path().join("formData"))?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(value["cardDetail"], "4111111111111111");
    assert_eq!(value["name"], "");
    assert_eq!(value["email"], "");
    Ok(())
}

#[test]
fn store_roundtrips_step_and_fields() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let store = JsonFileStore::new(dir.path())?;

    assert!(store.load_step()?.is_none());
    store.save_step(FormStep::PaymentDetails)?;
    assert_eq!(store.load_step()?, Some(FormStep::PaymentDetails));

    let fields = FormFields {
        card_detail: "4111111111111111".to_string(),
        name: "Jane".to_string(),
        email: "jane@x.com".to_string(),
    };
    store.save_fields(&fields)?;
    assert_eq!(store.load_fields()?, Some(fields));
    Ok(())
}

#[test]
fn corrupt_step_is_an_error() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let store = JsonFileStore::new(dir.path())?;
    std::fs::write(dir.path().join("formStep"), "not-a-number")?;

    assert!(store.load_step().is_err());
    Ok(())
}
