use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::Context;

use crate::models::{FormFields, FormStep};

const STEP_KEY: &str = "formStep";
const DATA_KEY: &str = "formData";

/// Key-value persistence for the in-progress form. Absent keys yield
/// `None`; present but unreadable values are errors.
pub trait FormStore {
    fn load_step(&self) -> anyhow::Result<Option<FormStep>>;
    fn save_step(&self, step: FormStep) -> anyhow::Result<()>;
    fn load_fields(&self) -> anyhow::Result<Option<FormFields>>;
    fn save_fields(&self, fields: &FormFields) -> anyhow::Result<()>;
}

/// Store backed by a directory with one file per key: `formStep` holds a
/// stringified integer, `formData` a JSON object with the legacy
/// cardDetail/name/email keys.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create store directory {:?}", dir))?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn read_key(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.key_path(key);
        if !path.is_file() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read store key {:?}", path))?;
        Ok(Some(raw))
    }

    fn write_key(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.key_path(key);
        fs::write(&path, value).with_context(|| format!("Failed to write store key {:?}", path))
    }
}

impl FormStore for JsonFileStore {
    fn load_step(&self) -> anyhow::Result<Option<FormStep>> {
        match self.read_key(STEP_KEY)? {
            None => Ok(None),
            Some(raw) => {
                let value: i64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid persisted {}: {:?}", STEP_KEY, raw))?;
                Ok(Some(FormStep::try_from(value)?))
            }
        }
    }

    fn save_step(&self, step: FormStep) -> anyhow::Result<()> {
        self.write_key(STEP_KEY, &i64::from(step).to_string())
    }

    fn load_fields(&self) -> anyhow::Result<Option<FormFields>> {
        match self.read_key(DATA_KEY)? {
            None => Ok(None),
            Some(raw) => {
                let fields = serde_json::from_str(&raw)
                    .with_context(|| format!("Invalid persisted {}: {:?}", DATA_KEY, raw))?;
                Ok(Some(fields))
            }
        }
    }

    fn save_fields(&self, fields: &FormFields) -> anyhow::Result<()> {
        let raw = serde_json::to_string(fields).context("Failed to serialize form fields")?;
        self.write_key(DATA_KEY, &raw)
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    step: Option<FormStep>,
    fields: Option<FormFields>,
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

impl FormStore for MemoryStore {
    fn load_step(&self) -> anyhow::Result<Option<FormStep>> {
        Ok(self.inner.lock().expect("store mutex poisoned").step)
    }

    fn save_step(&self, step: FormStep) -> anyhow::Result<()> {
        self.inner.lock().expect("store mutex poisoned").step = Some(step);
        Ok(())
    }

    fn load_fields(&self) -> anyhow::Result<Option<FormFields>> {
        Ok(self
            .inner
            .lock()
            .expect("store mutex poisoned")
            .fields
            .clone())
    }

    fn save_fields(&self, fields: &FormFields) -> anyhow::Result<()> {
        self.inner.lock().expect("store mutex poisoned").fields = Some(fields.clone());
        Ok(())
    }
}
