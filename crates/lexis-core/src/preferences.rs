use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Key the theme flag is stored under
pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid preference file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Durable string key-value storage
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preferences kept as one JSON object on disk, rewritten on every `set`
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&data)?)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // A corrupt file is replaced rather than blocking every later write
        let mut values = self.read_all().unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable preferences {:?}: {}", self.path, e);
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

/// In-memory store for tests and `--print` runs
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.insert(key, value);
        store
    }

    fn insert(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self
            .values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.insert(key, value);
        Ok(())
    }
}

/// Dark/light flag, the only preference that survives a restart
pub struct ThemePreference;

impl ThemePreference {
    pub const DEFAULT_DARK: bool = true;

    /// Stored value parsed as a JSON boolean, dark when absent or unreadable
    pub fn load(store: &dyn PreferenceStore) -> bool {
        match store.get(DARK_MODE_KEY) {
            Ok(Some(value)) => serde_json::from_str(&value).unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme {:?}: {}", value, e);
                Self::DEFAULT_DARK
            }),
            Ok(None) => Self::DEFAULT_DARK,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                Self::DEFAULT_DARK
            }
        }
    }

    pub fn store(store: &mut dyn PreferenceStore, dark: bool) -> Result<(), PreferenceError> {
        store.set(DARK_MODE_KEY, if dark { "true" } else { "false" })
    }
}
