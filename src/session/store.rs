//! Best-effort persistence of player preferences.
//!
//! A `KeyValueStore` holds string values. `Preferences` reads the keys it
//! knows at session start; missing or unreadable values fall back to
//! defaults, and write failures are reported to the caller, which logs them
//! and carries on.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

pub const BEST_SCORE_KEY: &str = "best_score";
pub const ACCESSIBILITY_KEY: &str = "accessibility";
pub const HAS_PLAYED_KEY: &str = "has_played";

/// String key/value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store; nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk. Every `set` rewrites the file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    values: FxHashMap<String, String>,
}

impl FileStore {
    /// Open a store, starting empty if the file does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => FxHashMap::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, values })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(writer, &self.values)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Values kept across sessions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Preferences {
    pub best_score: f64,
    pub accessibility_mode: bool,
    pub has_played: bool,
}

impl Preferences {
    /// Read preferences, treating anything unreadable as unset.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let best_score = store
            .get(BEST_SCORE_KEY)
            .and_then(|raw| match raw.trim().parse::<f64>() {
                Ok(score) if score.is_finite() && score >= 0.0 => Some(score),
                _ => {
                    tracing::warn!(value = %raw, "ignoring unreadable best score");
                    None
                }
            })
            .unwrap_or(0.0);

        Self {
            best_score,
            accessibility_mode: read_flag(store, ACCESSIBILITY_KEY),
            has_played: read_flag(store, HAS_PLAYED_KEY),
        }
    }
}

fn read_flag<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> bool {
    store.get(key).is_some_and(|raw| raw == "true")
}

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Codec(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "IO error: {}", err),
            StoreError::Codec(err) => write!(f, "Codec error: {}", err),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(value: io::Error) -> Self {
        StoreError::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        StoreError::Codec(value)
    }
}
