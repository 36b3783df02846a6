use crate::errors::StoreError;
use crate::models::CounterData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Per-day counts backed by a single JSON file, rewritten whole on every save.
#[derive(Debug)]
pub struct DailyCounterStore {
    path: PathBuf,
    data: CounterData,
}

impl DailyCounterStore {
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = load_data(&path).await;
        Self { path, data }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn counts(&self) -> &CounterData {
        &self.data
    }

    pub fn get(&self, key: &str, default: u64) -> u64 {
        self.data.days.get(key).copied().unwrap_or(default)
    }

    pub fn set(&mut self, key: &str, value: u64) {
        self.data.days.insert(key.to_string(), value);
    }

    /// Returns `false` when the write failed. The in-memory counts are kept either way.
    pub async fn save(&self) -> bool {
        match persist_data(&self.path, &self.data).await {
            Ok(()) => {
                debug!(path = %self.path.display(), days = self.data.days.len(), "saved counts");
                true
            }
            Err(err) => {
                warn!("{err}");
                false
            }
        }
    }
}

pub async fn load_data(path: &Path) -> CounterData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                warn!("failed to parse data file {}: {err}", path.display());
                CounterData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => CounterData::default(),
        Err(err) => {
            warn!("failed to read data file {}: {err}", path.display());
            CounterData::default()
        }
    }
}

/// Writes a sibling temp file and renames it over `path`, so a failed write
/// never truncates the previous contents.
pub async fn persist_data(path: &Path, data: &CounterData) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(data)?;
    let tmp = temp_path(path);
    if let Err(source) = fs::write(&tmp, payload).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(StoreError::Write { path: tmp, source });
    }
    if let Err(source) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(StoreError::Rename {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "state.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
