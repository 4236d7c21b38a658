use crate::models::WorkoutEntry;
use serde_json::Value;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::{fs, sync::Mutex};
use tracing::{debug, error};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to serialize workouts: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write workouts file: {0}")]
    Write(#[from] std::io::Error),
}

/// Append-only workout log kept as a single JSON array on disk.
#[derive(Clone)]
pub struct WorkoutStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl WorkoutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn append(&self, entry: &WorkoutEntry) -> Result<(), StoreError> {
        let record = serde_json::to_value(entry)?;
        let _guard = self.write_lock.lock().await;
        let mut workouts = load_workouts(&self.path).await;
        workouts.push(record);
        persist_workouts(&self.path, &workouts).await?;
        debug!(path = %self.path.display(), count = workouts.len(), "workout appended");
        Ok(())
    }

    /// Entries are returned as stored, so records written by older builds or
    /// by hand keep whatever fields they have.
    pub async fn list_by_owner(&self, owner: &str) -> Vec<Value> {
        load_workouts(&self.path)
            .await
            .into_iter()
            .filter(|entry| entry.get("owner").and_then(Value::as_str) == Some(owner))
            .collect()
    }
}

/// Missing, unreadable and corrupt files all read as an empty log. Any JSON
/// array is accepted whatever its elements look like.
pub async fn load_workouts(path: &Path) -> Vec<Value> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse workouts file: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read workouts file: {err}");
            Vec::new()
        }
    }
}

async fn persist_workouts(path: &Path, workouts: &[Value]) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(workouts)?;
    fs::write(path, payload).await?;
    Ok(())
}
