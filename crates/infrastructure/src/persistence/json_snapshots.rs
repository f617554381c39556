use std::fs;
use std::path::{Path, PathBuf};

use cachedns_application::ports::SnapshotStore;
use cachedns_domain::{CacheEntry, DomainError, Question};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

const ANSWERS_FILE: &str = "answers.json";
const QUESTIONS_FILE: &str = "questions.json";

/// Snapshot persistence as two JSON files under a data directory.
///
/// A missing, unreadable or corrupt snapshot is treated the same as
/// "no prior cache": the load returns empty and a fresh empty snapshot
/// is written immediately so the next load does not repeat the failure
/// path. File handles are scoped per call, never held across requests.
pub struct JsonSnapshotStore {
    answers_path: PathBuf,
    questions_path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            answers_path: data_dir.join(ANSWERS_FILE),
            questions_path: data_dir.join(QUESTIONS_FILE),
        }
    }

    pub fn answers_path(&self) -> &Path {
        &self.answers_path
    }

    pub fn questions_path(&self) -> &Path {
        &self.questions_path
    }

    fn load_collection<T>(&self, path: &Path) -> Vec<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                let failure = DomainError::CacheLoadFailure {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                };
                warn!(error = %failure, "Starting with an empty cache");
                self.recreate_empty::<T>(path);
                return vec![];
            }
        };

        match serde_json::from_str(&contents) {
            Ok(items) => {
                debug!(path = %path.display(), "Snapshot loaded");
                items
            }
            Err(e) => {
                let failure = DomainError::CacheLoadFailure {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                };
                warn!(error = %failure, "Discarding corrupt snapshot");
                self.recreate_empty::<T>(path);
                vec![]
            }
        }
    }

    fn recreate_empty<T: Serialize>(&self, path: &Path) {
        let empty: Vec<T> = vec![];
        if let Err(e) = self.save_collection(path, &empty) {
            warn!(error = %e, path = %path.display(), "Failed to recreate empty snapshot");
        }
    }

    fn save_collection<T: Serialize>(&self, path: &Path, items: &[T]) -> Result<(), DomainError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| DomainError::PersistenceError(e.to_string()))?;
        }
        let contents = serde_json::to_vec(items)
            .map_err(|e| DomainError::PersistenceError(e.to_string()))?;
        fs::write(path, contents).map_err(|e| DomainError::PersistenceError(e.to_string()))
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load_answers(&self) -> Vec<CacheEntry> {
        self.load_collection(&self.answers_path)
    }

    fn load_questions(&self) -> Vec<Question> {
        self.load_collection(&self.questions_path)
    }

    fn save_answers(&self, entries: &[CacheEntry]) -> Result<(), DomainError> {
        self.save_collection(&self.answers_path, entries)
    }

    fn save_questions(&self, questions: &[Question]) -> Result<(), DomainError> {
        self.save_collection(&self.questions_path, questions)
    }
}
