use std::{path::PathBuf, sync::Arc};

use tokio::{fs, sync::Mutex};
use tracing::warn;

use models::Document;

use crate::errors::ServiceError;

/// JSON file-backed store for the organization [`Document`].
///
/// The file is the sole source of truth: every operation re-reads it and
/// mutating operations rewrite it in full. A mutex serializes each
/// read-modify-write cycle so two in-process mutations cannot silently drop
/// each other's writes.
#[derive(Clone)]
pub struct JsonDocStore {
    file_path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonDocStore {
    /// Initialize the store from a path. Creates the file with an empty
    /// document if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        if fs::metadata(&file_path).await.is_err() {
            let empty = Document::default();
            fs::write(&file_path, encode(&empty)?)
                .await
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
        }

        Ok(Arc::new(Self { file_path, lock: Arc::new(Mutex::new(())) }))
    }

    /// Read and parse the full document. Fail-open: any read or parse
    /// failure yields the empty default document instead of an error.
    pub async fn load(&self) -> Document {
        let _guard = self.lock.lock().await;
        self.load_unlocked().await
    }

    async fn load_unlocked(&self) -> Document {
        match fs::read(&self.file_path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(doc) => doc,
                Err(e) => {
                    warn!(path = %self.file_path.display(), error = %e,
                        "document unparseable; proceeding with empty document");
                    Document::default()
                }
            },
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e,
                    "document unreadable; proceeding with empty document");
                Document::default()
            }
        }
    }

    async fn save_unlocked(&self, doc: &Document) -> Result<(), ServiceError> {
        fs::write(&self.file_path, encode(doc)?)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))
    }

    /// Run a mutation against a freshly loaded document and persist the
    /// result, all under the store lock. The closure's error aborts the
    /// cycle before anything is written.
    pub async fn update<T, F>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Document) -> Result<T, ServiceError>,
    {
        let _guard = self.lock.lock().await;
        let mut doc = self.load_unlocked().await;
        let out = f(&mut doc)?;
        self.save_unlocked(&doc).await?;
        Ok(out)
    }
}

// Pretty-printed to keep the on-disk file hand-editable.
fn encode(doc: &Document) -> Result<Vec<u8>, ServiceError> {
    serde_json::to_vec_pretty(doc).map_err(|e| ServiceError::Storage(e.to_string()))
}
