//! JSON file plan store
//!
//! All plans live in a single JSON document mapping plan name to record.
//! Writes go to a sibling temp file first and are renamed into place, so a
//! crash mid-write leaves the previous document intact.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use questforge_domain::PlanRecord;
use tokio::sync::Mutex;

use crate::infrastructure::ports::{PlanStore, RepoError};

type PlanDocument = BTreeMap<String, PlanRecord>;

pub struct JsonFilePlanStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonFilePlanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<PlanDocument, RepoError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(PlanDocument::new()),
            Err(e) => return Err(RepoError::storage("read_plans", e)),
        };
        if contents.trim().is_empty() {
            return Ok(PlanDocument::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    async fn write_document(&self, document: &PlanDocument) -> Result<(), RepoError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| RepoError::storage("create_plan_dir", e))?;
        }

        let json = serde_json::to_string_pretty(document)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| RepoError::storage("write_plans", e))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| RepoError::storage("replace_plans", e))?;
        Ok(())
    }
}

#[async_trait]
impl PlanStore for JsonFilePlanStore {
    async fn save(&self, record: &PlanRecord) -> Result<(), RepoError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        document.insert(record.name().to_string(), record.clone());
        self.write_document(&document).await?;
        tracing::debug!(plan = record.name(), path = %self.path.display(), "Plan written");
        Ok(())
    }

    async fn load(&self, name: &str) -> Result<Option<PlanRecord>, RepoError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_document().await?.remove(name))
    }

    async fn list(&self) -> Result<Vec<String>, RepoError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_document().await?.into_keys().collect())
    }

    async fn delete(&self, name: &str) -> Result<bool, RepoError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        if document.remove(name).is_none() {
            return Ok(false);
        }
        self.write_document(&document).await?;
        Ok(true)
    }
}
