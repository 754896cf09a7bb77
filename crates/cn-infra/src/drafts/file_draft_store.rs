use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use cn_core::ids::ProjectId;
use cn_core::ports::{LocalDraftError, LocalDraftStorePort};
use cn_core::project::{ProjectDraft, UnifiedStatus};

const CURRENT_FILE_VERSION: u32 = 1;

/// On-disk shape of the draft file.
#[derive(Debug, Serialize, Deserialize)]
struct DraftFile {
    #[serde(default = "current_version")]
    version: u32,
    #[serde(default)]
    drafts: Vec<ProjectDraft>,
}

fn current_version() -> u32 {
    CURRENT_FILE_VERSION
}

impl Default for DraftFile {
    fn default() -> Self {
        Self {
            version: CURRENT_FILE_VERSION,
            drafts: Vec::new(),
        }
    }
}

/// [`LocalDraftStorePort`] over a single JSON file.
///
/// 本地草稿存储：整个文件读改写，写入通过临时文件 + rename 保证原子性。
///
/// A missing file means "no drafts yet". All read-modify-write cycles are
/// serialized through an async mutex.
pub struct FileDraftStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileDraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<DraftFile, LocalDraftError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(DraftFile::default());
            }
            Err(e) => {
                return Err(LocalDraftError::Io(format!(
                    "read drafts failed: {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(DraftFile::default());
        }

        serde_json::from_str(&content).map_err(|e| {
            LocalDraftError::Corrupt(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn atomic_write(&self, file: &DraftFile) -> Result<(), LocalDraftError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await.map_err(|e| {
                LocalDraftError::Io(format!("create drafts dir failed: {}: {}", dir.display(), e))
            })?;
        }

        let content = serde_json::to_string_pretty(file)
            .map_err(|e| LocalDraftError::Corrupt(format!("serialize drafts failed: {e}")))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await.map_err(|e| {
            LocalDraftError::Io(format!("write temp drafts failed: {}: {}", tmp_path.display(), e))
        })?;
        fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            LocalDraftError::Io(format!(
                "rename temp drafts failed: {} -> {}: {}",
                tmp_path.display(),
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

#[async_trait]
impl LocalDraftStorePort for FileDraftStore {
    async fn list_drafts(&self) -> Result<Vec<ProjectDraft>, LocalDraftError> {
        Ok(self.load().await?.drafts)
    }

    async fn list_drafts_by_status(
        &self,
        status: UnifiedStatus,
    ) -> Result<Vec<ProjectDraft>, LocalDraftError> {
        let mut drafts = self.load().await?.drafts;
        drafts.retain(|draft| draft.status == status);
        Ok(drafts)
    }

    async fn save_draft(&self, draft: &ProjectDraft) -> Result<(), LocalDraftError> {
        let _guard = self.write_lock.lock().await;
        let mut file = self.load().await?;

        match file.drafts.iter_mut().find(|existing| existing.id == draft.id) {
            Some(existing) => *existing = draft.clone(),
            None => file.drafts.push(draft.clone()),
        }
        file.version = CURRENT_FILE_VERSION;

        self.atomic_write(&file).await?;
        debug!(draft_id = %draft.id, "Draft saved");
        Ok(())
    }

    async fn remove_draft(&self, id: &ProjectId) -> Result<(), LocalDraftError> {
        let _guard = self.write_lock.lock().await;
        let mut file = self.load().await?;

        let before = file.drafts.len();
        file.drafts.retain(|draft| &draft.id != id);
        if file.drafts.len() == before {
            return Err(LocalDraftError::NotFound(id.to_string()));
        }

        self.atomic_write(&file).await?;
        debug!(draft_id = %id, "Draft removed");
        Ok(())
    }
}
