use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ImageStore;
use crate::domain::types::ItemKind;
use crate::error::CatalogServiceError;

/// Filesystem image store. Found and lost images live in separate
/// subdirectories under the media root, matching the URL prefixes they are
/// served from.
#[derive(Clone)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn dir_for(&self, kind: ItemKind) -> PathBuf {
        self.root.join(kind.dir())
    }
}

/// Collision-resistant generated name: millisecond timestamp plus a random
/// uuid, so uploads in the same millisecond still cannot clash.
fn generated_name(ext: &str) -> String {
    format!(
        "{}-{}.{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple(),
        ext
    )
}

impl ImageStore for FsImageStore {
    async fn store(
        &self,
        kind: ItemKind,
        ext: &str,
        bytes: &[u8],
    ) -> Result<String, CatalogServiceError> {
        let dir = self.dir_for(kind);
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("create media dir {}", dir.display()))?;

        let name = generated_name(ext);
        let path = dir.join(&name);
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("write image {}", path.display()))?;
        Ok(name)
    }
}
