use std::path::{Path, PathBuf};

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::fs;

use portal_domain::ports::ExportStore;

pub struct ExportDirStore {
    dir: PathBuf,
}

impl ExportDirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ExportStore for ExportDirStore {
    async fn write_export(&self, file_name: &str, body: &[u8]) -> anyhow::Result<PathBuf> {
        let name = Path::new(file_name);
        if name.components().count() != 1 || name.file_name().is_none() {
            return Err(anyhow!("export name must be a plain file name: {}", file_name));
        }
        fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(name);
        fs::write(&path, body).await?;
        Ok(path)
    }
}
