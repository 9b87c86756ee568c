use std::path::PathBuf;

use async_trait::async_trait;

use crate::entities::SessionSnapshot;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> anyhow::Result<SessionSnapshot>;
    async fn save(&self, snapshot: &SessionSnapshot) -> anyhow::Result<()>;
    async fn clear(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait ExportStore: Send + Sync {
    async fn write_export(&self, file_name: &str, body: &[u8]) -> anyhow::Result<PathBuf>;
}
