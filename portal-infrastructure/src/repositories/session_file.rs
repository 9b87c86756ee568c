use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::utils::ensure_parent_dir;
use portal_domain::ports::SessionStore;
use portal_domain::SessionSnapshot;

pub struct SessionFileStore {
    path: PathBuf,
}

impl SessionFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStore for SessionFileStore {
    async fn load(&self) -> anyhow::Result<SessionSnapshot> {
        if !self.path.exists() {
            return Ok(SessionSnapshot::default());
        }
        let content = fs::read_to_string(&self.path).await?;
        let snapshot: SessionSnapshot = toml::from_str(&content)?;
        Ok(snapshot)
    }

    async fn save(&self, snapshot: &SessionSnapshot) -> anyhow::Result<()> {
        ensure_parent_dir(&self.path).await?;
        let content = toml::to_string(snapshot)?;
        let mut file = private_file(&self.path).await?;
        // A file left by an older run may still be world-readable.
        restrict_permissions(&self.path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

async fn private_file(path: &std::path::Path) -> std::io::Result<fs::File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);
    options.open(path).await
}

#[cfg(unix)]
async fn restrict_permissions(path: &std::path::Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &std::path::Path) -> std::io::Result<()> {
    Ok(())
}
