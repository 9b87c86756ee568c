use std::path::Path;

pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

pub(crate) async fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_config_dir() {
        let base = Path::new("/etc/portal");
        assert_eq!(resolve_path(base, "session.toml"), "/etc/portal/session.toml");
        assert_eq!(resolve_path(base, "/var/lib/s.toml"), "/var/lib/s.toml");
        assert_eq!(resolve_path(base, "  "), "");
    }

    #[test]
    fn blank_strings_are_dropped() {
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(Some(" logs ".to_string())), Some("logs".to_string()));
        assert_eq!(non_blank(None), None);
    }
}
