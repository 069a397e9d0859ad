//! CLI configuration file

use anyhow::Context;
use regform_core::RegformConfig;
use std::path::{Path, PathBuf};

/// `~/.config/regform/config.toml` (platform config dir)
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("regform").join("config.toml"))
}

/// Load `path` if it exists, defaults otherwise
pub fn load(path: Option<&Path>) -> anyhow::Result<RegformConfig> {
    match path {
        Some(path) if path.exists() => RegformConfig::load(path)
            .with_context(|| format!("reading {}", path.display())),
        _ => Ok(RegformConfig::default()),
    }
}

pub fn init(path: &Path) -> anyhow::Result<()> {
    RegformConfig::default()
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join(format!("regform-missing-{}.toml", uuid::Uuid::new_v4()));
        assert_eq!(load(Some(&path)).unwrap(), RegformConfig::default());
        assert_eq!(load(None).unwrap(), RegformConfig::default());
    }

    #[test]
    fn test_init_then_load() {
        let dir = std::env::temp_dir().join(format!("regform-cli-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");
        init(&path).unwrap();
        assert_eq!(load(Some(&path)).unwrap(), RegformConfig::default());
        std::fs::remove_dir_all(dir).ok();
    }
}
