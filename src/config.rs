use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, WordWideWebError};

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fragment shown at startup.
    pub start_page: String,
    /// Directory of `*.lesson.json` packs merged over the built-in content.
    pub content_dir: Option<PathBuf>,
    pub donate_url: String,
    pub contact_email: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_page: "main".to_string(),
            content_dir: None,
            donate_url: "https://paypal.me/YOURUSERNAME".to_string(),
            contact_email: "kevan@gmail.com".to_string(),
        }
    }
}

impl Config {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

/// Reads `file_path`. A missing file is not an error and gives the defaults.
pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    let contents = match fs::read_to_string(file_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("No config at {:?}, using defaults", file_path);
            return Ok(Config::default());
        }
        Err(e) => return Err(WordWideWebError::io(file_path, e)),
    };

    let loaded_config: Config = toml::from_str(&contents).map_err(|source| WordWideWebError::Toml {
        path: file_path.to_path_buf(),
        source,
    })?;

    if let Some(dir) = &loaded_config.content_dir {
        if !dir.is_dir() {
            return Err(WordWideWebError::InvalidConfig(format!(
                "content_dir specified in {:?} ({:?}) is not a valid directory",
                file_path, dir
            )));
        }
    }
    Ok(loaded_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config_from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "start_page = \"vocab-nl-1\"\n").unwrap();
        let config = load_config_from_file(&path).unwrap();
        assert_eq!(config.start_page, "vocab-nl-1");
        assert_eq!(config.contact_email, "kevan@gmail.com");
        assert_eq!(config.mailto(), "mailto:kevan@gmail.com");
    }

    #[test]
    fn content_dir_must_exist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "content_dir = \"/definitely/not/here\"\n").unwrap();
        assert!(matches!(
            load_config_from_file(&path),
            Err(WordWideWebError::InvalidConfig(_))
        ));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "start_page = [").unwrap();
        assert!(matches!(
            load_config_from_file(&path),
            Err(WordWideWebError::Toml { .. })
        ));
    }
}
