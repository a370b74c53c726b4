use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file holding the movie catalog; unset means the built-in
    /// catalog is used.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme applied when nothing has been persisted yet.
    #[serde(default = "default_theme")]
    pub default: String,
}

fn default_theme() -> String {
    "FunkyFlix".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: default_theme(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// A missing config file means defaults; a present but malformed file
    /// is an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(file) = &self.catalog.file {
            if !file.exists() {
                return Err(anyhow::anyhow!(
                    "Catalog file does not exist: {}",
                    file.display()
                ));
            }
        }
        if self.theme.default.trim().is_empty() {
            return Err(anyhow::anyhow!("theme.default cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            catalog: CatalogConfig {
                file: Some(PathBuf::from("/tmp/movies.json")),
            },
            theme: ThemeConfig {
                default: "SunsetPop".to_string(),
            },
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(
            loaded.catalog.file.as_deref(),
            Some(Path::new("/tmp/movies.json"))
        );
        assert_eq!(loaded.theme.default, "SunsetPop");
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let config = Config::load_or_default(Path::new("/nonexistent/marquee/config.toml")).unwrap();

        assert_eq!(config.catalog.file, None);
        assert_eq!(config.theme.default, "FunkyFlix");
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.catalog.file, None);
        assert_eq!(config.theme.default, "FunkyFlix");

        let config: Config = toml::from_str("[theme]\ndefault = \"SunsetPop\"\n").unwrap();
        assert_eq!(config.catalog.file, None);
        assert_eq!(config.theme.default, "SunsetPop");
    }

    #[test]
    fn test_validate_requires_an_existing_catalog_file() {
        let mut config = Config {
            catalog: CatalogConfig {
                file: Some(PathBuf::from("/nonexistent/movies.json")),
            },
            theme: ThemeConfig::default(),
        };
        assert!(config.validate().is_err());

        let file = NamedTempFile::new().unwrap();
        config.catalog.file = Some(file.path().to_path_buf());
        assert!(config.validate().is_ok());

        config.catalog.file = None;
        assert!(config.validate().is_ok());
    }
}
