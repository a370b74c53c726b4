use anyhow::Result;
use std::path::PathBuf;

/// Overrides the base directory, mainly for tests and portable installs.
pub const DATA_DIR_ENV: &str = "MARQUEE_DATA_DIR";

/// Resolves where configuration and persisted store data live.
pub struct Paths {
    base_dir: PathBuf,
}

impl Paths {
    pub fn new() -> Result<Self> {
        if let Ok(base) = std::env::var(DATA_DIR_ENV) {
            return Ok(Self {
                base_dir: PathBuf::from(base),
            });
        }

        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("marquee");
        Ok(Self { base_dir })
    }

    pub fn at(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.toml")
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.base_dir.join("data").join("store")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        std::fs::create_dir_all(self.storage_dir())?;
        Ok(())
    }
}
