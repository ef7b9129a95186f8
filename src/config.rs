//! Embedder configuration
//!
//! Small TOML file telling an embedding application where the lookup
//! database lives and which table a given enumeration seeds into. The
//! library itself has no tunables; this exists so callers wiring seeding
//! into startup share one config shape.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::storage::DEFAULT_TABLE;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LookupConfig {
    /// Database file path, relative to the config location
    pub database: Option<String>,
    /// Lookup table name; defaults to `lookup`
    pub table: Option<String>,
}

impl LookupConfig {
    /// Database path resolved against `base`, falling back to the default
    pub fn database_path(&self, base: &Path) -> PathBuf {
        match &self.database {
            Some(db) => base.join(db),
            None => default_database_path_in(base),
        }
    }

    /// Table name, falling back to the default
    pub fn table_name(&self) -> &str {
        self.table.as_deref().unwrap_or(DEFAULT_TABLE)
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("lookupseed.toml")
}

pub fn default_database_path_in(base: &Path) -> PathBuf {
    base.join(".lookupseed").join("lookup.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<LookupConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: LookupConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &LookupConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
