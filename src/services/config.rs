use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: ConfigGeneral,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigGeneral {
    /// Default destination for `export` when `--out` is not given.
    #[serde(default)]
    pub export_file: Option<String>,
    /// Business name applied to a fresh registry.
    #[serde(default)]
    pub business_name: Option<String>,
}

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/tanuki/config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
