use crate::cli::DEFAULT_EXPORT_FILE;
use crate::domain::models::ExportDocument;
use crate::registry::Registry;
use crate::services::config::ConfigFile;
use std::path::{Path, PathBuf};

/// Destination precedence: `--out` flag, then config, then the fixed
/// default in the working directory.
pub fn export_path(out: Option<&str>, config: &ConfigFile) -> PathBuf {
    if let Some(p) = out {
        return PathBuf::from(p);
    }
    if let Some(p) = &config.general.export_file {
        return PathBuf::from(p);
    }
    PathBuf::from(DEFAULT_EXPORT_FILE)
}

pub fn build_export_document(registry: &Registry) -> ExportDocument {
    ExportDocument {
        business_name: registry.business_name().to_string(),
        timestamp: chrono::Utc::now(),
        incomplete_controls: registry.incomplete(),
    }
}

pub fn write_export(document: &ExportDocument, path: &Path) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(document)?;
    if let Err(e) = std::fs::write(path, body) {
        anyhow::bail!(
            "error exporting incomplete controls to '{}': {}",
            path.display(),
            e
        );
    }
    Ok(())
}
