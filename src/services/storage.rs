use crate::registry::Registry;
use std::path::PathBuf;

fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/tanuki"))
}

fn state_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("state.json"))
}

pub fn load_registry() -> anyhow::Result<Registry> {
    let p = state_path()?;
    if !p.exists() {
        return Ok(Registry::new());
    }
    let raw = std::fs::read_to_string(p)?;
    let mut registry: Registry = serde_json::from_str(&raw)?;
    registry.normalize();
    Ok(registry)
}

pub fn save_registry(registry: &Registry) -> anyhow::Result<()> {
    let p = state_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, serde_json::to_string_pretty(registry)?)?;
    Ok(())
}

/// Best-effort action log; a failed write never fails the command.
pub fn audit(action: &str, data: serde_json::Value) {
    let path = match config_dir() {
        Ok(dir) => dir.join("audit.jsonl"),
        Err(_) => return,
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}
