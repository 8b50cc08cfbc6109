use crate::cli::{Cli, Commands};
use crate::domain::models::{
    CatalogItem, ExportReport, GuideItem, JsonOut, LogReport, ProgressReport, RecordView,
};
use crate::registry::{catalog_control, Registry, RegistryError, CATALOG};
use crate::services::config::ConfigFile;
use crate::services::export::{build_export_document, export_path, write_export};
use crate::services::output::{print_one, print_out};
use crate::services::storage::{audit, save_registry};

pub fn handle_checklist_commands(
    cli: &Cli,
    registry: &mut Registry,
    config: &ConfigFile,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Catalog => {
            let items: Vec<CatalogItem> = CATALOG
                .iter()
                .map(|c| CatalogItem {
                    control: c.id.to_string(),
                    title: c.title.to_string(),
                })
                .collect();
            print_out(cli.json, &items, |c| format!("{}\t{}", c.control, c.title))?;
        }
        Commands::List => {
            let rows: Vec<RecordView> = registry
                .records()
                .iter()
                .map(|(id, r)| RecordView {
                    control: id.clone(),
                    status: r.status,
                    notes: r.notes.clone(),
                })
                .collect();
            print_out(cli.json, &rows, |r| {
                format!("{}\t{}\t{}", r.control, r.status, r.notes)
            })?;
        }
        Commands::Log {
            control,
            status,
            notes,
        } => {
            registry.log_compliance(control, *status, notes)?;
            save_registry(registry)?;
            audit(
                "log",
                serde_json::json!({"control": control, "status": status.as_str()}),
            );
            let report = LogReport {
                control: control.clone(),
                status: *status,
            };
            print_one(cli.json, report, |r| {
                format!("compliance logged for '{}' as '{}'", r.control, r.status)
            })?;
        }
        Commands::Incomplete => {
            let rows: Vec<RecordView> = registry
                .incomplete()
                .into_iter()
                .map(|(id, r)| RecordView {
                    control: id,
                    status: r.status,
                    notes: r.notes,
                })
                .collect();
            print_out(cli.json, &rows, |r| {
                format!("{}\t{}\t{}", r.control, r.status, r.notes)
            })?;
        }
        Commands::Progress => {
            let report = ProgressReport {
                compliant: registry.compliant_count(),
                total: CATALOG.len(),
                percent: registry.progress(),
            };
            print_one(cli.json, report, |p| format!("{:.2}%", p.percent))?;
        }
        Commands::Export { out } => {
            let path = export_path(out.as_deref(), config);
            let document = build_export_document(registry);
            write_export(&document, &path)?;
            audit(
                "export",
                serde_json::json!({"path": path.display().to_string()}),
            );
            let report = ExportReport {
                path: path.display().to_string(),
                exported: document.incomplete_controls.len(),
            };
            print_one(cli.json, report, |r| {
                format!("exported {} incomplete controls to {}", r.exported, r.path)
            })?;
        }
        Commands::Guide { control } => {
            let items: Vec<GuideItem> = match control {
                Some(id) => {
                    let c = catalog_control(id)
                        .ok_or_else(|| RegistryError::UnknownControl(id.clone()))?;
                    vec![GuideItem {
                        control: c.id.to_string(),
                        title: c.title.to_string(),
                        guidance: c.guidance.to_string(),
                    }]
                }
                None => CATALOG
                    .iter()
                    .map(|c| GuideItem {
                        control: c.id.to_string(),
                        title: c.title.to_string(),
                        guidance: c.guidance.to_string(),
                    })
                    .collect(),
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: items
                    })?
                );
            } else {
                for g in items {
                    println!("{} - {}", g.control, g.title);
                    println!("  {}", g.guidance);
                    println!();
                }
            }
        }
        _ => return Ok(false),
    }

    Ok(true)
}
