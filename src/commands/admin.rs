use crate::cli::{Cli, Commands, NameCommands};
use crate::registry::Registry;
use crate::services::output::print_one;
use crate::services::storage::{audit, save_registry};

pub fn handle_admin_commands(cli: &Cli, registry: &mut Registry) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Name { command } => match command {
            NameCommands::Show => {
                print_one(cli.json, registry.business_name().to_string(), |n| {
                    n.clone()
                })?;
            }
            NameCommands::Set { name } => {
                registry.set_business_name(name)?;
                save_registry(registry)?;
                audit(
                    "name_set",
                    serde_json::json!({"name": registry.business_name()}),
                );
                print_one(cli.json, registry.business_name().to_string(), |n| {
                    format!("business name set to '{}'", n)
                })?;
            }
        },
        Commands::Reset => {
            registry.reset();
            save_registry(registry)?;
            audit("reset", serde_json::json!({}));
            print_one(cli.json, "reset", |_| {
                "all controls returned to Not Assessed".to_string()
            })?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}
