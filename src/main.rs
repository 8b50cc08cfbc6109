use clap::Parser;

mod cli;
mod commands;
mod domain;
mod registry;
mod services;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = services::config::load_config()?;
    let mut registry = services::storage::load_registry()?;

    // A configured business name only applies while the registry still
    // carries the placeholder.
    if registry.business_name() == registry::DEFAULT_BUSINESS_NAME {
        if let Some(name) = &config.general.business_name {
            let _ = registry.set_business_name(name);
        }
    }

    if commands::handle_admin_commands(&cli, &mut registry)? {
        return Ok(());
    }
    commands::handle_checklist_commands(&cli, &mut registry, &config)?;

    Ok(())
}
