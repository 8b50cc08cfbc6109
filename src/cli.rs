use crate::registry::Status;
use clap::{Parser, Subcommand};

pub const DEFAULT_EXPORT_FILE: &str = "incomplete_controls.json";

#[derive(Parser, Debug)]
#[command(name = "tanuki", version, about = "ISO 27001:2022 compliance checklist")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the control catalog (identifier and title)
    Catalog,
    /// List every control with its current status and notes
    List,
    /// Record a compliance decision for one control
    Log {
        control: String,
        #[arg(long, value_enum)]
        status: Status,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List controls that are not yet Compliant
    Incomplete,
    /// Show the compliance percentage
    Progress,
    /// Export incomplete controls to a JSON file
    Export {
        #[arg(long, help = "Destination path (defaults to incomplete_controls.json)")]
        out: Option<String>,
    },
    /// Print implementation guidance for one control or the whole catalog
    Guide { control: Option<String> },
    /// Show or change the business name
    Name {
        #[command(subcommand)]
        command: NameCommands,
    },
    /// Return every control to Not Assessed
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum NameCommands {
    Show,
    Set { name: String },
}
