use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_BUSINESS_NAME: &str = "Your Business Name";

/// One entry in the fixed ISO 27001:2022 control catalog.
pub struct ControlSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub guidance: &'static str,
}

pub const CATALOG: &[ControlSpec] = &[
    ControlSpec {
        id: "A.5.1",
        title: "Policies for information security",
        guidance: "Ensure your organization has policies in place for managing information security. The policies should define the scope and objectives of information security.",
    },
    ControlSpec {
        id: "A.5.2",
        title: "Review of policies for information security",
        guidance: "Regular reviews should be conducted to ensure the policies are still applicable and effective.",
    },
    ControlSpec {
        id: "A.6.1",
        title: "Organization of information security roles",
        guidance: "Designate roles and responsibilities for information security within your organization.",
    },
    ControlSpec {
        id: "A.6.2",
        title: "Segregation of duties",
        guidance: "Make sure duties are divided in such a way that no individual has control over all aspects of any critical task.",
    },
    ControlSpec {
        id: "A.7.1",
        title: "Screening and recruitment",
        guidance: "Screen and verify employees, contractors, and third-party users before they access sensitive information.",
    },
    ControlSpec {
        id: "A.7.2",
        title: "Termination and change of employment",
        guidance: "Implement processes to ensure proper management of employees leaving or transitioning within the organization.",
    },
];

pub fn catalog_control(id: &str) -> Option<&'static ControlSpec> {
    CATALOG.iter().find(|c| c.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Status {
    #[serde(rename = "Not Assessed")]
    NotAssessed,
    Compliant,
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
    #[serde(rename = "Partially Compliant")]
    PartiallyCompliant,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotAssessed => "Not Assessed",
            Status::Compliant => "Compliant",
            Status::NonCompliant => "Non-Compliant",
            Status::PartiallyCompliant => "Partially Compliant",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub status: Status,
    #[serde(default)]
    pub notes: String,
}

impl Default for Record {
    fn default() -> Self {
        Record {
            status: Status::NotAssessed,
            notes: String::new(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    #[error("control '{0}' does not exist")]
    UnknownControl(String),
    #[error("business name cannot be empty")]
    EmptyBusinessName,
}

/// In-memory compliance log: one record per catalog control, plus the
/// business name the export is issued for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default = "default_business_name")]
    business_name: String,
    #[serde(default)]
    log: BTreeMap<String, Record>,
}

fn default_business_name() -> String {
    DEFAULT_BUSINESS_NAME.to_string()
}

impl Default for Registry {
    fn default() -> Self {
        let mut r = Registry {
            business_name: default_business_name(),
            log: BTreeMap::new(),
        };
        r.normalize();
        r
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-align the log with the catalog: drop unknown identifiers,
    /// create missing records as Not Assessed. Deserialized registries
    /// must pass through here before use.
    pub fn normalize(&mut self) {
        self.log.retain(|id, _| catalog_control(id).is_some());
        for c in CATALOG {
            self.log.entry(c.id.to_string()).or_default();
        }
        if self.business_name.trim().is_empty() {
            self.business_name = default_business_name();
        }
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn set_business_name(&mut self, name: &str) -> Result<(), RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyBusinessName);
        }
        self.business_name = name.to_string();
        Ok(())
    }

    pub fn log_compliance(
        &mut self,
        control: &str,
        status: Status,
        notes: &str,
    ) -> Result<(), RegistryError> {
        let record = self
            .log
            .get_mut(control)
            .ok_or_else(|| RegistryError::UnknownControl(control.to_string()))?;
        record.status = status;
        record.notes = notes.to_string();
        Ok(())
    }

    pub fn records(&self) -> &BTreeMap<String, Record> {
        &self.log
    }

    /// Records whose status is anything but Compliant, Not Assessed included.
    pub fn incomplete(&self) -> BTreeMap<String, Record> {
        self.log
            .iter()
            .filter(|(_, r)| r.status != Status::Compliant)
            .map(|(id, r)| (id.clone(), r.clone()))
            .collect()
    }

    /// Compliant controls as a percentage of the whole catalog.
    pub fn progress(&self) -> f64 {
        let compliant = self
            .log
            .values()
            .filter(|r| r.status == Status::Compliant)
            .count();
        (compliant as f64 / CATALOG.len() as f64) * 100.0
    }

    pub fn compliant_count(&self) -> usize {
        self.log
            .values()
            .filter(|r| r.status == Status::Compliant)
            .count()
    }

    pub fn reset(&mut self) {
        for record in self.log.values_mut() {
            *record = Record::default();
        }
    }
}
