use crate::registry::{Record, Status};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize, Clone)]
pub struct CatalogItem {
    pub control: String,
    pub title: String,
}

#[derive(Serialize, Clone)]
pub struct GuideItem {
    pub control: String,
    pub title: String,
    pub guidance: String,
}

#[derive(Serialize, Clone)]
pub struct RecordView {
    pub control: String,
    pub status: Status,
    pub notes: String,
}

#[derive(Serialize)]
pub struct LogReport {
    pub control: String,
    pub status: Status,
}

#[derive(Serialize)]
pub struct ProgressReport {
    pub compliant: usize,
    pub total: usize,
    pub percent: f64,
}

/// Contents of the exported file, as written to disk.
#[derive(Serialize)]
pub struct ExportDocument {
    pub business_name: String,
    pub timestamp: DateTime<Utc>,
    pub incomplete_controls: BTreeMap<String, Record>,
}

#[derive(Serialize)]
pub struct ExportReport {
    pub path: String,
    pub exported: usize,
}
