//! Flat-file persistence for complaint records.
//!
//! RULE: only this module touches the backing file. The store is the
//! single writer and the single source of truth for the record set; no
//! other component caches or shadows record state.
//!
//! Every append rewrites the complete set through a temp-file rename, so
//! the durable copy is always a consistent full snapshot and a reload
//! never observes a partially written record. Full-set overwrite is the
//! documented contract here; the expected record volume is small, and
//! the strategy is not safe under concurrent writers from independent
//! processes.

use crate::config::IntakeMode;
use crate::error::{IntakeError, IntakeResult};
use crate::record::{Batch, Category, ComplaintRecord, Priority, Status, DATE_FORMAT};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ComplaintStore {
    path: PathBuf,
    mode: IntakeMode,
    records: Vec<ComplaintRecord>,
}

impl ComplaintStore {
    /// Open a store over `path`, reading any existing record set. A
    /// missing file is the expected first-run state and loads empty.
    pub fn open(path: impl Into<PathBuf>, mode: IntakeMode) -> IntakeResult<Self> {
        let path = path.into();
        let records = read_all(&path, mode)?;
        log::debug!(
            "opened store at {} ({} records, {mode:?})",
            path.display(),
            records.len()
        );
        Ok(Self {
            path,
            mode,
            records,
        })
    }

    /// All persisted records, in insertion order.
    pub fn records(&self) -> &[ComplaintRecord] {
        &self.records
    }

    /// Exact, case-sensitive scan for a ticket id.
    pub fn find(&self, id: &str) -> Option<&ComplaintRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Append `record` and durably rewrite the full set. The in-memory
    /// set is only updated after the rename lands, so a failed write
    /// leaves both copies without the record.
    pub fn append_and_persist(&mut self, record: ComplaintRecord) -> IntakeResult<()> {
        self.write_all_plus(&record)?;
        self.records.push(record);
        Ok(())
    }

    /// Re-read the record set from disk, replacing the in-memory copy.
    pub fn reload(&mut self) -> IntakeResult<()> {
        self.records = read_all(&self.path, self.mode)?;
        Ok(())
    }

    fn write_all_plus(&self, extra: &ComplaintRecord) -> IntakeResult<()> {
        let tmp = self.path.with_extension("csv.tmp");
        {
            let mut writer = csv::Writer::from_path(&tmp)?;
            for record in self.records.iter().chain(std::iter::once(extra)) {
                match self.mode {
                    IntakeMode::Inferred => writer.serialize(InferredRow::from_record(record))?,
                    IntakeMode::FixedChoice => writer.serialize(FixedRow::from_record(record))?,
                }
            }
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn read_all(path: &Path, mode: IntakeMode) -> IntakeResult<Vec<ComplaintRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut reader = csv::Reader::from_path(path)?;
    match mode {
        IntakeMode::Inferred => reader
            .deserialize::<InferredRow>()
            .map(|row| row?.into_record())
            .collect(),
        IntakeMode::FixedChoice => reader
            .deserialize::<FixedRow>()
            .map(|row| row?.into_record())
            .collect(),
    }
}

// ── Row mapping ──────────────────────────────────────────────────────
//
// One row struct per deployment variant: the column set is the wire
// contract, the domain record is shared. Mirrors the single place where
// storage rows become ComplaintRecords and back.

#[derive(Serialize, Deserialize)]
struct InferredRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Batch")]
    batch: String,
    #[serde(rename = "AI_Category")]
    category: String,
    #[serde(rename = "Urgency")]
    priority: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Serialize, Deserialize)]
struct FixedRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Batch")]
    batch: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Severity")]
    priority: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Status")]
    status: String,
}

impl InferredRow {
    fn from_record(r: &ComplaintRecord) -> Self {
        let (id, name, batch, category, priority, description, date, status) = row_fields(r);
        Self {
            id,
            name,
            batch,
            category,
            priority,
            description,
            date,
            status,
        }
    }

    fn into_record(self) -> IntakeResult<ComplaintRecord> {
        record_from_fields(
            self.id,
            self.name,
            self.batch,
            self.category,
            self.priority,
            self.description,
            self.date,
            self.status,
        )
    }
}

impl FixedRow {
    fn from_record(r: &ComplaintRecord) -> Self {
        let (id, name, batch, category, priority, description, date, status) = row_fields(r);
        Self {
            id,
            name,
            batch,
            category,
            priority,
            description,
            date,
            status,
        }
    }

    fn into_record(self) -> IntakeResult<ComplaintRecord> {
        record_from_fields(
            self.id,
            self.name,
            self.batch,
            self.category,
            self.priority,
            self.description,
            self.date,
            self.status,
        )
    }
}

type RowFields = (
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
);

fn row_fields(r: &ComplaintRecord) -> RowFields {
    (
        r.id.clone(),
        r.name.clone(),
        r.batch.to_string(),
        r.category.to_string(),
        r.priority.to_string(),
        r.description.clone(),
        r.created_at.format(DATE_FORMAT).to_string(),
        r.status.to_string(),
    )
}

#[allow(clippy::too_many_arguments)]
fn record_from_fields(
    id: String,
    name: String,
    batch: String,
    category: String,
    priority: String,
    description: String,
    date: String,
    status: String,
) -> IntakeResult<ComplaintRecord> {
    let created_at = NaiveDateTime::parse_from_str(&date, DATE_FORMAT)
        .map_err(|_| IntakeError::InvalidTimestamp { value: date })?;
    Ok(ComplaintRecord {
        id,
        name,
        batch: batch.parse::<Batch>()?,
        category: category.parse::<Category>()?,
        priority: priority.parse::<Priority>()?,
        description,
        created_at,
        status: status.parse::<Status>()?,
    })
}
