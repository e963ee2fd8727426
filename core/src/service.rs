//! Submission and lookup orchestration.
//!
//! Control flow for one submission: validate → ticket id → classify →
//! timestamp → append → persist. Validation failures fire before any id
//! is drawn or any state is touched, so a rejected submission leaves no
//! trace anywhere.

use crate::classifier::{self, Classification, Classifier};
use crate::config::IntakeConfig;
use crate::error::{IntakeError, IntakeResult};
use crate::record::{Batch, ComplaintRecord, Status};
use crate::store::ComplaintStore;
use crate::ticket::TicketIdGenerator;
use chrono::{Local, Timelike};

pub struct ComplaintService {
    store: ComplaintStore,
    classifier: Box<dyn Classifier>,
}

impl ComplaintService {
    pub fn new(store: ComplaintStore, classifier: Box<dyn Classifier>) -> Self {
        Self { store, classifier }
    }

    /// Open the configured backing file and wire the configured strategy.
    pub fn from_config(config: &IntakeConfig) -> IntakeResult<Self> {
        let store = ComplaintStore::open(&config.data_file, config.mode)?;
        Ok(Self::new(store, classifier::for_mode(config.mode)))
    }

    /// File a new complaint and return the fully populated record. On a
    /// storage failure the record is not submitted: the error surfaces
    /// and neither the in-memory set nor the file gains the record.
    pub fn submit(
        &mut self,
        name: &str,
        batch: &str,
        category_choice: Option<&str>,
        severity_choice: Option<&str>,
        description: &str,
    ) -> IntakeResult<ComplaintRecord> {
        if name.trim().is_empty() {
            return Err(IntakeError::EmptyField { field: "name" });
        }
        if description.trim().is_empty() {
            return Err(IntakeError::EmptyField { field: "description" });
        }

        let batch = batch.parse::<Batch>()?;
        let Classification { category, priority } =
            self.classifier
                .classify(description, category_choice, severity_choice)?;

        let now = Local::now().naive_local();
        // Persisted format carries second precision; truncate here so the
        // record returned to the caller compares equal after a reload.
        let created_at = now.with_nanosecond(0).unwrap_or(now);

        let record = ComplaintRecord {
            id: TicketIdGenerator::new_id(),
            name: name.to_string(),
            batch,
            category,
            priority,
            description: description.to_string(),
            created_at,
            status: Status::Submitted,
        };

        self.store.append_and_persist(record.clone())?;
        log::info!(
            "complaint {} filed via {} as {}/{}",
            record.id,
            self.classifier.name(),
            record.category,
            record.priority
        );
        Ok(record)
    }

    /// Exact-string lookup by ticket id. `None` is the not-found signal,
    /// a normal negative result, not an error.
    pub fn lookup(&self, ticket_id: &str) -> Option<&ComplaintRecord> {
        self.store.find(ticket_id)
    }

    /// The full record set, for aggregation consumers. This core computes
    /// no aggregates itself.
    pub fn all_records(&self) -> &[ComplaintRecord] {
        self.store.records()
    }
}
