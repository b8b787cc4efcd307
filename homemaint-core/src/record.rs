//! Task records: one per catalog kind, tracking the last service and the
//! computed next due date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{TaskKind, catalog_entry};
use crate::dates::due_after_months;

/// One maintenance record. Both dates `None` means the item has never
/// been serviced. If `last_completed` is set, `next_due` is set too and
/// equals it advanced by the kind's interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub kind: TaskKind,
    pub last_completed: Option<NaiveDate>,
    pub next_due: Option<NaiveDate>,
}

impl TaskRecord {
    pub fn fresh(kind: TaskKind) -> Self {
        Self {
            kind,
            last_completed: None,
            next_due: None,
        }
    }

    pub fn is_serviced(&self) -> bool {
        self.last_completed.is_some()
    }

    /// Record a completed service. Sets both fields together so the
    /// done/due pair can never go out of step.
    pub fn complete(&mut self, done: NaiveDate) -> NaiveDate {
        let due = due_after_months(done, catalog_entry(self.kind).interval_months);
        self.last_completed = Some(done);
        self.next_due = Some(due);
        due
    }

    /// Due date as shown to the user: `YYYY/MM/DD`, or empty when the
    /// item has never been serviced.
    pub fn due_display(&self) -> String {
        self.next_due
            .map(crate::dates::format_service_date)
            .unwrap_or_default()
    }
}

/// Seed records for a fresh store: one empty record per kind, in catalog
/// order.
pub fn default_records() -> Vec<TaskRecord> {
    TaskKind::ALL.into_iter().map(TaskRecord::fresh).collect()
}
