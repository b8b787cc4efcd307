//! CSV persistence for task records.
//!
//! File format: UTF-8, header `type,done,due`, one row per catalog kind.
//! Empty date cells mean "never serviced". The file is read once at
//! startup and rewritten whole at exit.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::catalog::TaskKind;
use crate::dates::{format_service_date, parse_service_date};
use crate::record::TaskRecord;

const HEADERS: [&str; 3] = ["type", "done", "due"];

/// Read all records from `path`. A missing file is not an error: it loads
/// as an empty set and the caller seeds defaults. A present-but-corrupt
/// file (missing columns, unknown kind, bad date) is a hard failure.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<TaskRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut records: Vec<TaskRecord> = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = result.with_context(|| format!("reading {}", path.display()))?;
        let record = parse_row(&row)
            .with_context(|| format!("{}: malformed row {}", path.display(), i + 2))?;
        if records.iter().any(|r| r.kind == record.kind) {
            bail!(
                "{}: duplicate row for '{}'",
                path.display(),
                record.kind.name()
            );
        }
        records.push(record);
    }

    // A hand-edited file may shuffle rows; keep the set in catalog order.
    records.sort_by_key(|r| r.kind as usize);

    Ok(records)
}

fn parse_row(row: &csv::StringRecord) -> Result<TaskRecord> {
    let kind_cell = match row.get(0) {
        Some(s) => s.trim(),
        None => bail!("missing 'type' column"),
    };
    let kind = TaskKind::from_keyword(kind_cell)
        .ok_or_else(|| anyhow::anyhow!("unknown task kind '{kind_cell}'"))?;

    let done = parse_date_cell(row.get(1), "done")?;
    let due = parse_date_cell(row.get(2), "due")?;

    Ok(TaskRecord {
        kind,
        last_completed: done,
        next_due: due,
    })
}

fn parse_date_cell(cell: Option<&str>, column: &str) -> Result<Option<NaiveDate>> {
    let cell = match cell {
        Some(s) => s.trim(),
        None => bail!("missing '{column}' column"),
    };
    if cell.is_empty() {
        return Ok(None);
    }
    Ok(Some(parse_service_date(cell)?))
}

/// Overwrite `path` with the full record set, creating the parent
/// directory if needed. The file always gets exactly one row per kind in
/// catalog order; a kind absent from `records` is written unserviced.
pub fn save(path: impl AsRef<Path>, records: &[TaskRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }

    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("writing {}", path.display()))?;
    wtr.write_record(HEADERS)?;
    for kind in TaskKind::ALL {
        let record = records.iter().find(|r| r.kind == kind);
        let done = date_cell(record.and_then(|r| r.last_completed));
        let due = date_cell(record.and_then(|r| r.next_due));
        wtr.write_record([kind.name(), done.as_str(), due.as_str()])?;
    }
    wtr.flush()
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(())
}

fn date_cell(date: Option<NaiveDate>) -> String {
    date.map(format_service_date).unwrap_or_default()
}
