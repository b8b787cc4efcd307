//! The interactive session: menu loop, per-kind update procedure, and the
//! date-entry retry loop.
//!
//! All terminal I/O goes through the generic reader/writer pair so the
//! whole loop runs against cursors in tests.

use anyhow::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

use homemaint_core::{CatalogEntry, TaskKind, TaskRecord, catalog_entry};
use homemaint_core::{format_service_date, parse_service_date};

pub struct Session<R, W> {
    input: R,
    output: W,
    records: Vec<TaskRecord>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, records: Vec<TaskRecord>) -> Self {
        Self {
            input,
            output,
            records,
        }
    }

    /// Run until `exit` (or end of input), then hand the records back for
    /// the single save at shutdown.
    pub fn run(mut self) -> Result<Vec<TaskRecord>> {
        writeln!(self.output, "Welcome to the home maintenance reminder")?;
        writeln!(self.output, "What item would you like to enter?")?;

        loop {
            writeln!(
                self.output,
                "Type \"furnace\", \"fridge\", \"detector\", or \"dryer\""
            )?;
            writeln!(
                self.output,
                "or type \"view\" to view all due dates or \"exit\" to save and exit the program"
            )?;

            let command = match self.read_line()? {
                Some(line) => line.to_lowercase(),
                // EOF saves and exits like an explicit "exit"
                None => break,
            };

            if command == "exit" {
                break;
            }

            if let Some(kind) = TaskKind::from_keyword(&command) {
                self.update(kind)?;
            } else if command == "view" {
                for r in &self.records {
                    writeln!(self.output, "{} is due {}", r.kind.name(), r.due_display())?;
                }
            } else {
                writeln!(self.output, "Invalid input, please try again.")?;
            }
        }

        Ok(self.records)
    }

    /// Update procedure for one kind. A never-serviced record goes
    /// straight to date entry; a serviced one is gated behind a yes/no
    /// confirmation and stays untouched on "no".
    fn update(&mut self, kind: TaskKind) -> Result<()> {
        let entry = catalog_entry(kind);
        let idx = self.record_index(kind);

        if !self.records[idx].is_serviced() {
            return self.complete_service(idx, entry);
        }

        writeln!(
            self.output,
            "The {} is due on {}",
            kind.name(),
            self.records[idx].due_display()
        )?;

        match self.confirm_serviced()? {
            Some(true) => self.complete_service(idx, entry)?,
            Some(false) => {
                writeln!(self.output, "Service for {} is still pending.", kind.name())?;
            }
            // EOF mid-question: abandon the update
            None => {}
        }

        Ok(())
    }

    fn record_index(&mut self, kind: TaskKind) -> usize {
        match self.records.iter().position(|r| r.kind == kind) {
            Some(i) => i,
            None => {
                // A hand-edited store can miss a kind; grow instead of
                // failing the session.
                self.records.push(TaskRecord::fresh(kind));
                self.records.len() - 1
            }
        }
    }

    fn complete_service(&mut self, idx: usize, entry: &CatalogEntry) -> Result<()> {
        writeln!(self.output, "{}", entry.completion_prompt)?;
        let done = match self.prompt_service_date()? {
            Some(d) => d,
            None => return Ok(()),
        };
        let due = self.records[idx].complete(done);
        writeln!(self.output, "{}{}", entry.due_notice, format_service_date(due))?;
        Ok(())
    }

    fn confirm_serviced(&mut self) -> Result<Option<bool>> {
        loop {
            writeln!(
                self.output,
                "Have you recently completed the service (yes/no): "
            )?;
            let answer = match self.read_line()? {
                Some(line) => line.to_lowercase(),
                None => return Ok(None),
            };
            match answer.as_str() {
                "yes" => return Ok(Some(true)),
                "no" => return Ok(Some(false)),
                _ => {
                    writeln!(self.output, "Invalid input. Please type \"yes\" or \"no\".")?;
                }
            }
        }
    }

    /// Iterative retry loop for the completion date; loops until a valid
    /// `YYYY/MM/DD` date or end of input.
    fn prompt_service_date(&mut self) -> Result<Option<NaiveDate>> {
        loop {
            writeln!(
                self.output,
                "Enter the date you completed the service: (YYYY/MM/DD)"
            )?;
            let line = match self.read_line()? {
                Some(l) => l,
                None => return Ok(None),
            };
            match parse_service_date(&line) {
                Ok(date) => return Ok(Some(date)),
                Err(_) => writeln!(self.output, "Incorrect format. Please try again")?,
            }
        }
    }

    /// One trimmed line of input, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}
