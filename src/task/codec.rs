//! CSV row codec for the task file
//!
//! The file is a header row followed by one `id,title,description,priority`
//! record per task. Loading is best-effort: a record that does not parse is
//! dropped and counted, it never aborts the load.

use std::collections::HashSet;
use std::io::{Read, Write};

use thiserror::Error;
use tracing::warn;

use super::model::{Priority, Task};

/// Header row written at the top of every task file
pub const HEADER: [&str; 4] = ["id", "title", "description", "priority"];

/// Why a single record was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {} fields, found {found}", HEADER.len())]
    FieldCount { found: usize },

    #[error("invalid task id: {value:?}")]
    InvalidId { value: String },
}

/// Result of reading a task file
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Tasks that parsed, in file order
    pub tasks: Vec<Task>,

    /// Number of records that were dropped
    pub skipped: usize,
}

/// Parse one record into a task
pub fn parse_row(fields: &[&str]) -> Result<Task, ParseError> {
    let [id, title, description, priority] = fields else {
        return Err(ParseError::FieldCount {
            found: fields.len(),
        });
    };

    // u64::MAX is reserved so the next id never overflows
    let id = match id.trim().parse::<u64>() {
        Ok(n) if n > 0 && n < u64::MAX => n,
        _ => {
            return Err(ParseError::InvalidId {
                value: id.to_string(),
            })
        }
    };

    Ok(Task::new(id, title, description, Priority::normalize(priority)))
}

/// Encode a task as a record in header order
pub fn to_record(task: &Task) -> [String; 4] {
    [
        task.id.to_string(),
        task.title.clone(),
        task.description.clone(),
        task.priority.label().to_string(),
    ]
}

/// Read every well-formed task from `reader`
///
/// The first record is the header and is never interpreted. Records that fail
/// `parse_row`, repeat an earlier id, or are not valid UTF-8 are skipped.
/// Only I/O failures of the underlying reader are returned as errors.
pub fn read_tasks<R: Read>(reader: R) -> Result<LoadReport, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut report = LoadReport::default();
    let mut seen = HashSet::new();

    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e),
            Err(e) => {
                warn!("Skipping unreadable task record: {}", e);
                report.skipped += 1;
                continue;
            }
        };

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let fields: Vec<&str> = record.iter().collect();

        match parse_row(&fields) {
            Ok(task) if !seen.insert(task.id) => {
                warn!("Skipping task record on line {}: duplicate id {}", line, task.id);
                report.skipped += 1;
            }
            Ok(task) => report.tasks.push(task),
            Err(e) => {
                warn!("Skipping task record on line {}: {}", line, e);
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Write the header and every task, in the order given
pub fn write_tasks<'a, W, I>(writer: W, tasks: I) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a Task>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for task in tasks {
        wtr.write_record(to_record(task))?;
    }
    wtr.flush()?;
    Ok(())
}
