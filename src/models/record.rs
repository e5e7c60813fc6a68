//! Overtime record models.
//! Timestamps are always UTC at minute precision; display conversion
//! happens only at the CLI/export boundary (see utils::time).

use chrono::NaiveDateTime;
use serde::Serialize;

/// One persisted work session.
#[derive(Debug, Clone, Serialize)]
pub struct OvertimeRecord {
    pub id: i64,               // ⇔ overtime_records.id (INTEGER PRIMARY KEY)
    pub technician: String,    // ⇔ overtime_records.technician (TEXT)
    pub start: NaiveDateTime,  // ⇔ overtime_records.start_time (TEXT "YYYY-MM-DD HH:MM", UTC)
    pub end: NaiveDateTime,    // ⇔ overtime_records.end_time (TEXT "YYYY-MM-DD HH:MM", UTC)
    pub description: String,   // ⇔ overtime_records.work_description (TEXT, may be empty)
}

impl OvertimeRecord {
    /// Draft carrying this record's fields, used to seed an edit.
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            technician: self.technician.clone(),
            start: Some(self.start),
            end: Some(self.end),
            description: self.description.clone(),
        }
    }
}

/// Candidate record before the store assigns an id.
/// Start/end are optional so the validator can report missing fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDraft {
    pub technician: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub description: String,
}
