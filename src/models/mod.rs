pub mod record;

pub use record::{OvertimeRecord, RecordDraft};
