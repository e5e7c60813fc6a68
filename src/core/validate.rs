//! Record validation. Pure, no I/O: rules run in a fixed order and the
//! first failure wins.

use crate::models::RecordDraft;
use thiserror::Error;

pub const MAX_DESCRIPTION_CHARS: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Technician is not in the configured roster")]
    UnknownTechnician,

    #[error("Description is longer than {MAX_DESCRIPTION_CHARS} characters")]
    DescriptionTooLong,

    #[error("Start time must be before end time")]
    InvalidTimeRange,
}

/// Policy knobs come from the configuration file, so drifting hardcoded
/// rosters and per-variant strictness collapse into one place.
#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    pub roster: Vec<String>,
    pub enforce_roster: bool,
    pub require_description: bool,
}

impl ValidationPolicy {
    pub fn validate(&self, draft: &RecordDraft) -> Result<(), ValidationError> {
        if draft.technician.trim().is_empty() {
            return Err(ValidationError::MissingField("technician"));
        }
        let start = draft
            .start
            .ok_or(ValidationError::MissingField("start"))?;
        let end = draft.end.ok_or(ValidationError::MissingField("end"))?;

        if self.require_description && draft.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description"));
        }

        if self.enforce_roster && !self.roster.iter().any(|t| t == &draft.technician) {
            return Err(ValidationError::UnknownTechnician);
        }

        if draft.description.chars().count() > MAX_DESCRIPTION_CHARS {
            return Err(ValidationError::DescriptionTooLong);
        }

        if start >= end {
            return Err(ValidationError::InvalidTimeRange);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn policy() -> ValidationPolicy {
        ValidationPolicy {
            roster: vec!["Ana".into(), "Luis".into()],
            enforce_roster: true,
            require_description: false,
        }
    }

    fn draft(tech: &str, start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> RecordDraft {
        RecordDraft {
            technician: tech.to_string(),
            start,
            end,
            description: String::new(),
        }
    }

    #[test]
    fn accepts_valid_record() {
        let d = draft("Ana", Some(ts(8, 0)), Some(ts(10, 30)));
        assert_eq!(policy().validate(&d), Ok(()));
    }

    #[test]
    fn missing_fields_win_over_everything() {
        let d = draft("", Some(ts(8, 0)), Some(ts(7, 0)));
        assert_eq!(
            policy().validate(&d),
            Err(ValidationError::MissingField("technician"))
        );

        let d = draft("Ana", None, Some(ts(7, 0)));
        assert_eq!(
            policy().validate(&d),
            Err(ValidationError::MissingField("start"))
        );

        let d = draft("Ana", Some(ts(8, 0)), None);
        assert_eq!(
            policy().validate(&d),
            Err(ValidationError::MissingField("end"))
        );
    }

    #[test]
    fn required_description_must_be_non_blank() {
        let mut p = policy();
        p.require_description = true;
        let mut d = draft("Ana", Some(ts(8, 0)), Some(ts(9, 0)));
        d.description = "   ".to_string();
        assert_eq!(
            p.validate(&d),
            Err(ValidationError::MissingField("description"))
        );
    }

    #[test]
    fn roster_enforcement_is_optional() {
        let d = draft("Nobody", Some(ts(8, 0)), Some(ts(9, 0)));
        assert_eq!(policy().validate(&d), Err(ValidationError::UnknownTechnician));

        let mut relaxed = policy();
        relaxed.enforce_roster = false;
        assert_eq!(relaxed.validate(&d), Ok(()));
    }

    #[test]
    fn description_boundary_is_100_chars() {
        let mut d = draft("Ana", Some(ts(8, 0)), Some(ts(9, 0)));
        d.description = "x".repeat(100);
        assert_eq!(policy().validate(&d), Ok(()));

        d.description = "x".repeat(101);
        assert_eq!(
            policy().validate(&d),
            Err(ValidationError::DescriptionTooLong)
        );
    }

    #[test]
    fn rejects_inverted_or_empty_range() {
        let d = draft("Ana", Some(ts(10, 0)), Some(ts(9, 0)));
        assert_eq!(policy().validate(&d), Err(ValidationError::InvalidTimeRange));

        let d = draft("Ana", Some(ts(9, 0)), Some(ts(9, 0)));
        assert_eq!(policy().validate(&d), Err(ValidationError::InvalidTimeRange));
    }
}
