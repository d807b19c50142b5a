//! Partial update planning
//!
//! An update request carries the song identity plus any subset of the
//! mutable fields. Only fields with a value are written; absent or empty
//! fields leave the stored column untouched. `updated_at` is always bumped.

use chrono::{DateTime, NaiveDate, Utc};
use songlib_common::{Error, Result, Song};

/// One column assignment in an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Link(String),
    ReleaseDate(NaiveDate),
    Text(String),
}

impl Assignment {
    /// Column written by this assignment
    pub fn column(&self) -> &'static str {
        match self {
            Assignment::Link(_) => "link",
            Assignment::ReleaseDate(_) => "release_date",
            Assignment::Text(_) => "text",
        }
    }
}

/// Resolved update for a single song row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    pub group_name: String,
    pub song_name: String,
    pub assignments: Vec<Assignment>,
    pub updated_at: DateTime<Utc>,
}

/// Build the update plan for `song`
///
/// Fails with [`Error::InvalidInput`] when the identity is incomplete and
/// with [`Error::NoFieldsToUpdate`] when no mutable field carries a value.
pub fn plan_update(song: &Song, now: DateTime<Utc>) -> Result<UpdatePlan> {
    song.validate()?;

    let mut assignments = Vec::with_capacity(3);
    if let Some(link) = song.link.as_ref().filter(|l| !l.is_empty()) {
        assignments.push(Assignment::Link(link.clone()));
    }
    if let Some(date) = song.release_date {
        assignments.push(Assignment::ReleaseDate(date));
    }
    if let Some(text) = song.text.as_ref().filter(|t| !t.is_empty()) {
        assignments.push(Assignment::Text(text.clone()));
    }

    if assignments.is_empty() {
        return Err(Error::NoFieldsToUpdate);
    }

    Ok(UpdatePlan {
        group_name: song.group_name.clone(),
        song_name: song.song_name.clone(),
        assignments,
        updated_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_only_present_fields_are_assigned() {
        let mut song = Song::new("Muse", "Uprising");
        song.text = Some("new text".to_string());

        let plan = plan_update(&song, now()).unwrap();

        assert_eq!(plan.assignments, vec![Assignment::Text("new text".to_string())]);
        assert_eq!(plan.updated_at, now());
        assert_eq!(plan.group_name, "Muse");
        assert_eq!(plan.song_name, "Uprising");
    }

    #[test]
    fn test_all_fields_in_column_order() {
        let mut song = Song::new("Muse", "Uprising");
        song.text = Some("t".to_string());
        song.link = Some("l".to_string());
        song.release_date = NaiveDate::from_ymd_opt(2009, 9, 7);

        let plan = plan_update(&song, now()).unwrap();
        let columns: Vec<_> = plan.assignments.iter().map(Assignment::column).collect();

        assert_eq!(columns, vec!["link", "release_date", "text"]);
    }

    #[test]
    fn test_empty_strings_are_not_assignments() {
        let mut song = Song::new("Muse", "Uprising");
        song.text = Some(String::new());
        song.link = Some(String::new());

        let err = plan_update(&song, now()).unwrap_err();
        assert!(matches!(err, Error::NoFieldsToUpdate));
    }

    #[test]
    fn test_missing_identity_is_rejected() {
        let mut song = Song::new("", "Uprising");
        song.text = Some("t".to_string());

        let err = plan_update(&song, now()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
