//! Library listing query
//!
//! [`LibraryQuery`] is the pure description of a listing: a conjunction of
//! predicates plus an optional page. It renders to a parameterized SQL
//! statement; user values are always bound, never spliced into the text.

use chrono::NaiveDate;
use songlib_common::SongFilter;
use sqlx::{QueryBuilder, Sqlite};

/// Columns returned by every song query, in `song_from_row` order
pub const SONG_COLUMNS: &str = "group_name, song, release_date, text, link";

/// A single listing constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    GroupEquals(String),
    SongEquals(String),
    ReleaseDateEquals(NaiveDate),
    LinkEquals(String),
    /// Case-sensitive substring match on the lyrics
    TextContains(String),
}

impl Predicate {
    fn push_to(&self, builder: &mut QueryBuilder<'static, Sqlite>) {
        match self {
            Predicate::GroupEquals(v) => {
                builder.push("group_name = ").push_bind(v.clone());
            }
            Predicate::SongEquals(v) => {
                builder.push("song = ").push_bind(v.clone());
            }
            Predicate::ReleaseDateEquals(d) => {
                builder.push("release_date = ").push_bind(*d);
            }
            Predicate::LinkEquals(v) => {
                builder.push("link = ").push_bind(v.clone());
            }
            Predicate::TextContains(v) => {
                builder.push("instr(text, ").push_bind(v.clone()).push(") > 0");
            }
        }
    }
}

/// LIMIT/OFFSET window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryQuery {
    predicates: Vec<Predicate>,
    page: Option<Page>,
}

impl LibraryQuery {
    /// Translate a filter into predicates
    ///
    /// Empty strings impose no constraint. A page is only applied when
    /// `limit` is positive; a negative offset is treated as zero.
    pub fn from_filter(filter: &SongFilter) -> Self {
        fn non_empty(value: &Option<String>) -> Option<String> {
            value.as_ref().filter(|v| !v.is_empty()).cloned()
        }

        let mut predicates = Vec::new();
        if let Some(v) = non_empty(&filter.group_name) {
            predicates.push(Predicate::GroupEquals(v));
        }
        if let Some(v) = non_empty(&filter.song_name) {
            predicates.push(Predicate::SongEquals(v));
        }
        if let Some(d) = filter.release_date {
            predicates.push(Predicate::ReleaseDateEquals(d));
        }
        if let Some(v) = non_empty(&filter.link) {
            predicates.push(Predicate::LinkEquals(v));
        }
        if let Some(v) = non_empty(&filter.text) {
            predicates.push(Predicate::TextContains(v));
        }

        let page = match filter.limit {
            Some(limit) if limit > 0 => Some(Page {
                limit,
                offset: filter.offset.unwrap_or(0).max(0),
            }),
            _ => None,
        };

        Self { predicates, page }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn page(&self) -> Option<Page> {
        self.page
    }

    /// Render as a SELECT over `songs_library`, ordered by insertion
    pub fn to_query_builder(&self) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new(format!("SELECT {} FROM songs_library", SONG_COLUMNS));

        for (i, predicate) in self.predicates.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_to(&mut builder);
        }

        builder.push(" ORDER BY id");

        if let Some(page) = self.page {
            builder
                .push(" LIMIT ")
                .push_bind(page.limit)
                .push(" OFFSET ")
                .push_bind(page.offset);
        }

        builder
    }
}
