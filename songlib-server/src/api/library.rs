//! Library listing endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use songlib_common::{release_date, Song, SongFilter};
use tracing::debug;

use crate::db;
use crate::error::ApiResult;
use crate::query::LibraryQuery;
use crate::AppState;

/// Query parameters for `GET /library`
#[derive(Debug, Default, Deserialize)]
pub struct LibraryParams {
    pub group: Option<String>,
    pub song: Option<String>,
    pub text: Option<String>,
    pub link: Option<String>,
    /// `DD.MM.YYYY`
    pub release_date: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl LibraryParams {
    /// Convert to a filter
    ///
    /// Unparseable `limit`/`offset` are ignored; a malformed release date is
    /// rejected since silently dropping it would widen the result.
    pub fn into_filter(self) -> ApiResult<SongFilter> {
        fn number(raw: Option<String>) -> Option<i64> {
            raw.and_then(|v| v.trim().parse().ok())
        }

        let release_date = match self.release_date {
            Some(raw) => release_date::parse_optional(&raw)?,
            None => None,
        };

        Ok(SongFilter {
            group_name: self.group,
            song_name: self.song,
            text: self.text,
            link: self.link,
            release_date,
            limit: number(self.limit),
            offset: number(self.offset),
        })
    }
}

/// GET /library
pub async fn list_library(
    State(state): State<AppState>,
    Query(params): Query<LibraryParams>,
) -> ApiResult<Json<Vec<Song>>> {
    let filter = params.into_filter()?;
    let query = LibraryQuery::from_filter(&filter);

    let songs = db::list_songs(&state.db, &query).await?;
    debug!(
        predicates = query.predicates().len(),
        rows = songs.len(),
        "Library listed"
    );

    Ok(Json(songs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_bad_numbers_are_ignored() {
        let params = LibraryParams {
            limit: Some("ten".to_string()),
            offset: Some("5".to_string()),
            ..Default::default()
        };
        let filter = params.into_filter().unwrap();
        assert_eq!(filter.limit, None);
        assert_eq!(filter.offset, Some(5));
    }

    #[test]
    fn test_release_date_parsed() {
        let params = LibraryParams {
            release_date: Some("16.07.2006".to_string()),
            ..Default::default()
        };
        let filter = params.into_filter().unwrap();
        assert_eq!(filter.release_date, NaiveDate::from_ymd_opt(2006, 7, 16));
    }

    #[test]
    fn test_malformed_release_date_rejected() {
        let params = LibraryParams {
            release_date: Some("2006-07-16".to_string()),
            ..Default::default()
        };
        assert!(params.into_filter().is_err());
    }
}
