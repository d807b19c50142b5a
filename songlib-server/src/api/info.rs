//! Canned song info endpoint
//!
//! Answers the same `/info` contract the lookup client consumes, so a local
//! instance can enrich songs against itself.

use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::services::SongDetail;

#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    pub group: Option<String>,
    pub song: Option<String>,
}

/// GET /info?group=..&song=..
pub async fn song_info(Query(query): Query<InfoQuery>) -> ApiResult<Json<SongDetail>> {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
    if !present(&query.group) || !present(&query.song) {
        return Err(ApiError::BadRequest("group and song are required".to_string()));
    }

    Ok(Json(SongDetail {
        link: "https://www.youtube.com/watch?v=Xsp3_a-PMTw".to_string(),
        release_date: "16.07.2006".to_string(),
        text: "Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?".to_string(),
    }))
}
