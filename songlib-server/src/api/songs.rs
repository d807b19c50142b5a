//! Single-song endpoints
//!
//! `GET`, `POST`, `PATCH`/`PUT` and `DELETE` on `/song`.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use songlib_common::Song;
use tracing::{debug, info};

use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::merge::plan_update;
use crate::verses::{paginate, parse_page_param, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::AppState;

/// Query parameters for `GET /song`
///
/// `page` and `size` stay strings so bad values fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct SongQuery {
    pub group: Option<String>,
    pub song: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

/// A song with one page of its verses
#[derive(Debug, Serialize)]
pub struct SongPage {
    pub group: String,
    pub song: String,
    #[serde(serialize_with = "songlib_common::release_date::optional::serialize")]
    pub release_date: Option<NaiveDate>,
    pub link: Option<String>,
    pub verses: Vec<String>,
    pub total_verses: usize,
    pub page: usize,
    pub size: usize,
}

fn required<'a>(value: &'a Option<String>, name: &str) -> ApiResult<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("{} is required", name)))
}

/// GET /song?group=..&song=..&page=..&size=..
pub async fn get_song(
    State(state): State<AppState>,
    Query(query): Query<SongQuery>,
) -> ApiResult<Json<SongPage>> {
    let group = required(&query.group, "group")?;
    let name = required(&query.song, "song")?;
    let page = parse_page_param(query.page.as_deref(), DEFAULT_PAGE);
    let size = parse_page_param(query.size.as_deref(), DEFAULT_PAGE_SIZE);

    let song = db::get_song(&state.db, group, name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("song '{}' by '{}'", name, group)))?;

    let text = song.text.as_deref().unwrap_or_default();
    let window = paginate(text, page, size);
    debug!(group = %group, song = %name, page, size, total = window.total, "Serving verses");

    Ok(Json(SongPage {
        verses: window.verses.iter().map(|v| v.to_string()).collect(),
        total_verses: window.total,
        page: window.page,
        size: window.size,
        group: song.group_name,
        song: song.song_name,
        release_date: song.release_date,
        link: song.link,
    }))
}

/// POST /song
///
/// Looks the song up on the info service first, then inserts it. A song
/// that already exists is returned unchanged with 200.
pub async fn add_song(
    State(state): State<AppState>,
    payload: Result<Json<Song>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(mut song) = payload?;
    song.validate()?;

    let detail = state
        .lyrics
        .fetch_song_details(&song.group_name, &song.song_name)
        .await?;
    detail.enrich(&mut song);

    if db::insert_song(&state.db, &song, Utc::now()).await? {
        info!(group = %song.group_name, song = %song.song_name, "Song added");
        return Ok((StatusCode::CREATED, Json(song)).into_response());
    }

    debug!(group = %song.group_name, song = %song.song_name, "Song already in library");
    // The conflicting row may have been deleted since the insert
    let stored = db::get_song(&state.db, &song.group_name, &song.song_name)
        .await?
        .unwrap_or(song);

    Ok((StatusCode::OK, Json(stored)).into_response())
}

/// PATCH|PUT /song
///
/// Writes only the fields present in the body and returns the merged row.
pub async fn update_song(
    State(state): State<AppState>,
    payload: Result<Json<Song>, JsonRejection>,
) -> ApiResult<Json<Song>> {
    let Json(song) = payload?;
    let plan = plan_update(&song, Utc::now())?;

    if db::update_song(&state.db, &plan).await? == 0 {
        return Err(ApiError::NotFound(format!(
            "song '{}' by '{}'",
            plan.song_name, plan.group_name
        )));
    }

    let columns: Vec<_> = plan.assignments.iter().map(|a| a.column()).collect();
    info!(group = %plan.group_name, song = %plan.song_name, ?columns, "Song updated");

    db::get_song(&state.db, &plan.group_name, &plan.song_name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("song '{}' by '{}'", plan.song_name, plan.group_name)))
}

/// Body of `DELETE /song`; other song fields are ignored
#[derive(Debug, Deserialize)]
pub struct SongKey {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub song: String,
}

/// DELETE /song
///
/// Deleting a song that does not exist still succeeds.
pub async fn delete_song(
    State(state): State<AppState>,
    payload: Result<Json<SongKey>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(key) = payload?;
    if key.group.is_empty() || key.song.is_empty() {
        return Err(ApiError::BadRequest("group and song are required".to_string()));
    }

    let removed = db::delete_song(&state.db, &key.group, &key.song).await?;
    info!(group = %key.group, song = %key.song, removed, "Song deleted");

    Ok(StatusCode::NO_CONTENT)
}
