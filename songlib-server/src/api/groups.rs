//! Group rename endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RenameGroupRequest {
    #[serde(default)]
    pub old_name: String,
    #[serde(default)]
    pub new_name: String,
}

/// PATCH /renamegroup
///
/// Renames every song of `old_name`. No matching rows is not an error.
pub async fn rename_group(
    State(state): State<AppState>,
    payload: Result<Json<RenameGroupRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(req) = payload?;
    if req.old_name.is_empty() || req.new_name.is_empty() {
        return Err(ApiError::BadRequest(
            "old_name and new_name are required".to_string(),
        ));
    }

    let renamed = match db::rename_group(&state.db, &req.old_name, &req.new_name, Utc::now()).await
    {
        Ok(n) => n,
        Err(songlib_common::Error::Database(sqlx::Error::Database(e))) if e.is_unique_violation() => {
            return Err(ApiError::Conflict(format!(
                "group '{}' already has a song from '{}'",
                req.new_name, req.old_name
            )));
        }
        Err(e) => return Err(e.into()),
    };

    info!(old = %req.old_name, new = %req.new_name, renamed, "Group renamed");
    Ok(StatusCode::NO_CONTENT)
}
