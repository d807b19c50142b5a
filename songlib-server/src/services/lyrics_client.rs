//! Song info lookup client
//!
//! New songs are enriched with link, release date and lyrics from an
//! external service answering `GET /info?group=..&song=..`. Handlers only see
//! the [`SongInfoProvider`] trait so tests can substitute a stub.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use songlib_common::{release_date, Song};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Lookup client errors
#[derive(Debug, Error)]
pub enum LyricsApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Unexpected status {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Lookup response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SongDetail {
    #[serde(default)]
    pub link: String,

    /// `DD.MM.YYYY`
    #[serde(rename = "releaseDate", default)]
    pub release_date: String,

    #[serde(default)]
    pub text: String,
}

impl SongDetail {
    /// Copy non-empty looked-up fields onto `song`
    ///
    /// Fields the lookup left empty keep whatever the caller supplied. A
    /// release date that does not parse is dropped with a warning.
    pub fn enrich(&self, song: &mut Song) {
        if !self.link.is_empty() {
            song.link = Some(self.link.clone());
        }
        if !self.text.is_empty() {
            song.text = Some(self.text.clone());
        }
        match release_date::parse_optional(&self.release_date) {
            Ok(Some(date)) => song.release_date = Some(date),
            Ok(None) => {}
            Err(e) => warn!(
                group = %song.group_name,
                song = %song.song_name,
                "Ignoring looked-up release date: {}", e
            ),
        }
    }
}

/// Source of song details for newly added songs
#[async_trait]
pub trait SongInfoProvider: Send + Sync {
    async fn fetch_song_details(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongDetail, LyricsApiError>;
}

/// HTTP client for the song info service
pub struct LyricsApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl LyricsApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LyricsApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LyricsApiError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn info_url(&self) -> String {
        format!("{}/info", self.base_url)
    }
}

#[async_trait]
impl SongInfoProvider for LyricsApiClient {
    async fn fetch_song_details(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongDetail, LyricsApiError> {
        let url = self.info_url();
        debug!(group = %group, song = %song, url = %url, "Querying song info service");

        let response = self
            .http_client
            .get(&url)
            .query(&[("group", group), ("song", song)])
            .send()
            .await
            .map_err(|e| LyricsApiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LyricsApiError::ApiError(status.as_u16(), error_text));
        }

        let detail: SongDetail = response
            .json()
            .await
            .map_err(|e| LyricsApiError::ParseError(e.to_string()))?;

        debug!(group = %group, song = %song, "Retrieved song info");
        Ok(detail)
    }
}
