//! Song library domain model

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

/// A song in the library
///
/// Identity is `(group_name, song_name)`. Both are required and the song
/// name never changes once the row exists; groups are renamed as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    #[serde(rename = "group", default)]
    pub group_name: String,

    #[serde(rename = "song", default)]
    pub song_name: String,

    /// Release date, `DD.MM.YYYY` on the wire
    #[serde(
        default,
        with = "crate::release_date::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_date: Option<NaiveDate>,

    /// Lyrics, verses separated by a blank line
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,

    /// External link (e.g. a video URL)
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
}

impl Song {
    pub fn new(group_name: impl Into<String>, song_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            song_name: song_name.into(),
            ..Default::default()
        }
    }

    /// Check that both identity fields are present
    pub fn validate(&self) -> Result<()> {
        if self.group_name.is_empty() {
            return Err(Error::InvalidInput("group is required".to_string()));
        }
        if self.song_name.is_empty() {
            return Err(Error::InvalidInput("song is required".to_string()));
        }
        Ok(())
    }
}

/// Library listing filter
///
/// `None` means "no constraint on this field". Pagination applies only when
/// `limit` is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter {
    pub group_name: Option<String>,
    pub song_name: Option<String>,
    /// Substring of the lyrics
    pub text: Option<String>,
    pub link: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl SongFilter {
    pub fn by_group(group_name: impl Into<String>) -> Self {
        Self {
            group_name: Some(group_name.into()),
            ..Default::default()
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_song() {
        let song: Song = serde_json::from_value(json!({
            "group": "Muse",
            "song": "Supermassive Black Hole",
            "release_date": "16.07.2006",
            "text": "Ooh baby, don't you know I suffer?",
            "link": "https://www.youtube.com/watch?v=Xsp3_a-PMTw"
        }))
        .unwrap();

        assert_eq!(song.group_name, "Muse");
        assert_eq!(song.song_name, "Supermassive Black Hole");
        assert_eq!(song.release_date, NaiveDate::from_ymd_opt(2006, 7, 16));
        assert!(song.text.is_some());
        assert!(song.link.is_some());
    }

    #[test]
    fn test_empty_optional_fields_become_none() {
        let song: Song = serde_json::from_value(json!({
            "group": "Muse",
            "song": "Uprising",
            "release_date": "",
            "text": "",
            "link": ""
        }))
        .unwrap();

        assert_eq!(song.release_date, None);
        assert_eq!(song.text, None);
        assert_eq!(song.link, None);
    }

    #[test]
    fn test_malformed_date_rejected() {
        let result: std::result::Result<Song, _> = serde_json::from_value(json!({
            "group": "Muse",
            "song": "Uprising",
            "release_date": "2009-09-07"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_wire_names_and_date_format() {
        let mut song = Song::new("Buku", "Front to Back");
        song.release_date = NaiveDate::from_ymd_opt(2016, 8, 30);

        let value = serde_json::to_value(&song).unwrap();
        assert_eq!(value["group"], "Buku");
        assert_eq!(value["song"], "Front to Back");
        assert_eq!(value["release_date"], "30.08.2016");
        assert!(value.get("text").is_none());
        assert!(value.get("link").is_none());
    }

    #[test]
    fn test_validate_requires_identity() {
        assert!(Song::new("Muse", "Uprising").validate().is_ok());
        assert!(matches!(
            Song::new("", "Uprising").validate(),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            Song::new("Muse", "").validate(),
            Err(Error::InvalidInput(_))
        ));
    }
}
