//! External collaborators

pub mod lyrics_client;

pub use lyrics_client::{LyricsApiClient, LyricsApiError, SongDetail, SongInfoProvider};
