//! HTTP API handlers

mod groups;
mod health;
mod info;
mod library;
mod songs;

pub use groups::{rename_group, RenameGroupRequest};
pub use health::{health_check, health_routes, HealthResponse};
pub use info::song_info;
pub use library::{list_library, LibraryParams};
pub use songs::{add_song, delete_song, get_song, update_song, SongKey, SongPage, SongQuery};
