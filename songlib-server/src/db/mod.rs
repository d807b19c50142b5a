//! Storage access for the song library

pub mod songs;

pub use songs::{
    delete_song, get_song, insert_song, list_songs, rename_group, update_song,
};
