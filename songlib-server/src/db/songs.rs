//! `songs_library` queries
//!
//! Each function runs a single statement. Callers decide what a zero row
//! count means.

use chrono::{DateTime, NaiveDate, Utc};
use songlib_common::{Result, Song};
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use tracing::debug;

use crate::merge::{Assignment, UpdatePlan};
use crate::query::{LibraryQuery, SONG_COLUMNS};

/// Map a row selected with [`SONG_COLUMNS`]
pub fn song_from_row(row: &SqliteRow) -> Song {
    Song {
        group_name: row.get("group_name"),
        song_name: row.get("song"),
        release_date: row.get::<Option<NaiveDate>, _>("release_date"),
        text: row.get("text"),
        link: row.get("link"),
    }
}

/// Insert a song unless one with the same identity exists
///
/// Returns `true` when a row was written.
pub async fn insert_song(pool: &SqlitePool, song: &Song, now: DateTime<Utc>) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO songs_library (group_name, song, release_date, text, link, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT (group_name, song) DO NOTHING
        "#,
    )
    .bind(&song.group_name)
    .bind(&song.song_name)
    .bind(song.release_date)
    .bind(&song.text)
    .bind(&song.link)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}

pub async fn get_song(pool: &SqlitePool, group_name: &str, song_name: &str) -> Result<Option<Song>> {
    let row = sqlx::query(&format!(
        "SELECT {} FROM songs_library WHERE group_name = ? AND song = ?",
        SONG_COLUMNS
    ))
    .bind(group_name)
    .bind(song_name)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(song_from_row))
}

/// Apply a merge plan as one UPDATE statement
///
/// Returns the number of rows changed (0 or 1).
pub async fn update_song(pool: &SqlitePool, plan: &UpdatePlan) -> Result<u64> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE songs_library SET ");

    for assignment in &plan.assignments {
        builder.push(assignment.column()).push(" = ");
        match assignment {
            Assignment::Link(v) | Assignment::Text(v) => {
                builder.push_bind(v.as_str());
            }
            Assignment::ReleaseDate(d) => {
                builder.push_bind(*d);
            }
        }
        builder.push(", ");
    }

    builder
        .push("updated_at = ")
        .push_bind(plan.updated_at)
        .push(" WHERE group_name = ")
        .push_bind(plan.group_name.as_str())
        .push(" AND song = ")
        .push_bind(plan.song_name.as_str());

    debug!(sql = builder.sql(), "Updating song");

    let result = builder.build().execute(pool).await?;
    Ok(result.rows_affected())
}

/// Move every song of `old_name` to `new_name`
pub async fn rename_group(
    pool: &SqlitePool,
    old_name: &str,
    new_name: &str,
    now: DateTime<Utc>,
) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE songs_library SET group_name = ?, updated_at = ? WHERE group_name = ?",
    )
    .bind(new_name)
    .bind(now)
    .bind(old_name)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_song(pool: &SqlitePool, group_name: &str, song_name: &str) -> Result<u64> {
    let result = sqlx::query("DELETE FROM songs_library WHERE group_name = ? AND song = ?")
        .bind(group_name)
        .bind(song_name)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn list_songs(pool: &SqlitePool, query: &LibraryQuery) -> Result<Vec<Song>> {
    let mut builder = query.to_query_builder();
    let rows = builder.build().fetch_all(pool).await?;

    Ok(rows.iter().map(song_from_row).collect())
}
