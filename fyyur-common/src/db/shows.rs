//! Show database operations

use sqlx::SqlitePool;
use tracing::info;

use super::models::{ShowInput, ShowListing};
use crate::time::{format_start_time, parse_start_time};
use crate::Result;

/// Insert a new show, returning its id.
///
/// The start time must match the storage format; it is normalized before
/// insert. Unknown artist or venue ids fail on the foreign key constraint.
pub async fn create_show(pool: &SqlitePool, input: &ShowInput) -> Result<i64> {
    let start_time = format_start_time(&parse_start_time(&input.start_time)?);

    let mut tx = pool.begin().await?;

    let id = sqlx::query(r#"INSERT INTO "Show" (start_time, artist_id, venue_id) VALUES (?, ?, ?)"#)
        .bind(&start_time)
        .bind(input.artist_id)
        .bind(input.venue_id)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    tx.commit().await?;
    info!(
        "Created show {} (artist {}, venue {}, {})",
        id, input.artist_id, input.venue_id, start_time
    );
    Ok(id)
}

/// Every show joined with its venue and artist, in id order
pub async fn list_show_feed(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query_as::<_, ShowListing>(
        r#"
        SELECT s.venue_id, v.name AS venue_name,
               s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
               s.start_time
        FROM "Show" s
        JOIN "Venue" v ON v.id = s.venue_id
        JOIN "Artist" a ON a.id = s.artist_id
        ORDER BY s.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Number of stored shows
pub async fn count_shows(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "Show""#)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
