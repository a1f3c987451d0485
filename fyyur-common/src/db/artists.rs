//! Artist database operations

use sqlx::SqlitePool;
use tracing::info;

use super::models::{Artist, ArtistInput, ArtistSummary, LinkedShow, NamedShowCount};
use crate::{Error, Result};

/// Insert a new artist, returning its id
pub async fn create_artist(pool: &SqlitePool, input: &ArtistInput) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO "Artist" (
            name, city, state, phone, genres, image_link, facebook_link,
            seeking_venue, website, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(&input.genres)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(input.seeking_venue)
    .bind(&input.website)
    .bind(&input.seeking_description)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    tx.commit().await?;
    info!("Created artist {} ({:?})", id, input.name);
    Ok(id)
}

/// Overwrite every mutable column of an existing artist
pub async fn update_artist(pool: &SqlitePool, id: i64, input: &ArtistInput) -> Result<()> {
    let mut tx = pool.begin().await?;

    let affected = sqlx::query(
        r#"
        UPDATE "Artist" SET
            name = ?, city = ?, state = ?, phone = ?, genres = ?, image_link = ?,
            facebook_link = ?, seeking_venue = ?, website = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(&input.genres)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(input.seeking_venue)
    .bind(&input.website)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if affected == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    tx.commit().await?;
    info!("Updated artist {}", id);
    Ok(())
}

/// Load artist by id
pub async fn get_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let artist = sqlx::query_as::<_, Artist>(
        r#"
        SELECT id, name, city, state, phone, genres, image_link, facebook_link,
               seeking_venue, website, seeking_description
        FROM "Artist"
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(artist)
}

/// Every artist's id and name, in id order
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<ArtistSummary>> {
    let rows = sqlx::query_as::<_, ArtistSummary>(r#"SELECT id, name FROM "Artist" ORDER BY id"#)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Every artist's name and total show count, in id order
pub async fn list_artist_show_counts(pool: &SqlitePool) -> Result<Vec<NamedShowCount>> {
    let rows = sqlx::query_as::<_, NamedShowCount>(
        r#"
        SELECT a.id, a.name, COUNT(s.id) AS show_count
        FROM "Artist" a
        LEFT JOIN "Show" s ON s.artist_id = a.id
        GROUP BY a.id
        ORDER BY a.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Shows by an artist, each joined with its venue
pub async fn list_artist_shows(pool: &SqlitePool, artist_id: i64) -> Result<Vec<LinkedShow>> {
    let rows = sqlx::query_as::<_, LinkedShow>(
        r#"
        SELECT v.id, v.name, v.image_link, s.start_time
        FROM "Show" s
        JOIN "Venue" v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
