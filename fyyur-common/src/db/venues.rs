//! Venue database operations
//!
//! Mutations run inside a transaction; an early return through `?` drops the
//! transaction, which rolls it back.

use sqlx::SqlitePool;
use tracing::info;

use super::models::{LinkedShow, NamedShowCount, Venue, VenueInput, VenueLocation};
use crate::{Error, Result};

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
                             genres, website, seeking_talent, seeking_description";

/// Insert a new venue, returning its id
pub async fn create_venue(pool: &SqlitePool, input: &VenueInput) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let id = sqlx::query(
        r#"
        INSERT INTO "Venue" (
            name, city, state, address, phone, image_link, facebook_link,
            genres, website, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.genres)
    .bind(&input.website)
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    tx.commit().await?;
    info!("Created venue {} ({:?})", id, input.name);
    Ok(id)
}

/// Overwrite every mutable column of an existing venue
pub async fn update_venue(pool: &SqlitePool, id: i64, input: &VenueInput) -> Result<()> {
    let mut tx = pool.begin().await?;

    let affected = sqlx::query(
        r#"
        UPDATE "Venue" SET
            name = ?, city = ?, state = ?, address = ?, phone = ?, image_link = ?,
            facebook_link = ?, genres = ?, website = ?, seeking_talent = ?,
            seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.genres)
    .bind(&input.website)
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if affected == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    info!("Updated venue {}", id);
    Ok(())
}

/// Delete a venue together with its shows
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let shows = sqlx::query(r#"DELETE FROM "Show" WHERE venue_id = ?"#)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let affected = sqlx::query(r#"DELETE FROM "Venue" WHERE id = ?"#)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if affected == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    info!("Deleted venue {} and {} show(s)", id, shows);
    Ok(())
}

/// Load venue by id
pub async fn get_venue(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let venue = sqlx::query_as::<_, Venue>(&format!(
        r#"SELECT {} FROM "Venue" WHERE id = ?"#,
        VENUE_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(venue)
}

/// Every venue's location and total show count, in id order
pub async fn list_venue_locations(pool: &SqlitePool) -> Result<Vec<VenueLocation>> {
    let rows = sqlx::query_as::<_, VenueLocation>(
        r#"
        SELECT v.id, v.name, v.city, v.state, COUNT(s.id) AS show_count
        FROM "Venue" v
        LEFT JOIN "Show" s ON s.venue_id = v.id
        GROUP BY v.id
        ORDER BY v.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Every venue's name and total show count, in id order
pub async fn list_venue_show_counts(pool: &SqlitePool) -> Result<Vec<NamedShowCount>> {
    let rows = sqlx::query_as::<_, NamedShowCount>(
        r#"
        SELECT v.id, v.name, COUNT(s.id) AS show_count
        FROM "Venue" v
        LEFT JOIN "Show" s ON s.venue_id = v.id
        GROUP BY v.id
        ORDER BY v.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Shows at a venue, each joined with its artist
pub async fn list_venue_shows(pool: &SqlitePool, venue_id: i64) -> Result<Vec<LinkedShow>> {
    let rows = sqlx::query_as::<_, LinkedShow>(
        r#"
        SELECT a.id, a.name, a.image_link, s.start_time
        FROM "Show" s
        JOIN "Artist" a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
