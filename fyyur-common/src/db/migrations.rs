//! Database schema migrations
//!
//! Versioned forward migrations with matching backward steps. The applied
//! version is tracked in the `schema_version` table.
//!
//! # Migration Guidelines
//!
//! 1. **Never modify existing migrations** - databases in the wild were built from them
//! 2. **Always add new migrations** - one function pair (up/down) per schema change
//! 3. **Keep migrations idempotent** - check for the table/column/index before touching it
//!
//! | Version | Up | Down |
//! |---|---|---|
//! | 1 | create `Venue`, `Artist`, `Show` | drop the three tables |
//! | 2 | add `Artist.seeking_description` | drop the column |
//! | 3 | index `Show(venue_id)`, `Show(artist_id)` | drop the indexes |

use crate::{Error, Result};
use sqlx::SqlitePool;
use tracing::{info, warn};

/// Current schema version
///
/// **IMPORTANT:** Increment this when adding new migrations
pub const CURRENT_SCHEMA_VERSION: i32 = 3;

/// Get current schema version from database
///
/// Returns 0 if schema_version table doesn't exist or has no rows
pub async fn get_schema_version(pool: &SqlitePool) -> Result<i32> {
    if !table_exists(pool, "schema_version").await? {
        return Ok(0);
    }

    let version: Option<i32> =
        sqlx::query_scalar("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1")
            .fetch_optional(pool)
            .await?;

    Ok(version.unwrap_or(0))
}

async fn set_schema_version(pool: &SqlitePool, version: i32) -> Result<()> {
    sqlx::query("INSERT OR IGNORE INTO schema_version (version) VALUES (?)")
        .bind(version)
        .execute(pool)
        .await?;

    Ok(())
}

async fn clear_schema_version(pool: &SqlitePool, version: i32) -> Result<()> {
    sqlx::query("DELETE FROM schema_version WHERE version = ?")
        .bind(version)
        .execute(pool)
        .await?;

    Ok(())
}

async fn table_exists(pool: &SqlitePool, table: &str) -> Result<bool> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM sqlite_master
            WHERE type='table' AND name=?
        )
        "#,
    )
    .bind(table)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

async fn column_exists(pool: &SqlitePool, table: &str, column: &str) -> Result<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM pragma_table_info(?) WHERE name = ?")
            .bind(table)
            .bind(column)
            .fetch_one(pool)
            .await?;

    Ok(count > 0)
}

/// Run all pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let current_version = get_schema_version(pool).await?;

    if current_version == CURRENT_SCHEMA_VERSION {
        info!("Database schema is up to date (v{})", current_version);
        return Ok(());
    }

    if current_version > CURRENT_SCHEMA_VERSION {
        warn!(
            "Database schema version ({}) is newer than code version ({})",
            current_version, CURRENT_SCHEMA_VERSION
        );
        return Ok(());
    }

    info!(
        "Running database migrations: v{} -> v{}",
        current_version, CURRENT_SCHEMA_VERSION
    );

    if current_version < 1 {
        migrate_v1(pool).await?;
        set_schema_version(pool, 1).await?;
        info!("✓ Migration v1 completed");
    }

    if current_version < 2 {
        migrate_v2(pool).await?;
        set_schema_version(pool, 2).await?;
        info!("✓ Migration v2 completed");
    }

    if current_version < 3 {
        migrate_v3(pool).await?;
        set_schema_version(pool, 3).await?;
        info!("✓ Migration v3 completed");
    }

    info!("All migrations completed successfully");
    Ok(())
}

/// Run backward migrations until the schema is at `target_version`
pub async fn rollback_migrations(pool: &SqlitePool, target_version: i32) -> Result<()> {
    if !(0..=CURRENT_SCHEMA_VERSION).contains(&target_version) {
        return Err(Error::InvalidInput(format!(
            "Cannot roll back to schema version {} (known versions: 0..={})",
            target_version, CURRENT_SCHEMA_VERSION
        )));
    }

    let mut version = get_schema_version(pool).await?;
    if version > CURRENT_SCHEMA_VERSION {
        return Err(Error::Config(format!(
            "Database schema version ({}) is newer than code version ({})",
            version, CURRENT_SCHEMA_VERSION
        )));
    }

    while version > target_version {
        match version {
            3 => revert_v3(pool).await?,
            2 => revert_v2(pool).await?,
            1 => revert_v1(pool).await?,
            other => {
                return Err(Error::Internal(format!(
                    "No backward step for schema version {}",
                    other
                )))
            }
        }
        clear_schema_version(pool, version).await?;
        info!("✓ Reverted migration v{}", version);
        version -= 1;
    }

    Ok(())
}

/// Migration v1: Create the Venue, Artist and Show tables
async fn migrate_v1(pool: &SqlitePool) -> Result<()> {
    info!("Running migration v1: Create Venue, Artist and Show tables");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "Venue" (
            id INTEGER PRIMARY KEY,
            name TEXT,
            city VARCHAR(120),
            state VARCHAR(120),
            address VARCHAR(120),
            phone VARCHAR(120),
            image_link VARCHAR(500),
            facebook_link VARCHAR(120),
            genres TEXT,
            website TEXT,
            seeking_talent BOOLEAN NOT NULL DEFAULT 0,
            seeking_description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "Artist" (
            id INTEGER PRIMARY KEY,
            name TEXT,
            city VARCHAR(120),
            state VARCHAR(120),
            phone VARCHAR(120),
            genres VARCHAR(120),
            image_link VARCHAR(500),
            facebook_link VARCHAR(120),
            seeking_venue BOOLEAN NOT NULL DEFAULT 0,
            website TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "Show" (
            id INTEGER PRIMARY KEY,
            start_time TEXT NOT NULL,
            artist_id INTEGER NOT NULL REFERENCES "Artist"(id),
            venue_id INTEGER NOT NULL REFERENCES "Venue"(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn revert_v1(pool: &SqlitePool) -> Result<()> {
    // Show references both other tables, so it goes first
    for table in ["Show", "Artist", "Venue"] {
        sqlx::query(&format!("DROP TABLE IF EXISTS \"{}\"", table))
            .execute(pool)
            .await?;
    }
    Ok(())
}

/// Migration v2: Add seeking_description column to Artist table
async fn migrate_v2(pool: &SqlitePool) -> Result<()> {
    info!("Running migration v2: Add seeking_description column to Artist");

    if !table_exists(pool, "Artist").await? {
        return Err(Error::Internal(
            "Artist table missing while running migration v2".to_string(),
        ));
    }

    if column_exists(pool, "Artist", "seeking_description").await? {
        info!("  seeking_description column already exists - skipping");
        return Ok(());
    }

    match sqlx::query(r#"ALTER TABLE "Artist" ADD COLUMN seeking_description TEXT"#)
        .execute(pool)
        .await
    {
        Ok(_) => {
            info!("  ✓ Added seeking_description column to Artist table");
            Ok(())
        }
        Err(sqlx::Error::Database(db_err)) if db_err.message().contains("duplicate column") => {
            info!("  seeking_description column added concurrently - skipping");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn revert_v2(pool: &SqlitePool) -> Result<()> {
    if table_exists(pool, "Artist").await?
        && column_exists(pool, "Artist", "seeking_description").await?
    {
        sqlx::query(r#"ALTER TABLE "Artist" DROP COLUMN seeking_description"#)
            .execute(pool)
            .await?;
    }
    Ok(())
}

/// Migration v3: Index Show foreign keys for the per-venue/per-artist lookups
async fn migrate_v3(pool: &SqlitePool) -> Result<()> {
    info!("Running migration v3: Index Show(venue_id) and Show(artist_id)");

    sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_show_venue_id ON "Show"(venue_id)"#)
        .execute(pool)
        .await?;
    sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_show_artist_id ON "Show"(artist_id)"#)
        .execute(pool)
        .await?;

    Ok(())
}

async fn revert_v3(pool: &SqlitePool) -> Result<()> {
    sqlx::query("DROP INDEX IF EXISTS idx_show_venue_id")
        .execute(pool)
        .await?;
    sqlx::query("DROP INDEX IF EXISTS idx_show_artist_id")
        .execute(pool)
        .await?;
    Ok(())
}
