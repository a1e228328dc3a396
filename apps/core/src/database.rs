//! Reading archive.
//!
//! Caller-side persistence of annual readings, one row per year. Saving a
//! reading for a year replaces the previous one as a whole.

use crate::models::StoredReading;
use crate::reading::{AnnualInterpretation, ReadingSource};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::types::Json;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS annual_readings (
        id TEXT PRIMARY KEY,
        year INTEGER NOT NULL UNIQUE,
        source TEXT NOT NULL,
        interpretation TEXT NOT NULL,
        created_at INTEGER NOT NULL
    );
"#;

pub async fn init_db(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    info!("Initializing reading archive at: {}", db_path.display());

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Applies the archive schema to an existing pool.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}

pub async fn save_reading(
    pool: &SqlitePool,
    year: i32,
    source: ReadingSource,
    interpretation: &AnnualInterpretation,
) -> Result<StoredReading, sqlx::Error> {
    let stored = StoredReading {
        id: Uuid::new_v4().to_string(),
        year: i64::from(year),
        source: source.as_str().to_string(),
        interpretation: Json(interpretation.clone()),
        created_at: Utc::now().timestamp(),
    };

    sqlx::query(
        r#"
        INSERT OR REPLACE INTO annual_readings (id, year, source, interpretation, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&stored.id)
    .bind(stored.year)
    .bind(&stored.source)
    .bind(&stored.interpretation)
    .bind(stored.created_at)
    .execute(pool)
    .await?;

    info!(year, source = %source, "Reading archived");

    Ok(stored)
}

pub async fn get_reading(pool: &SqlitePool, year: i32) -> Result<Option<StoredReading>, sqlx::Error> {
    sqlx::query_as::<_, StoredReading>(
        "SELECT id, year, source, interpretation, created_at FROM annual_readings WHERE year = ?",
    )
    .bind(i64::from(year))
    .fetch_optional(pool)
    .await
}

pub async fn list_readings(pool: &SqlitePool) -> Result<Vec<StoredReading>, sqlx::Error> {
    sqlx::query_as::<_, StoredReading>(
        "SELECT id, year, source, interpretation, created_at FROM annual_readings ORDER BY year DESC",
    )
    .fetch_all(pool)
    .await
}

/// Returns whether a reading existed for the year.
pub async fn delete_reading(pool: &SqlitePool, year: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM annual_readings WHERE year = ?")
        .bind(i64::from(year))
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
