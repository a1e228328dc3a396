//! Database Module Tests
//!
//! Reading archive operations against a temporary SQLite file.

use crate::database;
use crate::reading::{AnnualInterpretation, AnnualReadingGenerator, Card, ReadingSource};
use sqlx::sqlite::SqlitePool;
use std::collections::BTreeMap;
use tempfile::{tempdir, TempDir};

/// Create a test archive; the TempDir must outlive the pool.
async fn create_test_pool() -> (SqlitePool, TempDir) {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.sqlite");

    let pool = database::init_db(&db_path)
        .await
        .expect("Failed to create test pool");

    (pool, dir)
}

fn sample_reading(theme: &str) -> AnnualInterpretation {
    let months: BTreeMap<u8, Card> = (1..=12u8).map(|m| (m, Card::upright("Six of Pentacles"))).collect();
    AnnualReadingGenerator::new().generate(&Card::upright(theme), &months)
}

#[cfg(test)]
mod archive_tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_get_reading() {
        let (pool, _dir) = create_test_pool().await;
        let reading = sample_reading("The Sun");

        let stored = database::save_reading(&pool, 2026, ReadingSource::Local, &reading)
            .await
            .expect("Failed to save reading");
        assert!(!stored.id.is_empty());
        assert_eq!(stored.year, 2026);

        let fetched = database::get_reading(&pool, 2026)
            .await
            .expect("Failed to get reading")
            .expect("Reading not found");
        assert_eq!(fetched.id, stored.id);
        assert_eq!(fetched.source, "local");
        assert_eq!(fetched.interpretation.0, reading);
    }

    #[tokio::test]
    async fn test_get_missing_year() {
        let (pool, _dir) = create_test_pool().await;

        let fetched = database::get_reading(&pool, 1999).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_same_year() {
        let (pool, _dir) = create_test_pool().await;

        database::save_reading(&pool, 2026, ReadingSource::Local, &sample_reading("The Sun"))
            .await
            .unwrap();
        let replacement = sample_reading("The Moon");
        database::save_reading(&pool, 2026, ReadingSource::Llm, &replacement)
            .await
            .unwrap();

        let all = database::list_readings(&pool).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].source, "llm");
        assert_eq!(all[0].interpretation.0, replacement);
    }

    #[tokio::test]
    async fn test_list_newest_year_first() {
        let (pool, _dir) = create_test_pool().await;

        for year in [2024, 2026, 2025] {
            database::save_reading(&pool, year, ReadingSource::LlmFallbackLocal, &sample_reading("The World"))
                .await
                .unwrap();
        }

        let years: Vec<i64> = database::list_readings(&pool)
            .await
            .unwrap()
            .iter()
            .map(|r| r.year)
            .collect();
        assert_eq!(years, vec![2026, 2025, 2024]);
    }

    #[tokio::test]
    async fn test_delete_reading() {
        let (pool, _dir) = create_test_pool().await;
        database::save_reading(&pool, 2026, ReadingSource::Local, &sample_reading("Death"))
            .await
            .unwrap();

        assert!(database::delete_reading(&pool, 2026).await.unwrap());
        assert!(!database::delete_reading(&pool, 2026).await.unwrap());
        assert!(database::get_reading(&pool, 2026).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let (pool, _dir) = create_test_pool().await;
        database::migrate(&pool).await.expect("Second migration failed");
    }
}
