// ABOUTME: SQLite-backed exercise store using sqlx
// ABOUTME: Handles pool setup, embedded migrations, and CRUD round trips for exercise records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

use super::{parse_exercise_id, ExerciseStore, ListExercisesFilter};
use crate::config::{DatabaseConfig, DatabaseUrl};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use exercise_core::errors::{StoreError, StoreResult};
use exercise_core::{ExerciseId, ExerciseInput, ExerciseRecord, WeightUnit};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use tracing::{debug, info};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const SELECT_COLUMNS: &str = "SELECT id, name, reps, weight, unit, date FROM exercises";

/// Exercise store backed by an sqlx `SQLite` pool
#[derive(Clone)]
pub struct SqliteExerciseStore {
    pool: SqlitePool,
}

impl SqliteExerciseStore {
    /// Wrap an existing pool (schema must already be migrated)
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the configured database and run migrations
    ///
    /// In-memory databases get a single connection that is never recycled,
    /// since every new connection would see an empty database.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory, connection, or migrations fail
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = match &config.url {
            DatabaseUrl::Memory => {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect(&config.url.to_connection_string())
                    .await
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .map_err(|e| StoreError::database("create database directory", e))?;
                }
                // mode=rwc creates the file if it doesn't exist
                let connection_string = format!("{}?mode=rwc", config.url.to_connection_string());
                SqlitePoolOptions::new()
                    .max_connections(config.max_connections)
                    .connect(&connection_string)
                    .await
            }
        }
        .map_err(|e| StoreError::database("connect", e))?;

        let store = Self::new(pool);
        store.migrate().await?;
        info!(database = %config.url, "Exercise store ready");
        Ok(store)
    }

    /// Apply embedded schema migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails to apply
    pub async fn migrate(&self) -> StoreResult<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::database("migrate", e))
    }

    /// Get a reference to the pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ExerciseStore for SqliteExerciseStore {
    async fn create(&self, input: &ExerciseInput) -> StoreResult<ExerciseRecord> {
        let id = ExerciseId::generate();
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        sqlx::query(
            r"
            INSERT INTO exercises (id, name, reps, weight, unit, date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(id.to_string())
        .bind(&input.name)
        .bind(i64::from(input.reps))
        .bind(i64::from(input.weight))
        .bind(input.unit.as_str())
        .bind(input.date.to_string())
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::database("create exercise", e))?;

        debug!(exercise.id = %id, "Exercise created");
        Ok(ExerciseRecord::from_input(id, input.clone()))
    }

    async fn list(&self, filter: &ListExercisesFilter) -> StoreResult<Vec<ExerciseRecord>> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_COLUMNS);
        query.push(" WHERE 1 = 1");
        if let Some(name) = &filter.name {
            query.push(" AND name = ").push_bind(name.clone());
        }
        if let Some(unit) = filter.unit {
            query.push(" AND unit = ").push_bind(unit.as_str());
        }
        if let Some(date) = filter.date {
            query.push(" AND date = ").push_bind(date.to_string());
        }
        query.push(" ORDER BY rowid ASC");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::database("list exercises", e))?;

        rows.iter().map(row_to_exercise).collect()
    }

    async fn get(&self, id: &str) -> StoreResult<Option<ExerciseRecord>> {
        let id = parse_exercise_id(id)?;

        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::database("get exercise", e))?;

        row.as_ref().map(row_to_exercise).transpose()
    }

    async fn replace(&self, id: &str, input: &ExerciseInput) -> StoreResult<u64> {
        let id = parse_exercise_id(id)?;

        let result = sqlx::query(
            r"
            UPDATE exercises SET
                name = $1, reps = $2, weight = $3, unit = $4, date = $5
            WHERE id = $6
            ",
        )
        .bind(&input.name)
        .bind(i64::from(input.reps))
        .bind(i64::from(input.weight))
        .bind(input.unit.as_str())
        .bind(input.date.to_string())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::database("replace exercise", e))?;

        debug!(exercise.id = %id, matched = result.rows_affected(), "Exercise replace");
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> StoreResult<u64> {
        let id = parse_exercise_id(id)?;

        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::database("delete exercise", e))?;

        debug!(exercise.id = %id, deleted = result.rows_affected(), "Exercise delete");
        Ok(result.rows_affected())
    }

    async fn count(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercises")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::database("count exercises", e))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::database("ping", e))?;
        Ok(())
    }

    fn backend_info(&self) -> &'static str {
        "SQLite (sqlx)"
    }
}

/// Map a row back into a record, re-checking the record invariants
fn row_to_exercise(row: &SqliteRow) -> StoreResult<ExerciseRecord> {
    let id_str: String = row
        .try_get("id")
        .map_err(|e| StoreError::database("read exercise row", e))?;
    let corrupt = |reason: String| StoreError::corrupt(id_str.clone(), reason);

    let id: ExerciseId = id_str
        .parse()
        .map_err(|e| corrupt(format!("invalid id: {e}")))?;
    let name: String = row.try_get("name").map_err(|e| corrupt(e.to_string()))?;
    let reps: i64 = row.try_get("reps").map_err(|e| corrupt(e.to_string()))?;
    let weight: i64 = row.try_get("weight").map_err(|e| corrupt(e.to_string()))?;
    let unit_str: String = row.try_get("unit").map_err(|e| corrupt(e.to_string()))?;
    let date_str: String = row.try_get("date").map_err(|e| corrupt(e.to_string()))?;

    let count = |value: i64, field: &str| {
        u32::try_from(value)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| corrupt(format!("{field} out of range: {value}")))
    };

    Ok(ExerciseRecord {
        id,
        reps: count(reps, "reps")?,
        weight: count(weight, "weight")?,
        unit: WeightUnit::parse(&unit_str)
            .ok_or_else(|| corrupt(format!("unknown unit '{unit_str}'")))?,
        date: date_str
            .parse()
            .map_err(|kind| corrupt(format!("date '{date_str}' {kind}")))?,
        name,
    })
}
