//! `SQLite` implementation of the `Repository` trait.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, Sqlite, SqlitePool, Transaction};
use tracing::debug;

use questlog_core::error::DomainError;
use questlog_core::model::{Character, NewQuest, Quest};
use questlog_core::repository::{Repository, UnitOfWork};

use crate::schema::SCHEMA;

const QUEST_COLUMNS: &str = "id, description, xp, completed, character_id";

/// SQLite-backed repository.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Opens (creating if missing) the database at `database_url` and ensures
    /// the schema exists.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the URL is invalid, the file cannot be opened,
    /// or schema creation fails.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            // Concurrent writers wait for the lock instead of failing with "database is locked".
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    /// Opens a private in-memory database.
    ///
    /// Every connection to `sqlite::memory:` sees its own database, so the
    /// pool is pinned to a single connection that never expires.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the connection or schema creation fails.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    /// Wraps an existing pool, creating the schema if absent.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if schema creation fails.
    pub async fn with_pool(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        for statement in SCHEMA {
            sqlx::query(*statement).execute(&pool).await?;
        }
        debug!("schema ready");
        Ok(Self { pool })
    }

    /// Returns the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Repository for SqliteRepository {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DomainError> {
        let tx = self.pool.begin().await.map_err(infrastructure)?;
        Ok(Box::new(SqliteUnitOfWork { tx }))
    }

    async fn begin_write(&self) -> Result<Box<dyn UnitOfWork>, DomainError> {
        // A deferred transaction that reads first cannot wait for the write
        // lock: SQLite fails the upgrade with SQLITE_BUSY. IMMEDIATE takes the
        // lock at BEGIN, where `busy_timeout` applies.
        let tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(infrastructure)?;
        Ok(Box::new(SqliteUnitOfWork { tx }))
    }
}

/// A transaction on one pooled connection. Dropping it uncommitted rolls
/// back and returns the connection to the pool.
struct SqliteUnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

#[derive(FromRow)]
struct CharacterRow {
    id: i64,
    name: String,
}

impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(FromRow)]
struct QuestRow {
    id: i64,
    description: String,
    xp: i64,
    completed: bool,
    character_id: i64,
}

impl From<QuestRow> for Quest {
    fn from(row: QuestRow) -> Self {
        Self {
            id: row.id,
            description: row.description,
            xp: row.xp,
            completed: row.completed,
            character_id: row.character_id,
        }
    }
}

fn infrastructure(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

#[async_trait]
impl UnitOfWork for SqliteUnitOfWork {
    async fn find_character_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<Character>, DomainError> {
        let row =
            sqlx::query_as::<_, CharacterRow>("SELECT id, name FROM characters WHERE name = ?")
                .bind(name)
                .fetch_optional(&mut *self.tx)
                .await
                .map_err(infrastructure)?;
        Ok(row.map(Character::from))
    }

    async fn find_character(
        &mut self,
        character_id: i64,
    ) -> Result<Option<Character>, DomainError> {
        let row =
            sqlx::query_as::<_, CharacterRow>("SELECT id, name FROM characters WHERE id = ?")
                .bind(character_id)
                .fetch_optional(&mut *self.tx)
                .await
                .map_err(infrastructure)?;
        Ok(row.map(Character::from))
    }

    async fn find_quest(&mut self, quest_id: i64) -> Result<Option<Quest>, DomainError> {
        let query = format!("SELECT {QUEST_COLUMNS} FROM quests WHERE id = ?");
        let row = sqlx::query_as::<_, QuestRow>(&query)
            .bind(quest_id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(infrastructure)?;
        Ok(row.map(Quest::from))
    }

    async fn quests_for_character(
        &mut self,
        character_id: i64,
    ) -> Result<Vec<Quest>, DomainError> {
        let query =
            format!("SELECT {QUEST_COLUMNS} FROM quests WHERE character_id = ? ORDER BY id ASC");
        let rows = sqlx::query_as::<_, QuestRow>(&query)
            .bind(character_id)
            .fetch_all(&mut *self.tx)
            .await
            .map_err(infrastructure)?;
        Ok(rows.into_iter().map(Quest::from).collect())
    }

    async fn list_characters(&mut self) -> Result<Vec<Character>, DomainError> {
        let rows =
            sqlx::query_as::<_, CharacterRow>("SELECT id, name FROM characters ORDER BY id")
                .fetch_all(&mut *self.tx)
                .await
                .map_err(infrastructure)?;
        Ok(rows.into_iter().map(Character::from).collect())
    }

    async fn insert_character(&mut self, name: &str) -> Result<Character, DomainError> {
        let row = sqlx::query_as::<_, CharacterRow>(
            "INSERT INTO characters (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|err| {
            if err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation())
            {
                DomainError::Conflict(name.to_owned())
            } else {
                infrastructure(err)
            }
        })?;
        Ok(row.into())
    }

    async fn insert_quest(&mut self, quest: &NewQuest) -> Result<Quest, DomainError> {
        let query = format!(
            "INSERT INTO quests (description, xp, completed, character_id)
             VALUES (?, ?, ?, ?)
             RETURNING {QUEST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, QuestRow>(&query)
            .bind(&quest.description)
            .bind(quest.xp)
            .bind(false)
            .bind(quest.character_id)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(infrastructure)?;
        Ok(row.into())
    }

    async fn mark_quest_completed(&mut self, quest_id: i64) -> Result<Quest, DomainError> {
        let query =
            format!("UPDATE quests SET completed = ? WHERE id = ? RETURNING {QUEST_COLUMNS}");
        let row = sqlx::query_as::<_, QuestRow>(&query)
            .bind(true)
            .bind(quest_id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(infrastructure)?;
        row.map(Quest::from)
            .ok_or_else(|| DomainError::quest_not_found(quest_id))
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        self.tx.commit().await.map_err(infrastructure)
    }
}
