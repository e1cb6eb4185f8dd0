//! SQLite-backed CLI state and countdown history.
//!
//! Provides persistent storage for:
//! - A key-value store the CLI uses to carry controller/timer state
//!   between invocations
//! - Completed countdowns and their aggregate statistics

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use super::data_dir;

/// One completed countdown run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownRecord {
    pub id: i64,
    pub platform: String,
    pub total_secs: u64,
    pub armed_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Stats {
    pub total_countdowns: u64,
    pub total_limited_secs: u64,
    pub today_countdowns: u64,
}

/// SQLite database for CLI state and countdown history.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `<data_dir>/hourglass.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("hourglass.db");
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS countdowns (
                id           INTEGER PRIMARY KEY AUTOINCREMENT,
                platform     TEXT NOT NULL,
                total_secs   INTEGER NOT NULL,
                armed_at     TEXT NOT NULL,
                completed_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_countdowns_completed_at ON countdowns(completed_at);",
        )?;
        Ok(())
    }

    /// Record a completed countdown.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn record_countdown(
        &self,
        platform: &str,
        total_secs: u64,
        armed_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO countdowns (platform, total_secs, armed_at, completed_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                platform,
                total_secs,
                armed_at.to_rfc3339(),
                completed_at.to_rfc3339()
            ],
        )?;
        Ok(())
    }

    /// The most recent completed countdowns, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails or a stored timestamp does not
    /// parse.
    pub fn history(&self, limit: usize) -> Result<Vec<CountdownRecord>, Box<dyn std::error::Error>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, platform, total_secs, armed_at, completed_at
             FROM countdowns ORDER BY completed_at DESC, id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, u64>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, platform, total_secs, armed_at, completed_at) = row?;
            records.push(CountdownRecord {
                id,
                platform,
                total_secs,
                armed_at: DateTime::parse_from_rfc3339(&armed_at)?.with_timezone(&Utc),
                completed_at: DateTime::parse_from_rfc3339(&completed_at)?.with_timezone(&Utc),
            });
        }
        Ok(records)
    }

    /// Aggregate countdown statistics.
    ///
    /// # Errors
    /// Returns an error if a query fails.
    pub fn stats(&self) -> Result<Stats, rusqlite::Error> {
        let mut stats = Stats::default();

        let mut stmt = self
            .conn
            .prepare("SELECT COUNT(*), COALESCE(SUM(total_secs), 0) FROM countdowns")?;
        let row = stmt.query_row([], |row| Ok((row.get::<_, u64>(0)?, row.get::<_, u64>(1)?)))?;
        stats.total_countdowns = row.0;
        stats.total_limited_secs = row.1;

        let today = Utc::now().date_naive();
        let mut stmt2 = self
            .conn
            .prepare("SELECT COUNT(*) FROM countdowns WHERE completed_at >= ?1")?;
        stats.today_countdowns =
            stmt2.query_row(params![format!("{today}T00:00:00+00:00")], |row| row.get(0))?;

        Ok(stats)
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
