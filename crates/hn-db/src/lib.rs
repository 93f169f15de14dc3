//! # hn-db
//!
//! libSQL database operations for hackernews.
//!
//! Holds the three persisted tables (users, links, votes) and exposes them
//! through one repository trait per entity (see [`repos`]). [`HnDb`]
//! implements every trait; callers hold it behind `Arc<dyn …Repository>` so
//! resolvers never depend on the concrete store.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

#[cfg(test)]
pub(crate) mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all hackernews state.
///
/// Wraps a libSQL database and a single connection. The connection is
/// internally reference-counted, so `&HnDb` can be shared across tasks.
pub struct HnDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl HnDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let hn_db = Self { db, conn };
        hn_db.run_migrations().await?;
        tracing::debug!(path, "opened local database");
        Ok(hn_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Count rows in one of the entity tables.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for an unknown table name, or
    /// `DatabaseError` if the query fails.
    pub async fn count(&self, table: &str) -> Result<i64, DatabaseError> {
        if !matches!(table, "users" | "links" | "votes") {
            return Err(DatabaseError::InvalidState(format!(
                "unknown table '{table}'"
            )));
        }
        let mut rows = self
            .conn
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }
}
