//! Database Connection and Setup
//!
//! Opens the SQLite database and runs migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::DomainResult;

/// Shared connection handle
pub type DbConn = Arc<Mutex<Connection>>;

/// Open (or create) the database at `db_path`. `:memory:` opens a private
/// in-memory database.
pub fn init_db(db_path: &Path) -> DomainResult<DbConn> {
    let conn = if db_path == Path::new(":memory:") {
        Connection::open_in_memory()?
    } else {
        Connection::open(db_path)?
    };

    run_migrations(&conn)?;
    tracing::debug!("Database ready at {}", db_path.display());

    Ok(Arc::new(Mutex::new(conn)))
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    // `seq` keeps insertion order; `id` is the client-visible key
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS items (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            label TEXT NOT NULL,
            checked INTEGER NOT NULL DEFAULT 0
        );",
    )?;
    Ok(())
}
