//! Embedded schema migrations.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::ports::define_port_error;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

define_port_error! {
    /// Errors raised while applying migrations.
    pub enum MigrationError {
        /// The migration connection could not be opened.
        Connect { message: String } => "failed to connect for migrations: {message}",
        /// A migration failed to apply.
        Apply { message: String } => "failed to apply migrations: {message}",
    }
}

/// Apply every pending migration over a blocking connection.
///
/// Call from `tokio::task::spawn_blocking`; the sync Diesel connection blocks
/// the current thread.
///
/// # Errors
///
/// Returns [`MigrationError`] when the database is unreachable or a migration
/// fails.
pub fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut conn = PgConnection::establish(database_url)
        .map_err(|err| MigrationError::connect(err.to_string()))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::apply(err.to_string()))?;
    info!(count = applied.len(), "applied pending migrations");
    Ok(())
}
