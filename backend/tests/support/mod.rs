//! Shared helpers for backend integration tests.
//!
//! Integration tests compile as separate crates, so helpers they share live
//! here and are pulled in with `mod support;`.

pub mod cluster_skip;
pub mod pg_embed;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

pub use cluster_skip::handle_cluster_setup_failure;
pub use pg_embed::test_cluster;

/// Render a `postgres` error with its SQLSTATE and server message.
///
/// The `Display` implementation collapses database errors to `db error`,
/// which is useless in CI logs.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };
    let mut summary = format!("postgres error {:?}: {}", db_error.code(), db_error.message());
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// Drop and recreate `name`, returning its connection URL.
///
/// Runs through `postgres` rather than Diesel so `DROP DATABASE` is not
/// wrapped in a transaction.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client =
        Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!(
            "DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE); CREATE DATABASE \"{name}\";"
        ))
        .map_err(|err| format_postgres_error(&err))?;
    Ok(cluster.connection().database_url(name))
}
