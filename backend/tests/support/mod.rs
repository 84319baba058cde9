//! Shared helpers for integration tests that need PostgreSQL.
//!
//! Each suite boots an embedded cluster through `pg-embed-setup-unpriv`,
//! recreates its own database and applies the board game schema with the
//! shipped migration SQL so tests and operators run the same DDL.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;

static PG_EMBED_BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY_MS: u64 = 500;

/// DDL for the `board_games` table.
pub const CREATE_BOARD_GAMES_SQL: &str =
    include_str!("../../migrations/2024-05-01-000000_create_board_games/up.sql");

/// Render a `postgres` error with its SQLSTATE and message.
///
/// `Display` on `postgres::Error` often collapses to `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    match error.as_db_error() {
        Some(db_error) => format!(
            "postgres error {:?}: {}",
            db_error.code(),
            db_error.message()
        ),
        None => error.to_string(),
    }
}

/// True when `SKIP_TEST_CLUSTER` is `1`, `true` or `yes` (any case).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip with a marker when `SKIP_TEST_CLUSTER` is set, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

fn pg_embed_dirs() -> Result<(PathBuf, PathBuf), std::io::Error> {
    let target = std::env::var_os("CARGO_TARGET_DIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("target"),
        PathBuf::from,
    );
    let base = target
        .join("pg-embed")
        .join(format!("bootstrap-{}-{}", std::process::id(), Uuid::new_v4()));
    let runtime_dir = base.join("install");
    let data_dir = base.join("data");
    std::fs::create_dir_all(&runtime_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    Ok((runtime_dir, data_dir))
}

fn is_transient_error(err: &str) -> bool {
    let err = err.to_lowercase();
    [
        "error decoding response body",
        "connection reset",
        "connection refused",
        "timed out",
        "timeout",
        "temporarily unavailable",
        "dns error",
    ]
    .iter()
    .any(|pattern| err.contains(pattern))
}

/// Boot an embedded cluster under the target directory.
///
/// Binary downloads occasionally fail under parallel suites, so transient
/// errors are retried with backoff.
pub fn test_cluster() -> Result<TestCluster, String> {
    let _bootstrap_guard = PG_EMBED_BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let needs_override =
        std::env::var_os("PG_RUNTIME_DIR").is_none() || std::env::var_os("PG_DATA_DIR").is_none();
    let _env_guard = if needs_override {
        let (runtime_dir, data_dir) = pg_embed_dirs().map_err(|err| err.to_string())?;
        Some(env_lock::lock_env([
            ("PG_RUNTIME_DIR", Some(runtime_dir.to_string_lossy().into_owned())),
            ("PG_DATA_DIR", Some(data_dir.to_string_lossy().into_owned())),
        ]))
    } else {
        None
    };

    let mut last_error = String::new();
    for attempt in 0..=MAX_RETRIES {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                last_error = format!("{err:?}");
                if attempt == MAX_RETRIES || !is_transient_error(&last_error) {
                    break;
                }
                std::thread::sleep(Duration::from_millis(RETRY_DELAY_MS << attempt));
            }
        }
    }
    Err(last_error)
}

/// Drop and recreate `database`, then apply the board game schema to it.
///
/// Returns the connection URL of the fresh database.
pub fn fresh_board_game_database(cluster: &TestCluster, database: &str) -> Result<String, String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut admin = Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    // One statement per call: multi-statement batches run in an implicit
    // transaction, which CREATE DATABASE rejects.
    for statement in [
        format!("DROP DATABASE IF EXISTS \"{database}\""),
        format!("CREATE DATABASE \"{database}\""),
    ] {
        admin
            .batch_execute(&statement)
            .map_err(|err| format_postgres_error(&err))?;
    }

    let url = cluster.connection().database_url(database);
    let mut client = Client::connect(&url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(CREATE_BOARD_GAMES_SQL)
        .map_err(|err| format_postgres_error(&err))?;
    Ok(url)
}
