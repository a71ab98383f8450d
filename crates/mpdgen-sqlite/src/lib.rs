//! Load the notional MPD and test-score JSON datasets into SQLite.
//!
//! The load is a straight copy:
//! - both JSON files are read up front; a missing or malformed file is fatal
//! - any existing database at the output path is replaced
//! - rows are copied field by field, in file order, inside one transaction
//! - a row that cannot be bound or inserted is logged and skipped
//! - lookup indexes are built, the transaction committed, and statistics
//!   collected from the finished database

pub mod error;
pub mod row;
pub mod schema;
pub mod stats;

pub use error::{LoadError, Result};
pub use stats::DatabaseStats;

use std::path::{Path, PathBuf};

use mpdgen_core::io::read_json_array;
use mpdgen_core::{DEFAULT_MPD_FILE, DEFAULT_TESTS_FILE};
use rusqlite::{params_from_iter, Connection, Transaction};
use serde_json::Value;
use tracing::{info, warn};

pub const DEFAULT_DB_FILE: &str = "development.db";

const MPD_PROGRESS_EVERY: usize = 10_000;
const TEST_PROGRESS_EVERY: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub mpd_path: PathBuf,
    pub tests_path: PathBuf,
    pub db_path: PathBuf,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            mpd_path: PathBuf::from(DEFAULT_MPD_FILE),
            tests_path: PathBuf::from(DEFAULT_TESTS_FILE),
            db_path: PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}

/// Outcome of loading one table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableLoad {
    pub inserted: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub mpd: TableLoad,
    pub tests: TableLoad,
    pub stats: DatabaseStats,
}

/// Read both JSON files and write a fresh database at `config.db_path`.
pub fn load(config: &LoaderConfig) -> Result<LoadReport> {
    let mpd = read_input(&config.mpd_path)?;
    let tests = read_input(&config.tests_path)?;

    if config.db_path.exists() {
        std::fs::remove_file(&config.db_path).map_err(|source| LoadError::RemoveExisting {
            path: config.db_path.clone(),
            source,
        })?;
        info!(path = %config.db_path.display(), "removed existing database");
    }

    let mut conn = Connection::open(&config.db_path)?;
    info!(path = %config.db_path.display(), "connected to database");
    load_into(&mut conn, mpd, tests)
}

fn read_input(path: &Path) -> Result<Vec<Value>> {
    let items = read_json_array(path)?;
    info!(path = %path.display(), records = items.len(), "loaded JSON records");
    Ok(items)
}

/// Create tables, insert both datasets, index, commit and collect statistics.
pub fn load_into(conn: &mut Connection, mpd: Vec<Value>, tests: Vec<Value>) -> Result<LoadReport> {
    schema::create_tables(conn)?;

    let tx = conn.transaction()?;
    let mpd_load = insert_rows(
        &tx,
        schema::MPD_TABLE,
        &schema::MPD_COLUMNS,
        mpd,
        MPD_PROGRESS_EVERY,
    )?;
    let test_load = insert_rows(
        &tx,
        schema::TEST_SCORES_TABLE,
        &schema::TEST_SCORE_COLUMNS,
        tests,
        TEST_PROGRESS_EVERY,
    )?;
    schema::create_indexes(&tx)?;
    tx.commit()?;
    info!("committed all rows and indexes");

    let stats = DatabaseStats::collect(conn)?;
    Ok(LoadReport {
        mpd: mpd_load,
        tests: test_load,
        stats,
    })
}

fn record_id(value: &Value) -> String {
    value
        .get("ID")
        .map(Value::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

fn insert_rows(
    tx: &Transaction<'_>,
    table: &str,
    columns: &[&'static str],
    rows: Vec<Value>,
    progress_every: usize,
) -> Result<TableLoad> {
    info!(table, records = rows.len(), "inserting records");
    let mut stmt = tx.prepare(&schema::insert_sql(table, columns))?;
    let mut load = TableLoad::default();

    for value in &rows {
        let params = match row::bind_values(value, columns) {
            Ok(params) => params,
            Err(err) => {
                warn!(table, id = %record_id(value), error = %err, "skipping record");
                load.skipped += 1;
                continue;
            }
        };
        match stmt.execute(params_from_iter(params)) {
            Ok(_) => {
                load.inserted += 1;
                if load.inserted % progress_every == 0 {
                    info!(table, "inserted {} records", load.inserted);
                }
            }
            Err(err) => {
                warn!(table, id = %record_id(value), error = %err, "failed to insert record");
                load.skipped += 1;
            }
        }
    }

    info!(table, inserted = load.inserted, skipped = load.skipped, "table loaded");
    Ok(load)
}
