//! End-to-end tests across crates:
//! - generate → JSON files → SQLite database
//! - relationships that must survive the round trip (FTE sums, SID references)
//!
//! Run with: cargo test --test integration_tests

use mpdgen_core::io::{read_json_array, write_json};
use mpdgen_core::summary::IntegrityReport;
use mpdgen_core::{generate_datasets, GeneratorConfig, DEFAULT_MPD_FILE, DEFAULT_TESTS_FILE};
use mpdgen_sqlite::{load, LoaderConfig, DEFAULT_DB_FILE};
use rusqlite::Connection;
use tempfile::tempdir;

fn write_fixture(dir: &std::path::Path, rows: usize, seed: u64) -> LoaderConfig {
    let data = generate_datasets(&GeneratorConfig {
        mpd_rows: rows,
        test_rows: None,
        seed: Some(seed),
    })
    .expect("generation should succeed");
    assert!(IntegrityReport::check(&data.tests, &data.mpd).is_clean());

    let config = LoaderConfig {
        mpd_path: dir.join(DEFAULT_MPD_FILE),
        tests_path: dir.join(DEFAULT_TESTS_FILE),
        db_path: dir.join(DEFAULT_DB_FILE),
    };
    write_json(&config.mpd_path, &data.mpd).unwrap();
    write_json(&config.tests_path, &data.tests).unwrap();
    config
}

#[test]
fn test_generated_files_load_without_loss() {
    let dir = tempdir().unwrap();
    let config = write_fixture(dir.path(), 1_000, 2024);

    let mpd_json = read_json_array(&config.mpd_path).unwrap();
    let tests_json = read_json_array(&config.tests_path).unwrap();
    assert_eq!(mpd_json.len(), 1_000);
    assert_eq!(tests_json.len(), 700);

    let report = load(&config).expect("load should succeed");
    assert_eq!(report.mpd.inserted, 1_000);
    assert_eq!(report.mpd.skipped, 0);
    assert_eq!(report.tests.inserted, 700);
    assert_eq!(report.tests.skipped, 0);
    assert_eq!(report.stats.orphaned_test_rows, 0);
}

#[test]
fn test_database_preserves_person_invariants() {
    let dir = tempdir().unwrap();
    let config = write_fixture(dir.path(), 600, 7);
    load(&config).unwrap();

    let conn = Connection::open(&config.db_path).unwrap();

    // Every person's FTE shares sum to 1.0 and stay within one snapshot.
    let mut stmt = conn
        .prepare(
            "SELECT SID, SUM(FTE), COUNT(DISTINCT SNAPSHOT), COUNT(*) \
             FROM mpd_data GROUP BY SID",
        )
        .unwrap();
    let people = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert!(!people.is_empty());
    for (sid, fte, snapshots, roles) in &people {
        assert!((fte - 1.0).abs() < 1e-9, "{sid} sums to {fte}");
        assert_eq!(*snapshots, 1, "{sid} spans snapshots");
        assert!((1..=4).contains(roles), "{sid} has {roles} roles");
    }

    // Every test row joins back to an MPD row on (SID, SNAPSHOT).
    let unmatched: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM test_scores t \
             WHERE NOT EXISTS (SELECT 1 FROM mpd_data m \
                               WHERE m.SID = t.SID AND m.SNAPSHOT = t.SNAPSHOT)",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(unmatched, 0);
}

#[test]
fn test_same_seed_produces_identical_files() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    let first = write_fixture(a.path(), 200, 11);
    let second = write_fixture(b.path(), 200, 11);

    assert_eq!(
        std::fs::read_to_string(&first.mpd_path).unwrap(),
        std::fs::read_to_string(&second.mpd_path).unwrap()
    );
    assert_eq!(
        std::fs::read_to_string(&first.tests_path).unwrap(),
        std::fs::read_to_string(&second.tests_path).unwrap()
    );
}
