//! Post-load database statistics.

use rusqlite::Connection;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseStats {
    pub mpd_rows: u64,
    pub test_rows: u64,
    pub mpd_unique_sids: u64,
    pub test_unique_sids: u64,
    /// Test rows with no MPD row sharing their SID and snapshot.
    pub orphaned_test_rows: u64,
}

impl DatabaseStats {
    pub fn collect(conn: &Connection) -> rusqlite::Result<Self> {
        let count = |sql: &str| -> rusqlite::Result<u64> {
            conn.query_row(sql, [], |row| row.get::<_, i64>(0))
                .map(|n| n.max(0) as u64)
        };
        Ok(Self {
            mpd_rows: count("SELECT COUNT(*) FROM mpd_data")?,
            test_rows: count("SELECT COUNT(*) FROM test_scores")?,
            mpd_unique_sids: count("SELECT COUNT(DISTINCT SID) FROM mpd_data")?,
            test_unique_sids: count("SELECT COUNT(DISTINCT SID) FROM test_scores")?,
            orphaned_test_rows: count(
                "SELECT COUNT(*) FROM test_scores t
                 WHERE NOT EXISTS (
                     SELECT 1 FROM mpd_data m WHERE m.SID = t.SID AND m.SNAPSHOT = t.SNAPSHOT
                 )",
            )?,
        })
    }

    /// Share of MPD SIDs with at least one test, if there are any MPD SIDs.
    pub fn coverage_percent(&self) -> Option<f64> {
        (self.mpd_unique_sids > 0)
            .then(|| self.test_unique_sids as f64 * 100.0 / self.mpd_unique_sids as f64)
    }

    pub fn average_tests_per_sid(&self) -> Option<f64> {
        (self.test_unique_sids > 0).then(|| self.test_rows as f64 / self.test_unique_sids as f64)
    }
}
