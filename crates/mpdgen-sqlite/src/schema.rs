//! Table and index DDL.

use rusqlite::Connection;

pub const MPD_TABLE: &str = "mpd_data";
pub const TEST_SCORES_TABLE: &str = "test_scores";

pub const CREATE_MPD_TABLE: &str = "
CREATE TABLE IF NOT EXISTS mpd_data (
    ID INTEGER PRIMARY KEY,
    SID VARCHAR(128),
    SNAPSHOT VARCHAR(128),
    SNAPSHOT_MONTH DATE,
    CIMPL_RANK VARCHAR(128),
    DUTY_ORG VARCHAR(128),
    FUNCTION VARCHAR(128),
    BUILDING VARCHAR(128),
    POP_CATEGORY VARCHAR(128),
    GROUPS VARCHAR(128),
    FOCUS_AREA VARCHAR(128),
    NIAB_CATEGORY VARCHAR(128),
    FUNCTIONAL_ROLE VARCHAR(128),
    COUNTRY VARCHAR(128),
    NIPF_PRIORITY VARCHAR(128),
    DOMAIN VARCHAR(128),
    FTE REAL,
    EMPLOYEE_SKILL_COMMUNITY VARCHAR(128),
    MISSION_ELEMENT VARCHAR(128),
    LOCATION_SPECIFIC VARCHAR(256),
    STATE VARCHAR(128),
    DFP VARCHAR(256),
    WORK_ROLE VARCHAR(128),
    CITY VARCHAR(128),
    CIMPL_RANK_CATEGORY VARCHAR(128),
    ASSIGNED_ORG_TD VARCHAR(128),
    STATUS VARCHAR(128),
    SITE VARCHAR(128),
    LOE_JUSTIFICATION VARCHAR(128),
    REGION VARCHAR(128),
    AFFILIATION_TYPE VARCHAR(128),
    ACTIVITY_DAF VARCHAR(128),
    CRITICAL_SKILLS VARCHAR(128),
    DOMAIN_TWO_PLUS_THREE VARCHAR(10),
    SITE_RESILIENCE VARCHAR(128),
    TOKENS VARCHAR(500)
)";

pub const CREATE_TEST_SCORES_TABLE: &str = "
CREATE TABLE IF NOT EXISTS test_scores (
    ID INTEGER PRIMARY KEY,
    SID VARCHAR(25),
    LANGUAGE VARCHAR(150),
    LISTEN_SCORE VARCHAR(25),
    READ_SCORE VARCHAR(25),
    TEST_GROUP VARCHAR(25),
    SNAPSHOT VARCHAR(25),
    SNAPSHOT_MONTH DATE,
    TOKENS VARCHAR(500)
)";

/// `mpd_data` columns in insert order. Each is also the JSON key it is read from.
pub const MPD_COLUMNS: [&str; 36] = [
    "ID",
    "SID",
    "SNAPSHOT",
    "SNAPSHOT_MONTH",
    "CIMPL_RANK",
    "DUTY_ORG",
    "FUNCTION",
    "BUILDING",
    "POP_CATEGORY",
    "GROUPS",
    "FOCUS_AREA",
    "NIAB_CATEGORY",
    "FUNCTIONAL_ROLE",
    "COUNTRY",
    "NIPF_PRIORITY",
    "DOMAIN",
    "FTE",
    "EMPLOYEE_SKILL_COMMUNITY",
    "MISSION_ELEMENT",
    "LOCATION_SPECIFIC",
    "STATE",
    "DFP",
    "WORK_ROLE",
    "CITY",
    "CIMPL_RANK_CATEGORY",
    "ASSIGNED_ORG_TD",
    "STATUS",
    "SITE",
    "LOE_JUSTIFICATION",
    "REGION",
    "AFFILIATION_TYPE",
    "ACTIVITY_DAF",
    "CRITICAL_SKILLS",
    "DOMAIN_TWO_PLUS_THREE",
    "SITE_RESILIENCE",
    "TOKENS",
];

pub const TEST_SCORE_COLUMNS: [&str; 9] = [
    "ID",
    "SID",
    "LANGUAGE",
    "LISTEN_SCORE",
    "READ_SCORE",
    "TEST_GROUP",
    "SNAPSHOT",
    "SNAPSHOT_MONTH",
    "TOKENS",
];

/// Older files name `ASSIGNED_ORG_TD` as `ASSIGNED_ORG`.
pub const KEY_ALIASES: [(&str, &str); 1] = [("ASSIGNED_ORG_TD", "ASSIGNED_ORG")];

/// `INSERT INTO {table} (..) VALUES (?1, ..)` over `columns`.
pub fn insert_sql(table: &str, columns: &[&str]) -> String {
    let placeholders = (1..=columns.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders})",
        columns.join(", ")
    )
}

/// `(name, DDL)` for every lookup index.
pub const INDEXES: [(&str, &str); 7] = [
    ("idx_mpd_sid", "CREATE INDEX IF NOT EXISTS idx_mpd_sid ON mpd_data(SID)"),
    ("idx_mpd_snapshot", "CREATE INDEX IF NOT EXISTS idx_mpd_snapshot ON mpd_data(SNAPSHOT)"),
    (
        "idx_mpd_affiliation",
        "CREATE INDEX IF NOT EXISTS idx_mpd_affiliation ON mpd_data(AFFILIATION_TYPE)",
    ),
    ("idx_test_sid", "CREATE INDEX IF NOT EXISTS idx_test_sid ON test_scores(SID)"),
    (
        "idx_test_snapshot",
        "CREATE INDEX IF NOT EXISTS idx_test_snapshot ON test_scores(SNAPSHOT)",
    ),
    ("idx_test_group", "CREATE INDEX IF NOT EXISTS idx_test_group ON test_scores(TEST_GROUP)"),
    (
        "idx_test_language",
        "CREATE INDEX IF NOT EXISTS idx_test_language ON test_scores(LANGUAGE)",
    ),
];

pub fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(CREATE_MPD_TABLE, [])?;
    conn.execute(CREATE_TEST_SCORES_TABLE, [])?;
    Ok(())
}

pub fn create_indexes(conn: &Connection) -> rusqlite::Result<()> {
    for (_, ddl) in INDEXES {
        conn.execute(ddl, [])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_and_indexes_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
        create_indexes(&conn).unwrap();
        create_indexes(&conn).unwrap();

        let indexes: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_%' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        let mut expected: Vec<String> = INDEXES.iter().map(|(n, _)| n.to_string()).collect();
        expected.sort();
        assert_eq!(indexes, expected);
    }

    #[test]
    fn mpd_table_has_thirty_six_columns() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('mpd_data')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 36);
    }

    #[test]
    fn insert_columns_match_table_columns() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        for (table, columns) in [
            (MPD_TABLE, &MPD_COLUMNS[..]),
            (TEST_SCORES_TABLE, &TEST_SCORE_COLUMNS[..]),
        ] {
            let names: Vec<String> = conn
                .prepare(&format!("SELECT name FROM pragma_table_info('{table}')"))
                .unwrap()
                .query_map([], |row| row.get(0))
                .unwrap()
                .collect::<rusqlite::Result<_>>()
                .unwrap();
            assert_eq!(names, columns);
            conn.prepare(&insert_sql(table, columns)).unwrap();
        }
    }
}
