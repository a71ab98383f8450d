//! Console reports for the generate and load commands.

use colored::Colorize;
use mpdgen_core::summary::{percent, IntegrityReport, MpdSummary, TestScoreSummary, TokenComplexityCounts};
use mpdgen_core::tokens::TokenComplexity;
use mpdgen_sqlite::{DatabaseStats, LoadReport};
use std::path::Path;

fn heading(title: &str) {
    println!("\n{}", title.green().bold());
}

fn distribution(title: &str, rows: &[(String, usize)], total: usize, unit: &str) {
    println!("\n{title}:");
    for (label, count) in rows {
        println!(
            "  {label}: {count} {unit} ({:.1}%)",
            percent(*count, total)
        );
    }
}

fn token_mix(title: &str, counts: &TokenComplexityCounts, total: usize) {
    println!("\n{title}:");
    for tier in TokenComplexity::ALL {
        let n = counts.get(tier);
        println!("  {}: {n} records ({:.1}%)", tier.label(), percent(n, total));
    }
    println!(
        "  AAA&BBB&CCC (favored pattern): {} records ({:.1}%)",
        counts.favored,
        percent(counts.favored, total)
    );
}

pub(crate) fn plan(mpd_rows: usize, test_rows: usize, expected_per_sid: usize) {
    let expected_sids = test_rows / expected_per_sid.max(1);
    println!(
        "{} {mpd_rows} MPD records, {test_rows} test score records",
        "Planning".green().bold()
    );
    println!(
        "  {} expected SIDs with tests: ~{expected_sids} ({:.1}% of MPD rows)",
        "→".yellow(),
        percent(expected_sids, mpd_rows)
    );
}

pub(crate) fn mpd_summary(summary: &MpdSummary) {
    heading("MPD Dataset Summary");
    println!("Total records: {}", summary.total);
    println!("Unique SIDs: {}", summary.unique_sids);
    distribution("Distribution by Snapshot", &summary.by_snapshot, summary.total, "records");
    distribution(
        "Distribution by Affiliation Type",
        &summary.by_affiliation,
        summary.total,
        "records",
    );
    token_mix("MPD Token Complexity Distribution", &summary.tokens, summary.total);
}

pub(crate) fn test_summary(summary: &TestScoreSummary) {
    heading("Test Scores Dataset Summary");
    println!("Total test records: {}", summary.total);
    println!("Unique SIDs with test scores: {}", summary.unique_sids);
    println!(
        "Percentage of MPD SIDs with tests: {:.1}%",
        summary.coverage_percent()
    );
    println!("Average tests per SID: {:.1}", summary.average_tests_per_sid());
    distribution("Distribution by Test Group", &summary.by_group, summary.total, "records");
    distribution(
        "Top 10 Languages by Test Volume",
        &summary.top_languages,
        summary.total,
        "tests",
    );
    token_mix("Token Complexity Distribution", &summary.tokens, summary.total);

    if !summary.token_samples.is_empty() {
        println!("\nSample Token Expressions:");
        for (i, expr) in summary.token_samples.iter().enumerate() {
            println!("  {}. {expr}", i + 1);
        }
    }
}

pub(crate) fn integrity(report: &IntegrityReport) {
    heading("Referential Integrity Check");
    println!(
        "Orphaned SID/snapshot pairs in test data: {} (should be 0)",
        report.orphaned.len()
    );
    if report.is_clean() {
        println!(
            "{} all {} test score records reference an MPD record",
            "ok".green().bold(),
            report.checked
        );
    } else {
        for (sid, snapshot) in report.orphaned.iter().take(10) {
            println!("  {} {sid} ({snapshot})", "orphan".red().bold());
        }
    }
}

pub(crate) fn wrote(path: &Path, records: usize) {
    println!(
        "{} {} ({records} records)",
        "wrote".green().bold(),
        path.display().to_string().bold()
    );
}

fn stats(stats: &DatabaseStats) {
    heading("Database Statistics");
    println!("  MPD records: {}", stats.mpd_rows);
    println!("  Test score records: {}", stats.test_rows);
    println!("  Unique SIDs in MPD: {}", stats.mpd_unique_sids);
    println!("  Unique SIDs with tests: {}", stats.test_unique_sids);
    if let Some(coverage) = stats.coverage_percent() {
        println!("  Test coverage: {coverage:.1}% of MPD SIDs");
    }
    if let Some(avg) = stats.average_tests_per_sid() {
        println!("  Average tests per SID: {avg:.1}");
    }
    let orphans = stats.orphaned_test_rows;
    if orphans == 0 {
        println!("  Orphaned test rows: {}", "0".green());
    } else {
        println!("  Orphaned test rows: {}", orphans.to_string().red().bold());
    }
}

pub(crate) fn load(db_path: &Path, report: &LoadReport) {
    stats(&report.stats);
    println!(
        "\n{} {}",
        "created".green().bold(),
        db_path.display().to_string().bold()
    );
    println!(
        "  MPD records: {} inserted, {} skipped",
        report.mpd.inserted, report.mpd.skipped
    );
    println!(
        "  Test records: {} inserted, {} skipped",
        report.tests.inserted, report.tests.skipped
    );
}
