//! mpdgen CLI
//!
//! Two independent commands:
//! - `generate`: build the notional MPD and test-score datasets and write them as JSON
//! - `load`: copy those JSON files into a fresh SQLite database

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use mpdgen_core::summary::{IntegrityReport, MpdSummary, TestScoreSummary};
use mpdgen_core::{
    generate_datasets, generate_with_rng, GeneratorConfig, DEFAULT_MPD_FILE, DEFAULT_MPD_ROWS,
    DEFAULT_TESTS_FILE, EXPECTED_TESTS_PER_SID,
};
use mpdgen_sqlite::{LoaderConfig, DEFAULT_DB_FILE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

mod logging;
mod report;

#[derive(Parser)]
#[command(name = "mpdgen")]
#[command(
    author,
    version,
    about = "Generate notional MPD dashboard data and load it into SQLite"
)]
struct Cli {
    /// More log output (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate MPD and test-score datasets as JSON.
    ///
    /// Test scores default to 70% of the MPD row count and always reference
    /// an existing MPD SID/snapshot pair.
    Generate(GenerateArgs),

    /// Load the two JSON datasets into a new SQLite database.
    ///
    /// An existing database at the output path is replaced.
    Load(LoadArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of MPD records (default 100000). Non-integer values fall back to the default.
    #[arg(allow_hyphen_values = true)]
    rows: Option<String>,
    /// RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of test-score records (default: 70% of ROWS, at least 1).
    #[arg(long)]
    test_rows: Option<usize>,
    /// Directory for the output files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// MPD output file name.
    #[arg(long, default_value = DEFAULT_MPD_FILE)]
    mpd_out: PathBuf,
    /// Test-score output file name.
    #[arg(long, default_value = DEFAULT_TESTS_FILE)]
    tests_out: PathBuf,
    /// Also write a small sample pair: N MPD rows and N/10 test rows.
    #[arg(long, value_name = "N")]
    samples: Option<usize>,
}

#[derive(Args)]
struct LoadArgs {
    /// MPD JSON input.
    #[arg(default_value = DEFAULT_MPD_FILE)]
    mpd_file: PathBuf,
    /// Test-score JSON input.
    #[arg(default_value = DEFAULT_TESTS_FILE)]
    test_file: PathBuf,
    /// SQLite database to create.
    #[arg(default_value = DEFAULT_DB_FILE)]
    db_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Generate(args) => cmd_generate(&args),
        Commands::Load(args) => cmd_load(&args),
    }
}

/// Parse the optional row-count argument, falling back to the default.
fn parse_row_count(raw: Option<&str>) -> usize {
    match raw {
        None => {
            info!("no row count given; using default {DEFAULT_MPD_ROWS}");
            DEFAULT_MPD_ROWS
        }
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(rows) => rows,
            Err(_) => {
                warn!("invalid row count `{raw}`; using default {DEFAULT_MPD_ROWS}");
                DEFAULT_MPD_ROWS
            }
        },
    }
}

fn cmd_generate(args: &GenerateArgs) -> Result<()> {
    let config = GeneratorConfig {
        mpd_rows: parse_row_count(args.rows.as_deref()),
        test_rows: args.test_rows,
        seed: args.seed,
    };
    report::plan(config.mpd_rows, config.test_rows(), EXPECTED_TESTS_PER_SID);

    let data = generate_datasets(&config).context("failed to generate datasets")?;
    println!(
        "  {} seed {} (re-run with --seed {})",
        "→".yellow(),
        data.seed,
        data.seed
    );

    report::mpd_summary(&MpdSummary::compute(&data.mpd));
    report::test_summary(&TestScoreSummary::compute(
        &mut rand::thread_rng(),
        &data.tests,
        &data.mpd,
    ));

    println!();
    let mpd_path = args.out_dir.join(&args.mpd_out);
    let tests_path = args.out_dir.join(&args.tests_out);
    write_dataset(&mpd_path, &data.mpd)?;
    write_dataset(&tests_path, &data.tests)?;

    if let Some(rows) = args.samples {
        write_samples(&args.out_dir, rows, data.seed.wrapping_add(1))?;
    }

    let integrity = IntegrityReport::check(&data.tests, &data.mpd);
    report::integrity(&integrity);
    if !integrity.is_clean() {
        bail!(
            "{} test score records reference unknown MPD people",
            integrity.orphaned.len()
        );
    }
    Ok(())
}

fn write_dataset<T: serde::Serialize>(path: &Path, records: &[T]) -> Result<()> {
    mpdgen_core::io::write_json(path, records)
        .with_context(|| format!("failed to write {}", path.display()))?;
    report::wrote(path, records.len());
    Ok(())
}

fn write_samples(out_dir: &Path, mpd_rows: usize, seed: u64) -> Result<()> {
    let test_rows = mpd_rows / 10;
    let mut rng = StdRng::seed_from_u64(seed);
    let (mpd, tests) = generate_with_rng(&mut rng, mpd_rows, test_rows)
        .context("failed to generate sample datasets")?;
    write_dataset(&out_dir.join(format!("mpd_sample_{mpd_rows}.json")), &mpd)?;
    write_dataset(&out_dir.join(format!("test_scores_sample_{test_rows}.json")), &tests)?;
    Ok(())
}

fn cmd_load(args: &LoadArgs) -> Result<()> {
    let config = LoaderConfig {
        mpd_path: args.mpd_file.clone(),
        tests_path: args.test_file.clone(),
        db_path: args.db_file.clone(),
    };
    println!("{} JSON into SQLite", "Loading".green().bold());
    println!("  MPD data: {}", config.mpd_path.display());
    println!("  Test scores: {}", config.tests_path.display());
    println!("  Output database: {}", config.db_path.display());

    let report = mpdgen_sqlite::load(&config)
        .with_context(|| format!("failed to build {}", config.db_path.display()))?;
    report::load(&config.db_path, &report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn row_count_falls_back_to_default() {
        assert_eq!(parse_row_count(None), DEFAULT_MPD_ROWS);
        assert_eq!(parse_row_count(Some("1000")), 1_000);
        assert_eq!(parse_row_count(Some(" 25 ")), 25);
        assert_eq!(parse_row_count(Some("0")), 0);
        assert_eq!(parse_row_count(Some("lots")), DEFAULT_MPD_ROWS);
        assert_eq!(parse_row_count(Some("-5")), DEFAULT_MPD_ROWS);
        assert_eq!(parse_row_count(Some("1.5")), DEFAULT_MPD_ROWS);
    }

    #[test]
    fn load_positionals_default_to_generated_names() {
        let cli = Cli::try_parse_from(["mpdgen", "load"]).unwrap();
        let Commands::Load(args) = cli.command else {
            panic!("expected load");
        };
        assert_eq!(args.mpd_file, PathBuf::from(DEFAULT_MPD_FILE));
        assert_eq!(args.test_file, PathBuf::from(DEFAULT_TESTS_FILE));
        assert_eq!(args.db_file, PathBuf::from(DEFAULT_DB_FILE));
    }

    #[test]
    fn generate_accepts_non_numeric_rows() {
        let cli = Cli::try_parse_from(["mpdgen", "generate", "many", "--seed", "5"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.rows.as_deref(), Some("many"));
        assert_eq!(args.seed, Some(5));
    }

    #[test]
    fn negative_rows_reach_the_default_fallback() {
        let cli = Cli::try_parse_from(["mpdgen", "generate", "-v", "-5"]).unwrap();
        assert_eq!(cli.verbose, 1);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.rows.as_deref(), Some("-5"));
        assert_eq!(parse_row_count(args.rows.as_deref()), DEFAULT_MPD_ROWS);
    }

    #[test]
    fn generate_then_load_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let gen = GenerateArgs {
            rows: Some("120".to_string()),
            seed: Some(17),
            test_rows: None,
            out_dir: dir.path().to_path_buf(),
            mpd_out: PathBuf::from(DEFAULT_MPD_FILE),
            tests_out: PathBuf::from(DEFAULT_TESTS_FILE),
            samples: Some(20),
        };
        cmd_generate(&gen).unwrap();
        assert!(dir.path().join("mpd_sample_20.json").exists());
        assert!(dir.path().join("test_scores_sample_2.json").exists());

        let load = LoadArgs {
            mpd_file: dir.path().join(DEFAULT_MPD_FILE),
            test_file: dir.path().join(DEFAULT_TESTS_FILE),
            db_file: dir.path().join(DEFAULT_DB_FILE),
        };
        cmd_load(&load).unwrap();
        assert!(dir.path().join(DEFAULT_DB_FILE).exists());
    }
}
