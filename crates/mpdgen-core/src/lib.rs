//! Notional MPD dashboard data
//!
//! Generates two synthetic, non-operational datasets for dashboard demos:
//! - **MPD**: person/role assignment records. A person (SID) holds 1–4 role
//!   records within one snapshot and their FTE shares sum to exactly 1.0.
//! - **Test scores**: language test results that each reference an existing
//!   MPD `(SID, snapshot)` pair.
//!
//! All sampling goes through a caller-supplied RNG, so a fixed seed
//! reproduces a dataset exactly.

pub mod error;
pub mod fte;
pub mod io;
pub mod mpd;
pub mod population;
pub mod rank;
pub mod record;
pub mod summary;
pub mod test_scores;
pub mod tokens;
pub mod vocab;

pub use error::{GenError, Result};
pub use mpd::MpdGenerator;
pub use record::{Fte, MpdRecord, PersonProfile, Snapshot, TestGroup, TestScoreRecord};
pub use test_scores::{generate_test_scores, test_record_target, ReferenceIndex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

pub const DEFAULT_MPD_ROWS: usize = 100_000;
pub const DEFAULT_MPD_FILE: &str = "mpd_notional_data.json";
pub const DEFAULT_TESTS_FILE: &str = "test_scores_notional_data.json";

/// Average number of tests per tested SID, used for the coverage estimate.
pub const EXPECTED_TESTS_PER_SID: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub mpd_rows: usize,
    /// Overrides [`test_record_target`] when set.
    pub test_rows: Option<usize>,
    /// Fixed RNG seed; drawn from OS entropy when unset.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mpd_rows: DEFAULT_MPD_ROWS,
            test_rows: None,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn test_rows(&self) -> usize {
        self.test_rows
            .unwrap_or_else(|| test_record_target(self.mpd_rows))
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().gen())
    }
}

/// Both datasets plus the seed that produced them.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub seed: u64,
    pub mpd: Vec<MpdRecord>,
    pub tests: Vec<TestScoreRecord>,
}

pub fn generate_datasets(config: &GeneratorConfig) -> Result<Datasets> {
    let seed = config.resolve_seed();
    info!(seed, "seeded generator");
    let mut rng = StdRng::seed_from_u64(seed);
    let (mpd, tests) = generate_with_rng(&mut rng, config.mpd_rows, config.test_rows())?;
    Ok(Datasets { seed, mpd, tests })
}

/// Generate MPD rows, then test scores referencing them.
///
/// With no MPD rows there is nothing to reference, so no test rows are
/// produced regardless of `test_rows`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    mpd_rows: usize,
    test_rows: usize,
) -> Result<(Vec<MpdRecord>, Vec<TestScoreRecord>)> {
    let mpd = MpdGenerator::new()?.generate(rng, mpd_rows)?;
    let test_rows = if mpd.is_empty() && test_rows > 0 {
        warn!(test_rows, "no MPD records generated; skipping test scores");
        0
    } else {
        test_rows
    };
    let tests = generate_test_scores(rng, &mpd, test_rows)?;
    Ok((mpd, tests))
}
