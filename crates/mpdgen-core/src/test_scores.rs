//! Language test scores that reference existing MPD people.

use std::collections::HashMap;

use rand::Rng;
use tracing::info;

use crate::error::{GenError, Result};
use crate::record::{MpdRecord, Snapshot, TestGroup, TestScoreRecord};
use crate::tokens::generate_expression;
use crate::vocab::LANGUAGES;

pub const PROGRESS_EVERY: usize = 1_000;

/// Test-score volume relative to MPD rows (~10% of SIDs averaging 7 tests each).
pub const TESTS_PER_MPD_ROW: f64 = 0.7;

/// Default number of test-score records for `mpd_rows` MPD records.
pub fn test_record_target(mpd_rows: usize) -> usize {
    ((mpd_rows as f64 * TESTS_PER_MPD_ROW) as usize).max(1)
}

/// Every distinct `(SID, snapshot)` in an MPD dataset, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex<'a> {
    keys: Vec<(&'a str, Snapshot)>,
    first: HashMap<(&'a str, Snapshot), &'a MpdRecord>,
}

impl<'a> ReferenceIndex<'a> {
    pub fn build(mpd: &'a [MpdRecord]) -> Self {
        let mut index = Self::default();
        for record in mpd {
            let key = (record.person.sid.as_str(), record.person.snapshot);
            if !index.first.contains_key(&key) {
                index.first.insert(key, record);
                index.keys.push(key);
            }
        }
        index
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, sid: &str, snapshot: Snapshot) -> bool {
        self.first.contains_key(&(sid, snapshot))
    }

    /// Uniformly pick one key and return the first MPD record filed under it.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a MpdRecord> {
        if self.keys.is_empty() {
            return None;
        }
        let key = self.keys[rng.gen_range(0..self.keys.len())];
        self.first.get(&key).copied()
    }
}

/// Generate `count` test-score records, each pointing at an existing MPD person.
pub fn generate_test_scores<R: Rng + ?Sized>(
    rng: &mut R,
    mpd: &[MpdRecord],
    count: usize,
) -> Result<Vec<TestScoreRecord>> {
    info!(count, "generating test score records");

    let index = ReferenceIndex::build(mpd);
    let mut out = Vec::with_capacity(count);
    for id in 1..=count {
        let source = index
            .sample(rng)
            .ok_or(GenError::EmptyReferenceSet { requested: count })?;

        let listen_score = rng.gen_range(1..=5u8);
        let read_score = rng.gen_range(1..=5u8);
        out.push(TestScoreRecord {
            id: id as u64,
            sid: source.person.sid.clone(),
            language: LANGUAGES[rng.gen_range(0..LANGUAGES.len())].to_string(),
            listen_score,
            read_score,
            test_group: TestGroup::from_scores(listen_score, read_score),
            snapshot: source.person.snapshot,
            snapshot_month: source.person.snapshot_month,
            tokens: generate_expression(rng),
        });

        if id % PROGRESS_EVERY == 0 {
            info!("generated {id} test score records");
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mpd::MpdGenerator;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn target_follows_seventy_percent_rule() {
        assert_eq!(test_record_target(0), 1);
        assert_eq!(test_record_target(1), 1);
        assert_eq!(test_record_target(10), 7);
        assert_eq!(test_record_target(1_000), 700);
        assert_eq!(test_record_target(100_000), 70_000);
    }

    #[test]
    fn every_test_references_an_mpd_person() {
        let mut rng = StdRng::seed_from_u64(21);
        let mpd = MpdGenerator::new().unwrap().generate(&mut rng, 800).unwrap();
        let tests = generate_test_scores(&mut rng, &mpd, 560).unwrap();
        assert_eq!(tests.len(), 560);

        let index = ReferenceIndex::build(&mpd);
        for t in &tests {
            assert!(index.contains(&t.sid, t.snapshot), "orphan {}", t.sid);
            assert_eq!(t.snapshot_month, t.snapshot.date());
            assert!((1..=5).contains(&t.listen_score));
            assert!((1..=5).contains(&t.read_score));
            assert!(LANGUAGES.contains(&t.language.as_str()));
        }
    }

    #[test]
    fn no_mpd_records_means_nothing_to_reference() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_test_scores(&mut rng, &[], 0).unwrap().is_empty());
        assert!(matches!(
            generate_test_scores(&mut rng, &[], 1),
            Err(GenError::EmptyReferenceSet { requested: 1 })
        ));
    }

    proptest! {
        #[test]
        fn test_group_matches_max_score(listen in 1u8..=5, read in 1u8..=5) {
            let expected = match listen.max(read) {
                m if m >= 3 => TestGroup::High,
                2 => TestGroup::Medium,
                _ => TestGroup::Low,
            };
            prop_assert_eq!(TestGroup::from_scores(listen, read), expected);
        }
    }
}
