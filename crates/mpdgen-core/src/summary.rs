//! Summary statistics over generated datasets.
//!
//! These are plain data; the CLI decides how to print them.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::record::{MpdRecord, TestScoreRecord};
use crate::test_scores::ReferenceIndex;
use crate::tokens::{classify, favored_expression, TokenComplexity};

pub const TOP_LANGUAGES: usize = 10;
pub const TOKEN_SAMPLES: usize = 10;

/// `count / total` as a percentage, 0 for an empty total.
pub fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenComplexityCounts {
    pub simple: usize,
    pub medium: usize,
    pub complex: usize,
    /// Exact `AAA&BBB&CCC` matches.
    pub favored: usize,
}

impl TokenComplexityCounts {
    pub fn tally<'a>(expressions: impl IntoIterator<Item = &'a str>) -> Self {
        let favored = favored_expression();
        let mut counts = Self::default();
        for expr in expressions {
            if expr == favored {
                counts.favored += 1;
            }
            match classify(expr) {
                TokenComplexity::Simple => counts.simple += 1,
                TokenComplexity::Medium => counts.medium += 1,
                TokenComplexity::Complex => counts.complex += 1,
            }
        }
        counts
    }

    pub fn get(&self, tier: TokenComplexity) -> usize {
        match tier {
            TokenComplexity::Simple => self.simple,
            TokenComplexity::Medium => self.medium,
            TokenComplexity::Complex => self.complex,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MpdSummary {
    pub total: usize,
    pub unique_sids: usize,
    /// Sorted by snapshot label.
    pub by_snapshot: Vec<(String, usize)>,
    /// Sorted by affiliation.
    pub by_affiliation: Vec<(String, usize)>,
    pub tokens: TokenComplexityCounts,
}

impl MpdSummary {
    pub fn compute(mpd: &[MpdRecord]) -> Self {
        Self {
            total: mpd.len(),
            unique_sids: unique_sids(mpd.iter().map(|r| r.person.sid.as_str())),
            by_snapshot: sorted_counts(mpd.iter().map(|r| r.person.snapshot.label())),
            by_affiliation: sorted_counts(mpd.iter().map(|r| r.person.affiliation_type.as_str())),
            tokens: TokenComplexityCounts::tally(mpd.iter().map(|r| r.person.tokens.as_str())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestScoreSummary {
    pub total: usize,
    pub unique_sids: usize,
    pub mpd_unique_sids: usize,
    /// Sorted by group name.
    pub by_group: Vec<(String, usize)>,
    /// Highest volume first, ties by name.
    pub top_languages: Vec<(String, usize)>,
    pub tokens: TokenComplexityCounts,
    pub token_samples: Vec<String>,
}

impl TestScoreSummary {
    pub fn compute<R: Rng + ?Sized>(
        rng: &mut R,
        tests: &[TestScoreRecord],
        mpd: &[MpdRecord],
    ) -> Self {
        let mut top_languages = sorted_counts(tests.iter().map(|t| t.language.as_str()));
        top_languages.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_languages.truncate(TOP_LANGUAGES);

        let token_samples = tests
            .choose_multiple(rng, TOKEN_SAMPLES)
            .map(|t| t.tokens.clone())
            .collect();

        Self {
            total: tests.len(),
            unique_sids: unique_sids(tests.iter().map(|t| t.sid.as_str())),
            mpd_unique_sids: unique_sids(mpd.iter().map(|r| r.person.sid.as_str())),
            by_group: sorted_counts(tests.iter().map(|t| t.test_group.as_str())),
            top_languages,
            tokens: TokenComplexityCounts::tally(tests.iter().map(|t| t.tokens.as_str())),
            token_samples,
        }
    }

    pub fn coverage_percent(&self) -> f64 {
        percent(self.unique_sids, self.mpd_unique_sids)
    }

    pub fn average_tests_per_sid(&self) -> f64 {
        if self.unique_sids == 0 {
            0.0
        } else {
            self.total as f64 / self.unique_sids as f64
        }
    }
}

/// Test rows whose `(SID, snapshot)` has no MPD counterpart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub checked: usize,
    pub orphaned: Vec<(String, String)>,
}

impl IntegrityReport {
    pub fn check(tests: &[TestScoreRecord], mpd: &[MpdRecord]) -> Self {
        let index = ReferenceIndex::build(mpd);
        let orphaned: BTreeSet<(String, String)> = tests
            .iter()
            .filter(|t| !index.contains(&t.sid, t.snapshot))
            .map(|t| (t.sid.clone(), t.snapshot.label().to_string()))
            .collect();
        Self {
            checked: tests.len(),
            orphaned: orphaned.into_iter().collect(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.orphaned.is_empty()
    }
}

fn unique_sids<'a>(sids: impl Iterator<Item = &'a str>) -> usize {
    sids.collect::<BTreeSet<_>>().len()
}

fn sorted_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect::<BTreeMap<_, _>>()
        .into_iter()
        .collect()
}
