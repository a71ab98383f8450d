//! Domain × function → `CIMPL_RANK` lookup.

use std::collections::HashMap;

use crate::vocab::{DOMAINS, FUNCTIONS};

/// `"{domain}-{function}"`, the DFP key.
pub fn dfp_key(domain: &str, function: &str) -> String {
    format!("{domain}-{function}")
}

/// Precomputed rank codes for every domain/function pair.
///
/// Ranks are 1-based positions in the row-major product `DOMAINS × FUNCTIONS`,
/// so a pair always maps to the same code.
#[derive(Debug, Clone)]
pub struct RankTable {
    by_dfp: HashMap<String, u32>,
}

impl RankTable {
    pub fn new() -> Self {
        let mut by_dfp = HashMap::with_capacity(DOMAINS.len() * FUNCTIONS.len());
        let mut rank = 1u32;
        for domain in DOMAINS {
            for function in FUNCTIONS {
                by_dfp.insert(dfp_key(domain, function), rank);
                rank += 1;
            }
        }
        Self { by_dfp }
    }

    pub fn rank(&self, domain: &str, function: &str) -> Option<u32> {
        self.by_dfp.get(&dfp_key(domain, function)).copied()
    }

    pub fn len(&self) -> usize {
        self.by_dfp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_dfp.is_empty()
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self::new()
    }
}
