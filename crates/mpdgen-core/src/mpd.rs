//! MPD (person/role assignment) dataset generation.

use std::collections::HashSet;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::{debug, info};

use crate::error::{GenError, Result};
use crate::fte::split_fte;
use crate::population::plan_population;
use crate::rank::{dfp_key, RankTable};
use crate::record::{MpdRecord, PersonProfile, Snapshot};
use crate::tokens::generate_expression;
use crate::vocab;

/// Log a progress line every this many MPD records.
pub const PROGRESS_EVERY: usize = 2_500;

const SID_PREFIX_LEN: usize = 5;
const SID_SUFFIX_LEN: usize = 2;
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const UPPER_DIGITS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn pick<'a, R: Rng + ?Sized, T>(rng: &mut R, xs: &'a [T]) -> &'a T {
    &xs[rng.gen_range(0..xs.len())]
}

/// A 7-character SID: five letters, then two letters-or-digits.
pub fn random_sid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut sid = String::with_capacity(SID_PREFIX_LEN + SID_SUFFIX_LEN);
    for _ in 0..SID_PREFIX_LEN {
        sid.push(char::from(*pick(rng, UPPER)));
    }
    for _ in 0..SID_SUFFIX_LEN {
        sid.push(char::from(*pick(rng, UPPER_DIGITS)));
    }
    sid
}

pub struct MpdGenerator {
    ranks: RankTable,
    functions: WeightedIndex<u32>,
    orgs: Vec<String>,
}

impl MpdGenerator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            ranks: RankTable::new(),
            functions: WeightedIndex::new(vocab::FUNCTION_WEIGHTS)?,
            orgs: vocab::orgs(),
        })
    }

    /// Generate exactly `total_rows` records with sequential 1-based IDs.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, total_rows: usize) -> Result<Vec<MpdRecord>> {
        info!(total_rows, "generating MPD records");

        let people = plan_population(rng, total_rows);
        debug!(people = people.len(), "population planned");

        let mut records = Vec::with_capacity(total_rows);
        let mut issued_sids = HashSet::with_capacity(people.len());
        let mut next_report = PROGRESS_EVERY;

        for roles in people {
            let sid = loop {
                let candidate = random_sid(rng);
                if issued_sids.insert(candidate.clone()) {
                    break candidate;
                }
            };
            let person = self.person_profile(rng, sid);
            let shares = split_fte(rng, roles)?;

            for fte in shares {
                let domain = *pick(rng, &vocab::DOMAINS);
                let function = vocab::FUNCTIONS[self.functions.sample(rng)];
                let rank = self
                    .ranks
                    .rank(domain, function)
                    .ok_or_else(|| GenError::UnknownDfp {
                        dfp: dfp_key(domain, function),
                    })?;
                records.push(MpdRecord {
                    id: records.len() as u64 + 1,
                    person: person.clone(),
                    domain: domain.to_string(),
                    function: function.to_string(),
                    dfp: dfp_key(domain, function),
                    cimpl_rank: rank.to_string(),
                    fte,
                });
            }

            if records.len() >= next_report {
                info!("generated {} MPD records", records.len());
                next_report = (records.len() / PROGRESS_EVERY + 1) * PROGRESS_EVERY;
            }
        }

        Ok(records)
    }

    fn person_profile<R: Rng + ?Sized>(&self, rng: &mut R, sid: String) -> PersonProfile {
        let snapshot = *pick(rng, &Snapshot::ALL);
        let (city, state, country) = *pick(rng, vocab::LOCATIONS);
        let org = pick(rng, &self.orgs).clone();

        PersonProfile {
            sid,
            snapshot,
            snapshot_month: snapshot.date(),
            duty_org: org.clone(),
            building: pick(rng, vocab::BUILDINGS).to_string(),
            pop_category: pick(rng, vocab::POP_CATEGORIES).to_string(),
            groups: format!("GROUP {}", rng.gen_range(1..=20)),
            focus_area: pick(rng, vocab::FOCUS_AREAS).to_string(),
            niab_category: format!("CATEGORY {}", pick(rng, vocab::NIAB_CATEGORY_SUFFIXES)),
            functional_role: pick(rng, vocab::FUNCTIONAL_ROLES).to_string(),
            country: country.to_string(),
            nipf_priority: pick(rng, vocab::NIPF_PRIORITIES).to_string(),
            employee_skill_community: pick(rng, vocab::SKILLS).to_string(),
            mission_element: org.clone(),
            location_specific: format!("LOCATION {}", rng.gen_range(1..=50)),
            state: state.to_string(),
            work_role: pick(rng, vocab::WORK_ROLES).to_string(),
            city: city.to_string(),
            cimpl_rank_category: pick(rng, vocab::RANK_CATEGORIES).to_string(),
            assigned_org_td: org,
            status: pick(rng, vocab::STATUSES).to_string(),
            site: format!("SITE {}", rng.gen_range(1..=10)),
            loe_justification: pick(rng, vocab::LOE_JUSTIFICATIONS).to_string(),
            region: String::new(),
            affiliation_type: pick(rng, vocab::AFFILIATION_TYPES).to_string(),
            activity_daf: format!("ACTIVITY {}", rng.gen_range(1..=100)),
            critical_skills: pick(rng, vocab::YES_NO).to_string(),
            domain_two_plus_three: pick(rng, vocab::YES_NO).to_string(),
            site_resilience: pick(rng, vocab::SITE_RESILIENCE).to_string(),
            tokens: generate_expression(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn generate(seed: u64, rows: usize) -> Vec<MpdRecord> {
        let mut rng = StdRng::seed_from_u64(seed);
        MpdGenerator::new().unwrap().generate(&mut rng, rows).unwrap()
    }

    #[test]
    fn sid_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let sid = random_sid(&mut rng);
            assert_eq!(sid.len(), 7);
            assert!(sid[..5].chars().all(|c| c.is_ascii_uppercase()));
            assert!(sid[5..]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn exact_row_count_and_sequential_ids() {
        let records = generate(42, 1_234);
        assert_eq!(records.len(), 1_234);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.id, i as u64 + 1);
        }
        assert!(generate(42, 0).is_empty());
    }

    #[test]
    fn person_fte_sums_to_one() {
        let records = generate(9, 3_000);
        let mut tenths: HashMap<(&str, Snapshot), u32> = HashMap::new();
        for r in &records {
            assert!(r.fte.tenths() >= 1);
            *tenths.entry((r.person.sid.as_str(), r.person.snapshot)).or_default() +=
                u32::from(r.fte.tenths());
        }
        assert!(tenths.values().all(|t| *t == 10), "{tenths:?}");
    }

    #[test]
    fn rank_is_a_function_of_domain_and_function() {
        let records = generate(10, 2_000);
        let mut seen: HashMap<(&str, &str), &str> = HashMap::new();
        for r in &records {
            let prior = seen.insert((r.domain.as_str(), r.function.as_str()), r.cimpl_rank.as_str());
            if let Some(prior) = prior {
                assert_eq!(prior, r.cimpl_rank);
            }
            assert_eq!(r.dfp, format!("{}-{}", r.domain, r.function));
        }
    }

    #[test]
    fn org_and_snapshot_fields_are_consistent() {
        for r in generate(3, 500) {
            let p = &r.person;
            assert_eq!(p.duty_org, p.mission_element);
            assert_eq!(p.duty_org, p.assigned_org_td);
            assert_eq!(p.snapshot_month, p.snapshot.date());
            assert!(p.region.is_empty());
            assert!(crate::tokens::is_well_formed(&p.tokens));
        }
    }

    #[test]
    fn same_seed_same_dataset() {
        assert_eq!(generate(77, 400), generate(77, 400));
    }
}
