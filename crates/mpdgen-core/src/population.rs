//! Decide how many people to create and how many role records each gets.

use rand::Rng;

/// Share of people holding exactly one role.
pub const SINGLE_ROLE_SHARE: f64 = 0.4;

/// Cumulative split of multi-role people: 65% two roles, 25% three, 10% four.
const MULTI_ROLE_CUTOFFS: [(f64, usize); 3] = [(0.65, 2), (0.90, 3), (1.0, 4)];

pub const MAX_ROLES_PER_PERSON: usize = 4;

pub fn sample_role_count<R: Rng + ?Sized>(rng: &mut R) -> usize {
    if rng.gen::<f64>() < SINGLE_ROLE_SHARE {
        return 1;
    }
    let roll = rng.gen::<f64>();
    MULTI_ROLE_CUTOFFS
        .iter()
        .find(|(cutoff, _)| roll < *cutoff)
        .map(|(_, roles)| *roles)
        .unwrap_or(MAX_ROLES_PER_PERSON)
}

/// Role counts per person, summing to exactly `total_rows`.
///
/// The last person is truncated rather than overshooting the target.
pub fn plan_population<R: Rng + ?Sized>(rng: &mut R, total_rows: usize) -> Vec<usize> {
    let mut people = Vec::new();
    let mut planned = 0usize;
    while planned < total_rows {
        let roles = sample_role_count(rng).min(total_rows - planned);
        people.push(roles);
        planned += roles;
    }
    people
}
