//! Split one person's full FTE across their role records.

use rand::Rng;

use crate::error::{GenError, Result};
use crate::record::Fte;

/// Partition 1.0 FTE into `roles` positive shares on a 0.1 grid.
///
/// Every role but the last draws uniformly between one tenth and the most it
/// can take while still leaving one tenth for each role after it. The last
/// role takes the remainder.
pub fn split_fte<R: Rng + ?Sized>(rng: &mut R, roles: usize) -> Result<Vec<Fte>> {
    let total = usize::from(Fte::TENTHS_PER_UNIT);
    match roles {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![Fte::FULL]),
        n if n > total => return Err(GenError::TooManyRoles { roles: n }),
        _ => {}
    }

    let mut shares = Vec::with_capacity(roles);
    let mut remaining = total;
    for i in 0..roles - 1 {
        let reserved = roles - i - 1;
        let max = remaining.saturating_sub(reserved).max(1);
        let tenths = rng.gen_range(1..=max);
        shares.push(Fte::from_tenths(tenths as u8));
        remaining -= tenths;
    }
    shares.push(Fte::from_tenths(remaining as u8));
    Ok(shares)
}
