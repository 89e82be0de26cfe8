//! Uniform random draw from a pool

use rand::Rng;

use crate::error::{WheelError, WheelResult};
use crate::pool::{Pool, WheelEntry};

/// Pick one entry uniformly at random
///
/// The pool is not modified; removal happens on confirmation through
/// [`crate::remove_and_reshuffle`].
pub fn select_random_number<'a, R>(pool: &'a Pool, rng: &mut R) -> WheelResult<&'a WheelEntry>
where
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return Err(WheelError::EmptyPool);
    }
    let index = rng.random_range(0..pool.len());
    let entry = &pool.entries()[index];
    log::debug!(
        "Selected value {} at index {} of {}",
        entry.value,
        index,
        pool.len()
    );
    Ok(entry)
}
