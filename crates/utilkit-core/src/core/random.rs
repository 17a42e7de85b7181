//! Pseudo-random helpers
//!
//! Every helper has a `_with` variant taking an explicit generator so results
//! can be reproduced with a seeded RNG. The plain variants use the thread RNG.

use crate::error::RandomError;
use rand::Rng;

/// Random integer in the closed interval `[min, max]`.
///
/// Bounds are never swapped: `min > max` is rejected.
///
/// # Examples
/// ```
/// use utilkit_core::core::random::get_random_arbitrary;
/// let n = get_random_arbitrary(-1337, 1337).unwrap();
/// assert!((-1337..=1337).contains(&n));
/// assert!(get_random_arbitrary(10, 1).is_err());
/// ```
pub fn get_random_arbitrary(min: i64, max: i64) -> crate::Result<i64> {
    get_random_arbitrary_with(&mut rand::thread_rng(), min, max)
}

pub fn get_random_arbitrary_with<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
) -> crate::Result<i64> {
    if min > max {
        return Err(RandomError::InvalidRange { min, max }.into());
    }
    Ok(rng.gen_range(min..=max))
}

/// Random integer between zero and `num`.
///
/// * `num > 1` gives a value in `[0, num)`
/// * `num < -1` gives a value in `(num, 0]`
///
/// `-1`, `0` and `1` only have a single possible result and are rejected.
pub fn get_random_int(num: i64) -> crate::Result<i64> {
    get_random_int_with(&mut rand::thread_rng(), num)
}

pub fn get_random_int_with<R: Rng + ?Sized>(rng: &mut R, num: i64) -> crate::Result<i64> {
    match num {
        -1..=1 => {
            log::debug!("rejecting degenerate random bound {}", num);
            Err(RandomError::DegenerateRange { num }.into())
        }
        n if n > 1 => Ok(rng.gen_range(0..n)),
        n => Ok(rng.gen_range(n + 1..=0)),
    }
}

/// Shuffle a slice in place with Fisher-Yates.
pub fn shuffle_array<T>(items: &mut [T]) {
    shuffle_array_with(&mut rand::thread_rng(), items);
}

pub fn shuffle_array_with<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Returns `true` with a probability of `percent / 100`.
///
/// `percent <= 0` (or NaN) is always `false`, `percent >= 100` always `true`.
pub fn chance(percent: f64) -> bool {
    chance_with(&mut rand::thread_rng(), percent)
}

pub fn chance_with<R: Rng + ?Sized>(rng: &mut R, percent: f64) -> bool {
    if percent.is_nan() || percent <= 0.0 {
        return false;
    }
    if percent >= 100.0 {
        return true;
    }
    rng.r#gen::<f64>() * 100.0 < percent
}
