use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers, NaN is treated as the greatest value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Returns index of the first minimal value, so ties are resolved in favor of the lowest index.
pub fn stable_argmin<I>(values: I) -> Option<(usize, Float)>
where
    I: IntoIterator<Item = Float>,
{
    values.into_iter().enumerate().fold(None, |best, (idx, value)| match best {
        Some((_, best_value)) if compare_floats(value, best_value) != Ordering::Less => best,
        _ => Some((idx, value)),
    })
}
