//! Pool reduction after a confirmed draw

use rand::Rng;
use rand::seq::SliceRandom;

use crate::palette::Palette;
use crate::pool::Pool;

/// Remove `removed_value` and reshuffle the remainder with the default palette
///
/// Removal is keyed on the value, not the index: positions move on every
/// reshuffle, so an index captured at selection time can point elsewhere.
/// A value that is absent leaves membership unchanged, but the remainder is
/// still reshuffled.
pub fn remove_and_reshuffle<R>(pool: &Pool, removed_value: i64, rng: &mut R) -> Pool
where
    R: Rng + ?Sized,
{
    remove_and_reshuffle_with(pool, removed_value, &Palette::default(), rng)
}

/// [`remove_and_reshuffle`] with an explicit palette
pub fn remove_and_reshuffle_with<R>(
    pool: &Pool,
    removed_value: i64,
    palette: &Palette,
    rng: &mut R,
) -> Pool
where
    R: Rng + ?Sized,
{
    let mut values: Vec<i64> = pool
        .iter()
        .map(|e| e.value)
        .filter(|&v| v != removed_value)
        .collect();

    if values.len() == pool.len() {
        log::debug!("Value {} not in pool, reshuffling only", removed_value);
    }

    values.shuffle(rng);
    let next = palette.paint(values);
    log::debug!(
        "Removed {}: {} -> {} entries, new order {:?}",
        removed_value,
        pool.len(),
        next.len(),
        next.values()
    );
    next
}

/// Fisher-Yates reorder of the whole pool, recolored by new position
pub fn shuffle_and_recolor<R>(pool: &Pool, palette: &Palette, rng: &mut R) -> Pool
where
    R: Rng + ?Sized,
{
    let mut values = pool.values();
    values.shuffle(rng);
    palette.paint(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_numbers;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn value_set(pool: &Pool) -> BTreeSet<i64> {
        pool.values().into_iter().collect()
    }

    #[test]
    fn test_removes_exactly_one_value() {
        let pool = generate_numbers(&[]);
        let mut rng = StdRng::seed_from_u64(3);

        let next = remove_and_reshuffle(&pool, 17, &mut rng);

        assert_eq!(next.len(), 32);
        let mut expected = value_set(&pool);
        expected.remove(&17);
        assert_eq!(value_set(&next), expected);
    }

    #[test]
    fn test_absent_value_keeps_membership() {
        let pool = generate_numbers(&[4, 8, 15, 16, 23, 42]);
        let mut rng = StdRng::seed_from_u64(9);

        let next = remove_and_reshuffle(&pool, 99, &mut rng);

        assert_eq!(next.len(), pool.len());
        assert_eq!(value_set(&next), value_set(&pool));
    }

    #[test]
    fn test_recolors_by_new_position() {
        let palette = Palette::default();
        let pool = generate_numbers(&[]);
        let mut rng = StdRng::seed_from_u64(11);

        let next = remove_and_reshuffle(&pool, 1, &mut rng);

        for (i, entry) in next.iter().enumerate() {
            let (color, text) = palette.colors_for(i);
            assert_eq!(entry.color, color);
            assert_eq!(entry.text_color, text);
        }
        // Re-painting the same order yields identical colors
        assert_eq!(palette.paint(next.values()), next);
    }

    #[test]
    fn test_last_value_leaves_empty_pool() {
        let pool = generate_numbers(&[7]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(remove_and_reshuffle(&pool, 7, &mut rng).is_empty());
    }

    #[test]
    fn test_shuffle_reorders() {
        let pool = generate_numbers(&[]);
        let mut rng = StdRng::seed_from_u64(5);

        let shuffled = shuffle_and_recolor(&pool, &Palette::default(), &mut rng);

        assert_eq!(value_set(&shuffled), value_set(&pool));
        // 33! orderings; a seeded shuffle returning identity would be a bug
        assert_ne!(shuffled.values(), pool.values());
    }
}
