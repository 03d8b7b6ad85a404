// src/shuffle.rs

use rand::Rng;

/// Fisher-Yates shuffle. Returns a new vector; the input slice is left
/// untouched, so callers wanting an in-place shuffle rebind their own
/// reference. Linear time, uniform over all permutations.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn output_is_a_permutation_of_the_input() {
        let items: Vec<u32> = (0..20).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let mut shuffled = shuffle(&items, &mut rng);
        shuffled.sort_unstable();

        assert_eq!(shuffled, items);
    }

    #[test]
    fn input_is_left_unmodified() {
        let items = vec!["a", "b", "c", "d", "e"];
        let before = items.clone();
        let mut rng = StdRng::seed_from_u64(2);

        let _ = shuffle(&items, &mut rng);

        assert_eq!(items, before);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let items: Vec<u32> = (0..10).collect();

        let first = shuffle(&items, &mut StdRng::seed_from_u64(42));
        let second = shuffle(&items, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn every_position_is_exercised_over_many_trials() {
        let items: Vec<usize> = (0..4).collect();
        let mut rng = StdRng::seed_from_u64(7);

        // seen[element][position]
        let mut seen = [[false; 4]; 4];
        for _ in 0..200 {
            let shuffled = shuffle(&items, &mut rng);
            for (pos, &elem) in shuffled.iter().enumerate() {
                seen[elem][pos] = true;
            }
        }

        for (elem, positions) in seen.iter().enumerate() {
            for (pos, &hit) in positions.iter().enumerate() {
                assert!(hit, "element {} never landed at position {}", elem, pos);
            }
        }
    }

    #[test]
    fn degenerate_lengths_are_fine() {
        let mut rng = StdRng::seed_from_u64(3);

        let empty: Vec<u32> = Vec::new();
        assert!(shuffle(&empty, &mut rng).is_empty());

        let single = vec![9];
        assert_eq!(shuffle(&single, &mut rng), vec![9]);
    }
}
