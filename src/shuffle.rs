use rand::Rng;

/// Returns a uniformly shuffled copy of `items` (backward Fisher-Yates).
/// The input slice is left untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn counts(items: &[String]) -> HashMap<&str, usize> {
        let mut map = HashMap::new();
        for item in items {
            *map.entry(item.as_str()).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn test_output_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 0..40 {
            // Include duplicates so the multiset check matters
            let input: Vec<String> = (0..n).map(|i| format!("name-{}", i % 5)).collect();
            let output = shuffled(&input, &mut rng);
            assert_eq!(output.len(), input.len());
            assert_eq!(counts(&output), counts(&input));
        }
    }

    #[test]
    fn test_short_lists_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: Vec<String> = Vec::new();
        assert_eq!(shuffled(&empty, &mut rng), empty);

        let single = vec!["Alice".to_string()];
        assert_eq!(shuffled(&single, &mut rng), single);
    }

    #[test]
    fn test_input_untouched() {
        let mut rng = StdRng::seed_from_u64(3);
        let input: Vec<u32> = (0..10).collect();
        let before = input.clone();
        let _ = shuffled(&input, &mut rng);
        assert_eq!(input, before);
    }

    #[test]
    fn test_every_permutation_reachable() {
        // 3 items -> 6 orderings, each should show up with roughly equal frequency
        let mut rng = StdRng::seed_from_u64(42);
        let input = ['a', 'b', 'c'];
        let mut seen: HashMap<Vec<char>, usize> = HashMap::new();
        for _ in 0..6000 {
            *seen.entry(shuffled(&input, &mut rng)).or_insert(0) += 1;
        }
        assert_eq!(seen.len(), 6);
        for (perm, count) in seen {
            assert!(
                (800..1200).contains(&count),
                "permutation {:?} drawn {} times",
                perm,
                count
            );
        }
    }
}
