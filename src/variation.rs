/// Returns the 6 orderings of `a`, `b` and `c`.
///
/// Each ordering is later read positionally as (year, month, day). The order of the result is
/// fixed: `[a, b, c]`, `[a, c, b]`, `[b, a, c]`, `[b, c, a]`, `[c, b, a]`, `[c, a, b]`.
pub fn create_all_variations<T: Copy>(a: T, b: T, c: T) -> [[T; 3]; 6] {
    [
        [a, b, c],
        [a, c, b],
        [b, a, c],
        [b, c, a],
        [c, b, a],
        [c, a, b],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::*;
    use std::collections::HashSet;

    #[rstest]
    #[case(0, 3, 14)]
    #[case(31, 0, 1)]
    #[case(-7, 2024, 12)]
    fn test_variations_are_distinct(#[case] a: i64, #[case] b: i64, #[case] c: i64) {
        let variations = create_all_variations(a, b, c);
        assert_eq!(6, variations.len());

        let unique: HashSet<_> = variations.iter().collect();
        assert_eq!(variations.len(), unique.len());
    }

    /// The explicit enumeration should cover exactly what a generic permutation does.
    #[test]
    fn test_variations_match_permutations() {
        let expected: HashSet<Vec<i64>> = [12, 10, 1].into_iter().permutations(3).collect();
        let actual: HashSet<Vec<i64>> = create_all_variations(12, 10, 1)
            .iter()
            .map(|v| v.to_vec())
            .collect();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_variations_order_is_stable() {
        assert_eq!(
            [
                ['a', 'b', 'c'],
                ['a', 'c', 'b'],
                ['b', 'a', 'c'],
                ['b', 'c', 'a'],
                ['c', 'b', 'a'],
                ['c', 'a', 'b'],
            ],
            create_all_variations('a', 'b', 'c')
        );
    }

    #[test]
    fn test_repeated_values() {
        // repeated inputs repeat orderings, but the count stays at 6
        let variations = create_all_variations(31, 31, 31);
        assert!(variations.iter().all(|v| *v == [31, 31, 31]));
    }
}
