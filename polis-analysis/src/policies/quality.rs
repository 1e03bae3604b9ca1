//! Cluster score statistics and the quality criterion.

use statrs::statistics::Statistics;

/// Mean and population standard deviation of a non-empty score slice.
///
/// Population (not sample) deviation: a cluster is the whole population of
/// observed effects for that policy, not a sample from a larger one.
pub fn mean_and_std(scores: &[f64]) -> (f64, f64) {
    debug_assert!(!scores.is_empty());
    if scores.len() == 1 {
        return (scores[0], 0.0);
    }
    (scores.mean(), scores.population_std_dev())
}

/// Quality criterion: `(n / (n + 1)) / (1 + std)`.
///
/// The `n / (n + 1)` evidence factor makes three consistent members beat
/// two; the `1 + std` denominator penalizes dispersion. Non-decreasing in
/// member count, strictly decreasing in standard deviation, bounded to
/// (0, 1).
pub fn quality_score(scored_members: usize, effect_std: f64) -> f64 {
    let n = scored_members as f64;
    (n / (n + 1.0)) / (1.0 + effect_std)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_score_has_zero_std() {
        assert_eq!(mean_and_std(&[-20.0]), (-20.0, 0.0));
    }

    #[test]
    fn population_std_of_known_values() {
        let (mean, std) = mean_and_std(&[10.0, 8.0]);
        assert!((mean - 9.0).abs() < 1e-12);
        // Population std of {10, 8} is 1, sample std would be sqrt(2).
        assert!((std - 1.0).abs() < 1e-12);
    }

    #[test]
    fn quality_grows_with_members() {
        assert!(quality_score(3, 0.5) > quality_score(2, 0.5));
        assert!(quality_score(10, 0.5) > quality_score(3, 0.5));
    }

    #[test]
    fn quality_shrinks_with_dispersion() {
        assert!(quality_score(3, 0.1) > quality_score(3, 2.0));
    }

    #[test]
    fn quality_is_bounded() {
        for n in 1..50 {
            for std in [0.0, 0.5, 10.0, 1e6] {
                let q = quality_score(n, std);
                assert!(q > 0.0 && q < 1.0);
            }
        }
    }
}
