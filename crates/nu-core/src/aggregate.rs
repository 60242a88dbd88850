//! Aggregate combinators over sequences of pairs
//!
//! All combinators are explicit left folds over an immutable accumulator.
//! `add` is associative and commutative, so [`cumulative_sum`] is
//! order-independent; [`cumulative_product`] is order-independent in the
//! nominal exactly and in the uncertainty up to floating-point rounding,
//! since the bound is a sum of magnitude products accumulated through
//! non-associative floating operations.

use crate::error::{NuError, NuResult};
use crate::pair::Nu;

/// Sum of a sequence of pairs. An empty slice yields [`Nu::ZERO`].
pub fn cumulative_sum(pairs: &[Nu]) -> Nu {
    pairs.iter().fold(Nu::ZERO, |acc, &p| acc.add(p))
}

/// Product of a sequence of pairs. An empty slice yields [`Nu::ONE`].
pub fn cumulative_product(pairs: &[Nu]) -> Nu {
    pairs.iter().fold(Nu::ONE, |acc, &p| acc.mul(p))
}

/// Uniform-weight mean of a sequence of pairs.
///
/// # Errors
/// Returns [`NuError::EmptySequence`] for an empty slice.
pub fn mean(pairs: &[Nu]) -> NuResult<Nu> {
    if pairs.is_empty() {
        return Err(NuError::EmptySequence);
    }
    let k = pairs.len() as f64;
    let total = cumulative_sum(pairs);
    Ok(Nu::new(total.n / k, total.u / k))
}

/// Weighted mean: nominal `sum(w*n)/sum(w)`, uncertainty `sum(w*u)/sum(w)`.
///
/// The uncertainty is the same linear combination as the nominal, not a
/// root-sum-square, so the result keeps the worst-case character of the
/// algebra.
///
/// # Errors
/// - [`NuError::EmptySequence`] for an empty slice
/// - [`NuError::WeightCountMismatch`] when the slice lengths differ
/// - [`NuError::NonPositiveWeight`] when the weights sum to zero or less;
///   the division is undefined at zero and a negative total would flip the
///   sign of the uncertainty
pub fn weighted_mean(pairs: &[Nu], weights: &[f64]) -> NuResult<Nu> {
    if pairs.is_empty() {
        return Err(NuError::EmptySequence);
    }
    if pairs.len() != weights.len() {
        return Err(NuError::WeightCountMismatch {
            pairs: pairs.len(),
            weights: weights.len(),
        });
    }

    let total_weight: f64 = weights.iter().sum();
    if !(total_weight > 0.0) {
        return Err(NuError::NonPositiveWeight(total_weight));
    }

    let (weighted_n, weighted_u) = pairs
        .iter()
        .zip(weights)
        .fold((0.0, 0.0), |(ns, us), (p, &w)| (ns + w * p.n, us + w * p.u));

    Ok(Nu::new(weighted_n / total_weight, weighted_u / total_weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_sum() {
        let pairs = [Nu::new(1.0, 0.1), Nu::new(2.0, 0.2), Nu::new(3.0, 0.3)];
        let total = cumulative_sum(&pairs);
        assert_eq!(total.n, 6.0);
        assert!((total.u - 0.6).abs() < 1e-10);
    }

    #[test]
    fn test_cumulative_sum_measurements() {
        let measurements = [
            Nu::new(100.0, 2.0),
            Nu::new(105.0, 1.5),
            Nu::new(102.5, 1.0),
        ];
        let total = cumulative_sum(&measurements);
        assert!((total.n - 307.5).abs() < 1e-10);
        assert!((total.u - 4.5).abs() < 1e-10);
    }

    #[test]
    fn test_cumulative_sum_order_independent() {
        let a = Nu::new(1.0, 0.1);
        let b = Nu::new(2.0, 0.2);
        let c = Nu::new(3.0, 0.3);

        let forward = cumulative_sum(&[a, b, c]);
        let reversed = cumulative_sum(&[c, b, a]);
        let shuffled = cumulative_sum(&[b, a, c]);

        assert!((forward.n - reversed.n).abs() < 1e-10);
        assert!((forward.u - reversed.u).abs() < 1e-10);
        assert!((forward.n - shuffled.n).abs() < 1e-10);
        assert!((forward.u - shuffled.u).abs() < 1e-10);
    }

    #[test]
    fn test_cumulative_sum_empty_is_additive_identity() {
        assert_eq!(cumulative_sum(&[]), Nu::ZERO);
    }

    #[test]
    fn test_cumulative_product() {
        let pairs = [Nu::new(2.0, 0.1), Nu::new(3.0, 0.1), Nu::new(4.0, 0.1)];
        let product = cumulative_product(&pairs);
        assert_eq!(product.n, 24.0);
        // (2,0.1)*(3,0.1) = (6, 0.5); (6,0.5)*(4,0.1) = (24, 2.6)
        assert!((product.u - 2.6).abs() < 1e-10);
    }

    #[test]
    fn test_cumulative_product_empty_is_multiplicative_identity() {
        assert_eq!(cumulative_product(&[]), Nu::ONE);
    }

    #[test]
    fn test_mean_uniform() {
        let pairs = [Nu::new(10.0, 1.0), Nu::new(12.0, 1.5), Nu::new(11.0, 0.8)];
        let avg = mean(&pairs).unwrap();
        assert!((avg.n - 11.0).abs() < 1e-10);
        assert!((avg.u - 1.1).abs() < 1e-10);
    }

    #[test]
    fn test_mean_empty_fails() {
        assert_eq!(mean(&[]), Err(NuError::EmptySequence));
    }

    #[test]
    fn test_weighted_mean() {
        let pairs = [Nu::new(10.0, 1.0), Nu::new(20.0, 2.0)];
        let result = weighted_mean(&pairs, &[1.0, 3.0]).unwrap();
        // (1*10 + 3*20) / 4 = 17.5
        assert!((result.n - 17.5).abs() < 1e-10);
        // (1*1 + 3*2) / 4 = 1.75
        assert!((result.u - 1.75).abs() < 1e-10);
    }

    #[test]
    fn test_weighted_mean_matches_uniform_mean() {
        let pairs = [Nu::new(10.0, 1.0), Nu::new(12.0, 1.5), Nu::new(11.0, 0.8)];
        let uniform = mean(&pairs).unwrap();
        let weighted = weighted_mean(&pairs, &[1.0, 1.0, 1.0]).unwrap();
        assert!((uniform.n - weighted.n).abs() < 1e-10);
        assert!((uniform.u - weighted.u).abs() < 1e-10);
    }

    #[test]
    fn test_weighted_mean_count_mismatch() {
        let pairs = [Nu::new(10.0, 1.0), Nu::new(20.0, 2.0)];
        assert_eq!(
            weighted_mean(&pairs, &[1.0]),
            Err(NuError::WeightCountMismatch {
                pairs: 2,
                weights: 1
            })
        );
    }

    #[test]
    fn test_weighted_mean_zero_total_weight() {
        let pairs = [Nu::new(10.0, 1.0), Nu::new(20.0, 2.0)];
        assert_eq!(
            weighted_mean(&pairs, &[0.0, 0.0]),
            Err(NuError::NonPositiveWeight(0.0))
        );
    }

    #[test]
    fn test_weighted_mean_negative_total_weight() {
        let pairs = [Nu::new(10.0, 1.0), Nu::new(20.0, 2.0)];
        assert!(matches!(
            weighted_mean(&pairs, &[1.0, -2.0]),
            Err(NuError::NonPositiveWeight(_))
        ));
    }

    #[test]
    fn test_weighted_mean_empty_fails() {
        assert_eq!(weighted_mean(&[], &[]), Err(NuError::EmptySequence));
    }

    #[test]
    fn test_sum_conservatism_vs_rss() {
        let pairs = [
            Nu::new(10.0, 1.0),
            Nu::new(-5.0, 0.5),
            Nu::new(25.0, 2.5),
            Nu::new(-1.0, 0.1),
        ];
        let total = cumulative_sum(&pairs);
        let rss: f64 = pairs.iter().map(|p| p.u * p.u).sum::<f64>().sqrt();
        assert!(total.u >= rss);
    }
}
