//! Property suite for the pair algebra
//!
//! Checks the algebraic laws over randomized inputs: non-negativity of the
//! propagated bound, exact invariant preservation under Catch/Flip, and the
//! conservatism relations against the Gaussian root-sum-square baselines.

use nu_core::{cumulative_product, cumulative_sum, weighted_mean, Nu};
use proptest::prelude::*;

const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Strategy for a pair with bounded finite components.
fn nu_pair() -> impl Strategy<Value = Nu> {
    (-1.0e6_f64..1.0e6, 0.0_f64..1.0e3).prop_map(|(n, u)| Nu::new(n, u))
}

/// Strategy for a pair whose bound interval does not span zero.
fn sign_stable_pair() -> impl Strategy<Value = Nu> {
    (0.1_f64..1.0e3, 0.0_f64..1.0).prop_map(|(n, frac)| Nu::new(n, frac * n * 0.99))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn construction_clamps_uncertainty(n in -1.0e9_f64..1.0e9, u in -1.0e9_f64..1.0e9) {
        let a = Nu::new(n, u);
        prop_assert!(a.u >= 0.0, "uncertainty must be non-negative, got {}", a.u);
        prop_assert_eq!(a.n, n);
    }

    #[test]
    fn operations_preserve_non_negativity(a in nu_pair(), b in nu_pair(), k in -1.0e3_f64..1.0e3) {
        prop_assert!(a.add(b).u >= 0.0);
        prop_assert!(a.sub(b).u >= 0.0);
        prop_assert!(a.mul(b).u >= 0.0);
        prop_assert!(a.scalar(k).u >= 0.0);
        prop_assert!(a.affine(k, 7.0).u >= 0.0);
        prop_assert!(a.negate().u >= 0.0);
        prop_assert!(a.catch().u >= 0.0);
        prop_assert!(a.flip().u >= 0.0);
    }

    #[test]
    fn catch_and_flip_preserve_invariant_exactly(a in nu_pair()) {
        prop_assert_eq!(a.catch().invariant(), a.invariant());
        prop_assert_eq!(a.flip().invariant(), a.invariant());
    }

    #[test]
    fn flip_is_an_involution_for_non_negative_nominals(
        n in 0.0_f64..1.0e6,
        u in 0.0_f64..1.0e3,
    ) {
        let a = Nu::new(n, u);
        prop_assert_eq!(a.flip().flip(), a);
    }

    #[test]
    fn catch_is_idempotent(a in nu_pair()) {
        prop_assert_eq!(a.catch().catch(), a.catch());
    }

    #[test]
    fn sum_bound_dominates_rss(pairs in proptest::collection::vec(nu_pair(), 2..20)) {
        let total = cumulative_sum(&pairs);
        let rss: f64 = pairs.iter().map(|p| p.u * p.u).sum::<f64>().sqrt();
        prop_assert!(
            total.u >= rss - 1e-9,
            "sum bound {} fell below RSS {}",
            total.u,
            rss
        );
    }

    #[test]
    fn product_bound_dominates_first_order_gaussian(
        n1 in 0.1_f64..1.0e3, u1 in 0.0_f64..1.0e2,
        n2 in 0.1_f64..1.0e3, u2 in 0.0_f64..1.0e2,
        s1 in proptest::bool::ANY, s2 in proptest::bool::ANY,
    ) {
        let a = Nu::new(if s1 { -n1 } else { n1 }, u1);
        let b = Nu::new(if s2 { -n2 } else { n2 }, u2);
        let product = a.mul(b);
        let gauss = (a.n * b.n).abs()
            * ((a.u / a.n).powi(2) + (b.u / b.n).powi(2)).sqrt();

        prop_assert!(product.u >= gauss - 1e-9);
        if gauss > 0.0 {
            prop_assert!(product.u / gauss <= SQRT_2 + 1e-9);
        }
    }

    #[test]
    fn product_matches_interval_half_width_for_zero_free_operands(
        a in sign_stable_pair(),
        b in sign_stable_pair(),
    ) {
        let product = a.mul(b);
        let corners = [
            a.lower_bound() * b.lower_bound(),
            a.lower_bound() * b.upper_bound(),
            a.upper_bound() * b.lower_bound(),
            a.upper_bound() * b.upper_bound(),
        ];
        let hi = corners.iter().cloned().fold(f64::MIN, f64::max);
        let lo = corners.iter().cloned().fold(f64::MAX, f64::min);
        let half_width = (hi - lo) / 2.0;

        let scale = half_width.abs().max(1.0);
        prop_assert!(
            (product.u - half_width).abs() <= 1e-10 * scale,
            "bound {} vs interval half-width {}",
            product.u,
            half_width
        );
    }

    #[test]
    fn addition_and_multiplication_commute(a in nu_pair(), b in nu_pair()) {
        prop_assert_eq!(a.add(b), b.add(a));
        prop_assert_eq!(a.mul(b), b.mul(a));
    }

    #[test]
    fn multiplication_associates_within_tolerance(
        a in nu_pair(), b in nu_pair(), c in nu_pair(),
    ) {
        let left = a.mul(b).mul(c);
        let right = a.mul(b.mul(c));

        let n_scale = left.n.abs().max(1.0);
        prop_assert!((left.n - right.n).abs() <= 1e-12 * n_scale);

        let u_scale = left.u.abs().max(1.0);
        prop_assert!((left.u - right.u).abs() <= 1e-6 * u_scale);
    }

    #[test]
    fn identity_elements_hold(a in nu_pair()) {
        prop_assert_eq!(a.add(Nu::ZERO), a);
        let prod = a.mul(Nu::ONE);
        prop_assert!((prod.n - a.n).abs() <= 1e-12 * a.n.abs().max(1.0));
        prop_assert!((prod.u - a.u).abs() <= 1e-12 * a.u.abs().max(1.0));
    }

    #[test]
    fn scalar_agrees_with_exact_pair_multiplication(a in nu_pair(), k in -1.0e3_f64..1.0e3) {
        prop_assert_eq!(a.scalar(k), a.mul(Nu::exact(k)));
    }

    #[test]
    fn sum_is_order_independent(pairs in proptest::collection::vec(nu_pair(), 1..12)) {
        let forward = cumulative_sum(&pairs);
        let mut reversed = pairs.clone();
        reversed.reverse();
        let backward = cumulative_sum(&reversed);

        // Scale by the summand magnitudes: cancelling nominals can leave a
        // result far smaller than the rounding error of either fold order.
        let n_scale: f64 = pairs.iter().map(|p| p.n.abs()).sum::<f64>().max(1.0);
        let u_scale: f64 = pairs.iter().map(|p| p.u).sum::<f64>().max(1.0);
        prop_assert!((forward.n - backward.n).abs() <= 1e-9 * n_scale);
        prop_assert!((forward.u - backward.u).abs() <= 1e-9 * u_scale);
    }

    #[test]
    fn product_nominal_is_order_independent(
        pairs in proptest::collection::vec(nu_pair(), 1..8),
    ) {
        let forward = cumulative_product(&pairs);
        let mut reversed = pairs.clone();
        reversed.reverse();
        let backward = cumulative_product(&reversed);

        let scale = forward.n.abs().max(1.0);
        prop_assert!((forward.n - backward.n).abs() <= 1e-9 * scale);
    }

    #[test]
    fn weighted_mean_stays_within_component_bounds(
        pairs in proptest::collection::vec(nu_pair(), 1..10),
    ) {
        let weights = vec![1.0; pairs.len()];
        let avg = weighted_mean(&pairs, &weights).unwrap();

        let max_n = pairs.iter().map(|p| p.n).fold(f64::MIN, f64::max);
        let min_n = pairs.iter().map(|p| p.n).fold(f64::MAX, f64::min);
        let tol = 1e-9 * max_n.abs().max(min_n.abs()).max(1.0);
        prop_assert!(avg.n >= min_n - tol && avg.n <= max_n + tol);
        prop_assert!(avg.u >= 0.0);
    }
}
