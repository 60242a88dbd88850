//! Validation experiments
//!
//! Each sweep draws randomized cases from the shared seeded RNG, evaluates
//! the pair algebra next to an independent baseline and returns one record
//! per case. The records carry raw columns only; aggregation happens in
//! [`crate::report`].

use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;

use nu_baselines::{product_uncertainty, rss, seeded_rng, sample_std, Interval, NoiseFamily};
use nu_core::{cumulative_product, cumulative_sum, Nu};

use crate::config::ValidationConfig;
use crate::table::Record;

/// One addition-sweep case: an N/U sum of `k` terms next to Gaussian RSS.
#[derive(Debug, Clone)]
pub struct AdditionRecord {
    pub k: usize,
    pub sum_u: f64,
    pub rss_u: f64,
    /// `sum_u / rss_u`; at least 1 when the terms are non-degenerate
    pub ratio: f64,
    /// `sum_u - rss_u`; non-negative by the triangle inequality
    pub margin: f64,
}

impl Record for AdditionRecord {
    fn header() -> &'static [&'static str] {
        &["k", "sum_u_nu", "rss_u", "ratio_nu_over_rss", "nu_minus_rss"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.k.to_string(),
            self.sum_u.to_string(),
            self.rss_u.to_string(),
            self.ratio.to_string(),
            self.margin.to_string(),
        ]
    }
}

/// N/U addition versus Gaussian root-sum-square.
pub fn addition_sweep(config: &ValidationConfig, rng: &mut StdRng) -> Vec<AdditionRecord> {
    (0..config.addition_cases)
        .map(|_| {
            let k = rng.gen_range(2..=50);
            let pairs: Vec<Nu> = (0..k)
                .map(|_| Nu::new(rng.gen_range(-100.0..100.0), rng.gen_range(0.1..10.0)))
                .collect();

            let sum = cumulative_sum(&pairs);
            let uncertainties: Vec<f64> = pairs.iter().map(|p| p.u).collect();
            let rss_u = rss(&uncertainties);

            AdditionRecord {
                k,
                sum_u: sum.u,
                rss_u,
                ratio: if rss_u > 0.0 { sum.u / rss_u } else { f64::NAN },
                margin: sum.u - rss_u,
            }
        })
        .collect()
}

/// One product-sweep case against first-order Gaussian propagation.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub n1: f64,
    pub u1: f64,
    pub n2: f64,
    pub u2: f64,
    pub u_nu: f64,
    pub u_gauss: f64,
    pub ratio: f64,
    pub margin: f64,
}

impl Record for ProductRecord {
    fn header() -> &'static [&'static str] {
        &[
            "n1",
            "u1",
            "n2",
            "u2",
            "u_nu",
            "u_gauss",
            "ratio_nu_over_gauss",
            "diff_nu_minus_gauss",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.n1.to_string(),
            self.u1.to_string(),
            self.n2.to_string(),
            self.u2.to_string(),
            self.u_nu.to_string(),
            self.u_gauss.to_string(),
            self.ratio.to_string(),
            self.margin.to_string(),
        ]
    }
}

/// N/U multiplication versus first-order Gaussian propagation.
pub fn product_sweep(config: &ValidationConfig, rng: &mut StdRng) -> Vec<ProductRecord> {
    (0..config.product_cases)
        .map(|_| {
            let a = Nu::new(rng.gen_range(-100.0..100.0), rng.gen_range(0.1..10.0));
            let b = Nu::new(rng.gen_range(-100.0..100.0), rng.gen_range(0.1..10.0));

            let product = a.mul(b);
            let u_gauss = product_uncertainty(a, b).unwrap_or(f64::NAN);

            ProductRecord {
                n1: a.n,
                u1: a.u,
                n2: b.n,
                u2: b.u,
                u_nu: product.u,
                u_gauss,
                ratio: if u_gauss > 0.0 {
                    product.u / u_gauss
                } else {
                    f64::NAN
                },
                margin: product.u - u_gauss,
            }
        })
        .collect()
}

/// One interval-relation case: the product bound next to the exact
/// four-corner half-width for positive nominals.
#[derive(Debug, Clone)]
pub struct IntervalRecord {
    pub n1: f64,
    pub u1: f64,
    pub n2: f64,
    pub u2: f64,
    pub u_nu: f64,
    pub interval_half_width: f64,
    pub margin: f64,
    pub rel_error: f64,
    /// Whether both operand intervals stay clear of zero; equality with the
    /// half-width is only promised in that regime
    pub zero_free: bool,
}

impl Record for IntervalRecord {
    fn header() -> &'static [&'static str] {
        &[
            "n1",
            "u1",
            "n2",
            "u2",
            "u_nu",
            "interval_halfwidth",
            "nu_minus_interval",
            "rel_error",
            "zero_free",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.n1.to_string(),
            self.u1.to_string(),
            self.n2.to_string(),
            self.u2.to_string(),
            self.u_nu.to_string(),
            self.interval_half_width.to_string(),
            self.margin.to_string(),
            self.rel_error.to_string(),
            self.zero_free.to_string(),
        ]
    }
}

/// N/U multiplication versus exact interval arithmetic, positive nominals.
pub fn interval_sweep(config: &ValidationConfig, rng: &mut StdRng) -> Vec<IntervalRecord> {
    (0..config.interval_cases)
        .map(|_| {
            let a = Nu::new(rng.gen_range(0.1..100.0), rng.gen_range(0.01..10.0));
            let b = Nu::new(rng.gen_range(0.1..100.0), rng.gen_range(0.01..10.0));

            let product = a.mul(b);
            let half_width = Interval::from(a).mul(Interval::from(b)).half_width();

            let margin = product.u - half_width;
            IntervalRecord {
                n1: a.n,
                u1: a.u,
                n2: b.n,
                u2: b.u,
                u_nu: product.u,
                interval_half_width: half_width,
                margin,
                rel_error: if half_width > 0.0 {
                    (margin / half_width).abs()
                } else {
                    0.0
                },
                zero_free: a.lower_bound() > 0.0 && b.lower_bound() > 0.0,
            }
        })
        .collect()
}

/// One chain-stability trial: repeated multiplication against the folded
/// interval product.
#[derive(Debug, Clone)]
pub struct ChainRecord {
    pub length: usize,
    pub u_nu: f64,
    pub interval_half_width: f64,
    /// `u_nu / interval_half_width`; at most 1 for zero-free factors, since
    /// the first-order bound drops the higher-order corner terms
    pub ratio: f64,
    pub margin: f64,
}

impl Record for ChainRecord {
    fn header() -> &'static [&'static str] {
        &[
            "length",
            "nu_u",
            "interval_half",
            "ratio_nu_over_interval",
            "diff_nu_minus_interval",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.length.to_string(),
            self.u_nu.to_string(),
            self.interval_half_width.to_string(),
            self.ratio.to_string(),
            self.margin.to_string(),
        ]
    }
}

/// Stability of cumulative products over zero-free factors.
pub fn chain_sweep(config: &ValidationConfig, rng: &mut StdRng) -> Vec<ChainRecord> {
    let mut records = Vec::with_capacity(config.chain_lengths.len() * config.chain_trials);
    for &length in &config.chain_lengths {
        for _ in 0..config.chain_trials {
            let pairs: Vec<Nu> = (0..length)
                .map(|_| Nu::new(rng.gen_range(0.5..2.0), rng.gen_range(0.01..0.2)))
                .collect();

            let product = cumulative_product(&pairs);
            let intervals: Vec<Interval> = pairs.iter().map(|&p| Interval::from(p)).collect();
            let half_width = Interval::product(&intervals).half_width();

            records.push(ChainRecord {
                length,
                u_nu: product.u,
                interval_half_width: half_width,
                ratio: if half_width > 0.0 {
                    product.u / half_width
                } else {
                    f64::NAN
                },
                margin: product.u - half_width,
            });
        }
    }
    records
}

/// One Monte Carlo comparison: the product bound next to the empirical
/// standard deviation of sampled products.
#[derive(Debug, Clone)]
pub struct MonteCarloRecord {
    pub pair_id: usize,
    pub a_n: f64,
    pub a_u: f64,
    pub b_n: f64,
    pub b_u: f64,
    pub family: &'static str,
    pub mc_std: f64,
    pub u_nu: f64,
    pub margin: f64,
}

impl Record for MonteCarloRecord {
    fn header() -> &'static [&'static str] {
        &[
            "pair_id", "a_n", "a_u", "b_n", "b_u", "dist", "mc_std", "u_nu",
            "margin_nu_minus_mc",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.pair_id.to_string(),
            self.a_n.to_string(),
            self.a_u.to_string(),
            self.b_n.to_string(),
            self.b_u.to_string(),
            self.family.to_string(),
            self.mc_std.to_string(),
            self.u_nu.to_string(),
            self.margin.to_string(),
        ]
    }
}

/// N/U product bounds versus Monte Carlo sample standard deviations.
pub fn monte_carlo_sweep(config: &ValidationConfig, rng: &mut StdRng) -> Vec<MonteCarloRecord> {
    let mut records = Vec::new();
    let mut pair_id = 0;

    for &family in NoiseFamily::all() {
        for _ in 0..config.mc_pairs_per_family {
            let a = Nu::new(rng.gen_range(-50.0..50.0), rng.gen_range(1.0..10.0));
            let b = Nu::new(rng.gen_range(-50.0..50.0), rng.gen_range(1.0..10.0));
            let product = a.mul(b);

            let a_samples = family.sample_vec(a.n, a.u, config.mc_samples, rng);
            let b_samples = family.sample_vec(b.n, b.u, config.mc_samples, rng);
            let products: Vec<f64> = a_samples
                .iter()
                .zip(&b_samples)
                .map(|(x, y)| x * y)
                .collect();
            let mc_std = sample_std(&products).unwrap_or(0.0);

            records.push(MonteCarloRecord {
                pair_id,
                a_n: a.n,
                a_u: a.u,
                b_n: b.n,
                b_u: b.u,
                family: family.name(),
                mc_std,
                u_nu: product.u,
                margin: product.u - mc_std,
            });
            pair_id += 1;
        }
    }
    records
}

/// One invariant-grid point: `M` before and after Catch and Flip.
#[derive(Debug, Clone)]
pub struct InvariantRecord {
    pub n: f64,
    pub u: f64,
    pub m0: f64,
    pub m_catch: f64,
    pub m_flip: f64,
    pub max_abs_error: f64,
}

impl Record for InvariantRecord {
    fn header() -> &'static [&'static str] {
        &["n", "u", "M0", "M_catch", "M_flip", "max_abs_error"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.n.to_string(),
            self.u.to_string(),
            self.m0.to_string(),
            self.m_catch.to_string(),
            self.m_flip.to_string(),
            self.max_abs_error.to_string(),
        ]
    }
}

/// Invariant preservation over a fixed lattice of `(n, u)` points.
///
/// Deterministic: a 9-point nominal axis over `[-10, 10]` crossed with a
/// 6-point uncertainty axis over `[0, 10]`.
pub fn invariant_grid() -> Vec<InvariantRecord> {
    let n_axis: Vec<f64> = (0..9).map(|i| -10.0 + 2.5 * i as f64).collect();
    let u_axis: Vec<f64> = (0..6).map(|i| 2.0 * i as f64).collect();

    let mut records = Vec::with_capacity(n_axis.len() * u_axis.len());
    for &n in &n_axis {
        for &u in &u_axis {
            let a = Nu::new(n, u);
            let m0 = a.invariant();
            let m_catch = a.catch().invariant();
            let m_flip = a.flip().invariant();
            records.push(InvariantRecord {
                n,
                u,
                m0,
                m_catch,
                m_flip,
                max_abs_error: (m0 - m_catch).abs().max((m0 - m_flip).abs()),
            });
        }
    }
    records
}

/// One associativity case: `(a*b)*c` against `a*(b*c)` nominals.
#[derive(Debug, Clone)]
pub struct AssociativityRecord {
    pub lhs_n: f64,
    pub rhs_n: f64,
    pub abs_diff: f64,
    pub rel_diff: f64,
}

impl Record for AssociativityRecord {
    fn header() -> &'static [&'static str] {
        &["nominal_lhs", "nominal_rhs", "abs_diff", "rel_diff"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.lhs_n.to_string(),
            self.rhs_n.to_string(),
            self.abs_diff.to_string(),
            self.rel_diff.to_string(),
        ]
    }
}

/// Product associativity for nominals under both bracketings.
pub fn associativity_sweep(
    config: &ValidationConfig,
    rng: &mut StdRng,
) -> Vec<AssociativityRecord> {
    (0..config.associativity_cases)
        .map(|_| {
            let a = Nu::new(rng.gen_range(-100.0..100.0), rng.gen_range(0.1..10.0));
            let b = Nu::new(rng.gen_range(-100.0..100.0), rng.gen_range(0.1..10.0));
            let c = Nu::new(rng.gen_range(-100.0..100.0), rng.gen_range(0.1..10.0));

            let lhs = a.mul(b).mul(c);
            let rhs = a.mul(b.mul(c));
            let abs_diff = (lhs.n - rhs.n).abs();

            AssociativityRecord {
                lhs_n: lhs.n,
                rhs_n: rhs.n,
                abs_diff,
                rel_diff: if lhs.n != 0.0 {
                    abs_diff / lhs.n.abs()
                } else {
                    0.0
                },
            }
        })
        .collect()
}

/// Every dataset of one validation run.
#[derive(Debug)]
pub struct ValidationDatasets {
    pub addition: Vec<AdditionRecord>,
    pub product: Vec<ProductRecord>,
    pub interval: Vec<IntervalRecord>,
    pub chain: Vec<ChainRecord>,
    pub monte_carlo: Vec<MonteCarloRecord>,
    pub invariants: Vec<InvariantRecord>,
    pub associativity: Vec<AssociativityRecord>,
}

/// Run every experiment from one seeded RNG.
pub fn generate_all(config: &ValidationConfig) -> ValidationDatasets {
    let mut rng = seeded_rng(config.seed);

    info!(cases = config.addition_cases, "running addition sweep");
    let addition = addition_sweep(config, &mut rng);

    info!(cases = config.product_cases, "running product sweep");
    let product = product_sweep(config, &mut rng);

    info!(cases = config.interval_cases, "running interval sweep");
    let interval = interval_sweep(config, &mut rng);

    info!(trials = config.chain_trials, "running chain sweep");
    let chain = chain_sweep(config, &mut rng);

    info!(samples = config.mc_samples, "running Monte Carlo sweep");
    let monte_carlo = monte_carlo_sweep(config, &mut rng);

    info!("running invariant grid");
    let invariants = invariant_grid();

    info!(cases = config.associativity_cases, "running associativity sweep");
    let associativity = associativity_sweep(config, &mut rng);

    ValidationDatasets {
        addition,
        product,
        interval,
        chain,
        monte_carlo,
        invariants,
        associativity,
    }
}
