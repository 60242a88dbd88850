//! Run summary aggregation
//!
//! Condenses the raw datasets into the statistics that matter for the
//! conservatism claims: ratio ranges against each baseline, margins, and
//! violation counts against the configured tolerances. Serializes to JSON.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::ValidationConfig;
use crate::sweeps::ValidationDatasets;

/// Comparison tolerances echoed into the summary.
#[derive(Debug, Clone, Serialize)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

/// Ratio and margin statistics for one baseline comparison.
#[derive(Debug, Clone, Serialize)]
pub struct RatioStats {
    pub rows: usize,
    pub min_ratio: f64,
    pub median_ratio: f64,
    pub max_ratio: f64,
    pub min_margin: f64,
    pub max_margin: f64,
}

/// Interval relation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct IntervalStats {
    pub rows: usize,
    pub zero_free_rows: usize,
    pub min_margin: f64,
    pub max_margin: f64,
    /// Zero-free cases whose relative error exceeds the tolerance
    pub violations_beyond_tol: usize,
}

/// Per-length ratio statistics for the chain experiment.
#[derive(Debug, Clone, Serialize)]
pub struct ChainLengthStats {
    pub count: usize,
    pub min_ratio: f64,
    pub median_ratio: f64,
    pub max_ratio: f64,
}

/// Chain experiment statistics.
#[derive(Debug, Clone, Serialize)]
pub struct ChainStats {
    pub rows: usize,
    pub max_abs_margin: f64,
    pub ratio_stats_by_length: BTreeMap<usize, ChainLengthStats>,
}

/// Monte Carlo margin statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MonteCarloStats {
    pub rows: usize,
    pub min_margin: f64,
    pub median_margin: f64,
    pub max_margin: f64,
    /// Whether any sampled standard deviation exceeded the bound by more
    /// than the absolute tolerance
    pub any_sample_exceeds_bound: bool,
}

/// Invariant grid statistics.
#[derive(Debug, Clone, Serialize)]
pub struct InvariantStats {
    pub rows: usize,
    pub max_abs_error: f64,
}

/// Associativity sweep statistics.
#[derive(Debug, Clone, Serialize)]
pub struct AssociativityStats {
    pub rows: usize,
    pub max_abs_diff: f64,
    pub median_abs_diff: f64,
    pub violations_beyond_tol: usize,
}

/// Full summary of one validation run.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub seed: u64,
    pub tolerances: Tolerances,
    pub addition: RatioStats,
    pub product: RatioStats,
    pub interval: IntervalStats,
    pub chain: ChainStats,
    pub monte_carlo: MonteCarloStats,
    pub invariants: InvariantStats,
    pub associativity: AssociativityStats,
}

impl Summary {
    /// Aggregate the datasets of one run.
    pub fn from_datasets(config: &ValidationConfig, data: &ValidationDatasets) -> Self {
        let addition_ratios: Vec<f64> = data.addition.iter().map(|r| r.ratio).collect();
        let addition_margins: Vec<f64> = data.addition.iter().map(|r| r.margin).collect();

        let product_ratios: Vec<f64> = data.product.iter().map(|r| r.ratio).collect();
        let product_margins: Vec<f64> = data.product.iter().map(|r| r.margin).collect();

        let interval_margins: Vec<f64> = data.interval.iter().map(|r| r.margin).collect();
        let zero_free: Vec<_> = data.interval.iter().filter(|r| r.zero_free).collect();

        let mut by_length: BTreeMap<usize, ChainLengthStats> = BTreeMap::new();
        for &length in &config.chain_lengths {
            let ratios: Vec<f64> = data
                .chain
                .iter()
                .filter(|r| r.length == length)
                .map(|r| r.ratio)
                .collect();
            by_length.insert(
                length,
                ChainLengthStats {
                    count: ratios.len(),
                    min_ratio: finite_min(&ratios),
                    median_ratio: finite_median(&ratios),
                    max_ratio: finite_max(&ratios),
                },
            );
        }

        let mc_margins: Vec<f64> = data.monte_carlo.iter().map(|r| r.margin).collect();

        let assoc_diffs: Vec<f64> = data.associativity.iter().map(|r| r.abs_diff).collect();

        Summary {
            seed: config.seed,
            tolerances: Tolerances {
                abs: config.abs_tol,
                rel: config.rel_tol,
            },
            addition: RatioStats {
                rows: data.addition.len(),
                min_ratio: finite_min(&addition_ratios),
                median_ratio: finite_median(&addition_ratios),
                max_ratio: finite_max(&addition_ratios),
                min_margin: finite_min(&addition_margins),
                max_margin: finite_max(&addition_margins),
            },
            product: RatioStats {
                rows: data.product.len(),
                min_ratio: finite_min(&product_ratios),
                median_ratio: finite_median(&product_ratios),
                max_ratio: finite_max(&product_ratios),
                min_margin: finite_min(&product_margins),
                max_margin: finite_max(&product_margins),
            },
            interval: IntervalStats {
                rows: data.interval.len(),
                zero_free_rows: zero_free.len(),
                min_margin: finite_min(&interval_margins),
                max_margin: finite_max(&interval_margins),
                violations_beyond_tol: zero_free
                    .iter()
                    .filter(|r| r.rel_error > config.rel_tol)
                    .count(),
            },
            chain: ChainStats {
                rows: data.chain.len(),
                max_abs_margin: data
                    .chain
                    .iter()
                    .map(|r| r.margin.abs())
                    .fold(0.0, f64::max),
                ratio_stats_by_length: by_length,
            },
            monte_carlo: MonteCarloStats {
                rows: data.monte_carlo.len(),
                min_margin: finite_min(&mc_margins),
                median_margin: finite_median(&mc_margins),
                max_margin: finite_max(&mc_margins),
                any_sample_exceeds_bound: mc_margins.iter().any(|&m| m < -config.abs_tol),
            },
            invariants: InvariantStats {
                rows: data.invariants.len(),
                max_abs_error: data
                    .invariants
                    .iter()
                    .map(|r| r.max_abs_error)
                    .fold(0.0, f64::max),
            },
            associativity: AssociativityStats {
                rows: data.associativity.len(),
                max_abs_diff: finite_max(&assoc_diffs),
                median_abs_diff: finite_median(&assoc_diffs),
                violations_beyond_tol: data
                    .associativity
                    .iter()
                    .filter(|r| r.rel_diff > config.rel_tol)
                    .count(),
            },
        }
    }

    /// Pretty-printed JSON rendering.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn finite(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().filter(|v| v.is_finite())
}

fn finite_min(values: &[f64]) -> f64 {
    finite(values).fold(f64::INFINITY, f64::min)
}

fn finite_max(values: &[f64]) -> f64 {
    finite(values).fold(f64::NEG_INFINITY, f64::max)
}

fn finite_median(values: &[f64]) -> f64 {
    let mut v: Vec<f64> = finite(values).collect();
    if v.is_empty() {
        return f64::NAN;
    }
    v.sort_by(f64::total_cmp);
    let mid = v.len() / 2;
    if v.len() % 2 == 1 {
        v[mid]
    } else {
        (v[mid - 1] + v[mid]) / 2.0
    }
}
