//! Validation run configuration

/// Validation run configuration
#[derive(Clone, Debug)]
pub struct ValidationConfig {
    /// RNG seed shared by every experiment
    pub seed: u64,
    /// Absolute comparison tolerance
    pub abs_tol: f64,
    /// Relative comparison tolerance
    pub rel_tol: f64,
    /// Cases in the addition sweep
    pub addition_cases: usize,
    /// Cases in the product sweep
    pub product_cases: usize,
    /// Cases in the interval relation sweep
    pub interval_cases: usize,
    /// Trials per chain length
    pub chain_trials: usize,
    /// Chain lengths to exercise
    pub chain_lengths: Vec<usize>,
    /// Monte Carlo sample count per pair
    pub mc_samples: usize,
    /// Pairs drawn per noise family
    pub mc_pairs_per_family: usize,
    /// Cases in the associativity sweep
    pub associativity_cases: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        ValidationConfig {
            seed: 20_250_926,
            abs_tol: 1e-9,
            rel_tol: 1e-12,
            addition_cases: 8_000,
            product_cases: 30_000,
            interval_cases: 30_000,
            chain_trials: 800,
            chain_lengths: vec![3, 5, 10, 20],
            mc_samples: 30_000,
            mc_pairs_per_family: 6,
            associativity_cases: 20_000,
        }
    }
}

impl ValidationConfig {
    /// Small case counts for fast tests; same seed and tolerances.
    pub fn quick() -> Self {
        ValidationConfig {
            addition_cases: 200,
            product_cases: 500,
            interval_cases: 500,
            chain_trials: 20,
            chain_lengths: vec![3, 5],
            mc_samples: 2_000,
            mc_pairs_per_family: 2,
            associativity_cases: 500,
            ..ValidationConfig::default()
        }
    }
}
