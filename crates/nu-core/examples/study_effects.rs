//! Aggregating study effect sizes under explicit uncertainty
//!
//! Pools effect estimates with a weighted mean, then classifies each
//! estimate by its uncertainty-to-effect ratio and its sign stability.

use nu_core::{weighted_mean, Nu};

fn classify(ratio: f64) -> &'static str {
    if ratio > 0.7 {
        "very high risk"
    } else if ratio > 0.5 {
        "high risk"
    } else if ratio > 0.3 {
        "moderate risk"
    } else {
        "low risk"
    }
}

fn main() {
    println!("=== Effect Size Aggregation ===\n");

    // Effect estimates (standardized mean differences) with worst-case bounds
    let studies = [
        Nu::new(0.65, 0.15),
        Nu::new(0.58, 0.12),
        Nu::new(0.71, 0.18),
        Nu::new(0.21, 0.19),
    ];
    // Weight by sample size
    let sample_sizes = [120.0, 210.0, 80.0, 45.0];

    println!("1. Individual Studies");
    for (i, study) in studies.iter().enumerate() {
        let ratio = study.relative_uncertainty();
        println!(
            "   study {}: d = {}, u/|d| = {:.3} ({}), sign stable: {}",
            i + 1,
            study,
            ratio,
            classify(ratio),
            study.is_sign_stable()
        );
    }

    println!("\n2. Pooled Estimate");
    let pooled = weighted_mean(&studies, &sample_sizes).expect("non-empty, positive weights");
    println!("   weighted by n: d = {}", pooled);
    println!(
        "   pooled interval: [{:.3}, {:.3}]",
        pooled.lower_bound(),
        pooled.upper_bound()
    );
    println!(
        "   pooled ratio: {:.3} ({})",
        pooled.relative_uncertainty(),
        classify(pooled.relative_uncertainty())
    );

    println!("\n3. Replication Outlook");
    if pooled.is_sign_stable() {
        println!("   the pooled effect direction survives the worst case");
    } else {
        println!("   the worst case includes zero: direction not established");
    }
    let needed = pooled.u / 0.3;
    println!(
        "   for a low-risk classification the effect would need |d| > {:.3}",
        needed
    );
}
