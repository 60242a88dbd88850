//! Gaussian uncertainty propagation baselines

use nu_core::Nu;

/// Root-sum-square combination of independent uncertainties.
///
/// The standard Gaussian rule for sums: `sqrt(u1^2 + u2^2 + ...)`. Always
/// at or below the plain sum of the same terms.
pub fn rss(uncertainties: &[f64]) -> f64 {
    uncertainties.iter().map(|u| u * u).sum::<f64>().sqrt()
}

/// First-order Gaussian propagation for a product.
///
/// `|n1*n2| * sqrt((u1/n1)^2 + (u2/n2)^2)`, the relative-uncertainty
/// quadrature rule. Undefined when either nominal is zero, so that case
/// returns `None` rather than a division artifact.
pub fn product_uncertainty(a: Nu, b: Nu) -> Option<f64> {
    if a.n == 0.0 || b.n == 0.0 {
        return None;
    }
    let relative = ((a.u / a.n).powi(2) + (b.u / b.n).powi(2)).sqrt();
    Some((a.n * b.n).abs() * relative)
}
