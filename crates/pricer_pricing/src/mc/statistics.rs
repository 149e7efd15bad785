//! Sample statistics for Monte Carlo estimates.

use pricer_core::types::PricingError;

/// Returns the sample mean and its standard error.
///
/// The standard error is the unbiased sample standard deviation (sum of
/// squared deviations over `m - 1`) divided by `sqrt(m)`.
///
/// # Errors
///
/// Returns `PricingError::InsufficientSamples` when fewer than two samples
/// are supplied.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::mean_and_std_error;
///
/// let (mean, std_error) = mean_and_std_error(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(mean, 2.5);
/// assert!((std_error - (5.0_f64 / 12.0).sqrt()).abs() < 1e-12);
/// ```
pub fn mean_and_std_error(samples: &[f64]) -> Result<(f64, f64), PricingError> {
    let m = samples.len();
    if m < 2 {
        return Err(PricingError::InsufficientSamples { samples: m });
    }

    let n = m as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);

    Ok((mean, variance.sqrt() / n.sqrt()))
}
