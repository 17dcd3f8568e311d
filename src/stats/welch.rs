// Two-sample comparison for measurement sources
//
// Wraps aprender's hypothesis tests and trueno's vector primitives so a
// measurement source can turn two batches of observations (candidate versus
// reference) into a p-value without pulling in its own statistics code.
//
// Scientific Foundation:
// - Welch's t-test variant handles unequal variances between the samples
// - Uses trueno::Vector for SIMD-optimized statistics (mean, variance)
// - Uses aprender::stats::DescriptiveStats for quantiles/median

use anyhow::{Context, Result};
use aprender::stats::DescriptiveStats;
use serde::Serialize;
use trueno::Vector;

/// Result of comparing a reference sample with a candidate sample
#[derive(Debug, Clone, Serialize)]
pub struct SampleComparison {
    /// t-statistic value
    pub statistic: f32,

    /// Two-tailed p-value, ready to be wrapped in a `PValueRecord`
    pub p_value: f64,

    /// Degrees of freedom (Welch-Satterthwaite)
    pub df: f32,

    pub reference_median: f32,
    pub candidate_median: f32,

    /// Population variance (trueno divides by n)
    pub reference_variance: f32,
    pub candidate_variance: f32,
}

impl SampleComparison {
    /// Shift of the candidate median relative to the reference median
    pub fn median_shift(&self) -> f32 {
        self.candidate_median - self.reference_median
    }
}

/// Compare two samples using Welch's independent t-test
///
/// Two identical constant samples carry no evidence of a difference and
/// yield `p_value == 1.0` instead of an undefined statistic.
///
/// # Errors
/// Fails on samples with fewer than 2 observations or when aprender cannot
/// compute the test.
///
/// # Example
/// ```
/// use aislar::stats::compare_samples;
///
/// let reference = vec![10.0, 12.0, 11.0, 13.0, 10.0];
/// let candidate = vec![25.0, 27.0, 26.0, 28.0, 25.0];
///
/// let result = compare_samples(&reference, &candidate).unwrap();
/// assert!(result.p_value < 0.05);
/// ```
pub fn compare_samples(reference: &[f32], candidate: &[f32]) -> Result<SampleComparison> {
    if reference.len() < 2 || candidate.len() < 2 {
        anyhow::bail!(
            "Need at least 2 observations per sample for t-test (got {} and {})",
            reference.len(),
            candidate.len()
        );
    }

    let reference_vec = Vector::from_slice(reference);
    let candidate_vec = Vector::from_slice(candidate);

    let reference_median = median(&reference_vec)?;
    let candidate_median = median(&candidate_vec)?;

    let reference_variance = reference_vec
        .variance()
        .context("Failed to compute reference variance")?;
    let candidate_variance = candidate_vec
        .variance()
        .context("Failed to compute candidate variance")?;

    if reference_variance == 0.0 && candidate_variance == 0.0 {
        let identical = reference_median == candidate_median;
        return Ok(SampleComparison {
            statistic: 0.0,
            p_value: if identical { 1.0 } else { 0.0 },
            df: (reference.len() + candidate.len() - 2) as f32,
            reference_median,
            candidate_median,
            reference_variance,
            candidate_variance,
        });
    }

    let ttest = aprender::stats::hypothesis::ttest_ind(reference, candidate, false)
        .context("Failed to compute t-test")?;

    Ok(SampleComparison {
        statistic: ttest.statistic,
        p_value: f64::from(ttest.pvalue),
        df: ttest.df,
        reference_median,
        candidate_median,
        reference_variance,
        candidate_variance,
    })
}

/// Median via aprender's R-7 quantile
pub fn median(vector: &Vector<f32>) -> Result<f32> {
    let stats = DescriptiveStats::new(vector);
    stats
        .quantile(0.5)
        .map_err(|e| anyhow::anyhow!("Failed to compute median: {}", e))
}
