// Multiple-Hypothesis Correction and Sample Comparison
//
// A property-based oracle runs many statistical comparisons per candidate.
// Testing each at alpha would make a false "Failed" almost certain once
// enough comparisons pile up, so p-values are pooled and corrected for the
// family-wise error rate before any verdict is drawn.
//
// Scientific Foundation:
// [1] Holm, S. (1979). A simple sequentially rejective multiple test
//     procedure. Scandinavian Journal of Statistics 6(2), 65-70.
//
// [2] Welch, B. L. (1947). The generalization of "Student's" problem when
//     several different population variances are involved. Biometrika 34.
//
// Implementation:
// - Holm-Bonferroni thresholds alpha / (N - i) over ascending p-values
// - Uses aprender (crates.io) for Welch's t-test
// - Uses trueno (crates.io) for SIMD-optimized vector statistics

mod holm;
mod welch;

pub use holm::{holm_bonferroni, PValueRecord};
pub use welch::{compare_samples, median, SampleComparison};
