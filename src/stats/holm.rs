use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One statistical comparison result
///
/// `group_key` identifies the property (or experiment family) and `sub_key`
/// the individual experiment within it. Several records may share a key when
/// an experiment reports more than one p-value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PValueRecord {
    pub group_key: usize,
    pub sub_key: usize,
    pub p_value: f64,
}

impl PValueRecord {
    pub fn new(group_key: usize, sub_key: usize, p_value: f64) -> Self {
        Self {
            group_key,
            sub_key,
            p_value,
        }
    }

    /// p-value used for ranking; NaN counts as 1.0
    pub fn effective_p_value(&self) -> f64 {
        if self.p_value.is_nan() {
            1.0
        } else {
            self.p_value
        }
    }

    pub fn key(&self) -> (usize, usize) {
        (self.group_key, self.sub_key)
    }
}

/// Holm-Bonferroni correction over a family of p-values
///
/// Records are sorted ascending by p-value; the record at sorted position
/// `i` is rejected iff `p_i <= alpha / (N - i)`. Every position is checked
/// against its own threshold. Returns the `(group_key, sub_key)` pairs with
/// at least one rejected record.
///
/// # Example
/// ```
/// use aislar::stats::{holm_bonferroni, PValueRecord};
///
/// let records = vec![
///     PValueRecord::new(0, 0, 0.001),
///     PValueRecord::new(0, 1, 0.2),
///     PValueRecord::new(1, 0, 0.5),
/// ];
/// let rejected = holm_bonferroni(&records, 0.05);
/// assert_eq!(rejected.into_iter().collect::<Vec<_>>(), vec![(0, 0)]);
/// ```
pub fn holm_bonferroni(records: &[PValueRecord], alpha: f64) -> BTreeSet<(usize, usize)> {
    let total = records.len();
    let mut sorted: Vec<&PValueRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.effective_p_value().total_cmp(&b.effective_p_value()));

    sorted
        .iter()
        .enumerate()
        .filter(|(rank, record)| record.effective_p_value() <= alpha / (total - rank) as f64)
        .map(|(_, record)| record.key())
        .collect()
}
