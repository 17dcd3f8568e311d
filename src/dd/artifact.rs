use crate::delta::list_minus;
use crate::error::{ConfigurationRole, IsolationError, PreconditionError};
use crate::oracle::{TestOracle, TestResult};

/// Result of the artifact filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredStore<E> {
    /// Deltas still needed to reproduce the failure, in store order
    pub retained: Vec<E>,
    /// Deltas confirmed as artifacts, in the order they were found
    pub artifacts: Vec<E>,
}

/// Lexicographic k-combinations of `0..n`
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            exhausted: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.exhausted = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                break;
            }
        }

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Strip deltas that do not contribute to the failure
///
/// Enumerates combinations of the not-yet-confirmed deltas in increasing
/// size `k`, starting at 1 and stopping before the whole remaining set. A
/// combination is confirmed as artifacts when it passes on its own and the
/// store without it (and without earlier artifacts) still fails. After each
/// confirmation enumeration restarts at the same `k` over what remains.
///
/// The retained set always fails under a deterministic oracle. The search is
/// exponential in the store size, so stores larger than `limit` are refused.
///
/// # Errors
/// - [`IsolationError::StoreTooLarge`] if `store.len() > limit`
/// - [`IsolationError::Precondition`] unless the oracle answers Failed for
///   `store` and Passed for the empty set
pub fn filter_artifacts<E, O>(
    oracle: &mut O,
    store: &[E],
    limit: usize,
) -> Result<FilteredStore<E>, IsolationError>
where
    E: Clone + PartialEq,
    O: TestOracle<E> + ?Sized,
{
    if store.len() > limit {
        return Err(IsolationError::StoreTooLarge {
            size: store.len(),
            limit,
        });
    }

    let observed = oracle.evaluate(store);
    if observed != TestResult::Failed {
        return Err(PreconditionError {
            role: ConfigurationRole::Failing,
            expected: TestResult::Failed,
            observed,
        }
        .into());
    }

    let observed = oracle.evaluate(&[]);
    if observed != TestResult::Passed {
        return Err(PreconditionError {
            role: ConfigurationRole::Passing,
            expected: TestResult::Passed,
            observed,
        }
        .into());
    }

    let mut remaining = store.to_vec();
    let mut artifacts = Vec::new();
    let mut k = 1usize;

    while k < remaining.len() {
        let mut confirmed = None;

        for indices in Combinations::new(remaining.len(), k) {
            let combination: Vec<E> = indices.iter().map(|&i| remaining[i].clone()).collect();
            if oracle.evaluate(&combination) != TestResult::Passed {
                continue;
            }

            let without = list_minus(&remaining, &combination);
            if oracle.evaluate(&without) == TestResult::Failed {
                confirmed = Some(combination);
                break;
            }
        }

        match confirmed {
            Some(combination) => {
                tracing::info!(
                    "filter_artifacts: removed {} artifact(s) at size {}, {} deltas remain",
                    combination.len(),
                    k,
                    remaining.len() - combination.len()
                );
                remaining = list_minus(&remaining, &combination);
                artifacts.extend(combination);
            }
            None => k += 1,
        }
    }

    Ok(FilteredStore {
        retained: remaining,
        artifacts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinations_count() {
        assert_eq!(Combinations::new(5, 2).count(), 10);
        assert_eq!(Combinations::new(4, 4).count(), 1);
        assert_eq!(Combinations::new(3, 0).count(), 1);
        assert_eq!(Combinations::new(2, 3).count(), 0);
    }

    #[test]
    fn test_combinations_order() {
        let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_chaff_removed() {
        // Only 4 matters; 1, 6 and 9 were dragged in by noisy answers
        let mut oracle = |subset: &[u32]| {
            if subset.contains(&4) {
                TestResult::Failed
            } else {
                TestResult::Passed
            }
        };
        let filtered = filter_artifacts(&mut oracle, &[1, 4, 6, 9], 12).unwrap();

        assert_eq!(filtered.retained, vec![4]);
        assert_eq!(filtered.artifacts, vec![1, 6, 9]);
    }

    #[test]
    fn test_joint_causes_are_kept() {
        // 2 and 5 only fail together; each passes alone
        let mut oracle = |subset: &[u32]| {
            if subset.contains(&2) && subset.contains(&5) {
                TestResult::Failed
            } else {
                TestResult::Passed
            }
        };
        let filtered = filter_artifacts(&mut oracle, &[2, 5, 8], 12).unwrap();

        assert_eq!(filtered.retained, vec![2, 5]);
        assert_eq!(filtered.artifacts, vec![8]);
    }

    #[test]
    fn test_nothing_to_remove() {
        let mut oracle = |subset: &[u32]| {
            if subset.is_empty() {
                TestResult::Passed
            } else {
                TestResult::Failed
            }
        };
        let filtered = filter_artifacts(&mut oracle, &[3, 7], 12).unwrap();

        assert_eq!(filtered.retained, vec![3, 7]);
        assert!(filtered.artifacts.is_empty());
    }

    #[test]
    fn test_store_too_large() {
        let mut oracle = |_: &[u32]| TestResult::Failed;
        let store: Vec<u32> = (0..5).collect();
        let err = filter_artifacts(&mut oracle, &store, 4).unwrap_err();
        assert_eq!(err, IsolationError::StoreTooLarge { size: 5, limit: 4 });
    }

    #[test]
    fn test_store_must_fail() {
        let mut oracle = |_: &[u32]| TestResult::Inconclusive;
        let err = filter_artifacts(&mut oracle, &[1, 2], 12).unwrap_err();
        assert!(matches!(
            err,
            IsolationError::Precondition(PreconditionError {
                role: ConfigurationRole::Failing,
                ..
            })
        ));
    }
}
