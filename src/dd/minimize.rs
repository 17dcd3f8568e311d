use super::split;
use crate::delta::{list_minus, list_union, order_by};
use crate::error::{ConfigurationRole, PreconditionError};
use crate::oracle::{TestOracle, TestResult};

/// Final frontiers of one minimization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdOutcome<E> {
    /// Largest passing configuration found
    pub pass: Vec<E>,
    /// Smallest failing configuration found
    pub fail: Vec<E>,
    /// Number of frontier moves made
    pub transitions: usize,
}

impl<E: Clone + PartialEq> DdOutcome<E> {
    /// The failure-inducing difference `fail - pass`
    pub fn minimal_change(&self) -> Vec<E> {
        list_minus(&self.fail, &self.pass)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    ReduceToSubset,
    IncreaseToSubset,
    ReduceToComplement,
    IncreaseToComplement,
}

/// Ask the oracle about one subset and pick the frontier move, if any
///
/// Checks run in a fixed order and stop at the first match. The passing
/// candidate is evaluated at most once.
fn probe<E, O>(
    oracle: &mut O,
    granularity: usize,
    candidate_pass: &[E],
    candidate_fail: &[E],
) -> Option<Transition>
where
    O: TestOracle<E> + ?Sized,
{
    let mut pass_result = None;

    if granularity == 2 {
        let result = oracle.evaluate(candidate_pass);
        if result == TestResult::Failed {
            return Some(Transition::ReduceToSubset);
        }
        pass_result = Some(result);
    }

    let fail_result = oracle.evaluate(candidate_fail);
    if granularity == 2 && fail_result == TestResult::Passed {
        return Some(Transition::IncreaseToSubset);
    }
    if fail_result == TestResult::Failed {
        return Some(Transition::ReduceToComplement);
    }

    let pass_result = match pass_result {
        Some(result) => result,
        None => oracle.evaluate(candidate_pass),
    };
    if pass_result == TestResult::Passed {
        return Some(Transition::IncreaseToComplement);
    }

    None
}

fn check<E, O>(
    oracle: &mut O,
    configuration: &[E],
    role: ConfigurationRole,
    expected: TestResult,
) -> Result<(), PreconditionError>
where
    O: TestOracle<E> + ?Sized,
{
    let observed = oracle.evaluate(configuration);
    if observed == expected {
        Ok(())
    } else {
        Err(PreconditionError {
            role,
            expected,
            observed,
        })
    }
}

/// Minimize the difference between a passing and a failing configuration
///
/// `c_pass` should be a subset of `c_fail`, and `c_fail` should be in the
/// canonical order of the delta list (any elements of `c_pass` outside
/// `c_fail` are ordered after it). Every candidate is put back into that
/// order before it reaches the oracle.
///
/// Returns frontiers `(pass, fail)` with `oracle(pass) == Passed`,
/// `oracle(fail) == Failed` and `fail - pass` 1-minimal at the final
/// granularity: removing any single part of it no longer flips the outcome.
///
/// # Errors
/// Returns [`PreconditionError`] when the oracle does not answer Passed for
/// `c_pass` or Failed for `c_fail`.
///
/// # Example
/// ```
/// use aislar::dd::dd;
/// use aislar::oracle::TestResult;
///
/// let deltas: Vec<u32> = (0..8).collect();
/// let mut oracle = |subset: &[u32]| {
///     if subset.contains(&5) { TestResult::Failed } else { TestResult::Passed }
/// };
///
/// let outcome = dd(&mut oracle, &[], &deltas).unwrap();
/// assert_eq!(outcome.minimal_change(), vec![5]);
/// ```
pub fn dd<E, O>(oracle: &mut O, c_pass: &[E], c_fail: &[E]) -> Result<DdOutcome<E>, PreconditionError>
where
    E: Clone + PartialEq,
    O: TestOracle<E> + ?Sized,
{
    let mut reference = c_fail.to_vec();
    reference.extend(list_minus(c_pass, c_fail));

    let mut pass = order_by(c_pass, &reference);
    let mut fail = order_by(c_fail, &reference);

    check(oracle, &pass, ConfigurationRole::Passing, TestResult::Passed)?;
    check(oracle, &fail, ConfigurationRole::Failing, TestResult::Failed)?;

    let mut granularity = 2usize;
    let mut offset = 0usize;
    let mut transitions = 0usize;

    loop {
        let delta = list_minus(&fail, &pass);
        if granularity > delta.len() {
            break;
        }

        let subsets = split(&delta, granularity);
        let mut moved = false;

        for j in 0..granularity {
            let i = (j + offset) % granularity;
            let candidate_pass = order_by(&list_union(&pass, &subsets[i]), &reference);
            let candidate_fail = order_by(&list_minus(&fail, &subsets[i]), &reference);

            let Some(transition) = probe(oracle, granularity, &candidate_pass, &candidate_fail)
            else {
                continue;
            };

            match transition {
                Transition::ReduceToSubset => fail = candidate_pass,
                Transition::IncreaseToSubset => pass = candidate_fail,
                Transition::ReduceToComplement => {
                    fail = candidate_fail;
                    granularity = (granularity - 1).max(2);
                }
                Transition::IncreaseToComplement => {
                    pass = candidate_pass;
                    granularity = (granularity - 1).max(2);
                }
            }

            tracing::debug!(
                "dd: {:?} on subset {} -> |pass|={} |fail|={} n={}",
                transition,
                i,
                pass.len(),
                fail.len(),
                granularity
            );

            offset = i;
            transitions += 1;
            moved = true;
            break;
        }

        if moved {
            continue;
        }

        if granularity >= delta.len() {
            break;
        }
        granularity = (granularity * 2).min(delta.len());
        tracing::debug!("dd: no progress, granularity -> {}", granularity);
    }

    Ok(DdOutcome {
        pass,
        fail,
        transitions,
    })
}
