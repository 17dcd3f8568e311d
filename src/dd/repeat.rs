use super::dd;
use crate::delta::{diff, list_minus, list_union, order_by, EditOperation};
use crate::error::{ConfigurationRole, PreconditionError};
use crate::oracle::TestOracle;

/// Accumulated result of repeated minimization
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatOutcome<E> {
    /// Union of every round's minimal change, in canonical order
    pub isolated: Vec<E>,
    /// Passing frontier of the last completed round
    pub residual_pass: Vec<E>,
    /// Completed minimization rounds
    pub rounds: usize,
    /// The precondition failure that ended the loop, if any
    ///
    /// After at least one round this is usually the residual failing set
    /// no longer failing, meaning every cause has been peeled off.
    pub stopped_by: Option<PreconditionError>,
}

/// Isolate every independent cause between `base` and `target`
///
/// Diffs the configurations and runs [`dd_repeat_deltas`] on the script.
pub fn dd_repeat<T, O>(base: &[T], target: &[T], oracle: &mut O) -> RepeatOutcome<EditOperation>
where
    T: PartialEq,
    O: TestOracle<EditOperation> + ?Sized,
{
    dd_repeat_deltas(&diff(base, target), oracle)
}

/// Run [`dd`] repeatedly, removing each round's minimal change
///
/// Loops at most `deltas.len()` times. Each round minimizes between the
/// previous passing frontier and the remaining failing deltas, then strips
/// the minimal change from the failing side and records it. A precondition
/// failure ends the loop and the partial result is returned.
pub fn dd_repeat_deltas<E, O>(deltas: &[E], oracle: &mut O) -> RepeatOutcome<E>
where
    E: Clone + PartialEq,
    O: TestOracle<E> + ?Sized,
{
    let mut fail_deltas = deltas.to_vec();
    let mut pass_deltas: Vec<E> = Vec::new();
    let mut store: Vec<E> = Vec::new();
    let mut rounds = 0usize;
    let mut stopped_by = None;

    for _ in 0..deltas.len() {
        let outcome = match dd(oracle, &pass_deltas, &fail_deltas) {
            Ok(outcome) => outcome,
            Err(e) => {
                let exhausted = rounds > 0 && e.role == ConfigurationRole::Failing;
                if exhausted {
                    tracing::info!("dd_repeat: residual deltas no longer fail after {} rounds", rounds);
                } else {
                    tracing::warn!("dd_repeat: stopping after {} rounds: {}", rounds, e);
                }
                stopped_by = Some(e);
                break;
            }
        };

        let minimal_change = outcome.minimal_change();
        rounds += 1;

        if minimal_change.is_empty() {
            tracing::warn!("dd_repeat: round {} isolated nothing, stopping", rounds);
            pass_deltas = outcome.pass;
            break;
        }

        tracing::info!(
            "dd_repeat: round {} isolated {} delta(s) after {} transitions",
            rounds,
            minimal_change.len(),
            outcome.transitions
        );

        fail_deltas = list_minus(&fail_deltas, &minimal_change);
        pass_deltas = outcome.pass;
        store = list_union(&store, &minimal_change);
    }

    RepeatOutcome {
        isolated: order_by(&store, deltas),
        residual_pass: pass_deltas,
        rounds,
        stopped_by,
    }
}
