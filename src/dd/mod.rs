// Delta Debugging under Three-Valued Oracles
//
// Isolates the deltas between a passing and a failing configuration that
// are responsible for the failure, using only oracle answers. The oracle may
// answer Inconclusive; such answers carry no information and the search moves
// on to the next candidate instead of picking a direction.
//
// Scientific Foundation:
// [1] Zeller, A., & Hildebrandt, R. (2002). Simplifying and isolating
//     failure-inducing input. IEEE TSE 28(2). The dd algorithm.
//
// [2] Zeller, A. (1999). Yesterday, my program worked. Today, it does not.
//     Why? ESEC/FSE-7. Repeated isolation of independent causes.
//
// Key Invariant: at every step oracle(pass) == Passed, oracle(fail) == Failed
// and pass is a subset of fail. Each transition strictly shrinks fail - pass,
// so every run terminates whatever the oracle answers.
//
// Components:
// - split: balanced contiguous partition of the current difference
// - dd: one minimization run, Result-returning on precondition violations
// - dd_repeat: peels off independent causes until the residual passes
// - filter_artifacts: exhaustive refinement of a small isolated store

mod artifact;
mod minimize;
mod repeat;
mod split;

pub use artifact::{filter_artifacts, FilteredStore};
pub use minimize::{dd, DdOutcome};
pub use repeat::{dd_repeat, dd_repeat_deltas, RepeatOutcome};
pub use split::split;
