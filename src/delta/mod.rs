// Edit Scripts over Ordered Configurations
//
// This module computes the deltas between a known-good base configuration and
// a known-bad target configuration, and rebuilds intermediate configurations
// from any subset of those deltas. Elements are opaque: the only requirement
// is equality (and Clone for reconstruction).
//
// Scientific Foundation:
// [1] Hunt, J. W., & McIlroy, M. D. (1976). An algorithm for differential file
//     comparison. Bell Labs CSTR #41. LCS-based edit scripts.
//
// [2] Zeller, A. (1999). Yesterday, my program worked. Today, it does not. Why?
//     ESEC/FSE-7. Deltas between versions are the circumstances under test.
//
// Key Invariant: apply(base, target, diff(base, target)) == target and
// apply(base, target, []) == base. Every subset handed to apply must first be
// put back into the script's canonical order with order_by().

mod apply;
mod diff;
mod edit;
mod order;
mod replace;

pub use apply::apply;
pub use diff::{compute_lcs_table, diff, longest_common_subsequence};
pub use edit::{describe_edit_script, EditOperation};
pub use order::{list_minus, list_union, order_by};
pub use replace::coalesce_replacements;
