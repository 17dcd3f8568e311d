use serde::{Deserialize, Serialize};
use std::fmt;

/// A single step transforming the base configuration toward the target
///
/// Both indices are fixed when the script is computed and are never
/// renumbered. [`apply`](super::apply) absorbs the positional drift caused by
/// earlier additions and removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum EditOperation {
    /// Drop `base[location_index]`
    Removal { location_index: usize },

    /// Insert `target[source_index]` before `base[location_index]`
    ///
    /// `location_index == base.len()` appends.
    Addition {
        location_index: usize,
        source_index: usize,
    },

    /// Swap `base[location_index]` for `target[source_index]`
    ///
    /// Never produced by [`diff`](super::diff); see
    /// [`coalesce_replacements`](super::coalesce_replacements).
    Replacement {
        location_index: usize,
        source_index: usize,
    },
}

impl EditOperation {
    /// Position in the base configuration this operation is anchored to
    pub fn location_index(&self) -> usize {
        match *self {
            EditOperation::Removal { location_index }
            | EditOperation::Addition { location_index, .. }
            | EditOperation::Replacement { location_index, .. } => location_index,
        }
    }

    /// Position in the target configuration of the element this operation inserts
    pub fn source_index(&self) -> Option<usize> {
        match *self {
            EditOperation::Removal { .. } => None,
            EditOperation::Addition { source_index, .. }
            | EditOperation::Replacement { source_index, .. } => Some(source_index),
        }
    }

    /// Whether applying this operation consumes a base element
    pub fn consumes_base(&self) -> bool {
        !matches!(self, EditOperation::Addition { .. })
    }

    /// Render the operation together with the elements it touches
    pub fn describe<T: fmt::Debug>(&self, base: &[T], target: &[T]) -> String {
        fn element<T: fmt::Debug>(items: &[T], idx: usize) -> String {
            items
                .get(idx)
                .map(|e| format!("{:?}", e))
                .unwrap_or_else(|| "?".to_string())
        }

        match *self {
            EditOperation::Removal { location_index } => {
                format!("- [{}] {}", location_index, element(base, location_index))
            }
            EditOperation::Addition {
                location_index,
                source_index,
            } => format!(
                "+ [{}] {} (from target[{}])",
                location_index,
                element(target, source_index),
                source_index
            ),
            EditOperation::Replacement {
                location_index,
                source_index,
            } => format!(
                "~ [{}] {} -> {}",
                location_index,
                element(base, location_index),
                element(target, source_index)
            ),
        }
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EditOperation::Removal { location_index } => write!(f, "-{}", location_index),
            EditOperation::Addition {
                location_index,
                source_index,
            } => write!(f, "+{}<{}", location_index, source_index),
            EditOperation::Replacement {
                location_index,
                source_index,
            } => write!(f, "~{}<{}", location_index, source_index),
        }
    }
}

/// One human-readable line per operation of `script`
///
/// # Example
/// ```
/// use aislar::delta::{describe_edit_script, diff};
///
/// let base = ['a', 'b'];
/// let target = ['a', 'c'];
/// let lines = describe_edit_script(&diff(&base, &target), &base, &target);
/// assert_eq!(lines, vec!["- [1] 'b'", "+ [2] 'c' (from target[1])"]);
/// ```
pub fn describe_edit_script<T: fmt::Debug>(
    script: &[EditOperation],
    base: &[T],
    target: &[T],
) -> Vec<String> {
    script.iter().map(|op| op.describe(base, target)).collect()
}
