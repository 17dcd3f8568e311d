use super::EditOperation;
use crate::error::DeltaError;

/// Rebuild a configuration from `base` and a (possibly partial) edit script
///
/// Walks `base` with a cursor. For each operation, unmodified base elements
/// up to its `location_index` are copied; a Removal then skips one base
/// element, an Addition copies `target[source_index]` without moving the
/// cursor, and a Replacement does both. Remaining base elements are copied at
/// the end.
///
/// `deltas` must be in canonical order (see [`order_by`](super::order_by)).
/// An Addition anchored at a location whose Removal was just processed is
/// accepted, since inserting before a removed element and inserting after it
/// produce the same output.
///
/// # Errors
/// Returns [`DeltaError`] when an operation is out of order or indexes
/// outside `base`/`target`.
pub fn apply<T: Clone>(
    base: &[T],
    target: &[T],
    deltas: &[EditOperation],
) -> Result<Vec<T>, DeltaError> {
    let mut result = Vec::with_capacity(base.len() + deltas.len());
    let mut cursor = 0usize;
    let mut just_removed: Option<usize> = None;

    for op in deltas {
        let location = op.location_index();

        let trailing_addition = !op.consumes_base()
            && just_removed == Some(location)
            && cursor == location + 1;

        if !trailing_addition {
            if location < cursor {
                return Err(DeltaError::OutOfOrder { location, cursor });
            }

            let limit = if op.consumes_base() {
                base.len().saturating_sub(1)
            } else {
                base.len()
            };
            if location > limit || (op.consumes_base() && base.is_empty()) {
                return Err(DeltaError::LocationOutOfBounds {
                    location,
                    len: base.len(),
                });
            }

            result.extend_from_slice(&base[cursor..location]);
            cursor = location;
        }

        if let Some(source_index) = op.source_index() {
            let element = target.get(source_index).ok_or(DeltaError::SourceOutOfBounds {
                source_index,
                len: target.len(),
            })?;
            result.push(element.clone());
        }

        if op.consumes_base() {
            cursor += 1;
            just_removed = Some(location);
        }
    }

    result.extend_from_slice(&base[cursor..]);
    Ok(result)
}
