use super::EditOperation;

/// Merge each Removal with the Addition that refills its slot
///
/// In a canonical script, `Removal{k}` followed by `Addition{k+1, s}` drops
/// `base[k]` and inserts `target[s]` right where it was. The pair becomes a
/// single `Replacement{k, s}`, so delta debugging treats a substituted
/// element as one delta instead of two. The first Addition at `k+1` is the
/// one paired; later ones at the same location stay Additions.
///
/// Applying the coalesced script yields the same configuration as applying
/// the original one.
pub fn coalesce_replacements(script: &[EditOperation]) -> Vec<EditOperation> {
    let mut partner: Vec<Option<usize>> = vec![None; script.len()];
    let mut paired = vec![false; script.len()];

    for (idx, op) in script.iter().enumerate() {
        let EditOperation::Removal { location_index } = *op else {
            continue;
        };

        for (offset, later) in script[idx + 1..].iter().enumerate() {
            let later_idx = idx + 1 + offset;
            if later.location_index() > location_index + 1 {
                break;
            }
            if let EditOperation::Addition {
                location_index: add_location,
                ..
            } = *later
            {
                if add_location == location_index + 1 && !paired[later_idx] {
                    partner[idx] = Some(later_idx);
                    paired[later_idx] = true;
                    break;
                }
            }
        }
    }

    script
        .iter()
        .enumerate()
        .filter(|(idx, _)| !paired[*idx])
        .map(|(idx, op)| match (partner[idx], *op) {
            (Some(add_idx), EditOperation::Removal { location_index }) => {
                EditOperation::Replacement {
                    location_index,
                    source_index: script[add_idx].source_index().unwrap_or_default(),
                }
            }
            _ => *op,
        })
        .collect()
}
