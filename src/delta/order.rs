/// Re-order `subset` to follow the order of `reference`
///
/// Returns the subsequence of `reference` whose members are exactly the
/// members of `subset`. Duplicates are matched one-for-one; elements of
/// `subset` absent from `reference` are dropped. Delta debugging unions and
/// subtracts freely, so every subset goes through here before it is applied
/// or handed to an oracle.
///
/// # Example
/// ```
/// use aislar::delta::order_by;
///
/// let reference = vec![1, 2, 3, 4];
/// assert_eq!(order_by(&[4, 1, 3], &reference), vec![1, 3, 4]);
/// ```
pub fn order_by<E: PartialEq + Clone>(subset: &[E], reference: &[E]) -> Vec<E> {
    let mut pending: Vec<&E> = subset.iter().collect();
    let mut ordered = Vec::with_capacity(subset.len());

    for element in reference {
        if pending.is_empty() {
            break;
        }
        if let Some(pos) = pending.iter().position(|candidate| *candidate == element) {
            pending.swap_remove(pos);
            ordered.push(element.clone());
        }
    }

    ordered
}

/// All elements of `c1` that do not occur in `c2`, in `c1`'s order
pub fn list_minus<E: PartialEq + Clone>(c1: &[E], c2: &[E]) -> Vec<E> {
    c1.iter().filter(|e| !c2.contains(e)).cloned().collect()
}

/// `c1 - c2` followed by `c2`
pub fn list_union<E: PartialEq + Clone>(c1: &[E], c2: &[E]) -> Vec<E> {
    let mut union = list_minus(c1, c2);
    union.extend_from_slice(c2);
    union
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by_follows_reference() {
        let reference = vec!['a', 'b', 'c', 'd', 'e'];
        assert_eq!(order_by(&['e', 'b', 'a'], &reference), vec!['a', 'b', 'e']);
    }

    #[test]
    fn test_order_by_is_idempotent() {
        let reference = vec![5, 3, 9, 1];
        let once = order_by(&[1, 5, 9], &reference);
        assert_eq!(order_by(&once, &reference), once);
    }

    #[test]
    fn test_order_by_duplicates_removed_on_match() {
        let reference = vec![1, 2, 1, 3];
        assert_eq!(order_by(&[1, 3], &reference), vec![1, 3]);
        assert_eq!(order_by(&[1, 1], &reference), vec![1, 1]);
    }

    #[test]
    fn test_order_by_drops_foreign_elements() {
        assert_eq!(order_by(&[7, 2], &[1, 2, 3]), vec![2]);
        assert!(order_by::<u8>(&[], &[1, 2]).is_empty());
    }

    #[test]
    fn test_list_minus_and_union() {
        assert_eq!(list_minus(&[1, 2, 3, 4], &[2, 4]), vec![1, 3]);
        assert_eq!(list_union(&[1, 2, 3], &[3, 5]), vec![1, 2, 3, 5]);
        assert_eq!(list_union::<u8>(&[], &[]), Vec::<u8>::new());
    }
}
