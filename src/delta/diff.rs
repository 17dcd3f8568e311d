use super::EditOperation;

/// Dynamic-programming LCS length table
///
/// Cell `[i][j]` holds the length of the longest common subsequence of
/// `base[..i]` and `target[..j]`. O(n·m) time and space.
pub fn compute_lcs_table<T: PartialEq>(base: &[T], target: &[T]) -> Vec<Vec<usize>> {
    let n = base.len();
    let m = target.len();
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];

    for i in 1..=n {
        for j in 1..=m {
            lcs[i][j] = if base[i - 1] == target[j - 1] {
                lcs[i - 1][j - 1] + 1
            } else {
                lcs[i - 1][j].max(lcs[i][j - 1])
            };
        }
    }

    lcs
}

/// Compute the edit script turning `base` into `target`
///
/// Backtracks the LCS table from `(len(base), len(target))`, preferring
/// unchanged elements, then the direction of the larger LCS value. Ties
/// (`lcs[i-1][j] <= lcs[i][j-1]`) go toward an Addition.
///
/// The returned order is canonical: ascending `location_index`, Additions at
/// a location before the Removal of that location, Additions at the same
/// location by ascending `source_index`.
///
/// # Example
/// ```
/// use aislar::delta::{apply, diff};
///
/// let base: Vec<char> = "ABAB".chars().collect();
/// let target: Vec<char> = "ABBBB".chars().collect();
/// let script = diff(&base, &target);
///
/// assert_eq!(apply(&base, &target, &script).unwrap(), target);
/// assert_eq!(apply(&base, &target, &[]).unwrap(), base);
/// ```
pub fn diff<T: PartialEq>(base: &[T], target: &[T]) -> Vec<EditOperation> {
    let lcs = compute_lcs_table(base, target);
    let mut script = Vec::new();

    let mut i = base.len();
    let mut j = target.len();

    while i != 0 || j != 0 {
        if i == 0 {
            script.push(EditOperation::Addition {
                location_index: i,
                source_index: j - 1,
            });
            j -= 1;
        } else if j == 0 {
            script.push(EditOperation::Removal {
                location_index: i - 1,
            });
            i -= 1;
        } else if base[i - 1] == target[j - 1] {
            i -= 1;
            j -= 1;
        } else if lcs[i - 1][j] <= lcs[i][j - 1] {
            script.push(EditOperation::Addition {
                location_index: i,
                source_index: j - 1,
            });
            j -= 1;
        } else {
            script.push(EditOperation::Removal {
                location_index: i - 1,
            });
            i -= 1;
        }
    }

    script.reverse();
    script
}

/// Longest common subsequence of `base` and `target`, in order
pub fn longest_common_subsequence<T: PartialEq + Clone>(base: &[T], target: &[T]) -> Vec<T> {
    let lcs = compute_lcs_table(base, target);
    let mut common = Vec::with_capacity(lcs[base.len()][target.len()]);

    let mut i = base.len();
    let mut j = target.len();

    while i != 0 && j != 0 {
        if base[i - 1] == target[j - 1] {
            common.push(base[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if lcs[i - 1][j] <= lcs[i][j - 1] {
            j -= 1;
        } else {
            i -= 1;
        }
    }

    common.reverse();
    common
}
