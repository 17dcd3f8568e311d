/// Split `elements` into `n` contiguous, balanced parts
///
/// The first `len % n` parts get one extra element. With `n <= len` every
/// part is non-empty; with `n > len` the trailing parts are empty. `n == 0`
/// yields no parts.
///
/// # Example
/// ```
/// use aislar::dd::split;
///
/// let parts = split(&[1, 2, 3, 4, 5], 3);
/// assert_eq!(parts, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn split<E: Clone>(elements: &[E], n: usize) -> Vec<Vec<E>> {
    if n == 0 {
        return Vec::new();
    }

    let size = elements.len() / n;
    let extra = elements.len() % n;

    (0..n)
        .map(|i| {
            let start = i * size + i.min(extra);
            let end = (i + 1) * size + (i + 1).min(extra);
            elements[start..end].to_vec()
        })
        .collect()
}
