use super::{TestOracle, TestResult};
use fnv::FnvHashMap;
use std::hash::Hash;

/// Memoized oracle answers keyed by delta set
///
/// Keys are order-independent: `[a, b]` and `[b, a]` share an entry. The
/// cache is owned by the caller and passed into [`CachedOracle`], so separate
/// isolation runs never share answers unless the caller hands the same cache
/// to both.
#[derive(Debug, Clone)]
pub struct OracleCache<E> {
    results: FnvHashMap<Vec<E>, TestResult>,
}

impl<E> Default for OracleCache<E> {
    fn default() -> Self {
        Self {
            results: FnvHashMap::default(),
        }
    }
}

impl<E: Ord + Hash + Clone> OracleCache<E> {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(subset: &[E]) -> Vec<E> {
        let mut key = subset.to_vec();
        key.sort();
        key
    }

    /// Previously recorded answer for `subset`, in any order
    pub fn get(&self, subset: &[E]) -> Option<TestResult> {
        self.results.get(&Self::key(subset)).copied()
    }

    pub fn insert(&mut self, subset: &[E], result: TestResult) {
        self.results.insert(Self::key(subset), result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }
}

/// Wraps an oracle with memoization and call accounting
///
/// `tests_performed` counts every evaluation request; `tests_performed_no_cache`
/// counts only the ones that reached the inner oracle.
#[derive(Debug)]
pub struct CachedOracle<O, E> {
    inner: O,
    cache: OracleCache<E>,
    tests_performed: usize,
    tests_performed_no_cache: usize,
}

impl<O, E> CachedOracle<O, E>
where
    O: TestOracle<E>,
    E: Ord + Hash + Clone,
{
    pub fn new(inner: O, cache: OracleCache<E>) -> Self {
        Self {
            inner,
            cache,
            tests_performed: 0,
            tests_performed_no_cache: 0,
        }
    }

    pub fn tests_performed(&self) -> usize {
        self.tests_performed
    }

    pub fn tests_performed_no_cache(&self) -> usize {
        self.tests_performed_no_cache
    }

    pub fn cache(&self) -> &OracleCache<E> {
        &self.cache
    }

    /// Give back the inner oracle and the cache so the cache can seed a later run
    pub fn into_parts(self) -> (O, OracleCache<E>) {
        (self.inner, self.cache)
    }
}

impl<O, E> TestOracle<E> for CachedOracle<O, E>
where
    O: TestOracle<E>,
    E: Ord + Hash + Clone,
{
    fn evaluate(&mut self, subset: &[E]) -> TestResult {
        self.tests_performed += 1;

        if let Some(result) = self.cache.get(subset) {
            return result;
        }

        self.tests_performed_no_cache += 1;
        let result = self.inner.evaluate(subset);
        self.cache.insert(subset, result);
        result
    }
}
