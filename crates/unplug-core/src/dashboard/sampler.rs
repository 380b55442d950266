//! Uniform without-replacement sampling behind the shuffle intent.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

use crate::catalog::Alternative;

/// Seedable sampler for the displayed-alternatives subset.
///
/// Sampling uses `rand::seq::index::sample` (a partial Fisher-Yates), which
/// is uniform over subsets of the requested size and over orderings within
/// each subset. Tests verify the distribution property, not a fixed
/// permutation.
#[derive(Debug)]
pub struct Sampler {
    rng: Mcg128Xsl64,
}

impl Sampler {
    /// `Some(seed)` gives a reproducible sequence; `None` draws from OS
    /// entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        Self { rng }
    }

    /// Draw `count` entries uniformly without replacement.
    ///
    /// Callers guarantee `count <= pool.len()`.
    pub fn sample(&mut self, pool: &[Alternative], count: usize) -> Vec<Alternative> {
        rand::seq::index::sample(&mut self.rng, pool.len(), count)
            .iter()
            .map(|i| pool[i].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::collections::HashSet;

    #[test]
    fn sample_has_requested_size_and_no_duplicates() {
        let pool = Catalog::built_in().alternatives;
        let mut sampler = Sampler::new(Some(1));
        for _ in 0..100 {
            let picked = sampler.sample(&pool, 4);
            assert_eq!(picked.len(), 4);
            let ids: HashSet<&str> = picked.iter().map(|a| a.id.as_str()).collect();
            assert_eq!(ids.len(), 4);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let pool = Catalog::built_in().alternatives;
        let mut a = Sampler::new(Some(42));
        let mut b = Sampler::new(Some(42));
        for _ in 0..10 {
            let ids_a: Vec<String> = a.sample(&pool, 4).into_iter().map(|x| x.id).collect();
            let ids_b: Vec<String> = b.sample(&pool, 4).into_iter().map(|x| x.id).collect();
            assert_eq!(ids_a, ids_b);
        }
    }

    #[test]
    fn full_pool_sample_is_a_permutation() {
        let pool = Catalog::built_in().alternatives;
        let mut sampler = Sampler::new(Some(3));
        let picked = sampler.sample(&pool, pool.len());
        let ids: HashSet<&str> = picked.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), pool.len());
    }
}
