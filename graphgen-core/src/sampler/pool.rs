//! Shrinking candidate pool for sampling without replacement.

use std::collections::BTreeSet;

use rand::Rng;

use super::{Edge, PoolKind};
use crate::{Result, error::GraphError};

/// A candidate list with a live prefix that shrinks as edges are drawn.
///
/// Each draw picks a uniformly random live slot, swaps it with the last live
/// slot, and shortens the live prefix by one. Draws are O(1) and the backing
/// vector is never reallocated.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
///
/// use graphgen_core::sampler::{CandidatePool, PoolKind, all_edges};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let mut pool = CandidatePool::new(PoolKind::All, all_edges(4)?);
/// let mut picked = BTreeSet::new();
/// pool.draw_into(3, &mut rng, &mut picked)?;
/// assert_eq!(picked.len(), 3);
/// assert_eq!(pool.len(), 3);
/// # Ok::<(), graphgen_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CandidatePool {
    kind: PoolKind,
    candidates: Vec<Edge>,
    live: usize,
}

impl CandidatePool {
    /// Wraps `candidates` as a pool with every entry live.
    #[must_use]
    pub fn new(kind: PoolKind, candidates: Vec<Edge>) -> Self {
        let live = candidates.len();
        Self {
            kind,
            candidates,
            live,
        }
    }

    /// Returns which pool this is.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kind(&self) -> PoolKind { self.kind }

    /// Returns the number of edges still available.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.live }

    /// Returns `true` once every candidate has been drawn.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.live == 0 }

    /// Removes and returns one uniformly chosen live edge, or `None` when the
    /// pool is exhausted.
    pub fn take<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Edge> {
        let last = self.live.checked_sub(1)?;
        let index = rng.gen_range(0..self.live);
        self.candidates.swap(index, last);
        self.live = last;
        self.candidates.get(last).copied()
    }

    /// Fails unless the pool can supply `count` distinct edges.
    ///
    /// # Errors
    /// Returns [`GraphError::InsufficientCandidates`] when `count` exceeds
    /// [`CandidatePool::len`].
    pub const fn ensure_available(&self, count: usize) -> Result<()> {
        if count > self.live {
            return Err(GraphError::InsufficientCandidates {
                pool: self.kind,
                requested: count,
                available: self.live,
            });
        }
        Ok(())
    }

    /// Draws `count` distinct edges into `out`.
    ///
    /// The request is validated before any edge is drawn, so a failed call
    /// leaves both the pool and `out` untouched.
    ///
    /// # Errors
    /// Returns [`GraphError::InsufficientCandidates`] when `count` exceeds
    /// [`CandidatePool::len`].
    pub fn draw_into<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
        out: &mut BTreeSet<Edge>,
    ) -> Result<()> {
        self.ensure_available(count)?;
        for _ in 0..count {
            if let Some(edge) = self.take(rng) {
                out.insert(edge);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};

    use crate::sampler::all_edges;

    #[test]
    fn take_exhausts_every_candidate_exactly_once() {
        let mut rng = SmallRng::seed_from_u64(11);
        let candidates = all_edges(6).expect("K6 candidates fit in memory");
        let mut pool = CandidatePool::new(PoolKind::All, candidates.clone());
        assert_eq!(pool.kind(), PoolKind::All);
        let mut drawn = Vec::new();
        while let Some(edge) = pool.take(&mut rng) {
            drawn.push(edge);
        }
        assert!(pool.is_empty());
        assert_eq!(pool.take(&mut rng), None);
        drawn.sort();
        assert_eq!(drawn, candidates);
    }

    #[test]
    fn draw_into_rejects_oversized_requests_without_drawing() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut pool =
            CandidatePool::new(PoolKind::Low, all_edges(3).expect("K3 candidates fit in memory"));
        let mut out = BTreeSet::new();
        let err = pool
            .draw_into(4, &mut rng, &mut out)
            .expect_err("only three candidates exist");
        assert_eq!(
            err,
            GraphError::InsufficientCandidates {
                pool: PoolKind::Low,
                requested: 4,
                available: 3,
            }
        );
        assert_eq!(pool.len(), 3);
        assert!(out.is_empty());
    }

    #[test]
    fn draw_into_can_empty_the_pool() {
        let mut rng = SmallRng::seed_from_u64(5);
        let candidates = all_edges(4).expect("K4 candidates fit in memory");
        let mut pool = CandidatePool::new(PoolKind::High, candidates.clone());
        let mut out = BTreeSet::new();
        pool.draw_into(6, &mut rng, &mut out)
            .expect("the whole pool may be drawn");
        assert_eq!(out.into_iter().collect::<Vec<_>>(), candidates);
        assert!(pool.is_empty());
        assert_eq!(pool.kind(), PoolKind::High);
    }
}
