//! Parallel passes.
//!
//! Operations take `&mut self`, so a single instance cannot be shared between
//! workers. Each worker owns its own operation instead: either a clone of a
//! template ([`run_pass_par`]) or a fresh accumulator that is merged with its
//! neighbours afterwards ([`fold_pass_par`]).

use rayon::prelude::*;
use tracing::debug;

use crate::Component;

use super::visit::{Accept, Visitor};

/// Combines two partial accumulators of the same operation.
///
/// `other` always covers elements that come after those already merged into
/// `self`, so appending keeps sequence order.
pub trait Merge {
    /// Folds `other` into `self`.
    fn merge(&mut self, other: Self);
}

/// Runs a cloneable operation over `elements` on the rayon thread pool.
///
/// Every worker gets its own clone of `visitor`. Results are returned in
/// sequence order, exactly as [`run_pass`](super::run_pass) would produce them
/// for operations whose handlers do not depend on earlier elements.
pub fn run_pass_par<V>(elements: &[Component], visitor: &V) -> Vec<V::Output>
where
    V: Visitor + Clone + Send + Sync,
    V::Output: Send,
{
    debug!("Running parallel pass over {} element(s)", elements.len());

    elements
        .par_iter()
        .map_init(|| visitor.clone(), |worker, component| component.accept(worker))
        .collect()
}

/// Runs an accumulating operation over `elements` on the rayon thread pool.
///
/// `seed` creates one empty accumulator per work split. Partial accumulators
/// are merged left to right, so the result matches a sequential
/// [`walk_components`](super::walk_components) over a single accumulator.
pub fn fold_pass_par<V, S>(elements: &[Component], seed: S) -> V
where
    V: Visitor + Merge + Send,
    S: Fn() -> V + Sync + Send,
{
    debug!("Running parallel fold over {} element(s)", elements.len());

    elements
        .par_iter()
        .fold(&seed, |mut worker, component| {
            component.accept(&mut worker);
            worker
        })
        .reduce(&seed, |mut left, right| {
            left.merge(right);
            left
        })
}
