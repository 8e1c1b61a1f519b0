//! Walk functions for running a pass.
//!
//! A pass applies one operation to every element of a sequence, in the order
//! the sequence presents them.

use tracing::{debug, trace};

use crate::Component;

use super::visit::{Accept, Visitor};

/// Runs `visitor` over `elements` and collects one result per element.
///
/// This function:
/// 1. Calls `accept` on each element in sequence order
/// 2. Lets the element dispatch to its handler on `visitor`
/// 3. Collects the handler results in the same order
///
/// # Arguments
///
/// * `elements` - The elements to visit
/// * `visitor` - The operation to apply
///
/// # Returns
///
/// The handler results, one per element, in sequence order.
pub fn run_pass<'c, V, I>(elements: I, visitor: &mut V) -> Vec<V::Output>
where
    V: Visitor + ?Sized,
    I: IntoIterator<Item = &'c Component>,
{
    let results: Vec<V::Output> = elements
        .into_iter()
        .map(|component| {
            trace!("Dispatching {}", component.kind());
            component.accept(&mut *visitor)
        })
        .collect();

    debug!("Pass visited {} element(s)", results.len());
    results
}

/// Runs `visitor` over `elements` for its side effects, discarding results.
///
/// Use this for operations that accumulate into their own state.
#[inline]
pub fn walk_components<'c, V, I>(visitor: &mut V, elements: I)
where
    V: Visitor + ?Sized,
    I: IntoIterator<Item = &'c Component>,
{
    let mut visited = 0usize;
    for component in elements {
        trace!("Dispatching {}", component.kind());
        component.accept(&mut *visitor);
        visited += 1;
    }
    debug!("Pass visited {} element(s)", visited);
}
