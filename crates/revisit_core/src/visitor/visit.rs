//! Visitor and Accept traits.
//!
//! [`Visitor`] declares one handler per element variant and gives none of
//! them a default body. An operation that forgets a variant does not build:
//!
//! ```compile_fail
//! use revisit_core::{ComponentA, Visitor};
//!
//! struct OnlyA;
//!
//! impl Visitor for OnlyA {
//!     type Output = String;
//!
//!     fn visit_component_a(&mut self, component: &ComponentA) -> String {
//!         component.exclusive_method().to_string()
//!     }
//! }
//! ```

use crate::{Component, ComponentA, ComponentB};

/// An operation over elements.
///
/// Implementors provide one handler per concrete element type. Each handler
/// receives the element by its concrete type, so it can call accessors that
/// only that type offers.
///
/// # Output
///
/// `Output` is whatever a single handler produces. Side-effect-only
/// operations use `()` and keep their state in `self`.
pub trait Visitor {
    /// Result of visiting one element.
    type Output;

    /// Visits any element by letting it pick the matching handler.
    #[inline]
    fn visit<A>(&mut self, element: &A) -> Self::Output
    where
        A: Accept,
        Self: Sized,
    {
        element.accept(self)
    }

    /// Visit a [`ComponentA`].
    fn visit_component_a(&mut self, component: &ComponentA) -> Self::Output;

    /// Visit a [`ComponentB`].
    fn visit_component_b(&mut self, component: &ComponentB) -> Self::Output;
}

/// An element that can route a [`Visitor`] to its own handler.
pub trait Accept {
    /// Calls the handler `visitor` declares for this element's concrete type.
    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: Visitor + ?Sized;
}

impl Accept for ComponentA {
    #[inline]
    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: Visitor + ?Sized,
    {
        visitor.visit_component_a(self)
    }
}

impl Accept for ComponentB {
    #[inline]
    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: Visitor + ?Sized,
    {
        visitor.visit_component_b(self)
    }
}

impl Accept for Component {
    #[inline]
    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: Visitor + ?Sized,
    {
        match self {
            Component::A(component) => component.accept(visitor),
            Component::B(component) => component.accept(visitor),
        }
    }
}
