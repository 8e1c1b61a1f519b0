//! Visitor pattern for element dispatch.
//!
//! This module provides the traits and functions that implement double
//! dispatch over the closed [`Component`](crate::Component) set.
//!
//! # Overview
//!
//! - [`Visitor`] - Operation trait with one required handler per variant
//! - [`Accept`] - Element side of the dispatch, routes to the matching handler
//! - [`run_pass`] - Apply an operation to a sequence and collect results
//! - [`walk_components`] - Apply an operation for its side effects only
//! - [`run_pass_par`] / [`fold_pass_par`] - Parallel passes with per-worker state
//!
//! # Examples
//!
//! ## Collecting Results
//!
//! ```rust
//! use revisit_core::{Component, ComponentA, ComponentB};
//! use revisit_core::visitor::{Visitor, run_pass};
//!
//! struct Lowercase;
//!
//! impl Visitor for Lowercase {
//!     type Output = String;
//!
//!     fn visit_component_a(&mut self, component: &ComponentA) -> String {
//!         component.exclusive_method().to_lowercase()
//!     }
//!
//!     fn visit_component_b(&mut self, component: &ComponentB) -> String {
//!         component.special_method().to_lowercase()
//!     }
//! }
//!
//! let components = [Component::A(ComponentA), Component::B(ComponentB)];
//! assert_eq!(run_pass(&components, &mut Lowercase), vec!["a", "b"]);
//! ```
//!
//! ## Accumulating State
//!
//! ```rust
//! use revisit_core::{Component, ComponentA, ComponentB};
//! use revisit_core::visitor::{Visitor, walk_components};
//!
//! #[derive(Default)]
//! struct CountB {
//!     seen: usize,
//! }
//!
//! impl Visitor for CountB {
//!     type Output = ();
//!
//!     fn visit_component_a(&mut self, _component: &ComponentA) {}
//!
//!     fn visit_component_b(&mut self, _component: &ComponentB) {
//!         self.seen += 1;
//!     }
//! }
//!
//! let components = [Component::B(ComponentB), Component::A(ComponentA), Component::B(ComponentB)];
//! let mut counter = CountB::default();
//! walk_components(&mut counter, &components);
//! assert_eq!(counter.seen, 2);
//! ```

mod parallel;
mod visit;
mod walk;

pub use parallel::{Merge, fold_pass_par, run_pass_par};
pub use visit::{Accept, Visitor};
pub use walk::{run_pass, walk_components};
