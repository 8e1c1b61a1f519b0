//! # revisit_core
//!
//! Closed-set double dispatch for Revisit.
//!
//! This crate provides the element types, the [`Visitor`] operation trait and
//! the helpers a driver uses to run an operation over a sequence of elements.
//!
//! ## Architecture
//!
//! - Elements form a closed sum type ([`Component`]) matched exhaustively
//! - Each operation implements one required handler per element variant
//! - Adding a variant breaks the build of every operation until it handles it
//! - Elements are only ever lent to operations by shared reference
//!
//! ## Example
//!
//! ```rust
//! use revisit_core::{Component, ComponentA, ComponentB, V1, run_pass};
//!
//! let components = [Component::A(ComponentA), Component::B(ComponentB)];
//!
//! let results = run_pass(&components, &mut V1);
//! assert_eq!(results, vec!["A + V1", "B + V1"]);
//! ```

mod component;
mod component_kind;
mod config;
mod error;
mod operations;
mod pass;
pub mod visitor;

pub use component::{Component, ComponentA, ComponentB};
pub use component_kind::ComponentKind;
pub use config::PassConfig;
pub use error::DispatchError;
pub use operations::{KindCounter, V1, V2, ValueCollector};
pub use pass::{OperationKind, PassOutput, PassPlan, PassReport};

// Re-export commonly used visitor items for convenience
pub use visitor::{Accept, Merge, Visitor, fold_pass_par, run_pass, run_pass_par, walk_components};
