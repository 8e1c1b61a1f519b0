//! Element definitions.
//!
//! The element set is closed: [`Component`] lists every variant, and code
//! that matches on it must handle all of them.
//!
//! ```compile_fail
//! use revisit_core::Component;
//!
//! fn name(component: &Component) -> &'static str {
//!     match component {
//!         Component::A(a) => a.exclusive_method(),
//!     }
//! }
//! ```

use crate::ComponentKind;

/// The first concrete element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ComponentA;

impl ComponentA {
    /// Accessor only `ComponentA` provides.
    ///
    /// Operations reach it because they are written against the concrete type.
    #[inline]
    pub const fn exclusive_method(&self) -> &'static str {
        "A"
    }
}

/// The second concrete element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ComponentB;

impl ComponentB {
    /// Accessor only `ComponentB` provides.
    #[inline]
    pub const fn special_method(&self) -> &'static str {
        "B"
    }
}

/// An element of a pass.
///
/// # Example
///
/// ```rust
/// use revisit_core::{Component, ComponentKind};
///
/// let component = Component::from(ComponentKind::B);
/// assert_eq!(component.kind(), ComponentKind::B);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    A(ComponentA),
    B(ComponentB),
}

impl Component {
    /// Returns the tag of this element's concrete variant.
    #[inline]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Component::A(_) => ComponentKind::A,
            Component::B(_) => ComponentKind::B,
        }
    }
}

impl From<ComponentKind> for Component {
    fn from(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::A => Component::A(ComponentA),
            ComponentKind::B => Component::B(ComponentB),
        }
    }
}

impl From<ComponentA> for Component {
    fn from(component: ComponentA) -> Self {
        Component::A(component)
    }
}

impl From<ComponentB> for Component {
    fn from(component: ComponentB) -> Self {
        Component::B(component)
    }
}
