//! Variant tags for elements.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DispatchError;

/// Tag naming the concrete variant of a [`Component`](crate::Component).
///
/// Used wherever a variant has to be named outside the type system: config
/// files, command-line arguments and aggregated results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// [`ComponentA`](crate::ComponentA).
    #[serde(alias = "ComponentA")]
    A,
    /// [`ComponentB`](crate::ComponentB).
    #[serde(alias = "ComponentB")]
    B,
}

impl ComponentKind {
    /// Every known variant, in declaration order.
    pub const ALL: [ComponentKind; 2] = [ComponentKind::A, ComponentKind::B];

    /// Returns the short name used in output and config files.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::A => "A",
            ComponentKind::B => "B",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = DispatchError;

    /// Parses `A`, `ComponentA` or `component-a` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        let short = normalized
            .strip_prefix("component")
            .unwrap_or(normalized.as_str());

        match short {
            "a" => Ok(ComponentKind::A),
            "b" => Ok(ComponentKind::B),
            _ => Err(DispatchError::unsupported_variant(s)),
        }
    }
}
