//! Built-in operations.

use std::collections::BTreeMap;

use crate::visitor::{Merge, Visitor};
use crate::{ComponentA, ComponentB, ComponentKind};

/// Formats each element as `"{value} + V1"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct V1;

impl V1 {
    /// Name this operation appends to every result.
    pub const NAME: &'static str = "V1";
}

impl Visitor for V1 {
    type Output = String;

    fn visit_component_a(&mut self, component: &ComponentA) -> String {
        format!("{} + {}", component.exclusive_method(), Self::NAME)
    }

    fn visit_component_b(&mut self, component: &ComponentB) -> String {
        format!("{} + {}", component.special_method(), Self::NAME)
    }
}

/// Formats each element as `"{value} + V2"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct V2;

impl V2 {
    /// Name this operation appends to every result.
    pub const NAME: &'static str = "V2";
}

impl Visitor for V2 {
    type Output = String;

    fn visit_component_a(&mut self, component: &ComponentA) -> String {
        format!("{} + {}", component.exclusive_method(), Self::NAME)
    }

    fn visit_component_b(&mut self, component: &ComponentB) -> String {
        format!("{} + {}", component.special_method(), Self::NAME)
    }
}

/// Counts visited elements per variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindCounter {
    counts: BTreeMap<ComponentKind, usize>,
}

impl KindCounter {
    /// Creates a counter with no elements seen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many elements of `kind` were visited.
    pub fn count(&self, kind: ComponentKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Returns the number of visited elements.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns the per-variant counts, omitting variants never seen.
    pub fn counts(&self) -> &BTreeMap<ComponentKind, usize> {
        &self.counts
    }

    /// Consumes the counter and returns its counts.
    pub fn into_counts(self) -> BTreeMap<ComponentKind, usize> {
        self.counts
    }

    fn record(&mut self, kind: ComponentKind) {
        *self.counts.entry(kind).or_default() += 1;
    }
}

impl Visitor for KindCounter {
    type Output = ();

    fn visit_component_a(&mut self, _component: &ComponentA) {
        self.record(ComponentKind::A);
    }

    fn visit_component_b(&mut self, _component: &ComponentB) {
        self.record(ComponentKind::B);
    }
}

impl Merge for KindCounter {
    fn merge(&mut self, other: Self) {
        for (kind, count) in other.counts {
            *self.counts.entry(kind).or_default() += count;
        }
    }
}

/// Collects each element's exclusive value in visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueCollector {
    values: Vec<&'static str>,
}

impl ValueCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected values.
    pub fn values(&self) -> &[&'static str] {
        &self.values
    }

    /// Consumes the collector and returns its values.
    pub fn into_values(self) -> Vec<&'static str> {
        self.values
    }
}

impl Visitor for ValueCollector {
    type Output = ();

    fn visit_component_a(&mut self, component: &ComponentA) {
        self.values.push(component.exclusive_method());
    }

    fn visit_component_b(&mut self, component: &ComponentB) {
        self.values.push(component.special_method());
    }
}

impl Merge for ValueCollector {
    fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::{Accept, walk_components};
    use crate::Component;
    use rstest::rstest;

    #[rstest]
    #[case::component_a(Component::A(ComponentA), "A + V1", "A + V2")]
    #[case::component_b(Component::B(ComponentB), "B + V1", "B + V2")]
    fn test_formatting_operations(
        #[case] component: Component,
        #[case] expected_v1: &str,
        #[case] expected_v2: &str,
    ) {
        assert_eq!(component.accept(&mut V1), expected_v1);
        assert_eq!(component.accept(&mut V2), expected_v2);
    }

    #[test]
    fn test_kind_counter() {
        let components = [
            Component::A(ComponentA),
            Component::B(ComponentB),
            Component::A(ComponentA),
        ];
        let mut counter = KindCounter::new();
        walk_components(&mut counter, &components);

        assert_eq!(counter.count(ComponentKind::A), 2);
        assert_eq!(counter.count(ComponentKind::B), 1);
        assert_eq!(counter.total(), 3);
    }

    #[test]
    fn test_kind_counter_unseen_kind_is_zero() {
        let counter = KindCounter::new();
        assert_eq!(counter.count(ComponentKind::B), 0);
        assert!(counter.counts().is_empty());
    }

    #[test]
    fn test_kind_counter_merge_sums() {
        let mut left = KindCounter::new();
        ComponentA.accept(&mut left);
        let mut right = KindCounter::new();
        ComponentA.accept(&mut right);
        ComponentB.accept(&mut right);

        left.merge(right);

        assert_eq!(left.count(ComponentKind::A), 2);
        assert_eq!(left.count(ComponentKind::B), 1);
    }

    #[test]
    fn test_value_collector_merge_appends() {
        let mut left = ValueCollector::new();
        ComponentB.accept(&mut left);
        let mut right = ValueCollector::new();
        ComponentA.accept(&mut right);

        left.merge(right);

        assert_eq!(left.into_values(), vec!["B", "A"]);
    }
}
