//! Operation registry and pass plans.
//!
//! Drivers that pick operations at runtime (from a config file or the command
//! line) name them with [`OperationKind`]. Each kind maps to exactly one
//! concrete operation, constructed fresh for every pass.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::visitor::{Merge, Visitor, fold_pass_par, run_pass, run_pass_par, walk_components};
use crate::{
    Component, ComponentKind, DispatchError, KindCounter, PassConfig, V1, V2, ValueCollector,
};

/// Names of the built-in operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// [`V1`]: `"{value} + V1"` per element.
    V1,
    /// [`V2`]: `"{value} + V2"` per element.
    V2,
    /// [`KindCounter`]: element counts per variant.
    Count,
    /// [`ValueCollector`]: exclusive values in visit order.
    Collect,
}

impl OperationKind {
    /// Every built-in operation, in declaration order.
    pub const ALL: [OperationKind; 4] = [
        OperationKind::V1,
        OperationKind::V2,
        OperationKind::Count,
        OperationKind::Collect,
    ];

    /// Returns the name used in output and config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OperationKind::V1 => "V1",
            OperationKind::V2 => "V2",
            OperationKind::Count => "Count",
            OperationKind::Collect => "Collect",
        }
    }

    /// Runs this operation over `elements`.
    ///
    /// A new operation instance is created for the pass and dropped after it.
    /// With `parallel`, the pass is spread over the rayon thread pool; the
    /// output is the same as for a sequential pass.
    pub fn run(self, elements: &[Component], parallel: bool) -> PassOutput {
        debug!(
            "Running {} over {} element(s){}",
            self,
            elements.len(),
            if parallel { " in parallel" } else { "" }
        );

        match self {
            OperationKind::V1 => PassOutput::Lines(lines(elements, V1, parallel)),
            OperationKind::V2 => PassOutput::Lines(lines(elements, V2, parallel)),
            OperationKind::Count => {
                let counter: KindCounter = accumulate(elements, parallel);
                PassOutput::Counts(
                    ComponentKind::ALL
                        .into_iter()
                        .map(|kind| (kind, counter.count(kind)))
                        .collect(),
                )
            }
            OperationKind::Collect => {
                let collector: ValueCollector = accumulate(elements, parallel);
                PassOutput::Values(
                    collector
                        .into_values()
                        .into_iter()
                        .map(String::from)
                        .collect(),
                )
            }
        }
    }
}

fn lines<V>(elements: &[Component], mut visitor: V, parallel: bool) -> Vec<String>
where
    V: Visitor<Output = String> + Clone + Send + Sync,
{
    if parallel {
        run_pass_par(elements, &visitor)
    } else {
        run_pass(elements, &mut visitor)
    }
}

fn accumulate<V>(elements: &[Component], parallel: bool) -> V
where
    V: Visitor + Merge + Default + Send,
{
    if parallel {
        fold_pass_par(elements, V::default)
    } else {
        let mut accumulator = V::default();
        walk_components(&mut accumulator, elements);
        accumulator
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = DispatchError;

    /// Parses an operation name (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DispatchError::unknown_operation(s))
    }
}

/// What one pass produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PassOutput {
    /// One formatted line per element, in sequence order.
    Lines(Vec<String>),
    /// Element count for every known variant.
    Counts(BTreeMap<ComponentKind, usize>),
    /// Exclusive values in sequence order.
    Values(Vec<String>),
}

/// Result of running one operation of a [`PassPlan`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassReport {
    /// The operation that ran.
    pub operation: OperationKind,
    /// What it produced.
    pub output: PassOutput,
}

/// An element sequence and the operations to run over it.
///
/// # Example
///
/// ```rust
/// use revisit_core::{ComponentKind, OperationKind, PassOutput, PassPlan};
///
/// let plan = PassPlan::new(
///     vec![ComponentKind::A.into(), ComponentKind::B.into()],
///     vec![OperationKind::V1, OperationKind::V2],
/// );
///
/// let reports = plan.execute();
/// assert_eq!(reports[0].output, PassOutput::Lines(vec!["A + V1".into(), "B + V1".into()]));
/// assert_eq!(reports[1].output, PassOutput::Lines(vec!["A + V2".into(), "B + V2".into()]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassPlan {
    /// Elements, in visit order.
    pub elements: Vec<Component>,
    /// Operations, in run order.
    pub operations: Vec<OperationKind>,
    /// Whether passes run on the rayon thread pool.
    pub parallel: bool,
}

impl PassPlan {
    /// Creates a sequential plan.
    pub fn new(elements: Vec<Component>, operations: Vec<OperationKind>) -> Self {
        Self {
            elements,
            operations,
            parallel: false,
        }
    }

    /// Builds a plan from a loaded configuration.
    pub fn from_config(config: &PassConfig) -> Self {
        Self {
            elements: config.elements.iter().copied().map(Component::from).collect(),
            operations: config.operations.clone(),
            parallel: config.parallel,
        }
    }

    /// Sets whether passes run in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs every operation over the element sequence, one pass each.
    ///
    /// Passes are independent: no operation sees another's state.
    pub fn execute(&self) -> Vec<PassReport> {
        self.operations
            .iter()
            .map(|&operation| PassReport {
                operation,
                output: operation.run(&self.elements, self.parallel),
            })
            .collect()
    }
}
