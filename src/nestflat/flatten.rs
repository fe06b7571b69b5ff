//! Depth-first flattening of nested sequences
//!
//! Every function here produces the same output: the leaves of the input in depth-first,
//! left-to-right order, with each nested sequence's leaves emitted contiguously at the
//! position the sequence occupied in its parent. The input is never modified and the
//! returned vector is freshly allocated.
//!
//! # Traversals
//!
//! - [`flatten`] and [`flatten_owned`] walk an explicit stack of iterators, one per open
//!   sequence, so the nesting depth is limited by heap memory only.
//! - [`flatten_recursive`] splices the result of a recursive call for each nested sequence.
//!   It is bounded by the call stack and exists for callers that want the plain recursive
//!   formulation; it is not guarded against stack exhaustion.

use super::element::Element;
use super::error::FlattenError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Selects how [`flatten_with`] walks the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    /// Explicit work stack on the heap.
    #[default]
    Iterative,
    /// One call frame per nesting level.
    Recursive,
}

impl Traversal {
    pub fn name(&self) -> &'static str {
        match self {
            Traversal::Iterative => "iterative",
            Traversal::Recursive => "recursive",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Traversal {
    type Err = FlattenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iterative" => Ok(Traversal::Iterative),
            "recursive" => Ok(Traversal::Recursive),
            other => Err(FlattenError::UnknownTraversal(other.to_string())),
        }
    }
}

/// Flattens `input` into its leaves, cloning each leaf.
///
/// # Examples
///
/// ```ignore
/// let input = nest![[1, 2], [3]];
/// assert_eq!(flatten(&input), vec![1, 2, 3]);
/// ```
pub fn flatten<T: Clone>(input: &[Element<T>]) -> Vec<T> {
    let mut leaves = Vec::new();
    let mut stack = vec![input.iter()];

    while let Some(open) = stack.last_mut() {
        match open.next() {
            Some(Element::Leaf(value)) => leaves.push(value.clone()),
            Some(Element::Nested(children)) => stack.push(children.iter()),
            None => {
                stack.pop();
            }
        }
    }

    leaves
}

/// Flattens `input` by value, moving leaves into the output without cloning.
pub fn flatten_owned<T>(input: Vec<Element<T>>) -> Vec<T> {
    let mut leaves = Vec::new();
    let mut stack = vec![input.into_iter()];

    while let Some(open) = stack.last_mut() {
        match open.next() {
            Some(Element::Leaf(value)) => leaves.push(value),
            Some(Element::Nested(children)) => stack.push(children.into_iter()),
            None => {
                stack.pop();
            }
        }
    }

    leaves
}

/// Flattens `input` recursively, building a new vector per level and splicing it into the
/// parent's result.
pub fn flatten_recursive<T: Clone>(input: &[Element<T>]) -> Vec<T> {
    input
        .iter()
        .flat_map(|element| match element {
            Element::Leaf(value) => vec![value.clone()],
            Element::Nested(children) => flatten_recursive(children),
        })
        .collect()
}

/// Flattens `input` with the selected traversal.
pub fn flatten_with<T: Clone>(input: &[Element<T>], traversal: Traversal) -> Vec<T> {
    let leaves = match traversal {
        Traversal::Iterative => flatten(input),
        Traversal::Recursive => flatten_recursive(input),
    };
    tracing::trace!(
        %traversal,
        top_level = input.len(),
        leaves = leaves.len(),
        "flattened sequence"
    );
    leaves
}
