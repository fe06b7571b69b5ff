//! Element model for nested sequences
//!
//! An input sequence is a `[Element<T>]`. Each element is either a leaf value, which is
//! passed through to the flattened output unchanged, or another nested sequence of elements.
//! The nesting depth is unbounded.
//!
//! The helpers in this module (`depth`, `leaf_count`) walk an explicit stack rather than the
//! call stack, so they stay usable on inputs that are too deep for plain recursion.

use serde::{Deserialize, Serialize};

/// A single entry of a nested sequence.
///
/// Serializes untagged: a nested sequence is a plain array and a leaf is the bare value.
/// `Nested` is tried first when deserializing, so arrays always become nested sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element<T> {
    /// An ordered sequence of elements, expanded in place when flattening.
    Nested(Vec<Element<T>>),
    /// Any value that is not itself a sequence.
    Leaf(T),
}

impl<T> Element<T> {
    pub fn leaf(value: T) -> Self {
        Element::Leaf(value)
    }

    /// Build a nested sequence from anything that yields elements.
    pub fn nested<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Element<T>>,
    {
        Element::Nested(children.into_iter().collect())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Element::Leaf(_))
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Element::Nested(_))
    }

    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Element::Leaf(value) => Some(value),
            Element::Nested(_) => None,
        }
    }

    /// Number of leaves reachable from this element.
    pub fn leaf_count(&self) -> usize {
        leaf_count(std::slice::from_ref(self))
    }

    /// Nesting depth of this element.
    ///
    /// A leaf has depth 0, an empty nested sequence has depth 1, and a nested sequence is one
    /// level deeper than its deepest child.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((element, level)) = stack.pop() {
            match element {
                Element::Leaf(_) => deepest = deepest.max(level),
                Element::Nested(children) => {
                    deepest = deepest.max(level + 1);
                    stack.extend(children.iter().map(|child| (child, level + 1)));
                }
            }
        }
        deepest
    }
}

impl<T: Clone> Element<T> {
    /// Unrolls this element into its leaves, in depth-first left-to-right order.
    ///
    /// A leaf unrolls to a single-item vector containing itself.
    pub fn unroll(&self) -> Vec<T> {
        super::flatten::flatten(std::slice::from_ref(self))
    }
}

impl<T> FromIterator<Element<T>> for Element<T> {
    fn from_iter<I: IntoIterator<Item = Element<T>>>(iter: I) -> Self {
        Element::nested(iter)
    }
}

/// Number of leaves reachable from an input sequence.
pub fn leaf_count<T>(input: &[Element<T>]) -> usize {
    let mut count = 0;
    let mut stack: Vec<&Element<T>> = input.iter().collect();
    while let Some(element) = stack.pop() {
        match element {
            Element::Leaf(_) => count += 1,
            Element::Nested(children) => stack.extend(children.iter()),
        }
    }
    count
}

/// Nesting depth of an input sequence.
///
/// The input sequence itself counts as one level: an empty input has depth 1 and
/// `[[1]]` has depth 2.
pub fn depth<T>(input: &[Element<T>]) -> usize {
    1 + input.iter().map(Element::depth).max().unwrap_or(0)
}

/// Builds a `Vec<Element<_>>` from a bracketed literal.
///
/// Brackets become nested sequences and every other token tree becomes a leaf. Leaves made
/// of several tokens (negative numbers, method calls) need parentheses: `nest![(-1), [2]]`.
///
/// ```ignore
/// let input: Vec<Element<i32>> = nest![1, [], [2, []], []];
/// ```
#[macro_export]
macro_rules! nest {
    (@element [$($inner:tt),* $(,)?]) => {
        $crate::Element::Nested($crate::nest![$($inner),*])
    };
    (@element $leaf:expr) => {
        $crate::Element::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        ::std::vec![$($crate::nest!(@element $item)),*]
    };
}
