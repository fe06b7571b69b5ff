//! Table-driven flatten scenarios
//!
//! Every case runs through each traversal so that the iterative, recursive and by-value
//! implementations are held to the same expectations.

use nestflat::{flatten, flatten_owned, flatten_recursive, flatten_with, nest, Element, Traversal};
use rstest::rstest;

#[rstest]
#[case::empty(nest![], vec![])]
#[case::already_flat(nest![1, 2, 3], vec![1, 2, 3])]
#[case::one_level(nest![[1, 2], [3]], vec![1, 2, 3])]
#[case::demo_sample(nest![[[1, 2], [3]], [4, [5, [6]]]], vec![1, 2, 3, 4, 5, 6])]
#[case::empty_sequences(nest![1, [], [2, []], []], vec![1, 2])]
#[case::only_empty_sequences(nest![[], [[]], [[[]]]], vec![])]
#[case::leaves_around_nesting(nest![0, [1, [2, [3, [4]]]], 5], vec![0, 1, 2, 3, 4, 5])]
#[case::duplicates_kept(nest![7, [7, [7]], 7], vec![7, 7, 7, 7])]
fn flattens_scenario(#[case] input: Vec<Element<i32>>, #[case] expected: Vec<i32>) {
    assert_eq!(flatten(&input), expected);
    assert_eq!(flatten_recursive(&input), expected);
    assert_eq!(flatten_with(&input, Traversal::Iterative), expected);
    assert_eq!(flatten_with(&input, Traversal::Recursive), expected);
    assert_eq!(flatten_owned(input), expected);
}

#[rstest]
#[case(Traversal::Iterative)]
#[case(Traversal::Recursive)]
fn passes_opaque_leaves_through(#[case] traversal: Traversal) {
    #[derive(Debug, Clone, PartialEq)]
    enum Leaf {
        Number(f64),
        Text(&'static str),
        Flag(bool),
        Empty,
    }

    let input = vec![
        Element::Leaf(Leaf::Empty),
        Element::nested(vec![
            Element::Leaf(Leaf::Number(1.5)),
            Element::nested(vec![Element::Leaf(Leaf::Text("two"))]),
        ]),
        Element::Leaf(Leaf::Flag(false)),
    ];

    assert_eq!(
        flatten_with(&input, traversal),
        vec![
            Leaf::Empty,
            Leaf::Number(1.5),
            Leaf::Text("two"),
            Leaf::Flag(false),
        ]
    );
}

#[test]
fn flattening_twice_equals_flattening_once() {
    let input: Vec<Element<i32>> = nest![[[1, 2], [3]], [4, [5, [6]]]];
    let once = flatten(&input);
    let lifted: Vec<Element<i32>> = once.iter().copied().map(Element::Leaf).collect();
    assert_eq!(flatten(&lifted), once);
}
