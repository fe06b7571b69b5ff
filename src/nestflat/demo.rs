//! Demonstration input used by the CLI when no path is given

use super::element::Element;
use crate::nest;

/// `[[[1, 2], [3]], [4, [5, [6]]]]`, which flattens to `[1, 2, 3, 4, 5, 6]`.
pub fn sample() -> Vec<Element<i64>> {
    nest![[[1, 2], [3]], [4, [5, [6]]]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nestflat::element::depth;
    use crate::nestflat::flatten::flatten;

    #[test]
    fn test_sample_flattens_to_one_through_six() {
        assert_eq!(flatten(&sample()), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(depth(&sample()), 4);
    }
}
