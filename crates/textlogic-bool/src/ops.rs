// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use textlogic_core::pattern::{FALSE_TOKEN_PATTERN, TRUE_TOKEN_PATTERN};
use tracing::trace;

/// Renders every operand and concatenates the renderings without a separator.
#[inline]
fn concat(x: bool, rest: &[bool]) -> String {
    std::iter::once(&x)
        .chain(rest)
        .map(|operand| format!("{operand}"))
        .collect()
}

/// Logical negation. The single primitive of the engine.
///
/// Returns `true` exactly when the rendering of `x` contains the false token.
#[inline]
pub fn not(x: bool) -> bool {
    FALSE_TOKEN_PATTERN.is_match(&format!("{x}"))
}

/// Tests whether any operand renders as the false token.
///
/// This is the NAND of all operands.
pub fn nand(x: bool, rest: &[bool]) -> bool {
    let rendered = concat(x, rest);
    let result = FALSE_TOKEN_PATTERN.is_match(&rendered);
    trace!(rendered = %rendered, result, "nand");
    result
}

/// Logical conjunction of one or more operands.
///
/// Returns `true` iff no operand renders as the false token.
///
/// # Examples
///
/// ```rust
/// # use textlogic_bool::and;
/// assert!(and(true, &[]));
/// assert!(!and(false, &[]));
/// assert!(!and(true, &[true, false]));
/// ```
#[inline]
pub fn and(x: bool, rest: &[bool]) -> bool {
    not(nand(x, rest))
}

/// Logical disjunction of one or more operands.
///
/// Returns `true` iff at least one operand renders as the true token.
///
/// # Examples
///
/// ```rust
/// # use textlogic_bool::or;
/// assert!(or(true, &[]));
/// assert!(!or(false, &[false]));
/// assert!(or(false, &[false, true]));
/// ```
pub fn or(x: bool, rest: &[bool]) -> bool {
    let rendered = concat(x, rest);
    let result = TRUE_TOKEN_PATTERN.is_match(&rendered);
    trace!(rendered = %rendered, result, "or");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_has_no_separator() {
        assert_eq!(concat(true, &[false, true]), "truefalsetrue");
        assert_eq!(concat(false, &[]), "false");
    }

    #[test]
    fn test_not() {
        assert!(not(false));
        assert!(!not(true));
    }

    #[test]
    fn test_and_truth_table() {
        assert!(!and(false, &[false]));
        assert!(!and(false, &[true]));
        assert!(!and(true, &[false]));
        assert!(and(true, &[true]));
    }

    #[test]
    fn test_or_truth_table() {
        assert!(!or(false, &[false]));
        assert!(or(false, &[true]));
        assert!(or(true, &[false]));
        assert!(or(true, &[true]));
    }

    #[test]
    fn test_nand_truth_table() {
        assert!(nand(false, &[false]));
        assert!(nand(false, &[true]));
        assert!(nand(true, &[false]));
        assert!(!nand(true, &[true]));
    }

    #[test]
    fn test_single_operand_reduces_to_itself() {
        for x in [false, true] {
            assert_eq!(and(x, &[]), x);
            assert_eq!(or(x, &[]), x);
        }
    }

    #[test]
    fn test_many_operands() {
        let all_true = [true; 16];
        assert!(and(true, &all_true));
        assert!(or(true, &all_true));

        let mut one_false = all_true;
        one_false[9] = false;
        assert!(!and(true, &one_false));
        assert!(or(false, &one_false));

        let all_false = [false; 16];
        assert!(!or(false, &all_false));
        assert!(!and(false, &all_false));
    }
}
