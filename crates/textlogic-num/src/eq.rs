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

use textlogic_core::{
    error::{Expectation, Result},
    pattern::{self, SPACE_FREE},
    text::TextRepr,
};
use tracing::trace;

/// Tests two values for equality by comparing their renderings.
///
/// The renderings are joined with a single space and the result must consist
/// of one run repeated after that space. The operands may be of different
/// types, in which case the test is for identical renderings.
///
/// # Errors
///
/// A `FormatError` if either rendering is empty or contains whitespace.
///
/// # Examples
///
/// ```rust
/// # use textlogic_num::eq;
/// assert!(eq(5i32, 5i32).unwrap());
/// assert!(!eq(5i32, -5i32).unwrap());
/// assert!(eq(7u8, 7i64).unwrap());
/// assert!(eq(5.0f64, 5i32).unwrap());
/// ```
pub fn eq<A, B>(a: A, b: B) -> Result<bool>
where
    A: TextRepr,
    B: TextRepr,
{
    eq_rendered(a.render()?, b.render()?)
}

/// Equality over two renderings.
pub(crate) fn eq_rendered(left: String, right: String) -> Result<bool> {
    let left = pattern::require(&SPACE_FREE, left, Expectation::SpaceFreeToken)?;
    let right = pattern::require(&SPACE_FREE, right, Expectation::SpaceFreeToken)?;
    let joined = format!("{left} {right}");
    let result = pattern::repeats_itself(&joined)?;
    trace!(joined = %joined, result, "eq");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use textlogic_core::error::{FormatError, TextError};

    #[test]
    fn test_eq_integers() {
        assert!(eq(0i32, 0i32).unwrap());
        assert!(eq(-17i64, -17i64).unwrap());
        assert!(!eq(17i64, -17i64).unwrap());
        assert!(!eq(1i32, 11i32).unwrap());
        assert!(!eq(11i32, 1i32).unwrap());
    }

    #[test]
    fn test_eq_floats() {
        assert!(eq(3.14f64, 3.14f64).unwrap());
        assert!(!eq(3.14f64, 3.141f64).unwrap());
        assert!(eq(0.0f64, -0.0f64).unwrap());
    }

    #[test]
    fn test_eq_mixed_types() {
        assert!(eq(5i32, 5i64).unwrap());
        assert!(!eq(5i32, 5.5f64).unwrap());
        assert!(eq(true, true).unwrap());
        assert!(!eq(true, false).unwrap());
        assert!(eq(String::from("abc"), String::from("abc")).unwrap());
    }

    #[test]
    fn test_eq_symmetric() {
        for (a, b) in [(1i32, 2i32), (2, 2), (-3, 3), (0, 0)] {
            assert_eq!(eq(a, b).unwrap(), eq(b, a).unwrap());
        }
    }

    #[test]
    fn test_eq_rejects_whitespace() {
        let err = eq(String::from("a b"), String::from("a b")).unwrap_err();
        assert_eq!(
            err,
            TextError::Format(FormatError::new("a b", Expectation::SpaceFreeToken))
        );
    }

    #[test]
    fn test_eq_rejects_empty() {
        assert!(eq(String::new(), String::new()).is_err());
    }

    #[test]
    fn test_eq_propagates_render_errors() {
        assert!(matches!(
            eq(f64::NAN, f64::NAN).unwrap_err(),
            TextError::Format(_)
        ));
    }
}
