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
    pattern::{self, FALSE_TOKEN, SELECT_PAYLOAD, TRUE_TOKEN},
    text::TextRepr,
};
use tracing::trace;

/// Selects `then` when `cond` is true and `otherwise` when it is false.
///
/// Both payloads are rendered into the scratch text
/// `(true:<then>)(false:<otherwise>)`. A pattern built from the rendering of
/// `cond` picks the segment carrying that tag, and the result is reconstructed
/// from its payload.
///
/// Payloads may not contain parentheses. Without them a tag can only occur at
/// the start of a segment and a payload always ends at its own closing
/// parenthesis, so the extraction is unambiguous; payloads that merely contain
/// the tag words are accepted.
///
/// # Errors
///
/// A `FormatError` if a payload rendering contains `(` or `)`, plus any error
/// from rendering or reconstructing `T`.
///
/// # Examples
///
/// ```rust
/// # use textlogic_num::if_select;
/// assert_eq!(if_select(true, String::from("A"), String::from("B")).unwrap(), "A");
/// assert_eq!(if_select(false, String::from("A"), String::from("B")).unwrap(), "B");
/// assert_eq!(if_select(true, -1.5f64, 2.5f64).unwrap(), -1.5);
/// ```
pub fn if_select<T>(cond: bool, then: T, otherwise: T) -> Result<T>
where
    T: TextRepr,
{
    let then = pattern::require(&SELECT_PAYLOAD, then.render()?, Expectation::SelectPayload)?;
    let otherwise =
        pattern::require(&SELECT_PAYLOAD, otherwise.render()?, Expectation::SelectPayload)?;
    let scratch = format!("({TRUE_TOKEN}:{then})({FALSE_TOKEN}:{otherwise})");

    let tag = cond.render()?;
    let selector = pattern::tagged_segment(&tag)?;
    let selected = pattern::capture(&selector, &scratch, 1, Expectation::SelectPayload)?;
    trace!(scratch = %scratch, tag = %tag, selected, "if_select");

    T::reconstruct(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use textlogic_core::error::{FormatError, TextError};

    fn text(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn test_if_select_strings() {
        assert_eq!(if_select(true, text("A"), text("B")).unwrap(), "A");
        assert_eq!(if_select(false, text("A"), text("B")).unwrap(), "B");
    }

    #[test]
    fn test_if_select_numbers() {
        assert_eq!(if_select(true, 1i32, -1i32).unwrap(), 1);
        assert_eq!(if_select(false, 1i32, -1i32).unwrap(), -1);
        assert_eq!(if_select(true, 5.17f64, 0.0).unwrap(), 5.17);
        assert_eq!(if_select(false, 5.17f64, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_if_select_booleans() {
        assert!(!if_select(true, false, true).unwrap());
        assert!(if_select(false, false, true).unwrap());
    }

    #[test]
    fn test_if_select_empty_payloads() {
        assert_eq!(if_select(true, text(""), text("B")).unwrap(), "");
        assert_eq!(if_select(false, text("A"), text("")).unwrap(), "");
    }

    #[test]
    fn test_if_select_payloads_containing_tag_words() {
        assert_eq!(
            if_select(false, text("false:x"), text("true:y")).unwrap(),
            "true:y"
        );
        assert_eq!(
            if_select(true, text("false:x"), text("true:y")).unwrap(),
            "false:x"
        );
        assert_eq!(
            if_select(true, text("x y:z"), text("w")).unwrap(),
            "x y:z"
        );
    }

    #[test]
    fn test_if_select_multiline_payloads() {
        assert_eq!(if_select(true, text("a\nb"), text("c")).unwrap(), "a\nb");
        assert_eq!(if_select(false, text("c"), text("a\nb")).unwrap(), "a\nb");
        assert_eq!(if_select(false, text("a\nb"), text("c\td")).unwrap(), "c\td");
    }

    #[test]
    fn test_if_select_rejects_parentheses() {
        assert_eq!(
            if_select(true, text("a(b"), text("c")).unwrap_err(),
            TextError::Format(FormatError::new("a(b", Expectation::SelectPayload))
        );
        assert_eq!(
            if_select(true, text("a"), text("(false:c)")).unwrap_err(),
            TextError::Format(FormatError::new("(false:c)", Expectation::SelectPayload))
        );
    }

    #[test]
    fn test_if_select_propagates_render_errors() {
        assert!(matches!(
            if_select(true, f64::NAN, 1.0).unwrap_err(),
            TextError::Format(_)
        ));
    }
}
