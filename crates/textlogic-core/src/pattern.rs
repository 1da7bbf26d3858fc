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

//! # Compiled Patterns
//!
//! Every textlogic operation is a pattern test over canonical renderings. The
//! fixed patterns live here as process-wide statics that are compiled once on
//! first use and then shared read-only, so they are safe to use from any number
//! of threads without locking.
//!
//! The only pattern that depends on runtime data is the tag-delimited selection
//! pattern, built by [`tagged_segment`] from the rendering of a condition.

use crate::error::{Expectation, FormatError, PatternError, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// The canonical rendering of `true`.
pub const TRUE_TOKEN: &str = "true";

/// The canonical rendering of `false`.
pub const FALSE_TOKEN: &str = "false";

/// Matches any text containing the true token.
pub static TRUE_TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&regex::escape(TRUE_TOKEN)).expect("valid true token regex"));

/// Matches any text containing the false token.
pub static FALSE_TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&regex::escape(FALSE_TOKEN)).expect("valid false token regex"));

/// Optional minus, digits, optional `.` followed by digits. Nothing else.
pub static CANONICAL_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?$").expect("valid canonical number regex")
});

/// A zero carrying a minus sign, as floating types render negative zero.
/// Group 1 is the unsigned zero.
pub static NEGATIVE_ZERO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-(0(?:\.0+)?)$").expect("valid negative zero regex"));

/// Consumes at most one leading minus. Group 1 is the remainder.
pub static LEADING_MINUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(.*)$").expect("valid leading minus regex"));

/// Splits a decimal rendering at its point. Group 1 is the integer part
/// (including the sign), group 2 the optional fractional digits.
pub static DECIMAL_PARTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)(?:\.(.*?))?$").expect("valid decimal parts regex"));

/// Exactly one of the two boolean tokens.
pub static BOOLEAN_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:true|false)$").expect("valid boolean token regex"));

/// A non-empty run without whitespace.
pub static SPACE_FREE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+$").expect("valid space free regex"));

/// A selection payload that cannot break the `(tag:payload)` framing.
pub static SELECT_PAYLOAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^()]*$").expect("valid select payload regex"));

/// Two identical space-free runs joined by a single space.
///
/// The backreference is beyond the `regex` engine, hence `fancy_regex`.
pub static SELF_BACKREFERENCE: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(r"^(\S+) \1$").expect("valid self backreference regex")
});

/// Returns `text` unchanged when `pattern` matches it, a `FormatError` otherwise.
pub fn require(pattern: &Regex, text: String, expected: Expectation) -> Result<String> {
    match pattern.find(&text).map(|m| m.range()) {
        Some(_) => Ok(text),
        None => {
            debug!(text = %text, %expected, "rendering rejected");
            Err(FormatError::new(text, expected).into())
        }
    }
}

/// Returns the text of capture group `index` of `pattern` applied to `text`.
///
/// A missing match or a non-participating group is reported as a
/// `FormatError` carrying `expected`.
pub fn capture<'t>(
    pattern: &Regex,
    text: &'t str,
    index: usize,
    expected: Expectation,
) -> Result<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(index))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            debug!(text, pattern = pattern.as_str(), index, "capture group missing");
            FormatError::new(text, expected).into()
        })
}

/// Tests whether `joined` consists of one run repeated after a single space.
pub fn repeats_itself(joined: &str) -> Result<bool> {
    SELF_BACKREFERENCE
        .is_match(joined)
        .map_err(|e| PatternError::new(SELF_BACKREFERENCE.as_str(), e).into())
}

/// Builds the pattern `(?s)\(<tag>:(.*?)\)` selecting the payload labelled `tag`.
///
/// The tag is escaped, so any rendering may be used as a label. Payloads may
/// span lines.
pub fn tagged_segment(tag: &str) -> Result<Regex> {
    let source = format!(r"(?s)\({}:(.*?)\)", regex::escape(tag));
    Regex::new(&source).map_err(|e| PatternError::new(source, e).into())
}
