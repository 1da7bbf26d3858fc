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
    pattern::{self, DECIMAL_PARTS},
    text::{Numeric, TextRepr},
};
use tracing::trace;

/// The integer part of `x`, truncated toward zero.
///
/// The rendering is split at its decimal point and the integer part, sign
/// included, is parsed. Values without a decimal point are their own integer
/// part.
///
/// # Errors
///
/// A `ReconstructionError` when the integer part does not fit into `i64`.
///
/// # Examples
///
/// ```rust
/// # use textlogic_num::trunc;
/// assert_eq!(trunc(5.17f64).unwrap(), 5);
/// assert_eq!(trunc(-5.17f64).unwrap(), -5);
/// assert_eq!(trunc(5i32).unwrap(), 5);
/// ```
pub fn trunc<T>(x: T) -> Result<i64>
where
    T: Numeric,
{
    let rendered = x.render()?;
    let integer_part =
        pattern::capture(&DECIMAL_PARTS, &rendered, 1, Expectation::CanonicalNumber)?;
    trace!(rendered = %rendered, integer_part, "trunc");
    i64::reconstruct(integer_part)
}
