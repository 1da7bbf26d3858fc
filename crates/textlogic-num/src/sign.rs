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

use crate::{eq::eq, magnitude::gt_zero, select::if_select};
use textlogic_core::{
    error::Result,
    text::{Numeric, TextRepr},
};
use tracing::trace;

const POSITIVE: &str = "1";
const ZERO: &str = "0";
const NEGATIVE: &str = "-1";

/// The sign of `x`: `1`, `0` or `-1`.
///
/// The result is chosen as text by two nested selections and then parsed.
///
/// # Examples
///
/// ```rust
/// # use textlogic_num::sign;
/// assert_eq!(sign(5i32).unwrap(), 1);
/// assert_eq!(sign(0.0f64).unwrap(), 0);
/// assert_eq!(sign(-5i32).unwrap(), -1);
/// ```
pub fn sign<T>(x: T) -> Result<i8>
where
    T: Numeric,
{
    let positive = gt_zero(x)?;
    let zero = eq(x, T::zero()?)?;
    let non_positive = if_select(zero, String::from(ZERO), String::from(NEGATIVE))?;
    let chosen = if_select(positive, String::from(POSITIVE), non_positive)?;
    trace!(chosen = %chosen, "sign");
    i8::reconstruct(&chosen)
}
