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

//! Absolute value and the sign predicates derived from it.
//!
//! A canonical rendering is negative exactly when it starts with a minus, so
//! the magnitude is the rendering with that minus stripped, and a value is
//! non-negative exactly when stripping changes nothing.

use crate::eq::{eq, eq_rendered};
use textlogic_bool::{and, not};
use textlogic_core::{
    error::{Expectation, Result},
    pattern::{self, LEADING_MINUS},
    text::Numeric,
};
use tracing::trace;

/// Renders `x` and returns the rendering together with its magnitude text.
fn rendered_magnitude<T>(x: T) -> Result<(String, String)>
where
    T: Numeric,
{
    let rendered = x.render()?;
    let magnitude =
        pattern::capture(&LEADING_MINUS, &rendered, 1, Expectation::CanonicalNumber)?.to_owned();
    Ok((rendered, magnitude))
}

/// Absolute value: the value reconstructed from its rendering with one
/// leading minus removed. Fractional digits are preserved exactly.
///
/// # Errors
///
/// A `ReconstructionError` when the magnitude does not fit the type, as for
/// `i32::MIN`.
///
/// # Examples
///
/// ```rust
/// # use textlogic_num::abs;
/// assert_eq!(abs(-5i32).unwrap(), 5);
/// assert_eq!(abs(5.17f64).unwrap(), 5.17);
/// assert!(abs(i32::MIN).is_err());
/// ```
pub fn abs<T>(x: T) -> Result<T>
where
    T: Numeric,
{
    let (rendered, magnitude) = rendered_magnitude(x)?;
    trace!(rendered = %rendered, magnitude = %magnitude, "abs");
    T::reconstruct(&magnitude)
}

/// Tests `x >= 0`, i.e. whether `x` equals its own absolute value.
///
/// The comparison is made on the magnitude text, so it also answers for
/// values like `i32::MIN` whose magnitude cannot be reconstructed.
pub fn geq_zero<T>(x: T) -> Result<bool>
where
    T: Numeric,
{
    let (rendered, magnitude) = rendered_magnitude(x)?;
    eq_rendered(rendered, magnitude)
}

/// Tests `x > 0`, i.e. `x >= 0` and not `x == 0`.
///
/// # Examples
///
/// ```rust
/// # use textlogic_num::gt_zero;
/// assert!(!gt_zero(0.0f64).unwrap());
/// assert!(gt_zero(3.14f64).unwrap());
/// assert!(!gt_zero(-0.01f64).unwrap());
/// ```
pub fn gt_zero<T>(x: T) -> Result<bool>
where
    T: Numeric,
{
    let non_negative = geq_zero(x)?;
    let is_zero = eq(x, T::zero()?)?;
    Ok(and(non_negative, &[not(is_zero)]))
}
