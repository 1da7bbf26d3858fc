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

use crate::{
    error::{Expectation, Result},
    pattern::{self, CANONICAL_NUMBER, NEGATIVE_ZERO},
    text::repr::TextRepr,
};
use num_traits::{Float, PrimInt};
use std::fmt::Display;

/// A type whose rendering is a canonical decimal number.
///
/// # Examples
///
/// ```rust
/// # use textlogic_core::text::Numeric;
/// assert_eq!(<i64 as Numeric>::ZERO_TEXT, "0");
/// assert_eq!(f64::zero().unwrap(), 0.0);
/// ```
pub trait Numeric: TextRepr + Copy + Send + Sync {
    /// The canonical rendering of zero for the implementing type.
    const ZERO_TEXT: &'static str;

    /// Reconstructs zero from its canonical rendering.
    #[inline]
    fn zero() -> Result<Self> {
        Self::reconstruct(Self::ZERO_TEXT)
    }
}

macro_rules! impl_zero_text_for {
    ($t:ty) => {
        impl Numeric for $t {
            const ZERO_TEXT: &'static str = "0";
        }
    };
}

impl_zero_text_for!(i8);
impl_zero_text_for!(u8);
impl_zero_text_for!(i16);
impl_zero_text_for!(u16);
impl_zero_text_for!(i32);
impl_zero_text_for!(u32);
impl_zero_text_for!(i64);
impl_zero_text_for!(u64);
impl_zero_text_for!(i128);
impl_zero_text_for!(u128);
impl_zero_text_for!(isize);
impl_zero_text_for!(usize);
impl_zero_text_for!(f32);
impl_zero_text_for!(f64);

/// Returns `text` when it is a canonical decimal number.
#[inline]
pub fn require_canonical(text: String) -> Result<String> {
    pattern::require(&CANONICAL_NUMBER, text, Expectation::CanonicalNumber)
}

/// Renders a primitive integer. Integer `Display` output is always canonical.
#[inline]
pub(crate) fn render_integer<T>(value: T) -> Result<String>
where
    T: PrimInt + Display,
{
    require_canonical(format!("{value}"))
}

/// Renders a primitive float, folding negative zero into the canonical zero.
///
/// Float `Display` never uses exponent notation, so every finite value yields
/// a canonical rendering. `NaN` and the infinities are rejected.
#[inline]
pub(crate) fn render_float<T>(value: T) -> Result<String>
where
    T: Float + Display,
{
    let raw = format!("{value}");
    require_canonical(NEGATIVE_ZERO.replace(&raw, "$1").into_owned())
}
