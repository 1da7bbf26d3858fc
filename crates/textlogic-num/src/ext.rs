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

use crate::{eq, magnitude, select, sign, trunc};
use textlogic_core::{
    error::Result,
    text::{Numeric, TextRepr},
};

/// Method-call form of the numeric engine for every `Numeric` type.
///
/// # Examples
///
/// ```rust
/// # use textlogic_num::StrNumeric;
/// assert_eq!((-5.17f64).abs_str().unwrap(), 5.17);
/// assert!(3i32.eq_str(3i64).unwrap());
/// assert!((-1i32).geq_zero_str().map(|b| !b).unwrap());
/// assert_eq!((-17.3f64).sign_str().unwrap(), -1);
/// assert_eq!(9.99f32.trunc_str().unwrap(), 9);
/// ```
pub trait StrNumeric: Numeric {
    /// See [`magnitude::abs`].
    fn abs_str(self) -> Result<Self>;

    /// See [`eq::eq`].
    fn eq_str<B>(self, other: B) -> Result<bool>
    where
        B: TextRepr;

    /// See [`magnitude::geq_zero`].
    fn geq_zero_str(self) -> Result<bool>;

    /// See [`magnitude::gt_zero`].
    fn gt_zero_str(self) -> Result<bool>;

    /// See [`sign::sign`].
    fn sign_str(self) -> Result<i8>;

    /// See [`trunc::trunc`].
    fn trunc_str(self) -> Result<i64>;
}

impl<T> StrNumeric for T
where
    T: Numeric,
{
    #[inline(always)]
    fn abs_str(self) -> Result<Self> {
        magnitude::abs(self)
    }

    #[inline(always)]
    fn eq_str<B>(self, other: B) -> Result<bool>
    where
        B: TextRepr,
    {
        eq::eq(self, other)
    }

    #[inline(always)]
    fn geq_zero_str(self) -> Result<bool> {
        magnitude::geq_zero(self)
    }

    #[inline(always)]
    fn gt_zero_str(self) -> Result<bool> {
        magnitude::gt_zero(self)
    }

    #[inline(always)]
    fn sign_str(self) -> Result<i8> {
        sign::sign(self)
    }

    #[inline(always)]
    fn trunc_str(self) -> Result<i64> {
        trunc::trunc(self)
    }
}

/// Method-call form of [`select::if_select`] on a condition.
///
/// # Examples
///
/// ```rust
/// # use textlogic_num::StrSelect;
/// assert_eq!(true.if_str(1u8, 2u8).unwrap(), 1);
/// assert_eq!(false.if_str(1u8, 2u8).unwrap(), 2);
/// ```
pub trait StrSelect {
    /// See [`select::if_select`].
    fn if_str<T>(self, then: T, otherwise: T) -> Result<T>
    where
        T: TextRepr;
}

impl StrSelect for bool {
    #[inline(always)]
    fn if_str<T>(self, then: T, otherwise: T) -> Result<T>
    where
        T: TextRepr,
    {
        select::if_select(self, then, otherwise)
    }
}
