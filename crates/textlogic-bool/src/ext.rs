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

use crate::ops;

/// Method-call form of the boolean engine.
///
/// # Examples
///
/// ```rust
/// # use textlogic_bool::StrLogic;
/// assert!(false.not_str());
/// assert!(true.and_str(&[true, true]));
/// assert!(false.or_str(&[true]));
/// ```
pub trait StrLogic: Sized {
    /// See [`ops::not`].
    fn not_str(self) -> bool;

    /// See [`ops::and`].
    fn and_str(self, rest: &[bool]) -> bool;

    /// See [`ops::or`].
    fn or_str(self, rest: &[bool]) -> bool;
}

impl StrLogic for bool {
    #[inline(always)]
    fn not_str(self) -> bool {
        ops::not(self)
    }

    #[inline(always)]
    fn and_str(self, rest: &[bool]) -> bool {
        ops::and(self, rest)
    }

    #[inline(always)]
    fn or_str(self, rest: &[bool]) -> bool {
        ops::or(self, rest)
    }
}
