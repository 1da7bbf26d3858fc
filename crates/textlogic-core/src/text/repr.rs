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
    error::{Expectation, ReconstructionError, Result},
    pattern::{self, BOOLEAN_TOKEN},
    text::numeric::{render_float, render_integer, require_canonical},
};
use tracing::debug;

/// A type that can be rendered to, and reconstructed from, canonical text.
///
/// # Examples
///
/// ```rust
/// # use textlogic_core::text::TextRepr;
/// assert_eq!((-5.17f64).render().unwrap(), "-5.17");
/// assert_eq!(i32::reconstruct("-42").unwrap(), -42);
/// assert_eq!(true.render().unwrap(), "true");
/// ```
pub trait TextRepr: Sized {
    /// Renders the value to its canonical text.
    fn render(&self) -> Result<String>;

    /// Reconstructs a value from canonical text.
    fn reconstruct(text: &str) -> Result<Self>;
}

impl TextRepr for bool {
    #[inline]
    fn render(&self) -> Result<String> {
        Ok(format!("{self}"))
    }

    fn reconstruct(text: &str) -> Result<Self> {
        let text =
            pattern::require(&BOOLEAN_TOKEN, text.to_owned(), Expectation::BooleanToken)?;
        text.parse::<bool>().map_err(|_| {
            debug!(text = %text, "boolean reconstruction failed");
            ReconstructionError::new(text, "bool").into()
        })
    }
}

impl TextRepr for String {
    #[inline]
    fn render(&self) -> Result<String> {
        Ok(self.clone())
    }

    #[inline]
    fn reconstruct(text: &str) -> Result<Self> {
        Ok(text.to_owned())
    }
}

macro_rules! impl_text_repr_for {
    ($render:ident, $t:ty) => {
        impl TextRepr for $t {
            #[inline]
            fn render(&self) -> Result<String> {
                $render(*self)
            }

            fn reconstruct(text: &str) -> Result<Self> {
                let text = require_canonical(text.to_owned())?;
                text.parse::<$t>().map_err(|_| {
                    debug!(text = %text, type_name = stringify!($t), "reconstruction failed");
                    ReconstructionError::new(text, stringify!($t)).into()
                })
            }
        }
    };
}

macro_rules! impl_integer_repr_for {
    ($t:ty) => {
        impl_text_repr_for!(render_integer, $t);
    };
}

macro_rules! impl_float_repr_for {
    ($t:ty) => {
        impl_text_repr_for!(render_float, $t);
    };
}

impl_integer_repr_for!(i8);
impl_integer_repr_for!(u8);
impl_integer_repr_for!(i16);
impl_integer_repr_for!(u16);
impl_integer_repr_for!(i32);
impl_integer_repr_for!(u32);
impl_integer_repr_for!(i64);
impl_integer_repr_for!(u64);
impl_integer_repr_for!(i128);
impl_integer_repr_for!(u128);
impl_integer_repr_for!(isize);
impl_integer_repr_for!(usize);

impl_float_repr_for!(f32);
impl_float_repr_for!(f64);
