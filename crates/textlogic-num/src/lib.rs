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

//! # Textlogic Numeric Engine
//!
//! Numeric operations over canonical renderings. Each operation reduces to one
//! or more pattern matches and reuses the boolean engine for compound
//! predicates:
//!
//! - `abs`: strip one leading minus from the rendering.
//! - `eq`: join two renderings with a space and require the second half to
//!   repeat the first (a self-backreference).
//! - `geq_zero` / `gt_zero`: sign tests built from `abs`, `eq`, `and`, `not`.
//! - `if_select`: extract the payload whose tag equals the rendering of a
//!   condition from a `(true:..)(false:..)` scratch text.
//! - `sign`: nested selections over the texts `1`, `0`, `-1`.
//! - `trunc`: the integer part of a decimal rendering.
//!
//! Every operation returns `Result`; renderings that break the canonical
//! contract and captures that cannot be reconstructed are reported, never
//! coerced.
//!
//! # Examples
//!
//! ```rust
//! use textlogic_num::{StrNumeric, abs, gt_zero, if_select, sign, trunc};
//!
//! assert_eq!(abs(-5.17f64).unwrap(), 5.17);
//! assert!(gt_zero(3.14f64).unwrap());
//! assert_eq!(sign(-17.3f64).unwrap(), -1);
//! assert_eq!(trunc(-5.17f64).unwrap(), -5);
//! assert_eq!(if_select(false, 1i32, 2i32).unwrap(), 2);
//! assert_eq!((-8i32).abs_str().unwrap(), 8);
//! ```

pub mod eq;
pub mod ext;
pub mod magnitude;
pub mod select;
pub mod sign;
pub mod trunc;

pub use eq::eq;
pub use ext::{StrNumeric, StrSelect};
pub use magnitude::{abs, geq_zero, gt_zero};
pub use select::if_select;
pub use sign::sign;
pub use textlogic_core::{
    error::{Result, TextError},
    text::{Numeric, TextRepr},
};
pub use trunc::trunc;
