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

//! # Textlogic Boolean Engine
//!
//! Boolean logic derived from a single primitive: testing whether a rendering
//! contains the false token.
//!
//! - `not` renders its operand and tests it against the false token.
//! - `and` concatenates the renderings of all operands and negates the test
//!   for the false token anywhere in the concatenation (a NAND).
//! - `or` tests the same concatenation for the true token.
//!
//! Because the tests are substring containment over a concatenation, the
//! results do not depend on operand order, and a single operand reduces to
//! itself. Neither token can be formed across the boundary of two adjacent
//! renderings.
//!
//! The `StrLogic` extension trait exposes the same operations in method form.
//!
//! # Examples
//!
//! ```rust
//! use textlogic_bool::{StrLogic, and, not, or};
//!
//! assert!(not(false));
//! assert!(and(true, &[true, true]));
//! assert!(!and(true, &[false]));
//! assert!(or(false, &[false, true]));
//! assert!(true.and_str(&[true]));
//! ```

pub mod ext;
pub mod ops;

pub use ext::StrLogic;
pub use ops::{and, nand, not, or};
