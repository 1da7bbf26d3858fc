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

//! # Canonical Text Contract
//!
//! Traits describing how values cross into and out of their canonical
//! renderings. Operations never inspect a value directly; they render it,
//! match patterns over the rendering, and reconstruct a value from what the
//! patterns captured.
//!
//! ## Submodules
//!
//! - `repr`: The `TextRepr` capability (render / reconstruct) implemented for
//!   `bool`, `String`, and every primitive integer and float.
//! - `numeric`: The `Numeric` refinement for types whose rendering is a
//!   canonical decimal number, with the canonical zero of each type.
//!
//! ## Contract
//!
//! Rendering then reconstructing a value yields the same value, and two values
//! of the same type are equal exactly when their renderings are identical.
//! Floating types render negative zero as the canonical zero to keep the
//! second half true.

pub mod numeric;
pub mod repr;

pub use numeric::Numeric;
pub use repr::TextRepr;
