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

//! # Textlogic Core
//!
//! Foundations shared by the boolean and numeric engines of the textlogic
//! workspace. Every operation in the workspace works on the *canonical
//! rendering* of a value rather than the value itself, so this crate owns the
//! contract that renderings must satisfy and the patterns used to inspect them.
//!
//! ## Modules
//!
//! - `text`: The `TextRepr` capability (render to canonical text, reconstruct
//!   from canonical text) and the `Numeric` refinement carrying the canonical
//!   zero of each primitive number type.
//! - `pattern`: Process-wide compiled patterns (boolean tokens, canonical
//!   decimal numbers, sign stripping, self-backreference equality, decimal
//!   splitting) plus the builder for tag-delimited selection patterns.
//! - `error`: The error taxonomy (`FormatError`, `ReconstructionError`,
//!   `PatternError`) unified under `TextError`.
//!
//! Refer to each module for detailed APIs and examples.

pub mod error;
pub mod pattern;
pub mod text;
