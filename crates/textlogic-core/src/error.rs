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

//! Error taxonomy for rendering, matching and reconstruction.
//!
//! Operations never recover from a malformed rendering or substitute a default.
//! A rendering that violates the canonical contract surfaces as a
//! `FormatError`, a captured substring that cannot be turned back into the
//! target type surfaces as a `ReconstructionError`, and a runtime-built pattern
//! that fails to compile or to execute surfaces as a `PatternError`. All three
//! are unified under `TextError`.

use std::fmt::Display;

/// The contract a rendering was expected to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expectation {
    /// An optional leading minus, digits, and an optional fractional part.
    CanonicalNumber,
    /// One of the two boolean tokens, `true` or `false`.
    BooleanToken,
    /// A non-empty token without whitespace, as required for equality tests.
    SpaceFreeToken,
    /// A selection payload without parentheses.
    SelectPayload,
}

impl Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CanonicalNumber => write!(f, "a canonical decimal number"),
            Self::BooleanToken => write!(f, "a boolean token"),
            Self::SpaceFreeToken => write!(f, "a non-empty token without whitespace"),
            Self::SelectPayload => write!(f, "a payload without parentheses"),
        }
    }
}

/// A rendering that does not satisfy the expected canonical pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// The offending rendering.
    pub text: String,
    /// The contract the rendering violated.
    pub expected: Expectation,
}

impl FormatError {
    #[inline]
    pub fn new(text: impl Into<String>, expected: Expectation) -> Self {
        Self {
            text: text.into(),
            expected,
        }
    }
}

impl Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rendering '{}' is not {}", self.text, self.expected)
    }
}

impl std::error::Error for FormatError {}

/// Details about a failed conversion from captured text back into a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructionError {
    /// The captured text that failed to convert.
    pub text: String,
    /// The name of the type we tried to reconstruct (e.g., "i32").
    pub type_name: &'static str,
}

impl ReconstructionError {
    #[inline]
    pub fn new(text: impl Into<String>, type_name: &'static str) -> Self {
        Self {
            text: text.into(),
            type_name,
        }
    }
}

impl Display for ReconstructionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not reconstruct '{}' as type {}",
            self.text, self.type_name
        )
    }
}

impl std::error::Error for ReconstructionError {}

/// A pattern that could not be compiled or executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    /// The source of the pattern.
    pub pattern: String,
    /// The message reported by the pattern engine.
    pub message: String,
}

impl PatternError {
    #[inline]
    pub fn new(pattern: impl Into<String>, cause: impl Display) -> Self {
        Self {
            pattern: pattern.into(),
            message: cause.to_string(),
        }
    }
}

impl Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pattern '{}' failed: {}", self.pattern, self.message)
    }
}

impl std::error::Error for PatternError {}

/// The error type shared by every textlogic operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A rendering violated the canonical contract.
    Format(FormatError),
    /// A captured substring could not be converted back into the target type.
    Reconstruction(ReconstructionError),
    /// A pattern could not be compiled or executed.
    Pattern(PatternError),
}

impl Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(e) => write!(f, "Format error: {}", e),
            Self::Reconstruction(e) => write!(f, "Reconstruction error: {}", e),
            Self::Pattern(e) => write!(f, "Pattern error: {}", e),
        }
    }
}

impl std::error::Error for TextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(e) => Some(e),
            Self::Reconstruction(e) => Some(e),
            Self::Pattern(e) => Some(e),
        }
    }
}

impl From<FormatError> for TextError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

impl From<ReconstructionError> for TextError {
    fn from(e: ReconstructionError) -> Self {
        Self::Reconstruction(e)
    }
}

impl From<PatternError> for TextError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TextError>;
