//! Error types for rose construction.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. The petal formula divides
//! by `t` and takes square roots, so bad breakpoints would quietly turn into
//! NaN if we let them. Instead every check happens up front and comes back
//! as one of these variants.

use thiserror::Error;

/// The breakpoints cannot describe a petal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// c + d - a - b is zero, so the profile breakpoints divide by zero.
    #[error("breakpoints ({a}, {b}, {c}, {d}) have zero span: c + d - a - b = 0")]
    ZeroSpan { a: f64, b: f64, c: f64, d: f64 },

    /// The inner ramp runs backwards.
    #[error("inner breakpoints are descending: a = {a} > b = {b}")]
    DescendingInner { a: f64, b: f64 },

    /// The outer ramp runs backwards.
    #[error("outer breakpoints are descending: c = {c} > d = {d}")]
    DescendingOuter { c: f64, d: f64 },

    /// c + d - a - b overflows even though every breakpoint is finite.
    #[error("breakpoints ({a}, {b}, {c}, {d}) are too large: c + d - a - b overflows")]
    SpanOverflow { a: f64, b: f64, c: f64, d: f64 },

    /// A square root in the profile would be taken of a negative number.
    #[error("negative radicand {radicand} at sample {sample}")]
    NegativeRadicand { sample: usize, radicand: f64 },

    /// The profile formula overflowed to infinity or NaN.
    #[error("sample {sample} is not finite ({value})")]
    NonFiniteSample { sample: usize, value: f64 },
}

/// The input is malformed before any geometry is attempted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A breakpoint in row `index` is NaN or infinite.
    #[error("parameter row {index} holds a non-finite value")]
    NotFinite { index: usize },

    /// A parameter row does not hold exactly four numbers.
    #[error("parameter row {index} has {len} values, expected 4")]
    WrongArity { index: usize, len: usize },

    /// The sample resolution is too small to place x = j / (res - 1).
    #[error("resolution must be at least 2, got {0}")]
    Resolution(usize),
}

/// Any failure while building a rose.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoseError {
    /// A domain failure attributed to one petal of a batch.
    #[error("petal {index}: {source}")]
    Petal {
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Input(#[from] InputError),
}

impl RoseError {
    /// True for breakpoint problems, false for malformed input.
    pub fn is_domain(&self) -> bool {
        matches!(self, RoseError::Petal { .. } | RoseError::Domain(_))
    }

    /// Attach a petal index to a bare domain error or a non-finite row.
    pub(crate) fn at_petal(self, index: usize) -> Self {
        match self {
            RoseError::Domain(source) => RoseError::Petal { index, source },
            RoseError::Input(InputError::NotFinite { .. }) => {
                RoseError::Input(InputError::NotFinite { index })
            }
            other => other,
        }
    }
}
