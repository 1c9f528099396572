//! Error types for regression and projection operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions raised by the checked entry
//! points of the crate: slice validation, viewport bound validation, and
//! builder configuration.
//!
//! ## Design notes
//!
//! * **Narrow**: Degenerate numeric data (identical x-values, too few points,
//!   unprojectable coordinates) is never an error; it is encoded in the
//!   result values instead.
//! * **Contextual**: Errors include relevant values (e.g., actual lengths).
//! * **No-std**: Derived with `thiserror` without its `std` feature, so the
//!   type implements `core::error::Error` everywhere.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Mismatched slices, non-finite values.
//! 2. **Viewport validation**: Bounds that are non-finite or inverted.
//! 3. **Configuration**: Duplicate or missing builder parameters.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for plotfit operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// `x` and `y` slices must have the same number of elements.
    #[error("Length mismatch: x has {x_len} points, y has {y_len}")]
    MismatchedInputs {
        /// Number of elements in the `x` slice.
        x_len: usize,
        /// Number of elements in the `y` slice.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Viewport longitude bounds must be finite with `west <= east`.
    #[error("Invalid viewport bounds: west {west}, east {east}")]
    InvalidBounds {
        /// Western bound in degrees.
        west: f64,
        /// Eastern bound in degrees.
        east: f64,
    },

    /// Parameter was set multiple times in a builder.
    #[error("Parameter '{parameter}' was set multiple times. Each parameter can only be configured once.")]
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// A required builder parameter was never set.
    #[error("Missing required parameter '{parameter}'")]
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },
}
