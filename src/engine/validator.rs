//! Input validation for the checked entry points.
//!
//! ## Purpose
//!
//! This module checks the shape contracts the numeric cores rely on but do
//! not enforce themselves: matching slice lengths, finite values, sane
//! viewport bounds, and builder configuration.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * Empty input is valid: too few points is a result state, not an error.
//!
//! ## Non-goals
//!
//! * This module does not filter or repair input data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PlotError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for input data and configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate paired coordinate slices for regression.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), PlotError> {
        // Check 1: Matching lengths
        if x.len() != y.len() {
            return Err(PlotError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        // Check 2: All values finite
        for (i, &val) in x.iter().enumerate() {
            Self::validate_scalar(val, "x", i)?;
        }
        for (i, &val) in y.iter().enumerate() {
            Self::validate_scalar(val, "y", i)?;
        }

        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str, index: usize) -> Result<(), PlotError> {
        if !val.is_finite() {
            return Err(PlotError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                index,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Viewport Validation
    // ========================================================================

    /// Validate viewport longitude bounds.
    ///
    /// Bounds may lie outside [-180, 180] (a panned, wrapped map) but must be
    /// finite and ordered west to east.
    pub fn validate_bounds<T: Float>(west: T, east: T) -> Result<(), PlotError> {
        if !west.is_finite() || !east.is_finite() || west > east {
            return Err(PlotError::InvalidBounds {
                west: west.to_f64().unwrap_or(f64::NAN),
                east: east.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Validate that no parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), PlotError> {
        if let Some(param) = duplicate_param {
            return Err(PlotError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    /// Validate that a required parameter was provided.
    pub fn validate_required<V>(value: Option<V>, parameter: &'static str) -> Result<V, PlotError> {
        value.ok_or(PlotError::MissingParameter { parameter })
    }
}
