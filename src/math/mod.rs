//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the cores:
//! - Running sums (moments) for least-squares fitting
//! - Longitude normalization across the antimeridian
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Running sums for least squares.
pub mod moments;

/// Longitude wrapping.
pub mod longitude;
