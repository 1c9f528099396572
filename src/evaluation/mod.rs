//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer measures how well a fitted line describes its points.
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Residual sum of squares and R^2.
pub mod diagnostics;
