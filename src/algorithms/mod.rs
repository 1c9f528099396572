//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the two numeric cores:
//! - Least-squares linear regression, free or through the origin
//! - Projection of geographic coordinates into a map viewport
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Least-squares regression.
pub mod regression;

/// Viewport projection.
pub mod projection;
