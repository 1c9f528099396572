//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer prepares input for the numeric cores: it validates slices and
//! viewport bounds, and turns case records into filtered regression points.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Case records, category resolution, and point filtering.
pub mod cases;
