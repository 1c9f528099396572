//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer holds the stateful models the host's adornment and layer views
//! talk to. Each one reacts to explicit change events, calls into the pure
//! cores, and keeps only the latest derived values.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Change notifications dispatched by the host.
pub mod events;

/// Least-squares regression line model.
pub mod lsrl;

/// Map point layer.
pub mod map_layer;
