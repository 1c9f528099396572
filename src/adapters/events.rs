//! Change notifications dispatched by the host.
//!
//! The host publishes one of these whenever upstream state that a derived
//! model depends on changes. Models decide for themselves which events
//! require recomputation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// An upstream change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// Values of the cases at these indices changed, or cases were appended
    /// at these indices.
    DataChanged(Vec<usize>),

    /// The whole case collection was replaced.
    CasesReset,

    /// The set of selected cases changed.
    SelectionChanged,

    /// The legend attribute or its categories changed.
    LegendChanged,

    /// The map was panned or zoomed.
    ViewportChanged,

    /// The cases were reordered.
    CaseOrderChanged,

    /// Points were globally shown or hidden.
    VisibilityChanged(bool),
}
