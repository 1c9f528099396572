//! Case records, category resolution, and regression point filtering.
//!
//! ## Purpose
//!
//! This module turns the host's case records into the point set a
//! regression line is fitted to. It owns the two filters that decide which
//! points feed the formulas:
//!
//! * **Selection**: when measures are restricted to the selection, only
//!   selected cases contribute.
//! * **Category**: when the line belongs to one legend category, only points
//!   whose label resolves to that category's index contribute, along with
//!   points that carry no label at all.
//!
//! ## Design notes
//!
//! * **Borrowed labels**: Points borrow their legend label from the case, so
//!   extraction allocates only the output vector.
//! * **Missing values**: Cases whose x or y is not finite are skipped.
//! * **Deterministic**: The same label always resolves to the same inclusion
//!   decision for a given category index.
//!
//! ## Non-goals
//!
//! * This module does not manage the case store or the resolver's lifecycle.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::points::{AttributeId, Point};

// ============================================================================
// External Contracts
// ============================================================================

/// A case (row) from the host's data set.
pub trait CaseRecord<T> {
    /// Numeric value of `attribute`; NaN when missing or not numeric.
    fn num_value(&self, attribute: AttributeId) -> T;

    /// Categorical label of `attribute`, if any.
    fn label(&self, attribute: AttributeId) -> Option<&str>;

    /// Whether the case is currently selected.
    fn is_selected(&self) -> bool {
        false
    }
}

/// Maps a legend label to the stable index of its category cell.
pub trait CategoryResolver {
    /// Index of the cell named `label`, or `None` for an unknown label.
    fn cell_number(&self, label: &str) -> Option<usize>;
}

impl<F> CategoryResolver for F
where
    F: Fn(&str) -> Option<usize>,
{
    fn cell_number(&self, label: &str) -> Option<usize> {
        self(label)
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Which attributes supply a regression point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateAttributes {
    /// Horizontal axis attribute.
    pub x: AttributeId,

    /// Vertical axis attribute.
    pub y: AttributeId,

    /// Legend attribute, if the plot has one.
    pub legend: Option<AttributeId>,
}

/// Read the plotted coordinates of `cases`.
///
/// Cases with a non-finite x or y are skipped. With `selected_only`, cases
/// that are not selected are skipped too.
pub fn collect_points<'a, T, C>(
    cases: &'a [C],
    attributes: &CoordinateAttributes,
    selected_only: bool,
) -> Vec<Point<'a, T>>
where
    T: Float,
    C: CaseRecord<T>,
{
    cases
        .iter()
        .filter(|case| !selected_only || case.is_selected())
        .filter_map(|case| {
            let x = case.num_value(attributes.x);
            let y = case.num_value(attributes.y);
            if !x.is_finite() || !y.is_finite() {
                return None;
            }
            let legend = attributes.legend.and_then(|attr| case.label(attr));
            Some(Point { x, y, legend })
        })
        .collect()
}

// ============================================================================
// Category Filter
// ============================================================================

/// Whether `point` belongs to the category at `category_index`.
///
/// Unlabelled points always belong. With no category index every point
/// belongs.
#[inline]
pub fn in_category<T, R>(point: &Point<'_, T>, category_index: Option<usize>, resolver: &R) -> bool
where
    R: CategoryResolver + ?Sized,
{
    match (category_index, point.legend) {
        (None, _) | (_, None) => true,
        (Some(index), Some(label)) => resolver.cell_number(label) == Some(index),
    }
}

/// Keep only the points that belong to the category at `category_index`.
pub fn filter_by_category<'a, T, R>(
    mut points: Vec<Point<'a, T>>,
    category_index: Option<usize>,
    resolver: &R,
) -> Vec<Point<'a, T>>
where
    R: CategoryResolver + ?Sized,
{
    if category_index.is_some() {
        points.retain(|p| in_category(p, category_index, resolver));
    }
    points
}
