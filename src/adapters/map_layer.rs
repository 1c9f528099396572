//! Map point layer.
//!
//! ## Purpose
//!
//! This module provides the coordinate half of a map point layer: for every
//! case it decides where the case's dot sits in the map container and
//! whether it is shown at all.
//!
//! ## Design notes
//!
//! * **Render context**: Viewport bounds and layer settings are captured once
//!   per draw pass in a [`RenderContext`], then every case is placed against
//!   that snapshot.
//! * **Full revalidation**: Panning or zooming changes the bounds, so every
//!   placement is recomputed, not just those of changed cases.
//! * **Partial updates**: A data change re-places only the named cases,
//!   grows the placement list for newly appended ones, and drops placements
//!   of removed ones.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * One placement per case index, in case order.
//! * A placement is visible iff its projection is valid and points are shown.
//! * A hidden placement is never given a fallback position.
//!
//! ## Non-goals
//!
//! * This module does not create, color, or animate elements.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::adapters::events::ChangeEvent;
use crate::algorithms::projection::{project_within, MapViewport};
use crate::engine::cases::CaseRecord;
use crate::engine::validator::Validator;
use crate::primitives::errors::PlotError;
use crate::primitives::points::{AttributeId, ProjectedPoint};

// ============================================================================
// Placement
// ============================================================================

/// Where (and whether) one case is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointPlacement<T> {
    /// Index of the case in the collection.
    pub index: usize,

    /// Projected container position.
    pub projected: ProjectedPoint<T>,

    /// Whether the element should be shown.
    pub visible: bool,
}

impl<T: Float> PointPlacement<T> {
    /// A placement for a case that has not been positioned yet.
    pub fn hidden(index: usize) -> Self {
        Self {
            index,
            projected: ProjectedPoint::invalid(),
            visible: false,
        }
    }
}

// ============================================================================
// Render Context
// ============================================================================

/// Case-invariant state captured at the start of a draw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext<T> {
    /// Western longitude bound of the viewport.
    pub west_bound: T,

    /// Eastern longitude bound of the viewport.
    pub east_bound: T,

    /// Latitude attribute.
    pub lat_attribute: AttributeId,

    /// Longitude attribute.
    pub lon_attribute: AttributeId,

    /// Whether points are globally shown.
    pub points_visible: bool,
}

impl<T: Float> RenderContext<T> {
    /// Place one case.
    pub fn place<C, V>(&self, case: &C, index: usize, viewport: &V) -> PointPlacement<T>
    where
        C: CaseRecord<T> + ?Sized,
        V: MapViewport<T> + ?Sized,
    {
        let lat = case.num_value(self.lat_attribute);
        let lon = case.num_value(self.lon_attribute);
        let projected = project_within(lat, lon, self.west_bound, self.east_bound, viewport);
        trace!(index, is_valid = projected.is_valid, "placed map point");
        PointPlacement {
            index,
            projected,
            visible: projected.is_valid && self.points_visible,
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a [`MapPointLayer`].
#[derive(Debug, Clone, Default)]
pub struct MapLayerBuilder {
    /// Latitude attribute.
    pub lat_attribute: Option<AttributeId>,

    /// Longitude attribute.
    pub lon_attribute: Option<AttributeId>,

    /// Whether points start out shown (default: true).
    pub points_visible: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl MapLayerBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the latitude attribute.
    pub fn lat_attribute(mut self, attribute: AttributeId) -> Self {
        if self.lat_attribute.is_some() {
            self.duplicate_param = Some("lat_attribute");
        }
        self.lat_attribute = Some(attribute);
        self
    }

    /// Set the longitude attribute.
    pub fn lon_attribute(mut self, attribute: AttributeId) -> Self {
        if self.lon_attribute.is_some() {
            self.duplicate_param = Some("lon_attribute");
        }
        self.lon_attribute = Some(attribute);
        self
    }

    /// Show or hide all points.
    pub fn points_visible(mut self, visible: bool) -> Self {
        if self.points_visible.is_some() {
            self.duplicate_param = Some("points_visible");
        }
        self.points_visible = Some(visible);
        self
    }

    /// Validate the configuration and build the layer.
    ///
    /// Attributes may be left unset; the layer then draws nothing until both
    /// are assigned.
    pub fn build<T: Float>(self) -> Result<MapPointLayer<T>, PlotError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(MapPointLayer {
            lat_attribute: self.lat_attribute,
            lon_attribute: self.lon_attribute,
            points_visible: self.points_visible.unwrap_or(true),
            placements: Vec::new(),
            must_move_elements: false,
        })
    }
}

// ============================================================================
// Map Point Layer
// ============================================================================

/// Placements for all cases of a map point layer.
#[derive(Debug, Clone)]
pub struct MapPointLayer<T> {
    lat_attribute: Option<AttributeId>,
    lon_attribute: Option<AttributeId>,
    points_visible: bool,
    placements: Vec<PointPlacement<T>>,
    must_move_elements: bool,
}

impl<T: Float> MapPointLayer<T> {
    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whether both coordinate attributes are assigned.
    pub fn ready_to_draw(&self) -> bool {
        self.lat_attribute.is_some() && self.lon_attribute.is_some()
    }

    /// Current placements, one per case index.
    pub fn placements(&self) -> &[PointPlacement<T>] {
        &self.placements
    }

    /// Number of placements currently shown.
    pub fn visible_count(&self) -> usize {
        self.placements.iter().filter(|p| p.visible).count()
    }

    /// Whether a case reorder is waiting for the next full draw.
    pub fn must_move_elements(&self) -> bool {
        self.must_move_elements
    }

    /// Whether points are globally shown.
    pub fn points_visible(&self) -> bool {
        self.points_visible
    }

    /// Assign the coordinate attributes.
    pub fn set_attributes(&mut self, lat: Option<AttributeId>, lon: Option<AttributeId>) {
        self.lat_attribute = lat;
        self.lon_attribute = lon;
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    /// Capture the case-invariant state for a draw pass.
    ///
    /// Returns `Ok(None)` when the layer is not ready to draw.
    pub fn render_context<V>(&self, viewport: &V) -> Result<Option<RenderContext<T>>, PlotError>
    where
        V: MapViewport<T> + ?Sized,
    {
        let (Some(lat_attribute), Some(lon_attribute)) = (self.lat_attribute, self.lon_attribute)
        else {
            return Ok(None);
        };

        let west_bound = viewport.west_bound();
        let east_bound = viewport.east_bound();
        Validator::validate_bounds(west_bound, east_bound)?;

        Ok(Some(RenderContext {
            west_bound,
            east_bound,
            lat_attribute,
            lon_attribute,
            points_visible: self.points_visible,
        }))
    }

    /// Place every case. Returns `false` when the layer is not ready to draw.
    pub fn draw<C, V>(&mut self, cases: &[C], viewport: &V) -> Result<bool, PlotError>
    where
        C: CaseRecord<T>,
        V: MapViewport<T> + ?Sized,
    {
        let Some(ctx) = self.render_context(viewport)? else {
            return Ok(false);
        };

        self.placements.clear();
        self.placements.extend(
            cases
                .iter()
                .enumerate()
                .map(|(index, case)| ctx.place(case, index, viewport)),
        );
        self.must_move_elements = false;

        debug!(
            cases = cases.len(),
            visible = self.visible_count(),
            "revalidated all map points"
        );
        Ok(true)
    }

    /// Re-place the cases at `indices`, appending placements for new cases.
    ///
    /// Indices past the end of `cases` are ignored, and placements for cases
    /// that no longer exist are dropped.
    pub fn update_cases<C, V>(
        &mut self,
        cases: &[C],
        indices: &[usize],
        viewport: &V,
    ) -> Result<(), PlotError>
    where
        C: CaseRecord<T>,
        V: MapViewport<T> + ?Sized,
    {
        let Some(ctx) = self.render_context(viewport)? else {
            return Ok(());
        };

        self.placements.truncate(cases.len());
        for &index in indices {
            let Some(case) = cases.get(index) else {
                continue;
            };
            while self.placements.len() <= index {
                let next = self.placements.len();
                self.placements.push(PointPlacement::hidden(next));
            }
            self.placements[index] = ctx.place(case, index, viewport);
        }
        Ok(())
    }

    /// React to an upstream change.
    pub fn handle<C, V>(
        &mut self,
        event: &ChangeEvent,
        cases: &[C],
        viewport: &V,
    ) -> Result<(), PlotError>
    where
        C: CaseRecord<T>,
        V: MapViewport<T> + ?Sized,
    {
        match event {
            ChangeEvent::ViewportChanged | ChangeEvent::CasesReset => {
                self.draw(cases, viewport)?;
            }
            ChangeEvent::VisibilityChanged(visible) => {
                self.points_visible = *visible;
                self.draw(cases, viewport)?;
            }
            ChangeEvent::DataChanged(indices) => {
                self.update_cases(cases, indices, viewport)?;
            }
            ChangeEvent::CaseOrderChanged => {
                if self.ready_to_draw() {
                    self.must_move_elements = true;
                }
            }
            ChangeEvent::SelectionChanged | ChangeEvent::LegendChanged => {}
        }
        Ok(())
    }
}
