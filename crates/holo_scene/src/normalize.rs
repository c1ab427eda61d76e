//! Scale normalization - fit a drawable to a target bounding extent

use crate::error::{Result, SceneError};
use crate::mesh::MergedDrawable;
use log::debug;

/// Compute the uniform scale factor that brings `drawable`'s largest
/// bounding-box extent to `target_max_extent`.
///
/// The factor is meant to be applied identically on all three axes, so the
/// asset's aspect is preserved while heterogeneous source assets end up with
/// a comparable footprint regardless of their authored units.
///
/// Fails with [`SceneError::DegenerateGeometry`] when the bounding box is
/// empty or has zero (or non-finite) extent; applying a zero or infinite
/// scale would destroy the object.
pub fn normalize(drawable: &MergedDrawable, target_max_extent: f32) -> Result<f32> {
    let bounds = drawable.bounding_box();
    if bounds.is_empty() {
        return Err(SceneError::DegenerateGeometry);
    }

    let current_max = bounds.max_extent();
    if !current_max.is_finite() || current_max <= 0.0 {
        return Err(SceneError::DegenerateGeometry);
    }

    let factor = target_max_extent / current_max;
    debug!(
        "normalized drawable: extent {} -> {} (factor {})",
        current_max, target_max_extent, factor
    );
    Ok(factor)
}
