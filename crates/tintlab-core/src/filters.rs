//! The built-in filter catalog.
//!
//! Filters are a fixed, ordered table of `(id, name, transform)` entries.
//! The order is the display order used for the filter menu and for
//! thumbnail generation. Lookups by unknown id resolve to `original`.

use serde::Serialize;

use crate::color::{ColorMatrix, ColorTransform};

/// Identifier of the filter selected when nothing else is chosen.
pub const DEFAULT_FILTER_ID: &str = "original";

/// A named color-transform preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterDefinition {
    /// Stable identifier (e.g. `"aden"`).
    pub id: &'static str,
    /// Human-readable display name (e.g. `"Aden"`).
    pub name: &'static str,
    /// Color stage applied before tone adjustment.
    pub transform: ColorTransform,
}

impl FilterDefinition {
    const fn matrix(id: &'static str, name: &'static str, coefficients: [f64; 12]) -> Self {
        Self {
            id,
            name,
            transform: ColorTransform::Affine(ColorMatrix::new(coefficients)),
        }
    }

    /// Map an RGB triple through this filter's color stage.
    #[inline]
    pub fn apply(&self, r: f64, g: f64, b: f64) -> (f64, f64, f64) {
        self.transform.apply(r, g, b)
    }
}

#[rustfmt::skip]
static FILTERS: [FilterDefinition; 12] = [
    FilterDefinition { id: "original", name: "Original", transform: ColorTransform::Identity },
    FilterDefinition::matrix("aden", "Aden", [1.05, 0.0, 0.0, -10.0, 0.0, 0.95, 0.0, -6.0, 0.0, 0.0, 0.95, -6.0]),
    FilterDefinition::matrix("clarendon", "Clarendon", [1.15, 0.0, 0.0, -20.0, 0.0, 1.05, 0.0, -10.0, 0.0, 0.0, 1.05, -5.0]),
    FilterDefinition::matrix("crema", "Crema", [0.98, 0.0, 0.0, 8.0, 0.0, 0.95, 0.0, 6.0, 0.0, 0.0, 0.9, 10.0]),
    FilterDefinition::matrix("gingham", "Gingham", [0.9, 0.0, 0.0, 12.0, 0.0, 0.92, 0.0, 10.0, 0.0, 0.0, 0.92, 8.0]),
    FilterDefinition::matrix("juno", "Juno", [1.06, 0.0, 0.0, -8.0, 0.0, 1.02, 0.0, -4.0, 0.0, 0.0, 0.9, -2.0]),
    FilterDefinition::matrix("lark", "Lark", [1.06, 0.0, 0.0, -6.0, 0.0, 1.02, 0.0, -4.0, 0.0, 0.0, 0.95, -3.0]),
    FilterDefinition::matrix("ludwig", "Ludwig", [1.08, 0.0, 0.0, -12.0, 0.0, 0.98, 0.0, 2.0, 0.0, 0.0, 0.92, 8.0]),
    FilterDefinition { id: "moon", name: "Moon", transform: ColorTransform::Grayscale },
    FilterDefinition::matrix("perpetua", "Perpetua", [0.98, 0.0, 0.0, 6.0, 0.0, 1.02, 0.0, -4.0, 0.0, 0.0, 0.96, -2.0]),
    FilterDefinition::matrix("reyes", "Reyes", [0.95, 0.0, 0.0, 12.0, 0.0, 0.95, 0.0, 10.0, 0.0, 0.0, 0.9, 10.0]),
    FilterDefinition::matrix("slumber", "Slumber", [0.9, 0.0, 0.0, 18.0, 0.0, 0.95, 0.0, 12.0, 0.0, 0.0, 0.9, 14.0]),
];

/// All filters in display order.
pub fn list() -> &'static [FilterDefinition] {
    &FILTERS
}

/// Find a filter by id, returning `None` if it is not in the catalog.
pub fn find(id: &str) -> Option<&'static FilterDefinition> {
    FILTERS.iter().find(|f| f.id == id)
}

/// Look up a filter by id.
///
/// Unknown ids resolve to the `original` (identity) filter.
pub fn lookup(id: &str) -> &'static FilterDefinition {
    find(id).unwrap_or(&FILTERS[0])
}

/// The identity filter.
pub fn original() -> &'static FilterDefinition {
    &FILTERS[0]
}
