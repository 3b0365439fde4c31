// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MEP-Lite Geometry Primitives
//!
//! Small, allocation-free helpers used by riser classification: verticality
//! tests on segments, elevation ordering and unit conversion. Points are
//! nalgebra `Point3<f64>` in host units (feet for Revit models).

pub mod primitives;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use primitives::{
    feet_to_meters, high_low, is_vertical, point_at_elevation, DEFAULT_VERTICAL_TOLERANCE_DEG,
    FEET_TO_METER,
};
