// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Segment and elevation primitives.

use nalgebra::Point3;

/// Default angular deviation from the Z axis (degrees) below which a
/// segment still counts as vertical.
pub const DEFAULT_VERTICAL_TOLERANCE_DEG: f64 = 1.0;

/// Meters per foot.
pub const FEET_TO_METER: f64 = 0.3048;

/// Checks whether the segment `start → end` is vertical within an angular
/// tolerance.
///
/// The angle is measured between the segment and the Z axis:
/// `atan2(horizontal_displacement, vertical_displacement)`. A segment with no
/// vertical displacement (horizontal or zero-length) is never vertical.
pub fn is_vertical(start: Point3<f64>, end: Point3<f64>, angle_tolerance_degrees: f64) -> bool {
    let delta = end - start;
    let dz = delta.z.abs();
    if dz == 0.0 {
        return false;
    }
    let dxy = (delta.x * delta.x + delta.y * delta.y).sqrt();
    dxy.atan2(dz).to_degrees() < angle_tolerance_degrees
}

/// Returns `(higher, lower)` of two elevations.
#[inline]
pub fn high_low(a: f64, b: f64) -> (f64, f64) {
    (a.max(b), a.min(b))
}

/// Converts a length in feet to meters.
#[inline]
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * FEET_TO_METER
}

/// Returns the point with `point`'s plan position at elevation `z`.
///
/// Only meaningful for vertical segments, where every point shares the same
/// plan position.
#[inline]
pub fn point_at_elevation(point: Point3<f64>, z: f64) -> Point3<f64> {
    Point3::new(point.x, point.y, z)
}
