//! Numerically delicate primitives every other module is built on.
//!
//! All predicates work on plain `f64` coordinates with fixed epsilon
//! tie-breaks. The tolerances below are part of the observable
//! behaviour of every relationship built on top of them.
mod segment;
pub use segment::{
    orientation, point_on_line, point_on_segment, segment_intersection_point, segments_intersect,
    ExcludeEnd,
};

mod ring;
pub use ring::{
    is_clockwise, point_in_multi_polygon, point_in_polygon, point_in_ring, ring_signed_sum,
    winding_order,
};

/// Default collinearity / on-segment tolerance.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Threshold under which [`orientation`] reports `Collinear`.
pub const ORIENTATION_EPSILON: f64 = 1e-10;
