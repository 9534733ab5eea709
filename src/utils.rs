use geo::{winding_order::WindingOrder, LineString};

use crate::kernel::winding_order;

pub fn winding_inverse(winding: WindingOrder) -> WindingOrder {
    match winding {
        WindingOrder::Clockwise => WindingOrder::CounterClockwise,
        WindingOrder::CounterClockwise => WindingOrder::Clockwise,
    }
}

/// Copy of `ring` wound in `target` order.
///
/// Rings with a zero shoelace sum have no winding and are copied as is.
pub fn wind_to(ring: &LineString<f64>, target: WindingOrder) -> LineString<f64> {
    let mut ring = ring.clone();
    if winding_order(&ring.0) == Some(winding_inverse(target)) {
        ring.0.reverse();
    }
    ring
}
