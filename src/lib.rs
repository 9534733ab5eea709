//! Planar predicates and clipping over simple-feature geometries.
//!
//! 1. [Kernel](#kernel)
//! 1. [Relations](#relations)
//! 1. [Clipping and simplification](#clipping-and-simplification)
//!
//! All coordinates are treated as points of the Euclidean plane; no
//! geodesic correction is applied, even to longitude / latitude input.
//!
//! # Kernel
//!
//! The [`kernel`] module holds the low-level primitives the rest of
//! the crate is written in: [`orientation`](kernel::orientation) of
//! three points, segment intersection, and point-in-ring tests. Ring
//! orientation follows the interchange convention: a ring is
//! clockwise when `Σ (x₁ - x₀)(y₁ + y₀)` over its edges is positive.
//!
//! # Relations
//!
//! The named binary predicates (`equal`, `intersects`, `within`,
//! `crosses` and friends) are available as free functions using the
//! default [`Config`], as methods on [`Relate`], or dispatched by name
//! through [`relate`].
//!
//! ```rust
//! use geo::{point, polygon};
//! use geo_predicates::{relate, Geometry, Relation};
//!
//! let square: Geometry = polygon![
//!     (x: 0., y: 0.),
//!     (x: 10., y: 0.),
//!     (x: 10., y: 10.),
//!     (x: 0., y: 10.),
//! ]
//! .into();
//! let pt: Geometry = point!(x: 5., y: 5.).into();
//!
//! let relation: Relation = "within".parse().unwrap();
//! assert!(relate(relation, &pt, Some(&square)).unwrap());
//! assert!(geo_predicates::contains(&square, &pt).unwrap());
//! ```
//!
//! # Clipping and simplification
//!
//! [`bbox_clip`] clips lines with Cohen–Sutherland and polygon rings
//! with Sutherland–Hodgman. [`simplify`] runs Ramer–Douglas–Peucker
//! over lines and rings, never letting a ring collapse. [`kinks`]
//! reports self-intersections, [`rewind`] fixes ring orientation and
//! [`is_valid`] checks structural validity.
mod error;
pub use error::{KernelError, Result};

mod config;
pub use config::Config;

mod geometry;
pub use geometry::{Geometry, GeometryKind};

mod bbox;
pub use bbox::BoundingBox;

pub mod kernel;

mod validity;
pub use validity::{is_concave, is_valid};

mod rewind;
pub use rewind::rewind;

mod kinks;
pub use kinks::kinks;

pub mod relate;
pub use relate::{
    concave, contains, crosses, disjoint, equal, intersects, overlaps, parallel, relate, touches,
    valid, within, Relate, Relation,
};

pub mod clip;
pub use clip::bbox_clip;

pub mod simplify;
pub use simplify::{simplify, simplify_with_config};

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;

pub(crate) mod utils;
