//! Error type used by the crate.

use thiserror::Error;

use crate::{GeometryKind, Relation};

/// Result alias with [`KernelError`].
pub type Result<T> = std::result::Result<T, KernelError>;

/// Errors surfaced by the kernel operations.
///
/// Degenerate outputs (an empty clip, an empty set of kinks, a line
/// simplified down to its end points) are regular results, not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// A relationship is not implemented for this pair of geometry kinds.
    #[error("unsupported geometry combination for `{relation}`: {first} and {second}")]
    UnsupportedGeometryCombination {
        /// Relationship that was requested.
        relation: Relation,
        /// Kind of the first operand.
        first: GeometryKind,
        /// Kind of the second operand.
        second: GeometryKind,
    },

    /// An operation does not accept this geometry kind.
    #[error("`{operation}` does not support {kind} geometries")]
    UnsupportedGeometry {
        /// Name of the operation.
        operation: &'static str,
        /// Kind that was passed in.
        kind: GeometryKind,
    },

    /// A bounding box was built from the wrong number of values.
    #[error("bounding box requires exactly 4 values [min_x, min_y, max_x, max_y], got {len}")]
    InvalidBoundingBox {
        /// Number of values supplied.
        len: usize,
    },

    /// A ring does not have enough positions for the operation.
    #[error("ring has {positions} positions, at least 4 (3 distinct) are required")]
    DegenerateRing {
        /// Number of positions in the ring.
        positions: usize,
    },

    /// A coordinate component is NaN or infinite.
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// Longitude.
        x: f64,
        /// Latitude.
        y: f64,
    },

    /// A geometry carries no coordinates where some are required.
    #[error("empty {kind} geometry")]
    EmptyGeometry {
        /// Kind of the empty geometry.
        kind: GeometryKind,
    },

    /// Simplification tolerance is negative or not finite.
    #[error("invalid tolerance {0}")]
    InvalidTolerance(f64),

    /// A relationship was evaluated with the wrong number of operands.
    #[error("`{relation}` takes {expected} geometries, {found} given")]
    Arity {
        /// Relationship that was requested.
        relation: Relation,
        /// Operands the relationship takes.
        expected: usize,
        /// Operands supplied.
        found: usize,
    },

    /// A relationship name could not be parsed.
    #[error("unknown relation `{0}`")]
    UnknownRelation(String),

    /// Interchange-format conversion failed.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
