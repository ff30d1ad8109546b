// This file is part of shamos-hoey.
//
// shamos-hoey is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public
// License as published by the Free Software Foundation,
// either version 3 of the License, or (at your option)
// any later version.
//
// shamos-hoey is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty
// of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General
// Public License along with shamos-hoey. If not, see
// <https://www.gnu.org/licenses/>.


//! Errors that can come out of a simplicity check.

use thiserror::Error;

/// The input could not be interpreted as a polygon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum InvalidPolygon {
    /// A polygon needs at least three vertices.
    #[error("a polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },
    /// A vertex had an infinite or `NaN` coordinate.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },
}

/// Describes an inconsistency in the sweep line's bookkeeping.
///
/// These should never happen; if one does, the adjacency maintenance
/// in the sweep line is wrong.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum InternalError {
    /// A right event was reached before its edge was ever inserted.
    #[error("edge {edge} ended without having been added to the sweep line")]
    UnlinkedEvent { edge: usize },
    /// A handle was used after its segment left the status structure.
    #[error("segment handle no longer refers to a live segment")]
    StaleHandle,
    /// The segment for an edge is no longer in the status structure.
    #[error("segment for edge {edge} is missing from the sweep line")]
    SegmentNotFound { edge: usize },
}

/// Any error that [`is_simple_polygon`](crate::is_simple_polygon) can return.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    #[error("invalid polygon: {0}")]
    InvalidPolygon(#[from] InvalidPolygon),
    #[error("internal error: {0}")]
    Internal(#[from] InternalError),
}
