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


use crate::{
    algorithm::ShamosHoey,
    error::{InternalError, InvalidPolygon},
    point::{Point, Scalar},
};
use alloc::vec::Vec;

/// A closed polygon.
///
/// The last vertex connects back to the first; it should not be repeated
/// at the end. Construction only checks that the input is well formed, not
/// that the polygon is simple.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<Num> {
    vertices: Vec<Point<Num>>,
}

impl<Num: Scalar> Polygon<Num> {
    /// Create a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Fails if there are fewer than three vertices, or if any coordinate is
    /// infinite or `NaN`.
    pub fn new(vertices: Vec<Point<Num>>) -> Result<Self, InvalidPolygon> {
        validate(&vertices)?;
        Ok(Self { vertices })
    }

    /// Get the vertices of this polygon.
    pub fn vertices(&self) -> &[Point<Num>] {
        &self.vertices
    }

    /// The number of vertices, which is also the number of edges.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false, since a polygon has at least three vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get the endpoints of edge `i`, which runs from vertex `i` to the next.
    pub fn edge(&self, i: usize) -> Option<(Point<Num>, Point<Num>)> {
        let start = *self.vertices.get(i)?;
        let end = self.vertices[(i + 1) % self.vertices.len()];
        Some((start, end))
    }

    /// Tell whether or not no two edges of this polygon cross or touch,
    /// other than consecutive edges meeting at their shared vertex.
    pub fn is_simple(&self) -> Result<bool, InternalError> {
        check_simple(&self.vertices)
    }
}

/// Run the simplicity check on vertices that already passed [`validate`].
pub(crate) fn check_simple<Num: Scalar>(vertices: &[Point<Num>]) -> Result<bool, InternalError> {
    // a zero length edge touches both of its neighbors
    let n = vertices.len();
    if let Some(edge) = (0..n).find(|&i| vertices[i] == vertices[(i + 1) % n]) {
        tracing::debug!("Edge {} has zero length, polygon is not simple", edge);
        return Ok(false);
    }

    ShamosHoey::new(vertices).run()
}

pub(crate) fn validate<Num: Scalar>(vertices: &[Point<Num>]) -> Result<(), InvalidPolygon> {
    if vertices.len() < 3 {
        return Err(InvalidPolygon::TooFewVertices {
            count: vertices.len(),
        });
    }

    match vertices.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(InvalidPolygon::NonFiniteVertex { index }),
        None => Ok(()),
    }
}
