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


use super::{event_queue::Event, segment::Segment};
use crate::{
    compare::order_points,
    error::InternalError,
    point::{Point, Scalar},
    tree::{Handle, OrderedTree},
};

/// The sweep line.
///
/// This holds the segments that currently cross the line, ordered from
/// bottom to top, and keeps each segment's `above` and `below` links in
/// step with the tree.
#[derive(Debug)]
pub struct SweepLine<'a, Num> {
    tree: OrderedTree<Segment<Num>>,
    vertices: &'a [Point<Num>],
}

impl<'a, Num: Scalar> SweepLine<'a, Num> {
    /// Create an empty sweep line over the edges of a polygon.
    pub fn new(vertices: &'a [Point<Num>]) -> Self {
        Self {
            tree: OrderedTree::with_capacity(vertices.len()),
            vertices,
        }
    }

    /// The number of segments on the sweep line.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Get a live segment.
    pub fn segment(&self, handle: Handle) -> Option<&Segment<Num>> {
        self.tree.get(handle)
    }

    /// Iterate over the live segments from bottom to top.
    pub fn segments(&self) -> impl Iterator<Item = (Handle, &Segment<Num>)> + '_ {
        let tree = &self.tree;
        tree.iter()
            .filter_map(move |handle| tree.get(handle).map(|seg| (handle, seg)))
    }

    /// Build the segment for a polygon edge.
    fn segment_for_edge(&self, edge: usize) -> Segment<Num> {
        let n = self.vertices.len();
        let (left, right) = order_points(self.vertices[edge], self.vertices[(edge + 1) % n]);
        Segment::new(edge, left, right)
    }

    /// Add the edge of a left event to the sweep line.
    ///
    /// The new segment is linked to its neighbors, and they are linked back
    /// to it.
    pub fn add(&mut self, event: &Event<Num>) -> Handle {
        let segment = self.segment_for_edge(event.edge);
        let handle = self.tree.insert(segment);

        let above = self.tree.successor(handle);
        let below = self.tree.predecessor(handle);

        if let Some(seg) = self.tree.get_mut(handle) {
            seg.above = above;
            seg.below = below;
        }
        if let Some(above) = above.and_then(|h| self.tree.get_mut(h)) {
            above.below = Some(handle);
        }
        if let Some(below) = below.and_then(|h| self.tree.get_mut(h)) {
            below.above = Some(handle);
        }

        tracing::trace!(
            "Added edge {} to sweep line (above: {:?}, below: {:?})",
            event.edge,
            above,
            below
        );

        handle
    }

    /// Look up the live segment for a polygon edge.
    ///
    /// This searches with the segment order, so it only finds edges that
    /// are consistent with the rest of the sweep line.
    pub fn find(&self, edge: usize) -> Option<Handle> {
        if edge >= self.vertices.len() {
            return None;
        }
        self.tree.find(&self.segment_for_edge(edge))
    }

    /// Remove a segment from the sweep line.
    ///
    /// Its neighbors are linked to each other before it goes away.
    pub fn remove(&mut self, handle: Handle) -> Result<(), InternalError> {
        let (edge, above, below) = match self.tree.get(handle) {
            Some(seg) => (seg.edge(), seg.above, seg.below),
            None => {
                tracing::error!("Tried to remove a segment that is not on the sweep line");
                return Err(InternalError::StaleHandle);
            }
        };

        if let Some(above) = above.and_then(|h| self.tree.get_mut(h)) {
            above.below = below;
        }
        if let Some(below) = below.and_then(|h| self.tree.get_mut(h)) {
            below.above = above;
        }

        self.tree.remove(handle).ok_or(InternalError::StaleHandle)?;

        tracing::trace!("Removed edge {} from sweep line", edge);

        Ok(())
    }

    /// Tell whether two segments cross or touch improperly.
    ///
    /// Missing segments never intersect, and neither do edges that are
    /// next to each other in the polygon.
    pub fn intersect(&self, s1: Option<Handle>, s2: Option<Handle>) -> bool {
        let (s1, s2) = match (
            s1.and_then(|h| self.tree.get(h)),
            s2.and_then(|h| self.tree.get(h)),
        ) {
            (Some(s1), Some(s2)) => (s1, s2),
            _ => return false,
        };

        if self.adjacent(s1.edge(), s2.edge()) {
            return false;
        }

        s1.straddles(s2)
    }

    /// Are the two edges consecutive in the polygon?
    fn adjacent(&self, e1: usize, e2: usize) -> bool {
        let n = self.vertices.len();
        (e1 + 1) % n == e2 || (e2 + 1) % n == e1
    }
}
