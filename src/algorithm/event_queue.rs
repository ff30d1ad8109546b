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
    compare::{compare_points, order_points},
    point::{Point, Scalar},
    tree::Handle,
};
use alloc::vec::Vec;
use core::{cmp::Ordering, iter::FusedIterator};

/// Which end of its edge an event sits at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// The lexicographically smaller end, where the edge enters the sweep line.
    Left,
    /// The larger end, where the edge leaves it.
    Right,
}

/// One endpoint of one polygon edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Event<Num> {
    /// The position of this event in the sorted queue.
    pub id: usize,
    /// The index of the edge this event belongs to.
    ///
    /// Edge `i` runs from vertex `i` to vertex `i + 1`, wrapping around.
    pub edge: usize,
    /// The endpoint itself.
    pub point: Point<Num>,
    pub kind: EventKind,
    /// The `id` of the event at the other end of the same edge.
    pub other_end: usize,
    /// The live segment for this edge, once its left event is processed.
    pub(crate) segment: Option<Handle>,
}

/// The sorted sequence of every edge endpoint of a polygon.
///
/// Events are ordered by point, with left events before right events at
/// the same point. Iteration walks a cursor owned by this queue, so two
/// queues over the same polygon never interfere with each other.
#[derive(Debug, Clone)]
pub struct EventQueue<Num> {
    events: Vec<Event<Num>>,
    cursor: usize,
}

impl<Num: Scalar> EventQueue<Num> {
    /// Build the queue for the closed polygon with the given vertices.
    pub fn new(vertices: &[Point<Num>]) -> Self {
        let n = vertices.len();

        // two events for each edge
        let mut events = Vec::with_capacity(2 * n);
        for (edge, &start) in vertices.iter().enumerate() {
            let end = vertices[(edge + 1) % n];
            let (left, right) = order_points(start, end);

            for (point, kind) in [(left, EventKind::Left), (right, EventKind::Right)] {
                events.push(Event {
                    id: 0,
                    edge,
                    point,
                    kind,
                    other_end: 0,
                    segment: None,
                });
            }
        }

        // stable, so ties keep edge order
        events.sort_by(compare_events);

        // now that the positions are final, link up the pairs
        let mut seen: Vec<Option<usize>> = alloc::vec![None; n];
        for id in 0..events.len() {
            events[id].id = id;
            let edge = events[id].edge;

            if let Some(other) = seen[edge] {
                events[id].other_end = other;
                events[other].other_end = id;
            } else {
                seen[edge] = Some(id);
            }
        }

        tracing::trace!("Built event queue with {} events", events.len());

        Self { events, cursor: 0 }
    }
}

impl<Num> EventQueue<Num> {
    /// The total number of events, regardless of the cursor.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get an event by its position in the queue.
    pub fn get(&self, id: usize) -> Option<&Event<Num>> {
        self.events.get(id)
    }

    /// Rewind the cursor to the first event.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Record the live segment on the event with the given id.
    pub(crate) fn attach_segment(&mut self, id: usize, segment: Handle) {
        if let Some(event) = self.events.get_mut(id) {
            event.segment = Some(segment);
        }
    }
}

impl<Num: Copy> Iterator for EventQueue<Num> {
    type Item = Event<Num>;

    fn next(&mut self) -> Option<Event<Num>> {
        let event = *self.events.get(self.cursor)?;
        self.cursor += 1;
        Some(event)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.events.len() - self.cursor;
        (left, Some(left))
    }
}

impl<Num: Copy> ExactSizeIterator for EventQueue<Num> {}

// the cursor never moves past the end, so once we run out we stay out
impl<Num: Copy> FusedIterator for EventQueue<Num> {}

fn compare_events<Num: Scalar>(e1: &Event<Num>, e2: &Event<Num>) -> Ordering {
    compare_points(&e1.point, &e2.point).then(e1.kind.cmp(&e2.kind))
}
