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


mod event_queue;
mod segment;
mod sweep_line;
mod tests;

pub use event_queue::{Event, EventKind, EventQueue};
pub use segment::Segment;
pub use sweep_line::SweepLine;

use crate::{
    error::InternalError,
    point::{Point, Scalar},
};

/// Where the simplicity check currently is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum State {
    /// Events are still being processed.
    Scanning,
    /// Two edges were found to cross or touch. The polygon is not simple.
    ViolationFound,
    /// Every event was processed without finding a violation.
    Done,
}

impl State {
    /// Has the algorithm finished?
    pub fn is_terminal(self) -> bool {
        !matches!(self, State::Scanning)
    }
}

/// The Shamos-Hoey sweep over the edges of one polygon.
///
/// Each call to [`step`](Self::step) processes one event. The sweep stops
/// at the first violation without looking at the rest of the queue.
#[derive(Debug)]
pub struct ShamosHoey<'a, Num> {
    /// The sorted endpoints of every edge.
    event_queue: EventQueue<Num>,
    /// The edges currently crossing the sweep line.
    sweep_line: SweepLine<'a, Num>,
    state: State,
}

impl<'a, Num: Scalar> ShamosHoey<'a, Num> {
    /// Set up a sweep over the closed polygon with the given vertices.
    ///
    /// The vertices are assumed to already be validated.
    pub fn new(vertices: &'a [Point<Num>]) -> Self {
        Self {
            event_queue: EventQueue::new(vertices),
            sweep_line: SweepLine::new(vertices),
            state: State::Scanning,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Get the sweep line as it currently stands.
    pub fn sweep_line(&self) -> &SweepLine<'a, Num> {
        &self.sweep_line
    }

    /// Process the next event.
    ///
    /// Once a terminal state is reached, this keeps returning it.
    pub fn step(&mut self) -> Result<State, InternalError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let event = match self.event_queue.next() {
            Some(event) => event,
            None => {
                tracing::debug!("Event queue exhausted, polygon is simple");
                self.state = State::Done;
                return Ok(self.state);
            }
        };

        tracing::trace!("Encountered event: {:?}", &event);

        let violation = match event.kind {
            EventKind::Left => self.handle_left_event(&event),
            EventKind::Right => self.handle_right_event(&event)?,
        };

        if violation {
            tracing::debug!("Edge {} crosses a neighbor, polygon is not simple", event.edge);
            self.state = State::ViolationFound;
        }

        Ok(self.state)
    }

    /// Run the sweep to completion, returning whether the polygon is simple.
    pub fn run(&mut self) -> Result<bool, InternalError> {
        loop {
            match self.step()? {
                State::Scanning => {}
                State::ViolationFound => return Ok(false),
                State::Done => return Ok(true),
            }
        }
    }

    /// Handle a left event, returning true if the new segment hits a neighbor.
    fn handle_left_event(&mut self, event: &Event<Num>) -> bool {
        let handle = self.sweep_line.add(event);
        self.event_queue.attach_segment(event.id, handle);

        let (above, below) = match self.sweep_line.segment(handle) {
            Some(seg) => (seg.above(), seg.below()),
            None => (None, None),
        };

        self.sweep_line.intersect(Some(handle), above)
            || self.sweep_line.intersect(Some(handle), below)
    }

    /// Handle a right event, returning true if the neighbors of the leaving
    /// segment hit each other.
    fn handle_right_event(&mut self, event: &Event<Num>) -> Result<bool, InternalError> {
        let handle = self
            .event_queue
            .get(event.other_end)
            .and_then(|left| left.segment)
            .ok_or(InternalError::UnlinkedEvent { edge: event.edge })?;

        let (above, below) = match self.sweep_line.segment(handle) {
            Some(seg) => (seg.above(), seg.below()),
            None => return Err(InternalError::SegmentNotFound { edge: event.edge }),
        };

        // the two neighbors are about to become adjacent
        if self.sweep_line.intersect(above, below) {
            return Ok(true);
        }

        self.sweep_line.remove(handle)?;
        Ok(false)
    }
}
