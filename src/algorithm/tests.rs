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


//! Unit tests for functionality in the main module.

#![cfg(test)]

use super::*;
use crate::tree::{Handle, StatusOrd};
use alloc::vec::Vec;

fn points(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
    coords.iter().map(|&c| c.into()).collect()
}

fn rectangle() -> Vec<Point<f64>> {
    points(&[(100.0, 0.0), (101.0, 0.0), (101.0, 1.0), (100.0, 1.0)])
}

fn bowtie() -> Vec<Point<f64>> {
    points(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)])
}

/// Every segment's links must match its neighbors in the tree.
fn assert_links_consistent(sweep_line: &SweepLine<'_, f64>) {
    let order = sweep_line.segments().map(|(h, _)| h).collect::<Vec<_>>();

    for (i, &handle) in order.iter().enumerate() {
        let seg = sweep_line.segment(handle).unwrap();
        let below = if i == 0 { None } else { Some(order[i - 1]) };
        let above = order.get(i + 1).copied();
        assert_eq!(seg.below(), below, "bad below link for edge {}", seg.edge());
        assert_eq!(seg.above(), above, "bad above link for edge {}", seg.edge());
    }
}

#[test]
fn test_event_queue_len() {
    let vertices = rectangle();
    let queue = EventQueue::new(&vertices);

    assert_eq!(queue.len(), 8);
    assert_eq!(queue.count(), 8);
}

#[test]
fn test_event_queue_order() {
    let vertices = rectangle();
    let events = EventQueue::new(&vertices).collect::<Vec<_>>();

    for pair in events.windows(2) {
        match crate::compare::compare_points(&pair[0].point, &pair[1].point) {
            core::cmp::Ordering::Less => {}
            core::cmp::Ordering::Equal => assert!(pair[0].kind <= pair[1].kind),
            core::cmp::Ordering::Greater => panic!("events out of order: {:?}", pair),
        }
    }

    // (100, 1) starts edge 2 and ends edge 3, the start comes first
    let at_corner = events
        .iter()
        .filter(|e| e.point == Point::new(100.0, 1.0))
        .map(|e| (e.edge, e.kind))
        .collect::<Vec<_>>();
    assert_eq!(at_corner, [(2, EventKind::Left), (3, EventKind::Right)]);
}

#[test]
fn test_event_queue_pairs() {
    let vertices = rectangle();
    let queue = EventQueue::new(&vertices);

    for (id, event) in queue.clone().enumerate() {
        assert_eq!(event.id, id);
        let other = queue.get(event.other_end).unwrap();
        assert_eq!(other.edge, event.edge);
        assert_eq!(other.other_end, id);
        assert_ne!(other.kind, event.kind);
    }
}

#[test]
fn test_event_queue_reset() {
    let vertices = bowtie();
    let mut queue = EventQueue::new(&vertices);
    let first = queue.by_ref().take(3).collect::<Vec<_>>();
    assert_eq!(queue.len(), 8);
    assert_eq!(queue.size_hint(), (5, Some(5)));

    queue.reset();
    assert_eq!(queue.by_ref().take(3).collect::<Vec<_>>(), first);
}

#[test]
fn test_event_queues_do_not_share_cursor() {
    let vertices = bowtie();
    let mut q1 = EventQueue::new(&vertices);
    let mut q2 = EventQueue::new(&vertices);

    // advance one queue, then make sure the other still starts at the top
    q1.next();
    q1.next();

    let full = q2.by_ref().collect::<Vec<_>>();
    q1.reset();
    assert_eq!(q1.collect::<Vec<_>>(), full);
    assert_eq!(q2.next(), None);
}

#[test]
fn test_sweep_line_links() {
    // three horizontal-ish edges stacked on top of each other
    let vertices = points(&[
        (0.0, 0.0),
        (10.0, 1.0),
        (0.0, 5.0),
        (10.0, 6.0),
        (0.0, 10.0),
        (10.0, 11.0),
    ]);
    let queue = EventQueue::new(&vertices);
    let mut sweep_line = SweepLine::new(&vertices);

    let lefts = queue
        .clone()
        .filter(|e| e.kind == EventKind::Left && e.edge % 2 == 0)
        .collect::<Vec<_>>();
    let handles = lefts
        .iter()
        .map(|e| (e.edge, sweep_line.add(e)))
        .collect::<Vec<_>>();
    assert_links_consistent(&sweep_line);

    let handle_of = |edge: usize| -> Handle {
        handles.iter().find(|(e, _)| *e == edge).unwrap().1
    };

    // edge 0 is lowest, then 2, then 4
    let middle = sweep_line.segment(handle_of(2)).unwrap();
    assert_eq!(middle.below(), Some(handle_of(0)));
    assert_eq!(middle.above(), Some(handle_of(4)));

    sweep_line.remove(handle_of(2)).unwrap();
    assert_links_consistent(&sweep_line);
    assert_eq!(sweep_line.segment(handle_of(0)).unwrap().above(), Some(handle_of(4)));
    assert_eq!(sweep_line.segment(handle_of(4)).unwrap().below(), Some(handle_of(0)));

    // removing it twice is a bookkeeping error
    assert_eq!(
        sweep_line.remove(handle_of(2)),
        Err(InternalError::StaleHandle)
    );
}

#[test]
fn test_sweep_line_find() {
    let vertices = rectangle();
    let mut sweep_line = SweepLine::new(&vertices);

    for event in EventQueue::new(&vertices).filter(|e| e.kind == EventKind::Left) {
        sweep_line.add(&event);
    }

    assert_eq!(sweep_line.len(), 4);
    let found = sweep_line.find(1).unwrap();
    assert_eq!(sweep_line.segment(found).unwrap().edge(), 1);
    assert_eq!(sweep_line.find(7), None);
}

#[test]
fn test_intersect_skips_adjacent_edges() {
    // edges 0 and 3 of a bowtie do not touch, 0 and 2 cross
    let vertices = bowtie();
    let mut sweep_line = SweepLine::new(&vertices);
    let mut handles = [None; 4];

    for event in EventQueue::new(&vertices).filter(|e| e.kind == EventKind::Left) {
        handles[event.edge] = Some(sweep_line.add(&event));
    }

    // consecutive edges never count, whatever their shape
    for i in 0..4 {
        assert!(!sweep_line.intersect(handles[i], handles[(i + 1) % 4]));
        assert!(!sweep_line.intersect(handles[(i + 1) % 4], handles[i]));
    }

    assert!(sweep_line.intersect(handles[0], handles[2]));
    assert!(sweep_line.intersect(handles[2], handles[0]));
    assert!(!sweep_line.intersect(handles[1], None));
    assert!(!sweep_line.intersect(None, None));
}

#[test]
fn test_intersect_counts_touching() {
    // the tip of edge 2 lands exactly on edge 0
    let vertices = points(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    let mut sweep_line = SweepLine::new(&vertices);
    let mut handles = [None; 5];

    for event in EventQueue::new(&vertices).filter(|e| e.kind == EventKind::Left) {
        handles[event.edge] = Some(sweep_line.add(&event));
    }

    assert!(sweep_line.intersect(handles[0], handles[2]));
    assert!(!sweep_line.intersect(handles[1], handles[3]));
}

#[test]
fn test_segment_order_from_shared_left_point() {
    // two edges leave (0, 0), the steep one ends lower but is above
    let steep = Segment::new(0, Point::new(0.0, 0.0), Point::new(1.0, 10.0));
    let shallow = Segment::new(1, Point::new(0.0, 0.0), Point::new(10.0, 11.0));

    assert_eq!(shallow.status_cmp(&steep), core::cmp::Ordering::Less);
    assert_eq!(steep.status_cmp(&shallow), core::cmp::Ordering::Greater);
    assert_eq!(steep.status_cmp(&steep.clone()), core::cmp::Ordering::Equal);
}

#[test]
fn test_segment_order_is_antisymmetric() {
    // the later segment starts well inside the long one
    let long = Segment::new(0, Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let short = Segment::new(1, Point::new(5.0, 1.0), Point::new(6.0, 100.0));

    assert_eq!(long.status_cmp(&short), core::cmp::Ordering::Less);
    assert_eq!(short.status_cmp(&long), core::cmp::Ordering::Greater);
}

#[test]
fn test_driver_states() {
    let vertices = rectangle();
    let mut driver = ShamosHoey::new(&vertices);
    assert_eq!(driver.state(), State::Scanning);

    let mut steps = 0;
    while !driver.step().unwrap().is_terminal() {
        steps += 1;
    }

    // one step per event, then one more to notice the queue is empty
    assert_eq!(steps, 8);
    assert_eq!(driver.state(), State::Done);
    assert!(driver.sweep_line().is_empty());

    // terminal states stick
    assert_eq!(driver.step(), Ok(State::Done));
}

#[test]
fn test_driver_stops_early() {
    let vertices = bowtie();
    let mut driver = ShamosHoey::new(&vertices);

    assert_eq!(driver.run(), Ok(false));
    assert_eq!(driver.state(), State::ViolationFound);
    assert_eq!(driver.step(), Ok(State::ViolationFound));
    // the crossing edges are still on the line, nothing was drained
    assert!(!driver.sweep_line().is_empty());
}

#[test]
fn test_every_edge_leaves_the_sweep_line() {
    let vertices = points(&[
        (0.0, 0.0),
        (3.0, -1.0),
        (6.0, 0.5),
        (4.0, 2.0),
        (5.0, 4.0),
        (1.0, 3.0),
    ]);
    let mut driver = ShamosHoey::new(&vertices);

    loop {
        let state = driver.step().unwrap();
        assert_links_consistent(driver.sweep_line());
        if state.is_terminal() {
            assert_eq!(state, State::Done);
            break;
        }
    }
    assert_eq!(driver.sweep_line().len(), 0);
}
