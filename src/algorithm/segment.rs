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
    compare::{compare_points, is_left},
    point::{Point, Scalar},
    tree::{Handle, StatusOrd},
};
use core::cmp::Ordering;

/// An edge that currently crosses the sweep line.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<Num> {
    /// The index of the polygon edge this segment represents.
    edge: usize,
    /// The lexicographically smaller endpoint.
    left: Point<Num>,
    /// The lexicographically larger endpoint.
    right: Point<Num>,
    /// The segment immediately above this one on the sweep line.
    pub(super) above: Option<Handle>,
    /// The segment immediately below this one on the sweep line.
    pub(super) below: Option<Handle>,
}

impl<Num: Copy> Segment<Num> {
    pub(super) fn new(edge: usize, left: Point<Num>, right: Point<Num>) -> Self {
        Self {
            edge,
            left,
            right,
            above: None,
            below: None,
        }
    }

    /// Get the index of the polygon edge.
    pub fn edge(&self) -> usize {
        self.edge
    }

    /// Get the endpoint where the segment enters the sweep line.
    pub fn left(&self) -> Point<Num> {
        self.left
    }

    /// Get the endpoint where the segment leaves the sweep line.
    pub fn right(&self) -> Point<Num> {
        self.right
    }

    /// Get the segment above this one.
    pub fn above(&self) -> Option<Handle> {
        self.above
    }

    /// Get the segment below this one.
    pub fn below(&self) -> Option<Handle> {
        self.below
    }
}

impl<Num: Scalar> Segment<Num> {
    /// Do the two segments straddle each other?
    ///
    /// Touching counts: if an endpoint lies exactly on the other segment's
    /// line, the pair is not separated.
    pub(super) fn straddles(&self, other: &Segment<Num>) -> bool {
        !self.separates(other) && !other.separates(self)
    }

    /// Are both endpoints of `other` strictly on the same side of this line?
    fn separates(&self, other: &Segment<Num>) -> bool {
        let lsign = is_left(self.left, self.right, other.left);
        let rsign = is_left(self.left, self.right, other.right);
        lsign * rsign > Num::zero()
    }

    /// Order `later` relative to `self`, given that `later` entered the
    /// sweep line at or after `self` did.
    ///
    /// `later.left` is then inside the X range of `self`, so the side it
    /// lies on is the side `later` is on near the sweep line.
    fn below_cmp(&self, later: &Segment<Num>) -> Ordering {
        let zero = Num::zero();

        let mut side = if self.left == later.left {
            // sharing a left endpoint, so the right endpoints decide
            is_left(self.left, self.right, later.right)
        } else {
            is_left(self.left, self.right, later.left)
        };

        if side == zero {
            // starts on our line, so go by where it is headed
            side = is_left(self.left, self.right, later.right);
        }

        if side > zero {
            Ordering::Less
        } else if side < zero {
            Ordering::Greater
        } else {
            // collinear, fall back to something deterministic
            self.edge.cmp(&later.edge)
        }
    }
}

impl<Num: Scalar> StatusOrd for Segment<Num> {
    /// `Less` means `self` is below `other`.
    ///
    /// Only two segments for the same edge compare equal. The order is only
    /// meaningful between segments that are on the sweep line together.
    fn status_cmp(&self, other: &Self) -> Ordering {
        if self.edge == other.edge {
            return Ordering::Equal;
        }

        match compare_points(&self.left, &other.left) {
            Ordering::Greater => other.below_cmp(self).reverse(),
            _ => self.below_cmp(other),
        }
    }
}
