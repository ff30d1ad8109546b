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


//! Rust makes comparing floats hard sometimes, so this module holds the
//! two geometric predicates everything else is built on.

use crate::point::{Point, Scalar};
use core::cmp;

pub(crate) const EXPECTED_NOT_NAN: &str = "Expected non-NaN values";

/// Compare two points by X and then by Y.
///
/// This is a strict total order as long as neither point contains a `NaN`,
/// which polygon construction rules out.
///
/// # Panics
///
/// Panics if either point has a `NaN` coordinate.
pub fn compare_points<Num: Scalar>(a: &Point<Num>, b: &Point<Num>) -> cmp::Ordering {
    match a.x.partial_cmp(&b.x).expect(EXPECTED_NOT_NAN) {
        cmp::Ordering::Equal => a.y.partial_cmp(&b.y).expect(EXPECTED_NOT_NAN),
        x => x,
    }
}

/// Order a pair of points by X and then Y, returning the smaller one first.
pub fn order_points<Num: Scalar>(p1: Point<Num>, p2: Point<Num>) -> (Point<Num>, Point<Num>) {
    if compare_points(&p1, &p2) == cmp::Ordering::Greater {
        (p2, p1)
    } else {
        (p1, p2)
    }
}

/// Tests whether `p2` lies to the left of, on, or to the right of the
/// directed line running from `p0` through `p1`.
///
/// This is the Z component of `(p1 - p0) x (p2 - p0)`: positive when `p2` is
/// to the left, negative when it is to the right and zero when the three
/// points are collinear.
pub fn is_left<Num: Scalar>(p0: Point<Num>, p1: Point<Num>, p2: Point<Num>) -> Num {
    (p1.x - p0.x) * (p2.y - p0.y) - (p2.x - p0.x) * (p1.y - p0.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;

    #[test]
    fn test_compare_points() {
        let p0 = Point::new(1.0, 1.0);
        let p1 = Point::new(3.0, 3.0);

        assert_eq!(compare_points(&p0, &p1), Ordering::Less);
        assert_eq!(compare_points(&p1, &p0), Ordering::Greater);
        assert_eq!(compare_points(&p0, &p0), Ordering::Equal);
    }

    #[test]
    fn test_compare_points_ties_on_y() {
        let low = Point::new(2.0, -1.0);
        let high = Point::new(2.0, 5.0);

        assert_eq!(compare_points(&low, &high), Ordering::Less);
        assert_eq!(compare_points(&high, &low), Ordering::Greater);
    }

    #[test]
    fn test_order_points() {
        let a = Point::new(4.0, 0.0);
        let b = Point::new(1.0, 9.0);

        assert_eq!(order_points(a, b), (b, a));
        assert_eq!(order_points(b, a), (b, a));
    }

    #[test]
    fn test_left_of_line() {
        let p0 = Point::new(1.0, 1.0);
        let p1 = Point::new(3.0, 3.0);

        assert!(is_left(p0, p1, Point::new(1.0, 3.0)) > 0.0);
        assert!(is_left(p0, p1, Point::new(3.0, 1.0)) < 0.0);
        assert_eq!(is_left(p0, p1, Point::new(2.0, 2.0)), 0.0);
    }
}
