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


//! A pure-Rust implementation of the [Shamos-Hoey algorithm] for telling
//! whether a polygon is simple.
//!
//! A polygon is simple when no two of its edges cross or touch, apart from
//! consecutive edges meeting at the vertex they share. The check sweeps a
//! vertical line across the polygon and only ever tests an edge against its
//! immediate neighbors on that line, so it runs in `O(n log n)`.
//!
//! ```
//! use shamos_hoey::{is_simple_polygon, Point};
//!
//! let square = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! assert_eq!(is_simple_polygon(&square), Ok(true));
//!
//! let bowtie = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.0, 1.0),
//! ];
//! assert_eq!(is_simple_polygon(&bowtie), Ok(false));
//! ```
//!
//! [Shamos-Hoey algorithm]: https://en.wikipedia.org/wiki/Multiple_line_segment_intersection

#![no_std]
#![forbid(unsafe_code, rust_2018_idioms)]

extern crate alloc;

mod algorithm;
mod compare;
mod error;
mod point;
mod polygon;
pub mod tree;

pub use algorithm::{Event, EventKind, EventQueue, Segment, ShamosHoey, State, SweepLine};
pub use compare::{compare_points, is_left, order_points};
pub use error::{Error, InternalError, InvalidPolygon};
pub use point::{Point, Scalar};
pub use polygon::Polygon;

/// The whole point.
///
/// Returns `Ok(true)` if the closed polygon with the given vertices is
/// simple. The last vertex connects back to the first; repeating the first
/// vertex at the end makes a zero length edge, which is not simple.
///
/// # Errors
///
/// Fails if there are fewer than three vertices or a coordinate is not
/// finite, and on internal bookkeeping errors in the sweep line.
pub fn is_simple_polygon<Num: Scalar>(vertices: &[Point<Num>]) -> Result<bool, Error> {
    polygon::validate(vertices)?;
    Ok(polygon::check_simple(vertices)?)
}
