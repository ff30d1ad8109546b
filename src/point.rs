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


//! The two-dimensional point type the algorithm works on.

use core::fmt;
use num_traits::float::FloatCore;

/// A number that can be used as a coordinate.
///
/// This is implemented for every floating point type that `num-traits`
/// knows about, which in practice means `f32` and `f64`.
pub trait Scalar: FloatCore + fmt::Debug {}

impl<T: FloatCore + fmt::Debug> Scalar for T {}

/// A point in the plane.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point<Num> {
    pub x: Num,
    pub y: Num,
}

impl<Num> Point<Num> {
    /// Create a new point.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }
}

impl<Num: Scalar> Point<Num> {
    /// Are both coordinates neither infinite nor `NaN`?
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<Num> From<(Num, Num)> for Point<Num> {
    fn from((x, y): (Num, Num)) -> Self {
        Self::new(x, y)
    }
}

impl<Num> From<[Num; 2]> for Point<Num> {
    fn from([x, y]: [Num; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<Num: fmt::Display> fmt::Display for Point<Num> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
