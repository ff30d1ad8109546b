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


use shamos_hoey::{EventQueue, Point, Polygon};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let vertices = vec![
        Point::new(2.0, 2.0),
        Point::new(3.0, 2.0),
        Point::new(3.0, 3.0),
        Point::new(2.0, 3.0),
        Point::new(4.0, 2.0),
        Point::new(2.0000001, 2.000001),
    ];

    let events = EventQueue::new(&vertices).collect::<Vec<_>>();
    println!("{:#?}", events);

    let polygon = match Polygon::new(vertices) {
        Ok(polygon) => polygon,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };

    match polygon.is_simple() {
        Ok(simple) => println!("simple: {}", simple),
        Err(err) => eprintln!("{}", err),
    }
}
