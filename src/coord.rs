//! Geographic coordinates and map space.

use std::f64::consts::PI;
use kurbo::{Point, Rect};
use serde::Deserialize;


/// The bounding rect of the whole map in storage coordinates.
pub const WORLD: Rect = Rect::new(0., 0., 1., 1.);


//------------ Coord ---------------------------------------------------------

/// A geographic location in degrees.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

impl Coord {
    pub fn new(lon: f64, lat: f64) -> Self {
        Coord { lon, lat }
    }

    /// Returns the location in storage coordinates.
    ///
    /// Storage coordinates are Spherical Mercator with a range of
    /// `0. .. 1.` for both x and y. The x axis grows eastwards, the
    /// y axis southwards.
    pub fn xy(self) -> Point {
        Point::new(
            (self.lon + 180.) / 360.,
            (1.0 - self.lat.to_radians().tan().asinh() / PI) / 2.0,
        )
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn null_island_is_the_center() {
        let xy = Coord::new(0., 0.).xy();
        assert!((xy.x - 0.5).abs() < 1e-12);
        assert!((xy.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn storage_axes() {
        // West of Greenwich is left of the center.
        assert!(Coord::new(-122.4, 0.).xy().x < 0.5);
        // North of the equator is above the center, i.e. smaller y.
        assert!(Coord::new(0., 48.1).xy().y < 0.5);
        // The date line is the left edge.
        assert!((Coord::new(-180., 0.).xy().x).abs() < 1e-12);
    }

    #[test]
    fn world_contains_storage_points() {
        for coord in [
            Coord::new(-179.9, 84.),
            Coord::new(179.9, -84.),
            Coord::new(13.4, 52.5),
        ] {
            assert!(WORLD.contains(coord.xy()));
        }
    }
}
