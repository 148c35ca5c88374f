//! Projecting between map and screen coordinates.

use kurbo::{Point, Rect};
use crate::coord::Coord;


//------------ Projection ----------------------------------------------------

/// The host's map projection at one moment in time.
///
/// The renderer resolves an overlay's coordinates through this before
/// building its path. The host hands out a fresh projection whenever
/// the visible region changes and triggers a path recomputation.
pub trait Projection {
    /// Projects a geographic location to a screen point.
    fn screen_point(&self, coord: Coord) -> Point;

    /// Converts a screen-space rect back into storage coordinates.
    fn map_rect(&self, rect: Rect) -> Rect;
}


//------------ Viewport ------------------------------------------------------

/// A translate-scale projection over the Mercator unit square.
///
/// The north-west corner of the visible region is at `nw` in storage
/// coordinates and storage coordinates are multiplied by `scale` when
/// translating into screen coordinates. The scale must be positive.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    /// The north-west corner in storage coordinates.
    nw: Point,

    /// Screen units per storage unit.
    scale: f64,
}

impl Viewport {
    pub fn new(nw: Point, scale: f64) -> Self {
        Viewport { nw, scale }
    }

    /// Returns a viewport with the whole world `size` screen units wide.
    pub fn world(size: f64) -> Self {
        Viewport::new(Point::ORIGIN, size)
    }

    fn screen_xy(&self, storage: Point) -> Point {
        Point::new(
            (storage.x - self.nw.x) * self.scale,
            (storage.y - self.nw.y) * self.scale,
        )
    }

    fn storage_xy(&self, screen: Point) -> Point {
        Point::new(
            screen.x / self.scale + self.nw.x,
            screen.y / self.scale + self.nw.y,
        )
    }
}

impl Projection for Viewport {
    fn screen_point(&self, coord: Coord) -> Point {
        self.screen_xy(coord.xy())
    }

    fn map_rect(&self, rect: Rect) -> Rect {
        let p0 = self.storage_xy(Point::new(rect.x0, rect.y0));
        let p1 = self.storage_xy(Point::new(rect.x1, rect.y1));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn world_viewport() {
        let proj = Viewport::world(512.);
        let center = proj.screen_point(Coord::new(0., 0.));
        assert!((center.x - 256.).abs() < 1e-9);
        assert!((center.y - 256.).abs() < 1e-9);
    }

    #[test]
    fn map_rect_inverts_the_projection() {
        let proj = Viewport::new(Point::new(0.25, 0.25), 1024.);
        let coord = Coord::new(13.4, 52.5);
        let p = proj.screen_point(coord);
        let rect = proj.map_rect(Rect::new(p.x, p.y, p.x + 10., p.y + 10.));
        let xy = coord.xy();
        assert!((rect.x0 - xy.x).abs() < 1e-9);
        assert!((rect.y0 - xy.y).abs() < 1e-9);
        assert!((rect.x1 - rect.x0 - 10. / 1024.).abs() < 1e-9);
    }
}
