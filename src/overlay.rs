/// Overlays are the lines and arcs to be shown on the map.
use std::cell::Cell;
use kurbo::{BezPath, Point, Rect, Vec2};
use smallvec::SmallVec;
use crate::coord::{Coord, WORLD};
use crate::style::Style;


//------------ Configurable Constants ----------------------------------------

/// The rise of an arc relative to its chord.
///
/// An arc with radius multiplier 1 bows away from the chord's midpoint
/// by this fraction of the chord length.
const BOW_FACTOR: f64 = 0.5;


//------------ Kind ----------------------------------------------------------

/// The path variant of an overlay, picked at construction.
#[derive(Clone, Copy, Debug)]
pub enum Kind {
    /// A straight segment between the end points.
    Line,

    /// A quadratic curve bowed away from the straight segment.
    ///
    /// The multiplier scales how far the curve bows out. It should not
    /// be negative. With 0 the curve collapses onto the straight
    /// segment.
    Arc { radius_multiplier: f64 },
}


//------------ Overlay -------------------------------------------------------

/// A line or arc between two geographic locations.
///
/// The overlay holds its coordinates and style for its whole lifetime.
/// Its bounding region starts out as the whole world and is refreshed
/// by the renderer after each path recomputation. The host reads it for
/// redraw and culling decisions. All access happens on the host's
/// render thread.
#[derive(Clone, Debug)]
pub struct Overlay {
    /// The coordinates.
    ///
    /// The first one is the origin and the last one the destination.
    coords: SmallVec<[Coord; 2]>,

    /// The visual style.
    style: Style,

    /// The path variant.
    kind: Kind,

    /// The bounding region in storage coordinates.
    bounds: Cell<Rect>,
}

impl Overlay {
    /// Creates an overlay drawn as a straight line.
    pub fn line(origin: Coord, destination: Coord) -> Self {
        Self::from_coords([origin, destination], Kind::Line, Style::default())
    }

    /// Creates an overlay drawn as an arc with the default bow.
    pub fn arc(origin: Coord, destination: Coord) -> Self {
        Self::arc_with_multiplier(origin, destination, 1.)
    }

    /// Creates an overlay drawn as an arc with an explicit multiplier.
    pub fn arc_with_multiplier(
        origin: Coord, destination: Coord, radius_multiplier: f64
    ) -> Self {
        Self::from_coords(
            [origin, destination],
            Kind::Arc { radius_multiplier },
            Style::default(),
        )
    }

    /// Creates an overlay from an arbitrary coordinate list.
    ///
    /// Only the first and last coordinate take part in drawing. An
    /// empty list is fine and renders as nothing.
    pub fn from_coords(
        coords: impl IntoIterator<Item = Coord>,
        kind: Kind,
        style: Style,
    ) -> Self {
        Overlay {
            coords: coords.into_iter().collect(),
            style,
            kind,
            bounds: Cell::new(WORLD),
        }
    }

    /// Replaces the style.
    pub fn styled(self, style: Style) -> Self {
        Overlay { style, .. self }
    }
}

impl Overlay {
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn origin(&self) -> Option<Coord> {
        self.coords.first().copied()
    }

    pub fn destination(&self) -> Option<Coord> {
        self.coords.last().copied()
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the cached bounding region in storage coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    /// Caches a newly computed bounding region.
    pub fn set_bounds(&self, bounds: Rect) {
        self.bounds.set(bounds)
    }
}

impl Overlay {
    /// Returns the drawable path between two screen points.
    ///
    /// The points are the overlay's origin and destination already
    /// projected into screen space. Coincident points produce a
    /// zero-length path which strokes to nothing.
    pub fn path(&self, origin: Point, destination: Point) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(origin);
        match self.kind {
            Kind::Line => path.line_to(destination),
            Kind::Arc { radius_multiplier } => {
                path.quad_to(
                    control_point(origin, destination, radius_multiplier),
                    destination,
                )
            }
        }
        path
    }

    /// Returns the point the path bows through.
    ///
    /// This is the arc's control point or, for a line, the chord's
    /// midpoint. Useful for placing a label or an arrow head along the
    /// overlay.
    pub fn control_point(&self, origin: Point, destination: Point) -> Point {
        match self.kind {
            Kind::Line => origin.midpoint(destination),
            Kind::Arc { radius_multiplier } => {
                control_point(origin, destination, radius_multiplier)
            }
        }
    }
}


//------------ Helper Functions ----------------------------------------------

/// Returns the control point of an arc between two screen points.
///
/// The point sits on the perpendicular through the chord's midpoint at
/// a distance of `BOW_FACTOR * radius_multiplier` times the chord
/// length. Rotating the chord instead of normalizing it keeps a zero
/// chord from turning into NaN: coincident points get their midpoint
/// back.
pub fn control_point(
    origin: Point, destination: Point, radius_multiplier: f64
) -> Point {
    let chord = destination - origin;
    let perp = Vec2::new(chord.y, -chord.x);
    origin.midpoint(destination) + perp * (BOW_FACTOR * radius_multiplier)
}

/// Returns the direction from one screen point to another.
///
/// The direction is in degrees in `0. .. 360.`, measured from the
/// positive x axis towards positive y.
pub fn angle(from: Point, to: Point) -> f64 {
    let degrees = (to.y - from.y).atan2(to.x - from.x).to_degrees();
    if degrees < 0. {
        degrees + 360.
    }
    else {
        degrees
    }
}


//============ Tests =========================================================
