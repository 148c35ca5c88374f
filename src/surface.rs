/// What we are drawing on.
use kurbo::{BezPath, PathEl, Point};
use crate::color::Color;


//------------ Surface -------------------------------------------------------

/// The host's drawing surface.
///
/// This is the subset of a two-dimensional drawing context the renderer
/// needs: building up a path and stroking it. The host implements it on
/// top of whatever its drawing pipeline is, e.g. a cairo context.
pub trait Surface {
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn quad_to(&mut self, c: Point, p: Point);
    fn curve_to(&mut self, c0: Point, c1: Point, p: Point);
    fn close_path(&mut self);

    /// Sets the color used by the next stroke.
    fn set_color(&mut self, color: Color);

    /// Sets the line width used by the next stroke.
    fn set_line_width(&mut self, width: f64);

    /// Strokes the current path.
    fn stroke(&mut self);
}


//------------ Helper Functions ----------------------------------------------

/// Replays a path onto a surface.
///
/// This updates the current path of the surface to the path.
pub fn apply(path: &BezPath, surface: &mut dyn Surface) {
    path.iter().for_each(|el| match el {
        PathEl::MoveTo(p) => surface.move_to(p),
        PathEl::LineTo(p) => surface.line_to(p),
        PathEl::QuadTo(c, p) => surface.quad_to(c, p),
        PathEl::CurveTo(c0, c1, p) => surface.curve_to(c0, c1, p),
        PathEl::ClosePath => surface.close_path(),
    })
}
