//! Bridging overlays into the host's drawing pipeline.

use kurbo::{BezPath, Shape};
use crate::color::Color;
use crate::overlay::Overlay;
use crate::surface::{self, Surface};
use crate::viewport::Projection;


//------------ OverlayRenderer -----------------------------------------------

/// Renders a single overlay.
///
/// The renderer is a view over an overlay owned elsewhere, typically by
/// the host's overlay list. It keeps the overlay's style in the shape
/// the host's stroking expects and caches the most recently computed
/// screen-space path.
pub struct OverlayRenderer<'a> {
    /// The overlay to render.
    overlay: &'a Overlay,

    /// The stroke color.
    stroke: Color,

    /// The stroke width.
    line_width: f64,

    /// The opacity applied to the whole stroke.
    alpha: f64,

    /// The most recently computed path in screen coordinates.
    path: BezPath,
}

impl<'a> OverlayRenderer<'a> {
    /// Creates a renderer for an overlay.
    ///
    /// The overlay's style is copied into the renderer. The path starts
    /// out empty; call [`update_path`][Self::update_path] once a
    /// projection is available and again whenever it changes.
    pub fn new(overlay: &'a Overlay) -> Self {
        let style = overlay.style();
        OverlayRenderer {
            overlay,
            stroke: style.stroke,
            line_width: style.width,
            alpha: style.alpha,
            path: BezPath::new(),
        }
    }

    /// Recomputes the path under the given projection.
    ///
    /// Resolves the overlay's end points into screen space, asks the
    /// overlay for the path between them, and refreshes the overlay's
    /// cached bounding region from the path's bounding box. An overlay
    /// without coordinates is skipped quietly: the path stays as it
    /// was and nothing will be drawn.
    pub fn update_path(&mut self, proj: &dyn Projection) {
        let (origin, destination) = match (
            self.overlay.origin(), self.overlay.destination()
        ) {
            (Some(origin), Some(destination)) => (origin, destination),
            _ => return,
        };
        self.path = self.overlay.path(
            proj.screen_point(origin),
            proj.screen_point(destination),
        );
        self.overlay.set_bounds(
            proj.map_rect(self.path.bounding_box())
        );
    }

    /// Strokes the cached path onto a surface.
    pub fn render(&self, surface: &mut dyn Surface) {
        self.stroke.with_alpha(self.alpha).apply(surface);
        surface.set_line_width(self.line_width);
        surface::apply(&self.path, surface);
        surface.stroke();
    }
}

impl<'a> OverlayRenderer<'a> {
    pub fn overlay(&self) -> &Overlay {
        self.overlay
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}


//============ Tests =========================================================
