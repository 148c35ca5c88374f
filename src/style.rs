//! The visual style of overlays.

use serde::Deserialize;
use crate::color::Color;


//------------ Style ---------------------------------------------------------

/// How an overlay's stroke should look.
///
/// Values are taken as given: the alpha is expected in `0. ..= 1.` and
/// the width to be positive, but neither is enforced.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Style {
    /// The stroke color.
    pub stroke: Color,

    /// The stroke width in screen units.
    pub width: f64,

    /// The opacity of the whole overlay.
    pub alpha: f64,
}

impl Style {
    pub const fn new(stroke: Color, width: f64, alpha: f64) -> Self {
        Style { stroke, width, alpha }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::new(Color::BLACK, 3., 0.15)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_toml() {
        let style: Style = toml::from_str(
            "stroke = \"#ff0000\"\nwidth = 1.5\n"
        ).unwrap();
        assert_eq!(style.stroke, Color::RED);
        assert_eq!(style.width, 1.5);
        // Omitted fields fall back to the defaults.
        assert_eq!(style.alpha, 0.15);
    }

    #[test]
    fn defaults() {
        let style = Style::default();
        assert_eq!(style.stroke, Color::BLACK);
        assert_eq!(style.width, 3.);
        assert_eq!(style.alpha, 0.15);
    }
}
