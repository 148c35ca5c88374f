/// Colors.

use std::fmt;
use std::convert::TryFrom;
use std::num::ParseIntError;
use serde::Deserialize;
use crate::surface::Surface;


/// A color.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(try_from = "String")]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64
}

impl Color {
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Color { red, green, blue, alpha: 1. }
    }

    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Color { red, green, blue, alpha }
    }

    pub fn hex(mut hex: &str) -> Result<Self, InvalidHexColor> {
        if !hex.is_ascii() {
            return Err(InvalidHexColor)
        }
        if hex.starts_with('#') {
            hex = &hex[1..];
        }
        let (r, g, b, a) = if hex.len() == 6 {
            (
                u8::from_str_radix(&hex[0..2], 16)?,
                u8::from_str_radix(&hex[2..4], 16)?,
                u8::from_str_radix(&hex[4..6], 16)?,
                0xFF,
            )
        }
        else if hex.len() == 8 {
            (
                u8::from_str_radix(&hex[0..2], 16)?,
                u8::from_str_radix(&hex[2..4], 16)?,
                u8::from_str_radix(&hex[4..6], 16)?,
                u8::from_str_radix(&hex[6..8], 16)?,
            )
        }
        else {
            return Err(InvalidHexColor)
        };
        Ok(Color::rgba(
            r as f64 / 255.,
            g as f64 / 255.,
            b as f64 / 255.,
            a as f64 / 255.,
        ))
    }

    /// Sets the color as the surface's stroke color.
    pub fn apply(self, surface: &mut dyn Surface) {
        surface.set_color(self)
    }

    pub fn alpha(self) -> f64 {
        self.alpha
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Color { red: self.red, green: self.green, blue: self.blue, alpha }
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(1., 1., 1.);
    pub const BLACK: Color = Color::rgb(0., 0., 0.);
    pub const RED: Color = Color::rgb(1., 0., 0.);
    pub const TRANSPARENT: Color = Color::rgba(0., 0., 0., 0.);
}

impl<'a> TryFrom<&'a str> for Color {
    type Error = InvalidHexColor;

    fn try_from(src: &'a str) -> Result<Self, Self::Error> {
        Self::hex(src)
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidHexColor;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        Self::hex(&src)
    }
}


//------------ InvalidHexColor -----------------------------------------------

#[derive(Debug)]
pub struct InvalidHexColor;

impl From<ParseIntError> for InvalidHexColor {
    fn from(_: ParseIntError) -> Self {
        InvalidHexColor
    }
}

impl fmt::Display for InvalidHexColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid color")
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hex_six_digits() {
        assert_eq!(Color::hex("ff0000").unwrap(), Color::RED);
        assert_eq!(Color::hex("#ffffff").unwrap(), Color::WHITE);
    }

    #[test]
    fn hex_eight_digits() {
        assert_eq!(
            Color::hex("#00000000").unwrap(),
            Color::TRANSPARENT
        );
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(Color::hex("#fff").is_err());
        assert!(Color::hex("not a color").is_err());
        assert!(Color::hex("gg0000").is_err());
        // Six bytes but not six characters. Must not panic on the
        // byte-range slicing.
        assert!(Color::hex("€€").is_err());
        assert!(Color::hex("#ff00€").is_err());
    }

    #[test]
    fn with_alpha_keeps_the_components() {
        let color = Color::RED.with_alpha(0.5);
        assert_eq!(color, Color::rgba(1., 0., 0., 0.5));
        assert_eq!(color.alpha(), 0.5);
    }
}
