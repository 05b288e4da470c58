//! Named ball colors
//!
//! Balls pick their color from a fixed, enumerable list of names. The RGB
//! values match the classic raylib palette.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A named color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    LightGray,
    Gray,
    DarkGray,
    Yellow,
    Gold,
    Orange,
    Pink,
    Red,
    Maroon,
    Green,
    Lime,
    DarkGreen,
    SkyBlue,
    Blue,
    DarkBlue,
    Purple,
    Violet,
    DarkPurple,
    Beige,
    Brown,
    DarkBrown,
    White,
    Black,
    RayWhite,
}

impl NamedColor {
    /// Every color a ball may be given by default
    pub const BALL_PALETTE: [NamedColor; 21] = [
        NamedColor::LightGray,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Yellow,
        NamedColor::Gold,
        NamedColor::Orange,
        NamedColor::Pink,
        NamedColor::Red,
        NamedColor::Maroon,
        NamedColor::Green,
        NamedColor::Lime,
        NamedColor::DarkGreen,
        NamedColor::SkyBlue,
        NamedColor::Blue,
        NamedColor::DarkBlue,
        NamedColor::Purple,
        NamedColor::Violet,
        NamedColor::DarkPurple,
        NamedColor::Beige,
        NamedColor::Brown,
        NamedColor::DarkBrown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NamedColor::LightGray => "lightgray",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "darkgray",
            NamedColor::Yellow => "yellow",
            NamedColor::Gold => "gold",
            NamedColor::Orange => "orange",
            NamedColor::Pink => "pink",
            NamedColor::Red => "red",
            NamedColor::Maroon => "maroon",
            NamedColor::Green => "green",
            NamedColor::Lime => "lime",
            NamedColor::DarkGreen => "darkgreen",
            NamedColor::SkyBlue => "skyblue",
            NamedColor::Blue => "blue",
            NamedColor::DarkBlue => "darkblue",
            NamedColor::Purple => "purple",
            NamedColor::Violet => "violet",
            NamedColor::DarkPurple => "darkpurple",
            NamedColor::Beige => "beige",
            NamedColor::Brown => "brown",
            NamedColor::DarkBrown => "darkbrown",
            NamedColor::White => "white",
            NamedColor::Black => "black",
            NamedColor::RayWhite => "raywhite",
        }
    }

    /// sRGB bytes (r, g, b, a)
    pub fn rgba(&self) -> [u8; 4] {
        match self {
            NamedColor::LightGray => [200, 200, 200, 255],
            NamedColor::Gray => [130, 130, 130, 255],
            NamedColor::DarkGray => [80, 80, 80, 255],
            NamedColor::Yellow => [253, 249, 0, 255],
            NamedColor::Gold => [255, 203, 0, 255],
            NamedColor::Orange => [255, 161, 0, 255],
            NamedColor::Pink => [255, 109, 194, 255],
            NamedColor::Red => [230, 41, 55, 255],
            NamedColor::Maroon => [190, 33, 55, 255],
            NamedColor::Green => [0, 228, 48, 255],
            NamedColor::Lime => [0, 158, 47, 255],
            NamedColor::DarkGreen => [0, 117, 44, 255],
            NamedColor::SkyBlue => [102, 191, 255, 255],
            NamedColor::Blue => [0, 121, 241, 255],
            NamedColor::DarkBlue => [0, 82, 172, 255],
            NamedColor::Purple => [200, 122, 255, 255],
            NamedColor::Violet => [135, 60, 190, 255],
            NamedColor::DarkPurple => [112, 31, 126, 255],
            NamedColor::Beige => [211, 176, 131, 255],
            NamedColor::Brown => [127, 106, 79, 255],
            NamedColor::DarkBrown => [76, 63, 47, 255],
            NamedColor::White => [255, 255, 255, 255],
            NamedColor::Black => [0, 0, 0, 255],
            NamedColor::RayWhite => [245, 245, 245, 255],
        }
    }

    /// Linear-space float color for an sRGB render target
    pub fn to_linear(&self) -> [f32; 4] {
        let [r, g, b, a] = self.rgba();
        [
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        ]
    }
}

/// Accepts exactly the lowercase names used in config files
impl FromStr for NamedColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedColor::BALL_PALETTE
            .into_iter()
            .chain([NamedColor::White, NamedColor::Black, NamedColor::RayWhite])
            .find(|color| color.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownColor(s.to_string()))
    }
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_the_same_names_as_config_files() {
        let extras = [NamedColor::White, NamedColor::Black, NamedColor::RayWhite];
        for color in NamedColor::BALL_PALETTE.into_iter().chain(extras) {
            let parsed: NamedColor = color.as_str().parse().unwrap();
            let from_json: NamedColor =
                serde_json::from_str(&format!("\"{}\"", color.as_str())).unwrap();
            assert_eq!(parsed, color);
            assert_eq!(from_json, color);
        }

        for name in ["grey", "dark_blue", "RayWhite", "chartreuse"] {
            assert!(name.parse::<NamedColor>().is_err(), "{} accepted", name);
            assert!(serde_json::from_str::<NamedColor>(&format!("\"{}\"", name)).is_err());
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&NamedColor::SkyBlue).unwrap();
        assert_eq!(json, "\"skyblue\"");
        let back: NamedColor = serde_json::from_str("\"darkpurple\"").unwrap();
        assert_eq!(back, NamedColor::DarkPurple);
    }

    #[test]
    fn test_linear_conversion_endpoints() {
        assert_eq!(NamedColor::Black.to_linear(), [0.0, 0.0, 0.0, 1.0]);
        let white = NamedColor::White.to_linear();
        for c in &white[..3] {
            assert!((c - 1.0).abs() < 1e-5);
        }
    }
}
