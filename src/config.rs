//! Transformation configuration and its canonical token serialization
//!
//! A [`Config`] renders as a comma-joined `key=value` token string in a
//! fixed key order:
//!
//! ```text
//! w=800,h=600,u=0,a=2,g=5,b=ff8000,f=webp:jpeg,q=80,o=0
//! ```
//!
//! Fields at their zero/default value emit no token; an all-default config
//! renders as the empty string. The order is part of the wire contract:
//! the signature covers the literal path, so reordering tokens changes the
//! signed artifact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Error;

/// Policy for reconciling the source aspect ratio with the requested size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AspectMode {
    /// Let the proxy pick; no token is emitted.
    #[default]
    Default,
    /// Keep the aspect ratio, scale to fit within the requested size.
    Scale,
    /// Ignore the aspect ratio, scale to the exact requested size.
    ForceScale,
    /// Keep the aspect ratio, crop to the requested size.
    Crop,
    /// Keep the aspect ratio, pad the remainder with the background color.
    Pad,
}

impl AspectMode {
    /// Wire code understood by the proxy. The proxy is the authority on
    /// this table; it is declared explicitly rather than derived from
    /// variant order.
    pub fn code(self) -> Option<u8> {
        match self {
            AspectMode::Default => None,
            AspectMode::Scale => Some(0),
            AspectMode::ForceScale => Some(1),
            AspectMode::Crop => Some(2),
            AspectMode::Pad => Some(3),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AspectMode::Default => "default",
            AspectMode::Scale => "scale",
            AspectMode::ForceScale => "force-scale",
            AspectMode::Crop => "crop",
            AspectMode::Pad => "pad",
        }
    }
}

impl FromStr for AspectMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(AspectMode::Default),
            "scale" => Ok(AspectMode::Scale),
            "force-scale" => Ok(AspectMode::ForceScale),
            "crop" => Ok(AspectMode::Crop),
            "pad" => Ok(AspectMode::Pad),
            _ => Err(Error::UnknownAspectMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Anchor point used when cropping or padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// Let the proxy pick; no token is emitted.
    #[default]
    Default,
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Origin {
    /// Wire code understood by the proxy, declared explicitly.
    pub fn code(self) -> u8 {
        match self {
            Origin::Default => 0,
            Origin::TopLeft => 1,
            Origin::TopCenter => 2,
            Origin::TopRight => 3,
            Origin::MiddleLeft => 4,
            Origin::MiddleCenter => 5,
            Origin::MiddleRight => 6,
            Origin::BottomLeft => 7,
            Origin::BottomCenter => 8,
            Origin::BottomRight => 9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Origin::Default => "default",
            Origin::TopLeft => "top-left",
            Origin::TopCenter => "top-center",
            Origin::TopRight => "top-right",
            Origin::MiddleLeft => "middle-left",
            Origin::MiddleCenter => "middle-center",
            Origin::MiddleRight => "middle-right",
            Origin::BottomLeft => "bottom-left",
            Origin::BottomCenter => "bottom-center",
            Origin::BottomRight => "bottom-right",
        }
    }
}

impl FromStr for Origin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Origin::Default),
            "top-left" => Ok(Origin::TopLeft),
            "top-center" => Ok(Origin::TopCenter),
            "top-right" => Ok(Origin::TopRight),
            "middle-left" => Ok(Origin::MiddleLeft),
            "middle-center" => Ok(Origin::MiddleCenter),
            "middle-right" => Ok(Origin::MiddleRight),
            "bottom-left" => Ok(Origin::BottomLeft),
            "bottom-center" => Ok(Origin::BottomCenter),
            "bottom-right" => Ok(Origin::BottomRight),
            _ => Err(Error::UnknownOrigin {
                value: s.to_string(),
            }),
        }
    }
}

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    /// Keep the same format as the input image.
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "jpg")]
    Jpeg,
    #[serde(rename = "png")]
    Png,
    #[serde(rename = "gif")]
    Gif,
    /// WebP output; the input image should be a JPEG.
    #[serde(rename = "webp:jpeg")]
    WebpFromJpeg,
    /// WebP output; the input image should be a PNG.
    #[serde(rename = "webp:png")]
    WebpFromPng,
}

impl Format {
    /// Wire string understood by the proxy.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Auto => "auto",
            Format::Jpeg => "jpg",
            Format::Png => "png",
            Format::Gif => "gif",
            Format::WebpFromJpeg => "webp:jpeg",
            Format::WebpFromPng => "webp:png",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Format::Auto),
            "jpg" | "jpeg" => Ok(Format::Jpeg),
            "png" => Ok(Format::Png),
            "gif" => Ok(Format::Gif),
            "webp:jpeg" => Ok(Format::WebpFromJpeg),
            "webp:png" => Ok(Format::WebpFromPng),
            _ => Err(Error::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// A single image transformation request.
///
/// Immutable value object; all fields default to "unset" so callers only
/// name the transformations they want:
///
/// ```
/// use imageflux::Config;
///
/// let config = Config {
///     width: 800,
///     quality: 80,
///     ..Default::default()
/// };
/// assert_eq!(config.to_string(), "w=800,q=80");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Scaling ===
    /// Target width in pixels; 0 means unset.
    pub width: u32,
    /// Target height in pixels; 0 means unset.
    pub height: u32,
    /// Forbid upscaling beyond the source dimensions.
    pub disable_enlarge: bool,
    /// How to reconcile aspect ratio with the requested size.
    pub aspect_mode: AspectMode,
    /// Anchor point for crop and pad operations.
    pub origin: Origin,
    /// Background color for padding.
    pub background: Option<Color>,

    // === Output ===
    /// Output format; `None` keeps the proxy's default behavior.
    pub format: Option<Format>,
    /// Output quality 1-100; 0 means unset.
    pub quality: u8,
    /// Disable the proxy's output size optimization.
    pub disable_optimization: bool,
}

impl Config {
    /// True when every field is at its default, i.e. serialization would
    /// yield the empty string.
    pub fn is_default(&self) -> bool {
        *self == Config::default()
    }
}

impl fmt::Display for Config {
    /// Render the canonical token string. Total over all inputs; an
    /// all-default config renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens: Vec<String> = Vec::new();

        if self.width != 0 {
            tokens.push(format!("w={}", self.width));
        }
        if self.height != 0 {
            tokens.push(format!("h={}", self.height));
        }
        if self.disable_enlarge {
            tokens.push("u=0".to_string());
        }
        if let Some(code) = self.aspect_mode.code() {
            tokens.push(format!("a={}", code));
        }
        if self.origin != Origin::Default {
            tokens.push(format!("g={}", self.origin.code()));
        }
        if let Some(background) = self.background {
            tokens.push(format!("b={}", background.to_rgb_hex()));
        }
        if let Some(format) = self.format {
            tokens.push(format!("f={}", format.as_str()));
        }
        if self.quality != 0 {
            tokens.push(format!("q={}", self.quality));
        }
        if self.disable_optimization {
            tokens.push("o=0".to_string());
        }

        f.write_str(&tokens.join(","))
    }
}

#[cfg(test)]
#[allow(clippy::field_reassign_with_default)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        assert_eq!(Config::default().to_string(), "");
        assert!(Config::default().is_default());
    }

    #[rstest]
    #[case(AspectMode::Default, None)]
    #[case(AspectMode::Scale, Some(0))]
    #[case(AspectMode::ForceScale, Some(1))]
    #[case(AspectMode::Crop, Some(2))]
    #[case(AspectMode::Pad, Some(3))]
    fn test_aspect_mode_codes(#[case] mode: AspectMode, #[case] code: Option<u8>) {
        assert_eq!(mode.code(), code);
    }

    #[rstest]
    #[case(Origin::Default, 0)]
    #[case(Origin::TopLeft, 1)]
    #[case(Origin::MiddleCenter, 5)]
    #[case(Origin::BottomRight, 9)]
    fn test_origin_codes(#[case] origin: Origin, #[case] code: u8) {
        assert_eq!(origin.code(), code);
    }

    #[rstest]
    #[case(Format::Auto, "auto")]
    #[case(Format::Jpeg, "jpg")]
    #[case(Format::Png, "png")]
    #[case(Format::Gif, "gif")]
    #[case(Format::WebpFromJpeg, "webp:jpeg")]
    #[case(Format::WebpFromPng, "webp:png")]
    fn test_format_wire_strings(#[case] format: Format, #[case] wire: &str) {
        assert_eq!(format.as_str(), wire);
        assert_eq!(wire.parse::<Format>().unwrap(), format);
    }

    #[test]
    fn test_enum_from_str_round_trips() {
        for mode in [
            AspectMode::Default,
            AspectMode::Scale,
            AspectMode::ForceScale,
            AspectMode::Crop,
            AspectMode::Pad,
        ] {
            assert_eq!(mode.as_str().parse::<AspectMode>().unwrap(), mode);
        }
        for origin in [
            Origin::Default,
            Origin::TopLeft,
            Origin::TopCenter,
            Origin::TopRight,
            Origin::MiddleLeft,
            Origin::MiddleCenter,
            Origin::MiddleRight,
            Origin::BottomLeft,
            Origin::BottomCenter,
            Origin::BottomRight,
        ] {
            assert_eq!(origin.as_str().parse::<Origin>().unwrap(), origin);
        }
    }

    #[test]
    fn test_enum_from_str_rejects_unknown() {
        assert!("stretch".parse::<AspectMode>().is_err());
        assert!("upper-left".parse::<Origin>().is_err());
        assert!("tga".parse::<Format>().is_err());
    }

    #[test]
    fn test_single_fields() {
        let mut config = Config::default();
        config.width = 800;
        assert_eq!(config.to_string(), "w=800");

        let mut config = Config::default();
        config.disable_enlarge = true;
        assert_eq!(config.to_string(), "u=0");

        let mut config = Config::default();
        config.disable_optimization = true;
        assert_eq!(config.to_string(), "o=0");

        let mut config = Config::default();
        config.aspect_mode = AspectMode::Pad;
        assert_eq!(config.to_string(), "a=3");

        let mut config = Config::default();
        config.origin = Origin::BottomRight;
        assert_eq!(config.to_string(), "g=9");

        let mut config = Config::default();
        config.background = Some(Color::rgb(255, 128, 0));
        assert_eq!(config.to_string(), "b=ff8000");
    }

    #[test]
    fn test_token_order_is_fixed() {
        // Setting fields in any order must render in wire order.
        let mut config = Config::default();
        config.quality = 80;
        config.width = 100;
        assert_eq!(config.to_string(), "w=100,q=80");
    }

    #[test]
    fn test_all_fields() {
        let config = Config {
            width: 800,
            height: 600,
            disable_enlarge: true,
            aspect_mode: AspectMode::Crop,
            origin: Origin::MiddleCenter,
            background: Some(Color::WHITE),
            format: Some(Format::WebpFromJpeg),
            quality: 80,
            disable_optimization: true,
        };
        assert_eq!(
            config.to_string(),
            "w=800,h=600,u=0,a=2,g=5,b=ffffff,f=webp:jpeg,q=80,o=0"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let config = Config {
            width: 320,
            aspect_mode: AspectMode::Scale,
            format: Some(Format::WebpFromPng),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"webp:png\""));
        assert!(json.contains("\"scale\""));
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
