//! Background color handling
//!
//! Colors are stored as alpha-premultiplied RGBA with 16 bits per channel.
//! The proxy only understands a 6-hex-digit RGB token, so encoding removes
//! the alpha scale before taking the high byte of each channel.

use serde::{Deserialize, Serialize};

/// Maximum value of a 16-bit color channel.
const CHANNEL_MAX: u16 = 0xffff;

/// An alpha-premultiplied RGBA color with 16 bits per channel.
///
/// Invariant: each of `r`, `g`, `b` is expected to be `<= a`. Values that
/// violate it are clamped during encoding so the token stays 6 hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Fully transparent. Always encodes as `000000`.
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color from 8-bit channels, replicated to 16 bits.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color {
            r: r as u16 * 0x101,
            g: g as u16 * 0x101,
            b: b as u16 * 0x101,
            a: CHANNEL_MAX,
        }
    }

    /// Color from raw premultiplied 16-bit channels.
    pub const fn rgba64(r: u16, g: u16, b: u16, a: u16) -> Self {
        Color { r, g, b, a }
    }

    /// Encode as the lowercase `rrggbb` hex form used in the `b=` token.
    ///
    /// Fully opaque colors take the high byte of each raw channel. Partially
    /// transparent colors are un-premultiplied first (`channel * 0xffff / a`,
    /// exact integer math) to recover the true RGB. A zero alpha cannot be
    /// un-premultiplied, so it encodes as black.
    pub fn to_rgb_hex(&self) -> String {
        if self.a == CHANNEL_MAX {
            return hex::encode([
                (self.r >> 8) as u8,
                (self.g >> 8) as u8,
                (self.b >> 8) as u8,
            ]);
        }
        if self.a == 0 {
            return "000000".to_string();
        }

        let unmultiply = |channel: u16| -> u8 {
            let full = (channel as u32 * CHANNEL_MAX as u32) / self.a as u32;
            (full.min(CHANNEL_MAX as u32) >> 8) as u8
        };
        hex::encode([
            unmultiply(self.r),
            unmultiply(self.g),
            unmultiply(self.b),
        ])
    }
}
