//! Text and shadow colors.
//!
//! [`TextColor`] is a plain 24-bit RGB value. The sixteen legacy color names
//! resolve through a process-wide table built on first use.

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextColor(u32);

impl TextColor {
    pub const BLACK: TextColor = TextColor(0x000000);
    pub const WHITE: TextColor = TextColor(0xffffff);

    /// Builds a color from its packed `0xRRGGBB` value. Bits above 24 are dropped.
    pub const fn new(value: u32) -> Self {
        TextColor(value & 0x00ff_ffff)
    }

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        TextColor(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Converts a hue/saturation/value triple (all in `0.0..=1.0`) to RGB.
    ///
    /// Channels are truncated, not rounded, so hue `0.0` is exactly `#ff0000`.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        if saturation == 0.0 {
            return Self::from_unit_rgb(value, value, value);
        }
        let h = hue * 6.0;
        let sector = h.floor() as i32;
        let f = h - sector as f32;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));
        match sector {
            0 => Self::from_unit_rgb(value, t, p),
            1 => Self::from_unit_rgb(q, value, p),
            2 => Self::from_unit_rgb(p, value, t),
            3 => Self::from_unit_rgb(p, q, value),
            4 => Self::from_unit_rgb(t, p, value),
            _ => Self::from_unit_rgb(value, p, q),
        }
    }

    fn from_unit_rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::from_rgb(
            (red * 255.0) as u8,
            (green * 255.0) as u8,
            (blue * 255.0) as u8,
        )
    }

    /// Linear interpolation between `from` and `to`; `t` is clamped to `0.0..=1.0`.
    pub fn lerp(t: f32, from: TextColor, to: TextColor) -> TextColor {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let a = f32::from(a);
            let b = f32::from(b);
            (a + t * (b - a)).round() as u8
        };
        TextColor::from_rgb(
            channel(from.red(), to.red()),
            channel(from.green(), to.green()),
            channel(from.blue(), to.blue()),
        )
    }

    /// Looks up one of the sixteen named colors. `name` must already be lowercase.
    pub fn named(name: &str) -> Option<TextColor> {
        NAMED_COLORS.get(name).copied()
    }

    /// Returns the name of this color when it is exactly one of the named colors.
    pub fn name(self) -> Option<&'static str> {
        NAMED.iter().find(|(_, value)| *value == self.0).map(|(name, _)| *name)
    }

    /// Parses `#RRGGBB`. Any other length is rejected.
    pub fn from_hex(value: &str) -> Option<TextColor> {
        let digits = value.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        parse_hex_digits(digits).map(TextColor::new)
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl Serialize for TextColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.collect_str(self),
        }
    }
}

/// A 32-bit ARGB text shadow color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShadowColor(u32);

impl ShadowColor {
    /// Fully transparent shadow, used to switch an inherited shadow off.
    pub const NONE: ShadowColor = ShadowColor(0);

    pub const fn new(argb: u32) -> Self {
        ShadowColor(argb)
    }

    pub fn from_color(color: TextColor, alpha: u8) -> Self {
        ShadowColor((u32::from(alpha) << 24) | color.value())
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn color(self) -> TextColor {
        TextColor::new(self.0)
    }
}

impl fmt::Display for ShadowColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}{:02x}", self.0 & 0x00ff_ffff, self.alpha())
    }
}

/// Parses a run of hex digits into an integer. Empty or non-hex input is rejected.
pub(crate) fn parse_hex_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() || digits.len() > 8 {
        return None;
    }
    digits.chars().try_fold(0u32, |acc, ch| {
        ch.to_digit(16).map(|digit| (acc << 4) | digit)
    })
}

const NAMED: [(&str, u32); 16] = [
    ("black", 0x000000),
    ("dark_blue", 0x0000aa),
    ("dark_green", 0x00aa00),
    ("dark_aqua", 0x00aaaa),
    ("dark_red", 0xaa0000),
    ("dark_purple", 0xaa00aa),
    ("gold", 0xffaa00),
    ("gray", 0xaaaaaa),
    ("dark_gray", 0x555555),
    ("blue", 0x5555ff),
    ("green", 0x55ff55),
    ("aqua", 0x55ffff),
    ("red", 0xff5555),
    ("light_purple", 0xff55ff),
    ("yellow", 0xffff55),
    ("white", 0xffffff),
];

static NAMED_COLORS: Lazy<HashMap<&'static str, TextColor>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, TextColor> = NAMED
        .iter()
        .map(|(name, value)| (*name, TextColor::new(*value)))
        .collect();
    map.insert("grey", TextColor::new(0xaaaaaa));
    map.insert("dark_grey", TextColor::new(0x555555));
    map
});
