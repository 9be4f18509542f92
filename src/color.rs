use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "default_alpha")]
    pub a: u8,
}

fn default_alpha() -> u8 {
    255
}

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
    })
}

fn rgb_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*([0-9.]+)\s*)?\)$").unwrap()
    })
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color string: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Some(caps) = hex_pattern().captures(s) {
            let digits = &caps[1];
            return Some(match digits.len() {
                3 => {
                    let mut ch = digits.chars().map(|c| c.to_digit(16).unwrap() as u8);
                    let (r, g, b) = (
                        ch.next().unwrap(),
                        ch.next().unwrap(),
                        ch.next().unwrap(),
                    );
                    // #abc expands to #aabbcc
                    Color::rgb(r * 17, g * 17, b * 17)
                }
                6 | 8 => {
                    let r = u8::from_str_radix(&digits[0..2], 16).unwrap();
                    let g = u8::from_str_radix(&digits[2..4], 16).unwrap();
                    let b = u8::from_str_radix(&digits[4..6], 16).unwrap();
                    let a = if digits.len() == 8 {
                        u8::from_str_radix(&digits[6..8], 16).unwrap()
                    } else {
                        255
                    };
                    Color::rgba(r, g, b, a)
                }
                _ => unreachable!(),
            });
        }

        if let Some(caps) = rgb_pattern().captures(s) {
            let channel = |i: usize| caps[i].parse::<u32>().ok().map(|v| v.min(255) as u8);
            let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);
            let a = match caps.get(4) {
                Some(m) => {
                    let f = m.as_str().parse::<f32>().ok()?;
                    (f.clamp(0.0, 1.0) * 255.0).round() as u8
                }
                None => 255,
            };
            return Some(Color::rgba(r, g, b, a));
        }

        None
    }

    /// Channel-wise linear interpolation
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    pub fn as_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s).ok_or_else(|| anyhow::anyhow!("Invalid color string: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse("#f1caff"), Some(Color::rgb(0xf1, 0xca, 0xff)));
        assert_eq!(Color::parse("#A571F4"), Some(Color::rgb(0xa5, 0x71, 0xf4)));
        assert_eq!(Color::parse("FFF"), Some(Color::WHITE));
        assert_eq!(Color::parse("#fff"), Some(Color::WHITE));
        assert_eq!(
            Color::parse("#10203040"),
            Some(Color::rgba(0x10, 0x20, 0x30, 0x40))
        );
    }

    #[test]
    fn test_parse_rgb_forms() {
        assert_eq!(Color::parse("rgb(255, 0, 0)"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(
            Color::parse("rgba(10, 20, 30, 0.5)"),
            Some(Color::rgba(10, 20, 30, 128))
        );
        // Out-of-range channels saturate instead of failing
        assert_eq!(Color::parse("rgb(300, 0, 0)"), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Color::parse("not a color"), None);
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse(""), None);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::parse("#f1caff").unwrap();
        let b = Color::parse("#A571F4").unwrap();

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(255, 255, 255);
        let mid = a.lerp(b, 0.5);
        assert!(mid.r > 120 && mid.r < 135);
    }

    #[test]
    fn test_display_roundtrip() {
        let c = Color::parse("#f1caff").unwrap();
        assert_eq!(c.to_string(), "#f1caff");
        assert_eq!(Color::parse(&c.to_string()), Some(c));
    }

    #[test]
    fn test_serde_defaults_alpha() {
        let c: Color = serde_json::from_str(r#"{"r": 255, "g": 255, "b": 255}"#).unwrap();
        assert_eq!(c, Color::WHITE);
    }
}
