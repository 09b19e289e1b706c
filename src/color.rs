/// Hex color type and validation.
use std::fmt;

use rand::{Rng, RngExt};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A 24-bit RGB color in its canonical `#RRGGBB` form (uppercase digits).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Builds a color from six independent uniform draws over `0-9A-F`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut hex = String::with_capacity(7);
        hex.push('#');
        for _ in 0..6 {
            hex.push(HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())] as char);
        }
        debug_assert!(is_valid_hex(&hex));
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Channel bytes, used only to paint the swatch.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or_default()
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }
}

#[cfg(test)]
impl Color {
    pub(crate) fn from_hex(hex: &str) -> Self {
        assert!(is_valid_hex(hex), "not a hex color: {hex}");
        Self(hex.to_ascii_uppercase())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
