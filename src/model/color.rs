use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color as callers send it: `{"red": 255, "green": 0, "blue": 0}`.
/// Out-of-range channels fail deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::rgb(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::rgb(255, 255, 255);
    pub const RED: RgbColor = RgbColor::rgb(255, 0, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| hex.get(i..i + 2).and_then(|s| u8::from_str_radix(s, 16).ok());
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::BLACK
    }
}
