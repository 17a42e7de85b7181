//! HEX / RGB color conversion and random colors
//!
//! HEX input accepts an optional leading `#` and either the 3-digit shorthand
//! (`03F` expands to `0033FF`) or the full 6-digit form, case-insensitively.
//! HEX output is always `#RRGGBB` in uppercase.

use crate::error::ColorError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest value of the 24-bit color space (`#FFFFFF`).
const MAX_COLOR: u32 = 0xFF_FFFF;

/// An RGB color with channels in `0..=255`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl TryFrom<[i64; 3]> for Rgb {
    type Error = ColorError;

    /// Build a color from untyped channel values, rejecting anything outside `0..=255`.
    fn try_from([red, green, blue]: [i64; 3]) -> Result<Self, Self::Error> {
        let channel = |name: &'static str, value: i64| {
            u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange {
                channel: name,
                value,
            })
        };
        Ok(Self {
            red: channel("red", red)?,
            green: channel("green", green)?,
            blue: channel("blue", blue)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.red, self.green, self.blue)
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Convert a HEX string to an RGB color.
///
/// Returns `None` when the input is neither `#RGB` nor `#RRGGBB` (the `#` is optional).
///
/// # Examples
/// ```
/// use utilkit_core::core::color::{hex_to_rgb, Rgb};
/// assert_eq!(hex_to_rgb("#7F437F"), Some(Rgb::new(127, 67, 127)));
/// assert_eq!(hex_to_rgb("#3F2"), Some(Rgb::new(51, 255, 34)));
/// assert_eq!(hex_to_rgb("not a color"), None);
/// ```
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

    let [red, green, blue] = match digits.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (slot, &c) in channels.iter_mut().zip(digits) {
                // Shorthand doubles each digit: 0xA -> 0xAA
                *slot = nibble(c)? * 17;
            }
            channels
        }
        6 => {
            let mut channels = [0u8; 3];
            for (slot, pair) in channels.iter_mut().zip(digits.chunks_exact(2)) {
                *slot = nibble(pair[0])? << 4 | nibble(pair[1])?;
            }
            channels
        }
        _ => return None,
    };

    Some(Rgb { red, green, blue })
}

/// Convert an RGB color to an uppercase `#RRGGBB` string.
///
/// # Examples
/// ```
/// use utilkit_core::core::color::{rgb_to_hex, Rgb};
/// assert_eq!(rgb_to_hex(Rgb::new(15, 87, 69)), "#0F5745");
/// ```
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}

/// Like [`rgb_to_hex`] but for unchecked channel values.
pub fn rgb_to_hex_checked(channels: [i64; 3]) -> crate::Result<String> {
    let rgb = Rgb::try_from(channels)?;
    Ok(rgb_to_hex(rgb))
}

pub fn random_rgb() -> Rgb {
    random_rgb_with(&mut rand::thread_rng())
}

pub fn random_rgb_with<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb {
        red: rng.r#gen(),
        green: rng.r#gen(),
        blue: rng.r#gen(),
    }
}

pub fn random_hex() -> String {
    random_hex_with(&mut rand::thread_rng())
}

/// Pick a color uniformly from the whole 24-bit space and render it as `#RRGGBB`.
pub fn random_hex_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06X}", rng.gen_range(0..=MAX_COLOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_hex_to_rgb_full_form() {
        assert_eq!(hex_to_rgb("#7F437F"), Some(Rgb::new(127, 67, 127)));
        assert_eq!(hex_to_rgb("7f437f"), Some(Rgb::new(127, 67, 127)));
        assert_eq!(hex_to_rgb("#000000"), Some(Rgb::new(0, 0, 0)));
        assert_eq!(hex_to_rgb("#FFFFFF"), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_hex_to_rgb_shorthand() {
        assert_eq!(hex_to_rgb("#3F2"), Some(Rgb::new(51, 255, 34)));
        assert_eq!(hex_to_rgb("03f"), Some(Rgb::new(0, 51, 255)));
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed() {
        assert_eq!(hex_to_rgb("not a color"), None);
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("#"), None);
        assert_eq!(hex_to_rgb("#12345"), None);
        assert_eq!(hex_to_rgb("#1234567"), None);
        assert_eq!(hex_to_rgb("##123"), None);
        assert_eq!(hex_to_rgb("#GG0000"), None);
        assert_eq!(hex_to_rgb(" #123"), None);
        assert_eq!(hex_to_rgb("#12é"), None);
    }

    #[test]
    fn test_rgb_to_hex_pads_and_uppercases() {
        assert_eq!(rgb_to_hex(Rgb::new(15, 87, 69)), "#0F5745");
        assert_eq!(rgb_to_hex(Rgb::new(0, 0, 0)), "#000000");
        assert_eq!(rgb_to_hex(Rgb::new(255, 171, 1)), "#FFAB01");
    }

    #[test]
    fn test_rgb_to_hex_checked_rejects_out_of_range() {
        assert_eq!(rgb_to_hex_checked([15, 87, 69]).unwrap(), "#0F5745");
        assert!(rgb_to_hex_checked([256, 0, 0]).is_err());
        assert!(rgb_to_hex_checked([0, -1, 0]).is_err());
        assert_eq!(Rgb::try_from([1i64, 2, 3]), Ok(Rgb::new(1, 2, 3)));

        let err = Rgb::try_from([0i64, 0, 999]).unwrap_err();
        assert_eq!(
            err,
            ColorError::ChannelOutOfRange {
                channel: "blue",
                value: 999
            }
        );
    }

    #[test]
    fn test_round_trip_every_channel_value() {
        for v in 0..=255u8 {
            for rgb in [Rgb::new(v, 0, 0), Rgb::new(0, v, 0), Rgb::new(7, 200, v)] {
                assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)), Some(rgb));
            }
        }
    }

    #[test]
    fn test_hex_round_trip_is_uppercase() {
        for hex in ["#0f5745", "#AbCdEf", "#000000", "#ffffff"] {
            let rgb = hex_to_rgb(hex).unwrap();
            assert_eq!(rgb_to_hex(rgb), hex.to_uppercase());
        }
    }

    #[test]
    fn test_random_hex_format() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let hex = random_hex_with(&mut rng);
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
            assert!(hex_to_rgb(&hex).is_some());
        }
    }

    #[test]
    fn test_random_rgb_covers_channel_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        let samples: Vec<Rgb> = (0..20_000).map(|_| random_rgb_with(&mut rng)).collect();
        assert!(samples.iter().any(|c| c.red == 0));
        assert!(samples.iter().any(|c| c.red == 255));
        assert!(samples.iter().any(|c| c.blue == 255));
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb::new(51, 255, 34).to_string(), "[51, 255, 34]");
    }
}
