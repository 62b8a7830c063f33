use crate::util::range::NumRange;
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, ops, str::FromStr};

/// An RGB color. Values are stored as floats between 0 and 1 (inclusive).
/// This uses f32 because the extra precision from f64 is pointless.
///
/// Colors serialize as an HTML color code (`#rrggbb`), so they can be written
/// by hand in config files.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color3 {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color3 {
    pub const WHITE: Self = Self::new_int(255, 255, 255);
    pub const BLACK: Self = Self::new_int(0, 0, 0);

    /// The valid range of values for each component in RGB
    const COMPONENT_RANGE: NumRange<f32> = NumRange::new(0.0, 1.0);

    /// Create a new RGB color with components in the range [0.0, 1.0]. Panic
    /// if any of the components are out of range
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        fn check_component(component_name: &str, value: f32) -> f32 {
            if Color3::COMPONENT_RANGE.contains(value) {
                value
            } else {
                panic!(
                    "Color component {} must be in {}, but was {}",
                    component_name,
                    Color3::COMPONENT_RANGE,
                    value
                )
            }
        }

        Self {
            red: check_component("red", red),
            green: check_component("green", green),
            blue: check_component("blue", blue),
        }
    }

    /// Create a new RGB color from integer components in the [0,255] range.
    /// Usable in const context, which needs float arithmetic in `const fn`
    /// (Rust 1.82+).
    pub const fn new_int(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
        }
    }

    /// Convert this color to a set of 3 bytes: `(red, green, blue)`. Each
    /// component is rounded to the nearest byte value.
    pub fn to_ints(self) -> (u8, u8, u8) {
        (
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
        )
    }

    /// Convert this color to an HTML color code: `#rrggbb`
    pub fn to_html(self) -> String {
        let (r, g, b) = self.to_ints();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Parse an HTML color code. The leading `#` is optional, but all six hex
    /// digits are required.
    pub fn from_html(code: &str) -> anyhow::Result<Self> {
        let digits = code.strip_prefix('#').unwrap_or(code);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(anyhow!(
                "expected color code of the form #rrggbb, got {:?}",
                code
            ));
        }

        let component = |start: usize| {
            u8::from_str_radix(&digits[start..start + 2], 16).with_context(
                || format!("invalid hex digits in color code {:?}", code),
            )
        };
        Ok(Self::new_int(component(0)?, component(2)?, component(4)?))
    }
}

impl Default for Color3 {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Color3 {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_html(s)
    }
}

impl TryFrom<String> for Color3 {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_html(&value)
    }
}

impl From<Color3> for String {
    fn from(color: Color3) -> Self {
        color.to_html()
    }
}

// Scale a color by a constant
impl ops::Mul<f32> for Color3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        let red = Self::COMPONENT_RANGE.clamp(self.red * rhs);
        let green = Self::COMPONENT_RANGE.clamp(self.green * rhs);
        let blue = Self::COMPONENT_RANGE.clamp(self.blue * rhs);
        // It's safe to bypass the constructor here because we just clamped
        // all 3 components to the valid range
        Self { red, green, blue }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_new_int_const() {
        const ORANGE: Color3 = Color3::new_int(255, 128, 0);
        assert_eq!(ORANGE.to_ints(), (255, 128, 0));
        assert_eq!(Color3::WHITE.to_ints(), (255, 255, 255));
        assert_eq!(Color3::BLACK.to_ints(), (0, 0, 0));
    }

    #[test]
    fn test_html() {
        let color = Color3::new_int(95, 168, 211);
        assert_eq!(color.to_html(), "#5fa8d3");
        assert_eq!(Color3::from_html("#5fa8d3").unwrap(), color);
        assert_eq!(Color3::from_html("5FA8D3").unwrap(), color);

        assert!(Color3::from_html("#5fa8d").is_err());
        assert!(Color3::from_html("#5fa8zz").is_err());
        assert!(Color3::from_html("").is_err());
    }

    #[test]
    fn test_scale() {
        let color = Color3::new_int(200, 100, 0);
        assert_eq!((color * 0.5).to_ints(), (100, 50, 0));
        // Brightening clamps at full intensity
        assert_eq!((color * 2.0).to_ints(), (255, 200, 0));
        assert_eq!(color * 0.0, Color3::BLACK);
    }

    #[test]
    #[should_panic(expected = "Color component green must be in [0, 1]")]
    fn test_new_out_of_range() {
        Color3::new(0.5, 1.5, 0.5);
    }

    #[test]
    fn test_serde() {
        assert_tokens(&Color3::new_int(255, 0, 128), &[Token::Str("#ff0080")]);
        assert_de_tokens_error::<Color3>(
            &[Token::Str("red")],
            "expected color code of the form #rrggbb, got \"red\"",
        );
    }
}
