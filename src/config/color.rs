use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use palette::Srgb;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Highlight color for gift names, written as hex (`"#8B5CF6"`, `"F59"`) or as an SVG
/// color name (`"purple"`). Serialized back as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub Srgb<u8>);

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    #[must_use]
    pub const fn components(self) -> (u8, u8, u8) {
        (self.0.red, self.0.green, self.0.blue)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let (red, green, blue) = self.components();
        write!(f, "#{red:02X}{green:02X}{blue:02X}")
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if let Ok(color) = text.parse::<Srgb<u8>>() {
            return Ok(Self(color));
        }

        palette::named::from_str(&text.to_ascii_lowercase())
            .map(|named| Self(Srgb::from_format(named)))
            .ok_or_else(|| format!("invalid color '{text}': expected a hex color like '#8B5CF6' or a named color like 'purple'"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
