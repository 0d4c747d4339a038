use std::fmt;

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Formats as `#rrggbbaa`, which `parse_color` reads back.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a color value: `#rgb`, `#rrggbb`, `#rrggbbaa` or one of the basic
/// named colors. Case-insensitive, surrounding whitespace ignored.
pub fn parse_color(value: &str) -> Option<Color> {
    let s = value.trim().to_ascii_lowercase();
    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        return match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(Color::rgb(r, g, b))
            }
            6 => Some(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        };
    }

    let named = match s.as_str() {
        "black" => Color::BLACK,
        "blue" => Color::rgb(0, 0, 255),
        "cyan" => Color::rgb(0, 255, 255),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        "green" => Color::rgb(0, 128, 0),
        "magenta" => Color::rgb(255, 0, 255),
        "maroon" => Color::rgb(128, 0, 0),
        "navy" => Color::rgb(0, 0, 128),
        "olive" => Color::rgb(128, 128, 0),
        "orange" => Color::rgb(255, 165, 0),
        "purple" => Color::rgb(128, 0, 128),
        "red" => Color::rgb(255, 0, 0),
        "silver" => Color::rgb(192, 192, 192),
        "teal" => Color::rgb(0, 128, 128),
        "transparent" => Color::TRANSPARENT,
        "white" => Color::WHITE,
        "yellow" => Color::rgb(255, 255, 0),
        _ => return None,
    };
    Some(named)
}

/// Parse a point value such as `"14"`, `"12.5pt"` or `"-1px"`.
///
/// `px` and `pt` are both accepted and treated as points; the rendering
/// surface decides what a point is. Non-finite numbers are rejected.
pub fn parse_number(value: &str) -> Option<f32> {
    let v = value.trim();
    let digits = v
        .strip_suffix("px")
        .or_else(|| v.strip_suffix("pt"))
        .unwrap_or(v)
        .trim();
    let num = digits.parse::<f32>().ok()?;
    num.is_finite().then_some(num)
}

pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}
