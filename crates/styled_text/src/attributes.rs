//! Text attribute keys, values and attribute sets.
//!
//! Keys cover the attributes a rich-text surface typically understands, plus
//! `Custom` for anything else. Attribute sets are ordered by key so that
//! iteration, snapshots and serialized output are deterministic.

use crate::values::{Color, parse_color, parse_integer, parse_number};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    Font,
    FontSize,
    ForegroundColor,
    BackgroundColor,
    Kern,
    Ligature,
    UnderlineStyle,
    UnderlineColor,
    StrikethroughStyle,
    StrikethroughColor,
    StrokeColor,
    StrokeWidth,
    BaselineOffset,
    Obliqueness,
    Expansion,
    Link,
    TextEffect,
    Custom(String),
}

/// The value shape a key expects when parsed from text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
    Integer,
    Color,
}

impl AttributeKey {
    /// Map a property name (`color`, `font-size`, ...) to a key.
    ///
    /// Names are matched ASCII case-insensitively; unrecognized names become
    /// `Custom` with the name lowercased.
    pub fn from_property_name(name: &str) -> Self {
        let name = name.trim().to_ascii_lowercase();
        match name.as_str() {
            "font" | "font-family" => Self::Font,
            "font-size" => Self::FontSize,
            "color" | "foreground-color" => Self::ForegroundColor,
            "background-color" => Self::BackgroundColor,
            "kern" | "letter-spacing" => Self::Kern,
            "ligature" => Self::Ligature,
            "underline" | "underline-style" => Self::UnderlineStyle,
            "underline-color" => Self::UnderlineColor,
            "strikethrough" | "strikethrough-style" => Self::StrikethroughStyle,
            "strikethrough-color" => Self::StrikethroughColor,
            "stroke-color" => Self::StrokeColor,
            "stroke-width" => Self::StrokeWidth,
            "baseline-offset" => Self::BaselineOffset,
            "obliqueness" => Self::Obliqueness,
            "expansion" => Self::Expansion,
            "link" => Self::Link,
            "text-effect" => Self::TextEffect,
            _ => Self::Custom(name),
        }
    }

    /// Canonical property name; `from_property_name(key.name())` returns `key`.
    pub fn name(&self) -> &str {
        match self {
            Self::Font => "font",
            Self::FontSize => "font-size",
            Self::ForegroundColor => "foreground-color",
            Self::BackgroundColor => "background-color",
            Self::Kern => "kern",
            Self::Ligature => "ligature",
            Self::UnderlineStyle => "underline-style",
            Self::UnderlineColor => "underline-color",
            Self::StrikethroughStyle => "strikethrough-style",
            Self::StrikethroughColor => "strikethrough-color",
            Self::StrokeColor => "stroke-color",
            Self::StrokeWidth => "stroke-width",
            Self::BaselineOffset => "baseline-offset",
            Self::Obliqueness => "obliqueness",
            Self::Expansion => "expansion",
            Self::Link => "link",
            Self::TextEffect => "text-effect",
            Self::Custom(name) => name,
        }
    }

    pub fn value_kind(&self) -> ValueKind {
        match self {
            Self::ForegroundColor
            | Self::BackgroundColor
            | Self::UnderlineColor
            | Self::StrikethroughColor
            | Self::StrokeColor => ValueKind::Color,
            Self::FontSize
            | Self::Kern
            | Self::StrokeWidth
            | Self::BaselineOffset
            | Self::Obliqueness
            | Self::Expansion => ValueKind::Number,
            Self::Ligature | Self::UnderlineStyle | Self::StrikethroughStyle => {
                ValueKind::Integer
            }
            Self::Font | Self::Link | Self::TextEffect | Self::Custom(_) => ValueKind::Text,
        }
    }

    /// Parse a raw declaration value into the shape this key expects.
    pub fn parse_value(&self, raw: &str) -> Option<AttributeValue> {
        match self.value_kind() {
            ValueKind::Color => parse_color(raw).map(AttributeValue::Color),
            ValueKind::Number => parse_number(raw).map(AttributeValue::Number),
            ValueKind::Integer => parse_integer(raw).map(AttributeValue::Integer),
            ValueKind::Text => {
                let text = unquote(raw.trim());
                (!text.is_empty()).then(|| AttributeValue::Text(text.to_string()))
            }
        }
    }
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    s
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttributeValue {
    Text(String),
    Number(f32),
    Integer(i64),
    Color(Color),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Number(num) => write!(f, "{num}"),
            Self::Integer(num) => write!(f, "{num}"),
            Self::Color(color) => write!(f, "{color}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Color> for AttributeValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

/// A set of text attributes, one value per key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    entries: BTreeMap<AttributeKey, AttributeValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AttributesBuilder {
        AttributesBuilder::new()
    }

    pub fn get(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.entries.get(key)
    }

    pub fn insert(
        &mut self,
        key: AttributeKey,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.entries.insert(key, value.into())
    }

    pub fn remove(&mut self, key: &AttributeKey) -> Option<AttributeValue> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &AttributeKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKey, &AttributeValue)> + '_ {
        self.entries.iter()
    }

    /// Overlay `other` onto `self`: every key in `other` overwrites the value
    /// already present, keys only in `self` are kept.
    pub fn merge_from(&mut self, other: &Attributes) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }
}

impl FromIterator<(AttributeKey, AttributeValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, AttributeValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(AttributeKey, AttributeValue)> for Attributes {
    fn extend<I: IntoIterator<Item = (AttributeKey, AttributeValue)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a AttributeKey, &'a AttributeValue);
    type IntoIter = std::collections::btree_map::Iter<'a, AttributeKey, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Space-separated `name=value` pairs in key order; empty sets print nothing.
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Attributes {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.name(), value)?;
        }
        map.end()
    }
}

/// Chaining builder for an attribute set.
///
/// ```
/// use styled_text::{AttributeKey, Attributes, Color};
///
/// let loud = Attributes::builder()
///     .font("Helvetica-Bold")
///     .font_size(40.0)
///     .color(Color::rgb(0, 128, 0))
///     .build();
/// assert_eq!(loud.len(), 3);
/// assert!(loud.contains_key(&AttributeKey::ForegroundColor));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AttributesBuilder {
    attributes: Attributes,
}

impl AttributesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Attributes {
        self.attributes
    }

    fn set(mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn font(self, font: impl Into<String>) -> Self {
        self.set(AttributeKey::Font, font.into())
    }

    pub fn font_size(self, points: f32) -> Self {
        self.set(AttributeKey::FontSize, points)
    }

    /// Foreground color.
    pub fn color(self, color: Color) -> Self {
        self.set(AttributeKey::ForegroundColor, color)
    }

    pub fn background_color(self, color: Color) -> Self {
        self.set(AttributeKey::BackgroundColor, color)
    }

    /// Points added to the default kerning; 0 disables kerning.
    pub fn kern(self, points: f32) -> Self {
        self.set(AttributeKey::Kern, points)
    }

    pub fn ligature(self, ligature: i64) -> Self {
        self.set(AttributeKey::Ligature, ligature)
    }

    pub fn underline_style(self, style: i64) -> Self {
        self.set(AttributeKey::UnderlineStyle, style)
    }

    pub fn underline_color(self, color: Color) -> Self {
        self.set(AttributeKey::UnderlineColor, color)
    }

    pub fn strikethrough_style(self, style: i64) -> Self {
        self.set(AttributeKey::StrikethroughStyle, style)
    }

    pub fn strikethrough_color(self, color: Color) -> Self {
        self.set(AttributeKey::StrikethroughColor, color)
    }

    pub fn stroke_color(self, color: Color) -> Self {
        self.set(AttributeKey::StrokeColor, color)
    }

    /// Percent of the font point size. Positive strokes only, negative
    /// strokes and fills.
    pub fn stroke_width(self, width: f32) -> Self {
        self.set(AttributeKey::StrokeWidth, width)
    }

    pub fn baseline_offset(self, points: f32) -> Self {
        self.set(AttributeKey::BaselineOffset, points)
    }

    pub fn obliqueness(self, skew: f32) -> Self {
        self.set(AttributeKey::Obliqueness, skew)
    }

    /// Log of the expansion factor applied to glyphs.
    pub fn expansion(self, expansion: f32) -> Self {
        self.set(AttributeKey::Expansion, expansion)
    }

    pub fn link(self, url: impl Into<String>) -> Self {
        self.set(AttributeKey::Link, url.into())
    }

    pub fn text_effect(self, effect: impl Into<String>) -> Self {
        self.set(AttributeKey::TextEffect, effect.into())
    }

    pub fn custom(self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.set(AttributeKey::Custom(name.to_string()), value)
    }
}
