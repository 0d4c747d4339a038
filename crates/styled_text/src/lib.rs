//! Attribute sets, attribute tables and run-attributed text.
//!
//! This crate is the model the markup parser resolves into: a tag name maps
//! to an [`Attributes`] set through an [`AttributeTable`], nested tags are
//! combined by [`cascade::resolve`], and the result is a [`StyledText`] made
//! of [`StyledRun`]s.

pub mod attributes;
pub mod cascade;
pub mod styled;
pub mod syntax;
pub mod table;
pub mod values;

pub use attributes::{AttributeKey, AttributeValue, Attributes, AttributesBuilder, ValueKind};
pub use cascade::resolve;
pub use styled::{StyledRun, StyledText, StyledTextBuilder};
pub use syntax::{Declaration, Rule, Stylesheet, parse_declarations, parse_stylesheet};
pub use table::AttributeTable;
pub use values::{Color, parse_color, parse_integer, parse_number};
