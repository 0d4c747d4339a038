//! Tag markup to styled text.
//!
//! Markup such as `Testing <loud>this <green>text</green></loud>` is tokenized,
//! matched against a stack of open tags and resolved through an
//! [`AttributeTable`](styled_text::AttributeTable) into
//! [`StyledText`](styled_text::StyledText). Parsing is all-or-nothing: invalid
//! markup yields a [`MarkupError`] and no output.

pub mod perf_fixtures;

mod config;
mod entities;
mod error;
mod run_builder;
mod tag_stack;
mod tag_string;
mod tokenizer;
mod types;

#[cfg(test)]
mod test_utils;

pub use crate::config::{ParseConfig, UnclosedTagPolicy, UnknownEntityPolicy};
pub use crate::entities::{ENTITIES, escape_markup, lookup_entity};
pub use crate::error::{MarkupError, MarkupErrorCode, ParseWarning};
pub use crate::run_builder::{ParseOutcome, RunBuilder, build, build_with_config};
pub use crate::tag_string::{AttributedExt, MarkupParser, TagString, parse_markup};
pub use crate::tokenizer::tokenize;
pub use crate::types::{Span, Token, TokenStream};
