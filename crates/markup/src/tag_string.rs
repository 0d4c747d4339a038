use crate::config::ParseConfig;
use crate::error::MarkupError;
use crate::run_builder::{ParseOutcome, build_with_config};
use crate::tokenizer::tokenize;
use crate::types::TokenStream;
use std::fmt;
use styled_text::{AttributeTable, StyledText};

/// Parse `input` with the default configuration.
///
/// ```
/// use markup::parse_markup;
/// use styled_text::{AttributeTable, Attributes};
///
/// let table: AttributeTable = [("loud", Attributes::builder().font_size(40.0).build())]
///     .into_iter()
///     .collect();
/// let text = parse_markup("Testing <loud>this</loud> thing.", &table).unwrap();
/// assert_eq!(text.text(), "Testing this thing.");
/// assert_eq!(text.runs().len(), 3);
/// ```
pub fn parse_markup(input: &str, table: &AttributeTable) -> Result<StyledText, MarkupError> {
    MarkupParser::default()
        .parse(input, table)
        .map(|outcome| outcome.text)
}

/// Reusable parser carrying a [`ParseConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarkupParser {
    config: ParseConfig,
}

impl MarkupParser {
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    pub fn parse(&self, input: &str, table: &AttributeTable) -> Result<ParseOutcome, MarkupError> {
        let stream = tokenize(input)?;
        build_with_config(&stream, table, &self.config)
    }
}

/// A string of tag markup, kept raw until it is attributed.
///
/// Tags are written `<tag>...</tag>` and may nest; inner tags win on
/// conflicting attributes. `&lt;`, `&gt;` and `&amp;` escape `<`, `>` and `&`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TagString {
    string: String,
}

impl TagString {
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }

    pub fn into_string(self) -> String {
        self.string
    }

    pub fn tokenize(&self) -> Result<TokenStream, MarkupError> {
        tokenize(&self.string)
    }

    /// Styled text for this markup, or an error if the markup is invalid
    /// (for example an end tag that does not match the open tag).
    pub fn attributed(&self, table: &AttributeTable) -> Result<StyledText, MarkupError> {
        parse_markup(&self.string, table)
    }

    pub fn attributed_with(
        &self,
        table: &AttributeTable,
        config: &ParseConfig,
    ) -> Result<ParseOutcome, MarkupError> {
        MarkupParser::new(*config).parse(&self.string, table)
    }
}

impl From<&str> for TagString {
    fn from(string: &str) -> Self {
        Self::new(string)
    }
}

impl From<String> for TagString {
    fn from(string: String) -> Self {
        Self::new(string)
    }
}

impl AsRef<str> for TagString {
    fn as_ref(&self) -> &str {
        &self.string
    }
}

impl fmt::Display for TagString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

/// `attributed` directly on string slices.
pub trait AttributedExt {
    fn attributed(&self, table: &AttributeTable) -> Result<StyledText, MarkupError>;
}

impl AttributedExt for str {
    fn attributed(&self, table: &AttributeTable) -> Result<StyledText, MarkupError> {
        parse_markup(self, table)
    }
}
