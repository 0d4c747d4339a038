use crate::config::{ParseConfig, UnclosedTagPolicy, UnknownEntityPolicy};
use crate::entities::lookup_entity;
use crate::error::{MarkupError, ParseWarning};
use crate::tag_stack::TagStack;
use crate::types::{Span, Token, TokenStream};
use styled_text::{AttributeTable, Attributes, StyledText, cascade};

/// Result of a successful parse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseOutcome {
    pub text: StyledText,
    pub warnings: Vec<ParseWarning>,
}

/// Build styled text from tokens with the default configuration.
pub fn build(stream: &TokenStream, table: &AttributeTable) -> Result<StyledText, MarkupError> {
    build_with_config(stream, table, &ParseConfig::default()).map(|outcome| outcome.text)
}

pub fn build_with_config(
    stream: &TokenStream,
    table: &AttributeTable,
    config: &ParseConfig,
) -> Result<ParseOutcome, MarkupError> {
    let mut builder = RunBuilder::with_capacity(table, *config, stream.len());
    for (token, span) in stream.iter_spanned() {
        builder.push_token(token, span)?;
    }
    builder.finish()
}

/// Token-at-a-time run builder.
///
/// Keeps the stack of open tags, resolves attributes for each text or entity
/// run, and fails on the first end tag that does not close the innermost open
/// tag. Resolved attributes are cached until the stack changes.
#[derive(Debug)]
pub struct RunBuilder<'a> {
    table: &'a AttributeTable,
    config: ParseConfig,
    stack: TagStack,
    output: StyledText,
    warnings: Vec<ParseWarning>,
    current: Option<Attributes>,
}

impl<'a> RunBuilder<'a> {
    pub fn new(table: &'a AttributeTable, config: ParseConfig) -> Self {
        Self::with_capacity(table, config, 0)
    }

    pub fn with_capacity(table: &'a AttributeTable, config: ParseConfig, tokens: usize) -> Self {
        Self {
            table,
            config,
            stack: TagStack::default(),
            output: StyledText::with_capacity(tokens),
            warnings: Vec::new(),
            current: None,
        }
    }

    pub fn push_token(&mut self, token: &Token, span: Span) -> Result<(), MarkupError> {
        match token {
            Token::Text(text) => {
                let attributes = self.current_attributes();
                self.output.push(text.as_str(), attributes);
            }
            Token::StartTag(name) => {
                self.stack.push(name, span.start);
                self.current = None;
            }
            Token::EndTag(name) => {
                let Some(open) = self.stack.current() else {
                    return Err(MarkupError::UnexpectedEndTag {
                        name: name.clone(),
                        position: span.start,
                    });
                };
                if open.name != *name {
                    return Err(MarkupError::MismatchedEndTag {
                        expected: open.name.clone(),
                        found: name.clone(),
                        position: span.start,
                    });
                }
                self.stack.pop();
                self.current = None;
            }
            Token::Entity(name) => self.push_entity(name, span)?,
        }
        Ok(())
    }

    fn push_entity(&mut self, name: &str, span: Span) -> Result<(), MarkupError> {
        if let Some(ch) = lookup_entity(name) {
            let attributes = self.current_attributes();
            self.output.push(ch.to_string(), attributes);
            return Ok(());
        }
        match self.config.unknown_entity {
            UnknownEntityPolicy::Drop => {
                log::warn!(
                    target: "markup.builder",
                    "dropping unknown entity &{name}; at byte {}",
                    span.start
                );
                self.warnings.push(ParseWarning::UnknownEntity {
                    name: name.to_string(),
                    position: span.start,
                });
            }
            UnknownEntityPolicy::Preserve => {
                let attributes = self.current_attributes();
                self.output.push(format!("&{name};"), attributes);
            }
            UnknownEntityPolicy::Reject => {
                return Err(MarkupError::UnknownEntity {
                    name: name.to_string(),
                    position: span.start,
                });
            }
        }
        Ok(())
    }

    fn current_attributes(&mut self) -> Attributes {
        self.current
            .get_or_insert_with(|| cascade::resolve(self.stack.names(), self.table))
            .clone()
    }

    /// Number of tags currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn finish(mut self) -> Result<ParseOutcome, MarkupError> {
        if let Some(innermost) = self.stack.current() {
            match self.config.unclosed_tags {
                UnclosedTagPolicy::Reject => {
                    return Err(MarkupError::UnclosedTag {
                        name: innermost.name.clone(),
                        position: innermost.position,
                    });
                }
                UnclosedTagPolicy::Allow => {
                    for open in self.stack.iter() {
                        log::warn!(
                            target: "markup.builder",
                            "tag <{}> opened at byte {} is never closed",
                            open.name,
                            open.position
                        );
                        self.warnings.push(ParseWarning::UnclosedTag {
                            name: open.name.clone(),
                            position: open.position,
                        });
                    }
                }
            }
        }
        log::debug!(
            target: "markup.builder",
            "built {} runs, max tag depth {}, {} warnings",
            self.output.runs().len(),
            self.stack.max_depth(),
            self.warnings.len()
        );
        Ok(ParseOutcome {
            text: self.output,
            warnings: self.warnings,
        })
    }
}
