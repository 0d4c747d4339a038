//! Parse errors and warnings.
//!
//! Every error aborts the whole parse; no partial output is returned. Warnings
//! accompany a successful parse.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkupErrorCode {
    UnterminatedTag,
    EmptyTagName,
    UnterminatedEntity,
    EmptyEntityName,
    UnexpectedEndTag,
    MismatchedEndTag,
    UnknownEntity,
    UnclosedTag,
}

impl MarkupErrorCode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnterminatedTag => "unterminated tag",
            Self::EmptyTagName => "empty tag name",
            Self::UnterminatedEntity => "unterminated entity",
            Self::EmptyEntityName => "empty entity name",
            Self::UnexpectedEndTag => "unexpected end tag",
            Self::MismatchedEndTag => "mismatched end tag",
            Self::UnknownEntity => "unknown entity",
            Self::UnclosedTag => "unclosed tag",
        }
    }
}

impl fmt::Display for MarkupErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a markup string was rejected. Positions are byte offsets into the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkupError {
    /// `<` without a closing `>`.
    UnterminatedTag { position: usize },
    /// `<>` or `</>`.
    EmptyTagName { position: usize },
    /// `&` without a closing `;`.
    UnterminatedEntity { position: usize },
    /// `&;`.
    EmptyEntityName { position: usize },
    /// End tag while no tag is open.
    UnexpectedEndTag { name: String, position: usize },
    /// End tag that does not close the innermost open tag.
    MismatchedEndTag {
        expected: String,
        found: String,
        position: usize,
    },
    /// Entity outside the built-in table, under a rejecting policy.
    UnknownEntity { name: String, position: usize },
    /// Tag still open at end of input, under a rejecting policy.
    UnclosedTag { name: String, position: usize },
}

impl MarkupError {
    pub fn code(&self) -> MarkupErrorCode {
        match self {
            Self::UnterminatedTag { .. } => MarkupErrorCode::UnterminatedTag,
            Self::EmptyTagName { .. } => MarkupErrorCode::EmptyTagName,
            Self::UnterminatedEntity { .. } => MarkupErrorCode::UnterminatedEntity,
            Self::EmptyEntityName { .. } => MarkupErrorCode::EmptyEntityName,
            Self::UnexpectedEndTag { .. } => MarkupErrorCode::UnexpectedEndTag,
            Self::MismatchedEndTag { .. } => MarkupErrorCode::MismatchedEndTag,
            Self::UnknownEntity { .. } => MarkupErrorCode::UnknownEntity,
            Self::UnclosedTag { .. } => MarkupErrorCode::UnclosedTag,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Self::UnterminatedTag { position }
            | Self::EmptyTagName { position }
            | Self::UnterminatedEntity { position }
            | Self::EmptyEntityName { position }
            | Self::UnexpectedEndTag { position, .. }
            | Self::MismatchedEndTag { position, .. }
            | Self::UnknownEntity { position, .. }
            | Self::UnclosedTag { position, .. } => *position,
        }
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedTag { position } => {
                write!(f, "tag at byte {position} is missing its closing '>'")
            }
            Self::EmptyTagName { position } => write!(f, "empty tag name at byte {position}"),
            Self::UnterminatedEntity { position } => {
                write!(f, "entity at byte {position} is missing its closing ';'")
            }
            Self::EmptyEntityName { position } => {
                write!(f, "empty entity name at byte {position}")
            }
            Self::UnexpectedEndTag { name, position } => {
                write!(f, "end tag </{name}> at byte {position} has no open tag")
            }
            Self::MismatchedEndTag {
                expected,
                found,
                position,
            } => write!(
                f,
                "end tag </{found}> at byte {position} does not close <{expected}>"
            ),
            Self::UnknownEntity { name, position } => {
                write!(f, "unknown entity &{name}; at byte {position}")
            }
            Self::UnclosedTag { name, position } => {
                write!(f, "tag <{name}> opened at byte {position} is never closed")
            }
        }
    }
}

impl std::error::Error for MarkupError {}

/// Non-fatal findings from a successful parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseWarning {
    /// Entity dropped because it is not in the built-in table.
    UnknownEntity { name: String, position: usize },
    /// Tag left open at end of input.
    UnclosedTag { name: String, position: usize },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEntity { name, position } => {
                write!(f, "dropped unknown entity &{name}; at byte {position}")
            }
            Self::UnclosedTag { name, position } => {
                write!(f, "tag <{name}> opened at byte {position} is never closed")
            }
        }
    }
}
