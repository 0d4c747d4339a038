use markup::{ParseWarning, Token, TokenStream};
use styled_text::StyledText;

use crate::escape_text;

/// One line per run: `Run("text" key=value ...)`.
pub fn format_runs(text: &StyledText) -> Vec<String> {
    text.iter()
        .map(|run| {
            let escaped = escape_text(&run.text);
            if run.attributes.is_empty() {
                format!("Run(\"{escaped}\")")
            } else {
                format!("Run(\"{escaped}\" {})", run.attributes)
            }
        })
        .collect()
}

pub fn format_tokens(stream: &TokenStream) -> Vec<String> {
    stream
        .iter()
        .map(|token| match token {
            Token::Text(text) => format!("Text(\"{}\")", escape_text(text)),
            Token::Entity(name) => format!("Entity({name})"),
            Token::StartTag(name) => format!("StartTag({name})"),
            Token::EndTag(name) => format!("EndTag({name})"),
        })
        .collect()
}

pub fn format_warnings(warnings: &[ParseWarning]) -> Vec<String> {
    warnings.iter().map(ToString::to_string).collect()
}
