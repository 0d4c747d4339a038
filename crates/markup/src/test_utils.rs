use crate::{Token, TokenStream};
use styled_text::StyledText;

pub(crate) fn token_snapshot(stream: &TokenStream) -> Vec<String> {
    stream
        .iter()
        .map(|token| match token {
            Token::Text(text) => format!("Text({text})"),
            Token::Entity(name) => format!("Entity({name})"),
            Token::StartTag(name) => format!("StartTag({name})"),
            Token::EndTag(name) => format!("EndTag({name})"),
        })
        .collect()
}

pub(crate) fn run_snapshot(text: &StyledText) -> Vec<String> {
    text.iter()
        .map(|run| {
            if run.attributes.is_empty() {
                format!("Run({:?})", run.text)
            } else {
                format!("Run({:?} {})", run.text, run.attributes)
            }
        })
        .collect()
}
