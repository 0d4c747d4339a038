//! Markup tokenizer.
//!
//! Grammar:
//! - `<name>` opens a tag and `</name>` closes it. The name is every byte up to
//!   the next `>`, taken verbatim (no trimming, no case folding, no attributes).
//! - `&name;` is an entity reference. The name is every byte up to the next `;`.
//! - Everything else is text.
//!
//! A `<` without `>` or a `&` without `;` fails the whole input, as do empty
//! tag and entity names. The tokenizer never returns partial output.
use crate::error::MarkupError;
use crate::types::{Span, Token, TokenStream};
use memchr::{memchr, memchr2};

/// Tokenize `input` into a spanned token stream.
pub fn tokenize(input: &str) -> Result<TokenStream, MarkupError> {
    let bytes = input.as_bytes();
    let mut out = TokenStream::with_capacity(estimate_tokens(bytes));
    let mut i = 0;
    // Invariant: we only cut at ASCII structural bytes (`<`, `/`, `>`, `&`, `;`),
    // which never occur inside multi-byte UTF-8 sequences, so every slice endpoint
    // is a char boundary.
    while i < bytes.len() {
        let next = memchr2(b'<', b'&', &bytes[i..]).map_or(bytes.len(), |rel| i + rel);
        if next > i {
            debug_assert!(input.is_char_boundary(i));
            debug_assert!(input.is_char_boundary(next));
            emit(&mut out, Token::Text(input[i..next].to_string()), Span::new(i, next));
        }
        i = next;
        if i >= bytes.len() {
            break;
        }
        i = if bytes[i] == b'<' {
            scan_tag(input, i, &mut out)?
        } else {
            scan_entity(input, i, &mut out)?
        };
    }
    Ok(out)
}

/// Scan a tag starting at the `<` at `start`; returns the offset after `>`.
fn scan_tag(input: &str, start: usize, out: &mut TokenStream) -> Result<usize, MarkupError> {
    let bytes = input.as_bytes();
    debug_assert_eq!(bytes[start], b'<');
    let mut name_start = start + 1;
    let is_end_tag = bytes.get(name_start) == Some(&b'/');
    if is_end_tag {
        name_start += 1;
    }
    let Some(rel) = memchr(b'>', &bytes[name_start..]) else {
        return Err(MarkupError::UnterminatedTag { position: start });
    };
    let name_end = name_start + rel;
    if name_end == name_start {
        return Err(MarkupError::EmptyTagName { position: start });
    }
    let name = input[name_start..name_end].to_string();
    let span = Span::new(start, name_end + 1);
    let token = if is_end_tag {
        Token::EndTag(name)
    } else {
        Token::StartTag(name)
    };
    emit(out, token, span);
    Ok(span.end)
}

/// Scan an entity starting at the `&` at `start`; returns the offset after `;`.
fn scan_entity(input: &str, start: usize, out: &mut TokenStream) -> Result<usize, MarkupError> {
    let bytes = input.as_bytes();
    debug_assert_eq!(bytes[start], b'&');
    let name_start = start + 1;
    let Some(rel) = memchr(b';', &bytes[name_start..]) else {
        return Err(MarkupError::UnterminatedEntity { position: start });
    };
    let name_end = name_start + rel;
    if name_end == name_start {
        return Err(MarkupError::EmptyEntityName { position: start });
    }
    let span = Span::new(start, name_end + 1);
    emit(out, Token::Entity(input[name_start..name_end].to_string()), span);
    Ok(span.end)
}

fn emit(out: &mut TokenStream, token: Token, span: Span) {
    log::trace!(target: "markup.tokenizer", "emit token: {token:?} @ {}..{}", span.start, span.end);
    out.push(token, span);
}

// Each structural byte starts at most one token and is followed by at most one
// text run, so this bounds the token count without over-reserving on plain text.
fn estimate_tokens(bytes: &[u8]) -> usize {
    let structural = memchr::memchr2_iter(b'<', b'&', bytes).count();
    structural.saturating_mul(2).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkupErrorCode;
    use crate::test_utils::token_snapshot;

    fn snapshot(input: &str) -> Vec<String> {
        let stream = tokenize(input).unwrap_or_else(|err| panic!("tokenize {input:?}: {err}"));
        token_snapshot(&stream)
    }

    fn error_code(input: &str) -> MarkupErrorCode {
        match tokenize(input) {
            Ok(stream) => panic!("expected {input:?} to fail, got: {stream:?}"),
            Err(err) => err.code(),
        }
    }

    #[test]
    fn tokenize_plain_text_is_one_token() {
        assert_eq!(snapshot("just words"), vec!["Text(just words)"]);
    }

    #[test]
    fn tokenize_empty_input_is_empty_stream() {
        let stream = tokenize("").expect("empty input");
        assert!(stream.is_empty());
    }

    #[test]
    fn tokenize_tags_and_text_in_source_order() {
        assert_eq!(
            snapshot("Testing <loud>this <green>text</green></loud> thing."),
            vec![
                "Text(Testing )",
                "StartTag(loud)",
                "Text(this )",
                "StartTag(green)",
                "Text(text)",
                "EndTag(green)",
                "EndTag(loud)",
                "Text( thing.)",
            ]
        );
    }

    #[test]
    fn tokenize_entities_split_text_runs() {
        assert_eq!(
            snapshot("a &lt; b &amp; c &gt; d"),
            vec![
                "Text(a )",
                "Entity(lt)",
                "Text( b )",
                "Entity(amp)",
                "Text( c )",
                "Entity(gt)",
                "Text( d)",
            ]
        );
    }

    #[test]
    fn tokenize_keeps_tag_names_verbatim() {
        assert_eq!(
            snapshot("<Big Font>x</Big Font>"),
            vec!["StartTag(Big Font)", "Text(x)", "EndTag(Big Font)"]
        );
    }

    #[test]
    fn tokenize_tag_name_runs_to_first_closing_bracket() {
        assert_eq!(snapshot("<a<b>"), vec!["StartTag(a<b)"]);
    }

    #[test]
    fn tokenize_unknown_entity_names_are_still_tokens() {
        assert_eq!(
            snapshot("a &foo; b"),
            vec!["Text(a )", "Entity(foo)", "Text( b)"]
        );
    }

    #[test]
    fn tokenize_stray_closing_characters_are_text() {
        assert_eq!(snapshot("1 > 0; ok"), vec!["Text(1 > 0; ok)"]);
    }

    #[test]
    fn tokenize_preserves_utf8_text() {
        assert_eq!(
            snapshot("¡Hola <b>café</b> 😊"),
            vec!["Text(¡Hola )", "StartTag(b)", "Text(café)", "EndTag(b)", "Text( 😊)"]
        );
    }

    #[test]
    fn tokenize_records_byte_spans() {
        let stream = tokenize("é<b>x</b>").expect("valid markup");
        let spans: Vec<(usize, usize)> = stream.spans().iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(spans, vec![(0, 2), (2, 5), (5, 6), (6, 10)]);
    }

    #[test]
    fn tokenize_rejects_missing_closing_bracket() {
        assert_eq!(error_code("text <b"), MarkupErrorCode::UnterminatedTag);
        assert_eq!(error_code("<"), MarkupErrorCode::UnterminatedTag);
        assert_eq!(error_code("</b"), MarkupErrorCode::UnterminatedTag);
    }

    #[test]
    fn tokenize_rejects_empty_tag_names() {
        assert_eq!(error_code("<>"), MarkupErrorCode::EmptyTagName);
        assert_eq!(error_code("a</>b"), MarkupErrorCode::EmptyTagName);
    }

    #[test]
    fn tokenize_rejects_malformed_entities() {
        assert_eq!(error_code("AT&T"), MarkupErrorCode::UnterminatedEntity);
        assert_eq!(error_code("&"), MarkupErrorCode::UnterminatedEntity);
        assert_eq!(error_code("a &; b"), MarkupErrorCode::EmptyEntityName);
    }

    #[test]
    fn tokenize_error_reports_offset_of_opening_byte() {
        let err = tokenize("ok <b>fine</b> <oops").expect_err("unterminated tag");
        assert_eq!(err.position(), 15);
    }

    #[test]
    fn tokenize_handles_large_input_linearly() {
        let mut input = String::new();
        for _ in 0..50_000 {
            input.push_str("<b>bold</b> &amp; plain ");
        }
        let stream = tokenize(&input).expect("large markup");
        assert_eq!(stream.len(), 50_000 * 6);
    }
}
