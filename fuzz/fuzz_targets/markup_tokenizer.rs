#![no_main]

use libfuzzer_sys::fuzz_target;
use markup::{Token, tokenize};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(stream) = tokenize(input) else {
        return;
    };
    let mut cursor = 0usize;
    for (token, span) in stream.iter_spanned() {
        assert!(span.start >= cursor, "spans must not overlap");
        assert!(span.end <= input.len(), "span past end of input");
        assert!(input.is_char_boundary(span.start) && input.is_char_boundary(span.end));
        match token {
            Token::Text(text) => {
                assert!(!text.is_empty(), "empty text token");
                assert_eq!(&input[span.start..span.end], text);
            }
            Token::StartTag(name) | Token::EndTag(name) | Token::Entity(name) => {
                assert!(!name.is_empty(), "empty name for {token:?}");
            }
        }
        cursor = span.end;
    }
});
