/// Named entities understood by the markup: exactly `lt`, `gt` and `amp`.
///
/// Names are case-sensitive; `&LT;` is unknown.
pub const ENTITIES: &[(&str, char)] = &[("lt", '<'), ("gt", '>'), ("amp", '&')];

pub fn lookup_entity(name: &str) -> Option<char> {
    ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, ch)| *ch)
}

/// Escape text so that it tokenizes back to a single text run.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_the_three_named_entities() {
        assert_eq!(lookup_entity("lt"), Some('<'));
        assert_eq!(lookup_entity("gt"), Some('>'));
        assert_eq!(lookup_entity("amp"), Some('&'));
    }

    #[test]
    fn other_names_are_unknown() {
        for name in ["quot", "nbsp", "LT", "#60", "", "lt "] {
            assert_eq!(lookup_entity(name), None, "expected {name:?} to be unknown");
        }
    }

    #[test]
    fn escape_markup_covers_structural_characters() {
        assert_eq!(escape_markup("a<b>&c"), "a&lt;b&gt;&amp;c");
        assert_eq!(escape_markup("plain ünïcode"), "plain ünïcode");
    }
}
