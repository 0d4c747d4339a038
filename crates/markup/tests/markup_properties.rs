use markup::{MarkupError, MarkupErrorCode, ParseWarning, escape_markup, parse_markup};
use styled_text::{AttributeKey, AttributeTable, AttributeValue, Attributes, Color, StyledText};

fn table() -> AttributeTable {
    [
        ("A", Attributes::builder().font("X").build()),
        (
            "B",
            Attributes::builder()
                .font("Y")
                .color(Color::rgb(0, 0, 255))
                .build(),
        ),
        ("C", Attributes::builder().kern(1.5).build()),
    ]
    .into_iter()
    .collect()
}

fn parse_ok(input: &str) -> StyledText {
    parse_markup(input, &table()).unwrap_or_else(|err| panic!("expected {input:?} to parse: {err}"))
}

#[test]
fn text_without_markup_is_one_plain_run() {
    let text = parse_ok("no tags, no entities; just > text");
    assert_eq!(text.runs().len(), 1);
    assert_eq!(text.runs()[0].text, "no tags, no entities; just > text");
    assert!(text.runs()[0].attributes.is_empty());
}

#[test]
fn nesting_precedence_inner_font_wins() {
    let text = parse_ok("<A><B>text</B></A>");
    assert_eq!(text.runs().len(), 1);
    let attrs = &text.runs()[0].attributes;
    assert_eq!(attrs.len(), 2);
    assert_eq!(
        attrs.get(&AttributeKey::Font),
        Some(&AttributeValue::Text("Y".to_string()))
    );
    assert_eq!(
        attrs.get(&AttributeKey::ForegroundColor),
        Some(&AttributeValue::Color(Color::rgb(0, 0, 255)))
    );
}

#[test]
fn mismatched_tags_fail() {
    let result = parse_markup("<A>text</B>", &table());
    assert!(
        matches!(result, Err(MarkupError::MismatchedEndTag { .. })),
        "expected mismatch failure, got: {result:?}"
    );
}

#[test]
fn unclosed_tag_succeeds_with_open_attributes() {
    let text = parse_ok("<A>text");
    assert_eq!(text.runs().len(), 1);
    assert_eq!(text.runs()[0].text, "text");
    assert_eq!(
        text.runs()[0].attributes,
        Attributes::builder().font("X").build()
    );
}

#[test]
fn entity_runs_concatenate_to_literal_text() {
    let text = parse_ok("a &lt; b &amp; c &gt; d");
    let runs: Vec<&str> = text.iter().map(|run| run.text.as_str()).collect();
    assert_eq!(runs, vec!["a ", "<", " b ", "&", " c ", ">", " d"]);
    assert_eq!(text.text(), "a < b & c > d");
    assert_eq!(text.coalesced().runs().len(), 1);
}

#[test]
fn unknown_entity_contributes_nothing() {
    assert_eq!(parse_ok("a &foo; b").text(), "a  b");
}

#[test]
fn escaped_text_parses_back_to_itself() {
    let source = "if a < b && c > d { return; }";
    let text = parse_ok(&escape_markup(source));
    assert_eq!(text.text(), source);
    assert!(text.iter().all(|run| run.attributes.is_empty()));
}

#[test]
fn failure_position_points_into_input() {
    let input = "<A>one</A> <B>two</C>";
    let err = parse_markup(input, &table()).expect_err("mismatch");
    assert_eq!(err.code(), MarkupErrorCode::MismatchedEndTag);
    assert_eq!(&input[err.position()..], "</C>");
}

#[test]
fn strict_parser_reports_what_lenient_parser_warns_about() {
    let lenient = markup::MarkupParser::default()
        .parse("<A>&copy;", &table())
        .expect("lenient");
    assert_eq!(lenient.warnings.len(), 2);
    assert!(matches!(lenient.warnings[0], ParseWarning::UnknownEntity { .. }));

    let strict = markup::MarkupParser::new(markup::ParseConfig::strict())
        .parse("<A>&copy;", &table());
    assert!(
        matches!(strict, Err(MarkupError::UnknownEntity { .. })),
        "expected strict failure, got: {strict:?}"
    );
}

// Small deterministic generator for well-formed markup; the expected plain
// text is tracked alongside the markup.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> usize {
        (self.next() % n) as usize
    }
}

fn generate(rng: &mut Lcg, depth: usize, markup: &mut String, plain: &mut String) {
    const TAGS: &[&str] = &["A", "B", "C", "unstyled"];
    const WORDS: &[&str] = &["alpha ", "β ", "gamma", " ", "δέλτα", "x;y", "1 > 0"];
    const ENTITIES: &[(&str, &str)] = &[("lt", "<"), ("gt", ">"), ("amp", "&"), ("bogus", "")];
    for _ in 0..rng.below(4) + 1 {
        match rng.below(3) {
            0 => {
                let word = WORDS[rng.below(WORDS.len() as u64)];
                markup.push_str(word);
                plain.push_str(word);
            }
            1 => {
                let (name, literal) = ENTITIES[rng.below(ENTITIES.len() as u64)];
                markup.push_str(&format!("&{name};"));
                plain.push_str(literal);
            }
            _ if depth < 6 => {
                let tag = TAGS[rng.below(TAGS.len() as u64)];
                markup.push_str(&format!("<{tag}>"));
                generate(rng, depth + 1, markup, plain);
                markup.push_str(&format!("</{tag}>"));
            }
            _ => {}
        }
    }
}

#[test]
fn well_formed_markup_round_trips_to_stripped_text() {
    let mut rng = Lcg(0xC0FFEE);
    for _ in 0..500 {
        let mut markup = String::new();
        let mut plain = String::new();
        generate(&mut rng, 0, &mut markup, &mut plain);
        let text = parse_markup(&markup, &table())
            .unwrap_or_else(|err| panic!("generated markup {markup:?} failed: {err}"));
        assert_eq!(text.text(), plain, "stripped text mismatch for {markup:?}");
        assert!(
            text.iter().all(|run| !run.text.is_empty()),
            "empty run emitted for {markup:?}"
        );
    }
}
