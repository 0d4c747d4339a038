#![no_main]

use libfuzzer_sys::fuzz_target;
use markup::{MarkupParser, ParseConfig, UnknownEntityPolicy};
use styled_text::{AttributeTable, Attributes, Color};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let table: AttributeTable = [
        ("a", Attributes::builder().font("X").build()),
        ("b", Attributes::builder().color(Color::BLACK).build()),
    ]
    .into_iter()
    .collect();
    for config in [
        ParseConfig::default(),
        ParseConfig::default().with_unknown_entity(UnknownEntityPolicy::Preserve),
        ParseConfig::strict(),
    ] {
        let Ok(outcome) = MarkupParser::new(config).parse(input, &table) else {
            continue;
        };
        let text = &outcome.text;
        let total: usize = text.iter().map(|run| run.text.len()).sum();
        assert_eq!(total, text.text().len());
        assert!(text.iter().all(|run| !run.text.is_empty()));
        if config == ParseConfig::strict() {
            assert!(outcome.warnings.is_empty());
        }
    }
});
