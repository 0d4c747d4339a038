#![no_main]

use libfuzzer_sys::fuzz_target;
use styled_text::parse_stylesheet;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let sheet = parse_stylesheet(input);
    for rule in &sheet.rules {
        assert!(!rule.selectors.is_empty(), "rule without selectors");
        for selector in &rule.selectors {
            assert!(!selector.is_empty());
            assert!(input.contains(selector.as_str()));
        }
    }
    let table = sheet.clone().into_table();
    for (tag, _) in table.iter() {
        assert!(
            sheet.rules.iter().any(|rule| rule.selectors.iter().any(|s| s == tag)),
            "table entry {tag:?} has no source rule"
        );
    }
});
