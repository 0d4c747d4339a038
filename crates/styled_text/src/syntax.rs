//! Minimal rule syntax for attribute tables.
//!
//! ```text
//! loud { font-size: 40; }
//! green, em { color: green; font: "Avenir Next" }
//! ```
//!
//! Selectors are tag names (`[A-Za-z0-9:_-]`, case preserved). Anything else
//! in selector position is skipped, as are declarations whose value does not
//! parse for their key. Later rules overlay earlier ones.

use crate::attributes::{AttributeKey, AttributeValue, Attributes};
use crate::table::AttributeTable;

/// A single raw declaration: `color: red`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub selectors: Vec<String>,
    pub attributes: Attributes,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// Collapse the rules into a table, applying them in source order.
    pub fn into_table(self) -> AttributeTable {
        let mut table = AttributeTable::new();
        for rule in self.rules {
            for selector in rule.selectors {
                table.merge(selector, &rule.attributes);
            }
        }
        table
    }
}

pub fn parse_stylesheet(input: &str) -> Stylesheet {
    let mut rules = Vec::new();
    for block in input.split('}') {
        let Some((selector_str, declaration_str)) = block.split_once('{') else {
            continue;
        };
        let selectors = selector_str
            .split(',')
            .filter_map(parse_selector)
            .collect::<Vec<_>>();
        if selectors.is_empty() {
            log::warn!(
                target: "styled_text.stylesheet",
                "skipping rule without usable selectors: {:?}",
                selector_str.trim()
            );
            continue;
        }
        let attributes = declarations_to_attributes(parse_declarations(declaration_str));
        if attributes.is_empty() {
            continue;
        }
        rules.push(Rule {
            selectors,
            attributes,
        });
    }
    Stylesheet { rules }
}

// input: "color: red; font-size: 12;"
// output: [Declaration { name: "color", value: "red" }, Declaration { name: "font-size", value: "12" }]
pub fn parse_declarations(input: &str) -> Vec<Declaration> {
    input
        .split(';')
        .filter_map(|pair| {
            let (n, v) = pair.split_once(':')?;
            let name = n.trim().to_ascii_lowercase();
            if name.is_empty() {
                return None;
            }
            let value = v.trim().to_string();
            Some(Declaration { name, value })
        })
        .collect()
}

/// Parse each declaration against its key, dropping values that don't fit.
pub fn declarations_to_attributes(declarations: Vec<Declaration>) -> Attributes {
    let mut attributes = Attributes::new();
    for declaration in declarations {
        let key = AttributeKey::from_property_name(&declaration.name);
        match key.parse_value(&declaration.value) {
            Some(value) => {
                attributes.insert(key, value);
            }
            None => log::warn!(
                target: "styled_text.stylesheet",
                "skipping invalid value {:?} for {key}",
                declaration.value
            ),
        }
    }
    attributes
}

fn parse_selector(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':')
        .then(|| s.to_string())
}

impl From<(&str, &str)> for Declaration {
    fn from((name, value): (&str, &str)) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

impl Declaration {
    pub fn to_attribute(&self) -> Option<(AttributeKey, AttributeValue)> {
        let key = AttributeKey::from_property_name(&self.name);
        let value = key.parse_value(&self.value)?;
        Some((key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn parses_rules_with_selector_lists() {
        let sheet = parse_stylesheet("loud { font-size: 40; } green, em { color: green }");
        assert_eq!(sheet.rules.len(), 2);
        assert_eq!(sheet.rules[1].selectors, vec!["green", "em"]);
        let table = sheet.into_table();
        assert_eq!(
            table
                .get("em")
                .and_then(|attrs| attrs.get(&AttributeKey::ForegroundColor)),
            Some(&AttributeValue::Color(Color::rgb(0, 128, 0)))
        );
        assert_eq!(
            table
                .get("loud")
                .and_then(|attrs| attrs.get(&AttributeKey::FontSize)),
            Some(&AttributeValue::Number(40.0))
        );
    }

    #[test]
    fn skips_non_tag_selectors_and_invalid_values() {
        let sheet = parse_stylesheet(".class { color: red } b { font-size: huge; kern: 2 }");
        assert_eq!(sheet.rules.len(), 1);
        let attrs = &sheet.rules[0].attributes;
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get(&AttributeKey::Kern), Some(&AttributeValue::Number(2.0)));
    }

    #[test]
    fn later_rules_overlay_earlier_ones() {
        let table =
            AttributeTable::from_stylesheet("b { font: A; kern: 1 } b { font: B }");
        let b = table.get("b").expect("b rule");
        assert_eq!(
            b.get(&AttributeKey::Font),
            Some(&AttributeValue::Text("B".to_string()))
        );
        assert_eq!(b.get(&AttributeKey::Kern), Some(&AttributeValue::Number(1.0)));
    }

    #[test]
    fn selector_case_is_preserved() {
        let table = AttributeTable::from_stylesheet("Loud { font-size: 40 }");
        assert!(table.contains("Loud"));
        assert!(!table.contains("loud"));
    }

    #[test]
    fn unknown_properties_become_custom_text() {
        let decl = Declaration::from(("x-shadow", "soft"));
        assert_eq!(
            decl.to_attribute(),
            Some((
                AttributeKey::Custom("x-shadow".to_string()),
                AttributeValue::Text("soft".to_string())
            ))
        );
    }

    #[test]
    fn declarations_without_colon_are_ignored() {
        let decls = parse_declarations("color red; font: X;;");
        assert_eq!(decls, vec![Declaration::from(("font", "X"))]);
    }
}
