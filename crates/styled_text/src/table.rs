use crate::attributes::Attributes;
use crate::syntax::parse_stylesheet;
use std::collections::HashMap;

/// Tag name → attribute set lookup used while resolving markup.
///
/// Tag names are matched exactly, including case.
#[derive(Clone, Debug, Default)]
pub struct AttributeTable {
    tags: HashMap<String, Attributes>,
}

impl AttributeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from stylesheet text, e.g.
    /// `"loud { font-size: 40 } green, em { color: green }"`.
    pub fn from_stylesheet(input: &str) -> Self {
        parse_stylesheet(input).into_table()
    }

    /// Replace the attributes for `tag`, returning the previous set.
    pub fn insert(&mut self, tag: impl Into<String>, attributes: Attributes) -> Option<Attributes> {
        self.tags.insert(tag.into(), attributes)
    }

    /// Overlay `attributes` onto whatever `tag` already has.
    pub fn merge(&mut self, tag: impl Into<String>, attributes: &Attributes) {
        self.tags
            .entry(tag.into())
            .or_default()
            .merge_from(attributes);
    }

    pub fn get(&self, tag: &str) -> Option<&Attributes> {
        self.tags.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Attributes)> + '_ {
        self.tags.iter().map(|(tag, attrs)| (tag.as_str(), attrs))
    }
}

impl<S: Into<String>> FromIterator<(S, Attributes)> for AttributeTable {
    fn from_iter<I: IntoIterator<Item = (S, Attributes)>>(iter: I) -> Self {
        Self {
            tags: iter
                .into_iter()
                .map(|(tag, attrs)| (tag.into(), attrs))
                .collect(),
        }
    }
}
