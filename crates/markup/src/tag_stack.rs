//! Stack of open tags.

/// Entry in the stack of open tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct OpenTag {
    pub(crate) name: String,
    /// Byte offset of the start tag's `<`.
    pub(crate) position: usize,
}

/// LIFO of open tags, outermost first.
#[derive(Clone, Debug, Default)]
pub(crate) struct TagStack {
    items: Vec<OpenTag>,
    names: Vec<String>,
    max_depth: usize,
}

impl TagStack {
    pub(crate) fn push(&mut self, name: &str, position: usize) {
        self.items.push(OpenTag {
            name: name.to_string(),
            position,
        });
        self.names.push(name.to_string());
        self.max_depth = self.max_depth.max(self.items.len());
    }

    pub(crate) fn current(&self) -> Option<&OpenTag> {
        self.items.last()
    }

    pub(crate) fn pop(&mut self) -> Option<OpenTag> {
        self.names.pop();
        self.items.pop()
    }

    /// Open tag names, outermost first, in the shape the resolver consumes.
    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &OpenTag> + '_ {
        self.items.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn max_depth(&self) -> usize {
        self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_is_lifo_and_tracks_depth() {
        let mut stack = TagStack::default();
        stack.push("a", 0);
        stack.push("b", 3);
        assert_eq!(stack.current().map(|t| t.name.as_str()), Some("b"));
        assert_eq!(stack.names(), ["a".to_string(), "b".to_string()]);
        assert_eq!(stack.pop().map(|t| t.position), Some(3));
        assert_eq!(stack.len(), 1);
        stack.pop();
        assert_eq!(stack.len(), 0);
        assert!(stack.pop().is_none());
        assert_eq!(stack.max_depth(), 2);
    }
}
