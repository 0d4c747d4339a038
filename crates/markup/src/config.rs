/// What to do with `&name;` when `name` is not a known entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnknownEntityPolicy {
    /// Emit nothing and record a warning.
    #[default]
    Drop,
    /// Emit the entity text `&name;` unchanged.
    Preserve,
    /// Fail the parse.
    Reject,
}

/// What to do when tags are still open at end of input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnclosedTagPolicy {
    /// Accept the output and record a warning per open tag.
    #[default]
    Allow,
    /// Fail the parse.
    Reject,
}

/// Parser knobs. The default accepts the same inputs the markup has always
/// accepted; [`ParseConfig::strict`] rejects every questionable input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParseConfig {
    pub unknown_entity: UnknownEntityPolicy,
    pub unclosed_tags: UnclosedTagPolicy,
}

impl ParseConfig {
    pub fn strict() -> Self {
        Self {
            unknown_entity: UnknownEntityPolicy::Reject,
            unclosed_tags: UnclosedTagPolicy::Reject,
        }
    }

    pub fn with_unknown_entity(mut self, policy: UnknownEntityPolicy) -> Self {
        self.unknown_entity = policy;
        self
    }

    pub fn with_unclosed_tags(mut self, policy: UnclosedTagPolicy) -> Self {
        self.unclosed_tags = policy;
        self
    }
}
