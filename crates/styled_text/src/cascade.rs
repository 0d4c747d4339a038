use crate::attributes::Attributes;
use crate::table::AttributeTable;

/// Compute the attributes in effect for a stack of open tags.
///
/// The stack is walked outermost first and each tag's attributes are merged
/// over the accumulator, so inner tags win on conflicting keys while
/// non-conflicting keys from every open tag survive. Tags missing from the
/// table contribute nothing.
pub fn resolve<S: AsRef<str>>(stack: &[S], table: &AttributeTable) -> Attributes {
    let mut resolved = Attributes::new();
    for tag in stack {
        if let Some(attributes) = table.get(tag.as_ref()) {
            resolved.merge_from(attributes);
        }
    }
    resolved
}
