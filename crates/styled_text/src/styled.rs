//! Run-attributed text.

use crate::attributes::Attributes;
use std::fmt;
use std::ops::{Add, AddAssign, Range};

/// A piece of text paired with the attributes that apply to all of it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StyledRun {
    pub text: String,
    pub attributes: Attributes,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Attributes::new())
    }
}

/// Ordered runs whose concatenated text is the plain string.
///
/// Runs are kept as appended; adjacent runs may share attributes. Use
/// [`StyledText::coalesced`] when a minimal run list is needed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StyledText {
    runs: Vec<StyledRun>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(runs: usize) -> Self {
        Self {
            runs: Vec::with_capacity(runs),
        }
    }

    /// A single unattributed run, or nothing for empty text.
    pub fn plain(text: impl Into<String>) -> Self {
        let mut styled = Self::new();
        styled.push_run(StyledRun::plain(text));
        styled
    }

    /// Append a run. Runs with empty text are dropped.
    pub fn push_run(&mut self, run: StyledRun) {
        if !run.text.is_empty() {
            self.runs.push(run);
        }
    }

    pub fn push(&mut self, text: impl Into<String>, attributes: Attributes) {
        self.push_run(StyledRun::new(text, attributes));
    }

    pub fn append(&mut self, other: StyledText) {
        self.runs.extend(other.runs);
    }

    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<StyledRun> {
        self.runs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyledRun> {
        self.runs.iter()
    }

    /// The plain text with all attributes stripped.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.len());
        for run in &self.runs {
            out.push_str(&run.text);
        }
        out
    }

    /// Length of the plain text in bytes.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|run| run.text.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Byte ranges of each run within [`StyledText::text`].
    pub fn ranges(&self) -> impl Iterator<Item = (Range<usize>, &Attributes)> + '_ {
        let mut offset = 0;
        self.runs.iter().map(move |run| {
            let start = offset;
            offset += run.text.len();
            (start..offset, &run.attributes)
        })
    }

    /// Merge neighbouring runs that carry identical attributes.
    pub fn coalesced(&self) -> StyledText {
        let mut out: Vec<StyledRun> = Vec::with_capacity(self.runs.len());
        for run in &self.runs {
            match out.last_mut() {
                Some(last) if last.attributes == run.attributes => last.text.push_str(&run.text),
                _ => out.push(run.clone()),
            }
        }
        StyledText { runs: out }
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            f.write_str(&run.text)?;
        }
        Ok(())
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl FromIterator<StyledRun> for StyledText {
    fn from_iter<I: IntoIterator<Item = StyledRun>>(iter: I) -> Self {
        let mut styled = Self::new();
        styled.extend(iter);
        styled
    }
}

impl Extend<StyledRun> for StyledText {
    fn extend<I: IntoIterator<Item = StyledRun>>(&mut self, iter: I) {
        for run in iter {
            self.push_run(run);
        }
    }
}

impl IntoIterator for StyledText {
    type Item = StyledRun;
    type IntoIter = std::vec::IntoIter<StyledRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyledText {
    type Item = &'a StyledRun;
    type IntoIter = std::slice::Iter<'a, StyledRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

impl Add for StyledText {
    type Output = StyledText;

    fn add(mut self, rhs: StyledText) -> StyledText {
        self.append(rhs);
        self
    }
}

impl Add<StyledRun> for StyledText {
    type Output = StyledText;

    fn add(mut self, rhs: StyledRun) -> StyledText {
        self.push_run(rhs);
        self
    }
}

impl Add<&str> for StyledText {
    type Output = StyledText;

    fn add(mut self, rhs: &str) -> StyledText {
        self.push_run(StyledRun::plain(rhs));
        self
    }
}

impl AddAssign for StyledText {
    fn add_assign(&mut self, rhs: StyledText) {
        self.append(rhs);
    }
}

impl AddAssign<StyledRun> for StyledText {
    fn add_assign(&mut self, rhs: StyledRun) {
        self.push_run(rhs);
    }
}

/// Incrementally assemble styled text.
///
/// ```
/// use styled_text::{Attributes, StyledTextBuilder};
///
/// let bold = Attributes::builder().font("Helvetica-Bold").build();
/// let mut builder = StyledTextBuilder::new();
/// builder.text("Total:", Some(&bold)).space(1, None).text("42", None);
/// assert_eq!(builder.build().text(), "Total: 42");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyledTextBuilder {
    assembled: StyledText,
}

impl StyledTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, text: &str, attributes: Option<&Attributes>) -> &mut Self {
        let attributes = attributes.cloned().unwrap_or_default();
        self.assembled.push(text, attributes);
        self
    }

    pub fn space(&mut self, count: usize, attributes: Option<&Attributes>) -> &mut Self {
        self.text(&" ".repeat(count), attributes)
    }

    pub fn newline(&mut self, count: usize, attributes: Option<&Attributes>) -> &mut Self {
        self.text(&"\n".repeat(count), attributes)
    }

    pub fn styled(&mut self, styled: StyledText) -> &mut Self {
        self.assembled.append(styled);
        self
    }

    /// Snapshot of what has been assembled so far; the builder stays usable.
    pub fn build(&self) -> StyledText {
        self.assembled.clone()
    }
}
