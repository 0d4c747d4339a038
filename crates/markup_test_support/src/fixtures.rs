//! Golden fixture files for the markup pipeline.
//!
//! A fixture file holds a shared stylesheet and a list of cases. Each case
//! expects either a run snapshot (plus optional warnings) or an error code
//! label. Files may be TOML or JSON; the schema is the same.

use markup::{ParseConfig, UnclosedTagPolicy, UnknownEntityPolicy};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub const MARKUP_CASES_FORMAT_V1: &str = "markup-cases-v1";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CaseFile {
    pub format: String,
    #[serde(default)]
    pub stylesheet: String,
    pub cases: Vec<Case>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    pub input: String,
    #[serde(default)]
    pub config: CaseConfig,
    /// Expected run snapshot lines; absent when an error is expected.
    pub runs: Option<Vec<String>>,
    /// Expected error code label, e.g. `"mismatched end tag"`.
    pub error: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct CaseConfig {
    #[serde(default)]
    pub unknown_entity: Option<EntityPolicyName>,
    #[serde(default)]
    pub reject_unclosed: bool,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntityPolicyName {
    Drop,
    Preserve,
    Reject,
}

impl CaseConfig {
    pub fn to_parse_config(&self) -> ParseConfig {
        let unknown_entity = match self.unknown_entity {
            None | Some(EntityPolicyName::Drop) => UnknownEntityPolicy::Drop,
            Some(EntityPolicyName::Preserve) => UnknownEntityPolicy::Preserve,
            Some(EntityPolicyName::Reject) => UnknownEntityPolicy::Reject,
        };
        let unclosed_tags = if self.reject_unclosed {
            UnclosedTagPolicy::Reject
        } else {
            UnclosedTagPolicy::Allow
        };
        ParseConfig::default()
            .with_unknown_entity(unknown_entity)
            .with_unclosed_tags(unclosed_tags)
    }
}

/// Load and validate a fixture file. Panics with the file path on any problem.
pub fn load_case_file(path: &Path) -> CaseFile {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture file {path:?}: {err}"));
    let file: CaseFile = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content)
            .unwrap_or_else(|err| panic!("failed to parse fixture TOML {path:?}: {err}")),
        Some("json") => serde_json::from_str(&content)
            .unwrap_or_else(|err| panic!("failed to parse fixture JSON {path:?}: {err}")),
        other => panic!("unsupported fixture extension {other:?} for {path:?}"),
    };
    validate_case_file(&file, path);
    file
}

fn validate_case_file(file: &CaseFile, path: &Path) {
    assert_eq!(
        file.format, MARKUP_CASES_FORMAT_V1,
        "unsupported fixture format in {path:?}"
    );
    assert!(!file.cases.is_empty(), "fixture file {path:?} has no cases");
    let mut seen = BTreeSet::new();
    for case in &file.cases {
        assert!(
            seen.insert(case.name.as_str()),
            "duplicate case name in {path:?}: {}",
            case.name
        );
        assert!(
            case.runs.is_some() != case.error.is_some(),
            "case '{}' in {path:?} must set exactly one of `runs` or `error`",
            case.name
        );
        assert!(
            case.error.is_none() || case.warnings.is_empty(),
            "case '{}' in {path:?} expects an error, warnings are meaningless",
            case.name
        );
    }
}

/// Case-name filter from an environment variable (substring match).
pub struct CaseFilter(Option<String>);

impl CaseFilter {
    pub fn from_env(key: &str) -> Self {
        Self(std::env::var(key).ok().filter(|value| !value.is_empty()))
    }

    pub fn matches(&self, name: &str) -> bool {
        self.0.as_deref().is_none_or(|needle| name.contains(needle))
    }
}
