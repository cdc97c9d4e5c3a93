// File: ./src/model/filters.rs
use crate::error::FinderError;
use crate::model::catalog::NATIONWIDE;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// The two record families served by the upstream service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecordKind {
    /// Support program announcement (지원사업 공고).
    #[default]
    Program,
    /// Event / briefing session (행사 정보).
    Event,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Filter state handed in by the caller. Immutable for the duration of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub kind: RecordKind,
    /// Ordered, duplicate-free region names. `전국` means no region restriction.
    pub regions: Vec<String>,
    /// Category code (`searchLclasId`). `None` or blank means all categories.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub targets: Vec<String>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self::new(RecordKind::Program)
    }
}

impl SearchFilters {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            regions: vec![NATIONWIDE.to_string()],
            category: None,
            keyword: String::new(),
            targets: Vec::new(),
        }
    }

    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions.clear();
        for r in regions {
            push_unique(&mut self.regions, r.into());
        }
        self
    }

    pub fn with_category(mut self, code: impl Into<String>) -> Self {
        self.category = Some(code.into());
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn with_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets.clear();
        for t in targets {
            push_unique(&mut self.targets, t.into());
        }
        self
    }

    /// The category code, ignoring blank values.
    pub fn category_code(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Regions that actually restrict the result set (the nationwide sentinel is dropped).
    pub fn specific_regions(&self) -> impl Iterator<Item = &str> {
        self.regions
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty() && *r != NATIONWIDE)
    }

    /// Keyword split on whitespace and commas, empty tokens discarded.
    pub fn keyword_tokens(&self) -> impl Iterator<Item = &str> {
        self.keyword
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
    }

    pub fn validate(&self) -> Result<(), FinderError> {
        if self.regions.iter().all(|r| r.trim().is_empty()) {
            return Err(FinderError::Configuration(
                "region set must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    let value = value.trim().to_string();
    if !value.is_empty() && !list.contains(&value) {
        list.push(value);
    }
}
