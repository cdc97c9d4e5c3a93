// File: ./src/model/record.rs
use crate::model::filters::RecordKind;
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum DeadlineStatus {
    Open,
    Closed,
    Upcoming,
}

impl std::fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// The single record shape handed back to callers, whatever endpoint it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedRecord {
    pub id: String,
    pub kind: RecordKind,
    pub title: String,
    pub organization: String,
    pub raw_period: String,
    /// Absolute link, or `#` when upstream had none.
    pub url: String,
    /// Plain text, markup stripped.
    pub summary: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub areas: Option<Vec<String>>,
    pub tags: Vec<String>,
    pub date_info: String,
    pub status: DeadlineStatus,
    pub d_day: String,
}

impl UnifiedRecord {
    pub fn has_link(&self) -> bool {
        self.url != "#"
    }
}
