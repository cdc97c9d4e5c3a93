// File: ./src/model/raw.rs
//! Raw upstream records and the alias tables used to read them.
//!
//! The upstream documentation and the live payloads disagree on casing and on
//! a few misspelled keys, so each logical field is looked up through an
//! ordered list of candidate keys. The first key holding a non-blank value wins.
use crate::model::filters::RecordKind;
use serde_json::{Map, Value};

/// A single upstream record, tagged with the endpoint it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRecord {
    Program(Map<String, Value>),
    Event(Map<String, Value>),
}

/// Logical fields common to both record families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Title,
    Organization,
    Period,
    Url,
    Summary,
    Category,
    /// Program only: target audience text.
    Target,
    /// Event only: `@`-joined area names.
    Areas,
    Tags,
}

pub struct AliasTable {
    pub id: &'static [&'static str],
    pub title: &'static [&'static str],
    pub organization: &'static [&'static str],
    pub period: &'static [&'static str],
    pub url: &'static [&'static str],
    pub summary: &'static [&'static str],
    pub category: &'static [&'static str],
    pub target: &'static [&'static str],
    pub areas: &'static [&'static str],
    pub tags: &'static [&'static str],
}

impl AliasTable {
    pub fn keys(&self, field: Field) -> &'static [&'static str] {
        match field {
            Field::Id => self.id,
            Field::Title => self.title,
            Field::Organization => self.organization,
            Field::Period => self.period,
            Field::Url => self.url,
            Field::Summary => self.summary,
            Field::Category => self.category,
            Field::Target => self.target,
            Field::Areas => self.areas,
            Field::Tags => self.tags,
        }
    }
}

pub const PROGRAM_ALIASES: AliasTable = AliasTable {
    id: &["pblancId", "pblancID", "id"],
    title: &["pblancNm", "title"],
    organization: &["jrsdInsttNm", "excInsttNm", "author"],
    period: &["reqstBeginEndDe", "reqstDt"],
    url: &["pblancUrl", "pblancURL", "link"],
    summary: &["bsnsSumryCn", "description"],
    category: &["pldirSportRealmLclasCodeNm", "lcategory"],
    target: &["trgetNm"],
    areas: &[],
    tags: &["hashTags", "hashtags"],
};

// Event detail links show up under two spellings of the original-URL key;
// `bizinfoUrl` is the portal's own page for the event and is used last.
pub const EVENT_ALIASES: AliasTable = AliasTable {
    id: &["eventInfoId", "eventId", "id"],
    title: &["nttNm", "eventNm", "title"],
    organization: &["organizerNm", "jrsdInsttNm", "author"],
    period: &["eventBeginEndDe", "eventDe", "reqstBeginEndDe"],
    url: &["orginlUrlAdres", "originUrlAdres", "bizinfoUrl"],
    summary: &["nttCn", "description"],
    category: &["pldirSportRealmLclasCodeNm", "lcategory"],
    target: &[],
    areas: &["areaNm"],
    tags: &["hashTags", "hashtags"],
};

impl RawRecord {
    pub fn new(kind: RecordKind, fields: Map<String, Value>) -> Self {
        match kind {
            RecordKind::Program => RawRecord::Program(fields),
            RecordKind::Event => RawRecord::Event(fields),
        }
    }

    /// Builds a record from an arbitrary JSON value. Non-object values are rejected.
    pub fn from_value(kind: RecordKind, value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self::new(kind, map)),
            _ => None,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            RawRecord::Program(_) => RecordKind::Program,
            RawRecord::Event(_) => RecordKind::Event,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        match self {
            RawRecord::Program(m) | RawRecord::Event(m) => m,
        }
    }

    fn aliases(&self) -> &'static AliasTable {
        match self {
            RawRecord::Program(_) => &PROGRAM_ALIASES,
            RawRecord::Event(_) => &EVENT_ALIASES,
        }
    }

    /// Resolves a logical field through the alias table of this record's kind.
    pub fn get(&self, field: Field) -> Option<String> {
        let fields = self.fields();
        self.aliases()
            .keys(field)
            .iter()
            .filter_map(|key| fields.get(*key))
            .find_map(scalar_text)
    }
}

/// Text form of a scalar JSON value. Null, blank strings and containers yield `None`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
