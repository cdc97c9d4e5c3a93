// File: ./src/model/normalize.rs
//! Maps raw program / event records onto [`UnifiedRecord`].
//!
//! Normalization never fails: every missing field falls back to a fixed
//! default, so a record with an unexpected schema still renders.
use crate::model::filters::RecordKind;
use crate::model::raw::{Field, RawRecord};
use crate::model::record::UnifiedRecord;
use crate::model::status;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use uuid::Uuid;

pub const DEFAULT_TITLE: &str = "제목 없음";
pub const DEFAULT_ORGANIZATION: &str = "기관 정보 없음";
pub const DEFAULT_CATEGORY: &str = "기타";
pub const DEFAULT_SUMMARY: &str = "상세 내용을 확인하세요.";
pub const PLACEHOLDER_URL: &str = "#";

const TAG_DELIMITER: char = ',';
const MULTI_VALUE_DELIMITER: char = '@';
const PLACEHOLDER_LINKS: [&str; 4] = ["#", "-", "about:blank", "javascript:void(0)"];

static MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").expect("static regex"));
static NUMERIC_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(?:[xX]([0-9a-fA-F]+)|([0-9]+));").expect("static regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static regex"));

/// Normalizes one record, evaluating its deadline as of `today`.
pub fn normalize_at(raw: &RawRecord, origin: &str, today: NaiveDate) -> UnifiedRecord {
    let kind = raw.kind();
    let raw_period = raw.get(Field::Period).unwrap_or_default();
    let deadline = status::evaluate_at(&raw_period, today);

    let category = raw
        .get(Field::Category)
        .map(|c| match kind {
            RecordKind::Event => split_list(&c, MULTI_VALUE_DELIMITER).join(", "),
            RecordKind::Program => c.trim().to_string(),
        })
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let (target, areas) = match kind {
        RecordKind::Program => (raw.get(Field::Target), None),
        RecordKind::Event => (
            None,
            raw.get(Field::Areas)
                .map(|a| split_list(&a, MULTI_VALUE_DELIMITER))
                .filter(|a| !a.is_empty()),
        ),
    };

    UnifiedRecord {
        id: raw
            .get(Field::Id)
            .map(|id| id.trim().to_string())
            .unwrap_or_else(|| synthetic_id(kind)),
        kind,
        title: raw
            .get(Field::Title)
            .map(|t| strip_markup(&t))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        organization: raw
            .get(Field::Organization)
            .map(|o| o.trim().to_string())
            .unwrap_or_else(|| DEFAULT_ORGANIZATION.to_string()),
        url: resolve_url(raw.get(Field::Url).as_deref(), origin),
        summary: summarize(raw.get(Field::Summary).as_deref()),
        category,
        target,
        areas,
        tags: parse_tags(raw.get(Field::Tags).as_deref().unwrap_or_default()),
        date_info: deadline.date_info,
        status: deadline.status,
        d_day: deadline.d_day,
        raw_period,
    }
}

/// Normalizes a whole page, keeping upstream order.
pub fn normalize_all(raws: &[RawRecord], origin: &str, today: NaiveDate) -> Vec<UnifiedRecord> {
    raws.iter().map(|r| normalize_at(r, origin, today)).collect()
}

fn synthetic_id(kind: RecordKind) -> String {
    format!("{}-{}", kind, Uuid::new_v4().simple())
}

/// Comma-separated tag text to an ordered, duplicate-free list.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in split_list(raw, TAG_DELIMITER) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

fn split_list(raw: &str, delimiter: char) -> Vec<String> {
    raw.split(delimiter)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Plain-text summary, or the placeholder when nothing is left after stripping.
pub fn summarize(html: Option<&str>) -> String {
    let text = strip_markup(html.unwrap_or_default());
    if text.is_empty() {
        DEFAULT_SUMMARY.to_string()
    } else {
        text
    }
}

/// Removes tags and comments, decodes common entities and collapses whitespace.
pub fn strip_markup(html: &str) -> String {
    let without_tags = MARKUP.replace_all(html, " ");
    let decoded = decode_entities(&without_tags);
    WHITESPACE.replace_all(&decoded, " ").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    let numeric = NUMERIC_ENTITY.replace_all(text, |caps: &Captures| {
        let code = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (_, Some(dec)) => dec.as_str().parse::<u32>().ok(),
            _ => None,
        };
        code.and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });
    // `&amp;` goes last so `&amp;lt;` decodes to the literal `&lt;`.
    numeric
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Resolves a detail link against the upstream origin.
pub fn resolve_url(raw: Option<&str>, origin: &str) -> String {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() || PLACEHOLDER_LINKS.contains(&value) {
        return PLACEHOLDER_URL.to_string();
    }
    if url::Url::parse(value).is_ok() {
        return value.to_string();
    }
    if let Some(rest) = value.strip_prefix("//") {
        return format!("https://{}", rest);
    }
    if value.starts_with('/') {
        return format!("{}{}", origin.trim_end_matches('/'), value);
    }
    value.to_string()
}
