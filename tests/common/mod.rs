// Shared helpers for integration tests.
#![allow(dead_code)]
use bizfinder::model::normalize::normalize_at;
use bizfinder::model::{RawRecord, RecordKind, UnifiedRecord};
use chrono::NaiveDate;
use serde_json::{Value, json};

pub const ORIGIN: &str = "https://www.bizinfo.go.kr";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

pub fn raw_program(id: &str) -> Value {
    json!({
        "pblancId": id,
        "pblancNm": format!("공고 {}", id),
        "jrsdInsttNm": "중소벤처기업부",
        "reqstBeginEndDe": "20240201 ~ 20240331",
        "pblancUrl": format!("/view.do?pblancId={}", id),
        "bsnsSumryCn": "<p>요약</p>",
        "pldirSportRealmLclasCodeNm": "경영",
        "hashTags": "경영,서울"
    })
}

pub fn records(prefix: &str, count: usize) -> Vec<UnifiedRecord> {
    (0..count)
        .map(|i| {
            let raw = RawRecord::from_value(
                RecordKind::Program,
                raw_program(&format!("{}-{}", prefix, i)),
            )
            .unwrap();
            normalize_at(&raw, ORIGIN, today())
        })
        .collect()
}

/// Upstream body in the `{"jsonArray": {"item": [...]}}` shape.
pub fn item_envelope(ids: &[String]) -> String {
    let items: Vec<Value> = ids.iter().map(|id| raw_program(id)).collect();
    json!({ "jsonArray": { "item": items, "totalCount": ids.len() } }).to_string()
}

pub fn ids(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}-{}", prefix, i)).collect()
}
