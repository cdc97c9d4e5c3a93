// File: ./src/sample.rs
//! Curated sample records served when no API key is configured.
//!
//! Samples are stored in the upstream wire shape and go through the same
//! normalizer as live data. Only kind, region and category filters apply here;
//! keyword and target filters are ignored.
use crate::model::catalog::category_by_code;
use crate::model::normalize;
use crate::model::{RawRecord, RecordKind, SearchFilters, UnifiedRecord};
use chrono::NaiveDate;
use serde_json::{Value, json};

fn sample_programs() -> Value {
    json!([
        {
            "pblancId": "MOCK_001",
            "pblancNm": "[예시] 2024년 초기창업패키지 창업기업 모집 공고",
            "jrsdInsttNm": "중소벤처기업부",
            "reqstBeginEndDe": "20240201 ~ 20240315",
            "pblancUrl": "#",
            "bsnsSumryCn": "<p>유망 창업아이템 및 고급기술을 보유한 초기창업기업의 사업화 자금 및 특화 프로그램을 지원합니다.</p>",
            "pldirSportRealmLclasCodeNm": "창업",
            "trgetNm": "창업 3년 이내 기업",
            "hashTags": "창업,기술,서울,경기"
        },
        {
            "pblancId": "MOCK_002",
            "pblancNm": "[예시] 중소기업 정책자금(운전) 융자 지원",
            "jrsdInsttNm": "중소벤처기업진흥공단",
            "reqstBeginEndDe": "20240110 ~ 예산 소진시",
            "pblancUrl": "#",
            "bsnsSumryCn": "경영애로 해소 및 생산성 향상을 위한 운전 자금을 융자 지원해 드립니다.",
            "pldirSportRealmLclasCodeNm": "금융",
            "trgetNm": "중소기업",
            "hashTags": "금융,전국"
        },
        {
            "pblancId": "MOCK_003",
            "pblancNm": "[예시] 수출바우처 사업 참여기업 모집",
            "jrsdInsttNm": "산업통상자원부",
            "reqstBeginEndDe": "20240301 ~ 20240331",
            "pblancUrl": "#",
            "bsnsSumryCn": "수출 유망 중소기업을 대상으로 해외 마케팅 서비스를 바우처 형태로 지원합니다.",
            "pldirSportRealmLclasCodeNm": "수출",
            "trgetNm": "수출 실적 보유 기업",
            "hashTags": "수출,부산,인천"
        },
        {
            "pblancId": "MOCK_004",
            "pblancNm": "[예시] 스마트공장 구축 및 고도화 지원사업",
            "jrsdInsttNm": "스마트제조혁신추진단",
            "reqstBeginEndDe": "20240401 ~ 20240501",
            "pblancUrl": "#",
            "bsnsSumryCn": "제조 현장의 경쟁력 제고를 위해 스마트공장 구축을 지원합니다.",
            "pldirSportRealmLclasCodeNm": "기술",
            "trgetNm": "제조 중소기업",
            "hashTags": "기술,대구,경북"
        }
    ])
}

fn sample_events() -> Value {
    json!([
        {
            "eventInfoId": "MOCK_EVT_001",
            "nttNm": "[예시] 2024 창업지원사업 통합 설명회",
            "organizerNm": "창업진흥원",
            "eventBeginEndDe": "20240220 ~ 20240220",
            "orginlUrlAdres": "",
            "bizinfoUrl": "/web/lay1/bbs/S1T122C128/AS/74/view.do?eventInfoId=MOCK_EVT_001",
            "nttCn": "<div>창업지원사업 신청 절차와 유의사항을 안내합니다.</div>",
            "pldirSportRealmLclasCodeNm": "창업@경영",
            "areaNm": "서울@온라인",
            "hashTags": "창업,설명회,서울"
        },
        {
            "eventInfoId": "MOCK_EVT_002",
            "nttNm": "[예시] 수출기업 해외인증 지원 세미나",
            "organizerNm": "코트라",
            "eventBeginEndDe": "20240312 ~ 20240313",
            "originUrlAdres": "https://www.kotra.or.kr",
            "nttCn": "해외 인증 취득 전략과 지원 제도를 소개합니다.",
            "pldirSportRealmLclasCodeNm": "수출",
            "areaNm": "부산",
            "hashTags": "수출,세미나,부산"
        },
        {
            "eventInfoId": "MOCK_EVT_003",
            "nttNm": "[예시] 중소기업 기술보호 교육",
            "organizerNm": "대중소기업농어업협력재단",
            "eventBeginEndDe": "20240425",
            "nttCn": "",
            "pldirSportRealmLclasCodeNm": "기술",
            "areaNm": "대전@세종",
            "hashtags": "기술,교육,대전"
        }
    ])
}

/// Every sample of `kind` in raw form.
pub fn raw_samples(kind: RecordKind) -> Vec<RawRecord> {
    let list = match kind {
        RecordKind::Program => sample_programs(),
        RecordKind::Event => sample_events(),
    };
    match list {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| RawRecord::from_value(kind, v))
            .collect(),
        _ => Vec::new(),
    }
}

/// Sample page for `filters`. Only page 1 has content.
pub fn sample_page(
    filters: &SearchFilters,
    page_index: u32,
    origin: &str,
    today: NaiveDate,
) -> Vec<UnifiedRecord> {
    if page_index != 1 {
        return Vec::new();
    }

    let category = filters
        .category_code()
        .and_then(category_by_code)
        .map(|c| c.keyword);
    let regions: Vec<&str> = filters.specific_regions().collect();

    normalize::normalize_all(&raw_samples(filters.kind), origin, today)
        .into_iter()
        .filter(|r| category.is_none_or(|c| r.category.contains(c)))
        .filter(|r| regions.is_empty() || regions.iter().any(|region| in_region(r, region)))
        .collect()
}

fn in_region(record: &UnifiedRecord, region: &str) -> bool {
    record.tags.iter().any(|t| t == region)
        || record.target.as_deref().is_some_and(|t| t.contains(region))
        || record
            .areas
            .as_ref()
            .is_some_and(|areas| areas.iter().any(|a| a == region))
}
