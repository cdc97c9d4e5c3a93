mod common;

use bizfinder::client::RelayClient;
use bizfinder::model::normalize::normalize_all;
use bizfinder::model::{RecordKind, SearchFilters};
use bizfinder::query::Endpoints;
use bizfinder::sample::{raw_samples, sample_page};
use bizfinder::session::SearchSession;
use bizfinder::{DataSource, Finder, FinderError};
use common::{ORIGIN, today};

fn ids(filters: &SearchFilters) -> Vec<String> {
    sample_page(filters, 1, ORIGIN, today())
        .into_iter()
        .map(|r| r.id)
        .collect()
}

fn offline_finder() -> Finder {
    // Nothing listens here; sample mode must never touch the network.
    let client = RelayClient::new("http://127.0.0.1:9/raw?url=", "bizfinder-test").unwrap();
    Finder::new(
        client,
        Endpoints {
            program: "http://127.0.0.1:9/program".to_string(),
            event: "http://127.0.0.1:9/event".to_string(),
        },
        ORIGIN,
    )
    .with_today(today())
}

#[test]
fn test_kind_filter() {
    let programs = ids(&SearchFilters::new(RecordKind::Program));
    assert_eq!(programs, vec!["MOCK_001", "MOCK_002", "MOCK_003", "MOCK_004"]);

    let events = sample_page(&SearchFilters::new(RecordKind::Event), 1, ORIGIN, today());
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|r| r.kind == RecordKind::Event));
}

#[test]
fn test_region_filter() {
    let seoul = SearchFilters::new(RecordKind::Program).with_regions(["서울"]);
    let records = sample_page(&seoul, 1, ORIGIN, today());
    assert_eq!(records.len(), 1);
    for r in &records {
        assert!(
            r.tags.iter().any(|t| t == "서울")
                || r.target.as_deref().is_some_and(|t| t.contains("서울"))
        );
    }

    let busan_or_daegu = SearchFilters::new(RecordKind::Program).with_regions(["부산", "대구"]);
    assert_eq!(ids(&busan_or_daegu), vec!["MOCK_003", "MOCK_004"]);

    let seoul_events = SearchFilters::new(RecordKind::Event).with_regions(["서울"]);
    assert_eq!(ids(&seoul_events), vec!["MOCK_EVT_001"]);
}

#[test]
fn test_category_filter() {
    let finance = SearchFilters::new(RecordKind::Program).with_category("01");
    assert_eq!(ids(&finance), vec!["MOCK_002"]);

    let tech = SearchFilters::new(RecordKind::Program).with_category("02");
    assert_eq!(ids(&tech), vec!["MOCK_004"]);

    // Unknown codes do not restrict.
    let unknown = SearchFilters::new(RecordKind::Program).with_category("99");
    assert_eq!(ids(&unknown).len(), 4);
}

#[test]
fn test_keyword_and_targets_are_ignored() {
    let filters = SearchFilters::new(RecordKind::Program)
        .with_keyword("존재하지않는검색어")
        .with_targets(["외계인"]);
    assert_eq!(ids(&filters).len(), 4);
}

#[test]
fn test_only_first_page_has_content() {
    let filters = SearchFilters::new(RecordKind::Program);
    assert!(sample_page(&filters, 2, ORIGIN, today()).is_empty());
}

#[test]
fn test_samples_go_through_normalizer() {
    let events = sample_page(&SearchFilters::new(RecordKind::Event), 1, ORIGIN, today());
    let first = &events[0];
    assert_eq!(first.category, "창업, 경영");
    assert_eq!(
        first.url,
        "https://www.bizinfo.go.kr/web/lay1/bbs/S1T122C128/AS/74/view.do?eventInfoId=MOCK_EVT_001"
    );
    assert_eq!(first.summary, "창업지원사업 신청 절차와 유의사항을 안내합니다.");
    let third = &events[2];
    assert_eq!(third.url, "#");
    assert_eq!(third.tags, vec!["기술", "교육", "대전"]);
}

#[tokio::test]
async fn test_end_to_end_without_credential() {
    let finder = offline_finder();
    let filters = SearchFilters::new(RecordKind::Program)
        .with_regions(["전국"])
        .with_category("")
        .with_keyword("");

    let mut session = SearchSession::new();
    let req = session.begin_search(filters.clone());
    let result = finder.fetch_page(&req.filters, req.page_index, "").await;
    session.complete(&req, result).unwrap();

    let expected = normalize_all(&raw_samples(RecordKind::Program), ORIGIN, today());
    assert_eq!(session.records(), expected.as_slice());
    assert!(session.is_exhausted());
    assert_eq!(session.source(), Some(DataSource::Sample));
    assert!(session.begin_load_more().is_none());
}

#[tokio::test]
async fn test_sample_page_two_is_empty() {
    let finder = offline_finder();
    let fetched = finder
        .fetch_page(&SearchFilters::new(RecordKind::Event), 2, "  ")
        .await
        .unwrap();
    assert!(fetched.records.is_empty());
    assert_eq!(fetched.source, DataSource::Sample);
}

#[tokio::test]
async fn test_page_zero_is_rejected_like_live_mode() {
    let finder = offline_finder();
    let err = finder
        .fetch_page(&SearchFilters::new(RecordKind::Program), 0, "")
        .await
        .unwrap_err();
    assert!(matches!(err, FinderError::Configuration(_)), "{:?}", err);
}
