use bizfinder::FinderError;
use bizfinder::model::{RecordKind, SearchFilters};
use bizfinder::query::{
    Endpoints, PAGE_SIZE, PARAM_CATEGORY, PARAM_CREDENTIAL, PARAM_TAGS, build_query,
};

fn endpoints() -> Endpoints {
    Endpoints {
        program: "https://upstream.test/program.do".to_string(),
        event: "https://upstream.test/event.do".to_string(),
    }
}

#[test]
fn test_fixed_parameters() {
    let q = build_query(&SearchFilters::default(), 3, "KEY").unwrap();
    assert_eq!(q.get("dataType"), Some("json"));
    assert_eq!(q.get("pageIndex"), Some("3"));
    assert_eq!(q.get("pageUnit"), Some(PAGE_SIZE.to_string().as_str()));
    assert_eq!(q.get(PARAM_CREDENTIAL), Some("KEY"));
}

#[test]
fn test_empty_credential_is_configuration_error() {
    for key in ["", "   "] {
        let err = build_query(&SearchFilters::default(), 1, key).unwrap_err();
        assert!(matches!(err, FinderError::Configuration(_)), "{:?}", err);
    }
}

#[test]
fn test_credential_never_empty_in_query() {
    let filters = SearchFilters::new(RecordKind::Event)
        .with_regions(["서울"])
        .with_keyword("a b");
    let q = build_query(&filters, 1, " KEY ").unwrap();
    let creds: Vec<_> = q.params.iter().filter(|(k, _)| k == PARAM_CREDENTIAL).collect();
    assert_eq!(creds.len(), 1);
    assert_eq!(creds[0].1, "KEY");
}

#[test]
fn test_nationwide_only_emits_no_tags() {
    let q = build_query(&SearchFilters::default(), 1, "KEY").unwrap();
    assert_eq!(q.get(PARAM_TAGS), None);
    assert_eq!(q.get(PARAM_CATEGORY), None);
}

#[test]
fn test_tag_order_regions_keywords_targets() {
    let filters = SearchFilters::new(RecordKind::Program)
        .with_regions(["전국", "서울", "부산"])
        .with_keyword("  스마트공장, 수출  바우처,,")
        .with_targets(["청년", "여성"]);
    let q = build_query(&filters, 1, "KEY").unwrap();
    assert_eq!(
        q.get(PARAM_TAGS),
        Some("서울,부산,스마트공장,수출,바우처,청년,여성")
    );
}

#[test]
fn test_category_is_a_dedicated_parameter() {
    let filters = SearchFilters::default().with_category("02");
    let q = build_query(&filters, 1, "KEY").unwrap();
    assert_eq!(q.get(PARAM_CATEGORY), Some("02"));
    assert_eq!(q.get(PARAM_TAGS), None);

    let blank = SearchFilters::default().with_category(" ");
    let q = build_query(&blank, 1, "KEY").unwrap();
    assert_eq!(q.get(PARAM_CATEGORY), None);
}

#[test]
fn test_endpoint_follows_kind() {
    let q = build_query(&SearchFilters::new(RecordKind::Event), 1, "KEY").unwrap();
    let url = q.to_url(&endpoints()).unwrap();
    assert!(url.as_str().starts_with("https://upstream.test/event.do?"));

    let q = build_query(&SearchFilters::new(RecordKind::Program), 1, "KEY").unwrap();
    let url = q.to_url(&endpoints()).unwrap();
    assert!(url.as_str().starts_with("https://upstream.test/program.do?"));
}

#[test]
fn test_redacted_url_hides_key() {
    let q = build_query(&SearchFilters::default(), 1, "SECRET123").unwrap();
    let shown = q.redacted(&endpoints());
    assert!(!shown.contains("SECRET123"));
    assert!(shown.contains("crtfcKey="));
}

#[test]
fn test_invalid_inputs() {
    let mut filters = SearchFilters::default();
    filters.regions.clear();
    assert!(matches!(
        build_query(&filters, 1, "KEY"),
        Err(FinderError::Configuration(_))
    ));
    assert!(matches!(
        build_query(&SearchFilters::default(), 0, "KEY"),
        Err(FinderError::Configuration(_))
    ));
}
