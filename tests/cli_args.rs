use bizfinder::cli::{Command, parse_args, render_table, truncate_to_width};
use bizfinder::model::{RecordKind, SearchFilters};
use bizfinder::sample::sample_page;
use chrono::NaiveDate;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_default_is_nationwide_program_search() {
    let parsed = parse_args(&[]).unwrap();
    match parsed.command {
        Command::Search(s) => {
            assert_eq!(s.filters, SearchFilters::default());
            assert_eq!(s.pages, 1);
            assert!(!s.json);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_search_options() {
    let parsed = parse_args(&args(&[
        "--root", "/tmp/x", "-v", "search", "--event", "--region", "서울", "--region", "부산",
        "--category", "06", "--keyword", "창업 교육", "--target", "청년", "--pages", "3", "--json",
    ]))
    .unwrap();
    assert_eq!(parsed.root, Some(PathBuf::from("/tmp/x")));
    assert!(parsed.verbose);
    let Command::Search(s) = parsed.command else {
        panic!("expected search");
    };
    assert_eq!(s.filters.kind, RecordKind::Event);
    assert_eq!(s.filters.regions, vec!["서울", "부산"]);
    assert_eq!(s.filters.category_code(), Some("06"));
    assert_eq!(s.filters.keyword, "창업 교육");
    assert_eq!(s.filters.targets, vec!["청년"]);
    assert_eq!(s.pages, 3);
    assert!(s.json);
}

#[test]
fn test_kind_flag_and_errors() {
    let Command::Search(s) = parse_args(&args(&["search", "--kind", "event"])).unwrap().command
    else {
        panic!("expected search");
    };
    assert_eq!(s.filters.kind, RecordKind::Event);

    assert!(parse_args(&args(&["search", "--kind", "webinar"])).is_err());
    assert!(parse_args(&args(&["search", "--pages", "0"])).is_err());
    assert!(parse_args(&args(&["search", "--region"])).is_err());
    assert!(parse_args(&args(&["frobnicate"])).is_err());
    assert!(parse_args(&args(&["set-key"])).is_err());
}

#[test]
fn test_key_commands() {
    assert_eq!(
        parse_args(&args(&["set-key", " abc "])).unwrap().command,
        Command::SetKey("abc".to_string())
    );
    assert_eq!(parse_args(&args(&["clear-key"])).unwrap().command, Command::ClearKey);
    assert_eq!(parse_args(&args(&["search", "-h"])).unwrap().command, Command::Help);
}

#[test]
fn test_truncate_by_display_width() {
    assert_eq!(truncate_to_width("short", 10), "short");
    let cut = truncate_to_width("초기창업패키지 창업기업 모집 공고", 10);
    assert!(cut.width() <= 10, "{} is {} wide", cut, cut.width());
    assert!(cut.ends_with('…'));
}

#[test]
fn test_render_table_lists_every_record() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let records = sample_page(
        &SearchFilters::new(RecordKind::Program),
        1,
        "https://www.bizinfo.go.kr",
        today,
    );
    let table = render_table(&records);
    assert_eq!(table.lines().count(), records.len() * 2);
    assert!(table.contains("2024.02.01 ~ 03.15"));
    assert!(table.contains("#창업 #기술 #서울"));
}

#[test]
fn test_option_values_are_not_global_flags() {
    let parsed = parse_args(&args(&["search", "--keyword", "help"])).unwrap();
    let Command::Search(s) = parsed.command else {
        panic!("expected search, got {:?}", parsed.command);
    };
    assert_eq!(s.filters.keyword, "help");

    let parsed = parse_args(&args(&["search", "--target", "-v", "--keyword", "--root"])).unwrap();
    assert!(!parsed.verbose);
    assert_eq!(parsed.root, None);
    let Command::Search(s) = parsed.command else {
        panic!("expected search, got {:?}", parsed.command);
    };
    assert_eq!(s.filters.targets, vec!["-v"]);
    assert_eq!(s.filters.keyword, "--root");
}

#[test]
fn test_global_flags_only_before_command() {
    assert!(parse_args(&args(&["search", "-v"])).is_err());
    assert!(parse_args(&args(&["search", "--root", "/tmp/x"])).is_err());

    let parsed = parse_args(&args(&["-v", "--event"])).unwrap();
    assert!(parsed.verbose);
    let Command::Search(s) = parsed.command else {
        panic!("expected search, got {:?}", parsed.command);
    };
    assert_eq!(s.filters.kind, RecordKind::Event);
}
