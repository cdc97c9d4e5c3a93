// File: ./src/cli.rs
//! Command-line front-end helpers: argument parsing, help text and result rendering.
use crate::model::catalog::{CATEGORIES, REGIONS};
use crate::model::{RecordKind, SearchFilters, UnifiedRecord};
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    pub filters: SearchFilters,
    /// Total number of pages to load (first page plus load-more calls).
    pub pages: u32,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(SearchArgs),
    Regions,
    Categories,
    SetKey(String),
    ClearKey,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub verbose: bool,
    pub command: Command,
}

fn take_value<'a>(
    flag: &str,
    iter: &mut impl Iterator<Item = &'a String>,
) -> Result<&'a String, String> {
    iter.next().ok_or_else(|| format!("{} requires a value", flag))
}

/// Parses `args` (without the program name).
///
/// Global flags are only recognised before the command word; everything after
/// it belongs to the command.
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut root = None;
    let mut verbose = false;

    let mut pos = 0;
    while let Some(arg) = args.get(pos) {
        match arg.as_str() {
            "-r" | "--root" => {
                let value = args
                    .get(pos + 1)
                    .ok_or_else(|| format!("{} requires a value", arg))?;
                root = Some(PathBuf::from(value));
                pos += 2;
            }
            "-v" | "--verbose" => {
                verbose = true;
                pos += 1;
            }
            "-h" | "--help" | "help" => {
                return Ok(CliArgs {
                    root,
                    verbose,
                    command: Command::Help,
                });
            }
            _ => break,
        }
    }
    let rest = &args[pos..];

    let command = match rest.first().map(String::as_str) {
        None => parse_search(&[])?,
        Some("search") => parse_search(&rest[1..])?,
        Some("regions") => Command::Regions,
        Some("categories") => Command::Categories,
        Some("set-key") => match rest.get(1) {
            Some(key) if !key.trim().is_empty() => Command::SetKey(key.trim().to_string()),
            _ => return Err("set-key requires a non-empty key".to_string()),
        },
        Some("clear-key") => Command::ClearKey,
        Some(other) if other.starts_with('-') => parse_search(rest)?,
        Some(other) => return Err(format!("unknown command '{}'", other)),
    };

    Ok(CliArgs {
        root,
        verbose,
        command,
    })
}

fn parse_search(args: &[String]) -> Result<Command, String> {
    let mut kind = RecordKind::Program;
    let mut regions: Vec<String> = Vec::new();
    let mut category = None;
    let mut keyword = String::new();
    let mut targets: Vec<String> = Vec::new();
    let mut pages = 1;
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--event" | "--events" => kind = RecordKind::Event,
            "--kind" => {
                let v = take_value(arg, &mut iter)?;
                kind = v
                    .parse()
                    .map_err(|_| format!("unknown kind '{}' (program or event)", v))?;
            }
            "--region" => regions.push(take_value(arg, &mut iter)?.clone()),
            "--category" => category = Some(take_value(arg, &mut iter)?.clone()),
            "--keyword" => keyword = take_value(arg, &mut iter)?.clone(),
            "--target" => targets.push(take_value(arg, &mut iter)?.clone()),
            "--pages" => {
                let v = take_value(arg, &mut iter)?;
                pages = v
                    .parse::<u32>()
                    .ok()
                    .filter(|p| *p >= 1)
                    .ok_or_else(|| format!("--pages expects a positive number, got '{}'", v))?;
            }
            "--json" => json = true,
            other => return Err(format!("unknown search option '{}'", other)),
        }
    }

    let mut filters = SearchFilters::new(kind)
        .with_keyword(keyword)
        .with_targets(targets);
    if !regions.is_empty() {
        filters = filters.with_regions(regions);
    }
    if let Some(code) = category {
        filters = filters.with_category(code);
    }

    Ok(Command::Search(SearchArgs {
        filters,
        pages,
        json,
    }))
}

/// Cuts `text` to at most `max_width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn pad_to_width(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

const STATUS_COL: usize = 10;
const TITLE_COL: usize = 48;
const ORG_COL: usize = 20;

/// Plain-text table, one record per line plus an indented detail line.
pub fn render_table(records: &[UnifiedRecord]) -> String {
    let mut out = String::new();
    for r in records {
        let title = truncate_to_width(&r.title, TITLE_COL);
        let org = truncate_to_width(&r.organization, ORG_COL);
        out.push_str(&format!(
            "{} {} {} {}\n",
            pad_to_width(&format!("[{}]", r.d_day), STATUS_COL),
            pad_to_width(&title, TITLE_COL),
            pad_to_width(&org, ORG_COL),
            r.date_info
        ));

        let link = if r.has_link() { r.url.as_str() } else { "(링크 없음)" };
        let mut detail = format!("    {} · {}", r.category, link);
        if let Some(target) = &r.target {
            detail.push_str(&format!(" · {}", target));
        }
        if let Some(areas) = &r.areas {
            detail.push_str(&format!(" · {}", areas.join("/")));
        }
        if !r.tags.is_empty() {
            let shown: Vec<&str> = r.tags.iter().take(3).map(String::as_str).collect();
            detail.push_str(&format!(" · #{}", shown.join(" #")));
        }
        out.push_str(&detail);
        out.push('\n');
    }
    out
}

pub fn render_regions() -> String {
    REGIONS.join("\n")
}

pub fn render_categories() -> String {
    CATEGORIES
        .iter()
        .map(|c| format!("{}  {}", c.code, c.label))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_help(binary_name: &str) {
    println!(
        "Bizfinder v{} - Government support programs and events for small businesses",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>] [-v] search [OPTIONS]", binary_name);
    println!("    {} regions | categories", binary_name);
    println!("    {} set-key <API_KEY> | clear-key", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config.");
    println!("    -v, --verbose         Debug logging on stderr.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("SEARCH OPTIONS:");
    println!("    --event               Search events instead of support programs");
    println!("    --kind <program|event>");
    println!("    --region <name>       Repeatable. Default: 전국 (no restriction)");
    println!("    --category <code>     See '{} categories'", binary_name);
    println!("    --keyword <text>      Split on spaces and commas");
    println!("    --target <tag>        Repeatable audience tag");
    println!("    --pages <n>           Load up to n pages of 12 (default 1)");
    println!("    --json                Print records as JSON");
    println!();
    println!("Without an API key the results come from a built-in sample set.");
}
