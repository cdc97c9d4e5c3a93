use anyhow::Result;
use bizfinder::cli::{self, Command, SearchArgs};
use bizfinder::config::Config;
use bizfinder::context::{AppContext, StandardContext};
use bizfinder::session::SearchSession;
use bizfinder::{DataSource, Finder};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = match cli::parse_args(&args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}\n", e);
            cli::print_help("bizfinder");
            std::process::exit(2);
        }
    };

    let level = if parsed.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        ConfigBuilder::new().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let ctx = StandardContext::new(parsed.root.clone());

    match parsed.command {
        Command::Help => cli::print_help("bizfinder"),
        Command::Regions => println!("{}", cli::render_regions()),
        Command::Categories => println!("{}", cli::render_categories()),
        Command::SetKey(key) => {
            let mut config = load_config(&ctx);
            config.api_key = key;
            config.save(&ctx)?;
            println!("API key saved to {}", Config::get_path_string(&ctx)?);
        }
        Command::ClearKey => {
            let mut config = load_config(&ctx);
            config.api_key.clear();
            config.save(&ctx)?;
            println!("API key removed. Searches now use sample data.");
        }
        Command::Search(search) => {
            let config = load_config(&ctx);
            if let Err(e) = run_search(&config, search).await {
                eprintln!("데이터를 불러오지 못했습니다: {}", e);
                eprintln!("1. API 인증키가 올바른지 확인해주세요.");
                eprintln!("2. 일일 트래픽 한도가 초과되었을 수 있습니다.");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn load_config(ctx: &dyn AppContext) -> Config {
    match Config::load_or_default(ctx) {
        Ok(c) => c,
        Err(e) => {
            // A broken file is reported instead of being silently replaced.
            eprintln!("Error loading configuration:\n{}", e);
            std::process::exit(1);
        }
    }
}

async fn run_search(config: &Config, search: SearchArgs) -> Result<()> {
    let finder = Finder::from_config(config)?;
    let mut session = SearchSession::new();

    let mut request = Some(session.begin_search(search.filters));
    while let Some(req) = request {
        let result = finder
            .fetch_page(&req.filters, req.page_index, &config.api_key)
            .await;
        session.complete(&req, result)?;

        request = if session.page_index() < search.pages {
            session.begin_load_more()
        } else {
            None
        };
    }

    if search.json {
        println!("{}", serde_json::to_string_pretty(session.records())?);
        return Ok(());
    }

    if session.source() == Some(DataSource::Sample) {
        println!("현재 샘플 데이터 모드입니다. 'bizfinder set-key <KEY>'로 인증키를 등록하세요.\n");
    }
    if session.records().is_empty() {
        println!("검색 결과가 없습니다. 다른 지역이나 카테고리로 검색해보세요.");
        return Ok(());
    }

    print!("{}", cli::render_table(session.records()));
    println!();
    println!(
        "검색 결과 {}건{}",
        session.records().len(),
        if session.is_exhausted() {
            ""
        } else {
            " (more available: --pages)"
        }
    );
    Ok(())
}
