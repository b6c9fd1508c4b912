//! recipe-finder — 食材检索食谱的命令行工具
//!
//! Usage:
//!   recipe-finder search <ingredients...> [filters] [options]   Ask the service for recipes
//!   recipe-finder render <response.json> [--html]               Render a saved response body
//!   recipe-finder version
//!   recipe-finder help

use recipe_finder::client::RecipeOutcome;
use recipe_finder::config::FinderConfig;
use recipe_finder::page::{Document, PageState, RecipePage, NO_RECIPES_MESSAGE};
use recipe_finder::render::{render_error, render_recipes, render_text};
use recipe_finder::types::{DietaryFilters, DietaryFlag};
use recipe_finder::RecipeClientBuilder;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let result = match args[1].as_str() {
        "search" => cmd_search(&args[2..]).await,
        "render" => cmd_render(&args[2..]),
        "version" | "--version" | "-V" => {
            println!("recipe-finder {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(ExitCode::SUCCESS)
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            Ok(ExitCode::FAILURE)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!(
        r#"recipe-finder — find recipes for the ingredients you have

USAGE:
    recipe-finder <COMMAND> [OPTIONS]

COMMANDS:
    search <ingredients...>     Ask the recommendation service for recipes
    render <response.json>      Render a saved /get_recipes response body
    version                     Show version information
    help                        Show this help message

SEARCH FILTERS:
    --vegetarian  --vegan  --gluten-free  --dairy-free  --nut-free

OPTIONS:
    --url <url>                 Recommendation endpoint
    --timeout-secs <n>          Abort the request after n seconds
    --config <file>             YAML config file (api_url, timeout_ms, skeleton_cards)
    --html                      Print the rendered HTML instead of text

ENVIRONMENT:
    RECIPE_API_URL              Recommendation endpoint (default http://localhost:5000/get_recipes)
    RECIPE_TIMEOUT_SECS         Request timeout in seconds (default 25)
    RECIPE_SKELETON_CARDS       Loading placeholders (default 3)
    RUST_LOG                    Log filter (default warn)"#
    );
}

#[derive(Debug, Default)]
struct SearchArgs {
    words: Vec<String>,
    filters: DietaryFilters,
    url: Option<String>,
    timeout_secs: Option<u64>,
    config: Option<PathBuf>,
    html: bool,
}

fn parse_search_args(args: &[String]) -> anyhow::Result<SearchArgs> {
    let mut parsed = SearchArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--url" => parsed.url = Some(next_value(&mut iter, "--url")?),
            "--timeout-secs" => {
                let raw = next_value(&mut iter, "--timeout-secs")?;
                parsed.timeout_secs = Some(
                    raw.parse()
                        .map_err(|_| anyhow::anyhow!("--timeout-secs expects a number, got '{raw}'"))?,
                );
            }
            "--config" => parsed.config = Some(PathBuf::from(next_value(&mut iter, "--config")?)),
            "--html" => parsed.html = true,
            flag if flag.starts_with("--") => match DietaryFlag::from_name(&flag[2..]) {
                Some(dietary) => parsed.filters.set(dietary, true),
                None => anyhow::bail!("unknown option: {flag}"),
            },
            word => parsed.words.push(word.to_string()),
        }
    }
    Ok(parsed)
}

fn next_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> anyhow::Result<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("{flag} requires a value"))
}

async fn cmd_search(args: &[String]) -> anyhow::Result<ExitCode> {
    let args = parse_search_args(args)?;

    let config = FinderConfig::load(args.config.as_deref())?
        .with_overrides(args.url, args.timeout_secs.map(Duration::from_secs));
    config.validate()?;

    let client = RecipeClientBuilder::from_config(&config).build()?;
    let page = RecipePage::new(client).with_skeleton_cards(config.skeleton_cards);

    let mut doc = Document::with_search(args.words.join(" "), args.filters);
    let state = page.submit(&mut doc).await;

    if args.html {
        println!("{}", doc.container_html());
    } else {
        print_state(&state);
    }
    Ok(exit_code(&state))
}

fn cmd_render(args: &[String]) -> anyhow::Result<ExitCode> {
    let html = args.iter().any(|a| a == "--html");
    let path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .ok_or_else(|| anyhow::anyhow!("render requires a response file"))?;

    let body = std::fs::read_to_string(path)?;
    let state = match RecipeOutcome::from_body(&body)? {
        RecipeOutcome::Recipes(recipes) if recipes.is_empty() => PageState::Empty,
        RecipeOutcome::Recipes(recipes) => PageState::Rendered(recipes),
        RecipeOutcome::ServerError(message) => PageState::Failed(message),
        RecipeOutcome::NoRecipes => PageState::Failed(NO_RECIPES_MESSAGE.to_string()),
    };

    if html {
        match &state {
            PageState::Rendered(recipes) => println!("{}", render_recipes(recipes)),
            PageState::Empty => println!(),
            PageState::Failed(message) => println!("{}", render_error(message)),
        }
    } else {
        print_state(&state);
    }
    Ok(exit_code(&state))
}

fn print_state(state: &PageState) {
    match state {
        PageState::Rendered(recipes) => print!("{}", render_text(recipes)),
        PageState::Empty => println!("No recipes found."),
        PageState::Failed(message) => eprintln!("Error: {message}"),
    }
}

fn exit_code(state: &PageState) -> ExitCode {
    match state {
        PageState::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
