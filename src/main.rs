use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use folio::{rank_scored, Catalog, Key, SearchOptions, SearchSession};

mod cli;
use cli::display::{self, themed, BOLD, CYAN, GRAY};
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            query,
            catalog,
            limit,
            json,
            explain,
        } => run_search(&query, catalog.as_deref(), limit, json, explain),
        Commands::Inspect { catalog } => run_inspect(catalog.as_deref()),
        Commands::Validate { file } => run_validate(&file),
        Commands::Repl { catalog, limit } => run_repl(catalog.as_deref(), limit),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::from_path(path)
                .with_context(|| format!("loading catalog {}", path.display()))?;
            tracing::info!(path = %path.display(), records = catalog.len(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

fn run_search(
    query: &str,
    catalog: Option<&Path>,
    limit: usize,
    json: bool,
    explain: bool,
) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let results = rank_scored(query, &catalog, limit);

    if json {
        let out = if explain {
            serde_json::to_string_pretty(&results)?
        } else {
            let records: Vec<_> = results.iter().map(|scored| scored.record).collect();
            serde_json::to_string_pretty(&records)?
        };
        println!("{}", out);
        return Ok(());
    }

    if results.is_empty() {
        let status = if folio::is_blank(query) {
            folio::SearchStatus::Idle
        } else {
            folio::SearchStatus::NoMatches
        };
        println!("{}", display::status_line(status, query));
        return Ok(());
    }

    for (i, scored) in results.iter().enumerate() {
        let line = display::result_line(i, scored.record, false);
        if explain {
            println!(
                "{}  {}  {}",
                line,
                display::score_value(scored.score),
                themed(GRAY, &[], &display::breakdown_summary(&scored.breakdown))
            );
        } else {
            println!("{}", line);
        }
    }
    Ok(())
}

fn run_inspect(path: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(path)?;
    let source = path.map_or_else(|| "built-in".to_string(), |p| p.display().to_string());

    println!();
    display::section_top("CATALOG");
    display::row(&format!("  Source:   {}", display::truncate(&source, 64)));
    display::row(&format!("  Records:  {}", catalog.len()));
    for (category, count) in catalog.count_by_category() {
        display::row(&format!(
            "    {} {}",
            display::pad_right(&display::category_badge(category), 10),
            count
        ));
    }
    display::section_bot();
    println!();

    display::section_top("RECORDS");
    for record in &catalog {
        display::row(&format!(
            "  {} {}",
            display::pad_right(&display::category_badge(record.category), 10),
            display::pad_right(
                &themed(CYAN, &[BOLD], &display::truncate(&record.id, 24)),
                25
            ),
        ));
        display::row(&format!("      {}", display::truncate(&record.title, 70)));
        display::row(&format!(
            "      {}",
            themed(GRAY, &[], &display::truncate(&record.tags.join(", "), 70))
        ));
    }
    display::section_bot();
    Ok(())
}

fn run_validate(file: &Path) -> Result<()> {
    let catalog = Catalog::from_path(file)
        .with_context(|| format!("validating {}", file.display()))?;
    println!("✓ {} records, ids unique", catalog.len());
    Ok(())
}

/// Line-oriented session. Each line is either a query or a `:command`.
///
/// There's no keystroke stream here, so queries skip the debounce and rank
/// as soon as the line is entered.
fn run_repl(path: Option<&Path>, limit: usize) -> Result<()> {
    let catalog = load_catalog(path)?;
    let options = SearchOptions::default().with_limit(limit);
    let mut session = SearchSession::new(catalog, options);
    session.open();

    eprintln!("Type a query. Commands: :down :up :enter :esc :open :quit");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", themed(CYAN, &[BOLD], "search›"));
        stdout.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line.context("reading stdin")?;

        if let Some(command) = line.trim().strip_prefix(':') {
            if command == "quit" || command == "q" {
                break;
            }
            let key: Key = match command.parse() {
                Ok(key) => key,
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            };
            if let Some(nav) = session.handle_key(key) {
                println!("→ navigate to {} ({})", nav.url, nav.id);
                continue;
            }
        } else {
            session.open();
            session.search_now(&line);
        }

        render_session(&session);
    }

    Ok(())
}

fn render_session(session: &SearchSession) {
    if !session.is_open() {
        println!("{}", themed(GRAY, &[], "(closed; :open to reopen)"));
        return;
    }
    println!("{}", display::status_line(session.status(), session.query()));
    for (i, record) in session.results().iter().enumerate() {
        println!(
            "{}",
            display::result_line(i, record, session.selected() == Some(i))
        );
    }
}
