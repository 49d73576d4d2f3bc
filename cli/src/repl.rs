//! Interactive search loop: read input, run one search through the reducer-driven
//! view state, print progress and results, repeat until EOF or quit.
//!
//! All display is derived from [`ViewState`]; the loop never keeps its own
//! results or error flags.

use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};

use cli::SearchBackend;
use gearfinder::activities::{by_number, ACTIVITIES};
use gearfinder::{
    RecentSearches, RecommendationSet, SearchEvent, SearchUi, StepState, ViewState,
};

/// One parsed line of REPL input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ReplInput {
    Quit,
    Back,
    Recent,
    Activities,
    /// Activity tile by 1-based number.
    Tile(usize),
    /// Recent search by 1-based position.
    Replay(usize),
    Query(String),
}

/// `None` for a blank line. A bare number picks an activity tile, `!N` replays a
/// recent search, anything else is a query.
pub(crate) fn parse_input(line: &str) -> Option<ReplInput> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match line.to_lowercase().as_str() {
        "quit" | "exit" | "/quit" => return Some(ReplInput::Quit),
        "back" => return Some(ReplInput::Back),
        "recent" => return Some(ReplInput::Recent),
        "activities" => return Some(ReplInput::Activities),
        _ => {}
    }
    if let Ok(n) = line.parse::<usize>() {
        return Some(ReplInput::Tile(n));
    }
    if let Some(rest) = line.strip_prefix('!') {
        if let Ok(n) = rest.trim().parse::<usize>() {
            return Some(ReplInput::Replay(n));
        }
    }
    Some(ReplInput::Query(line.to_string()))
}

pub(crate) fn print_activities() {
    println!("Activities:");
    for (i, name) in ACTIVITIES.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, name);
    }
}

fn print_recent(recent: &RecentSearches) {
    if recent.is_empty() {
        println!("No recent searches.");
        return;
    }
    println!("Recent searches (replay with !N):");
    for (i, query) in recent.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, query);
    }
}

/// Prints the label of whichever step just went into Loading.
fn print_loading_step(ui: &SearchUi) {
    if let ViewState::Searching { steps, .. } = ui.state() {
        for (i, step) in steps.iter().enumerate() {
            if step.state == StepState::Loading {
                println!("[{}/{}] {}", i + 1, steps.len(), step.label);
            }
        }
    }
}

fn render_results(query: &str, set: &RecommendationSet) {
    println!();
    println!("Results for \"{query}\"");
    println!("Found {} recommendations", set.len());
    for (i, (_key, item)) in set.iter().enumerate() {
        println!("  {:>2}. {}: {}", i + 1, item.name, item.description);
    }
}

/// Runs one search turn: submit through the reducer, call the backend, feed the
/// completion back in (tagged with the issuing sequence), render the final state.
pub(crate) async fn run_one_search(
    backend: &dyn SearchBackend,
    ui: &mut SearchUi,
    recent: &mut RecentSearches,
    query: &str,
    json: bool,
) {
    recent.record(query);
    ui.apply(SearchEvent::Submitted {
        query: query.to_string(),
    });
    let Some(seq) = ui.active_seq() else {
        return;
    };
    if !json {
        print_loading_step(ui);
    }

    match backend.search(query).await {
        Ok(envelope) => {
            tracing::debug!(query, "relay response received");
            ui.apply(SearchEvent::ResponseReceived { seq });
            if !json {
                print_loading_step(ui);
            }
            match RecommendationSet::from_value(&envelope.result.response) {
                Ok(set) => {
                    ui.apply(SearchEvent::Resolved { seq, set });
                    if json {
                        match serde_json::to_string_pretty(&envelope) {
                            Ok(s) => println!("{s}"),
                            Err(e) => eprintln!("error: {e}"),
                        }
                    }
                }
                Err(e) => ui.apply(SearchEvent::Failed {
                    seq,
                    error: e.to_string(),
                }),
            }
        }
        Err(e) => ui.apply(SearchEvent::Failed {
            seq,
            error: e.to_string(),
        }),
    }

    match ui.state() {
        ViewState::Searching {
            query,
            results: Some(set),
            ..
        } => {
            if !json {
                render_results(query, set);
            }
        }
        ViewState::Idle {
            last_error: Some(error),
        } => {
            tracing::warn!(query, %error, "search failed");
            eprintln!("error: {error}");
        }
        _ => {}
    }
}

/// Runs the REPL: prompt, read line, dispatch, repeat. Exits on EOF or quit.
pub(crate) async fn run_repl_loop(
    backend: &dyn SearchBackend,
    initial_query: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ui = SearchUi::new();
    let mut recent = RecentSearches::new();

    print_activities();
    println!("Type a query, a tile number, recent, back, or quit.");

    if let Some(query) = initial_query {
        run_one_search(backend, &mut ui, &mut recent, &query, json).await;
    }

    let mut reader = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = reader.next_line().await? else {
            break;
        };
        match parse_input(&line) {
            None => continue,
            Some(ReplInput::Quit) => break,
            Some(ReplInput::Back) => {
                ui.apply(SearchEvent::Back);
                print_activities();
            }
            Some(ReplInput::Recent) => print_recent(&recent),
            Some(ReplInput::Activities) => print_activities(),
            Some(ReplInput::Tile(n)) => match by_number(n) {
                Some(name) => run_one_search(backend, &mut ui, &mut recent, name, json).await,
                None => eprintln!("no such activity: {n}"),
            },
            Some(ReplInput::Replay(n)) => {
                let query = n
                    .checked_sub(1)
                    .and_then(|i| recent.get(i))
                    .map(str::to_string);
                match query {
                    Some(query) => {
                        run_one_search(backend, &mut ui, &mut recent, &query, json).await
                    }
                    None => eprintln!("no recent search: !{n}"),
                }
            }
            Some(ReplInput::Query(query)) => {
                run_one_search(backend, &mut ui, &mut recent, &query, json).await
            }
        }
    }

    println!("Bye.");
    Ok(())
}
