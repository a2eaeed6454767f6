//! Read-only listings of the history and the stash.
//!
//! Listings never write the store, even when it failed to decode.

use console::{measure_text_width, style};
use ucd_core::{Collection, Config, Locations, RecordStore, StoreFile};

/// Print the most recently visited paths.
pub fn history(locations: &Locations, config: &Config) {
    let store = StoreFile::new(&locations.store_file).load();
    eprint!("{}", history_table(&store, config.history_limit()));
}

/// Print the stashed paths.
pub fn stash(locations: &Locations, config: &Config) {
    let store = StoreFile::new(&locations.store_file).load();
    eprint!("{}", stash_table(&store, config.history_limit()));
}

fn history_table(store: &RecordStore, limit: Option<usize>) -> String {
    let rows: Vec<Vec<String>> = store
        .ordered(Collection::History)
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, path)| {
            let rec = &store.visited[path];
            vec![
                (i + 1).to_string(),
                path.to_string(),
                rec.visit_count.to_string(),
                rec.last_visited_at.clone(),
            ]
        })
        .collect();
    render_table(&["#", "path", "count", "timestamp"], &rows)
}

fn stash_table(store: &RecordStore, limit: Option<usize>) -> String {
    let rows: Vec<Vec<String>> = store
        .ordered(Collection::Stash)
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, path)| {
            let rec = &store.stashed[path];
            vec![
                (i + 1).to_string(),
                path.to_string(),
                rec.alias.clone(),
                rec.stashed_at.clone(),
            ]
        })
        .collect();
    render_table(&["#", "path", "alias", "timestamp"], &rows)
}

/// Boxed table with an upper-cased header row.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let mut out = border.clone();
    out.push('|');
    for (header, width) in headers.iter().zip(&widths) {
        let padded = pad(&header.to_uppercase(), *width);
        out.push_str(&format!(" {} |", style(padded).bold().for_stderr()));
    }
    out.push('\n');
    out.push_str(&border);

    for row in rows {
        out.push('|');
        for (cell, width) in row.iter().zip(&widths) {
            out.push_str(&format!(" {} |", pad(cell, *width)));
        }
        out.push('\n');
    }
    if !rows.is_empty() {
        out.push_str(&border);
    }
    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(measure_text_width(text));
    format!("{}{}", text, " ".repeat(fill))
}
