//! Plain-text rendering of the beer screen

use std::fmt::Write;

use crate::model::{Beer, BeerRecord, CurrentDetail};
use crate::view::BeerView;

pub const HISTORY_TITLE: &str = "Fetch history:";
pub const EMPTY_HISTORY: &str = "(no beers fetched yet)";

/// Render the detail block for one beer
pub fn render_beer(beer: &Beer) -> String {
    format!(
        "Brand: {}\nName: {}\nStyle: {}\n",
        beer.brand, beer.name, beer.style
    )
}

/// Render the current detail, noting when the beer is not in history
pub fn render_detail(detail: &CurrentDetail) -> String {
    let mut out = String::new();
    match detail.record_id() {
        Some(id) => {
            let _ = writeln!(out, "Beer #{}", id);
        }
        None => out.push_str("Fetched beer\n"),
    }
    out.push_str(&render_beer(detail.beer()));
    out
}

/// Render one history line
pub fn render_history_line(record: &BeerRecord) -> String {
    format!(
        "#{} Brand: {} | Name: {} | Style: {}",
        record.id, record.beer.brand, record.beer.name, record.beer.style
    )
}

pub fn render_history(records: &[BeerRecord]) -> String {
    let mut out = String::new();
    out.push_str(HISTORY_TITLE);
    out.push('\n');
    if records.is_empty() {
        out.push_str(EMPTY_HISTORY);
        out.push('\n');
    }
    for record in records {
        out.push_str(&render_history_line(record));
        out.push('\n');
    }
    out
}

/// Render the whole screen: current detail (if any) then history
pub fn render_view(view: &BeerView) -> String {
    let mut out = String::new();
    if let Some(detail) = view.current() {
        out.push_str(&render_detail(detail));
        out.push('\n');
    }
    out.push_str(&render_history(view.history()));
    out
}
