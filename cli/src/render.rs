//! Plain-text board rendering for terminal output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write;

use kanban::{BoardState, Card, Status};

/// Render the requested columns (all when `only` is `None`) in column order.
pub fn render_board(state: &BoardState, only: Option<Status>) -> String {
    let mut out = String::new();
    for status in Status::ALL {
        if only.is_some_and(|s| s != status) {
            continue;
        }
        let cards: Vec<&Card> = state.column(status).collect();
        let _ = writeln!(out, "{} ({})", status.title(), cards.len());
        for card in cards {
            out.push_str(&render_card(card));
        }
    }
    out
}

pub fn render_card(card: &Card) -> String {
    let mut out = format!("  [{}] {} ({})\n", card.id, card.title, card.priority);
    if !card.description.is_empty() {
        let _ = writeln!(out, "      {}", card.description);
    }
    out
}
