//! Plain-text table rendering of a ledger.
//!
//! Columns are aligned by display width so CJK names and descriptions line
//! up in a terminal.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::EngineWarning;
use crate::event::{AtBatEvent, GameEventLog, Half};

/// Widest description shown before truncation.
pub const PLAY_WIDTH: usize = 32;

const HEADERS: [&str; 8] = [
    "INN", "HITTER", "OUTS", "RUNNERS", "PA", "CATEGORY", "CODE", "PLAY",
];

/// Truncate a string to fit within max_width display columns, adding "…" if needed
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    const ELLIPSIS: &str = "…";
    let target_width = max_width.saturating_sub(ELLIPSIS.width());
    let mut truncated = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        truncated.push(c);
        current_width += char_width;
    }

    format!("{}{}", truncated, ELLIPSIS)
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn inning_label(event: &AtBatEvent) -> String {
    let half = match event.half {
        Half::Top => 'T',
        Half::Bottom => 'B',
    };
    format!("{}{}", half, event.inning)
}

fn row(event: &AtBatEvent) -> [String; 8] {
    let dash = || "-".to_string();
    let code = match (&event.result_short, event.unmatched) {
        (Some(code), _) => code.clone(),
        (None, true) => "?".to_string(),
        (None, false) => dash(),
    };
    [
        inning_label(event),
        event.hitter_name.clone(),
        event.outs_before.map(|o| o.to_string()).unwrap_or_else(dash),
        event
            .runners_before_description
            .clone()
            .unwrap_or_else(dash),
        event
            .sequence_in_game
            .map(|n| n.to_string())
            .unwrap_or_else(dash),
        event.result_category.label().to_string(),
        code,
        truncate_str(&event.description, PLAY_WIDTH),
    ]
}

fn join_line(cells: &[String], widths: &[usize]) -> String {
    let last = cells.len().saturating_sub(1);
    let mut parts: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, w))| if i == last { cell.clone() } else { pad(cell, *w) })
        .collect();
    if let Some(tail) = parts.last_mut() {
        let trimmed = tail.trim_end().len();
        tail.truncate(trimmed);
    }
    parts.join("  ")
}

/// Render the ledger as an aligned table followed by a summary line.
pub fn render_table(log: &GameEventLog) -> String {
    let rows: Vec<[String; 8]> = log.events.iter().map(row).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
    for cells in &rows {
        for (w, cell) in widths.iter_mut().zip(cells.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();

    let mut out = String::new();
    if let Some(id) = &log.game_id {
        out.push_str(&format!("Game {}\n", id));
    }
    out.push_str(&join_line(&header, &widths));
    out.push('\n');
    out.push_str(&join_line(&rule, &widths));
    out.push('\n');
    for cells in &rows {
        out.push_str(&join_line(cells, &widths));
        out.push('\n');
    }
    out.push_str(&summary(log));
    out.push('\n');
    out
}

/// One-line count of events, plate appearances and unmatched ones.
pub fn summary(log: &GameEventLog) -> String {
    format!(
        "{} events, {} plate appearances, {} unmatched",
        log.events.len(),
        log.plate_appearances(),
        log.unmatched_count()
    )
}

/// Warnings as "warning: <message>" lines.
pub fn render_warnings(warnings: &[EngineWarning]) -> String {
    warnings
        .iter()
        .map(|w| format!("warning: {}\n", w))
        .collect()
}
