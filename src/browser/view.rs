use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::model::DirBrowser;

pub const HELP: &str = "Select path (Enter=open, Space=choose, Backspace=up, q=cancel)";
pub const EMPTY: &str = "<empty>";

/// First visible row for a window of `height` rows centred on `cursor`.
pub(crate) fn window_start(cursor: usize, total: usize, height: usize) -> usize {
    if total <= height || height == 0 {
        return 0;
    }
    let start = cursor.saturating_sub(height / 2);
    start.min(total - height)
}

pub fn draw(frame: &mut Frame, browser: &DirBrowser) {
    let [header, current, list] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(frame.area());

    frame.render_widget(Paragraph::new(HELP), header);
    frame.render_widget(
        Paragraph::new(format!("Current: {}", browser.current_dir().display())),
        current,
    );

    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(list);
    frame.render_widget(block, list);

    let entries = browser.entries();
    if entries.is_empty() {
        frame.render_widget(Paragraph::new(EMPTY), inner);
        return;
    }

    let height = inner.height as usize;
    let start = window_start(browser.cursor(), entries.len(), height);
    let end = (start + height).min(entries.len());

    let lines: Vec<Line> = entries[start..end]
        .iter()
        .enumerate()
        .map(|(offset, entry)| {
            let selected = start + offset == browser.cursor();
            let marker = if selected { ">" } else { " " };
            let suffix = if entry.is_dir() { "/" } else { "" };
            let line = Line::from(format!("{} {}{}", marker, entry.name, suffix));
            if selected {
                line.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
