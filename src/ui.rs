//! UI rendering for the player screen.
//!
//! [`draw`] is a pure function of the catalog, the session state and the
//! cached tag summary. The panel contents are built by small string helpers
//! so they can be checked without a terminal.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::browser::window_start;
use crate::library::Catalog;

const BANNER: [&str; 6] = [
    r"_________  ____ __________________________________.____       _____ _____.___._____________________ ",
    r"\_   ___ \|    |   \______   \_   _____/\______   \    |     /  _  \\__  |   |\_   _____/\______   \",
    r"/    \  \/|    |   /|    |  _/|    __)_  |     ___/    |    /  /_\  \/   |   | |    __)_  |       _/",
    r"\     \___|    |  / |    |   \|        \ |    |   |    |___/    |    \____   | |        \ |    |   \",
    r" \______  /______/  |______  /_______  / |____|   |_______ \____|__  / ______|/_______  / |____|_  /",
    r"        \/                 \/        \/                   \/       \/\/               \/         \/",
];

const KEY_HELP: [&str; 12] = [
    "Space: Play/Pause",
    "Enter: Play selected",
    "Up/Down: Select track",
    "Left/Right: Seek ±5s",
    "n/p (т/з): Next/Prev track",
    "s (ы): Stop",
    "r (к): Repeat",
    "h (р): Shuffle",
    "b (и): Browse folder",
    "k (л): Toggle keys panel",
    "q (й): Quit",
    "+/-: Volume",
];

pub const FOOTER_HINT: &str = "[Space]Play/Pause [n/p]Track [k]Keys [q]Quit";

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '·';

/// Everything a frame needs, borrowed from the session.
pub struct View<'a> {
    pub catalog: &'a Catalog,
    pub app: &'a App,
    pub tags: &'a [String],
    pub visualizer_height: u16,
}

/// Format a `Duration` as `MM:SS`.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `MM:SS`, or `--:--` when unknown.
pub fn human_time(d: Option<Duration>) -> String {
    d.map(format_mmss).unwrap_or_else(|| "--:--".to_string())
}

pub fn time_readout(elapsed: Duration, duration: Option<Duration>) -> String {
    format!("{} / {}", format_mmss(elapsed), human_time(duration))
}

/// Share of the track already played, within `0.0..=1.0`. Zero when the
/// length is unknown.
pub fn progress_fraction(elapsed: Duration, duration: Option<Duration>) -> f64 {
    match duration {
        Some(total) if !total.is_zero() => {
            (elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
        }
        _ => 0.0,
    }
}

/// `[████····]` exactly `width` columns wide (at least the two brackets).
pub fn progress_bar(elapsed: Duration, duration: Option<Duration>, width: usize) -> String {
    let cells = width.saturating_sub(2);
    let filled = ((progress_fraction(elapsed, duration) * cells as f64) as usize).min(cells);

    let mut bar = String::with_capacity(width * 3);
    bar.push('[');
    bar.extend(std::iter::repeat_n(BAR_FILLED, filled));
    bar.extend(std::iter::repeat_n(BAR_EMPTY, cells - filled));
    bar.push(']');
    bar
}

/// Height of visualizer bar `index`, in `1..=max_height`.
pub fn bar_level(phase: f64, index: usize, max_height: u16) -> u16 {
    let max_height = max_height.max(1);
    let wave = (1.0 + (phase + index as f64 * 0.5).sin()) / 2.0;
    1 + (wave * f64::from(max_height - 1)).floor() as u16
}

/// Rows of the visualizer, top row first, each exactly `width` columns.
pub fn visualizer_lines(phase: f64, width: usize, max_height: u16) -> Vec<String> {
    let max_height = max_height.max(1);
    let bars = (width / 2).max(1);
    let levels: Vec<u16> = (0..bars).map(|i| bar_level(phase, i, max_height)).collect();

    (1..=max_height)
        .rev()
        .map(|row| {
            let mut line: String = levels
                .iter()
                .flat_map(|&level| [if level >= row { BAR_FILLED } else { ' ' }, ' '])
                .take(width)
                .collect();
            let len = line.chars().count();
            line.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
            line
        })
        .collect()
}

pub fn status_line(app: &App) -> String {
    let on_off = |b: bool| if b { "ON" } else { "OFF" };
    format!(
        "{}  Repeat:{}  Shuffle:{}  Vol:{}%",
        if app.paused { "Paused" } else { "Playing" },
        on_off(app.repeat),
        on_off(app.shuffle),
        app.volume_percent()
    )
}

/// Visible tracklist rows for a window of `height` rows centred on the
/// selection, plus the row index of the selection within the window.
pub fn tracklist_lines(catalog: &Catalog, app: &App, height: usize) -> (Vec<String>, Option<usize>) {
    let total = catalog.len();
    if total == 0 || height == 0 {
        return (Vec::new(), None);
    }
    let start = window_start(app.selection_index, total, height);
    let end = (start + height).min(total);

    let lines = catalog.tracks()[start..end]
        .iter()
        .enumerate()
        .map(|(offset, track)| {
            let idx = start + offset;
            let selector = if idx == app.selection_index { '*' } else { ' ' };
            let playing = if idx == app.current_index { '>' } else { ' ' };
            format!("{}{} {:02}. {}", selector, playing, idx + 1, track.title)
        })
        .collect();

    let selected = app
        .selection_index
        .checked_sub(start)
        .filter(|&row| row < end - start);
    (lines, selected)
}

pub fn footer_text(app: &App) -> String {
    if app.status_message.is_empty() {
        FOOTER_HINT.to_string()
    } else {
        format!("{} | {}", FOOTER_HINT, app.status_message)
    }
}

/// Keep at most `width` characters of `line`.
fn clip(line: &str, width: usize) -> String {
    line.chars().take(width).collect()
}

fn boxed(title: &str) -> Block<'_> {
    Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
}

fn draw_lines(frame: &mut Frame, area: Rect, title: &str, lines: Vec<String>) {
    let block = boxed(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let width = inner.width as usize;
    let lines: Vec<Line> = lines.iter().map(|l| Line::from(clip(l, width))).collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_empty(frame: &mut Frame) {
    let area = frame.area();
    let area = Rect {
        height: area.height.min(3),
        ..area
    };
    draw_lines(frame, area, " No tracks ", vec!["No tracks found.".to_string()]);
}

/// Render the entire player screen.
pub fn draw(frame: &mut Frame, view: &View) {
    let app = view.app;
    let Some(current) = view.catalog.get(app.current_index) else {
        draw_empty(frame);
        return;
    };

    let area = frame.area();
    let viz_rows = view.visualizer_height.max(1);
    let mut constraints = vec![
        Constraint::Length(BANNER.len() as u16),
        Constraint::Length(6),
        Constraint::Length(viz_rows + 2),
        Constraint::Length(view.tags.len() as u16 + 2),
    ];
    if app.show_keys {
        constraints.push(Constraint::Length(KEY_HELP.len() as u16 + 2));
    }
    constraints.push(Constraint::Min(3));
    constraints.push(Constraint::Length(1));
    let chunks = Layout::vertical(constraints).split(area);

    // Banner
    let width = area.width as usize;
    let banner: Vec<Line> = BANNER.iter().map(|l| Line::from(clip(l, width))).collect();
    frame.render_widget(Paragraph::new(banner).alignment(Alignment::Center), chunks[0]);

    // Now playing
    let inner_width = chunks[1].width.saturating_sub(2) as usize;
    draw_lines(
        frame,
        chunks[1],
        " Now Playing ",
        vec![
            format!("Track: {}", current.title),
            status_line(app),
            time_readout(app.elapsed, current.duration),
            progress_bar(app.elapsed, current.duration, inner_width),
        ],
    );

    // Visualizer
    let viz_inner = chunks[2].height.saturating_sub(2).min(viz_rows).max(1);
    draw_lines(
        frame,
        chunks[2],
        " Visualizer ",
        visualizer_lines(app.viz_phase, chunks[2].width.saturating_sub(2) as usize, viz_inner),
    );

    // Tags
    draw_lines(frame, chunks[3], " Tags ", view.tags.to_vec());

    let mut next = 4;
    if app.show_keys {
        draw_lines(
            frame,
            chunks[next],
            " Keys ",
            KEY_HELP.iter().map(|s| s.to_string()).collect(),
        );
        next += 1;
    }

    // Tracklist
    let list_area = chunks[next];
    let block = boxed(" Tracklist ");
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);
    let (rows, selected) = tracklist_lines(view.catalog, app, inner.height as usize);
    let list_width = inner.width as usize;
    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let line = Line::from(clip(row, list_width));
            if Some(i) == selected {
                line.style(Style::default().add_modifier(Modifier::REVERSED))
            } else {
                line
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    // Footer
    let footer = Paragraph::new(clip(&footer_text(app), width));
    frame.render_widget(footer, chunks[next + 1]);
}
