//! Map the lookup view onto ratatui widgets.
//!
//! The results pane is built as plain `Line`s first (`result_lines`), which
//! keeps it testable and lets `--print` reuse the same layout without a
//! terminal.

use lexis_core::view::{LookupView, RequestStatus};
use lexis_types::{DictionaryEntry, Meaning};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use throbber_widgets_tui::Throbber;

use crate::keys::HELP;
use crate::theme::Palette;
use crate::update::UiState;

pub const PLACEHOLDER: &str = "Search for a word...";
pub const SEARCHING: &str = "Searching...";

/// Lines of the results pane plus the line each entry starts on
pub struct ResultLines {
    pub lines: Vec<Line<'static>>,
    pub entry_starts: Vec<usize>,
}

pub fn render(frame: &mut Frame, view: &LookupView, ui: &mut UiState) {
    let palette = Palette::for_mode(view.dark_mode());
    let area = frame.area();
    frame.render_widget(Block::new().style(palette.base), area);

    let [header, search, content, help] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, view, palette, header);
    render_search(frame, view, palette, search);

    match view.status() {
        RequestStatus::Loading => render_loading(frame, palette, ui, content),
        RequestStatus::Error(message) => render_error(frame, message, palette, content),
        RequestStatus::Loaded if view.shows_results() => {
            render_results(frame, view, palette, ui, content)
        }
        _ => {}
    }

    frame.render_widget(Paragraph::new(Span::styled(HELP, palette.help)), help);

    if let Some(notice) = view.notice() {
        render_notice(frame, notice.message(), palette, area);
    }
}

fn render_header(frame: &mut Frame, view: &LookupView, palette: &Palette, area: Rect) {
    let block = Block::new()
        .borders(Borders::BOTTOM)
        .border_style(palette.border);
    let [title_area, controls_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(28)]).areas(block.inner(area));
    frame.render_widget(block, area);

    let title = Paragraph::new(Span::styled(view.title().to_string(), palette.strong()));
    frame.render_widget(title, title_area);

    let theme = if view.dark_mode() { "☾ Dark" } else { "☀ Light" };
    let controls = Paragraph::new(Line::from(vec![
        Span::styled("Font: ", palette.muted),
        Span::styled(view.font().label(), palette.text),
        Span::styled("   ", palette.muted),
        Span::styled(theme, palette.accent),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(controls, controls_area);
}

fn render_search(frame: &mut Frame, view: &LookupView, palette: &Palette, area: Rect) {
    let block = Block::bordered()
        .border_style(palette.accent)
        .title(Span::styled(" Search ", palette.accent));
    let inner = block.inner(area);

    let text = if view.term().is_empty() {
        Span::styled(PLACEHOLDER, palette.muted)
    } else {
        Span::styled(view.term().to_string(), palette.text)
    };
    frame.render_widget(Paragraph::new(text).block(block), area);

    if view.notice().is_none() {
        let cursor_x = inner
            .x
            .saturating_add(Span::raw(view.term()).width() as u16)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

fn render_loading(frame: &mut Frame, palette: &Palette, ui: &mut UiState, area: Rect) {
    let [_, row, _] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    let [_, centered, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(SEARCHING.len() as u16 + 2),
        Constraint::Fill(1),
    ])
    .areas(row);

    let throbber = Throbber::default()
        .label(SEARCHING)
        .style(palette.muted)
        .throbber_style(palette.accent);
    frame.render_stateful_widget(throbber, centered, &mut ui.throbber);
}

fn render_error(frame: &mut Frame, message: &str, palette: &Palette, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), palette.error)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_results(
    frame: &mut Frame,
    view: &LookupView,
    palette: &Palette,
    ui: &mut UiState,
    area: Rect,
) {
    let ResultLines {
        lines,
        entry_starts,
    } = result_lines(view, palette);

    ui.viewport_height = area.height;
    if ui.jump_to_active {
        ui.jump_to_active = false;
        if let Some(start) = entry_starts.get(view.active_entry()) {
            ui.scroll = *start as u16;
        }
    }
    ui.scroll = ui.scroll.min(lines.len().saturating_sub(1) as u16);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((ui.scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_notice(frame: &mut Frame, message: &str, palette: &Palette, area: Rect) {
    let width = (message.chars().count() as u16 + 6).min(area.width);
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, popup, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(row);

    let block = Block::bordered()
        .border_style(palette.error)
        .title(Span::styled(" Notice ", palette.error))
        .style(palette.base);
    let text = vec![
        Line::from(Span::styled(message.to_string(), palette.text)),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", palette.accent)),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        popup,
    );
}

/// Build the results pane for every entry in the view
pub fn result_lines(view: &LookupView, palette: &Palette) -> ResultLines {
    let mut lines = Vec::new();
    let mut entry_starts = Vec::new();

    for (index, entry) in view.entries().iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        entry_starts.push(lines.len());
        push_entry(&mut lines, view, index, entry, palette);
    }

    ResultLines {
        lines,
        entry_starts,
    }
}

fn push_entry(
    lines: &mut Vec<Line<'static>>,
    view: &LookupView,
    index: usize,
    entry: &DictionaryEntry,
    palette: &Palette,
) {
    let active = index == view.active_entry();

    lines.push(Line::from(Span::styled(
        entry.word.clone(),
        palette.heading(view.font()),
    )));

    if !entry.phonetic.is_empty() {
        lines.push(Line::from(Span::styled(entry.phonetic.clone(), palette.muted)));
    }

    if entry.has_audio() {
        lines.push(audio_line(view, active, palette));
    }

    if let Some(origin) = entry.origin() {
        lines.push(Line::from(vec![
            Span::styled("Origin: ", palette.strong()),
            Span::styled(origin.to_string(), palette.muted),
        ]));
    }

    for meaning in &entry.meanings {
        lines.push(Line::from(""));
        push_meaning(lines, meaning, palette);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("─".repeat(40), palette.border)));
    lines.push(Line::from(vec![
        Span::styled("Source: ", palette.strong()),
        Span::styled(entry.source_url(), palette.link()),
    ]));
}

fn audio_line(view: &LookupView, active: bool, palette: &Palette) -> Line<'static> {
    if !active {
        return Line::from(Span::styled("♪ [Tab] select to play", palette.muted));
    }

    if view.audio_playing() {
        Line::from(Span::styled("◌ Playing pronunciation", palette.muted))
    } else {
        Line::from(vec![
            Span::styled("▶ Play pronunciation ", palette.accent),
            Span::styled("[^P]", palette.help),
        ])
    }
}

fn push_meaning(lines: &mut Vec<Line<'static>>, meaning: &Meaning, palette: &Palette) {
    lines.push(Line::from(Span::styled(
        meaning.part_of_speech.clone(),
        palette.strong(),
    )));
    lines.push(Line::from(Span::styled("Meaning", palette.text)));

    for (number, definition) in meaning.definitions.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", number + 1), palette.accent),
            Span::styled(definition.definition.clone(), palette.text),
        ]));
        if let Some(example) = definition.example() {
            lines.push(Line::from(Span::styled(
                format!("     \"{example}\""),
                palette.muted.add_modifier(ratatui::style::Modifier::ITALIC),
            )));
        }
    }

    if meaning.has_synonyms() {
        lines.push(Line::from(Span::styled("Synonyms", palette.strong())));
        let mut spans = vec![Span::raw("  ")];
        for (i, synonym) in meaning.synonyms().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(", ", palette.muted));
            }
            spans.push(Span::styled(synonym.to_string(), palette.strong()));
        }
        lines.push(Line::from(spans));
    }
}

/// Flatten a line to its text
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}
