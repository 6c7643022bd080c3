// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Interactive seat-map viewer (ratatui + crossterm): deck tabs, a seat
//! cursor with an inspector panel, fuzzy seat search, and OSC52 clipboard
//! yank of the rendered grid. Includes a built-in demo seat map.

use std::{collections::BTreeMap, error::Error, io, sync::Arc, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tokio::sync::Mutex;

use crate::layout::{layout_deck, DeckLayout};
use crate::model::{
    Deck, DeckConfiguration, SeatCharacteristic, SeatRecord, SeatmapData, TravelerPricing,
};
use crate::query::{availability_summary, find_seat, fuzzy_seat_matches};
use crate::render::deck::render_layout_annotated;
use crate::render::{RenderOptions, NO_DATA_TEXT};
use crate::ui::UiState;

mod theme;

use theme::TuiTheme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅲 🅰 🅱 🅸 🅽 🆅 🅸 🅴 🆆 ";
const INSPECTOR_WIDTH: u16 = 34;

/// Runs the interactive viewer over an already-ingested seat map. When a
/// shared [`UiState`] is passed, the selection is published into it so MCP
/// clients can follow along.
pub fn run_with_ui_state(
    seatmap: Option<SeatmapData>,
    source: Option<String>,
    ui_state: Option<Arc<Mutex<UiState>>>,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(seatmap, source, ui_state);
    app.select_first_seat();
    app.publish_selection();

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Move {
    Left,
    Right,
    Up,
    Down,
}

struct App {
    seatmap: Option<SeatmapData>,
    source: Option<String>,
    active_deck: usize,
    /// Cursor position in the active deck: (row index, column offset).
    selected: Option<(usize, i32)>,
    search: Option<String>,
    show_legend: bool,
    toast: Option<String>,
    should_quit: bool,
    theme: TuiTheme,
    ui_state: Option<Arc<Mutex<UiState>>>,
}

impl App {
    fn new(
        seatmap: Option<SeatmapData>,
        source: Option<String>,
        ui_state: Option<Arc<Mutex<UiState>>>,
    ) -> Self {
        let (theme, toast) = match TuiTheme::from_env() {
            Ok(theme) => (theme, None),
            Err(err) => (TuiTheme::default(), Some(err.to_string())),
        };
        Self {
            seatmap,
            source,
            active_deck: 0,
            selected: None,
            search: None,
            show_legend: true,
            toast,
            should_quit: false,
            theme,
            ui_state,
        }
    }

    fn deck_count(&self) -> usize {
        self.seatmap.as_ref().map(|seatmap| seatmap.decks().len()).unwrap_or(0)
    }

    fn active_seats(&self) -> &[SeatRecord] {
        match &self.seatmap {
            Some(seatmap) => seatmap.deck_seats(self.active_deck),
            None => &[],
        }
    }

    fn active_config(&self) -> Option<&DeckConfiguration> {
        self.seatmap
            .as_ref()
            .and_then(|seatmap| seatmap.decks().get(self.active_deck))
            .and_then(Deck::deck_configuration)
    }

    fn active_layout(&self) -> Option<DeckLayout<'_>> {
        layout_deck(self.active_seats(), self.active_config()).ok()
    }

    fn selected_seat(&self) -> Option<&SeatRecord> {
        let (row_idx, col) = self.selected?;
        let layout = self.active_layout()?;
        let row_offset = *layout.row_offsets().get(row_idx)?;
        layout.seat_at(row_offset, col)
    }

    fn select_first_seat(&mut self) {
        self.selected = self.active_layout().and_then(|layout| {
            let row_offset = *layout.row_offsets().first()?;
            layout
                .columns()
                .find(|&col| layout.seat_at(row_offset, col).is_some())
                .map(|col| (0, col))
        });
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(message.into());
    }

    fn publish_selection(&mut self) {
        let seat = self.selected_seat().map(|seat| seat.number().to_owned());
        let deck = if self.deck_count() > 0 { Some(self.active_deck) } else { None };
        if let Some(ui_state) = self.ui_state.as_ref() {
            // Contention just means MCP is reading; the next change republishes.
            if let Ok(mut state) = ui_state.try_lock() {
                state.set_selection(deck, seat);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.search.is_some() {
            self.handle_search_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => {
                self.search = Some(String::new());
            }
            KeyCode::Tab | KeyCode::Char(']') => self.cycle_deck(1),
            KeyCode::Char('[') | KeyCode::BackTab => self.cycle_deck(-1),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(Move::Left),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(Move::Right),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(Move::Up),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(Move::Down),
            KeyCode::Char('v') => self.show_legend = !self.show_legend,
            KeyCode::Char('y') => self.yank_active_deck(),
            KeyCode::Esc => self.toast = None,
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let Some(input) = self.search.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.search = None,
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter => {
                let needle = input.clone();
                self.search = None;
                self.jump_to_seat(&needle);
            }
            KeyCode::Char(ch) => input.push(ch),
            _ => {}
        }
    }

    fn cycle_deck(&mut self, step: isize) {
        let count = self.deck_count();
        if count == 0 {
            return;
        }
        let current = self.active_deck as isize;
        self.active_deck = (current + step).rem_euclid(count as isize) as usize;
        self.select_first_seat();
        self.publish_selection();
    }

    fn jump_to_seat(&mut self, needle: &str) {
        let best = {
            let matches = fuzzy_seat_matches(self.active_seats(), needle);
            matches.first().map(|(seat, _)| seat.number().to_owned())
        };
        let Some(number) = best else {
            self.set_toast(format!("No seat matches '{needle}'"));
            return;
        };

        let position = self.active_layout().and_then(|layout| {
            layout.row_offsets().iter().enumerate().find_map(|(row_idx, &row_offset)| {
                layout.columns().find_map(|col| {
                    layout
                        .seat_at(row_offset, col)
                        .filter(|seat| seat.number() == number)
                        .map(|_| (row_idx, col))
                })
            })
        });

        match position {
            Some(position) => {
                self.selected = Some(position);
                self.set_toast(format!("Jumped to {number}"));
                self.publish_selection();
            }
            None => self.set_toast(format!("Seat {number} has no grid position")),
        }
    }

    fn move_cursor(&mut self, direction: Move) {
        let Some(layout) = self.active_layout() else {
            return;
        };
        let Some((row_idx, col)) = self.selected else {
            drop(layout);
            self.select_first_seat();
            self.publish_selection();
            return;
        };

        let next = match direction {
            Move::Left => scan_row(&layout, row_idx, col, -1),
            Move::Right => scan_row(&layout, row_idx, col, 1),
            Move::Up => nearest_in_row(&layout, row_idx.checked_sub(1), col),
            Move::Down => {
                let below = row_idx + 1;
                nearest_in_row(&layout, (below < layout.row_count()).then_some(below), col)
            }
        };

        drop(layout);
        if let Some(next) = next {
            self.selected = Some(next);
            self.publish_selection();
        }
    }

    fn yank_active_deck(&mut self) {
        let Some(layout) = self.active_layout() else {
            self.set_toast("Nothing to yank");
            return;
        };
        match render_layout_annotated(&layout, &RenderOptions::full()) {
            Ok(annotated) => match copy_to_clipboard(&annotated.text) {
                Ok(backend) => self.set_toast(format!("Yanked deck grid ({backend})")),
                Err(err) => self.set_toast(format!("Clipboard error: {err}")),
            },
            Err(err) => self.set_toast(format!("Render error: {err}")),
        }
    }
}

fn scan_row(layout: &DeckLayout<'_>, row_idx: usize, col: i32, step: i32) -> Option<(usize, i32)> {
    let row_offset = *layout.row_offsets().get(row_idx)?;
    let mut candidate = col + step;
    while candidate >= layout.col_min() && candidate <= layout.col_max() {
        if layout.seat_at(row_offset, candidate).is_some() {
            return Some((row_idx, candidate));
        }
        candidate += step;
    }
    None
}

fn nearest_in_row(
    layout: &DeckLayout<'_>,
    row_idx: Option<usize>,
    col: i32,
) -> Option<(usize, i32)> {
    let row_idx = row_idx?;
    let row_offset = *layout.row_offsets().get(row_idx)?;
    layout
        .columns()
        .filter(|&candidate| layout.seat_at(row_offset, candidate).is_some())
        .min_by_key(|&candidate| (candidate - col).abs())
        .map(|candidate| (row_idx, candidate))
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    // Base fill first; widget styles drawn afterwards take precedence.
    let area = frame.size();
    frame.buffer_mut().set_style(area, app.theme.base_style());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(frame.size());

    draw_header(frame, app, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(INSPECTOR_WIDTH)])
        .split(chunks[1]);
    draw_grid(frame, app, main[0]);
    draw_inspector(frame, app, main[1]);

    draw_footer(frame, app, chunks[2]);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = Vec::new();
    let source = app.source.as_deref().unwrap_or("(unsaved seat map)");
    spans.push(Span::styled(format!(" {source} "), app.theme.base_style()));

    if let Some(seatmap) = &app.seatmap {
        for (idx, deck) in seatmap.decks().iter().enumerate() {
            let label = match deck.deck_type() {
                Some(deck_type) => format!(" {}:{} ", idx + 1, deck_type),
                None => format!(" {} ", idx + 1),
            };
            let style = if idx == app.active_deck {
                app.theme.selection_style()
            } else {
                app.theme.base_style()
            };
            spans.push(Span::styled(label, style));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_grid(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Seat Map ")
        .border_style(app.theme.panel_border_style(true));
    let inner_height = area.height.saturating_sub(2) as usize;

    let Some(seatmap) = &app.seatmap else {
        let paragraph = Paragraph::new(NO_DATA_TEXT)
            .style(app.theme.error_style())
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    };
    if seatmap.decks().is_empty() {
        let paragraph =
            Paragraph::new(NO_DATA_TEXT).style(app.theme.error_style()).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let seats = app.active_seats();
    let options = RenderOptions { show_legend: app.show_legend, show_summary: false };
    let rendered = app
        .active_layout()
        .map(|layout| render_layout_annotated(&layout, &options).map_err(|err| err.to_string()));

    let (text, selected_line) = match rendered {
        None => (Text::styled("No seats with valid coordinates", app.theme.error_style()), None),
        Some(Err(err)) => (Text::styled(err, app.theme.error_style()), None),
        Some(Ok(annotated)) => {
            let selected_number =
                app.selected_seat().map(|seat| seat.number().to_owned());
            styled_grid_text(app, seats, &annotated.text, &annotated.seat_index, selected_number)
        }
    };

    let scroll = match selected_line {
        Some(line) if line >= inner_height && inner_height > 0 => (line + 1 - inner_height) as u16,
        _ => 0,
    };

    frame.render_widget(Paragraph::new(text).block(block).scroll((scroll, 0)), area);
}

/// Rebuilds the rendered grid as styled lines: every seat cell is colored by
/// status (exit styling wins), and the selected seat is reverse-highlighted.
fn styled_grid_text(
    app: &App,
    seats: &[SeatRecord],
    text: &str,
    seat_index: &BTreeMap<String, Vec<(usize, usize, usize)>>,
    selected_number: Option<String>,
) -> (Text<'static>, Option<usize>) {
    let mut cells_by_line: BTreeMap<usize, Vec<(usize, usize, String)>> = BTreeMap::new();
    for (number, spans) in seat_index {
        for &(line, x0, x1) in spans {
            cells_by_line.entry(line).or_default().push((x0, x1, number.clone()));
        }
    }

    let mut selected_line = None;
    let mut lines = Vec::new();
    for (line_idx, raw) in text.lines().enumerate() {
        let Some(cells) = cells_by_line.get_mut(&line_idx) else {
            lines.push(Line::styled(raw.to_owned(), app.theme.base_style()));
            continue;
        };
        cells.sort();

        let chars: Vec<char> = raw.chars().collect();
        let mut spans = Vec::new();
        let mut cursor = 0usize;
        for (x0, x1, number) in cells.iter() {
            if *x0 >= chars.len() {
                continue;
            }
            if cursor < *x0 {
                let plain: String = chars[cursor..*x0].iter().collect();
                spans.push(Span::styled(plain, app.theme.base_style()));
            }
            let end = (*x1 + 1).min(chars.len());
            let cell: String = chars[*x0..end].iter().collect();
            let style = match find_seat(seats, number) {
                Some(seat) if selected_number.as_deref() == Some(seat.number()) => {
                    selected_line = Some(line_idx);
                    app.theme.selection_style()
                }
                Some(seat) => app.theme.seat_style(seat.status(), seat.is_exit_row()),
                None => app.theme.base_style(),
            };
            spans.push(Span::styled(cell, style));
            cursor = end;
        }
        if cursor < chars.len() {
            let plain: String = chars[cursor..].iter().collect();
            spans.push(Span::styled(plain, app.theme.base_style()));
        }
        lines.push(Line::from(spans));
    }

    (Text::from(lines), selected_line)
}

fn draw_inspector(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Seat ")
        .border_style(app.theme.panel_border_style(false));

    let mut lines: Vec<Line<'static>> = Vec::new();
    match app.selected_seat() {
        Some(seat) => {
            lines.push(Line::styled(seat.number().to_owned(), app.theme.selection_style()));
            lines.push(Line::styled(
                format!("Status: {}", seat.status().label()),
                app.theme.seat_style(seat.status(), false),
            ));
            if seat.is_exit_row() {
                lines.push(Line::styled("Exit row", app.theme.seat_style(seat.status(), true)));
            }
            if let Some(cabin) = seat.cabin() {
                lines.push(Line::styled(format!("Cabin: {cabin}"), app.theme.base_style()));
            }
            if let Some(coordinates) = seat.coordinates() {
                lines.push(Line::styled(
                    format!("Grid: x{} y{}", coordinates.x(), coordinates.y()),
                    app.theme.base_style(),
                ));
            }
            for characteristic in seat.characteristics() {
                lines.push(characteristic_line(app, characteristic));
            }
            if let Some(price) = seat.traveler_pricing().first().and_then(TravelerPricing::price)
            {
                let total = price.total().unwrap_or("?");
                let currency = price.currency().unwrap_or("");
                lines.push(Line::styled(
                    format!("Price: {total} {currency}"),
                    app.theme.base_style(),
                ));
            }
        }
        None => lines.push(Line::styled("No seat selected", app.theme.base_style())),
    }

    lines.push(Line::default());
    let summary = availability_summary(app.active_seats());
    lines.push(Line::styled("Deck availability", app.theme.base_style()));
    lines.push(Line::styled(
        format!(
            "{}/{} available ({}%)",
            summary.available, summary.total, summary.percentage
        ),
        app.theme.base_style(),
    ));
    lines.push(Line::styled(
        format!("{} occupied · {} blocked", summary.occupied, summary.blocked),
        app.theme.base_style(),
    ));

    if let Some(layout) = app.active_layout() {
        if !layout.warnings().is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled("Data-quality warnings", app.theme.warning_style()));
            for warning in layout.warnings() {
                lines.push(Line::styled(warning.to_string(), app.theme.warning_style()));
            }
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn characteristic_line(app: &App, characteristic: &SeatCharacteristic) -> Line<'static> {
    let mut parts = Vec::new();
    if let Some(code) = characteristic.code() {
        parts.push(code.to_owned());
    }
    if let Some(category) = characteristic.category() {
        parts.push(category.to_owned());
    }
    if let Some(description) = characteristic.description() {
        parts.push(description.to_owned());
    }
    if parts.is_empty() {
        parts.push("(unlabeled)".to_owned());
    }
    Line::styled(format!("· {}", parts.join(" · ")), app.theme.base_style())
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = Vec::new();

    if let Some(input) = &app.search {
        spans.push(Span::styled(" /", Style::default().fg(FOOTER_KEY_COLOR)));
        spans.push(Span::styled(input.clone(), Style::default().fg(FOOTER_BRAND_COLOR)));
        spans.push(Span::styled("▏", Style::default().fg(FOOTER_KEY_COLOR)));
    } else {
        for (key, label) in [
            ("←↑↓→", "move"),
            ("tab", "deck"),
            ("/", "find"),
            ("y", "yank"),
            ("v", "legend"),
            ("q", "quit"),
        ] {
            spans.push(Span::styled(format!(" {key}"), Style::default().fg(FOOTER_KEY_COLOR)));
            spans.push(Span::styled(
                format!(" {label} "),
                Style::default().fg(FOOTER_LABEL_COLOR),
            ));
        }
        if let Some(toast) = &app.toast {
            spans.push(Span::styled(
                format!("· {toast} "),
                Style::default().fg(FOOTER_BRAND_COLOR),
            ));
        }
    }

    let brand = Span::styled(FOOTER_BRAND, Style::default().fg(FOOTER_BRAND_COLOR));
    let hint_width: usize = spans.iter().map(|span| span.content.chars().count()).sum();
    let brand_width = FOOTER_BRAND.chars().count();
    let pad = (area.width as usize).saturating_sub(hint_width + brand_width);
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(brand);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Built-in demo seat map: a 3-3 main deck with wings and an exit row, plus a
/// small 2-2 upper deck.
pub fn demo_seatmap() -> SeatmapData {
    let mut main = Deck::new("MAIN")
        .with_configuration(DeckConfiguration::new(10, 16, 7).with_wings(12, 14));
    for (row_idx, row) in (10u32..=16).enumerate() {
        for (col_idx, letter) in ['A', 'B', 'C', 'D', 'E', 'F'].into_iter().enumerate() {
            let y = if col_idx < 3 { col_idx } else { col_idx + 1 } as i32;
            let mut seat = SeatRecord::new(format!("{row}{letter}"))
                .with_coordinates(row_idx as i32, y)
                .with_cabin("M")
                .with_status(match (row + col_idx as u32) % 5 {
                    0 | 3 => "AVAILABLE",
                    1 => "OCCUPIED",
                    2 => "AVAILABLE",
                    _ => "BLOCKED",
                });
            if row == 14 {
                seat = seat.with_characteristic(SeatCharacteristic::new(
                    Some("E".to_owned()),
                    Some("EXIT_ROW".to_owned()),
                    Some("Exit row seat".to_owned()),
                ));
            }
            if letter == 'A' || letter == 'F' {
                seat = seat.with_characteristic(SeatCharacteristic::new(
                    Some("W".to_owned()),
                    None,
                    Some("Window seat".to_owned()),
                ));
            }
            main = main.with_seat(seat);
        }
    }
    // One record without coordinates: counted by the aggregator, absent from
    // the grid.
    main = main.with_seat(SeatRecord::new("17A").with_status("AVAILABLE"));

    let mut upper = Deck::new("UPPER")
        .with_configuration(DeckConfiguration::new(80, 82, 5));
    for (row_idx, row) in (80u32..=82).enumerate() {
        for (col_idx, letter) in ['A', 'C', 'D', 'F'].into_iter().enumerate() {
            let y = if col_idx < 2 { col_idx } else { col_idx + 1 } as i32;
            upper = upper.with_seat(
                SeatRecord::new(format!("{row}{letter}"))
                    .with_coordinates(row_idx as i32, y)
                    .with_cabin("J")
                    .with_status(if (row + col_idx as u32) % 3 == 0 {
                        "OCCUPIED"
                    } else {
                        "AVAILABLE"
                    }),
            );
        }
    }

    SeatmapData::new(vec![main, upper])
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}
