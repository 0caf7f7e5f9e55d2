//! Ratatui-based terminal UI.
//!
//! The TUI shows the price chart with event and change-point markers, a
//! controls panel (two date inputs plus one checkbox per known event) and a
//! legend listing every marker label. Retrieval results are drained from the
//! loader channel between key presses, so the chart fills in as data arrives.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::app::Dashboard;
use crate::data::{DataSource, FetchOutcome, spawn_fetches};
use crate::domain::{DashboardConfig, DateBound, clamp_to_widget, parse_iso_date};
use crate::error::AppError;
use crate::view::style::{PRICE_LINE, Rgb};
use crate::view::{ChartView, MarkerKind};

mod plotters_chart;

use plotters_chart::{ChartMarker, PricePlottersChart, date_to_x, x_to_date};

/// Rows above the event checkboxes in the controls panel.
const DATE_ROWS: usize = 2;

/// Start the TUI.
pub fn run(config: &DashboardConfig, source: Arc<dyn DataSource>) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let outcomes = spawn_fetches(source)?;
    let mut app = App::new(config, outcomes);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// In-progress edit of one date input.
#[derive(Debug, Clone)]
struct DateInput {
    bound: DateBound,
    buffer: String,
}

struct App {
    dashboard: Dashboard,
    outcomes: Receiver<FetchOutcome>,
    focus: usize,
    editing: Option<DateInput>,
    cursor: Option<NaiveDate>,
    status: String,
    debug_dir: PathBuf,
}

impl App {
    fn new(config: &DashboardConfig, outcomes: Receiver<FetchOutcome>) -> Self {
        Self {
            dashboard: Dashboard::new(config.range),
            outcomes,
            focus: 0,
            editing: None,
            cursor: None,
            status: format!("Fetching from {}...", config.api_url),
            debug_dir: PathBuf::from("debug"),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut drawn_revision = None;
        let mut needs_redraw = true;
        loop {
            self.drain_outcomes();
            if drawn_revision != Some(self.dashboard.revision()) {
                needs_redraw = true;
            }

            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                drawn_revision = Some(self.dashboard.revision());
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply every retrieval result that has arrived since the last tick.
    fn drain_outcomes(&mut self) {
        loop {
            match self.outcomes.try_recv() {
                Ok(outcome) => {
                    let dataset = outcome.dataset();
                    let ok = outcome.is_ok();
                    self.dashboard.apply_outcome(outcome);
                    // Failures only go to the log; the status line reports progress.
                    if ok {
                        self.status = format!("Loaded {dataset}.");
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        self.clamp_focus();
    }

    fn event_names(&self) -> Vec<String> {
        self.dashboard.store().event_names()
    }

    fn row_count(&self) -> usize {
        DATE_ROWS + self.event_names().len()
    }

    fn clamp_focus(&mut self) {
        let max = self.row_count().saturating_sub(1);
        if self.focus > max {
            self.focus = max;
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        if self.editing.is_some() {
            self.handle_date_edit(code);
            return Ok(false);
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Up => {
                self.focus = self.focus.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.focus + 1 < self.row_count() {
                    self.focus += 1;
                }
            }
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Enter => match self.focused_bound() {
                Some(bound) => {
                    let current = self.dashboard.filter().range().bound(bound);
                    self.editing = Some(DateInput {
                        bound,
                        buffer: current.to_string(),
                    });
                    self.status = format!(
                        "Editing {} (YYYY-MM-DD). Enter to apply, Esc to cancel.",
                        bound.display_name()
                    );
                }
                None => self.toggle_focused_event(),
            },
            KeyCode::Char(' ') => self.toggle_focused_event(),
            KeyCode::Char('d') => {
                match crate::debug::write_debug_bundle(&self.dashboard, &self.debug_dir) {
                    Ok(path) => {
                        self.status = format!("Wrote debug bundle: {}", path.display());
                    }
                    Err(err) => {
                        log::error!("{err}");
                        self.status = format!("Debug write failed: {err}");
                    }
                }
            }
            _ => {}
        }

        Ok(false)
    }

    fn handle_date_edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.editing = None;
                self.status = "Date edit canceled.".to_string();
            }
            KeyCode::Enter => {
                if let Some(input) = self.editing.take() {
                    self.commit_date(input);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = self.editing.as_mut() {
                    input.buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.editing.as_mut() {
                    if (c.is_ascii_digit() || c == '-') && input.buffer.len() < 10 {
                        input.buffer.push(c);
                    }
                }
            }
            _ => {}
        }
    }

    /// Validate and apply a typed date. The input widget clamps to its bounds.
    fn commit_date(&mut self, input: DateInput) {
        let Some(typed) = parse_iso_date(&input.buffer) else {
            self.status = format!("Invalid date '{}' (expected YYYY-MM-DD).", input.buffer.trim());
            return;
        };
        let value = clamp_to_widget(typed);
        self.dashboard.set_date_bound(input.bound, value);
        self.status = if value != typed {
            format!("{}: {value} (clamped from {typed})", input.bound.display_name())
        } else {
            format!("{}: {value}", input.bound.display_name())
        };
    }

    fn focused_bound(&self) -> Option<DateBound> {
        match self.focus {
            0 => Some(DateBound::Start),
            1 => Some(DateBound::End),
            _ => None,
        }
    }

    fn toggle_focused_event(&mut self) {
        let Some(idx) = self.focus.checked_sub(DATE_ROWS) else {
            return;
        };
        let Some(name) = self.event_names().get(idx).cloned() else {
            return;
        };
        self.dashboard.toggle_event(&name);
        let state = if self.dashboard.filter().selected().contains(&name) {
            "shown"
        } else {
            "hidden"
        };
        self.status = format!("{name}: {state}");
    }

    /// Step the tooltip cursor to the previous/next price sample in view.
    fn move_cursor(&mut self, delta: i32) {
        let view = self.dashboard.view();
        self.cursor = step_cursor(&view, self.cursor, delta);
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let view = self.dashboard.view();

        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0], &view);
        self.draw_body(frame, chunks[1], &view);
        self.draw_footer(frame, chunks[2], &view);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect, view: &ChartView) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled(
                "Brent Oil Price Dashboard",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));

        let mut info = format!(
            "range: {} | prices: {} | events: {} | change points: {}",
            view.range,
            view.prices.len(),
            view.events.len(),
            view.change_points.len(),
        );
        let pending = self.dashboard.pending();
        if !pending.is_empty() {
            let names: Vec<&str> = pending.iter().map(|d| d.display_name()).collect();
            info.push_str(&format!(" | loading: {}", names.join(", ")));
        }
        lines.push(Line::from(Span::styled(info, Style::default().fg(Color::Gray))));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect, view: &ChartView) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(44)])
            .split(area);

        self.draw_chart(frame, columns[0], view);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        self.draw_controls(frame, side[0]);
        draw_legend(frame, side[1], view);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect, view: &ChartView) {
        let block = Block::default().title("Price (USD/barrel)").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(series) = chart_series(view) else {
            let msg = if self.dashboard.pending().is_empty() {
                "No data in range."
            } else {
                "Waiting for data..."
            };
            let p = Paragraph::new(msg).style(Style::default().fg(Color::Yellow));
            frame.render_widget(p, inner);
            return;
        };

        let cursor = self
            .cursor
            .and_then(|d| view.nearest_price(d))
            .map(|p| date_to_x(p.date));

        let (chart_rect, insets) = chart_layout(inner);
        let widget = PricePlottersChart {
            prices: &series.prices,
            markers: &series.markers,
            cursor,
            x_bounds: series.x_bounds,
            y_bounds: series.y_bounds,
        };

        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            draw_axis_ticks(frame, inner, chart_rect, insets, series.x_bounds, series.y_bounds);
        }
    }

    fn draw_controls(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let range = self.dashboard.filter().range();
        let mut items = Vec::new();
        for bound in [DateBound::Start, DateBound::End] {
            let value = match &self.editing {
                Some(input) if input.bound == bound => format!("{}_", input.buffer),
                _ => range.bound(bound).to_string(),
            };
            items.push(ListItem::new(format!("{}: {value}", bound.display_name())));
        }

        let selected = self.dashboard.filter().selected();
        for name in self.event_names() {
            let mark = if selected.contains(&name) { "[x]" } else { "[ ]" };
            items.push(ListItem::new(format!("{mark} {name}")));
        }

        let title = if self.event_names().is_empty() {
            "Filters"
        } else {
            "Filters (Space toggles event)"
        };
        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.focus));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing.is_some() {
            let hint = Paragraph::new("Editing date…")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect, view: &ChartView) {
        let help = "↑/↓ select  Enter edit/toggle  Space toggle  ←/→ inspect  d debug  q quit";
        let mut spans = vec![Span::styled(help, Style::default().fg(Color::Gray))];

        if let Some(p) = self.cursor.and_then(|d| view.nearest_price(d)) {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("{}  Price: {:.2}", p.date, p.price),
                Style::default().fg(ratatui_color(PRICE_LINE)),
            ));
        }

        spans.push(Span::raw(" | "));
        spans.push(Span::styled(&self.status, Style::default().fg(Color::Yellow)));

        let p = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Move the cursor to the previous (`delta < 0`) or next price sample.
fn step_cursor(view: &ChartView, cursor: Option<NaiveDate>, delta: i32) -> Option<NaiveDate> {
    let (first, last) = (view.prices.first()?, view.prices.last()?);
    let Some(current) = cursor else {
        return Some(if delta < 0 { last.date } else { first.date });
    };

    let next = if delta < 0 {
        view.prices.iter().rev().find(|p| p.date < current)
    } else {
        view.prices.iter().find(|p| p.date > current)
    };
    Some(next.map(|p| p.date).unwrap_or(current))
}

fn ratatui_color(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

fn draw_legend(frame: &mut ratatui::Frame<'_>, area: Rect, view: &ChartView) {
    let markers = view.markers();
    let items: Vec<ListItem> = markers
        .iter()
        .map(|m| {
            let color = ratatui_color(m.kind.stroke().color);
            let tag = match m.kind {
                MarkerKind::Event => "event",
                MarkerKind::ChangePoint => "change",
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} {tag:<6} ", m.date), Style::default().fg(color)),
                Span::styled(m.label.clone(), Style::default().fg(color)),
            ]))
        })
        .collect();

    let title = format!("Markers ({})", markers.len());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
}

/// Chart-ready series and bounds for one frame.
struct ChartSeries {
    prices: Vec<(f64, f64)>,
    markers: Vec<ChartMarker>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

/// Build chart series for Plotters. `None` when nothing is in range.
fn chart_series(view: &ChartView) -> Option<ChartSeries> {
    let (lo, hi) = view.x_domain()?;
    let (mut x0, mut x1) = (date_to_x(lo), date_to_x(hi));
    if x1 <= x0 {
        x0 -= 1.0;
        x1 += 1.0;
    }

    let (y0, y1) = view.y_domain().unwrap_or((0.0, 1.0));

    let prices = view
        .prices
        .iter()
        .map(|p| (date_to_x(p.date), p.price))
        .collect();

    let markers = view
        .markers()
        .iter()
        .map(|m| ChartMarker {
            x: date_to_x(m.date),
            stroke: m.kind.stroke(),
        })
        .collect();

    Some(ChartSeries {
        prices,
        markers,
        x_bounds: [x0, x1],
        y_bounds: [y0, y1],
    })
}

fn fmt_axis_x(v: f64) -> String {
    x_to_date(v)
        .map(|d| d.format("%Y-%m").to_string())
        .unwrap_or_default()
}

fn fmt_axis_y(v: f64) -> String {
    format!("{v:.0}")
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 6,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
) {
    let ticks = 5usize;
    let style = Style::default().fg(Color::Gray);

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let x_val = x_bounds[0] + u * (x_bounds[1] - x_bounds[0]);
        let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
        let label = fmt_axis_x(x_val);
        let label_len = label.len() as u16;
        let start = x
            .saturating_sub(label_len / 2)
            .min((inner.x + inner.width).saturating_sub(label_len));
        let y = chart.y + chart.height;
        if y >= inner.y + inner.height - 1 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let y_val = y_bounds[0] + u * (y_bounds[1] - y_bounds[0]);
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let label = fmt_axis_y(y_val);
        let label_len = label.len() as u16;
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(label_len);
        if start < inner.x {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    let x_label = Paragraph::new("date")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    let x_rect = Rect {
        x: chart.x,
        y: chart.y + chart.height + 1,
        width: chart.width,
        height: 1,
    };
    if x_rect.y < inner.y + inner.height {
        frame.render_widget(x_label, x_rect);
    }

    let y_label = Paragraph::new("USD")
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let y_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: insets.left.saturating_sub(1),
        height: 1,
    };
    frame.render_widget(y_label, y_rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChangePoint, DateRange, EventRecord, PricePoint};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn view() -> ChartView {
        ChartView {
            range: DateRange::default(),
            prices: vec![
                PricePoint { date: d(1990, 1, 1), price: 20.0 },
                PricePoint { date: d(1990, 6, 1), price: 22.0 },
                PricePoint { date: d(1991, 1, 1), price: 19.0 },
            ],
            events: vec![EventRecord { name: "Gulf War".to_string(), date: d(1990, 8, 2) }],
            change_points: vec![ChangePoint {
                date: d(1990, 8, 6),
                description: "spike".to_string(),
                mean_before: 18.0,
                mean_after: 27.0,
            }],
        }
    }

    fn app() -> App {
        let (_tx, rx) = std::sync::mpsc::channel();
        App::new(&DashboardConfig::default(), rx)
    }

    #[test]
    fn cursor_steps_through_samples_and_stops_at_edges() {
        let v = view();
        let c = step_cursor(&v, None, 1);
        assert_eq!(c, Some(d(1990, 1, 1)));
        let c = step_cursor(&v, c, 1);
        assert_eq!(c, Some(d(1990, 6, 1)));
        let c = step_cursor(&v, Some(d(1991, 1, 1)), 1);
        assert_eq!(c, Some(d(1991, 1, 1)));
        let c = step_cursor(&v, None, -1);
        assert_eq!(c, Some(d(1991, 1, 1)));
    }

    #[test]
    fn chart_series_places_markers_between_samples() {
        let series = chart_series(&view()).unwrap();
        assert_eq!(series.prices.len(), 3);
        assert_eq!(series.markers.len(), 2);
        assert_eq!(series.markers[0].x, date_to_x(d(1990, 8, 2)));
        assert_ne!(series.markers[0].stroke, series.markers[1].stroke);
        assert_eq!(series.x_bounds, [date_to_x(d(1990, 1, 1)), date_to_x(d(1991, 1, 1))]);
    }

    #[test]
    fn chart_series_is_none_for_empty_view() {
        let empty = ChartView {
            range: DateRange::default(),
            prices: Vec::new(),
            events: Vec::new(),
            change_points: Vec::new(),
        };
        assert!(chart_series(&empty).is_none());
    }

    #[test]
    fn typed_date_is_clamped_by_the_input() {
        let mut app = app();
        app.commit_date(DateInput {
            bound: DateBound::Start,
            buffer: "1980-01-01".to_string(),
        });
        assert_eq!(app.dashboard.filter().range().start, d(1987, 5, 20));
        assert!(app.status.contains("clamped"));
    }

    #[test]
    fn invalid_typed_date_leaves_range_alone() {
        let mut app = app();
        let before = app.dashboard.filter().range();
        app.commit_date(DateInput {
            bound: DateBound::End,
            buffer: "1990-13".to_string(),
        });
        assert_eq!(app.dashboard.filter().range(), before);
        assert!(app.status.starts_with("Invalid date"));
    }

    #[test]
    fn space_toggles_the_focused_event() {
        let mut app = app();
        app.dashboard.apply_outcome(FetchOutcome::Events(Ok(vec![EventRecord {
            name: "Gulf War".to_string(),
            date: d(1990, 8, 2),
        }])));
        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::Down).unwrap();
        assert_eq!(app.focus, 2);

        app.handle_key(KeyCode::Char(' ')).unwrap();
        assert!(!app.dashboard.filter().selected().contains("Gulf War"));
        app.handle_key(KeyCode::Char(' ')).unwrap();
        assert!(app.dashboard.filter().selected().contains("Gulf War"));
    }

    #[test]
    fn enter_on_date_row_edits_and_applies() {
        let mut app = app();
        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();
        assert!(app.editing.is_some());

        for _ in 0..10 {
            app.handle_key(KeyCode::Backspace).unwrap();
        }
        for c in "1995-06-30".chars() {
            app.handle_key(KeyCode::Char(c)).unwrap();
        }
        app.handle_key(KeyCode::Enter).unwrap();

        assert!(app.editing.is_none());
        assert_eq!(app.dashboard.filter().range().end, d(1995, 6, 30));
        assert_eq!(app.dashboard.filter().range().start, d(1987, 5, 20));
    }

    #[test]
    fn drain_applies_whatever_has_arrived() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut app = App::new(&DashboardConfig::default(), rx);
        tx.send(FetchOutcome::Prices(Ok(vec![PricePoint { date: d(1990, 1, 1), price: 20.0 }])))
            .unwrap();
        app.drain_outcomes();
        assert_eq!(app.dashboard.store().prices().len(), 1);
        assert_eq!(app.dashboard.pending().len(), 2);
    }
}
