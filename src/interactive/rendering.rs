//! TUI rendering with ratatui
//!
//! The same geometry drives drawing and the hit-test scene, so what the
//! mouse hits is always what was drawn.

use super::app::{App, MessageStyle};
use crate::core::{Color, Slot};
use crate::game::GameStatus;
use crate::input::{Role, Scene};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as Tint, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

const BOTTLE_WIDTH: u16 = 6;
const BOTTLE_STEP: u16 = 8;
const SLOT_WIDTH: u16 = 8;
const SLOT_HEIGHT: u16 = 5;
const SLOT_STEP: u16 = 9;

/// Screen regions while a round is shown
struct Regions {
    header: Rect,
    pool: Rect,
    board: Rect,
    submit: Rect,
    lower: Rect,
    status: Rect,
}

/// A slot container and what is drawn inside it
struct SlotCell {
    container: Rect,
    label: Rect,
    bottle: Rect,
}

struct Geometry {
    pool: Vec<(Color, Rect)>,
    slots: Vec<SlotCell>,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(5),               // Pool
            Constraint::Length(SLOT_HEIGHT + 2), // Board
            Constraint::Length(3),               // Submit
            Constraint::Min(6),                  // History / answer / messages
            Constraint::Length(3),               // Status bar
        ])
        .split(area);

    Regions {
        header: chunks[0],
        pool: chunks[1],
        board: chunks[2],
        submit: chunks[3],
        lower: chunks[4],
        status: chunks[5],
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn geometry(regions: &Regions, app: &App) -> Geometry {
    let pool_inner = panel("").inner(regions.pool);
    let pool = app
        .session
        .palette()
        .colors()
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            let cell = Rect::new(
                pool_inner.x + i as u16 * BOTTLE_STEP,
                pool_inner.y,
                BOTTLE_WIDTH,
                pool_inner.height,
            );
            (color, cell.intersection(pool_inner))
        })
        .filter(|(_, r)| !r.is_empty())
        .collect();

    let board_inner = panel("").inner(regions.board);
    let slots = (0..app.session.board().len())
        .map(|i| {
            let container = Rect::new(
                board_inner.x + i as u16 * SLOT_STEP,
                board_inner.y,
                SLOT_WIDTH,
                SLOT_HEIGHT,
            )
            .intersection(board_inner);
            SlotCell {
                container,
                label: Rect::new(container.x + 1, container.y + 1, SLOT_WIDTH - 2, 1)
                    .intersection(container),
                bottle: Rect::new(container.x + 2, container.y + 2, SLOT_WIDTH - 4, 2)
                    .intersection(container),
            }
        })
        .collect();

    Geometry { pool, slots }
}

fn scene_from(geometry: &Geometry) -> Scene {
    let mut scene = Scene::new();
    for &(color, area) in &geometry.pool {
        scene.push(area, Role::Pool(color));
    }
    for (i, cell) in geometry.slots.iter().enumerate() {
        if cell.container.is_empty() {
            continue;
        }
        let slot = scene.push(cell.container, Role::Slot(i));
        scene.push_child(slot, cell.label, Role::Decoration);
        scene.push_child(slot, cell.bottle, Role::Decoration);
    }
    scene
}

/// Hit-test scene for a screen of size `area`
///
/// Empty on the start screen, which has nothing to drag.
#[must_use]
pub fn build_scene(area: Rect, app: &App) -> Scene {
    if app.session.status() == GameStatus::NotStarted {
        return Scene::new();
    }
    scene_from(&geometry(&regions(area), app))
}

/// Main UI rendering function; returns the scene for hit-testing
pub fn ui(f: &mut Frame, app: &App) -> Scene {
    let area = f.area();

    if app.session.status() == GameStatus::NotStarted {
        render_start_screen(f, app, area);
        return Scene::new();
    }

    let regions = regions(area);
    let geometry = geometry(&regions, app);

    render_header(f, regions.header);
    render_pool(f, app, &geometry, regions.pool);
    render_board(f, app, &geometry, regions.board);
    render_submit(f, app, regions.submit);
    render_lower(f, app, regions.lower);
    render_status(f, app, regions.status);

    scene_from(&geometry)
}

/// Terminal color for a bottle
const fn tint(color: Color) -> Tint {
    match color {
        Color::Red => Tint::Red,
        Color::Blue => Tint::Blue,
        Color::Green => Tint::Green,
        Color::Yellow => Tint::Yellow,
        Color::Purple => Tint::Magenta,
        Color::Orange => Tint::Rgb(255, 165, 0),
        Color::Pink => Tint::Rgb(255, 105, 180),
        Color::Cyan => Tint::Cyan,
    }
}

fn bottle_spans(slots: &[Slot]) -> Vec<Span<'static>> {
    slots
        .iter()
        .flat_map(|slot| {
            let span = match slot {
                Some(c) => Span::styled("██", Style::default().fg(tint(*c))),
                None => Span::styled("··", Style::default().fg(Tint::DarkGray)),
            };
            [span, Span::raw(" ")]
        })
        .collect()
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧪 COLOR BOTTLE PUZZLE - Drag bottles to crack the code")
        .style(
            Style::default()
                .fg(Tint::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Tint::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_start_screen(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(f, chunks[0]);

    let slots = app.session.difficulty();
    let palette: Vec<Slot> = app.session.palette().colors().iter().map(|c| Some(*c)).collect();
    let content = vec![
        Line::from(""),
        Line::from("Drag colorful bottles into the slots"),
        Line::from("and guess the hidden color order."),
        Line::from("Each guess tells you how many bottles are in the right place."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Difficulty: "),
            Span::styled(
                format!("{slots} bottles"),
                Style::default()
                    .fg(Tint::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(bottle_spans(&palette)),
        Line::from(""),
        Line::from(Span::styled(
            "[-] fewer   [s] start   [+] more",
            Style::default().fg(Tint::Cyan),
        )),
    ];

    let rules = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(panel(" Game Rules "))
        .wrap(Wrap { trim: false });
    f.render_widget(rules, chunks[1]);

    render_messages(f, app, chunks[2]);
}

fn render_pool(f: &mut Frame, app: &App, geometry: &Geometry, area: Rect) {
    f.render_widget(panel(" Available Bottles "), area);

    let dragging = app.dragged_color();
    for &(color, cell) in &geometry.pool {
        let mut style = Style::default().bg(tint(color));
        if dragging == Some(color) {
            style = style.add_modifier(Modifier::DIM);
        }
        f.render_widget(Block::default().style(style), cell);
    }
}

fn render_board(f: &mut Frame, app: &App, geometry: &Geometry, area: Rect) {
    f.render_widget(panel(" Your Guess "), area);

    let hover = app.hover();
    for (i, cell) in geometry.slots.iter().enumerate() {
        if cell.container.is_empty() {
            continue;
        }

        let border = if hover == Some(i) {
            Style::default()
                .fg(Tint::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if app.cursor == i && app.session.status() == GameStatus::InProgress {
            Style::default().fg(Tint::Cyan)
        } else {
            Style::default().fg(Tint::DarkGray)
        };
        f.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
            cell.container,
        );

        f.render_widget(
            Paragraph::new(format!("{}", i + 1))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Tint::Gray)),
            cell.label,
        );

        match app.session.board().get(i) {
            Some(color) => f.render_widget(
                Block::default().style(Style::default().bg(tint(color))),
                cell.bottle,
            ),
            None => f.render_widget(
                Paragraph::new("?")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Tint::DarkGray)),
                cell.bottle,
            ),
        }
    }
}

fn render_submit(f: &mut Frame, app: &App, area: Rect) {
    let missing = app.session.remaining();
    let (text, color) = match app.session.status() {
        GameStatus::Won => (
            format!(
                "🏆 Perfect! You solved it in {} {}! Press 'n' to play again",
                app.session.history().len(),
                if app.session.history().len() == 1 {
                    "attempt"
                } else {
                    "attempts"
                }
            ),
            Tint::Green,
        ),
        _ if missing == 0 => ("🎯 Press Enter to submit".to_string(), Tint::Yellow),
        _ => (
            format!(
                "Need {missing} more {}",
                if missing == 1 { "bottle" } else { "bottles" }
            ),
            Tint::DarkGray,
        ),
    };

    let submit = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(submit, area);
}

fn render_lower(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_history(f, app, chunks[0]);

    if app.session.answer_revealed() {
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(chunks[1]);
        render_answer(f, app, side[0]);
        render_messages(f, app, side[1]);
    } else {
        render_messages(f, app, chunks[1]);
    }
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    if !app.session.history_visible() {
        let hidden = Paragraph::new("History hidden ('h' to show)")
            .style(Style::default().fg(Tint::DarkGray))
            .block(panel(" 📜 History "));
        f.render_widget(hidden, area);
        return;
    }

    let history = app.session.history();
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = history
        .entries()
        .iter()
        .enumerate()
        .rev()
        .take(visible)
        .map(|(i, entry)| {
            let slots: Vec<Slot> = entry.guess().iter().map(|c| Some(*c)).collect();
            let mut spans = vec![Span::styled(
                format!("#{:<3}", i + 1),
                Style::default().fg(Tint::DarkGray),
            )];
            spans.extend(bottle_spans(&slots));
            spans.push(Span::styled(
                format!(" {} correct", entry.correct()),
                Style::default()
                    .fg(Tint::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    f.render_widget(List::new(items).block(panel(" 📜 History ")), area);
}

fn render_answer(f: &mut Frame, app: &App, area: Rect) {
    let line = app.session.answer().map_or_else(Line::default, |answer| {
        let slots: Vec<Slot> = answer.iter().map(|c| Some(*c)).collect();
        Line::from(bottle_spans(&slots))
    });
    f.render_widget(Paragraph::new(line).block(panel(" 🔑 Correct Answer ")), area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Tint::White),
                MessageStyle::Success => Style::default().fg(Tint::Green),
                MessageStyle::Error => Style::default().fg(Tint::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let filled = Paragraph::new(format!(
        "Filled: {}/{}",
        app.session.filled_count(),
        app.session.difficulty()
    ))
    .alignment(Alignment::Center);
    f.render_widget(filled, chunks[0]);

    let stats_text = match app.stats.average_attempts() {
        Some(avg) => format!("Won: {} | Avg: {avg:.1}", app.stats.rounds_won),
        None => "Won: 0".to_string(),
    };
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new(
        "1-8: place | ←→: cursor | x: clear | Enter: submit | a: answer | h: history | b: back | q: quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Tint::DarkGray))
    .wrap(Wrap { trim: true });
    f.render_widget(help, chunks[2]);
}
