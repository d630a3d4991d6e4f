//! UI rendering for the game: draws a `Scene` onto a character grid scaled
//! from world coordinates.

use super::assets::Assets;
use super::game_common::{create_game_layout, render_info_panel_frame, render_status_bar};
use crate::core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::game::{Bounds, DrawItem, Game, GameMode, Scene, TextSize};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub style: Style,
}

/// Map a world-space interval onto cell indices `[lo, hi)` of a `cells`-wide
/// axis spanning `world` units. Returns `None` when nothing of it is visible.
fn cell_range(start: f32, end: f32, cells: u16, world: f32) -> Option<(usize, usize)> {
    let lo = (start * cells as f32 / world).floor().max(0.0);
    let hi = (end * cells as f32 / world).ceil().min(cells as f32);
    if hi <= lo {
        return None;
    }
    Some((lo as usize, hi as usize))
}

fn fill(grid: &mut [Vec<Cell>], bounds: Bounds, cell: Cell) {
    let rows = grid.len() as u16;
    let cols = grid.first().map_or(0, |r| r.len()) as u16;
    let (Some((c0, c1)), Some((r0, r1))) = (
        cell_range(bounds.x, bounds.right(), cols, WORLD_WIDTH),
        cell_range(bounds.y, bounds.bottom(), rows, WORLD_HEIGHT),
    ) else {
        return;
    };
    for row in &mut grid[r0..r1] {
        for slot in &mut row[c0..c1] {
            *slot = cell;
        }
    }
}

/// Draw the scene's items, in order, onto a `cols` × `rows` grid.
pub fn rasterize(scene: &Scene, assets: &Assets, cols: u16, rows: u16) -> Vec<Vec<Cell>> {
    let blank = Cell {
        glyph: ' ',
        style: Style::default(),
    };
    let mut grid = vec![vec![blank; cols as usize]; rows as usize];
    if cols == 0 || rows == 0 {
        return grid;
    }

    for item in &scene.items {
        match item {
            DrawItem::Background => {
                let sky = Cell {
                    glyph: ' ',
                    style: assets.background,
                };
                for row in grid.iter_mut() {
                    row.fill(sky);
                }
            }
            DrawItem::Sprite { visual, bounds, .. } => {
                let sprite = assets.sprite(*visual);
                let cell = Cell {
                    glyph: sprite.glyph,
                    style: assets.background.patch(sprite.style),
                };
                fill(&mut grid, *bounds, cell);
            }
            DrawItem::Label(label) => {
                let text_style = match label.size {
                    TextSize::Normal => assets.text,
                    TextSize::Large => assets.headline(),
                };
                let row = ((label.y * rows as f32 / WORLD_HEIGHT).round().max(0.0) as usize)
                    .min(rows as usize - 1);
                let start = (label.x * cols as f32 / WORLD_WIDTH).round().max(0.0) as usize;
                let line = &mut grid[row];
                for (slot, ch) in line.iter_mut().skip(start).zip(label.text.chars()) {
                    *slot = Cell {
                        glyph: ch,
                        style: slot.style.patch(text_style),
                    };
                }
            }
        }
    }

    grid
}

fn grid_to_lines(grid: Vec<Vec<Cell>>) -> Vec<Line<'static>> {
    grid.into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|c| Span::styled(c.glyph.to_string(), c.style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, game: &Game, assets: &Assets) {
    let layout = create_game_layout(frame, area, " Flapper ", Color::Cyan, 10, 22);

    render_play_area(frame, layout.content, game, assets);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &Game, assets: &Assets) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let grid = rasterize(&game.scene(), assets, area.width, area.height);
    frame.render_widget(Paragraph::new(grid_to_lines(grid)), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &Game) {
    match game.mode {
        GameMode::Menu => render_status_bar(
            frame,
            area,
            "Choose your character",
            Color::Yellow,
            &[("[←/→]", "Select"), ("[Space]", "Start"), ("[Esc]", "Quit")],
        ),
        GameMode::Playing => {
            let controls: &[(&str, &str)] = if game.skin().is_bidirectional() {
                &[("[↑/↓]", "Steer"), ("[Esc]", "Quit")]
            } else {
                &[("[Space]", "Flap"), ("[Esc]", "Quit")]
            };
            render_status_bar(frame, area, &game.score_text(), Color::Green, controls)
        }
        GameMode::GameOver => render_status_bar(
            frame,
            area,
            "CRASH!",
            Color::Red,
            &[("[Space]", "Menu"), ("[Esc]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &Game) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let mode = match game.mode {
        GameMode::Menu => "Menu",
        GameMode::Playing => "Flying",
        GameMode::GameOver => "Crashed",
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", game.skin().name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                format!("{}", game.score.get()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Time: ", label),
            Span::styled(
                format!("{:.1}s", game.elapsed),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" State: ", label),
            Span::styled(mode, Style::default().fg(Color::Green)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
