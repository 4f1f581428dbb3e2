//! GameView: maps a session and the current [`Screen`] into a framebuffer.
//!
//! This module is pure (no I/O) and unit-tested against framebuffer text.
//!
//! | Screen | Shows |
//! |--------|-------|
//! | menu | mode choices, collection progress, best challenge level |
//! | difficulty | the three normal-mode difficulties with their grid setup |
//! | game | grid (layout while memorizing, placements while playing), block tray |
//! | result | verdict, metrics, earned card, per-cell comparison |
//! | collection | catalog with locked cards hidden |
//! | settings | the three toggles |

use crate::core::{format_time, GameState};
use crate::engine::{RoundOutcome, Session};
use crate::fb::{text_width, CellStyle, FrameBuffer, Rgb, BACKGROUND, TEXT};
use crate::screen::{MenuItem, Screen};
use crate::store::Store;
use crate::types::{
    Card, CardRequirement, Color, Difficulty, GameMode, Phase, Rarity, SettingKey,
};

const TITLE: Rgb = Rgb::new(255, 200, 90);
const MUTED: Rgb = Rgb::new(130, 130, 150);
const ACCENT: Rgb = Rgb::new(120, 200, 255);
const GOOD: Rgb = Rgb::new(110, 220, 120);
const BAD: Rgb = Rgb::new(240, 90, 90);
const EMPTY_CELL: Rgb = Rgb::new(40, 40, 55);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2:1 keeps cells roughly square with typical glyph aspect ratios.
        Self {
            cell_w: 6,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into<S: Store>(
        &self,
        session: &Session<S>,
        screen: &Screen,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        match *screen {
            Screen::Menu { selected } => self.draw_menu(fb, session, selected),
            Screen::Difficulty { selected } => self.draw_difficulty(fb, selected),
            Screen::Game { cursor, selected } => self.draw_game(fb, session, cursor, selected),
            Screen::Result => self.draw_result(fb, session),
            Screen::Collection { selected } => self.draw_collection(fb, session, selected),
            Screen::Settings { selected } => self.draw_settings(fb, session, selected),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<S: Store>(
        &self,
        session: &Session<S>,
        screen: &Screen,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, screen, viewport, &mut fb);
        fb
    }

    fn draw_menu<S: Store>(&self, fb: &mut FrameBuffer, session: &Session<S>, selected: usize) {
        let w = fb.width();
        fb.put_str_centered(0, w, 1, "🎨 Color Recall", CellStyle::fg(TITLE).bold());
        fb.put_str_centered(
            0,
            w,
            2,
            "Memorize the colors, then rebuild the grid",
            CellStyle::fg(MUTED),
        );

        let (collected, total) = session.collection_progress();
        let x = w.saturating_sub(30) / 2;
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let y = 4 + i as u16 * 2;
            let end = draw_choice(fb, x, y, item.label(), i == selected);
            if *item == MenuItem::Collection {
                let progress = format!(" {collected}/{total}");
                fb.put_str(end, y, &progress, CellStyle::fg(MUTED));
            }
        }

        let y = 4 + MenuItem::ALL.len() as u16 * 2 + 1;
        if session.high_score() > 0 {
            let best = format!("Best challenge level: {}", session.high_score());
            fb.put_str_centered(0, w, y, &best, CellStyle::fg(ACCENT));
        }
        draw_hints(fb, "↑↓ select   Enter confirm   q quit");
    }

    fn draw_difficulty(&self, fb: &mut FrameBuffer, selected: usize) {
        let w = fb.width();
        fb.put_str_centered(0, w, 1, "Choose a difficulty", CellStyle::fg(TITLE).bold());
        let x = w.saturating_sub(44) / 2;
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            let y = 3 + i as u16 * 2;
            let end = draw_choice(fb, x, y, difficulty.display_name(), i == selected);
            let config = difficulty.config();
            let detail = format!(
                "{n}×{n} grid · {} colors · {}s",
                config.color_count,
                config.memory_time_seconds,
                n = config.grid_size
            );
            fb.put_str(end.max(x + 18), y, &detail, CellStyle::fg(MUTED));
        }
        draw_hints(fb, "↑↓ select   Enter start   Esc back");
    }

    fn draw_game<S: Store>(
        &self,
        fb: &mut FrameBuffer,
        session: &Session<S>,
        cursor: usize,
        selected: usize,
    ) {
        let state = session.state();
        let w = fb.width();

        fb.put_str_centered(0, w, 0, &round_title(state), CellStyle::fg(TITLE).bold());
        let status = match state.phase() {
            Phase::Memory => format!("Memorize! {}s left", state.memory_time_left()),
            Phase::Playing => format!("Time {}", format_time(state.game_time_elapsed())),
            Phase::Finished => "Round over".to_string(),
            Phase::Idle => String::new(),
        };
        fb.put_str_centered(0, w, 1, &status, CellStyle::fg(ACCENT));

        let n = state.grid_size() as u16;
        let frame_w = n * self.cell_w + 2;
        let frame_h = n * self.cell_h + 2;
        let tray_w = 22;
        let total_w = frame_w + 2 + tray_w;
        let start_x = w.saturating_sub(total_w) / 2;
        let start_y = 3;

        fb.draw_border(start_x, start_y, frame_w, frame_h, CellStyle::fg(MUTED));
        let instant = session.settings().instant_feedback;
        for position in 0..state.cell_count() {
            let (cx, cy) = self.cell_origin(start_x, start_y, n, position);
            let color = match state.phase() {
                Phase::Memory => state.layout_at(position).map(|e| e.color),
                _ => state.placed_at(position).map(|p| p.color),
            };
            self.draw_swatch(fb, cx, cy, color);

            if instant {
                if let Some(feedback) = state.feedback_at(position) {
                    let (mark, fg) = if feedback.is_correct {
                        ('✓', GOOD)
                    } else {
                        ('✗', BAD)
                    };
                    let bg = color.map(color_rgb).unwrap_or(EMPTY_CELL);
                    fb.put_char(
                        cx + self.cell_w / 2,
                        cy + self.cell_h / 2,
                        mark,
                        CellStyle::fg(fg).on(bg).bold(),
                    );
                }
            }
            if state.phase() == Phase::Playing && position == cursor {
                self.draw_cursor(fb, cx, cy, color.map(color_rgb).unwrap_or(EMPTY_CELL));
            }
        }

        let tray_x = start_x + frame_w + 2;
        if state.phase() == Phase::Playing {
            self.draw_tray(fb, state, tray_x, start_y, selected);
        }

        let hints = match state.phase() {
            Phase::Playing if state.all_filled() => {
                "arrows move  1-9/Tab pick  Enter place  x remove  f FINISH  Esc leave"
            }
            Phase::Playing => "arrows move  1-9/Tab pick  Enter place  x remove  Esc leave",
            _ => "Esc leave",
        };
        draw_hints(fb, hints);
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, n: u16, position: usize) -> (u16, u16) {
        let n = n.max(1) as usize;
        let col = (position % n) as u16;
        let row = (position / n) as u16;
        (
            start_x + 1 + col * self.cell_w,
            start_y + 1 + row * self.cell_h,
        )
    }

    fn draw_swatch(&self, fb: &mut FrameBuffer, x: u16, y: u16, color: Option<Color>) {
        // One column of padding on the right separates neighbouring swatches.
        let inner_w = self.cell_w - 1;
        match color {
            Some(color) => {
                let style = CellStyle::fg(TEXT).on(color_rgb(color));
                fb.fill_rect(x, y, inner_w, self.cell_h, ' ', style);
            }
            None => {
                fb.fill_rect(x, y, inner_w, self.cell_h, ' ', CellStyle::fg(MUTED).on(EMPTY_CELL));
                fb.put_char(
                    x + inner_w / 2,
                    y + self.cell_h / 2,
                    '·',
                    CellStyle::fg(MUTED).on(EMPTY_CELL).dim(),
                );
            }
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, x: u16, y: u16, bg: Rgb) {
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).on(bg).bold();
        let right = x + self.cell_w - 2;
        let bottom = y + self.cell_h - 1;
        fb.put_char(x, y, '┏', style);
        fb.put_char(right, y, '┓', style);
        fb.put_char(x, bottom, '┗', style);
        fb.put_char(right, bottom, '┛', style);
    }

    fn draw_tray(&self, fb: &mut FrameBuffer, state: &GameState, x: u16, y: u16, selected: usize) {
        fb.put_str(x, y, "Blocks", CellStyle::default().bold());
        let blocks = state.available_blocks();
        if blocks.is_empty() {
            fb.put_str(x, y + 2, "(all placed)", CellStyle::fg(MUTED));
            return;
        }
        for (i, block) in blocks.iter().enumerate() {
            let row = y + 2 + i as u16;
            if row + 2 >= fb.height() {
                break;
            }
            let is_selected = i == selected;
            let marker = if is_selected { "▶" } else { " " };
            let mut cx = fb.put_str(x, row, marker, CellStyle::fg(ACCENT).bold());
            let key = if i < 9 {
                format!("{} ", i + 1)
            } else {
                "  ".to_string()
            };
            cx = fb.put_str(cx + 1, row, &key, CellStyle::fg(MUTED));
            cx = fb.put_str(cx, row, "    ", CellStyle::fg(TEXT).on(color_rgb(block.color)));
            let label = if is_selected {
                CellStyle::default().bold()
            } else {
                CellStyle::default()
            };
            fb.put_str(cx + 1, row, block.color.name, label);
        }
    }

    fn draw_result<S: Store>(&self, fb: &mut FrameBuffer, session: &Session<S>) {
        let w = fb.width();
        let Some(outcome) = session.outcome() else {
            fb.put_str_centered(0, w, 1, "No result", CellStyle::fg(MUTED));
            draw_hints(fb, "Esc menu");
            return;
        };
        let result = &outcome.result;
        let evaluation = outcome.evaluation;

        let headline = format!("{} {}", evaluation.emoji(), evaluation.headline());
        fb.put_str_centered(0, w, 1, &headline, CellStyle::fg(TITLE).bold());

        let metrics = format!(
            "Accuracy {}%   Correct {}/{}   Time {}",
            result.accuracy,
            result.correct,
            result.total,
            format_time(result.time_spent_seconds)
        );
        fb.put_str_centered(0, w, 3, &metrics, CellStyle::default());

        let round = match (result.mode, result.difficulty) {
            (GameMode::Challenge, _) => format!("Challenge · Level {}", result.level),
            (GameMode::Normal, Some(d)) => d.display_name().to_string(),
            (GameMode::Normal, None) => String::new(),
        };
        fb.put_str_centered(0, w, 4, &round, CellStyle::fg(MUTED));

        self.draw_card_line(fb, outcome, 6);
        if outcome.new_high_score {
            fb.put_str_centered(0, w, 7, "New best challenge level!", CellStyle::fg(ACCENT).bold());
        }

        // Expected color on top, placed color below.
        let n = (result.cells.len() as f64).sqrt().round() as u16;
        let cell_w = 5;
        let grid_w = n * cell_w;
        let gx = w.saturating_sub(grid_w) / 2;
        let gy = 9;
        for (i, cell) in result.cells.iter().enumerate() {
            let col = i as u16 % n.max(1);
            let row = i as u16 / n.max(1);
            let x = gx + col * cell_w;
            let y = gy + row * 3;
            fb.fill_rect(x, y, cell_w - 1, 1, ' ', CellStyle::fg(TEXT).on(color_rgb(cell.expected)));
            let bg = cell.actual.map(color_rgb).unwrap_or(EMPTY_CELL);
            fb.fill_rect(x, y + 1, cell_w - 1, 1, ' ', CellStyle::fg(TEXT).on(bg));
            let (mark, fg) = if cell.is_correct { ('✓', GOOD) } else { ('✗', BAD) };
            fb.put_char(x + (cell_w - 1) / 2, y + 1, mark, CellStyle::fg(fg).on(bg).bold());
        }

        let hints = if result.can_continue() {
            "n next level   r replay   Esc menu"
        } else {
            "r replay   Esc menu"
        };
        draw_hints(fb, hints);
    }

    fn draw_card_line(&self, fb: &mut FrameBuffer, outcome: &RoundOutcome, y: u16) {
        let w = fb.width();
        match outcome.card {
            Some(card) => {
                let new = if outcome.is_new_card { "  NEW!" } else { "" };
                let line = format!(
                    "Card earned: {} {} ({}){}",
                    card.emoji,
                    card.name,
                    card.rarity.display_name(),
                    new
                );
                fb.put_str_centered(0, w, y, &line, CellStyle::fg(rarity_rgb(card.rarity)).bold());
            }
            None => fb.put_str_centered(0, w, y, "No card this time", CellStyle::fg(MUTED)),
        }
    }

    fn draw_collection<S: Store>(&self, fb: &mut FrameBuffer, session: &Session<S>, selected: usize) {
        let w = fb.width();
        let (collected, total) = session.collection_progress();
        let title = format!("Card Collection {collected}/{total}");
        fb.put_str_centered(0, w, 1, &title, CellStyle::fg(TITLE).bold());

        let entries = session.collection();
        let first_row = 3;
        let visible = fb.height().saturating_sub(first_row + 2).max(1) as usize;
        let skip = selected.saturating_sub(visible - 1);
        let x = w.saturating_sub(72) / 2;

        for (i, entry) in entries.iter().enumerate().skip(skip).take(visible) {
            let y = first_row + (i - skip) as u16;
            let card = entry.card;
            let marker = if i == selected { "▶ " } else { "  " };
            let mut cx = fb.put_str(x, y, marker, CellStyle::fg(ACCENT).bold());
            if entry.collected {
                cx = fb.put_str(cx, y, card.emoji, CellStyle::default());
                fb.put_str(cx + 1, y, card.name, CellStyle::default().bold());
            } else {
                cx = fb.put_str(cx, y, "❔", CellStyle::fg(MUTED));
                fb.put_str(cx + 1, y, "???", CellStyle::fg(MUTED));
            }
            fb.put_str(x + 28, y, card.rarity.display_name(), CellStyle::fg(rarity_rgb(card.rarity)));
            let detail = if entry.collected {
                card.description.to_string()
            } else {
                requirement_text(card)
            };
            fb.put_str(x + 39, y, &detail, CellStyle::fg(MUTED));
        }
        draw_hints(fb, "↑↓ scroll   Esc back");
    }

    fn draw_settings<S: Store>(&self, fb: &mut FrameBuffer, session: &Session<S>, selected: usize) {
        let w = fb.width();
        fb.put_str_centered(0, w, 1, "Settings", CellStyle::fg(TITLE).bold());
        let settings = session.settings();
        let x = w.saturating_sub(32) / 2;
        for (i, key) in SettingKey::ALL.iter().enumerate() {
            let y = 3 + i as u16 * 2;
            draw_choice(fb, x, y, key.label(), i == selected);
            let (value, fg) = if settings.get(*key) {
                ("[on ]", GOOD)
            } else {
                ("[off]", BAD)
            };
            fb.put_str(x + 24, y, value, CellStyle::fg(fg).bold());
        }
        draw_hints(fb, "↑↓ select   Enter toggle   Esc back");
    }
}

/// Draw a selectable row; returns the column after the label.
fn draw_choice(fb: &mut FrameBuffer, x: u16, y: u16, label: &str, selected: bool) -> u16 {
    if selected {
        let end = fb.put_str(x, y, "▶ ", CellStyle::fg(ACCENT).bold());
        fb.put_str(end, y, label, CellStyle::default().bold())
    } else {
        fb.put_str(x + 2, y, label, CellStyle::default())
    }
}

fn draw_hints(fb: &mut FrameBuffer, hints: &str) {
    let y = fb.height().saturating_sub(1);
    let w = fb.width();
    if text_width(hints) > w {
        fb.put_str(0, y, hints, CellStyle::fg(MUTED).on(BACKGROUND));
    } else {
        fb.put_str_centered(0, w, y, hints, CellStyle::fg(MUTED).on(BACKGROUND));
    }
}

fn round_title(state: &GameState) -> String {
    match (state.mode(), state.difficulty()) {
        (Some(GameMode::Challenge), _) => format!("Challenge · Level {}", state.level()),
        (Some(GameMode::Normal), Some(d)) => format!("Normal · {}", d.display_name()),
        _ => "Color Recall".to_string(),
    }
}

fn requirement_text(card: &Card) -> String {
    match card.requirement {
        CardRequirement::Normal {
            difficulty,
            min_accuracy,
            max_time_seconds: Some(max),
        } => format!("{} · {}%+ within {}s", difficulty.display_name(), min_accuracy, max),
        CardRequirement::Normal {
            difficulty,
            min_accuracy,
            max_time_seconds: None,
        } => format!("{} · {}%+", difficulty.display_name(), min_accuracy),
        CardRequirement::Challenge { min_level } => {
            format!("Challenge · perfect at level {min_level}+")
        }
    }
}

fn color_rgb(color: Color) -> Rgb {
    Rgb::from(color.rgb())
}

fn rarity_rgb(rarity: Rarity) -> Rgb {
    match rarity {
        Rarity::Common => Rgb::new(190, 190, 200),
        Rarity::Rare => Rgb::new(90, 160, 255),
        Rarity::Epic => Rgb::new(190, 110, 255),
        Rarity::Legendary => Rgb::new(255, 170, 40),
        Rarity::Mythic => Rgb::new(255, 110, 180),
    }
}
