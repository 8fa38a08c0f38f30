//! Terminal renderer
//!
//! Maps arena coordinates onto terminal cells and draws every entity as a
//! colored glyph. All terminal I/O lives here; no game logic is performed.
//!
//! Layout: row 0 is the HUD, rows 1 and `rows - 2` are the border, the
//! band between them is the arena, and the last row holds the key hints.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};

use super::{Renderer, TextKind, Visual};
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::sim::{Facing, PickupKind, Pose, Rect};

// ── Colour palette ────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::Yellow;
const C_AVATAR: Color = Color::White;
const C_AVATAR_JOY: Color = Color::Yellow;
const C_AVATAR_SORROW: Color = Color::Red;
const C_PROJECTILE: Color = Color::Cyan;
const C_RAIDER_DESCENDING: Color = Color::Green;
const C_RAIDER_HALTED: Color = Color::Red;
const C_HAZARD: Color = Color::Magenta;
const C_PICKUP_EXTEND: Color = Color::Green;
const C_PICKUP_SHORTEN: Color = Color::Red;
const C_EXPLOSION: Color = Color::Yellow;
const C_BANNER: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

const HINT: &str = "arrows/WASD move   SPACE fire   B burst   P pause   Q quit";

/// Glyph-per-entity renderer over any terminal-shaped writer.
pub struct TermRenderer<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
}

impl<W: Write> TermRenderer<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        Self { out, cols, rows }
    }

    /// Track a terminal resize.
    pub fn set_dimensions(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    fn arena_top(&self) -> u16 {
        2
    }

    fn arena_bottom(&self) -> u16 {
        self.rows.saturating_sub(3)
    }

    /// Arena x to terminal column, clamped inside the border.
    fn col(&self, x: f32) -> u16 {
        let inner = self.cols.saturating_sub(2).max(1);
        let col = 1.0 + x / ARENA_WIDTH * (inner - 1) as f32;
        (col as u16).clamp(1, inner)
    }

    /// Arena y to terminal row, clamped inside the border.
    fn row(&self, y: f32) -> u16 {
        let top = self.arena_top();
        let bottom = self.arena_bottom().max(top);
        let span = (bottom - top) as f32;
        let row = top as f32 + y / ARENA_HEIGHT * span;
        (row as u16).clamp(top, bottom)
    }

    fn put(&mut self, col: u16, row: u16, color: Color, glyph: &str) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(glyph))?;
        Ok(())
    }

    fn put_centered(&mut self, row: u16, color: Color, text: &str) -> std::io::Result<()> {
        let col = (self.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
        self.put(col, row, color, text)
    }

    fn draw_border(&mut self) -> std::io::Result<()> {
        let w = self.cols as usize;
        self.out.queue(style::SetForegroundColor(C_BORDER))?;
        self.out.queue(cursor::MoveTo(0, 1))?;
        self.out
            .queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;
        self.out
            .queue(cursor::MoveTo(0, self.rows.saturating_sub(2)))?;
        self.out
            .queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;
        for row in 2..self.rows.saturating_sub(2) {
            self.out.queue(cursor::MoveTo(0, row))?;
            self.out.queue(Print("│"))?;
            self.out
                .queue(cursor::MoveTo(self.cols.saturating_sub(1), row))?;
            self.out.queue(Print("│"))?;
        }
        Ok(())
    }
}

fn avatar_glyph(facing: Facing, pose: Pose) -> (&'static str, Color) {
    match pose {
        Pose::Joy => ("☺", C_AVATAR_JOY),
        Pose::Sorrow => ("☹", C_AVATAR_SORROW),
        Pose::Neutral => {
            let glyph = match facing {
                Facing::Right => "→",
                Facing::UpRight => "↗",
                Facing::Up => "↑",
                Facing::UpLeft => "↖",
                Facing::Left => "←",
                Facing::DownLeft => "↙",
                Facing::Down => "↓",
                Facing::DownRight => "↘",
            };
            (glyph, C_AVATAR)
        }
    }
}

impl<W: Write> Renderer for TermRenderer<W> {
    type Error = std::io::Error;

    fn clear(&mut self) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.draw_border()?;
        let hint_row = self.rows.saturating_sub(1);
        self.put(1, hint_row, C_HINT, HINT)?;
        Ok(())
    }

    fn draw(&mut self, visual: Visual, rect: &Rect) -> std::io::Result<()> {
        let col = self.col(rect.center.x);
        let row = self.row(rect.center.y);
        let (glyph, color) = match visual {
            Visual::Avatar(facing, pose) => avatar_glyph(facing, pose),
            Visual::Projectile => ("•", C_PROJECTILE),
            Visual::Raider { halted: false } => ("▼", C_RAIDER_DESCENDING),
            Visual::Raider { halted: true } => ("■", C_RAIDER_HALTED),
            Visual::Hazard => ("●", C_HAZARD),
            Visual::Pickup(PickupKind::Extend) => ("+", C_PICKUP_EXTEND),
            Visual::Pickup(PickupKind::Shorten) => ("-", C_PICKUP_SHORTEN),
            Visual::Explosion { frame: 0 } => ("✶", C_EXPLOSION),
            Visual::Explosion { .. } => ("✳", C_EXPLOSION),
        };
        self.put(col, row, color, glyph)
    }

    fn draw_text(&mut self, kind: TextKind, text: &str) -> std::io::Result<()> {
        match kind {
            TextKind::Score => self.put(1, 0, C_HUD, text),
            TextKind::TimeLeft => self.put_centered(0, Color::White, text),
            TextKind::Banner => {
                let row = self.rows / 2;
                self.put_centered(row, C_BANNER, &format!("  {text}  "))
            }
        }
    }

    fn draw_gauge(&mut self, value: u8, max: u8) -> std::io::Result<()> {
        let bar: String = (0..max).map(|i| if i < value { '■' } else { '□' }).collect();
        let label = if value == max { "READY" } else { "charging" };
        let text = format!("[{bar}] {label}");
        let col = self
            .cols
            .saturating_sub(text.chars().count() as u16 + 1);
        let color = if value == max { C_HUD } else { C_HINT };
        self.put(col, 0, color, &text)
    }

    fn present(&mut self) -> std::io::Result<()> {
        // Park the cursor somewhere harmless and flush the frame
        self.out.queue(style::ResetColor)?;
        self.out
            .queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::render::draw_frame;
    use crate::sim::MatchState;
    use glam::Vec2;

    fn renderer() -> TermRenderer<Vec<u8>> {
        TermRenderer::new(Vec::new(), 120, 36)
    }

    #[test]
    fn coordinates_map_inside_the_border() {
        let r = renderer();
        assert_eq!(r.col(0.0), 1);
        assert!(r.col(ARENA_WIDTH) <= 118);
        assert_eq!(r.row(0.0), 2);
        assert!(r.row(ARENA_HEIGHT) <= 33);
    }

    #[test]
    fn degenerate_terminal_sizes_do_not_panic() {
        let mut r = TermRenderer::new(Vec::new(), 2, 2);
        let state = MatchState::new(Tuning::default(), 1);
        draw_frame(&mut r, &state).unwrap();
    }

    #[test]
    fn a_full_frame_emits_terminal_commands() {
        let mut r = renderer();
        let mut state = MatchState::new(Tuning::default(), 1);
        state.avatar.rect.center = Vec2::new(550.0, 325.0);
        draw_frame(&mut r, &state).unwrap();
        let bytes = r.out;
        assert!(!bytes.is_empty());
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Time: 60"));
    }

    #[test]
    fn gauge_bar_shows_fill_and_readiness() {
        let mut r = renderer();
        r.draw_gauge(2, 5).unwrap();
        let text = String::from_utf8_lossy(&r.out).to_string();
        assert!(text.contains("■■□□□"));
        assert!(text.contains("charging"));

        let mut r = renderer();
        r.draw_gauge(5, 5).unwrap();
        let text = String::from_utf8_lossy(&r.out).to_string();
        assert!(text.contains("■■■■■"));
        assert!(text.contains("READY"));
    }
}
