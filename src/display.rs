//! Terminal rendering layer. All terminal I/O lives here.
//!
//! `TerminalSurface` receives the core's draw calls in world units, scales
//! them onto a character grid sized to the terminal, and writes the grid out
//! with crossterm once per frame. No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use glam::Vec2;
use viper_shooter::config::Viewport;
use viper_shooter::entities::SpriteId;
use viper_shooter::render::{self as core_render, SpriteSource, Surface};
use viper_shooter::GameError;

/// Smallest terminal the playfield can be squeezed into.
pub const MIN_COLS: u16 = 20;
pub const MIN_ROWS: u16 = 10;

// ── Glyphs ────────────────────────────────────────────────────────────────────

fn glyph(sprite: SpriteId) -> (char, Color) {
    match sprite {
        SpriteId::Viper => ('▲', Color::White),
        SpriteId::Boss => ('█', Color::Magenta),
        SpriteId::ViperShot => ('║', Color::Cyan),
        SpriteId::ViperSingleShot => ('¦', Color::Cyan),
        SpriteId::EnemyShot => ('•', Color::Yellow),
        SpriteId::EnemySmall => ('▼', Color::Green),
        SpriteId::EnemyLarge => ('◆', Color::Red),
        SpriteId::HomingShot => ('*', Color::Magenta),
    }
}

fn to_term(color: core_render::Color) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Dim a colour toward black for translucent draws.
fn fade(color: Color, alpha: f32) -> Color {
    match color {
        Color::Rgb { r, g, b } if alpha < 1.0 => {
            let scale = |c: u8| (c as f32 * alpha.clamp(0.0, 1.0)) as u8;
            Color::Rgb {
                r: scale(r),
                g: scale(g),
                b: scale(b),
            }
        }
        _ if alpha < 1.0 => Color::DarkGrey,
        other => other,
    }
}

// ── Cell grid ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    fg: Color::Reset,
    bg: Color::Reset,
};

pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    scale: Vec2,
    alpha: f32,
    cells: Vec<Cell>,
}

impl TerminalSurface {
    /// Size the grid to the current terminal.
    pub fn new(viewport: &Viewport) -> Result<Self, GameError> {
        let (cols, rows) = terminal::size()?;
        Self::with_size(viewport, cols, rows)
    }

    pub fn with_size(viewport: &Viewport, cols: u16, rows: u16) -> Result<Self, GameError> {
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(GameError::SurfaceUnavailable(format!(
                "terminal is {cols}x{rows}, need at least {MIN_COLS}x{MIN_ROWS}"
            )));
        }
        Ok(Self {
            cols,
            rows,
            scale: Vec2::new(
                cols as f32 / viewport.width,
                rows as f32 / viewport.height,
            ),
            alpha: 1.0,
            cells: vec![BLANK; cols as usize * rows as usize],
        })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    fn cell_of(&self, world: Vec2) -> (i32, i32) {
        let p = world * self.scale;
        (p.x.floor() as i32, p.y.floor() as i32)
    }

    fn put(&mut self, col: i32, row: i32, f: impl FnOnce(&mut Cell)) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let index = row as usize * self.cols as usize + col as usize;
        f(&mut self.cells[index]);
    }

    /// Write the grid to `out`, grouping runs of equal colour.
    pub fn present<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            let line = &self.cells[start..start + self.cols as usize];
            let mut current: Option<(Color, Color)> = None;
            let mut run = String::new();
            for cell in line {
                if current != Some((cell.fg, cell.bg)) {
                    if let Some((fg, bg)) = current {
                        flush_run(out, &run, fg, bg)?;
                        run.clear();
                    }
                    current = Some((cell.fg, cell.bg));
                }
                run.push(cell.ch);
            }
            if let Some((fg, bg)) = current {
                flush_run(out, &run, fg, bg)?;
            }
        }
        out.queue(style::ResetColor)?;
        out.flush()?;
        self.cells.fill(BLANK);
        Ok(())
    }
}

fn flush_run<W: Write>(out: &mut W, run: &str, fg: Color, bg: Color) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(fg))?;
    out.queue(style::SetBackgroundColor(bg))?;
    out.queue(Print(run))?;
    Ok(())
}

impl Surface for TerminalSurface {
    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    /// Rects spanning several cells paint the background; smaller ones
    /// (stars, sparks) become a single dot.
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: core_render::Color) {
        let color = fade(to_term(color), self.alpha);
        let (c0, r0) = self.cell_of(pos);
        let (c1, r1) = self.cell_of(pos + size);
        if c1 - c0 >= 2 && r1 - r0 >= 2 {
            for row in r0..r1 {
                for col in c0..c1 {
                    self.put(col, row, |cell| {
                        *cell = Cell {
                            ch: ' ',
                            fg: Color::Reset,
                            bg: color,
                        }
                    });
                }
            }
        } else {
            let (col, row) = self.cell_of(pos + size / 2.0);
            self.put(col, row, |cell| {
                cell.ch = '·';
                cell.fg = color;
            });
        }
    }

    fn draw_image(&mut self, sprite: SpriteId, center: Vec2, size: Vec2, _rotation: Option<f32>) {
        let (ch, fg) = glyph(sprite);
        let fg = fade(fg, self.alpha);
        // Only the middle half of a sprite gets cells, so ships don't smear.
        let (c0, r0) = self.cell_of(center - size / 4.0);
        let (c1, r1) = self.cell_of(center + size / 4.0);
        for row in r0..=r1.max(r0) {
            for col in c0..=c1.max(c0) {
                self.put(col, row, |cell| {
                    cell.ch = ch;
                    cell.fg = fg;
                });
            }
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: core_render::Color, max_width: f32) {
        let fg = fade(to_term(color), self.alpha);
        let (col, row) = self.cell_of(pos);
        let limit = ((max_width * self.scale.x).ceil() as usize).max(1);
        for (i, ch) in text.chars().take(limit).enumerate() {
            self.put(col + i as i32, row, |cell| {
                cell.ch = ch;
                cell.fg = fg;
            });
        }
    }
}

/// Glyph sprites need no loading.
impl SpriteSource for TerminalSurface {
    fn is_loaded(&self, _sprite: SpriteId) -> bool {
        true
    }
}

// ── Controls hint ─────────────────────────────────────────────────────────────

/// Last-row hint, written straight to the terminal after the grid.
pub fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print(
        "←↑↓→ / WASD : Move   Z / SPACE : Shoot   ENTER : Restart   Q : Quit",
    ))?;
    out.queue(style::ResetColor)?;
    out.flush()
}
