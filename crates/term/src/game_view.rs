//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActiveSnapshot, BoardSnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, FILLED, MAX_SHAPE_DIM};

/// Key legend drawn under the board.
pub const HELP_TEXT: &str = "a/← d/→ move  w/↑ s/↓ rotate  f/space drop  q quit";

const BLOCK: char = '█';
const WALL: char = '▓';
const EMPTY: char = '·';

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

/// Screen positions of the parts of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Column of board cell `x == 0`.
    pub board_x: u16,
    /// Row of board cell `y == 0`.
    pub board_y: u16,
    /// First row of the strip above the board holding the active piece.
    pub piece_y: u16,
    pub help_y: u16,
    pub status_y: u16,
    pub cell_w: u16,
}

impl Layout {
    /// Top-left terminal position of board cell `(x, y)`.
    pub fn cell_origin(&self, x: usize, y: usize) -> (u16, u16) {
        (
            self.board_x.saturating_add(to_u16(x).saturating_mul(self.cell_w)),
            self.board_y.saturating_add(to_u16(y)),
        )
    }
}

/// Renders the board with its walls, the active piece hovering above it, a
/// key legend and one status line.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Compute where a board of `board_size` lands in `viewport`.
    ///
    /// The whole block (piece strip, board, blank, help, status) is centered;
    /// it is pinned to the top-left when the viewport is too small.
    pub fn layout(&self, board_size: usize, viewport: Viewport) -> Layout {
        let strip_h = to_u16(MAX_SHAPE_DIM);
        let board_w = to_u16(board_size).saturating_mul(self.cell_w);
        let board_h = to_u16(board_size);
        let total_h = strip_h.saturating_add(board_h).saturating_add(3);

        let board_x = viewport.width.saturating_sub(board_w) / 2;
        let piece_y = viewport.height.saturating_sub(total_h) / 2;
        let board_y = piece_y.saturating_add(strip_h);
        let help_y = board_y.saturating_add(board_h).saturating_add(1);
        Layout {
            board_x,
            board_y,
            piece_y,
            help_y,
            status_y: help_y.saturating_add(1),
            cell_w: self.cell_w,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `prompt` replaces the status line, e.g. for a quit confirmation.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        prompt: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let layout = self.layout(snap.board.size(), viewport);
        self.draw_board(fb, &snap.board, &layout);
        if let Some(active) = &snap.active {
            self.draw_active(fb, active, &layout);
        }

        let help = CellStyle::fg(Rgb::new(150, 150, 160)).dim();
        put_centered(fb, viewport, layout.help_y, HELP_TEXT, help);

        let pieces;
        let (status, style) = match prompt {
            Some(text) => (text, CellStyle::fg(Rgb::new(255, 255, 255)).bold()),
            None if snap.game_over => ("GAME OVER", CellStyle::fg(Rgb::new(230, 80, 80)).bold()),
            None => {
                pieces = format!("pieces {}", snap.pieces_committed);
                (pieces.as_str(), CellStyle::default())
            }
        };
        put_centered(fb, viewport, layout.status_y, status, style);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_prompt(snap, None, viewport)
    }

    pub fn render_with_prompt(
        &self,
        snap: &GameSnapshot,
        prompt: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, prompt, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, board: &BoardSnapshot, layout: &Layout) {
        let size = board.size();
        let wall = CellStyle::fg(Rgb::new(120, 120, 130));
        let settled = CellStyle::fg(Rgb::new(200, 200, 210)).bold();
        let empty = CellStyle::fg(Rgb::new(70, 70, 80)).dim();

        for (y, row) in board.rows().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let is_wall = x == 0 || x + 1 == size || y + 1 == size;
                let (ch, style) = if is_wall {
                    (WALL, wall)
                } else if value >= FILLED {
                    (BLOCK, settled)
                } else {
                    (EMPTY, empty)
                };
                let (px, py) = layout.cell_origin(x, y);
                fb.fill_rect(px, py, self.cell_w, 1, ch, style);
            }
        }
    }

    /// Draw the shape bottom-aligned in the strip above the board, at the
    /// columns it would occupy once dropped.
    fn draw_active(&self, fb: &mut FrameBuffer, active: &ActiveSnapshot, layout: &Layout) {
        let style = CellStyle::fg(piece_color(active.kind)).bold();
        let top = layout
            .board_y
            .saturating_sub(to_u16(active.shape.height()));
        for (r, row) in active.shape.rows().iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value < FILLED {
                    continue;
                }
                let (px, _) = layout.cell_origin(active.left + c, 0);
                fb.fill_rect(px, top.saturating_add(to_u16(r)), self.cell_w, 1, BLOCK, style);
            }
        }
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::Straight => Rgb::new(80, 220, 220),
        PieceKind::Square => Rgb::new(240, 220, 80),
        PieceKind::NShape => Rgb::new(100, 220, 120),
        PieceKind::LShape => Rgb::new(255, 165, 0),
        PieceKind::SevenShape => Rgb::new(80, 120, 220),
    }
}

fn put_centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let text_w = to_u16(text.chars().count());
    let x = viewport.width.saturating_sub(text_w) / 2;
    fb.put_str(x, y, text, style);
}

fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameState};

    #[test]
    fn layout_stacks_strip_board_and_text() {
        let view = GameView::default();
        // 4 strip rows + 12 board rows + blank + help + status = 19
        let layout = view.layout(12, Viewport::new(60, 21));
        assert_eq!(layout.piece_y, 1);
        assert_eq!(layout.board_y, 5);
        assert_eq!(layout.help_y, 18);
        assert_eq!(layout.status_y, 19);
        assert_eq!(layout.board_x, 18);
        assert_eq!(layout.cell_origin(1, 2), (20, 7));
    }

    #[test]
    fn small_viewport_pins_to_origin() {
        let layout = GameView::default().layout(12, Viewport::new(10, 10));
        assert_eq!((layout.board_x, layout.piece_y), (0, 0));
    }

    #[test]
    fn status_line_reports_piece_count() {
        let mut gs = GameState::new(GameConfig::new(8).with_seed(3)).unwrap();
        gs.spawn(PieceKind::Square);
        gs.drop_piece();
        let vp = Viewport::new(40, 20);
        let view = GameView::default();
        let fb = view.render(&gs.snapshot(), vp);
        let layout = view.layout(8, vp);
        assert!(fb.row_text(layout.status_y).contains("pieces 1"));
    }
}
