//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. The board is drawn at whatever
//! size the snapshot carries; [`GameView::board_layout`] tells input code where
//! the grid ended up on screen.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Color, InteractionState};

const PLAY_BG: Color = Color::new(30, 30, 40);
const PANEL_BG: Color = Color::new(0, 0, 0);

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

/// Screen placement of the board grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Terminal column/row of grid cell (0, 0)
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl BoardLayout {
    /// Screen position of the top-left character of grid cell (x, y)
    pub fn cell_origin(&self, x: u16, y: u16) -> (u16, u16) {
        (
            self.origin_x.saturating_add(x.saturating_mul(self.cell_w)),
            self.origin_y.saturating_add(y.saturating_mul(self.cell_h)),
        )
    }
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares a cell on common terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn board_layout(&self, rows: u16, cols: u16, viewport: Viewport) -> BoardLayout {
        let board_w = cols.saturating_mul(self.cell_w);
        let board_h = rows.saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;

        BoardLayout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            origin_x: frame_x.saturating_add(1),
            origin_y: frame_y.saturating_add(1),
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.board_layout(snap.rows, snap.cols, viewport);

        let bg = CellStyle::new(Color::new(80, 80, 90), PLAY_BG);
        fb.fill_rect(
            layout.origin_x,
            layout.origin_y,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            bg,
        );
        draw_border(fb, &layout, CellStyle::new(Color::new(200, 200, 200), PANEL_BG));

        for y in 0..snap.rows {
            for x in 0..snap.cols {
                match snap.cell(x as i32, y as i32).flatten() {
                    Some(color) => self.fill_cell(fb, &layout, x, y, '█', block_style(color)),
                    None => self.fill_cell(
                        fb,
                        &layout,
                        x,
                        y,
                        '·',
                        CellStyle {
                            dim: true,
                            ..CellStyle::new(Color::new(90, 90, 100), PLAY_BG)
                        },
                    ),
                }
            }
        }

        if let Some(active) = snap.active {
            let (ch, style) = match active.state {
                InteractionState::Held => (
                    '▓',
                    CellStyle {
                        bold: true,
                        ..CellStyle::new(active.color.scaled(320), PLAY_BG)
                    },
                ),
                _ => ('█', block_style(active.color)),
            };
            for cell in active.cells() {
                // Cells above the top edge are not drawn.
                if cell.x < 0 || cell.y < 0 || cell.x >= snap.cols as i32 || cell.y >= snap.rows as i32 {
                    continue;
                }
                self.fill_cell(fb, &layout, cell.x as u16, cell.y as u16, ch, style);
            }
        }

        draw_side_panel(fb, snap, viewport, &layout);

        if snap.is_over {
            draw_overlay_text(fb, &layout, "GAME OVER");
        } else if snap.paused {
            draw_overlay_text(fb, &layout, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = layout.cell_origin(x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

fn block_style(color: Color) -> CellStyle {
    CellStyle::new(color, PLAY_BG)
}

fn draw_border(fb: &mut FrameBuffer, layout: &BoardLayout, style: CellStyle) {
    let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: &BoardLayout) {
    let panel_x = layout
        .frame_x
        .saturating_add(layout.frame_w)
        .saturating_add(2);
    if panel_x >= viewport.width || viewport.width - panel_x < 10 {
        return;
    }

    let label = CellStyle {
        bold: true,
        ..CellStyle::new(Color::new(220, 220, 220), PANEL_BG)
    };
    let value = CellStyle::new(Color::new(200, 200, 200), PANEL_BG);
    let dim = CellStyle { dim: true, ..value };

    let mut y = layout.frame_y;
    fb.put_str(panel_x, y, "SCORE", label);
    y = y.saturating_add(1);
    fb.put_u32(panel_x, y, snap.score, value);
    y = y.saturating_add(2);

    fb.put_str(panel_x, y, "SPEED", label);
    y = y.saturating_add(1);
    fb.put_u32(panel_x, y, snap.tick_interval_ms, value);
    let digits = snap.tick_interval_ms.max(1).ilog10() as u16 + 1;
    fb.put_str(panel_x.saturating_add(digits), y, "ms", dim);
    y = y.saturating_add(2);

    let state = match snap.active.map(|a| a.state) {
        Some(InteractionState::Held) => "HELD",
        Some(_) => "FALLING",
        None => "-",
    };
    fb.put_str(panel_x, y, "PIECE", label);
    y = y.saturating_add(1);
    fb.put_str(panel_x, y, state, value);
    y = y.saturating_add(1);
    fb.put_str(panel_x, y, snap.piece_set.as_str(), dim);
    y = y.saturating_add(2);

    for hint in ["arrows move", "up rotate", "space drop", "p pause", "q quit"] {
        if y >= viewport.height {
            break;
        }
        fb.put_str(panel_x, y, hint, dim);
        y = y.saturating_add(1);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) {
    let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = layout
        .frame_x
        .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle {
        bold: true,
        ..CellStyle::new(Color::new(255, 255, 255), PANEL_BG)
    };
    fb.put_str(x, mid_y, text, style);
}
