use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use image::imageops::FilterType;

use crate::config::{CELL_SIZE, GRID_COLS, GRID_OFFSET, GRID_ROWS, HEIGHT, WIDTH};
use crate::grid::Pos;
use crate::score::ScoreBoard;
use crate::session::Session;
use crate::snake::Snake;

const BACKGROUND: (u8, u8, u8) = (73, 98, 58);
const GRID_LINE: (u8, u8, u8, u8) = (200, 200, 200, 50);
const BORDER_THICKNESS: i32 = 8;

const SNAKE_HEAD: (u8, u8, u8) = (225, 150, 255);
const SNAKE_BODY: (u8, u8, u8) = (170, 95, 235);

const HUD_COLOR: (u8, u8, u8, u8) = (255, 161, 0, 255);

/// The apple bitmap, decoded once at startup and resized to one grid cell.
pub struct FoodIcon {
    rgba: Vec<u8>,
}

impl FoodIcon {
    pub fn load(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("loading food icon from {}", path.display()))?;
        let img = img
            .resize_exact(CELL_SIZE, CELL_SIZE, FilterType::Triangle)
            .into_rgba8();
        Ok(Self {
            rgba: img.into_raw(),
        })
    }

    fn blit(&self, frame: &mut [u8], cell: Pos) {
        let (ox, oy) = cell_origin(cell);
        for y in 0..CELL_SIZE as i32 {
            for x in 0..CELL_SIZE as i32 {
                let i = ((y * CELL_SIZE as i32 + x) * 4) as usize;
                let a = self.rgba[i + 3];
                if a > 0 {
                    blend_pixel(
                        frame,
                        ox + x,
                        oy + y,
                        self.rgba[i],
                        self.rgba[i + 1],
                        self.rgba[i + 2],
                        a,
                    );
                }
            }
        }
    }
}

pub fn draw_frame(frame: &mut [u8], session: &Session, icon: &FoodIcon, now: Instant) {
    clear_rgb(frame, BACKGROUND.0, BACKGROUND.1, BACKGROUND.2);
    draw_field(frame);
    icon.blit(frame, session.food().position());
    draw_snake(frame, session.snake());
    draw_hud(frame, session.score());

    if session.is_over() {
        draw_game_over(frame, session.elapsed_secs(now));
    }
}

fn draw_field(frame: &mut [u8]) {
    let left = GRID_OFFSET as i32;
    let top = GRID_OFFSET as i32;
    let right = left + GRID_COLS * CELL_SIZE as i32;
    let bottom = top + GRID_ROWS * CELL_SIZE as i32;

    for i in 0..=GRID_ROWS {
        let y = top + i * CELL_SIZE as i32;
        for x in left..right {
            blend_pixel(frame, x, y, GRID_LINE.0, GRID_LINE.1, GRID_LINE.2, GRID_LINE.3);
        }
    }
    for j in 0..=GRID_COLS {
        let x = left + j * CELL_SIZE as i32;
        for y in top..bottom {
            blend_pixel(frame, x, y, GRID_LINE.0, GRID_LINE.1, GRID_LINE.2, GRID_LINE.3);
        }
    }

    // Black frame sitting just outside the playing field.
    let t = BORDER_THICKNESS;
    fill_rect(frame, left - t, top - t, right + t, top, 0, 0, 0);
    fill_rect(frame, left - t, bottom, right + t, bottom + t, 0, 0, 0);
    fill_rect(frame, left - t, top, left, bottom, 0, 0, 0);
    fill_rect(frame, right, top, right + t, bottom, 0, 0, 0);
}

fn draw_snake(frame: &mut [u8], snake: &Snake) {
    for (i, cell) in snake.cells().enumerate() {
        if i == 0 {
            fill_cell(frame, cell, SNAKE_HEAD.0, SNAKE_HEAD.1, SNAKE_HEAD.2);
        } else {
            // Body fades slightly towards the tail.
            let fade = (i as u32 * 5).min(50) as u8;
            fill_cell(
                frame,
                cell,
                SNAKE_BODY.0 - fade,
                SNAKE_BODY.1 - fade / 2,
                SNAKE_BODY.2 - fade,
            );
        }
    }
}

fn draw_hud(frame: &mut [u8], score: &ScoreBoard) {
    let scale = 5;
    let grid_right = (GRID_OFFSET + GRID_COLS as u32 * CELL_SIZE) as i32;
    let text_y = (GRID_OFFSET + GRID_ROWS as u32 * CELL_SIZE + 30) as i32;

    draw_text(
        frame,
        &format!("SCORE : {}", score.score()),
        GRID_OFFSET as i32,
        text_y,
        scale,
        HUD_COLOR,
    );

    let length_text = format!("LENGTH : {}", score.length());
    let length_x = grid_right - text_width(&length_text, scale);
    draw_text(frame, &length_text, length_x, text_y, scale, HUD_COLOR);
}

fn draw_game_over(frame: &mut [u8], elapsed_secs: f32) {
    // Pulsing alpha: sin shifted into [0, 1], scaled to a byte.
    let alpha = (((elapsed_secs * 3.0).sin() + 1.0) * 0.5 * 255.0) as u8;

    let scale = 10;
    let text = "GAME OVER!";
    let x = (WIDTH as i32 - text_width(text, scale)) / 2;
    draw_text(frame, text, x, (HEIGHT / 2 - 80) as i32, scale, (255, 0, 0, alpha));

    let prompt = "PRESS R TO RESTART";
    let scale = 4;
    let x = (WIDTH as i32 - text_width(prompt, scale)) / 2;
    draw_text(frame, prompt, x, (HEIGHT / 2 + 40) as i32, scale, (220, 220, 220, 230));
}

fn cell_origin(cell: Pos) -> (i32, i32) {
    (
        GRID_OFFSET as i32 + cell.x * CELL_SIZE as i32,
        GRID_OFFSET as i32 + cell.y * CELL_SIZE as i32,
    )
}

fn clear_rgb(frame: &mut [u8], r: u8, g: u8, b: u8) {
    for px in frame.chunks_exact_mut(4) {
        px[0] = r;
        px[1] = g;
        px[2] = b;
        px[3] = 255;
    }
}

fn blend_pixel(frame: &mut [u8], x: i32, y: i32, r: u8, g: u8, b: u8, a: u8) {
    if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
        return;
    }
    let idx = ((y as u32 * WIDTH + x as u32) * 4) as usize;
    let ar = a as u16;
    let iar = (255 - a) as u16;
    frame[idx] = (((r as u16) * ar + (frame[idx] as u16) * iar) / 255) as u8;
    frame[idx + 1] = (((g as u16) * ar + (frame[idx + 1] as u16) * iar) / 255) as u8;
    frame[idx + 2] = (((b as u16) * ar + (frame[idx + 2] as u16) * iar) / 255) as u8;
    frame[idx + 3] = 255;
}

fn fill_rect(frame: &mut [u8], x0: i32, y0: i32, x1: i32, y1: i32, r: u8, g: u8, b: u8) {
    for y in y0.max(0)..y1.min(HEIGHT as i32) {
        for x in x0.max(0)..x1.min(WIDTH as i32) {
            blend_pixel(frame, x, y, r, g, b, 255);
        }
    }
}

fn fill_cell(frame: &mut [u8], cell: Pos, r: u8, g: u8, b: u8) {
    let (ox, oy) = cell_origin(cell);
    fill_rect(frame, ox, oy, ox + CELL_SIZE as i32, oy + CELL_SIZE as i32, r, g, b);
}

// 5x7 bitmap font covering the characters the HUD and overlay print.
fn glyph_5x7(ch: char) -> Option<[u8; 7]> {
    Some(match ch {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => return None,
    })
}

fn draw_char(frame: &mut [u8], ch: char, x: i32, y: i32, scale: i32, col: (u8, u8, u8, u8)) -> i32 {
    if let Some(rows) = glyph_5x7(ch) {
        for (ry, row) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (row >> (4 - rx)) & 1 == 1 {
                    for sy in 0..scale {
                        for sx in 0..scale {
                            blend_pixel(
                                frame,
                                x + rx * scale + sx,
                                y + ry as i32 * scale + sy,
                                col.0,
                                col.1,
                                col.2,
                                col.3,
                            );
                        }
                    }
                }
            }
        }
    }
    6 * scale
}

fn draw_text(frame: &mut [u8], text: &str, x: i32, y: i32, scale: i32, col: (u8, u8, u8, u8)) {
    let mut cx = x;
    for ch in text.chars() {
        cx += draw_char(frame, ch, cx, y, scale, col);
    }
}

fn text_width(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * 6 * scale
}
