//! Built-in 5x7 bitmap font
//!
//! Used whenever no TTF is available. Glyphs are uppercase only; lowercase
//! letters render as their uppercase form. A glyph cell is one unit of
//! `size / 10`, so the cap height is 0.7 of the font size.

use glam::Vec2;

use crate::sim::layout::Rect;

const COLS: usize = 5;
const ROWS: usize = 7;
/// Advance in units (5 glyph columns + 1 spacing column)
const ADVANCE: f32 = 6.0;
/// Extra cell width for the bold weight, in units
const BOLD_SPREAD: f32 = 0.4;

type Glyph = [u8; ROWS];

const BOX: Glyph = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];
const SPACE: Glyph = [0; ROWS];

const LETTERS: [Glyph; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

const DIGITS: [Glyph; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

fn glyph(c: char) -> &'static Glyph {
    match c.to_ascii_uppercase() {
        ' ' => &SPACE,
        c @ 'A'..='Z' => &LETTERS[c as usize - 'A' as usize],
        c @ '0'..='9' => &DIGITS[c as usize - '0' as usize],
        ':' => &[0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '.' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => &[0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '!' => &[0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => &[0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '-' => &[0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '\'' => &[0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '/' => &[0x01, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10],
        '(' => &[0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => &[0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        _ => &BOX,
    }
}

#[inline]
fn unit(size: f32) -> f32 {
    size / 10.0
}

/// Advance width of `text` at `size`; the trailing spacing column is not counted
pub fn measure(text: &str, size: f32) -> f32 {
    let n = text.chars().count();
    if n == 0 {
        return 0.0;
    }
    (n as f32 * ADVANCE - 1.0) * unit(size)
}

/// Lit cells of `text` with the baseline's left end at `origin`
pub fn cells(text: &str, origin: Vec2, size: f32, bold: bool) -> Vec<Rect> {
    let u = unit(size);
    let cell_w = if bold { u * (1.0 + BOLD_SPREAD) } else { u };
    let top = origin.y - ROWS as f32 * u;

    let mut out = Vec::new();
    for (i, c) in text.chars().enumerate() {
        let left = origin.x + i as f32 * ADVANCE * u;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..COLS {
                if bits & (1 << (COLS - 1 - col)) != 0 {
                    out.push(Rect::new(
                        left + col as f32 * u,
                        top + row as f32 * u,
                        cell_w,
                        u,
                    ));
                }
            }
        }
    }
    out
}
