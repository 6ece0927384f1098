use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use anyhow::Result;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::models::Color;

/// Badge canvas is square
pub const BADGE_SIZE: u32 = 128;

const PADDING: i32 = 4;
const CORNER_RADIUS: i32 = 16;
const BASE_TEXT_SCALE: f32 = 64.0;
const BASELINE_NUDGE: i32 = 4;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Bold sans-serif fonts tried in order before falling back to the
/// built-in bitmap font
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
];

enum BadgeFont {
    TrueType(FontVec),
    Bitmap,
}

fn load_font() -> BadgeFont {
    for path in FONT_CANDIDATES {
        if let Ok(bytes) = std::fs::read(path) {
            if let Ok(font) = FontVec::try_from_vec(bytes) {
                return BadgeFont::TrueType(font);
            }
        }
    }
    BadgeFont::Bitmap
}

/// Renders rounded-rectangle initials badges and saves them as PNG
pub struct BadgeRenderer {
    font: BadgeFont,
}

impl BadgeRenderer {
    /// Resolve the text font once; badge geometry is fixed
    pub fn new() -> Self {
        Self { font: load_font() }
    }

    /// Rasterize a badge: transparent canvas, filled rounded rectangle,
    /// white initials centered with a small upward nudge
    pub fn render(&self, initials: &str, color: Color) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(BADGE_SIZE, BADGE_SIZE, Rgba([255, 255, 255, 0]));
        draw_rounded_rect(&mut img, color.to_rgba());
        match &self.font {
            BadgeFont::TrueType(font) => draw_truetype_initials(&mut img, font, initials),
            BadgeFont::Bitmap => draw_bitmap_initials(&mut img, initials),
        }
        img
    }

    /// Render a badge and persist it at `dest`
    pub fn materialize(&self, initials: &str, color: Color, dest: &Path) -> Result<()> {
        let img = self.render(initials, color);
        img.save(dest)
            .map_err(|e| anyhow::anyhow!("Failed to save {:?}: {}", dest, e))?;
        Ok(())
    }
}

impl Default for BadgeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rounded rectangle as the union of two cross rects and four corner circles
fn draw_rounded_rect(img: &mut RgbaImage, fill: Rgba<u8>) {
    let size = BADGE_SIZE as i32;
    let p = PADDING;
    let r = CORNER_RADIUS;
    let inner = (size - 2 * p - 2 * r) as u32;
    let full = (size - 2 * p) as u32;

    // Vertical bar, full height
    draw_filled_rect_mut(img, Rect::at(p + r, p).of_size(inner, full), fill);
    // Side bars between the corner arcs
    draw_filled_rect_mut(img, Rect::at(p, p + r).of_size(r as u32, inner), fill);
    draw_filled_rect_mut(
        img,
        Rect::at(size - p - r, p + r).of_size(r as u32, inner),
        fill,
    );

    let near = p + r;
    let far = size - p - r - 1;
    for center in [(near, near), (far, near), (near, far), (far, far)] {
        draw_filled_circle_mut(img, center, r, fill);
    }
}

fn draw_truetype_initials(img: &mut RgbaImage, font: &FontVec, initials: &str) {
    let max_width = (BADGE_SIZE as i32 - 2 * (PADDING + CORNER_RADIUS / 2)) as u32;
    let mut scale = PxScale::from(BASE_TEXT_SCALE);
    let (w, _) = text_size(scale, font, initials);
    if w > max_width {
        scale = PxScale::from(BASE_TEXT_SCALE * max_width as f32 / w as f32);
    }
    let (w, h) = text_size(scale, font, initials);
    let x = ((BADGE_SIZE as i32 - w as i32) / 2).max(PADDING);
    let y = (BADGE_SIZE as i32 - h as i32) / 2 - BASELINE_NUDGE;
    draw_text_mut(img, WHITE, x, y, scale, font, initials);
}

// 5x7 uppercase glyphs, one byte per row, bit 4 is the leftmost column
const GLYPH_ROWS: u32 = 7;
const GLYPH_COLS: u32 = 5;
const GLYPH_PIXEL: u32 = 8;
const GLYPH_GAP: u32 = 8;

#[rustfmt::skip]
const GLYPHS: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E], // G
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

fn bitmap_text_width(text: &str) -> u32 {
    let glyphs = text.chars().filter(char::is_ascii_uppercase).count() as u32;
    if glyphs == 0 {
        return 0;
    }
    glyphs * GLYPH_COLS * GLYPH_PIXEL + (glyphs - 1) * GLYPH_GAP
}

/// Fallback rendering with the built-in bitmap font. Characters outside
/// A-Z are skipped (initials are uppercase letters by construction).
fn draw_bitmap_initials(img: &mut RgbaImage, initials: &str) {
    let width = bitmap_text_width(initials);
    let height = GLYPH_ROWS * GLYPH_PIXEL;
    let mut x = (BADGE_SIZE.saturating_sub(width) / 2) as i32;
    let y = (BADGE_SIZE as i32 - height as i32) / 2 - BASELINE_NUDGE;

    for c in initials.chars() {
        if !c.is_ascii_uppercase() {
            continue;
        }
        let glyph = &GLYPHS[(c as u8 - b'A') as usize];
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if (*bits as u32 >> (GLYPH_COLS - 1 - col)) & 1 == 0 {
                    continue;
                }
                let px = x + (col * GLYPH_PIXEL) as i32;
                let py = y + (row as u32 * GLYPH_PIXEL) as i32;
                fill_block(img, px, py, GLYPH_PIXEL, WHITE);
            }
        }
        x += (GLYPH_COLS * GLYPH_PIXEL + GLYPH_GAP) as i32;
    }
}

fn fill_block(img: &mut RgbaImage, x: i32, y: i32, side: u32, color: Rgba<u8>) {
    for dy in 0..side as i32 {
        for dx in 0..side as i32 {
            let (px, py) = (x + dx, y + dy);
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
