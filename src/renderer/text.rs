//! Blocky bitmap text
//!
//! A 3x5 pixel font drawn as one quad per lit pixel. Lowercase letters are
//! drawn as uppercase; anything unknown becomes `?`.

use super::shapes::rect;
use super::vertex::Vertex;

/// Glyph cell width in font pixels
pub const GLYPH_WIDTH: usize = 3;
/// Glyph cell height in font pixels
pub const GLYPH_HEIGHT: usize = 5;
/// Horizontal advance per character, including the one-pixel gap
pub const GLYPH_ADVANCE: usize = GLYPH_WIDTH + 1;

/// Rows of a glyph, top to bottom; bit 2 is the leftmost column
#[rustfmt::skip]
fn glyph(ch: char) -> [u8; GLYPH_HEIGHT] {
    match ch.to_ascii_uppercase() {
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b011, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '(' => [0b010, 0b100, 0b100, 0b100, 0b010],
        ')' => [0b010, 0b001, 0b001, 0b001, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        ' ' => [0b000; GLYPH_HEIGHT],
        _ => [0b111, 0b001, 0b010, 0b000, 0b010],
    }
}

/// Width in canvas pixels of `text` drawn at `scale`
pub fn text_width(text: &str, scale: f32) -> f32 {
    let chars = text.chars().count();
    if chars == 0 {
        return 0.0;
    }
    (chars * GLYPH_ADVANCE - 1) as f32 * scale
}

/// Height in canvas pixels of a line drawn at `scale`
pub fn text_height(scale: f32) -> f32 {
    GLYPH_HEIGHT as f32 * scale
}

/// Generate vertices for `text` with its top-left corner at (x, y)
pub fn text(x: f32, y: f32, text: &str, scale: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let mut cursor_x = x;

    for ch in text.chars() {
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                    vertices.extend(rect(
                        cursor_x + col as f32 * scale,
                        y + row as f32 * scale,
                        scale,
                        scale,
                        color,
                    ));
                }
            }
        }
        cursor_x += GLYPH_ADVANCE as f32 * scale;
    }

    vertices
}

/// Generate vertices for `text` centred horizontally on `center_x`
pub fn text_centered(center_x: f32, y: f32, s: &str, scale: f32, color: [f32; 4]) -> Vec<Vertex> {
    text(center_x - text_width(s, scale) / 2.0, y, s, scale, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 2.0), 0.0);
        assert_eq!(text_width("A", 2.0), 6.0);
        assert_eq!(text_width("AB", 1.0), 7.0);
    }

    #[test]
    fn test_text_height_matches_glyph_rows() {
        let verts = text(0.0, 0.0, "E", 2.0, BLACK);
        let max_y = verts.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(max_y, text_height(2.0));
    }

    #[test]
    fn test_space_draws_nothing() {
        assert!(text(0.0, 0.0, "   ", 3.0, BLACK).is_empty());
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(
            text(0.0, 0.0, "score", 2.0, BLACK),
            text(0.0, 0.0, "SCORE", 2.0, BLACK)
        );
    }

    #[test]
    fn test_glyph_pixel_count() {
        // '1' lights 1 + 2 + 1 + 1 + 3 pixels, six vertices each
        assert_eq!(text(0.0, 0.0, "1", 1.0, BLACK).len(), 8 * 6);
    }

    #[test]
    fn test_centered_text_straddles_center() {
        let verts = text_centered(400.0, 0.0, "GAME OVER", 4.0, BLACK);
        let min_x = verts.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_x = verts.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert!(min_x < 400.0 && max_x > 400.0);
        assert!(((400.0 - min_x) - (max_x - 400.0)).abs() < 4.0 + 1e-3);
    }
}
