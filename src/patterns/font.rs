//! Tiny bitmap fonts for the grid-based variants.  Each glyph row is a 5-bit mask, with the most
//! significant bit as the leftmost column.  Only `A`-`Z` have glyphs; anything else is drawn as
//! the fallback `?` glyph.

/// Number of columns in every glyph
pub const GLYPH_WIDTH: usize = 5;

/// A 5x7 glyph, as used by LED dot-matrix displays
pub type DotGlyph = [u8; 7];
/// A chunky 5x5 glyph for block lettering
pub type BlockGlyph = [u8; 5];

#[rustfmt::skip]
const DOT_FONT: [DotGlyph; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11111], // B
    [0b01111, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b01111], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01111, 0b10000, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00001, 0b00001, 0b00001, 0b00001, 0b10001, 0b01110], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

#[rustfmt::skip]
const DOT_FALLBACK: DotGlyph = [0b01110, 0b10001, 0b00010, 0b00100, 0b00100, 0b00000, 0b00100];

#[rustfmt::skip]
const BLOCK_FONT: [BlockGlyph; 26] = [
    [0b01110, 0b10001, 0b11111, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b11110, 0b10001, 0b11110], // B
    [0b01111, 0b10000, 0b10000, 0b10000, 0b01111], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b11110, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b11110, 0b10000, 0b10000], // F
    [0b01111, 0b10000, 0b10011, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b11111, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00001, 0b00001, 0b10001, 0b01110], // J
    [0b10001, 0b10010, 0b11000, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10001, 0b10001], // M
    [0b10001, 0b11001, 0b10101, 0b10011, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b11110, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b11110, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b01110, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10101, 0b11011, 0b10001], // W
    [0b10001, 0b01010, 0b00100, 0b01010, 0b10001], // X
    [0b10001, 0b01010, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00010, 0b00100, 0b01000, 0b11111], // Z
];

#[rustfmt::skip]
const BLOCK_FALLBACK: BlockGlyph = [0b01110, 0b10001, 0b00100, 0b00000, 0b00100];

/// Index of an uppercase ASCII letter in the font tables
fn letter_idx(c: char) -> Option<usize> {
    c.is_ascii_uppercase().then(|| (c as u8 - b'A') as usize)
}

pub fn dot_glyph(c: char) -> &'static DotGlyph {
    letter_idx(c).map_or(&DOT_FALLBACK, |i| &DOT_FONT[i])
}

pub fn block_glyph(c: char) -> &'static BlockGlyph {
    letter_idx(c).map_or(&BLOCK_FALLBACK, |i| &BLOCK_FONT[i])
}

/// Is the pixel at column `col` of a glyph row lit?
pub fn is_lit(row: u8, col: usize) -> bool {
    (row >> (GLYPH_WIDTH - 1 - col)) & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<const N: usize>(glyph: &[u8; N]) -> Vec<String> {
        glyph
            .iter()
            .map(|&row| {
                (0..GLYPH_WIDTH)
                    .map(|col| if is_lit(row, col) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn letters_have_glyphs() {
        assert_eq!(
            render(dot_glyph('A')),
            [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"]
        );
        assert_eq!(
            render(block_glyph('L')),
            ["#....", "#....", "#....", "#....", "#####"]
        );
    }

    #[test]
    fn unsupported_chars_fall_back() {
        for c in ['a', '7', 'É', ' ', '?'] {
            assert_eq!(dot_glyph(c), &DOT_FALLBACK);
            assert_eq!(block_glyph(c), &BLOCK_FALLBACK);
        }
        assert_ne!(dot_glyph('Z'), &DOT_FALLBACK);
    }
}
