//! Generators built around text: initials, bitmap lettering and ASCII art.

use super::{
    font::{self, GLYPH_WIDTH},
    initials_of, inset, Params,
};
use crate::{
    color::{rgb_hex, BLACK, WHITE},
    image::{Def, Elem, Image, Style, TextAnchor, TextStyle, Transform},
    V2,
};

/// The plain initials avatar: the name's initials centred on a disc of the primary colour
pub fn avatar(params: &Params) -> Image {
    let mut image = Image::square(100.0);
    image.add(Elem::Group(
        inset(),
        vec![
            Elem::circle(50.0, 50.0, 50.0, Style::fill(params.color)),
            Elem::text(
                V2::new(50.0, 55.0),
                initials_of(params.name),
                TextStyle::centred(40.0, "Arial, sans-serif"),
                Style::fill(WHITE),
            ),
        ],
    ));
    image
}

/// Initials split into offset cyan and red copies, overlaid with translucent glitch bars
pub fn glitch(params: &Params) -> Image {
    let seed = &params.seed;
    let initials = initials_of(params.name);
    let text_style = TextStyle::centred(50.0, "Arial Black, sans-serif").bold();

    let mut image = Image::square(100.0);
    image.add_background(rgb_hex(0x0f0f0f));

    let split = |x: f32, style: Style| {
        Elem::text(V2::new(x, 55.0), initials.clone(), text_style.clone(), style)
    };
    let mut elems = vec![
        split(48.0, Style::fill(rgb_hex(0x00ffff)).with_opacity(0.8)),
        split(52.0, Style::fill(rgb_hex(0xff0000)).with_opacity(0.8)),
        split(50.0, Style::fill(WHITE)),
    ];
    for i in 0..5 {
        let y = seed.modulo(i, 100) as f32;
        let height = seed.span(i + 5, 1, 5) as f32;
        let width = seed.span(i + 10, 20, 50) as f32;
        let x = seed.modulo(i + 2, 80) as f32;
        elems.push(Elem::rect(x, y, width, height, Style::fill(WHITE).with_opacity(0.1)));
    }
    image.add(Elem::Group(inset(), elems));
    image
}

/// The characters drawn by the bitmap-font variants: at most two initials
fn lettering(name: &str) -> Vec<char> {
    initials_of(name).chars().take(2).collect()
}

/* DOT MATRIX */

const DOT_RADIUS: f32 = 4.0;
const DOT_PITCH: f32 = 12.0;
const DOT_LETTER_GAP: f32 = 10.0;

/// Initials lit up on a 5x7 LED matrix.  Every dot of every glyph is drawn, with unlit dots
/// dimmed.
pub fn dot_matrix(params: &Params) -> Image {
    let mut image = Image::square(170.0);
    image.add_background(rgb_hex(0x111111));

    let mut dots = Vec::new();
    let mut left = 20.0;
    for c in lettering(params.name) {
        for (row, &bits) in font::dot_glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                let cx = left + col as f32 * DOT_PITCH;
                let cy = 35.0 + row as f32 * DOT_PITCH;
                if font::is_lit(bits, col) {
                    // Halo underneath the lit dot
                    let halo = Style::fill(params.color).with_opacity(0.4);
                    dots.push(Elem::circle(cx, cy, DOT_RADIUS + 2.0, halo));
                    dots.push(Elem::circle(cx, cy, DOT_RADIUS, Style::fill(params.color)));
                } else {
                    let unlit = Style::fill(rgb_hex(0x333333)).with_opacity(0.3);
                    dots.push(Elem::circle(cx, cy, DOT_RADIUS, unlit));
                }
            }
        }
        left += GLYPH_WIDTH as f32 * DOT_PITCH + DOT_LETTER_GAP;
    }
    image.add(Elem::Group(Transform::new(8.5, 8.5, 0.9), dots));
    image
}

/* TERMINAL */

const BLOCK_SIZE: f32 = 20.0;
const BLOCK_PITCH: f32 = BLOCK_SIZE + 2.0;
const BLOCK_LETTER_GAP: f32 = 20.0;
const SHADOW_OFFSET: f32 = 4.0;

/// Block-letter initials with drop shadows, followed by a cursor, behind CRT scanlines
pub fn terminal(params: &Params) -> Image {
    let mut image = Image::square(350.0);
    image.add_background(rgb_hex(0x1a1b26));
    let scanlines = image.add_def(Def::Stripes {
        id: params.def_id("scanlines"),
        tile: V2::new(10.0, 4.0),
        band: 2.0,
        color: BLACK,
        opacity: 0.3,
    });
    image.add_background(scanlines);

    let top = 60.0;
    let mut blocks = Vec::new();
    let mut left = 40.0;
    for c in lettering(params.name) {
        for (row, &bits) in font::block_glyph(c).iter().enumerate() {
            for col in (0..GLYPH_WIDTH).filter(|&col| font::is_lit(bits, col)) {
                let x = left + col as f32 * BLOCK_PITCH;
                let y = top + row as f32 * BLOCK_PITCH;
                blocks.push(block(
                    x + SHADOW_OFFSET,
                    y + SHADOW_OFFSET,
                    Style::fill(BLACK).with_opacity(0.5),
                ));
                blocks.push(block(x, y, Style::fill(params.color)));
            }
        }
        left += GLYPH_WIDTH as f32 * BLOCK_PITCH + BLOCK_LETTER_GAP;
    }
    // Cursor, sitting on the bottom row after the last letter
    blocks.push(block(
        left,
        top + 4.0 * BLOCK_PITCH,
        Style::fill(params.color).with_opacity(0.7),
    ));
    image.add(Elem::Group(Transform::new(17.5, 17.5, 0.9), blocks));
    image
}

fn block(x: f32, y: f32, style: Style) -> Elem {
    Elem::rect(x, y, BLOCK_SIZE, BLOCK_SIZE, style)
}

/* ROBOT */

const HEADS: [&str; 12] = [
    " /_\\ ", " [~] ", " (o) ", " <_> ", " {^} ", " [..] ", " .__. ", " /MM\\ ", " (**) ",
    " d[ ]b ", " @__@ ", " <oo> ",
];
const EYES: [&str; 12] = [
    "|o_o|", "|-.-|", "|0_0|", "|X_X|", "|>_<|", "|@_@|", "|$_$|", "|~_~|", "|O_O|", "|=_|=",
    "|9_6|", "|+.+|",
];
const BODIES: [&str; 12] = [
    "/[_]\\", " |-| ", " [=] ", " /#\\ ", " (•) ", " |%| ", " <_> ", " /|\\ ", "-[_]-", " (|) ",
    "=[_]=", " /B\\ ",
];
const LEGS: [&str; 12] = [
    " d b ", " / \\ ", " ||| ", " _| |_", " (@) ", " /_\\ ", " | | ", " <_> ", " _A_ ", " ( ) ",
    " J L ", " V V ",
];

/// A four-part ASCII-art robot (head, eyes, body, legs), each part picked by one seed byte
pub fn robot(params: &Params) -> Image {
    let seed = &params.seed;
    let lines = [
        seed.pick(0, &HEADS),
        seed.pick(1, &EYES),
        seed.pick(2, &BODIES),
        seed.pick(3, &LEGS),
    ]
    .iter()
    // Non-breaking spaces, so renderers don't collapse the padding
    .map(|part| part.replace(' ', "\u{a0}"))
    .collect();

    let mut image = Image::square(200.0);
    image.add_background(params.color);
    image.add(Elem::Group(
        Transform::new(10.0, 10.0, 0.9),
        vec![Elem::Text {
            position: V2::new(100.0, 60.0),
            lines,
            text_style: robot_text_style(),
            style: Style::fill(WHITE),
        }],
    ));
    image
}

fn robot_text_style() -> TextStyle {
    TextStyle {
        font_size: 28.0,
        font_family: "monospace",
        bold: true,
        anchor: TextAnchor::Middle,
        centred_baseline: false,
        letter_spacing: Some(2.0),
        line_height: 24.0,
    }
}

#[cfg(test)]
mod tests {
    use rgb::RGB8;

    use super::*;
    use crate::{catalog::Catalog, image::Paint};

    fn params<'a>(name: &'a str, catalog: &'a Catalog) -> Params<'a> {
        Params::new(name, None, catalog)
    }

    fn fill_of(elem: &Elem) -> Option<RGB8> {
        match elem.style()?.fill.as_ref()? {
            Paint::Solid(c) => Some(*c),
            Paint::Ref(_) => None,
        }
    }

    fn texts(image: &Image) -> Vec<&[String]> {
        image
            .primitives()
            .into_iter()
            .filter_map(|e| match e {
                Elem::Text { lines, .. } => Some(lines.as_slice()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn avatar_is_disc_and_initials() {
        let catalog = Catalog::default();
        let p = params("Alex Morgan", &catalog);
        let image = avatar(&p);
        let prims = image.primitives();
        assert_eq!(prims.len(), 2);
        assert!(matches!(prims[0], Elem::Circle { .. }));
        assert_eq!(fill_of(prims[0]), Some(p.color));
        assert_eq!(texts(&image), vec![&["AM".to_owned()][..]]);
    }

    #[test]
    fn glitch_has_three_copies_and_five_bars() {
        let catalog = Catalog::default();
        let image = glitch(&params("Madonna", &catalog));
        assert_eq!(texts(&image).len(), 3);
        assert!(texts(&image).iter().all(|t| t.len() == 1 && t[0] == "M"));
        // Background plus five bars
        let rects = image
            .primitives()
            .into_iter()
            .filter(|e| matches!(e, Elem::Rect { .. }))
            .count();
        assert_eq!(rects, 6);
    }

    #[test]
    fn dot_matrix_draws_every_dot() {
        let catalog = Catalog::default();
        let p = params("Alex Morgan", &catalog);
        let image = dot_matrix(&p);
        let lit = |c: char| {
            font::dot_glyph(c)
                .iter()
                .map(|row| row.count_ones() as usize)
                .sum::<usize>()
        };
        let (lit_a, lit_m) = (lit('A'), lit('M'));
        // Each lit dot is a halo plus a dot; each unlit dot is one circle
        let expected = 2 * (lit_a + lit_m) + (2 * 35 - lit_a - lit_m);
        let circles = image
            .primitives()
            .into_iter()
            .filter(|e| matches!(e, Elem::Circle { .. }))
            .count();
        assert_eq!(circles, expected);
    }

    #[test]
    fn dot_matrix_falls_back_for_unknown_glyphs() {
        let catalog = Catalog::default();
        // '7' and '?' both use the fallback glyph, so draw identically
        let digits = dot_matrix(&Params::new("7", Some(WHITE), &catalog));
        let blank = dot_matrix(&Params::new("", Some(WHITE), &catalog));
        assert_eq!(digits.primitives().len(), blank.primitives().len());
    }

    #[test]
    fn terminal_has_shadows_and_cursor() {
        let catalog = Catalog::default();
        let p = params("Lu", &catalog);
        let image = terminal(&p);
        let lit_l: u32 = font::block_glyph('L').iter().map(|r| r.count_ones()).sum();
        // Background, scanlines, then a shadow and a block per lit cell, then the cursor
        assert_eq!(image.primitives().len(), 2 + 2 * lit_l as usize + 1);
        assert_eq!(image.defs().len(), 1);
        let cursor = *image.primitives().last().unwrap();
        match cursor {
            Elem::Rect { min, style, .. } => {
                assert_eq!((min.x, min.y), (40.0 + 5.0 * 22.0 + 20.0, 60.0 + 4.0 * 22.0));
                assert_eq!(style.opacity, Some(0.7));
            }
            other => panic!("expected cursor rect, got {:?}", other),
        }
    }

    #[test]
    fn robot_has_four_padded_lines() {
        let catalog = Catalog::default();
        let p = params("Alex Morgan", &catalog);
        let image = robot(&p);
        let lines = texts(&image)[0];
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| !l.contains(' ')));
        // Byte 0 of "Alex Morgan" is 0xe5 = 229, and 229 % 12 = 1
        assert_eq!(lines[0], HEADS[1].replace(' ', "\u{a0}"));
        assert_eq!(fill_of(image.primitives()[0]), Some(p.color));
    }
}
