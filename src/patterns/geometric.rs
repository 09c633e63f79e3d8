//! Abstract compositions of simple geometric shapes.

use angle::Deg;
use itertools::Itertools;
use rgb::RGB8;

use super::{inset, Params};
use crate::{
    color::rgb_hex,
    image::{Elem, Image, PathCmd, Style},
    V2,
};

/* BAUHAUS */

const BAUHAUS_PALETTE: [RGB8; 8] = [
    rgb_hex(0xffb900),
    rgb_hex(0xe74856),
    rgb_hex(0x0078d7),
    rgb_hex(0x0099bc),
    rgb_hex(0x7a7574),
    rgb_hex(0xff4343),
    rgb_hex(0x00cc6a),
    rgb_hex(0x8e8cd8),
];

/// Three to five translucent circles, squares and triangles over a palette background.  Each
/// shape takes its colour from the palette entry after the previous one.
pub fn bauhaus(params: &Params) -> Image {
    let seed = &params.seed;
    let bg_idx = seed.modulo(0, BAUHAUS_PALETTE.len());
    let num_shapes = seed.span(1, 3, 3) as usize;

    let shapes = (0..num_shapes)
        .map(|i| {
            let h1 = seed.byte(i + 2) as i32;
            let h2 = seed.byte(i + 5) as i32;
            let h3 = seed.byte(i + 8) as i32;
            let color = BAUHAUS_PALETTE[(bg_idx + i + 1) % BAUHAUS_PALETTE.len()];

            let (x, y) = (h2 % 100, h3 % 100);
            let width = 20 + h1 % 60;
            let half = width / 2; // Integer division, so shapes stay on whole units
            let style = Style::fill(color).with_opacity(0.5 + (h2 % 5) as f32 / 10.0);

            match h1 % 3 {
                0 => Elem::circle(x as f32, y as f32, half as f32, style),
                1 => Elem::Rect {
                    min: V2::new((x - half) as f32, (y - half) as f32),
                    size: V2::new(width as f32, width as f32),
                    rotation: Some(Deg(if h1 % 2 == 0 { 45.0 } else { 0.0 })),
                    style,
                },
                _ => Elem::Polygon(
                    vec![
                        V2::new(x as f32, (y - half) as f32),
                        V2::new((x - half) as f32, (y + half) as f32),
                        V2::new((x + half) as f32, (y + half) as f32),
                    ],
                    style,
                ),
            }
        })
        .collect_vec();

    let mut image = Image::square(100.0);
    image.add_background(BAUHAUS_PALETTE[bg_idx]);
    image.add(Elem::Group(inset(), shapes));
    image
}

/* BEAM */

const BEAM_NODES: usize = 6;
/// Nodes further apart than `sqrt(BEAM_REACH_SQ)` are never linked
const BEAM_REACH_SQ: i32 = 60 * 60;

/// Six nodes, with a beam between every pair closer than a fixed reach.  Beams fade linearly with
/// squared distance.
pub fn beam(params: &Params) -> Image {
    let seed = &params.seed;
    let nodes = (0..BEAM_NODES)
        .map(|i| (seed.span(i, 10, 80), seed.span(i + BEAM_NODES, 10, 80)))
        .collect_vec();

    let mut elems = nodes
        .iter()
        .map(|&(x, y)| Elem::circle(x as f32, y as f32, 3.0, Style::fill(params.color)))
        .collect_vec();
    for ((x1, y1), (x2, y2)) in nodes.iter().copied().tuple_combinations() {
        let dist_sq = (x1 - x2).pow(2) + (y1 - y2).pow(2);
        if dist_sq < BEAM_REACH_SQ {
            let opacity = 1.0 - dist_sq as f32 / BEAM_REACH_SQ as f32;
            elems.push(Elem::line(
                x1 as f32,
                y1 as f32,
                x2 as f32,
                y2 as f32,
                Style::stroke(params.color, 1.0).with_opacity(opacity),
            ));
        }
    }

    let mut image = Image::square(100.0);
    image.add_background(rgb_hex(0x0a0a0a));
    image.add(Elem::Group(inset(), elems));
    image
}

/* CIRCUIT */

const BOARD_COLORS: [RGB8; 4] = [
    rgb_hex(0x004d40),
    rgb_hex(0x1a237e),
    rgb_hex(0x212121),
    rgb_hex(0x1b5e20),
];
const TRACE_COLOR: RGB8 = rgb_hex(0xffd700);

/// Five right-angled gold traces, each ending in a pair of pads
pub fn circuit(params: &Params) -> Image {
    let seed = &params.seed;
    let mut elems = Vec::new();
    for i in 0..5 {
        let start = V2::new(seed.span(i, 10, 80) as f32, seed.span(i + 5, 10, 80) as f32);
        let end = V2::new(seed.span(i + 2, 10, 80) as f32, seed.span(i + 7, 10, 80) as f32);
        let corner = V2::new(end.x, start.y);
        elems.push(Elem::Path(
            vec![
                PathCmd::MoveTo(start),
                PathCmd::LineTo(corner),
                PathCmd::LineTo(end),
            ],
            Style::stroke(TRACE_COLOR, 2.0).with_opacity(0.8),
        ));
        for pad in [start, end] {
            elems.push(Elem::Circle {
                centre: pad,
                radius: 3.0,
                style: Style::fill(TRACE_COLOR),
            });
        }
    }

    let mut image = Image::square(100.0);
    image.add_background(*seed.pick(0, &BOARD_COLORS));
    image.add(Elem::Group(inset(), elems));
    image
}
