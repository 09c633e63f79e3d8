use itertools::Itertools;
use log::warn;

use super::Params;
use crate::{
    color::{rgb_hex, WHITE},
    image::{Def, Elem, Image, Stop, Style, TextAnchor, TextStyle},
    utils::normalize_polylines,
    V2,
};

const BACKGROUND_STARS: usize = 40;
/// Fraction of the canvas which the constellation's bounding box is scaled to fill
const FIGURE_FILL: f32 = 0.6;

/// A constellation picked from the catalogue, drawn over a field of faint seed-placed stars and
/// labelled with its name.  With an empty catalogue, only the star field is drawn.
pub fn constellation(params: &Params) -> Image {
    let seed = &params.seed;
    let mut image = Image::square(100.0);
    let sky = image.add_def(Def::RadialGradient {
        id: params.def_id("night"),
        centre: V2::new(0.5, 0.5),
        radius: 0.8,
        stops: vec![
            Stop::new(0.0, rgb_hex(0x1e1b4b)),
            Stop::new(1.0, rgb_hex(0x020617)),
        ],
    });
    image.add_background(sky);

    for i in 0..BACKGROUND_STARS {
        let x = (seed.byte(i) as usize * (i + 3)) % 100;
        let y = (seed.byte(i + 2) as usize * (i + 5)) % 100;
        let opacity = (seed.modulo(i, 5) + 1) as f32 / 10.0;
        image.add(Elem::circle(
            x as f32,
            y as f32,
            0.4,
            Style::fill(WHITE).with_opacity(opacity),
        ));
    }

    let figure = match params.catalog.pick(seed) {
        Some(c) => c,
        None => {
            warn!("star catalogue is empty, drawing background stars only");
            return image;
        }
    };
    for line in normalize_polylines(&figure.lines, 100.0, FIGURE_FILL) {
        for (p1, p2) in line.iter().tuple_windows() {
            image.add(Elem::Line(
                *p1,
                *p2,
                Style::stroke(rgb_hex(0x93c5fd), 0.5).with_opacity(0.8),
            ));
            image.add(star(*p1));
            image.add(Elem::Circle {
                centre: *p1,
                radius: 3.0,
                style: Style::fill(rgb_hex(0x38bdf8)).with_opacity(0.2),
            });
        }
        if let Some(last) = line.last() {
            image.add(star(*last));
        }
    }

    image.add(Elem::text(
        V2::new(50.0, 90.0),
        figure.name.to_uppercase(),
        TextStyle {
            font_size: 6.0,
            font_family: "Times New Roman",
            bold: true,
            anchor: TextAnchor::Middle,
            centred_baseline: false,
            letter_spacing: Some(0.5),
            line_height: 6.0,
        },
        Style::fill(rgb_hex(0x7dd3fc)),
    ));
    image
}

fn star(centre: V2) -> Elem {
    Elem::Circle {
        centre,
        radius: 1.5,
        style: Style::fill(WHITE),
    }
}
