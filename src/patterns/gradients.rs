//! Generators whose main feature is a multi-colour gradient.  The extra colours come from
//! hashing the name with a fixed suffix, so they are decorrelated from the primary colour.

use angle::Deg;

use super::{inset, Params};
use crate::{
    color::WHITE,
    image::{Def, Elem, Image, PathCmd, Stop, Style},
    V2,
};

/// A disc filled with a three-colour diagonal gradient, rotated by a seed-derived angle
pub fn ring(params: &Params) -> Image {
    let mut image = Image::square(100.0);
    let gradient = image.add_def(Def::LinearGradient {
        id: params.def_id("grad"),
        from: V2::new(0.0, 0.0),
        to: V2::new(1.0, 1.0),
        rotation: Some(Deg(params.seed.byte(0) as f32)),
        stops: vec![
            Stop::new(0.0, params.color),
            Stop::new(0.5, params.extra_color("2")),
            Stop::new(1.0, params.extra_color("3")),
        ],
    });
    image.add(Elem::Group(
        inset(),
        vec![Elem::circle(50.0, 50.0, 50.0, Style::fill(gradient))],
    ));
    image
}

/// Horizontal step between the points of a vein
const VEIN_STEP: usize = 5;

/// A two-tone gradient square, with up to four soft sine-wave veins running across it
pub fn marble(params: &Params) -> Image {
    let seed = &params.seed;
    let mut image = Image::square(100.0);
    let gradient = image.add_def(Def::LinearGradient {
        id: params.def_id("marble"),
        from: V2::new(0.0, 0.0),
        to: V2::new(1.0, 1.0),
        rotation: None,
        stops: vec![
            Stop::new(0.0, params.color),
            Stop::new(1.0, params.extra_color("x")),
        ],
    });

    let mut elems = vec![Elem::rect(0.0, 0.0, 100.0, 100.0, Style::fill(gradient))];
    let num_veins = seed.span(1, 1, 4) as usize;
    let freq = 0.05 + seed.unit(0) as f32 * 0.2;
    for k in 0..num_veins {
        // Veins are spread evenly down the square, each with its own amplitude and phase
        let base = 15.0 + (k as f32 + 0.5) * 70.0 / num_veins as f32;
        let amplitude = seed.span(2 + k, 3, 8) as f32;
        let phase = seed.byte(6 + k) as f32 / 40.0;
        let width = 1.0 + seed.modulo(10 + k, 3) as f32 * 0.5;

        let cmds = (0..=100)
            .step_by(VEIN_STEP)
            .map(|x| {
                let x = x as f32;
                V2::new(x, base + amplitude * (x * freq + phase).sin())
            })
            .enumerate()
            .map(|(i, p)| if i == 0 { PathCmd::MoveTo(p) } else { PathCmd::LineTo(p) })
            .collect();
        elems.push(Elem::Path(
            cmds,
            Style::stroke(WHITE, width).with_opacity(0.35).with_round_caps(),
        ));
    }
    image.add(Elem::Group(inset(), elems));
    image
}
