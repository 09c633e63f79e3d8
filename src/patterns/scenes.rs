//! Small illustrated scenes: a landscape, a face and an isometric cube.

use rgb::RGB8;

use super::{inset, Params};
use crate::{
    color::{rgb_hex, BLACK, WHITE},
    image::{Def, Elem, Image, PathCmd, Stop, Style},
    V2,
};

/* SUNSET */

/// (sky top, sky bottom) of each mood
const MOODS: [(RGB8, RGB8); 3] = [
    (rgb_hex(0x3e1c6b), rgb_hex(0xff8a5c)), // Dusk
    (rgb_hex(0x29b6f6), rgb_hex(0xfff9c4)), // Day
    (rgb_hex(0x0d1b2a), rgb_hex(0x415a77)), // Night
];

/// A sky gradient in one of three moods, a sun, and a sine-wave mountain ridge
pub fn sunset(params: &Params) -> Image {
    let seed = &params.seed;
    let mood = seed.modulo(0, MOODS.len());
    let (sky_top, sky_bottom) = MOODS[mood];
    let sun_color = if mood == 0 { rgb_hex(0xffeb3b) } else { WHITE };
    let mountain_color = if mood == 1 { rgb_hex(0x4caf50) } else { rgb_hex(0x1a1a1a) };

    let mut image = Image::square(100.0);
    let sky = image.add_def(Def::LinearGradient {
        id: params.def_id("sky"),
        from: V2::new(0.0, 0.0),
        to: V2::new(0.0, 1.0),
        rotation: None,
        stops: vec![Stop::new(0.0, sky_top), Stop::new(1.0, sky_bottom)],
    });
    image.add_background(sky);

    let sun = Elem::circle(
        seed.span(1, 20, 60) as f32,
        seed.span(2, 20, 30) as f32,
        8.0,
        Style::fill(sun_color).with_opacity(0.9),
    );
    let ridge = Elem::Path(
        ridge_outline(seed.byte(3)),
        Style::fill(mountain_color).with_opacity(0.9),
    );
    image.add(Elem::Group(inset(), vec![sun, ridge]));
    image
}

/// Closed outline of the mountains: a sine ridge around `y = 60`, with every other peak raised
fn ridge_outline(phase: u8) -> Vec<PathCmd> {
    let mut cmds = vec![
        PathCmd::MoveTo(V2::new(0.0, 100.0)),
        PathCmd::LineTo(V2::new(0.0, 60.0)),
    ];
    for x in (0..=100).step_by(5) {
        let mut y = 60.0 + (x as f64 * 0.1 + phase as f64).sin() * 15.0;
        if x % 10 == 0 {
            y -= 5.0;
        }
        cmds.push(PathCmd::LineTo(V2::new(x as f32, y as f32)));
    }
    cmds.push(PathCmd::LineTo(V2::new(100.0, 100.0)));
    cmds.push(PathCmd::Close);
    cmds
}

/* SMILE */

const SKIN_TONES: [RGB8; 9] = [
    rgb_hex(0xffdfc4),
    rgb_hex(0xf0c8c9),
    rgb_hex(0xe5b99f),
    rgb_hex(0x8d5524),
    rgb_hex(0xc68642),
    rgb_hex(0xffdcb1),
    rgb_hex(0xe0ac69),
    rgb_hex(0xb9d2b1),
    rgb_hex(0xa8c8e8),
];
const INK: RGB8 = rgb_hex(0x333333);

/// A face with one of three pairs of eyes, one of four mouths, and sometimes blushing cheeks
pub fn smile(params: &Params) -> Image {
    let seed = &params.seed;
    let mut features = vec![Elem::circle(
        50.0,
        50.0,
        45.0,
        Style::fill(*seed.pick(0, &SKIN_TONES)),
    )];

    let pupil = |cx: f32| Elem::circle(cx, 45.0, 5.0, Style::fill(INK));
    match seed.modulo(1, 3) {
        0 => features.extend([pupil(35.0), pupil(65.0)]),
        1 => {
            // Closed, happy eyes
            for left in [30.0, 60.0] {
                features.push(arc(left, 45.0, 10.0, -5.0, Style::stroke(INK, 3.0)));
            }
        }
        _ => {
            // Winking
            features.push(pupil(35.0));
            features.push(Elem::rect(60.0, 44.0, 10.0, 2.0, Style::fill(INK)));
        }
    }

    features.push(match seed.modulo(2, 4) {
        0 => arc(35.0, 65.0, 30.0, 10.0, Style::stroke(INK, 3.0).with_round_caps()),
        1 => {
            // Open grin
            let mut cmds = arc_cmds(35.0, 65.0, 30.0, 15.0);
            cmds.push(PathCmd::Close);
            Elem::Path(cmds, Style::fill(WHITE).and_stroke(INK, 2.0))
        }
        2 => Elem::line(40.0, 70.0, 60.0, 70.0, Style::stroke(INK, 3.0).with_round_caps()),
        _ => Elem::circle(50.0, 70.0, 6.0, Style::stroke(INK, 3.0)),
    });

    if seed.is_even(3) {
        for cx in [30.0, 70.0] {
            let blush = Style::fill(rgb_hex(0xff0000)).with_opacity(0.2);
            features.push(Elem::circle(cx, 55.0, 5.0, blush));
        }
    }

    let mut image = Image::square(100.0);
    image.add(Elem::Group(inset(), features));
    image
}

/// A quadratic curve from `(x, y)` to `(x + width, y)`, bulging by `depth` (downwards when
/// positive)
fn arc(x: f32, y: f32, width: f32, depth: f32, style: Style) -> Elem {
    Elem::Path(arc_cmds(x, y, width, depth), style)
}

fn arc_cmds(x: f32, y: f32, width: f32, depth: f32) -> Vec<PathCmd> {
    vec![
        PathCmd::MoveTo(V2::new(x, y)),
        PathCmd::QuadTo(V2::new(x + width / 2.0, y + depth), V2::new(x + width, y)),
    ]
}

/* PIXEL */

/// An isometric cube in the primary colour, with its faces shaded by translucent overlays
pub fn pixel(params: &Params) -> Image {
    let quad = |points: [(f32, f32); 4], style: Style| {
        Elem::Polygon(points.iter().map(|&(x, y)| V2::new(x, y)).collect(), style)
    };
    let left = [(20.0, 35.0), (50.0, 50.0), (50.0, 80.0), (20.0, 65.0)];
    let right = [(50.0, 50.0), (80.0, 35.0), (80.0, 65.0), (50.0, 80.0)];
    let top = [(50.0, 20.0), (80.0, 35.0), (50.0, 50.0), (20.0, 35.0)];

    let mut faces = vec![
        quad(left, Style::fill(params.color)),
        quad(right, Style::fill(params.color)),
        quad(right, Style::fill(BLACK).with_opacity(0.2)),
        quad(top, Style::fill(params.color)),
        quad(top, Style::fill(WHITE).with_opacity(0.3)),
    ];
    if params.seed.is_even(0) {
        let inlay = [(50.0, 30.0), (70.0, 40.0), (50.0, 50.0), (30.0, 40.0)];
        faces.push(quad(inlay, Style::fill(WHITE).with_opacity(0.3)));
    }

    let mut image = Image::square(100.0);
    image.add_background(rgb_hex(0xf0f0f0));
    image.add(Elem::Group(inset(), faces));
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::Catalog, image::Paint};

    #[test]
    fn sunset_ridge_is_closed() {
        let cmds = ridge_outline(0);
        // Two leading commands, 21 ridge points, then the closing corner
        assert_eq!(cmds.len(), 2 + 21 + 2);
        assert!(matches!(cmds.last(), Some(PathCmd::Close)));
        for cmd in &cmds {
            if let PathCmd::LineTo(p) = cmd {
                assert!((40.0..=100.0).contains(&p.y), "{:?}", p);
            }
        }
    }

    #[test]
    fn sunset_mood_picks_palette() {
        let catalog = Catalog::default();
        for name in ["Alex Morgan", "User", "", "Evening"] {
            let params = Params::new(name, None, &catalog);
            let image = sunset(&params);
            let mood = params.seed.byte(0) as usize % 3;
            match &image.defs()[0] {
                Def::LinearGradient { stops, .. } => {
                    assert_eq!((stops[0].color, stops[1].color), MOODS[mood]);
                }
                other => panic!("expected sky gradient, got {:?}", other),
            }
            // Sky, sun, ridge
            assert_eq!(image.primitives().len(), 3);
        }
    }

    #[test]
    fn smile_features() {
        let catalog = Catalog::default();
        for name in ["Alex Morgan", "User", "", "Grace Hopper", "Smiley"] {
            let params = Params::new(name, None, &catalog);
            let image = smile(&params);
            let prims = image.primitives();
            let face = prims[0];
            match face {
                Elem::Circle { radius, style, .. } => {
                    assert_eq!(*radius, 45.0);
                    let skin = style.fill.clone();
                    assert!(SKIN_TONES.iter().any(|c| skin == Some(Paint::Solid(*c))));
                }
                other => panic!("expected face, got {:?}", other),
            }
            // Face, two eye elements and a mouth, plus two cheeks when blushing
            let blush = if params.seed.is_even(3) { 2 } else { 0 };
            assert_eq!(prims.len(), 4 + blush);
        }
    }

    #[test]
    fn pixel_inlay_depends_on_parity() {
        let catalog = Catalog::default();
        for name in ["Alex Morgan", "User", "", "Cube"] {
            let params = Params::new(name, None, &catalog);
            let image = pixel(&params);
            let inlay = usize::from(params.seed.is_even(0));
            assert_eq!(image.primitives().len(), 1 + 5 + inlay);
        }
    }
}
