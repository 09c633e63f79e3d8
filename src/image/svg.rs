//! Code to convert a [`Document`] to an SVG string

use itertools::Itertools;
use simple_xml_builder::XMLElement;

use crate::{color::hex, utils::fmt_num, V2};

use super::{Def, Document, Elem, Paint, PathCmd, Stop, Style, TextAnchor, TextStyle};

/// Generate an SVG root element for a [`Document`]
pub fn gen_svg(doc: &Document) -> XMLElement {
    let image = doc.image();
    let view_box = image.view_box();
    let size_str = doc.size().to_string();

    let mut root = XMLElement::new("svg");
    root.add_attribute("xmlns", "http://www.w3.org/2000/svg");
    root.add_attribute("width", &size_str);
    root.add_attribute("height", &size_str);
    root.add_attribute(
        "viewBox",
        &format!("0 0 {} {}", fmt_num(view_box.x), fmt_num(view_box.y)),
    );

    if !image.defs().is_empty() {
        let mut defs = XMLElement::new("defs");
        for def in image.defs() {
            defs.add_child(gen_svg_def(def));
        }
        root.add_child(defs);
    }
    // Translate all `Elem`s to SVG's `XMLElement`s
    for e in image.elements() {
        root.add_child(gen_svg_elem(e));
    }

    root
}

/// Creates an [`XMLElement`] for a given [`Elem`]
fn gen_svg_elem(elem: &Elem) -> XMLElement {
    let mut xml_elem = match elem {
        Elem::Circle { centre, radius, .. } => {
            let mut e = XMLElement::new("circle");
            e.add_attribute("cx", &fmt_num(centre.x));
            e.add_attribute("cy", &fmt_num(centre.y));
            e.add_attribute("r", &fmt_num(*radius));
            e
        }
        Elem::Rect {
            min,
            size,
            rotation,
            ..
        } => {
            let mut e = XMLElement::new("rect");
            e.add_attribute("x", &fmt_num(min.x));
            e.add_attribute("y", &fmt_num(min.y));
            e.add_attribute("width", &fmt_num(size.x));
            e.add_attribute("height", &fmt_num(size.y));
            if let Some(angle) = rotation {
                // Rotate around the centre of the rect
                let centre = *min + *size / 2.0;
                e.add_attribute(
                    "transform",
                    &format!(
                        "rotate({} {} {})",
                        fmt_num(angle.0),
                        fmt_num(centre.x),
                        fmt_num(centre.y)
                    ),
                );
            }
            e
        }
        Elem::Line(p1, p2, _) => {
            let mut e = XMLElement::new("line");
            e.add_attribute("x1", &fmt_num(p1.x));
            e.add_attribute("y1", &fmt_num(p1.y));
            e.add_attribute("x2", &fmt_num(p2.x));
            e.add_attribute("y2", &fmt_num(p2.y));
            e
        }
        Elem::Polygon(vertices, _) => {
            // Whitespace-delimited list of `x,y` pairs
            let coord_string = vertices.iter().map(|v| point_str(*v)).join(" ");
            let mut e = XMLElement::new("polygon");
            e.add_attribute("points", &coord_string);
            e
        }
        Elem::Path(cmds, _) => {
            let mut e = XMLElement::new("path");
            e.add_attribute("d", &path_data(cmds));
            e
        }
        Elem::Text {
            position,
            lines,
            text_style,
            ..
        } => gen_svg_text(*position, lines, text_style),
        Elem::Group(transform, children) => {
            let mut e = XMLElement::new("g");
            e.add_attribute(
                "transform",
                &format!(
                    "translate({}, {}) scale({})",
                    fmt_num(transform.translate.x),
                    fmt_num(transform.translate.y),
                    fmt_num(transform.scale)
                ),
            );
            for child in children {
                e.add_child(gen_svg_elem(child));
            }
            // Groups carry no style of their own
            return e;
        }
    };
    if let Some(style) = elem.style() {
        add_style_attrs(style, &mut xml_elem);
    }
    xml_elem
}

fn gen_svg_text(position: V2, lines: &[String], style: &TextStyle) -> XMLElement {
    let mut e = XMLElement::new("text");
    e.add_attribute("x", &fmt_num(position.x));
    e.add_attribute("y", &fmt_num(position.y));
    e.add_attribute("font-family", style.font_family);
    e.add_attribute("font-size", &fmt_num(style.font_size));
    if style.bold {
        e.add_attribute("font-weight", "bold");
    }
    let anchor_str = match style.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    e.add_attribute("text-anchor", anchor_str);
    if style.centred_baseline {
        e.add_attribute("dominant-baseline", "middle");
    }
    if let Some(spacing) = style.letter_spacing {
        e.add_attribute("letter-spacing", &fmt_num(spacing));
    }

    match lines {
        [single] => e.add_text(single),
        _ => {
            // Every line (including the first) moves down by one line height
            let dy = fmt_num(style.line_height);
            let x = fmt_num(position.x);
            for line in lines {
                let mut tspan = XMLElement::new("tspan");
                tspan.add_attribute("x", &x);
                tspan.add_attribute("dy", &dy);
                tspan.add_text(line);
                e.add_child(tspan);
            }
        }
    }
    e
}

/// Creates an [`XMLElement`] for a paint definition
fn gen_svg_def(def: &Def) -> XMLElement {
    match def {
        Def::LinearGradient {
            id,
            from,
            to,
            rotation,
            stops,
        } => {
            let mut e = XMLElement::new("linearGradient");
            e.add_attribute("id", id);
            e.add_attribute("x1", &percent(from.x));
            e.add_attribute("y1", &percent(from.y));
            e.add_attribute("x2", &percent(to.x));
            e.add_attribute("y2", &percent(to.y));
            if let Some(angle) = rotation {
                e.add_attribute(
                    "gradientTransform",
                    &format!("rotate({} .5 .5)", fmt_num(angle.0)),
                );
            }
            add_stops(stops, &mut e);
            e
        }
        Def::RadialGradient {
            id,
            centre,
            radius,
            stops,
        } => {
            let mut e = XMLElement::new("radialGradient");
            e.add_attribute("id", id);
            e.add_attribute("cx", &percent(centre.x));
            e.add_attribute("cy", &percent(centre.y));
            e.add_attribute("r", &percent(*radius));
            add_stops(stops, &mut e);
            e
        }
        Def::Stripes {
            id,
            tile,
            band,
            color,
            opacity,
        } => {
            let mut e = XMLElement::new("pattern");
            e.add_attribute("id", id);
            e.add_attribute("patternUnits", "userSpaceOnUse");
            e.add_attribute("width", &fmt_num(tile.x));
            e.add_attribute("height", &fmt_num(tile.y));
            let mut band_elem = XMLElement::new("rect");
            band_elem.add_attribute("width", &fmt_num(tile.x));
            band_elem.add_attribute("height", &fmt_num(*band));
            band_elem.add_attribute("fill", &hex(*color));
            band_elem.add_attribute("opacity", &fmt_num(*opacity));
            e.add_child(band_elem);
            e
        }
    }
}

fn add_stops(stops: &[Stop], gradient: &mut XMLElement) {
    for stop in stops {
        let mut e = XMLElement::new("stop");
        e.add_attribute("offset", &percent(stop.offset));
        e.add_attribute("stop-color", &hex(stop.color));
        gradient.add_child(e);
    }
}

/// Add SVG attributes to give an [`XMLElement`] a given [`Style`]
fn add_style_attrs(style: &Style, xml_elem: &mut XMLElement) {
    match &style.fill {
        Some(paint) => xml_elem.add_attribute("fill", &paint_str(paint)),
        None => xml_elem.add_attribute("fill", "none"), // We need `fill="none"` to disable the fill
    }
    if let Some(stroke) = &style.stroke {
        xml_elem.add_attribute("stroke", &paint_str(&stroke.paint));
        xml_elem.add_attribute("stroke-width", &fmt_num(stroke.width));
        if stroke.round_caps {
            xml_elem.add_attribute("stroke-linecap", "round");
        }
    }
    if let Some(opacity) = style.opacity {
        xml_elem.add_attribute("opacity", &fmt_num(opacity));
    }
}

fn paint_str(paint: &Paint) -> String {
    match paint {
        Paint::Solid(c) => hex(*c),
        Paint::Ref(id) => format!("url(#{})", id),
    }
}

fn path_data(cmds: &[PathCmd]) -> String {
    cmds.iter()
        .map(|cmd| match cmd {
            PathCmd::MoveTo(p) => format!("M {} {}", fmt_num(p.x), fmt_num(p.y)),
            PathCmd::LineTo(p) => format!("L {} {}", fmt_num(p.x), fmt_num(p.y)),
            PathCmd::QuadTo(c, p) => format!(
                "Q {} {} {} {}",
                fmt_num(c.x),
                fmt_num(c.y),
                fmt_num(p.x),
                fmt_num(p.y)
            ),
            PathCmd::Close => "Z".to_owned(),
        })
        .join(" ")
}

fn point_str(v: V2) -> String {
    format!("{},{}", fmt_num(v.x), fmt_num(v.y))
}

/// Formats a `[0, 1]` fraction as an SVG percentage
fn percent(fraction: f32) -> String {
    format!("{}%", fmt_num(fraction * 100.0))
}

#[cfg(test)]
mod tests {
    use rgb::RGB8;

    use super::*;
    use crate::image::{Image, TextStyle};

    fn render(image: Image, size: u32) -> String {
        Document::new(image, size).to_svg_string()
    }

    #[test]
    fn envelope_declares_size_and_view_box() {
        let svg = render(Image::square(100.0), 240);
        assert!(svg.contains(r#"width="240""#));
        assert!(svg.contains(r#"height="240""#));
        assert!(svg.contains(r#"viewBox="0 0 100 100""#));
        assert!(svg.contains("http://www.w3.org/2000/svg"));
        // No definitions, no `<defs>`
        assert!(!svg.contains("<defs"));
    }

    #[test]
    fn styles_are_lowered() {
        let mut image = Image::square(100.0);
        image.add(Elem::circle(
            50.0,
            50.0,
            3.0,
            Style::fill(RGB8::new(255, 0, 0)).with_opacity(0.456),
        ));
        image.add(Elem::line(0.0, 0.0, 1.0, 1.0, Style::stroke(RGB8::new(0, 0, 0), 2.0)));
        let svg = render(image, 100);
        assert!(svg.contains(r##"fill="#ff0000""##));
        assert!(svg.contains(r#"opacity="0.46""#));
        assert!(svg.contains(r##"stroke="#000000""##));
        assert!(svg.contains(r#"fill="none""#));
    }

    #[test]
    fn defs_are_referenced_by_url() {
        let mut image = Image::square(100.0);
        let paint = image.add_def(Def::RadialGradient {
            id: "glow".to_owned(),
            centre: V2::new(0.5, 0.5),
            radius: 0.8,
            stops: vec![
                Stop::new(0.0, RGB8::new(0, 0, 0)),
                Stop::new(1.0, RGB8::new(255, 255, 255)),
            ],
        });
        image.add_background(paint);
        let svg = render(image, 100);
        assert!(svg.contains("<defs"));
        assert!(svg.contains(r#"r="80%""#));
        assert!(svg.contains(r#"fill="url(#glow)""#));
    }

    #[test]
    fn path_commands() {
        let cmds = [
            PathCmd::MoveTo(V2::new(35.0, 65.0)),
            PathCmd::QuadTo(V2::new(50.0, 75.0), V2::new(65.0, 65.0)),
            PathCmd::LineTo(V2::new(1.5, 2.25)),
            PathCmd::Close,
        ];
        assert_eq!(path_data(&cmds), "M 35 65 Q 50 75 65 65 L 1.5 2.25 Z");
    }

    #[test]
    fn multi_line_text_uses_tspans() {
        let mut image = Image::square(200.0);
        image.add(Elem::Text {
            position: V2::new(100.0, 60.0),
            lines: vec!["a".to_owned(), "b".to_owned()],
            text_style: TextStyle::centred(28.0, "monospace"),
            style: Style::fill(RGB8::new(255, 255, 255)),
        });
        let svg = render(image, 200);
        assert_eq!(svg.matches("<tspan").count(), 2);
    }
}
