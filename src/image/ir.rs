use angle::Deg;
use rgb::RGB8;

use crate::V2;

/// Something that can fill or stroke an element
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(RGB8),
    /// A reference to a [`Def`] (gradient or pattern) of the same [`Image`], by id
    Ref(String),
}

impl From<RGB8> for Paint {
    fn from(c: RGB8) -> Self {
        Paint::Solid(c)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f32,
    /// Round off the line ends
    pub round_caps: bool,
}

/// How a shape is painted.  Missing fills and strokes are rendered as `none`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub fill: Option<Paint>,
    pub stroke: Option<Stroke>,
    /// Opacity of the whole element.  `None` is fully opaque
    pub opacity: Option<f32>,
}

impl Style {
    pub fn fill(paint: impl Into<Paint>) -> Self {
        Self {
            fill: Some(paint.into()),
            ..Self::default()
        }
    }

    pub fn stroke(paint: impl Into<Paint>, width: f32) -> Self {
        Self {
            stroke: Some(Stroke {
                paint: paint.into(),
                width,
                round_caps: false,
            }),
            ..Self::default()
        }
    }

    /// Adds a stroke to an existing (usually filled) style
    pub fn and_stroke(mut self, paint: impl Into<Paint>, width: f32) -> Self {
        self.stroke = Some(Stroke {
            paint: paint.into(),
            width,
            round_caps: false,
        });
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_round_caps(mut self) -> Self {
        if let Some(stroke) = &mut self.stroke {
            stroke.round_caps = true;
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_family: &'static str,
    pub bold: bool,
    pub anchor: TextAnchor,
    /// Vertically centre the glyphs on the text's position, rather than sitting them on it
    pub centred_baseline: bool,
    pub letter_spacing: Option<f32>,
    /// Vertical advance between the lines of multi-line text
    pub line_height: f32,
}

impl TextStyle {
    /// Centred text of a given size and font family
    pub fn centred(font_size: f32, font_family: &'static str) -> Self {
        Self {
            font_size,
            font_family,
            bold: false,
            anchor: TextAnchor::Middle,
            centred_baseline: true,
            letter_spacing: None,
            line_height: font_size,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// One command of a path outline
#[derive(Debug, Clone, Copy)]
pub enum PathCmd {
    MoveTo(V2),
    LineTo(V2),
    /// Quadratic Bézier through a control point to an end point
    QuadTo(V2, V2),
    Close,
}

/// A translation followed by a uniform scaling, applied to a group of elements
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub translate: V2,
    pub scale: f32,
}

impl Transform {
    pub fn new(dx: f32, dy: f32, scale: f32) -> Self {
        Self {
            translate: V2::new(dx, dy),
            scale,
        }
    }
}

/// A single drawable element of an [`Image`]
#[derive(Debug, Clone)]
pub enum Elem {
    Circle {
        centre: V2,
        radius: f32,
        style: Style,
    },
    /// Axis-aligned rectangle, optionally rotated around its own centre
    Rect {
        min: V2,
        size: V2,
        rotation: Option<Deg<f32>>,
        style: Style,
    },
    Line(V2, V2, Style),
    Polygon(Vec<V2>, Style),
    Path(Vec<PathCmd>, Style),
    /// A run of text.  More than one line is laid out downwards from `position`, each line
    /// advancing by [`TextStyle::line_height`]
    Text {
        position: V2,
        lines: Vec<String>,
        text_style: TextStyle,
        style: Style,
    },
    Group(Transform, Vec<Elem>),
}

/// Shorthand constructors
impl Elem {
    pub fn circle(cx: f32, cy: f32, radius: f32, style: Style) -> Self {
        Elem::Circle {
            centre: V2::new(cx, cy),
            radius,
            style,
        }
    }

    pub fn rect(x: f32, y: f32, width: f32, height: f32, style: Style) -> Self {
        Elem::Rect {
            min: V2::new(x, y),
            size: V2::new(width, height),
            rotation: None,
            style,
        }
    }

    pub fn line(x1: f32, y1: f32, x2: f32, y2: f32, style: Style) -> Self {
        Elem::Line(V2::new(x1, y1), V2::new(x2, y2), style)
    }

    pub fn text(position: V2, text: impl Into<String>, text_style: TextStyle, style: Style) -> Self {
        Elem::Text {
            position,
            lines: vec![text.into()],
            text_style,
            style,
        }
    }

    /// The [`Style`] of this element, or `None` for groups
    pub fn style(&self) -> Option<&Style> {
        match self {
            Elem::Circle { style, .. }
            | Elem::Rect { style, .. }
            | Elem::Line(_, _, style)
            | Elem::Polygon(_, style)
            | Elem::Path(_, style)
            | Elem::Text { style, .. } => Some(style),
            Elem::Group(..) => None,
        }
    }
}

/// A colour stop of a gradient.  `offset` runs from 0 to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub offset: f32,
    pub color: RGB8,
}

impl Stop {
    pub fn new(offset: f32, color: RGB8) -> Self {
        Self { offset, color }
    }
}

/// Reusable paint definitions, referenced from [`Paint::Ref`].  Gradient coordinates are
/// fractions of the bounding box of the element being painted.
#[derive(Debug, Clone)]
pub enum Def {
    LinearGradient {
        id: String,
        from: V2,
        to: V2,
        /// Rotation around the centre of the bounding box
        rotation: Option<Deg<f32>>,
        stops: Vec<Stop>,
    },
    RadialGradient {
        id: String,
        centre: V2,
        radius: f32,
        stops: Vec<Stop>,
    },
    /// A horizontal band of `band` units at the top of every `tile`, in user space
    Stripes {
        id: String,
        tile: V2,
        band: f32,
        color: RGB8,
        opacity: f32,
    },
}

impl Def {
    pub fn id(&self) -> &str {
        match self {
            Def::LinearGradient { id, .. }
            | Def::RadialGradient { id, .. }
            | Def::Stripes { id, .. } => id,
        }
    }

    /// A [`Paint`] referring to this definition
    pub fn paint(&self) -> Paint {
        Paint::Ref(self.id().to_owned())
    }
}

/// A vector drawing in a fixed logical coordinate space, which spans `(0, 0)` to `view_box`.
#[derive(Debug, Clone)]
pub struct Image {
    view_box: V2,
    defs: Vec<Def>,
    elems: Vec<Elem>,
}

impl Image {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            view_box: V2::new(width, height),
            defs: Vec::new(),
            elems: Vec::new(),
        }
    }

    /// Creates an empty square `Image` with a given side length
    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    pub fn add(&mut self, elem: Elem) {
        self.elems.push(elem);
    }

    /// Registers a [`Def`] and returns a [`Paint`] which refers to it
    pub fn add_def(&mut self, def: Def) -> Paint {
        let paint = def.paint();
        self.defs.push(def);
        paint
    }

    /// Paints the whole logical canvas, underneath anything added afterwards
    pub fn add_background(&mut self, paint: impl Into<Paint>) {
        self.add(Elem::rect(
            0.0,
            0.0,
            self.view_box.x,
            self.view_box.y,
            Style::fill(paint),
        ));
    }

    pub fn view_box(&self) -> V2 {
        self.view_box
    }

    pub fn defs(&self) -> &[Def] {
        &self.defs
    }

    pub fn elements(&self) -> &[Elem] {
        &self.elems
    }

    /// All the drawable elements in painting order, with [`Elem::Group`]s flattened away
    pub fn primitives(&self) -> Vec<&Elem> {
        fn collect<'a>(elems: &'a [Elem], out: &mut Vec<&'a Elem>) {
            for e in elems {
                match e {
                    Elem::Group(_, children) => collect(children, out),
                    _ => out.push(e),
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.elems, &mut out);
        out
    }
}

/// The externally visible artifact: an [`Image`] wrapped in a square canvas of `size` pixels.
/// The logical coordinates of the `Image` are scaled to fit the canvas.
#[derive(Debug, Clone)]
pub struct Document {
    image: Image,
    size: u32,
}

impl Document {
    pub fn new(image: Image, size: u32) -> Self {
        Self { image, size }
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn primitives(&self) -> Vec<&Elem> {
        self.image.primitives()
    }

    pub fn to_svg_string(&self) -> String {
        super::svg::gen_svg(self).to_string()
    }
}
