//! Image specification and rendering utilities.  In essence, this is an intermediate
//! representation (IR) for vector images: every generator (and the dither vectorizer) outputs an
//! [`Image`] laid out in its own fixed logical coordinate space, which is then wrapped in a
//! [`Document`] of the requested pixel size and translated to an output format (currently SVG).

mod ir;
pub mod svg;

pub use ir::{
    Def, Document, Elem, Image, Paint, PathCmd, Stop, Stroke, Style, TextAnchor, TextStyle,
    Transform,
};
