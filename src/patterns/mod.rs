//! The family of pattern generators, and the [`Variant`] registry that maps names onto them.
//!
//! Every generator is a pure function from a set of [`Params`] to an [`Image`] in its own fixed
//! logical coordinate space.  Generators never see the requested pixel size; the canvas envelope
//! is applied later by [`Document`](crate::image::Document).

use std::{fmt, str::FromStr};

use rgb::RGB8;
use thiserror::Error;

use crate::{
    catalog::Catalog,
    color::derive_color,
    image::{Image, Transform},
    seed::Seed,
};

mod constellation;
pub mod font;
mod geometric;
mod gradients;
mod grids;
mod letters;
mod scenes;

/// Signature shared by every pattern generator
pub type Generator = fn(&Params) -> Image;

/// Everything a generator is allowed to depend on
#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    /// The input text, untouched
    pub name: &'a str,
    pub seed: Seed,
    /// The primary colour: either supplied by the caller or derived from `seed`
    pub color: RGB8,
    pub catalog: &'a Catalog,
}

impl<'a> Params<'a> {
    pub fn new(name: &'a str, explicit_color: Option<RGB8>, catalog: &'a Catalog) -> Self {
        let seed = Seed::derive(name);
        Self {
            name,
            seed,
            color: explicit_color.unwrap_or_else(|| derive_color(&seed)),
            catalog,
        }
    }

    /// An extra colour, decorrelated from the primary by hashing the name with `suffix`
    pub fn extra_color(&self, suffix: &str) -> RGB8 {
        derive_color(&Seed::derive_with_suffix(self.name, suffix))
    }

    /// An id for a paint definition which won't collide with those of other documents inlined
    /// into the same page
    pub fn def_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.seed.hex_prefix(3))
    }
}

/// The translate-and-shrink applied to the content of most generators, leaving a 5% margin
/// inside a 100-unit view box
pub(crate) fn inset() -> Transform {
    Transform::new(5.0, 5.0, 0.9)
}

/// Up to two initials of a name: the first letter of the first two whitespace-separated words,
/// upper-cased.  Blank names get `?`.
pub fn initials_of(name: &str) -> String {
    // Upper-casing can expand a char (`ß` -> `SS`), so only the first char of each is kept
    let initials: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .filter_map(|c| c.to_uppercase().next())
        .collect();
    if initials.is_empty() {
        "?".to_owned()
    } else {
        initials
    }
}

//////////////
// REGISTRY //
//////////////

/// Every kind of image that can be requested by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Avatar,
    Gravatar,
    Dither,
    Ascii,
    DotMatrix,
    Terminal,
    Bauhaus,
    Ring,
    Beam,
    Marble,
    Glitch,
    Sunset,
    Smile,
    Circuit,
    Pixel,
    Constellation,
    /// Ordered-dither vectorization of a fetched raster image
    Portrait,
}

impl Variant {
    pub const ALL: [Variant; 17] = [
        Variant::Avatar,
        Variant::Gravatar,
        Variant::Dither,
        Variant::Ascii,
        Variant::DotMatrix,
        Variant::Terminal,
        Variant::Bauhaus,
        Variant::Ring,
        Variant::Beam,
        Variant::Marble,
        Variant::Glitch,
        Variant::Sunset,
        Variant::Smile,
        Variant::Circuit,
        Variant::Pixel,
        Variant::Constellation,
        Variant::Portrait,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Avatar => "avatar",
            Variant::Gravatar => "gravatar",
            Variant::Dither => "dither",
            Variant::Ascii => "ascii",
            Variant::DotMatrix => "dotmatrix",
            Variant::Terminal => "terminal",
            Variant::Bauhaus => "bauhaus",
            Variant::Ring => "ring",
            Variant::Beam => "beam",
            Variant::Marble => "marble",
            Variant::Glitch => "glitch",
            Variant::Sunset => "sunset",
            Variant::Smile => "smile",
            Variant::Circuit => "circuit",
            Variant::Pixel => "pixel",
            Variant::Constellation => "constellation",
            Variant::Portrait => "portrait",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Variant::Avatar => "Initials on a coloured disc",
            Variant::Gravatar => "Mirrored 5x5 identicon",
            Variant::Dither => "Sine plasma, ordered-dithered",
            Variant::Ascii => "Procedural ASCII-art robot",
            Variant::DotMatrix => "Initials on an LED dot-matrix",
            Variant::Terminal => "Block-letter initials on a terminal, with cursor",
            Variant::Bauhaus => "Overlapping primitive shapes",
            Variant::Ring => "Three-colour rotated gradient disc",
            Variant::Beam => "Nodes linked by distance-faded beams",
            Variant::Marble => "Two-tone gradient with flowing veins",
            Variant::Glitch => "RGB-split initials with scan glitches",
            Variant::Sunset => "Sky, sun and mountain ridge",
            Variant::Smile => "A simple smiling face",
            Variant::Circuit => "Circuit board traces and pads",
            Variant::Pixel => "Shaded isometric cube",
            Variant::Constellation => "A real constellation from the star catalogue",
            Variant::Portrait => "Dithered vector portrait of an image URL",
        }
    }

    /// The generator for this variant.  [`Variant::Portrait`] has none, since it is driven by an
    /// image rather than a name.
    pub fn generator(self) -> Option<Generator> {
        Some(match self {
            Variant::Avatar => letters::avatar,
            Variant::Gravatar => grids::identicon,
            Variant::Dither => grids::plasma,
            Variant::Ascii => letters::robot,
            Variant::DotMatrix => letters::dot_matrix,
            Variant::Terminal => letters::terminal,
            Variant::Bauhaus => geometric::bauhaus,
            Variant::Ring => gradients::ring,
            Variant::Beam => geometric::beam,
            Variant::Marble => gradients::marble,
            Variant::Glitch => letters::glitch,
            Variant::Sunset => scenes::sunset,
            Variant::Smile => scenes::smile,
            Variant::Circuit => geometric::circuit,
            Variant::Pixel => scenes::pixel,
            Variant::Constellation => constellation::constellation,
            Variant::Portrait => return None,
        })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A variant name which doesn't match any [`Variant`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant `{0}`")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .iter()
            .copied()
            .find(|v| v.name() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}
