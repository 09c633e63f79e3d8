//! Composition: resolving a request into a finished [`Document`].

use log::{debug, warn};
use rgb::RGB8;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    color::parse_hex,
    config::{Config, ConfigError},
    dither::{
        vectorize_source, DitherConfig, FetchError, HttpOrFileSource, HttpSource, ImageSource,
    },
    image::{Document, Image},
    patterns::{Params, UnknownVariant, Variant},
};

/// Largest output size, in pixels, which will be composed
pub const MAX_SIZE: u32 = 4096;

/// Everything that determines a composed [`Document`]
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub variant: &'a str,
    /// The name (or other text) which seeds the image
    pub name: &'a str,
    pub size: u32,
    /// Colour which overrides the derived primary colour, as a hex string
    pub color: Option<&'a str>,
    /// Source image for [`Variant::Portrait`].  If missing, `name` is used as the location
    pub image_url: Option<&'a str>,
}

/// A request which can't be composed.  These are the caller's fault, and should not be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid variant `{0}`")]
    InvalidVariant(String),
    #[error("size {0} is outside 1..={max}", max = MAX_SIZE)]
    InvalidSize(u32),
}

impl From<UnknownVariant> for Error {
    fn from(e: UnknownVariant) -> Self {
        Error::InvalidVariant(e.0)
    }
}

/// The ways that building a [`Composer`] can fail
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("could not create HTTP client")]
    Fetch(#[from] FetchError),
}

/// Turns requests into [`Document`]s.  A `Composer` holds only read-only state, so one instance
/// can serve any number of requests, from any number of threads.
#[derive(Debug)]
pub struct Composer<S = HttpSource> {
    catalog: Catalog,
    source: S,
    /// Side length of the logical canvas used for portraits
    portrait_canvas: u32,
    dither: DitherConfig,
}

impl Composer<HttpSource> {
    /// A `Composer` with the bundled catalogue, fetching portraits over HTTP(S) only
    pub fn from_config(config: &Config) -> Result<Self, SetupError> {
        let source = HttpSource::new(config.timeout())?;
        Ok(Self::with_source(Catalog::bundled()?, source, config)?)
    }
}

impl Composer<HttpOrFileSource> {
    /// Like [`Composer::from_config`], but portrait locations which aren't URLs are read from the
    /// local filesystem.  Never use this where the location comes from an untrusted caller.
    pub fn with_local_files(config: &Config) -> Result<Self, SetupError> {
        let source = HttpOrFileSource::new(config.timeout())?;
        Ok(Self::with_source(Catalog::bundled()?, source, config)?)
    }
}

impl<S: ImageSource> Composer<S> {
    pub fn with_source(catalog: Catalog, source: S, config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            catalog,
            source,
            portrait_canvas: config.portrait.canvas,
            dither: config.dither()?,
        })
    }

    /// Composes `variant` for `input` at `size` pixels square
    pub fn compose(
        &self,
        variant: &str,
        input: &str,
        size: u32,
        color: Option<&str>,
    ) -> Result<Document, Error> {
        self.compose_request(&Request {
            variant,
            name: input,
            size,
            color,
            image_url: None,
        })
    }

    pub fn compose_request(&self, request: &Request) -> Result<Document, Error> {
        let variant = request.variant.parse::<Variant>()?;
        if !(1..=MAX_SIZE).contains(&request.size) {
            return Err(Error::InvalidSize(request.size));
        }
        let explicit_color = request.color.and_then(resolve_color);

        let image = match variant.generator() {
            Some(generate) => {
                generate(&Params::new(request.name, explicit_color, &self.catalog))
            }
            None => self.portrait(request.image_url.unwrap_or(request.name), explicit_color),
        };
        debug!(
            "composed {} for {:?} ({} elements, {}px)",
            variant,
            request.name,
            image.elements().len(),
            request.size
        );
        Ok(Document::new(image, request.size))
    }

    fn portrait(&self, location: &str, explicit_color: Option<RGB8>) -> Image {
        let config = DitherConfig {
            primary: explicit_color.unwrap_or(self.dither.primary),
            ..self.dither.clone()
        };
        let side = self.portrait_canvas;
        vectorize_source(&self.source, location, side, side, &config)
    }
}

/// Parses a caller-supplied colour.  Blank strings count as no colour, and anything unparseable
/// is dropped (with a warning) in favour of the derived colour.
fn resolve_color(s: &str) -> Option<RGB8> {
    if s.trim().is_empty() {
        return None;
    }
    match parse_hex(s) {
        Ok(c) => Some(c),
        Err(e) => {
            warn!("ignoring explicit colour: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use image::DynamicImage;

    use super::*;

    /// A source which serves the same in-memory image for every location
    struct Fixed(DynamicImage);

    impl ImageSource for Fixed {
        fn fetch(&self, _location: &str) -> Result<DynamicImage, FetchError> {
            Ok(self.0.clone())
        }
    }

    fn composer(image: DynamicImage) -> Composer<Fixed> {
        let config = Config::from_toml_str("[portrait]\ncanvas = 8\ncontrast = 1.0\nbrightness = 0.0")
            .unwrap();
        Composer::with_source(Catalog::default(), Fixed(image), &config).unwrap()
    }

    fn white() -> DynamicImage {
        DynamicImage::ImageRgb8(image::RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255])))
    }

    #[test]
    fn size_is_validated() {
        let c = composer(white());
        assert_eq!(c.compose("avatar", "User", 0, None).unwrap_err(), Error::InvalidSize(0));
        assert_eq!(
            c.compose("avatar", "User", MAX_SIZE + 1, None).unwrap_err(),
            Error::InvalidSize(MAX_SIZE + 1)
        );
        assert!(c.compose("avatar", "User", MAX_SIZE, None).is_ok());
    }

    #[test]
    fn variant_is_checked_before_size() {
        let c = composer(white());
        assert_eq!(
            c.compose("nope", "User", 0, None).unwrap_err(),
            Error::InvalidVariant("nope".to_owned())
        );
    }

    #[test]
    fn portrait_uses_source_and_canvas() {
        let c = composer(white());
        let doc = c.compose("portrait", "https://example.com/me.png", 64, None).unwrap();
        assert_eq!(doc.size(), 64);
        assert_eq!(doc.image().view_box().x, 8.0);
        // Background plus one full-width run per row
        assert_eq!(doc.primitives().len(), 1 + 8);
    }

    #[test]
    fn explicit_colour_recolours_portrait_ink() {
        let c = composer(white());
        let doc = c
            .compose_request(&Request {
                variant: "portrait",
                name: "ignored",
                size: 10,
                color: Some("#00ff00"),
                image_url: Some("mem://white"),
            })
            .unwrap();
        let ink = doc.primitives()[1].style().unwrap().fill.clone();
        assert_eq!(ink, Some(RGB8::new(0, 255, 0).into()));
    }

    #[test]
    fn colour_resolution() {
        assert_eq!(resolve_color("#0000ff"), Some(RGB8::new(0, 0, 255)));
        assert_eq!(resolve_color("  "), None);
        assert_eq!(resolve_color("not a colour"), None);
    }
}
