//! The bundled star catalogue used by the constellation variant.
//!
//! The data is a GeoJSON-style feature collection: every feature is one constellation, whose
//! geometry is a list of polylines joining its stars.  Coordinates are (negated right ascension,
//! declination) in degrees, so east is to the left as it appears in the sky, but nothing here
//! depends on that: the generator rescales whatever it is given.

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::{seed::Seed, V2};

const BUNDLED_JSON: &str = include_str!("../data/constellations.json");

/// One named star pattern
#[derive(Debug, Clone)]
pub struct Constellation {
    pub id: String,
    pub name: String,
    /// Polylines in the catalogue's own coordinate system, with `y` pointing up
    pub lines: Vec<Vec<V2>>,
}

/// A read-only list of [`Constellation`]s.  Load it once and share it between generator calls.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    constellations: Vec<Constellation>,
}

impl Catalog {
    /// The catalogue compiled into the crate
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let collection: FeatureCollection = serde_json::from_str(json)?;
        if collection.features.is_empty() {
            return Err(CatalogError::Empty);
        }
        let constellations = collection
            .features
            .into_iter()
            .map(|f| Constellation {
                id: f.id,
                name: f.properties.name,
                lines: f
                    .geometry
                    .coordinates
                    .into_iter()
                    .map(|line| {
                        line.into_iter()
                            .map(|[x, y]| V2::new(x as f32, y as f32))
                            .collect()
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();
        debug!("loaded {} constellations", constellations.len());
        Ok(Self { constellations })
    }

    pub fn len(&self) -> usize {
        self.constellations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constellations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constellation> {
        self.constellations.iter()
    }

    /// The constellation chosen by the first byte of `seed`, or `None` if the catalogue is empty
    pub fn pick(&self, seed: &Seed) -> Option<&Constellation> {
        if self.is_empty() {
            None
        } else {
            Some(seed.pick(0, &self.constellations))
        }
    }
}

/// The ways that loading a [`Catalog`] can fail
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalogue data")]
    Json(#[from] serde_json::Error),
    #[error("catalogue contains no constellations")]
    Empty,
}

/* FILE FORMAT */

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    id: String,
    properties: Properties,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Properties {
    #[serde(rename = "n")]
    name: String,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<Vec<[f64; 2]>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalogue_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.len(), 11);
        let orion = catalog.iter().find(|c| c.id == "Ori").unwrap();
        assert_eq!(orion.name, "Orion");
        assert_eq!(orion.lines.len(), 4);
        for c in catalog.iter() {
            assert!(!c.lines.is_empty(), "{} has no lines", c.name);
            assert!(c.lines.iter().all(|l| l.len() >= 2), "{} has a lone star", c.name);
        }
    }

    #[test]
    fn pick_wraps_around_catalogue() {
        let catalog = Catalog::bundled().unwrap();
        let seed = Seed::derive("Alex Morgan");
        // Byte 0 is 229, and 229 % 11 = 9
        assert_eq!(catalog.pick(&seed).unwrap().id, "Tau");
        assert!(Catalog::default().pick(&seed).is_none());
    }

    #[test]
    fn bad_data_is_rejected() {
        assert!(matches!(
            Catalog::from_json(r#"{"type":"FeatureCollection","features":[]}"#),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Json(_))
        ));
        // Points must be pairs
        let three_d = r#"{"features":[{"id":"X","properties":{"n":"X"},
            "geometry":{"coordinates":[[[1,2,3]]]}}]}"#;
        assert!(matches!(Catalog::from_json(three_d), Err(CatalogError::Json(_))));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","id":"Tri",
            "properties":{"n":"Triangulum","rank":3},
            "geometry":{"type":"MultiLineString","coordinates":[[[0,0],[1,1],[2,0]]]}}]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        let tri = catalog.pick(&Seed::derive("anything")).unwrap();
        assert_eq!(tri.name, "Triangulum");
        let p = tri.lines[0][1];
        assert_eq!((p.x, p.y), (1.0, 1.0));
    }
}
