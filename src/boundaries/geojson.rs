use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::boundaries::errors::BoundaryError;
use crate::boundaries::BoundaryLookup;

/// Property holding the state name in the commonly used India states GeoJSON.
pub const DEFAULT_FEATURE_KEY: &str = "ST_NM";

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Map<String, Value>,
    #[serde(default)]
    geometry: Value
}

/// Region geometries read from a GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonBoundaries {
    shapes: HashMap<String, Value>
}

impl GeoJsonBoundaries {
    /// Indexes every feature by the string property `feature_key`.
    ///
    /// # Errors
    /// Returns `BoundaryError` if the document is not a feature collection or a
    /// feature lacks the key.
    pub fn from_reader<R: Read>(reader: R, feature_key: &str) -> Result<Self, BoundaryError> {
        let collection: FeatureCollection = serde_json::from_reader(reader)?;
        let mut shapes = HashMap::with_capacity(collection.features.len());

        for (index, feature) in collection.features.into_iter().enumerate() {
            let Some(name) = feature.properties.get(feature_key).and_then(Value::as_str) else {
                return Err(BoundaryError::MissingFeatureKey { index, key: feature_key.to_string() })
            };

            shapes.insert(name.to_string(), feature.geometry);
        }

        Ok(Self { shapes })
    }

    pub fn from_path(path: &Path, feature_key: &str) -> Result<Self, BoundaryError> {
        let boundaries = Self::from_reader(BufReader::new(File::open(path)?), feature_key)?;

        info!("Loaded {} region boundaries from [{}]", boundaries.len(), path.display());

        Ok(boundaries)
    }

    pub fn shape(&self, region: &str) -> Option<&Value> {
        self.shapes.get(region)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl BoundaryLookup for GeoJsonBoundaries {
    fn contains_region(&self, region: &str) -> bool {
        self.shapes.contains_key(region)
    }
}
