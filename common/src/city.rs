//! City selection model matching the geocoding API's commune records.

use serde::{Deserialize, Serialize};


/// A commune picked from the geocoding API. Field names follow the API's
/// camelCase wire shape so a response record deserializes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CitySelection {
    pub nom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub codes_postaux: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_departement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centre: Option<GeoPoint>,
}

/// GeoJSON point as served by the geocoding API: coordinates are a
/// (longitude, latitude) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

impl CitySelection {
    /// First postal code, the one the location string uses.
    pub fn primary_postal_code(&self) -> Option<&str> {
        self.codes_postaux.first().map(|code| code.as_str())
    }

    /// Centroid as (longitude, latitude), only when both are finite.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        let centre = self.centre.as_ref()?;
        let lon = *centre.coordinates.first()?;
        let lat = *centre.coordinates.get(1)?;
        if lon.is_finite() && lat.is_finite() {
            Some((lon, lat))
        } else {
            None
        }
    }
}
