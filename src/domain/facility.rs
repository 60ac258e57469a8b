//! Eye-care facility types.
//!
//! [`RawFeature`] mirrors one element of a geospatial query response as it
//! arrives on the wire. [`FacilityRecord`] is the canonical shape handed to
//! map rendering after normalization.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// Centroid attached to area features (`out center`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawCenter {
    pub lat: f64,
    pub lon: f64,
}

/// One element of the query backend's `elements` sequence.
///
/// Every field except `id` may be missing; normalization decides the
/// fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFeature {
    /// Element kind (`node`, `way`, `relation`).
    #[serde(rename = "type", default)]
    pub kind: String,
    pub id: u64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<RawCenter>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl RawFeature {
    /// Tag value, treating empty strings as absent.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}

/// Closed set of facility categories.
///
/// Raw `amenity` values other than `hospital` and `clinic` map to
/// [`FacilityCategory::Unknown`]; presentation renders those with clinic
/// styling (see [`FacilityCategory::marker`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityCategory {
    Hospital,
    Clinic,
    #[default]
    Unknown,
}

/// Marker style used by map rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Red marker.
    Hospital,
    /// Blue marker.
    Clinic,
}

impl FacilityCategory {
    /// Map a raw `amenity` tag into the closed enum.
    #[must_use]
    pub fn from_tag(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("hospital") => Self::Hospital,
            Some("clinic") => Self::Clinic,
            _ => Self::Unknown,
        }
    }

    /// Marker style for rendering. Unknown categories share clinic styling.
    #[must_use]
    pub const fn marker(self) -> MarkerStyle {
        match self {
            Self::Hospital => MarkerStyle::Hospital,
            Self::Clinic | Self::Unknown => MarkerStyle::Clinic,
        }
    }

    /// Label shown next to a facility.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.marker() {
            MarkerStyle::Hospital => "Hospital",
            MarkerStyle::Clinic => "Clinic",
        }
    }
}

impl fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hospital => write!(f, "hospital"),
            Self::Clinic => write!(f, "clinic"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A normalized eye-care facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    /// `<element type>/<numeric id>`, unique within one result set.
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
    pub category: FacilityCategory,
    pub address: String,
    pub specialty: String,
}

/// Payload of a successful discovery: the user's position and the
/// facilities found around it. Replaced wholesale on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyFacilities {
    pub origin: Coordinate,
    pub radius_m: u32,
    pub facilities: Vec<FacilityRecord>,
}

impl NearbyFacilities {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    /// Facilities paired with their distance from the origin, nearest first.
    #[must_use]
    pub fn by_distance(&self) -> Vec<(&FacilityRecord, f64)> {
        let mut ranked: Vec<_> = self
            .facilities
            .iter()
            .map(|facility| (facility, self.origin.distance_to(&facility.coordinate)))
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }
}
