//! Facility result normalizer.
//!
//! Reduces heterogeneous raw query elements to [`FacilityRecord`]s. Total:
//! never fails. Elements without either point coordinates or a centroid
//! are dropped, as are repeated ids (first occurrence wins).

use std::collections::HashSet;

use tracing::debug;

use crate::domain::{Coordinate, FacilityCategory, FacilityRecord, RawFeature};

/// Name used when the element has no `name` tag.
pub const UNNAMED_FACILITY: &str = "Unnamed Eye Care Facility";

/// Address used when none of [`ADDRESS_KEYS`] is present.
pub const ADDRESS_NOT_SPECIFIED: &str = "Address not specified";

/// Specialty used when the element has no specialty tag.
pub const GENERAL_SPECIALTY: &str = "General";

/// Address tags in priority order.
pub const ADDRESS_KEYS: [&str; 2] = ["addr:full", "addr:street"];

const NAME_KEY: &str = "name";
const CATEGORY_KEY: &str = "amenity";
const SPECIALTY_KEY: &str = "healthcare:speciality";

/// Normalize a raw result set.
#[must_use]
pub fn normalize(raw: &[RawFeature]) -> Vec<FacilityRecord> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());

    for feature in raw {
        let Some(record) = normalize_feature(feature) else {
            debug!(id = feature.id, kind = %feature.kind, "Dropping element without coordinates");
            continue;
        };
        if !seen.insert(record.id.clone()) {
            debug!(id = %record.id, "Dropping duplicate element");
            continue;
        }
        records.push(record);
    }

    records
}

/// Normalize one element, or `None` when it has no usable coordinate.
#[must_use]
pub fn normalize_feature(feature: &RawFeature) -> Option<FacilityRecord> {
    let coordinate = resolve_coordinate(feature)?;

    let address = ADDRESS_KEYS
        .iter()
        .find_map(|key| feature.tag(key))
        .unwrap_or(ADDRESS_NOT_SPECIFIED);

    Some(FacilityRecord {
        id: element_id(feature),
        name: feature.tag(NAME_KEY).unwrap_or(UNNAMED_FACILITY).to_string(),
        coordinate,
        category: FacilityCategory::from_tag(feature.tag(CATEGORY_KEY)),
        address: address.to_string(),
        specialty: feature
            .tag(SPECIALTY_KEY)
            .unwrap_or(GENERAL_SPECIALTY)
            .to_string(),
    })
}

/// Point coordinates first, centroid second.
fn resolve_coordinate(feature: &RawFeature) -> Option<Coordinate> {
    match (feature.lat, feature.lon) {
        (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
        _ => feature
            .center
            .map(|center| Coordinate::new(center.lat, center.lon)),
    }
}

fn element_id(feature: &RawFeature) -> String {
    if feature.kind.is_empty() {
        feature.id.to_string()
    } else {
        format!("{}/{}", feature.kind, feature.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawCenter;

    fn node(id: u64, lat: f64, lon: f64, tags: &[(&str, &str)]) -> RawFeature {
        RawFeature {
            kind: "node".into(),
            id,
            lat: Some(lat),
            lon: Some(lon),
            center: None,
            tags: tags
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_unnamed_hospital_defaults() {
        let raw = vec![node(1, 37.01, -122.01, &[("amenity", "hospital")])];
        let records = normalize(&raw);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, UNNAMED_FACILITY);
        assert_eq!(record.address, ADDRESS_NOT_SPECIFIED);
        assert_eq!(record.category, FacilityCategory::Hospital);
        assert_eq!(record.coordinate, Coordinate::new(37.01, -122.01));
        assert_eq!(record.specialty, GENERAL_SPECIALTY);
        assert_eq!(record.id, "node/1");
    }

    #[test]
    fn test_tags_are_used_when_present() {
        let raw = vec![node(
            2,
            1.0,
            2.0,
            &[
                ("name", "Vision Centre"),
                ("amenity", "clinic"),
                ("addr:street", "High Street"),
                ("healthcare:speciality", "ophthalmology"),
            ],
        )];
        let record = &normalize(&raw)[0];

        assert_eq!(record.name, "Vision Centre");
        assert_eq!(record.category, FacilityCategory::Clinic);
        assert_eq!(record.address, "High Street");
        assert_eq!(record.specialty, "ophthalmology");
    }

    #[test]
    fn test_full_address_takes_priority() {
        let raw = vec![node(
            3,
            1.0,
            2.0,
            &[("addr:full", "1 High Street, Town"), ("addr:street", "High Street")],
        )];
        assert_eq!(normalize(&raw)[0].address, "1 High Street, Town");
    }

    #[test]
    fn test_centroid_fallback() {
        let raw = vec![RawFeature {
            kind: "way".into(),
            id: 4,
            center: Some(RawCenter { lat: 5.0, lon: 6.0 }),
            ..RawFeature::default()
        }];
        let record = &normalize(&raw)[0];
        assert_eq!(record.coordinate, Coordinate::new(5.0, 6.0));
        assert_eq!(record.id, "way/4");
    }

    #[test]
    fn test_partial_point_falls_back_to_centroid() {
        let raw = vec![RawFeature {
            kind: "way".into(),
            id: 5,
            lat: Some(9.0),
            center: Some(RawCenter { lat: 5.0, lon: 6.0 }),
            ..RawFeature::default()
        }];
        assert_eq!(normalize(&raw)[0].coordinate, Coordinate::new(5.0, 6.0));
    }

    #[test]
    fn test_zero_coordinates_are_kept() {
        let raw = vec![node(6, 0.0, 0.0, &[])];
        assert_eq!(normalize(&raw)[0].coordinate, Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn test_coordinate_less_elements_are_dropped() {
        let raw = vec![
            node(7, 1.0, 1.0, &[]),
            RawFeature {
                kind: "relation".into(),
                id: 8,
                ..RawFeature::default()
            },
            node(9, 2.0, 2.0, &[]),
        ];
        let records = normalize(&raw);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.id != "relation/8"));
    }

    #[test]
    fn test_unrecognized_category_is_unknown() {
        let raw = vec![node(10, 1.0, 1.0, &[("amenity", "doctors")])];
        assert_eq!(normalize(&raw)[0].category, FacilityCategory::Unknown);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let raw = vec![
            node(11, 1.0, 1.0, &[("name", "first")]),
            node(11, 2.0, 2.0, &[("name", "second")]),
        ];
        let records = normalize(&raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "first");
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_output_length_matches_located_inputs() {
        let raw: Vec<RawFeature> = (0..20u64)
            .map(|i| {
                if i % 3 == 0 {
                    RawFeature {
                        kind: "way".into(),
                        id: i,
                        ..RawFeature::default()
                    }
                } else {
                    node(i, i as f64 / 10.0, 0.0, &[])
                }
            })
            .collect();
        let located = raw
            .iter()
            .filter(|f| (f.lat.is_some() && f.lon.is_some()) || f.center.is_some())
            .count();
        assert_eq!(normalize(&raw).len(), located);
    }
}
