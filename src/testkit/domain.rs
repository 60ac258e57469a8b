//! Builders for domain values used across tests.

use std::collections::BTreeMap;

use serde_json::json;

use crate::domain::{ImageCandidate, PredictionResult, RawCenter, RawFeature, UploadResult};

/// A `node` element at a point with the given tags.
#[must_use]
pub fn node(id: u64, lat: f64, lon: f64, tags: &[(&str, &str)]) -> RawFeature {
    RawFeature {
        kind: "node".into(),
        id,
        lat: Some(lat),
        lon: Some(lon),
        center: None,
        tags: tag_map(tags),
    }
}

/// A `way` element that only carries a centroid.
#[must_use]
pub fn way_with_center(id: u64, lat: f64, lon: f64, tags: &[(&str, &str)]) -> RawFeature {
    RawFeature {
        kind: "way".into(),
        id,
        lat: None,
        lon: None,
        center: Some(RawCenter { lat, lon }),
        tags: tag_map(tags),
    }
}

/// An element with neither point coordinates nor a centroid.
#[must_use]
pub fn unlocated(id: u64) -> RawFeature {
    RawFeature {
        kind: "relation".into(),
        id,
        ..RawFeature::default()
    }
}

fn tag_map(tags: &[(&str, &str)]) -> BTreeMap<String, String> {
    tags.iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// A small JPEG candidate.
#[must_use]
pub fn jpeg(name: &str) -> ImageCandidate {
    ImageCandidate::new(name, "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0])
}

/// A plain-text candidate.
#[must_use]
pub fn text_file(name: &str) -> ImageCandidate {
    ImageCandidate::new(name, "text/plain", b"not an image".to_vec())
}

/// An upload result for `scan_id`.
#[must_use]
pub fn upload_result(scan_id: &str) -> UploadResult {
    UploadResult {
        image_url: format!("https://storage.example/scans/{scan_id}.jpg"),
        scan_id: scan_id.to_string(),
    }
}

/// A prediction payload shaped like the inference backend's.
#[must_use]
pub fn prediction() -> PredictionResult {
    PredictionResult::new(json!({
        "prediction": "cataract",
        "confidence": 0.93,
        "details": { "stage": "early" },
    }))
}
