//! Facility query builder.
//!
//! Produces an Overpass QL union of four node predicates around a center
//! point. Pure and deterministic: the same center and radius always yield
//! byte-identical query text.

use std::fmt::Write;

use crate::domain::{Coordinate, QuerySpec};

/// Default search radius in meters.
pub const DEFAULT_RADIUS_M: u32 = 10_000;

/// Default server-side evaluation timeout in seconds.
pub const DEFAULT_SERVER_TIMEOUT_SECS: u32 = 25;

/// Tag filters for the four eye-care feature classes. Matches of any one
/// class are included (union).
pub const FEATURE_CLASSES: [&str; 4] = [
    r#"["healthcare:speciality"="ophthalmology"]"#,
    r#"["healthcare"="optometrist"]"#,
    r#"["amenity"="clinic"]["healthcare"="yes"]"#,
    r#"["amenity"="hospital"]["healthcare"="yes"]"#,
];

/// Build a query for eye-care facilities within `radius_m` of `center`.
#[must_use]
pub fn build_query(center: Coordinate, radius_m: u32) -> QuerySpec {
    FacilityQueryBuilder::new(radius_m).build(center)
}

/// Query builder holding the configured radius and server timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacilityQueryBuilder {
    radius_m: u32,
    server_timeout_secs: u32,
}

impl Default for FacilityQueryBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS_M)
    }
}

impl FacilityQueryBuilder {
    #[must_use]
    pub const fn new(radius_m: u32) -> Self {
        Self {
            radius_m,
            server_timeout_secs: DEFAULT_SERVER_TIMEOUT_SECS,
        }
    }

    #[must_use]
    pub const fn with_server_timeout(mut self, secs: u32) -> Self {
        self.server_timeout_secs = secs;
        self
    }

    #[must_use]
    pub const fn radius_m(&self) -> u32 {
        self.radius_m
    }

    #[must_use]
    pub fn build(&self, center: Coordinate) -> QuerySpec {
        let mut text = format!("[out:json][timeout:{}];\n(\n", self.server_timeout_secs);
        for filter in FEATURE_CLASSES {
            let _ = writeln!(
                text,
                "  node{filter}(around:{},{},{});",
                self.radius_m, center.lat, center.lng
            );
        }
        text.push_str(");\nout center;\n");

        QuerySpec {
            center,
            radius_m: self.radius_m,
            text,
        }
    }
}
