//! Handler for the `nearby` command.

use std::process::ExitCode;
use std::sync::Arc;

use owo_colors::OwoColorize;
use serde_json::json;
use tabled::{Table, Tabled};

use super::command::NearbyArgs;
use super::console::ConsoleNotifier;
use super::output;
use crate::adapter::outbound::geolocation::FixedPosition;
use crate::domain::{
    Coordinate, FacilityRecord, FlowError, FlowState, MarkerStyle, NearbyFacilities,
};
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::{Notifier, PositionSource};

#[derive(Tabled)]
struct FacilityRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Distance")]
    distance: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Specialty")]
    specialty: String,
}

/// Execute the nearby command.
pub async fn execute(args: &NearbyArgs, config: &Config) -> Result<ExitCode> {
    let mut config = config.clone();
    if let Some(radius) = args.radius {
        config.overpass.radius_m = radius;
    }

    let position: Arc<dyn PositionSource> = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => {
            let origin = Coordinate::new(lat, lng);
            if !origin.is_valid() {
                return Err(ConfigError::InvalidValue {
                    field: "lat/lng",
                    reason: "must be within [-90, 90] x [-180, 180]".to_string(),
                }
                .into());
            }
            Arc::new(FixedPosition::new(origin))
        }
        _ => bootstrap::build_position_source(&config),
    };

    let console = Arc::new(ConsoleNotifier::new());
    let sink: Box<dyn Notifier> = Box::new(Arc::clone(&console));
    let registry = bootstrap::build_notifier_registry(vec![sink]);
    let discovery = bootstrap::build_discovery(&config, position, Arc::new(registry));

    output::header(env!("CARGO_PKG_VERSION"));
    let pb = output::spinner("Searching for eye care facilities nearby");
    let state = discovery.run().await?;
    match &state {
        FlowState::Success(nearby) => {
            output::spinner_success(&pb, &format!("Searched around {}", nearby.origin));
        }
        _ => output::spinner_clear(&pb),
    }
    console.flush();

    match state {
        FlowState::Success(nearby) => {
            render(&nearby);
            Ok(ExitCode::SUCCESS)
        }
        FlowState::Failed(err) => {
            hint_for(&err);
            Ok(ExitCode::FAILURE)
        }
        FlowState::Idle | FlowState::Loading => Ok(ExitCode::FAILURE),
    }
}

fn render(nearby: &NearbyFacilities) {
    let ranked = nearby.by_distance();

    if output::is_json() {
        let facilities: Vec<_> = ranked
            .iter()
            .map(|(facility, distance)| facility_json(facility, *distance))
            .collect();
        output::json_output(json!({
            "command": "nearby",
            "origin": { "lat": nearby.origin.lat, "lng": nearby.origin.lng },
            "radius_m": nearby.radius_m,
            "facilities": facilities,
        }));
        return;
    }

    output::field("Radius", format_distance(f64::from(nearby.radius_m)));
    if ranked.is_empty() {
        return;
    }

    output::section("Eye care facilities");
    let rows: Vec<FacilityRow> = ranked
        .iter()
        .map(|(facility, distance)| FacilityRow {
            name: facility.name.clone(),
            kind: styled_label(facility),
            distance: format_distance(*distance),
            address: facility.address.clone(),
            specialty: facility.specialty.clone(),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());
    output::note(&format!(
        "{} hospital  {} clinic",
        "■".red(),
        "■".blue()
    ));
}

fn facility_json(facility: &FacilityRecord, distance_m: f64) -> serde_json::Value {
    json!({
        "id": facility.id,
        "name": facility.name,
        "category": facility.category.to_string(),
        "lat": facility.coordinate.lat,
        "lng": facility.coordinate.lng,
        "address": facility.address,
        "specialty": facility.specialty,
        "distance_m": distance_m.round(),
    })
}

/// Hospitals red, everything else blue.
fn styled_label(facility: &FacilityRecord) -> String {
    let label = facility.category.label();
    match facility.category.marker() {
        MarkerStyle::Hospital => label.red().to_string(),
        MarkerStyle::Clinic => label.blue().to_string(),
    }
}

fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{meters:.0} m")
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

fn hint_for(err: &FlowError) {
    match err {
        FlowError::CapabilityUnavailable | FlowError::Location(_) => {
            output::hint("pass --lat and --lng, or set [geolocation] provider = \"fixed\"");
        }
        FlowError::QueryTransport(_) => {
            output::hint("the Overpass API may be busy; try again in a minute");
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FacilityCategory;

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(420.4), "420 m");
        assert_eq!(format_distance(1_250.0), "1.3 km");
        assert_eq!(format_distance(10_000.0), "10.0 km");
    }

    #[test]
    fn test_facility_json_shape() {
        let facility = FacilityRecord {
            id: "node/1".into(),
            name: "Eye Clinic".into(),
            coordinate: Coordinate::new(6.5, 3.4),
            category: FacilityCategory::Unknown,
            address: "Address not specified".into(),
            specialty: "General".into(),
        };
        let value = facility_json(&facility, 812.6);
        assert_eq!(value["id"], "node/1");
        assert_eq!(value["category"], "unknown");
        assert_eq!(value["distance_m"], 813.0);
    }
}
