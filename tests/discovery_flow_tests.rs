use std::sync::Arc;
use std::time::Duration;

use catascan::application::normalize::{ADDRESS_NOT_SPECIFIED, GENERAL_SPECIALTY, UNNAMED_FACILITY};
use catascan::application::{FacilityDiscovery, FacilityQueryBuilder, GeolocationProvider};
use catascan::domain::{
    Coordinate, FacilityCategory, FlowError, FlowState, LocationError, QueryError, Stage,
    TransitionError,
};
use catascan::port::{Event, PositionOptions, PositionSource};
use catascan::testkit::domain::{node, unlocated, way_with_center};
use catascan::testkit::facility::{SequencedFacilities, StaticFacilities};
use catascan::testkit::geolocation::ScriptedPosition;
use catascan::testkit::recording::RecordingNotifier;
use catascan::testkit::Gate;

const LAGOS: (f64, f64) = (6.5244, 3.3792);

fn discovery(
    position: Arc<dyn PositionSource>,
    source: Arc<StaticFacilities>,
    notifier: &RecordingNotifier,
) -> FacilityDiscovery {
    FacilityDiscovery::new(
        GeolocationProvider::new(position),
        source,
        Arc::new(notifier.clone()),
    )
}

#[tokio::test]
async fn hospital_is_normalized_and_announced_once() {
    let source = Arc::new(StaticFacilities::elements(vec![node(
        1,
        6.52,
        3.37,
        &[
            ("amenity", "hospital"),
            ("name", "Lagos Eye Hospital"),
            ("addr:street", "Broad St"),
        ],
    )]));
    let notifier = RecordingNotifier::new();
    let flow = discovery(
        Arc::new(ScriptedPosition::fix(LAGOS.0, LAGOS.1)),
        Arc::clone(&source),
        &notifier,
    );

    let state = flow.run().await.unwrap();

    let FlowState::Success(nearby) = state else {
        panic!("expected success, got {state:?}");
    };
    assert_eq!(nearby.origin, Coordinate::new(LAGOS.0, LAGOS.1));
    assert_eq!(nearby.radius_m, 10_000);
    assert_eq!(nearby.facilities.len(), 1);
    let facility = &nearby.facilities[0];
    assert_eq!(facility.id, "node/1");
    assert_eq!(facility.name, "Lagos Eye Hospital");
    assert_eq!(facility.category, FacilityCategory::Hospital);
    assert_eq!(facility.address, "Broad St");
    assert_eq!(facility.specialty, GENERAL_SPECIALTY);

    assert_eq!(
        notifier.events(),
        vec![Event::FacilitiesFound {
            count: 1,
            radius_m: 10_000
        }]
    );

    let query = source.last_query().unwrap();
    assert_eq!(query.radius_m, 10_000);
    assert!(query.text.contains("(around:10000,6.5244,3.3792)"));
}

#[tokio::test]
async fn heterogeneous_elements_fall_back_and_drop_unlocated() {
    let source = Arc::new(StaticFacilities::elements(vec![
        way_with_center(2, 6.53, 3.38, &[("healthcare", "optometrist")]),
        unlocated(3),
        node(4, 6.50, 3.36, &[("amenity", "clinic"), ("addr:full", "1 Marina, Lagos")]),
        node(4, 6.50, 3.36, &[("amenity", "clinic")]),
    ]));
    let notifier = RecordingNotifier::new();
    let flow = discovery(
        Arc::new(ScriptedPosition::fix(LAGOS.0, LAGOS.1)),
        source,
        &notifier,
    );

    let state = flow.run().await.unwrap();
    let nearby = state.data().cloned().unwrap();

    assert_eq!(nearby.facilities.len(), 2);
    let way = &nearby.facilities[0];
    assert_eq!(way.id, "way/2");
    assert_eq!(way.name, UNNAMED_FACILITY);
    assert_eq!(way.coordinate, Coordinate::new(6.53, 3.38));
    assert_eq!(way.category, FacilityCategory::Unknown);
    assert_eq!(way.address, ADDRESS_NOT_SPECIFIED);
    assert_eq!(nearby.facilities[1].address, "1 Marina, Lagos");
}

#[tokio::test]
async fn empty_result_is_success_with_advisory() {
    let notifier = RecordingNotifier::new();
    let flow = discovery(
        Arc::new(ScriptedPosition::fix(LAGOS.0, LAGOS.1)),
        Arc::new(StaticFacilities::empty()),
        &notifier,
    );

    let state = flow.run().await.unwrap();

    match state {
        FlowState::Success(nearby) => assert!(nearby.is_empty()),
        other => panic!("expected empty success, got {other:?}"),
    }
    let events = notifier.events();
    assert_eq!(events, vec![Event::NoFacilitiesNearby { radius_m: 10_000 }]);
    assert_eq!(events[0].message(), "No eye care facilities found within 10km.");
}

#[tokio::test]
async fn missing_capability_fails_without_querying() {
    let position = Arc::new(ScriptedPosition::unavailable());
    let source = Arc::new(StaticFacilities::empty());
    let notifier = RecordingNotifier::new();
    let flow = discovery(position.clone(), Arc::clone(&source), &notifier);

    let state = flow.run().await.unwrap();

    assert_eq!(state, FlowState::Failed(FlowError::CapabilityUnavailable));
    assert_eq!(position.requests(), 0);
    assert_eq!(source.calls(), 0);
    assert_eq!(notifier.len(), 1);
}

#[tokio::test]
async fn permission_denied_is_reported_with_location_stage() {
    let source = Arc::new(StaticFacilities::empty());
    let notifier = RecordingNotifier::new();
    let flow = discovery(
        Arc::new(ScriptedPosition::error(LocationError::PermissionDenied(
            "User denied Geolocation".into(),
        ))),
        Arc::clone(&source),
        &notifier,
    );

    let state = flow.run().await.unwrap();

    let error = state.error().cloned().unwrap();
    assert_eq!(error.stage(), Stage::Geolocation);
    assert!(error.to_string().starts_with("Failed to get location:"));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn position_timeout_fails_the_flow() {
    let position = Arc::new(ScriptedPosition::hang());
    let options = PositionOptions {
        timeout: Duration::from_millis(20),
        ..PositionOptions::default()
    };
    let source = Arc::new(StaticFacilities::empty());
    let notifier = RecordingNotifier::new();
    let flow = FacilityDiscovery::new(
        GeolocationProvider::with_options(position, options),
        source.clone(),
        Arc::new(notifier.clone()),
    );

    let state = flow.run().await.unwrap();

    assert_eq!(
        state,
        FlowState::Failed(FlowError::Location(LocationError::Timeout))
    );
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn query_status_error_fails_the_flow() {
    let notifier = RecordingNotifier::new();
    let flow = discovery(
        Arc::new(ScriptedPosition::fix(LAGOS.0, LAGOS.1)),
        Arc::new(StaticFacilities::error(QueryError::Status { status: 504 })),
        &notifier,
    );

    let state = flow.run().await.unwrap();

    assert_eq!(
        state,
        FlowState::Failed(FlowError::QueryTransport(
            "HTTP error! Status: 504".into()
        ))
    );
    assert!(matches!(notifier.events().as_slice(), [Event::FlowFailed(_)]));
}

#[tokio::test]
async fn configured_radius_reaches_the_query() {
    let source = Arc::new(StaticFacilities::empty());
    let notifier = RecordingNotifier::new();
    let flow = discovery(
        Arc::new(ScriptedPosition::fix(LAGOS.0, LAGOS.1)),
        Arc::clone(&source),
        &notifier,
    )
    .with_query(FacilityQueryBuilder::new(2_500));

    flow.run().await.unwrap();

    assert_eq!(source.last_query().unwrap().radius_m, 2_500);
    assert_eq!(
        notifier.events(),
        vec![Event::NoFacilitiesNearby { radius_m: 2_500 }]
    );
}

#[tokio::test]
async fn second_run_while_loading_is_refused() {
    let gate = Arc::new(Gate::new());
    let source = Arc::new(StaticFacilities::empty().gated(Arc::clone(&gate)));
    let notifier = RecordingNotifier::new();
    let flow = Arc::new(discovery(
        Arc::new(ScriptedPosition::fix(LAGOS.0, LAGOS.1)),
        Arc::clone(&source),
        &notifier,
    ));

    let task = tokio::spawn({
        let flow = Arc::clone(&flow);
        async move { flow.run().await }
    });
    gate.entered().await;

    assert!(flow.view().is_loading());
    assert_eq!(flow.run().await, Err(TransitionError::AlreadyLoading));

    gate.open();
    let state = task.await.unwrap().unwrap();
    assert!(matches!(state, FlowState::Success(_)));
    assert_eq!(source.calls(), 1);
    assert_eq!(notifier.len(), 1);
}

#[tokio::test]
async fn abandoned_run_is_discarded() {
    let gate = Arc::new(Gate::new());
    let source = Arc::new(
        StaticFacilities::elements(vec![node(1, 6.52, 3.37, &[("amenity", "hospital")])])
            .gated(Arc::clone(&gate)),
    );
    let notifier = RecordingNotifier::new();
    let flow = Arc::new(discovery(
        Arc::new(ScriptedPosition::fix(LAGOS.0, LAGOS.1)),
        source.clone(),
        &notifier,
    ));

    let task = tokio::spawn({
        let flow = Arc::clone(&flow);
        async move { flow.run().await }
    });
    gate.entered().await;
    flow.abandon();
    gate.open();

    let state = task.await.unwrap().unwrap();
    assert_eq!(state, FlowState::Idle);
    assert_eq!(flow.current(), FlowState::Idle);
    assert_eq!(source.calls(), 1);
    assert!(notifier.is_empty());
}

#[tokio::test]
async fn abandoned_at_geolocation_never_queries() {
    let gate = Arc::new(Gate::new());
    let position = Arc::new(ScriptedPosition::fix(LAGOS.0, LAGOS.1).gated(Arc::clone(&gate)));
    let source = Arc::new(StaticFacilities::elements(vec![node(
        1,
        6.52,
        3.37,
        &[("amenity", "hospital")],
    )]));
    let notifier = RecordingNotifier::new();
    let flow = Arc::new(discovery(position.clone(), source.clone(), &notifier));

    let task = tokio::spawn({
        let flow = Arc::clone(&flow);
        async move { flow.run().await }
    });
    gate.entered().await;
    flow.abandon();
    gate.open();

    let state = task.await.unwrap().unwrap();
    assert_eq!(state, FlowState::Idle);
    assert_eq!(position.requests(), 1);
    assert_eq!(source.calls(), 0);
    assert!(notifier.is_empty());
}

#[tokio::test]
async fn stale_response_cannot_overwrite_restarted_run() {
    let gate = Arc::new(Gate::new());
    let source = Arc::new(SequencedFacilities::new(vec![
        (
            Some(Arc::clone(&gate)),
            vec![node(1, 6.52, 3.37, &[("name", "Stale Clinic")])],
        ),
        (None, vec![node(2, 6.51, 3.36, &[("name", "Fresh Clinic")])]),
    ]));
    let notifier = RecordingNotifier::new();
    let flow = Arc::new(FacilityDiscovery::new(
        GeolocationProvider::new(Arc::new(ScriptedPosition::fix(LAGOS.0, LAGOS.1))),
        source.clone(),
        Arc::new(notifier.clone()),
    ));

    let stale = tokio::spawn({
        let flow = Arc::clone(&flow);
        async move { flow.run().await }
    });
    gate.entered().await;
    flow.abandon();

    let fresh = flow.run().await.unwrap();
    gate.open();
    stale.await.unwrap().unwrap();

    let names: Vec<_> = fresh
        .data()
        .unwrap()
        .facilities
        .iter()
        .map(|f| f.name.clone())
        .collect();
    assert_eq!(names, vec!["Fresh Clinic".to_string()]);
    assert_eq!(flow.current(), fresh);
    assert_eq!(source.calls(), 2);
    assert_eq!(
        notifier.events(),
        vec![Event::FacilitiesFound {
            count: 1,
            radius_m: 10_000
        }]
    );
}
