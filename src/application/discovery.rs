//! Facility discovery flow.
//!
//! Geolocation -> query -> normalize, reduced into a [`FlowStore`]. Each
//! run publishes exactly one notification: facilities found, the
//! zero-result advisory, or the failure.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::geolocation::GeolocationProvider;
use super::normalize::normalize;
use super::query::FacilityQueryBuilder;
use super::state::{FlowStore, FlowView, Halt, Ticket};
use crate::domain::{FlowError, FlowState, NearbyFacilities, TransitionError};
use crate::port::{Event, FacilitySource, Notifier};

/// One facility discovery flow instance.
pub struct FacilityDiscovery {
    geolocation: GeolocationProvider,
    source: Arc<dyn FacilitySource>,
    query: FacilityQueryBuilder,
    notifier: Arc<dyn Notifier>,
    store: FlowStore<NearbyFacilities>,
}

impl FacilityDiscovery {
    /// Create a flow with the default query (10 km radius).
    #[must_use]
    pub fn new(
        geolocation: GeolocationProvider,
        source: Arc<dyn FacilitySource>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            geolocation,
            source,
            query: FacilityQueryBuilder::default(),
            notifier,
            store: FlowStore::new(),
        }
    }

    /// Replace the query builder (radius, server timeout).
    #[must_use]
    pub fn with_query(mut self, query: FacilityQueryBuilder) -> Self {
        self.query = query;
        self
    }

    /// Read-only state for presentation.
    #[must_use]
    pub fn view(&self) -> FlowView<NearbyFacilities> {
        self.store.view()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> FlowState<NearbyFacilities> {
        self.store.current()
    }

    /// Abandon any in-flight discovery and return to `Idle`. A response
    /// that arrives later is discarded.
    pub fn abandon(&self) {
        let generation = self.store.reset();
        info!(generation, "Discovery abandoned");
    }

    /// Run one discovery.
    ///
    /// Returns the state after the run. When the run is abandoned while
    /// suspended, it stops before its next stage, its outcome is dropped
    /// and the returned state is whatever the store holds.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AlreadyLoading`] if a discovery is
    /// already in flight.
    #[instrument(skip(self), fields(radius_m = self.query.radius_m()))]
    pub async fn run(&self) -> Result<FlowState<NearbyFacilities>, TransitionError> {
        let ticket = self.store.begin()?;
        info!(generation = ticket.generation(), "Discovering nearby eye care facilities");

        let outcome = match self.discover(ticket).await {
            Ok(nearby) => Ok(nearby),
            Err(Halt::Failed(err)) => Err(err),
            Err(Halt::Superseded) => return Ok(self.store.current()),
        };
        let event = match &outcome {
            Ok(nearby) if nearby.is_empty() => Event::NoFacilitiesNearby {
                radius_m: nearby.radius_m,
            },
            Ok(nearby) => Event::FacilitiesFound {
                count: nearby.len(),
                radius_m: nearby.radius_m,
            },
            Err(err) => {
                warn!(stage = %err.stage(), error = %err, "Discovery failed");
                Event::FlowFailed(err.clone())
            }
        };

        if self.store.settle(ticket, outcome) {
            self.notifier.notify(event);
        }
        Ok(self.store.current())
    }

    async fn discover(&self, ticket: Ticket) -> Result<NearbyFacilities, Halt> {
        let origin = self
            .geolocation
            .acquire()
            .await
            .map_err(FlowError::from)?;
        self.store.checkpoint(ticket)?;

        let query = self.query.build(origin);
        let raw = self.source.fetch(&query).await.map_err(FlowError::from)?;
        let facilities = normalize(&raw);

        info!(
            raw = raw.len(),
            facilities = facilities.len(),
            "Facility query completed"
        );
        Ok(NearbyFacilities {
            origin,
            radius_m: query.radius_m,
            facilities,
        })
    }
}
