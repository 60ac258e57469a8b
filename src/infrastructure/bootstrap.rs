//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::geolocation::{FixedPosition, IpGeolocation, NoGeolocation};
use crate::adapter::outbound::overpass::client::build_http;
use crate::adapter::outbound::overpass::OverpassClient;
use crate::adapter::outbound::scan::ScanClient;
use crate::application::{FacilityDiscovery, GeolocationProvider, IdentityResolver, ImageDiagnosis};
use crate::domain::Coordinate;
use crate::infrastructure::config::geolocation::GeolocationProvider as ProviderKind;
use crate::infrastructure::config::settings::Config;
use crate::port::{
    KeyValueStore, LogNotifier, Navigator, Notifier, NotifierRegistry, PositionSource,
};

/// Build notifier registry: the tracing log plus any presentation notifiers.
pub fn build_notifier_registry(extra: Vec<Box<dyn Notifier>>) -> NotifierRegistry {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));
    for notifier in extra {
        registry.register(notifier);
    }
    registry
}

/// Build the position source selected in configuration.
///
/// `Fixed` without coordinates never reaches here; validation rejects it.
pub fn build_position_source(config: &Config) -> Arc<dyn PositionSource> {
    let geolocation = &config.geolocation;
    let source: Arc<dyn PositionSource> = match geolocation.provider {
        ProviderKind::Ip => Arc::new(IpGeolocation::new(
            build_http(&config.http),
            geolocation.lookup_url.clone(),
        )),
        ProviderKind::Fixed => match (geolocation.latitude, geolocation.longitude) {
            (Some(lat), Some(lng)) => Arc::new(FixedPosition::new(Coordinate::new(lat, lng))),
            _ => Arc::new(NoGeolocation),
        },
        ProviderKind::Disabled => Arc::new(NoGeolocation),
    };
    info!(source = source.name(), "Position source initialized");
    source
}

/// Wire a facility discovery flow.
pub fn build_discovery(
    config: &Config,
    position: Arc<dyn PositionSource>,
    notifier: Arc<dyn Notifier>,
) -> FacilityDiscovery {
    let geolocation = GeolocationProvider::with_options(position, config.geolocation.options());
    let source = Arc::new(OverpassClient::from_config(&config.overpass, &config.http));
    FacilityDiscovery::new(geolocation, source, notifier)
        .with_query(config.overpass.query_builder())
}

/// Wire an image diagnosis flow. The identity is resolved here, once.
pub fn build_diagnosis(
    config: &Config,
    store: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
) -> ImageDiagnosis {
    let resolver = IdentityResolver::new(store);
    let backend = Arc::new(ScanClient::from_config(&config.backend, &config.http));
    ImageDiagnosis::new(&resolver, backend, navigator, notifier)
}
