//! Application core: the two orchestration flows and their stages.
//!
//! - [`discovery`] - geolocation, facility query, normalization
//! - [`diagnosis`] - identity, image validation, upload, prediction
//! - [`state`] - the per-flow state store with generation tokens

pub mod diagnosis;
pub mod discovery;
pub mod geolocation;
pub mod identity;
pub mod normalize;
pub mod query;
pub mod selection;
pub mod state;

pub use diagnosis::ImageDiagnosis;
pub use discovery::FacilityDiscovery;
pub use geolocation::GeolocationProvider;
pub use identity::IdentityResolver;
pub use normalize::normalize;
pub use query::{build_query, FacilityQueryBuilder, DEFAULT_RADIUS_M};
pub use selection::{validate, ImageSelection};
pub use state::{FlowStore, FlowView, Halt, Ticket};
