//! Pure domain types shared by both flows.

pub mod coordinate;
pub mod error;
pub mod facility;
pub mod flow;
pub mod identity;
pub mod image;
pub mod query;
pub mod scan;

pub use coordinate::Coordinate;
pub use error::{
    FlowError, GeolocationError, IdentityError, LocationError, QueryError, SelectError,
    StageError, TransitionError, ValidationError,
};
pub use facility::{
    FacilityCategory, FacilityRecord, MarkerStyle, NearbyFacilities, RawCenter, RawFeature,
};
pub use flow::{FlowEvent, FlowState, Stage};
pub use identity::UploadIdentity;
pub use image::{ImageCandidate, SelectedImage};
pub use query::QuerySpec;
pub use scan::{PredictionResult, UploadResult};
