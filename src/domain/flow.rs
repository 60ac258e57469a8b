//! Flow lifecycle state machine.
//!
//! [`FlowState::next`] is the only place transitions are decided: it is a
//! total function of the current state and a [`FlowEvent`], returning
//! either the next state or the [`TransitionError`] that forbids it.
//!
//! | current \ event | Submit        | Resolve     | Fail   | Reset |
//! |-----------------|---------------|-------------|--------|-------|
//! | Idle            | Loading       | NotLoading  | Failed | Idle  |
//! | Loading         | AlreadyLoading| Success     | Failed | Idle  |
//! | Success         | Loading       | NotLoading  | Failed | Idle  |
//! | Failed          | Loading       | NotLoading  | Failed | Idle  |

use std::fmt;

use serde::Serialize;

use super::error::{FlowError, TransitionError};

/// The stage of a flow that produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Geolocation,
    Query,
    Identity,
    Validation,
    Upload,
    Prediction,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Geolocation => "geolocation",
            Self::Query => "query",
            Self::Identity => "identity",
            Self::Validation => "validation",
            Self::Upload => "upload",
            Self::Prediction => "prediction",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle phase of one flow instance.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState<T> {
    Idle,
    Loading,
    Success(T),
    Failed(FlowError),
}

impl<T> Default for FlowState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent<T> {
    /// A new submission starts.
    Submit,
    /// The in-flight submission completed.
    Resolve(T),
    /// A stage or precondition failed.
    Fail(FlowError),
    /// Explicit clear by the user, or abandonment of the flow.
    Reset,
}

impl<T> FlowState<T> {
    /// Compute the state that follows `event`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AlreadyLoading`] when a submission is
    /// attempted while one is in flight, and [`TransitionError::NotLoading`]
    /// when a resolution arrives with nothing in flight.
    pub fn next(&self, event: FlowEvent<T>) -> Result<FlowState<T>, TransitionError> {
        match (self, event) {
            (Self::Loading, FlowEvent::Submit) => Err(TransitionError::AlreadyLoading),
            (_, FlowEvent::Submit) => Ok(Self::Loading),
            (Self::Loading, FlowEvent::Resolve(payload)) => Ok(Self::Success(payload)),
            (_, FlowEvent::Resolve(_)) => Err(TransitionError::NotLoading),
            (_, FlowEvent::Fail(error)) => Ok(Self::Failed(error)),
            (_, FlowEvent::Reset) => Ok(Self::Idle),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The success payload, if any.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// The failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&FlowError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Short status name (`idle`, `loading`, `success`, `failed`).
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Failed(_) => "failed",
        }
    }
}
