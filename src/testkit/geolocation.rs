//! Scripted position source.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use super::Gate;
use crate::domain::{Coordinate, LocationError};
use crate::port::{PositionOptions, PositionSource};

#[derive(Debug, Clone)]
enum Script {
    Fix(Coordinate),
    Error(LocationError),
    Hang,
    Unavailable,
}

/// Position source returning a scripted answer and counting requests.
#[derive(Debug)]
pub struct ScriptedPosition {
    script: Script,
    requests: AtomicUsize,
    gate: Option<Arc<Gate>>,
}

impl ScriptedPosition {
    fn new(script: Script) -> Self {
        Self {
            script,
            requests: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Always answers with this fix.
    #[must_use]
    pub fn fix(lat: f64, lng: f64) -> Self {
        Self::new(Script::Fix(Coordinate::new(lat, lng)))
    }

    /// Always fails with `error`.
    #[must_use]
    pub fn error(error: LocationError) -> Self {
        Self::new(Script::Error(error))
    }

    /// Never answers.
    #[must_use]
    pub fn hang() -> Self {
        Self::new(Script::Hang)
    }

    /// Reports no geolocation capability.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(Script::Unavailable)
    }

    /// Park every request at `gate` before answering.
    #[must_use]
    pub fn gated(mut self, gate: Arc<Gate>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Number of position requests received.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PositionSource for ScriptedPosition {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        !matches!(self.script, Script::Unavailable)
    }

    async fn request_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinate, LocationError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.pass().await;
        }
        match &self.script {
            Script::Fix(coordinate) => Ok(*coordinate),
            Script::Error(error) => Err(error.clone()),
            Script::Hang => std::future::pending().await,
            Script::Unavailable => Err(LocationError::PositionUnavailable(
                "no geolocation capability".into(),
            )),
        }
    }
}
