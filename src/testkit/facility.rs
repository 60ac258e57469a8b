//! Scripted geospatial query backends.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::Gate;
use crate::domain::{QueryError, QuerySpec, RawFeature};
use crate::port::FacilitySource;

/// Query backend with a fixed response that records the queries it gets.
#[derive(Debug)]
pub struct StaticFacilities {
    response: Result<Vec<RawFeature>, QueryError>,
    queries: Mutex<Vec<QuerySpec>>,
    gate: Option<Arc<Gate>>,
}

impl StaticFacilities {
    /// Answer every query with `elements`.
    #[must_use]
    pub fn elements(elements: Vec<RawFeature>) -> Self {
        Self {
            response: Ok(elements),
            queries: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Answer every query with zero elements.
    #[must_use]
    pub fn empty() -> Self {
        Self::elements(Vec::new())
    }

    /// Fail every query with `error`.
    #[must_use]
    pub fn error(error: QueryError) -> Self {
        Self {
            response: Err(error),
            queries: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Park every query at `gate` before answering.
    #[must_use]
    pub fn gated(mut self, gate: Arc<Gate>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Number of queries received.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.queries.lock().len()
    }

    /// The most recent query, if any.
    #[must_use]
    pub fn last_query(&self) -> Option<QuerySpec> {
        self.queries.lock().last().cloned()
    }
}

#[async_trait]
impl FacilitySource for StaticFacilities {
    async fn fetch(&self, query: &QuerySpec) -> Result<Vec<RawFeature>, QueryError> {
        self.queries.lock().push(query.clone());
        if let Some(gate) = &self.gate {
            gate.pass().await;
        }
        self.response.clone()
    }
}

/// Query backend whose response changes per call, for restart scenarios.
#[derive(Debug)]
pub struct SequencedFacilities {
    responses: Vec<(Option<Arc<Gate>>, Vec<RawFeature>)>,
    calls: AtomicUsize,
}

impl SequencedFacilities {
    /// The n-th call answers with the n-th entry, parking at its gate
    /// first when one is given. Calls past the end answer empty.
    #[must_use]
    pub fn new(responses: Vec<(Option<Arc<Gate>>, Vec<RawFeature>)>) -> Self {
        Self {
            responses,
            calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FacilitySource for SequencedFacilities {
    async fn fetch(&self, _query: &QuerySpec) -> Result<Vec<RawFeature>, QueryError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        let Some((gate, elements)) = self.responses.get(index) else {
            return Ok(Vec::new());
        };
        if let Some(gate) = gate {
            gate.pass().await;
        }
        Ok(elements.clone())
    }
}
