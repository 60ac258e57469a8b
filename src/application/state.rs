//! UI state store: one mutable cell per flow.
//!
//! The store owns the flow's [`FlowState`] and a monotonic generation
//! counter. Every submission and every reset advances the generation, and
//! a submission's [`Ticket`] remembers the generation it started in. A
//! resolution whose ticket no longer matches is discarded, so a response
//! from an abandoned submission can never overwrite fresher state.
//!
//! Presentation code gets a read-only [`FlowView`].

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::domain::{FlowError, FlowEvent, FlowState, TransitionError};

#[derive(Debug)]
struct Cell<T> {
    generation: u64,
    state: FlowState<T>,
}

/// Proof that a submission was started, tied to its generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Why a submission stopped before reaching `settle`.
#[derive(Debug, Clone, PartialEq)]
pub enum Halt {
    /// A stage failed; the flow settles into `Failed`.
    Failed(FlowError),
    /// The ticket went stale between stages; nothing is settled.
    Superseded,
}

impl From<FlowError> for Halt {
    fn from(error: FlowError) -> Self {
        Self::Failed(error)
    }
}

/// Mutable state cell for one flow instance.
#[derive(Debug)]
pub struct FlowStore<T> {
    cell: Arc<RwLock<Cell<T>>>,
}

impl<T> Clone for FlowStore<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> Default for FlowStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FlowStore<T> {
    /// Create a store in [`FlowState::Idle`] at generation 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cell: Arc::new(RwLock::new(Cell {
                generation: 0,
                state: FlowState::Idle,
            })),
        }
    }

    /// Current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.cell.read().generation
    }

    /// True while a submission is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.cell.read().state.is_loading()
    }

    /// True while `ticket` still owns the in-flight submission.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        let cell = self.cell.read();
        cell.generation == ticket.generation && cell.state.is_loading()
    }

    /// Stop a submission whose ticket went stale before its next stage.
    ///
    /// # Errors
    ///
    /// Returns [`Halt::Superseded`] when `ticket` no longer owns the
    /// in-flight submission.
    pub fn checkpoint(&self, ticket: Ticket) -> Result<(), Halt> {
        if self.is_current(ticket) {
            return Ok(());
        }
        debug!(
            ticket = ticket.generation,
            current = self.generation(),
            "Submission superseded between stages"
        );
        Err(Halt::Superseded)
    }

    /// Read-only handle for presentation code.
    #[must_use]
    pub fn view(&self) -> FlowView<T> {
        FlowView {
            cell: Arc::clone(&self.cell),
        }
    }

    /// Start a submission: `Idle | Success | Failed -> Loading`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AlreadyLoading`] if a submission is
    /// already in flight.
    pub fn begin(&self) -> Result<Ticket, TransitionError> {
        let mut cell = self.cell.write();
        cell.state = cell.state.next(FlowEvent::Submit)?;
        cell.generation += 1;
        Ok(Ticket {
            generation: cell.generation,
        })
    }

    /// Settle the submission owned by `ticket` with its outcome.
    ///
    /// Returns `false` without touching the state when the ticket is stale
    /// (the flow was reset or resubmitted since) or already settled.
    pub fn settle(&self, ticket: Ticket, outcome: Result<T, FlowError>) -> bool {
        let mut cell = self.cell.write();
        if cell.generation != ticket.generation || !cell.state.is_loading() {
            debug!(
                ticket = ticket.generation,
                current = cell.generation,
                "Discarding stale resolution"
            );
            return false;
        }

        let event = match outcome {
            Ok(payload) => FlowEvent::Resolve(payload),
            Err(error) => FlowEvent::Fail(error),
        };
        match cell.state.next(event) {
            Ok(next) => {
                cell.state = next;
                true
            }
            Err(err) => {
                warn!(error = %err, "Rejected settle transition");
                false
            }
        }
    }

    /// Record a precondition failure that happened before any submission.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AlreadyLoading`] if a submission is in
    /// flight; the in-flight submission owns the state until it settles.
    pub fn reject(&self, error: FlowError) -> Result<(), TransitionError> {
        let mut cell = self.cell.write();
        if cell.state.is_loading() {
            return Err(TransitionError::AlreadyLoading);
        }
        cell.state = cell.state.next(FlowEvent::Fail(error))?;
        Ok(())
    }

    /// Return to `Idle` and advance the generation, orphaning any
    /// in-flight submission. Returns the new generation.
    pub fn reset(&self) -> u64 {
        let mut cell = self.cell.write();
        cell.generation += 1;
        cell.state = FlowState::Idle;
        cell.generation
    }
}

impl<T: Clone> FlowStore<T> {
    /// Snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> FlowState<T> {
        self.cell.read().state.clone()
    }
}

/// Read-only view of a [`FlowStore`].
#[derive(Debug)]
pub struct FlowView<T> {
    cell: Arc<RwLock<Cell<T>>>,
}

impl<T> Clone for FlowView<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> FlowView<T> {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.cell.read().generation
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.cell.read().state.is_loading()
    }
}

impl<T: Clone> FlowView<T> {
    /// Snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> FlowState<T> {
        self.cell.read().state.clone()
    }
}
