// src/probe/gate.rs
// =============================================================================
// The concurrency gate: a counting admission primitive that caps how many
// fetch workers can be doing network I/O at once.
//
// acquire() waits for a free slot and hands back a GateSlot. The slot is
// released when the GateSlot is dropped, so every exit path of the guarded
// section (success, early return, error, a dropped future) gives it back.
// Waiters are not guaranteed FIFO order.
// =============================================================================

use crate::error::{Error, Result};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

#[derive(Debug, Clone)]
pub struct ConcurrencyGate {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

// An occupied slot; dropping it frees the slot
#[derive(Debug)]
pub struct GateSlot {
    _permit: OwnedSemaphorePermit,
}

impl ConcurrencyGate {
    /// Creates a gate with `capacity` slots (callers validate capacity >= 1)
    pub fn new(capacity: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    pub async fn acquire(&self) -> Result<GateSlot> {
        let permit = Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .map_err(|_| Error::GateClosed)?;
        Ok(GateSlot { _permit: permit })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots free right now
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}
