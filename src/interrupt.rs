use std::sync::{Condvar, Mutex, PoisonError};
use std::time::Duration;

use instant::Instant;

use crate::parse::Disruption;

#[derive(Debug, Default)]
struct State {
    generation: u64,
    pending: bool,
}

/// A flag that cuts a simulated wait short
///
/// Share it between the waiting documents and whoever wants to disturb them,
/// usually through an `Arc`. A raise wakes every wait in progress. If nothing
/// is waiting, the raise is held for the next wait only. Once observed, the
/// flag is cleared again.
#[derive(Debug, Default)]
pub struct Interrupt {
    state: Mutex<State>,
    signal: Condvar,
}

impl Interrupt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.generation = state.generation.wrapping_add(1);
        state.pending = true;
        self.signal.notify_all();
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pending
    }

    /// Block for `latency`, returning early if the flag is raised
    pub(crate) fn wait(&self, latency: Duration) -> Result<(), Disruption> {
        let start = Instant::now();
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let entered = state.generation;
        let was_pending = state.pending;

        let mut state = if was_pending {
            state
        } else {
            self.signal
                .wait_timeout_while(state, latency, |state| state.generation == entered)
                .unwrap_or_else(PoisonError::into_inner)
                .0
        };

        // every waiter of a generation is disrupted, not only the first to wake
        if was_pending || state.generation != entered {
            state.pending = false;
            Err(Disruption::Interrupted {
                elapsed: start.elapsed(),
                latency,
            })
        } else {
            Ok(())
        }
    }
}
