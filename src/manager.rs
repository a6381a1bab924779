use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, PartialEq)]
enum ManagerState {
    Progress { next: usize },
    Halted,
}

/// Hands out scanlines to render threads, one at a time.
pub struct Manager {
    rows: usize,
    state: ManagerState,
    cancel: Arc<AtomicBool>,
}

impl Manager {
    pub fn new(rows: usize, cancel: Arc<AtomicBool>) -> Self {
        Manager {
            rows,
            state: ManagerState::Progress { next: 0 },
            cancel,
        }
    }

    /// Next row to render, or `None` once all rows are handed out, the
    /// manager is halted or cancellation was requested.
    pub fn next(&mut self) -> Option<usize> {
        use ManagerState::*;
        if self.cancel.load(Ordering::SeqCst) {
            self.state = Halted;
        }
        match self.state {
            Halted => None,
            Progress { next } => {
                if next >= self.rows {
                    self.state = Halted;
                    None
                } else {
                    self.state = Progress { next: next + 1 };
                    Some(next)
                }
            }
        }
    }

    pub fn halt(&mut self) {
        self.state = ManagerState::Halted;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::SeqCst)
    }

    // poisoning is ignored, next() and halt() never leave the state torn
    pub fn lock(manager: &Mutex<Manager>) -> MutexGuard<'_, Manager> {
        match manager.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
