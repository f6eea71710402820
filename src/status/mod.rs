//! Status sink - bounded in-memory progress/fault text log

pub mod logger;

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::RwLock;

/// Thread-safe, bounded text log. Experiments write human-readable progress
/// and fault lines here; a display layer (or the demo binary) decides how to
/// render them. Oldest entries are evicted once the bound is reached.
#[derive(Clone)]
pub struct StatusLog {
    entries: Arc<RwLock<VecDeque<String>>>,
    max_size: usize,
}

impl StatusLog {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(max_size))),
            max_size,
        }
    }

    pub fn write(&self, message: String) {
        let mut log = self.entries.write();
        log.push_back(message);
        if log.len() > self.max_size {
            log.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// The most recent `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> Vec<String> {
        let log = self.entries.read();
        log.iter().rev().take(n).rev().cloned().collect()
    }
}
