//! Cooperative cancellation
//!
//! Extraction checks the flag between sentences and between ranking
//! iterations; nothing is interrupted mid-step.

use crate::errors::{Result, TextRankError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that asks a running extraction to stop
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a new, unraised flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Every clone observes it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Return [`TextRankError::Cancelled`] once the flag is raised
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(TextRankError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Check an optional flag
pub(crate) fn check(flag: Option<&CancelFlag>) -> Result<()> {
    flag.map_or(Ok(()), CancelFlag::check)
}
