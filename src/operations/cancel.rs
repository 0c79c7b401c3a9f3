use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Better11Error, Result};

/// Shared cancellation request, set from a Ctrl-C handler
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// `Err(Cancelled)` once cancellation was requested
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Better11Error::Cancelled)
        } else {
            Ok(())
        }
    }
}
