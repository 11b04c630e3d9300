//! Launch context for screen callers

use parking_lot::Mutex;

use crate::intent::Intent;

/// A single recorded for-result launch
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// The intent that was launched
    pub intent: Intent,
    /// The request code the caller attached
    pub request_code: i32,
}

/// The addressing and launch handle owned by a screen.
///
/// Generated `start` methods derive a context from their caller, build the
/// transport, and issue a for-result launch through it. Launches are
/// recorded rather than executed; the embedding host drains them via
/// [`Context::take_launches`] and routes them however it navigates.
#[derive(Debug, Default)]
pub struct Context {
    launches: Mutex<Vec<LaunchRecord>>,
}

impl Context {
    /// Create a fresh context with no recorded launches
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an intent addressed to `target` from this context
    pub fn new_intent(&self, target: impl Into<String>) -> Intent {
        Intent::new(target)
    }

    /// Record a for-result launch of `intent`
    pub fn start_for_result(&self, intent: Intent, request_code: i32) {
        tracing::debug!(launched = intent.target(), request_code, "for-result launch recorded");
        self.launches.lock().push(LaunchRecord {
            intent,
            request_code,
        });
    }

    /// Number of launches recorded so far
    pub fn launch_count(&self) -> usize {
        self.launches.lock().len()
    }

    /// The most recent launch, if any
    pub fn last_launch(&self) -> Option<LaunchRecord> {
        self.launches.lock().last().cloned()
    }

    /// Drain and return every recorded launch in order
    pub fn take_launches(&self) -> Vec<LaunchRecord> {
        std::mem::take(&mut *self.launches.lock())
    }
}
