//! Offline oracle for runs without network access.

use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::BoxFuture;

use super::{ChatMessage, Oracle};
use crate::error::Result;

/// Answers every request with a numbered placeholder line.
///
/// Judge requests get no score tokens back, so dry-run score records are
/// empty.
#[derive(Debug, Default)]
pub struct DryRunOracle {
    calls: AtomicUsize,
}

impl DryRunOracle {
    /// Create a new dry-run oracle
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests answered so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Oracle for DryRunOracle {
    fn model(&self) -> &str {
        "dry-run"
    }

    fn complete(&self, messages: Vec<ChatMessage>) -> BoxFuture<'_, Result<String>> {
        let n = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        Box::pin(async move { Ok(format!("[dry-run reply {n} to {} message(s)]", messages.len())) })
    }
}
