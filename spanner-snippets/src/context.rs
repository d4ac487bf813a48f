//! Execution context shared by every command and port call.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::{Result, SnippetsError};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const MAX_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

/// Carries the deadline for the whole invocation.
///
/// Created once at startup and passed by reference into the dispatcher,
/// every command, and every client call. Nothing downstream creates its own.
#[derive(Debug, Clone, Copy)]
pub struct ExecContext {
    deadline: Instant,
}

impl ExecContext {
    /// Deadline `timeout` from now, clamped to [`MAX_TIMEOUT`].
    pub fn with_timeout(timeout: Duration) -> Self {
        let now = Instant::now();
        Self {
            deadline: now + timeout.min(MAX_TIMEOUT),
        }
    }

    /// Deadline `timeout` after `start`. Fails if the sum is not representable.
    pub fn starting_at(start: Instant, timeout: Duration) -> Result<Self> {
        let deadline = start.checked_add(timeout).ok_or_else(|| {
            SnippetsError::Config(format!("timeout of {}s is too large", timeout.as_secs()))
        })?;
        Ok(Self { deadline })
    }

    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Runs `fut` until it completes or the deadline passes, whichever is first.
    pub async fn bound<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout_at(self.deadline, fut)
            .await
            .map_err(|_| SnippetsError::DeadlineExceeded)?
    }
}

impl Default for ExecContext {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }
}
