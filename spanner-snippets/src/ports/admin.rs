use async_trait::async_trait;

use crate::context::ExecContext;
use crate::domain::CreateDatabaseRequest;
use crate::error::Result;

/// Control-plane operations on databases.
#[async_trait]
pub trait DatabaseAdmin: Send + Sync {
    /// Submits the request and returns the long-running operation tracking it.
    async fn create_database(
        &self,
        ctx: &ExecContext,
        request: CreateDatabaseRequest,
    ) -> Result<Box<dyn PendingOperation>>;
}

/// A submitted admin operation that completes asynchronously on the server.
#[async_trait]
pub trait PendingOperation: Send {
    fn name(&self) -> &str;

    /// Polls until the operation finishes. Fails if it finished with an error.
    async fn wait(&mut self, ctx: &ExecContext) -> Result<()>;
}
