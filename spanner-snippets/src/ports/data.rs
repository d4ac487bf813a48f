use async_trait::async_trait;

use crate::context::ExecContext;
use crate::domain::{ColumnKind, Mutation, Row, Statement};
use crate::error::Result;

/// Data-plane access to a single database.
#[async_trait]
pub trait DataClient: Send + Sync {
    /// Applies all mutations atomically in one commit.
    async fn apply(&self, ctx: &ExecContext, mutations: Vec<Mutation>) -> Result<()>;

    /// Runs a DML statement inside a read-write transaction and commits it.
    /// Returns the number of affected rows.
    async fn update_in_transaction(&self, ctx: &ExecContext, statement: Statement) -> Result<i64>;

    /// Runs a query in a single-use read-only transaction, decoding each
    /// column as the matching entry of `columns`.
    async fn query(
        &self,
        ctx: &ExecContext,
        statement: Statement,
        columns: &[ColumnKind],
    ) -> Result<Vec<Row>>;
}
