use std::io::Write;

use async_trait::async_trait;

use super::DataCommand;
use crate::context::ExecContext;
use crate::domain::Statement;
use crate::error::Result;
use crate::ports::DataClient;

const INSERT_SINGERS: &str = "INSERT Singers (SingerId, FirstName, LastName) VALUES
    (12, 'Melissa', 'Garcia'),
    (13, 'Russell', 'Morales'),
    (14, 'Jacqueline', 'Long'),
    (15, 'Dylan', 'Shaw')";

/// Inserts four singers with one DML statement in a read-write transaction.
pub struct WriteUsingDml;

#[async_trait]
impl DataCommand for WriteUsingDml {
    async fn run(
        &self,
        ctx: &ExecContext,
        out: &mut (dyn Write + Send),
        client: &dyn DataClient,
    ) -> Result<()> {
        let row_count = client
            .update_in_transaction(ctx, Statement::new(INSERT_SINGERS))
            .await?;
        writeln!(out, "{row_count} record(s) inserted.")?;
        Ok(())
    }
}
