use std::io::Write;

use async_trait::async_trait;
use tracing::{debug, info};

use super::AdminCommand;
use crate::context::ExecContext;
use crate::domain::{CreateDatabaseRequest, DatabaseId};
use crate::error::Result;
use crate::ports::DatabaseAdmin;

/// Creates the database with the `Singers` and `Albums` tables.
pub struct CreateDatabase;

#[async_trait]
impl AdminCommand for CreateDatabase {
    async fn run(
        &self,
        ctx: &ExecContext,
        out: &mut (dyn Write + Send),
        admin: &dyn DatabaseAdmin,
        database: &str,
    ) -> Result<()> {
        let id = DatabaseId::parse(database)?;
        let request = CreateDatabaseRequest::with_sample_schema(&id);

        let mut op = admin.create_database(ctx, request).await?;
        debug!(operation = op.name(), "waiting for create database");
        op.wait(ctx).await?;

        info!(database = %id, "database created");
        writeln!(out, "Created database [{id}]")?;
        Ok(())
    }
}
