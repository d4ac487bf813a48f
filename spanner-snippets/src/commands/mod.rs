//! Command handlers and the name-to-handler registry.

use std::io::Write;

use async_trait::async_trait;

use crate::context::ExecContext;
use crate::error::Result;
use crate::ports::{DataClient, DatabaseAdmin};

mod create_database;
mod dml_write;
mod query;
mod registry;
mod write;

pub use create_database::CreateDatabase;
pub use dml_write::WriteUsingDml;
pub use query::QueryAlbums;
pub use registry::{Handler, Registry, RegistryBuilder};
pub use write::WriteMutations;

/// A command acting on a named database through the admin API.
#[async_trait]
pub trait AdminCommand: Send + Sync {
    async fn run(
        &self,
        ctx: &ExecContext,
        out: &mut (dyn Write + Send),
        admin: &dyn DatabaseAdmin,
        database: &str,
    ) -> Result<()>;
}

/// A command acting inside an existing database through the data API.
#[async_trait]
pub trait DataCommand: Send + Sync {
    async fn run(
        &self,
        ctx: &ExecContext,
        out: &mut (dyn Write + Send),
        client: &dyn DataClient,
    ) -> Result<()>;
}
