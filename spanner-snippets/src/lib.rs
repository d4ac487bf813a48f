//! # spanner-snippets
//!
//! Small, runnable Cloud Spanner examples behind a name-keyed command registry.
//!
//! ## Example
//!
//! ```no_run
//! use spanner_snippets::{Clients, Dispatcher, ExecContext, Registry};
//! # async fn demo(clients: Clients<'_>) -> spanner_snippets::Result<()> {
//! let ctx = ExecContext::default();
//! let dispatcher = Dispatcher::new(Registry::standard());
//! let mut out = std::io::stdout();
//! dispatcher
//!     .run(&ctx, &mut out, clients, "write", "projects/p/instances/i/databases/example-db")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod commands;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
mod testing;

pub use commands::{Handler, Registry};
pub use config::Config;
pub use context::ExecContext;
pub use dispatch::Dispatcher;
pub use error::{Result, SnippetsError};
pub use ports::Clients;
