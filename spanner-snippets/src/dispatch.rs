//! Resolves a command name and runs its handler.

use std::io::Write;

use tracing::{debug, error, warn};

use crate::commands::{Handler, Registry};
use crate::context::ExecContext;
use crate::error::{Result, SnippetsError};
use crate::ports::Clients;

pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    pub const fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs `command` to completion under the context deadline.
    ///
    /// Admin commands receive `database` verbatim; data commands only get the
    /// data client. On failure `<command> failed with <error>` is written to
    /// `out` and the handler's error is returned unchanged. An unknown name
    /// returns [`SnippetsError::UnknownCommand`] without touching `out`.
    pub async fn run(
        &self,
        ctx: &ExecContext,
        out: &mut (dyn Write + Send),
        clients: Clients<'_>,
        command: &str,
        database: &str,
    ) -> Result<()> {
        let handler = self
            .registry
            .get(command)
            .ok_or_else(|| SnippetsError::UnknownCommand(command.to_string()))?;

        debug!(command, admin = handler.is_admin(), "dispatching");
        let result = match handler {
            Handler::Admin(cmd) => ctx.bound(cmd.run(ctx, out, clients.admin, database)).await,
            Handler::Data(cmd) => ctx.bound(cmd.run(ctx, out, clients.data)).await,
        };

        if let Err(err) = &result {
            error!(command, error = %err, "command failed");
            if let Err(io) = writeln!(out, "{command} failed with {err}") {
                warn!(error = %io, "could not report failure");
            }
        }
        result
    }
}
