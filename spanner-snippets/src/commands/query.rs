use std::io::Write;

use async_trait::async_trait;

use super::DataCommand;
use crate::context::ExecContext;
use crate::domain::{ColumnKind, Statement};
use crate::error::Result;
use crate::ports::DataClient;

const SELECT_ALBUMS: &str = "SELECT SingerId, AlbumId, AlbumTitle FROM Albums";
const ALBUM_COLUMNS: [ColumnKind; 3] = [
    ColumnKind::Int64,
    ColumnKind::Int64,
    ColumnKind::String,
];

/// Prints every album as `<singer id> <album id> <title>`.
pub struct QueryAlbums;

#[async_trait]
impl DataCommand for QueryAlbums {
    async fn run(
        &self,
        ctx: &ExecContext,
        out: &mut (dyn Write + Send),
        client: &dyn DataClient,
    ) -> Result<()> {
        let rows = client
            .query(ctx, Statement::new(SELECT_ALBUMS), &ALBUM_COLUMNS)
            .await?;

        for row in rows {
            let line = row
                .values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
