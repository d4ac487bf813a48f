use std::io::Write;

use async_trait::async_trait;
use tracing::info;

use super::DataCommand;
use crate::context::ExecContext;
use crate::domain::{Mutation, Value};
use crate::error::Result;
use crate::ports::DataClient;

const SINGER_COLUMNS: [&str; 3] = ["SingerId", "FirstName", "LastName"];
const ALBUM_COLUMNS: [&str; 3] = ["SingerId", "AlbumId", "AlbumTitle"];

const SINGERS: [(i64, &str, &str); 5] = [
    (1, "Marc", "Richards"),
    (2, "Catalina", "Smith"),
    (3, "Alice", "Trentor"),
    (4, "Lea", "Martin"),
    (5, "David", "Lomond"),
];

const ALBUMS: [(i64, i64, &str); 5] = [
    (1, 1, "Total Junk"),
    (1, 2, "Go, Go, Go"),
    (2, 1, "Green"),
    (2, 2, "Forever Hold Your Peace"),
    (2, 3, "Terrified"),
];

/// Upserts the sample singers and albums in a single batch.
pub struct WriteMutations;

impl WriteMutations {
    pub fn mutations() -> Vec<Mutation> {
        let singers = SINGERS.iter().map(|&(id, first, last)| {
            Mutation::insert_or_update(
                "Singers",
                &SINGER_COLUMNS,
                vec![Value::from(id), first.into(), last.into()],
            )
        });
        let albums = ALBUMS.iter().map(|&(singer, album, title)| {
            Mutation::insert_or_update(
                "Albums",
                &ALBUM_COLUMNS,
                vec![Value::from(singer), Value::from(album), title.into()],
            )
        });
        singers.chain(albums).collect()
    }
}

#[async_trait]
impl DataCommand for WriteMutations {
    async fn run(
        &self,
        ctx: &ExecContext,
        _out: &mut (dyn Write + Send),
        client: &dyn DataClient,
    ) -> Result<()> {
        let mutations = Self::mutations();
        let count = mutations.len();
        client.apply(ctx, mutations).await?;
        info!(mutations = count, "mutations applied");
        Ok(())
    }
}
