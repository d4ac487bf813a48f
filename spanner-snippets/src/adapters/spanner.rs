//! Ports implemented with the `google-cloud-spanner` SDK.
//!
//! When `SPANNER_EMULATOR_HOST` is set the SDK talks to the emulator and no
//! credentials are loaded.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use google_cloud_googleapis::spanner::admin::database::v1::CreateDatabaseRequest as CreateDatabaseProto;
use google_cloud_spanner::admin::AdminClientConfig;
use google_cloud_spanner::admin::client::Client as AdminClient;
use google_cloud_spanner::client::{Client, ClientConfig, Error as ClientError};
use google_cloud_spanner::mutation;
use google_cloud_spanner::reader::AsyncIterator;
use google_cloud_spanner::statement::{Statement as SdkStatement, ToKind};
use tracing::{debug, info};

use crate::context::ExecContext;
use crate::domain::{ColumnKind, CreateDatabaseRequest, Mutation, MutationOp, Row, Statement, Value};
use crate::error::{Result, SnippetsError};
use crate::ports::{Clients, DataClient, DatabaseAdmin, PendingOperation};

const EMULATOR_ENV: &str = "SPANNER_EMULATOR_HOST";

type WaitFuture = Pin<Box<dyn Future<Output = Result<()>> + Send>>;

fn admin_err(e: impl std::fmt::Display) -> SnippetsError {
    SnippetsError::Admin(e.to_string())
}

fn data_err(e: impl std::fmt::Display) -> SnippetsError {
    SnippetsError::Data(e.to_string())
}

fn use_emulator() -> bool {
    std::env::var_os(EMULATOR_ENV).is_some()
}

/// Both client handles for one database. Call [`SpannerClients::close`] when done.
pub struct SpannerClients {
    admin: SpannerAdmin,
    data: SpannerData,
}

impl SpannerClients {
    pub async fn connect(ctx: &ExecContext, database: &str) -> Result<Self> {
        let emulator = use_emulator();
        debug!(database, emulator, "creating spanner clients");

        let admin = ctx
            .bound(async {
                let config = if emulator {
                    AdminClientConfig::default()
                } else {
                    AdminClientConfig::default().with_auth().await.map_err(admin_err)?
                };
                AdminClient::new(config).await.map_err(admin_err)
            })
            .await?;

        let client = ctx
            .bound(async {
                let config = if emulator {
                    ClientConfig::default()
                } else {
                    ClientConfig::default().with_auth().await.map_err(data_err)?
                };
                Client::new(database, config).await.map_err(data_err)
            })
            .await?;

        Ok(Self {
            admin: SpannerAdmin { client: admin },
            data: SpannerData { client },
        })
    }

    pub fn clients(&self) -> Clients<'_> {
        Clients::new(&self.admin, &self.data)
    }

    /// Releases the session pool. The admin client holds no server-side state.
    pub async fn close(self) {
        self.data.client.close().await;
        debug!("spanner clients closed");
    }
}

struct SpannerAdmin {
    client: AdminClient,
}

#[async_trait]
impl DatabaseAdmin for SpannerAdmin {
    async fn create_database(
        &self,
        ctx: &ExecContext,
        request: CreateDatabaseRequest,
    ) -> Result<Box<dyn PendingOperation>> {
        let name = format!("create {}", request.create_statement);
        let proto = CreateDatabaseProto {
            parent: request.parent,
            create_statement: request.create_statement,
            extra_statements: request.extra_statements,
            ..Default::default()
        };

        let mut op = ctx
            .bound(async {
                self.client
                    .database()
                    .create_database(proto, None)
                    .await
                    .map_err(admin_err)
            })
            .await?;
        info!(operation = %name, "create database submitted");

        let wait: WaitFuture = Box::pin(async move {
            op.wait(None).await.map_err(admin_err)?;
            Ok(())
        });
        Ok(Box::new(SpannerOperation {
            name,
            wait: Some(wait),
        }))
    }
}

struct SpannerOperation {
    name: String,
    wait: Option<WaitFuture>,
}

#[async_trait]
impl PendingOperation for SpannerOperation {
    fn name(&self) -> &str {
        &self.name
    }

    async fn wait(&mut self, ctx: &ExecContext) -> Result<()> {
        match self.wait.take() {
            Some(fut) => ctx.bound(fut).await,
            None => Ok(()),
        }
    }
}

struct SpannerData {
    client: Client,
}

#[async_trait]
impl DataClient for SpannerData {
    async fn apply(&self, ctx: &ExecContext, mutations: Vec<Mutation>) -> Result<()> {
        let batch: Vec<_> = mutations
            .iter()
            .map(|m| {
                let columns: Vec<&str> = m.columns.iter().map(String::as_str).collect();
                let values: Vec<&dyn ToKind> = m
                    .values
                    .iter()
                    .map(|v| match v {
                        Value::Int64(n) => n as &dyn ToKind,
                        Value::String(s) => s as &dyn ToKind,
                    })
                    .collect();
                match m.op {
                    MutationOp::InsertOrUpdate => {
                        mutation::insert_or_update(&m.table, &columns, &values)
                    }
                }
            })
            .collect();
        ctx.bound(async {
            self.client.apply(batch).await.map_err(data_err)?;
            Ok(())
        })
        .await
    }

    async fn update_in_transaction(&self, ctx: &ExecContext, statement: Statement) -> Result<i64> {
        let sql = statement.sql;
        ctx.bound(async {
            let result: std::result::Result<(_, i64), ClientError> = self
                .client
                .read_write_transaction(|tx| {
                    let stmt = SdkStatement::new(sql.clone());
                    Box::pin(async move { Ok(tx.update(stmt).await?) })
                })
                .await;
            let (_, row_count) = result.map_err(data_err)?;
            Ok(row_count)
        })
        .await
    }

    async fn query(
        &self,
        ctx: &ExecContext,
        statement: Statement,
        columns: &[ColumnKind],
    ) -> Result<Vec<Row>> {
        ctx.bound(async {
            let mut tx = self.client.single().await.map_err(data_err)?;
            let mut iter = tx
                .query(SdkStatement::new(statement.sql))
                .await
                .map_err(data_err)?;

            let mut rows = Vec::new();
            while let Some(row) = iter.next().await.map_err(data_err)? {
                let mut values = Vec::with_capacity(columns.len());
                for (idx, kind) in columns.iter().enumerate() {
                    let value = match kind {
                        ColumnKind::Int64 => {
                            Value::Int64(row.column::<i64>(idx).map_err(data_err)?)
                        }
                        ColumnKind::String => {
                            Value::String(row.column::<String>(idx).map_err(data_err)?)
                        }
                    };
                    values.push(value);
                }
                rows.push(Row::new(values));
            }
            Ok(rows)
        })
        .await
    }
}
