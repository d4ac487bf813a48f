//! Spy implementations of the ports and commands for unit tests.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::commands::{AdminCommand, DataCommand};
use crate::context::ExecContext;
use crate::domain::{ColumnKind, CreateDatabaseRequest, Mutation, Row, Statement};
use crate::error::{Result, SnippetsError};
use crate::ports::{DataClient, DatabaseAdmin, PendingOperation};

#[derive(Default)]
pub struct SpyAdmin {
    requests: Mutex<Vec<CreateDatabaseRequest>>,
    waits: Arc<AtomicUsize>,
    submit_error: Option<String>,
    wait_error: Option<String>,
}

impl SpyAdmin {
    pub fn failing_submit(msg: &str) -> Self {
        Self {
            submit_error: Some(msg.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_wait(msg: &str) -> Self {
        Self {
            wait_error: Some(msg.to_string()),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<CreateDatabaseRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn waits(&self) -> usize {
        self.waits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatabaseAdmin for SpyAdmin {
    async fn create_database(
        &self,
        _ctx: &ExecContext,
        request: CreateDatabaseRequest,
    ) -> Result<Box<dyn PendingOperation>> {
        if let Some(msg) = &self.submit_error {
            return Err(SnippetsError::Admin(msg.clone()));
        }
        let name = format!("{}/operations/spy", request.parent);
        self.requests.lock().unwrap().push(request);
        Ok(Box::new(SpyOperation {
            name,
            waits: Arc::clone(&self.waits),
            error: self.wait_error.clone(),
        }))
    }
}

struct SpyOperation {
    name: String,
    waits: Arc<AtomicUsize>,
    error: Option<String>,
}

#[async_trait]
impl PendingOperation for SpyOperation {
    fn name(&self) -> &str {
        &self.name
    }

    async fn wait(&mut self, _ctx: &ExecContext) -> Result<()> {
        self.waits.fetch_add(1, Ordering::SeqCst);
        self.error
            .clone()
            .map_or(Ok(()), |msg| Err(SnippetsError::Admin(msg)))
    }
}

#[derive(Default)]
pub struct SpyData {
    batches: Mutex<Vec<Vec<Mutation>>>,
    statements: Mutex<Vec<Statement>>,
    update_count: i64,
    rows: Vec<Row>,
    error: Option<String>,
}

impl SpyData {
    pub fn with_update_count(count: i64) -> Self {
        Self {
            update_count: count,
            ..Self::default()
        }
    }

    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            error: Some(msg.to_string()),
            ..Self::default()
        }
    }

    pub fn batches(&self) -> Vec<Vec<Mutation>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        self.error
            .clone()
            .map_or(Ok(()), |msg| Err(SnippetsError::Data(msg)))
    }
}

#[async_trait]
impl DataClient for SpyData {
    async fn apply(&self, _ctx: &ExecContext, mutations: Vec<Mutation>) -> Result<()> {
        self.check()?;
        self.batches.lock().unwrap().push(mutations);
        Ok(())
    }

    async fn update_in_transaction(&self, _ctx: &ExecContext, statement: Statement) -> Result<i64> {
        self.check()?;
        self.statements.lock().unwrap().push(statement);
        Ok(self.update_count)
    }

    async fn query(
        &self,
        _ctx: &ExecContext,
        statement: Statement,
        _columns: &[ColumnKind],
    ) -> Result<Vec<Row>> {
        self.check()?;
        self.statements.lock().unwrap().push(statement);
        Ok(self.rows.clone())
    }
}

pub struct SpyAdminCommand {
    calls: Arc<AtomicUsize>,
    targets: Arc<Mutex<Vec<String>>>,
}

impl SpyAdminCommand {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let cmd = Self {
            calls: Arc::clone(&calls),
            targets: Arc::default(),
        };
        (cmd, calls)
    }

    pub fn targets(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.targets)
    }
}

#[async_trait]
impl AdminCommand for SpyAdminCommand {
    async fn run(
        &self,
        _ctx: &ExecContext,
        _out: &mut (dyn Write + Send),
        _admin: &dyn DatabaseAdmin,
        database: &str,
    ) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.targets.lock().unwrap().push(database.to_string());
        Ok(())
    }
}

pub struct SpyDataCommand {
    calls: Arc<AtomicUsize>,
    error: Option<String>,
    hang: bool,
}

impl SpyDataCommand {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let cmd = Self {
            calls: Arc::clone(&calls),
            error: None,
            hang: false,
        };
        (cmd, calls)
    }

    pub fn failing(msg: &str) -> (Self, Arc<AtomicUsize>) {
        let (mut cmd, calls) = Self::new();
        cmd.error = Some(msg.to_string());
        (cmd, calls)
    }

    pub fn hanging() -> Self {
        let (mut cmd, _) = Self::new();
        cmd.hang = true;
        cmd
    }
}

#[async_trait]
impl DataCommand for SpyDataCommand {
    async fn run(
        &self,
        _ctx: &ExecContext,
        _out: &mut (dyn Write + Send),
        _client: &dyn DataClient,
    ) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hang {
            std::future::pending::<()>().await;
        }
        self.error
            .clone()
            .map_or(Ok(()), |msg| Err(SnippetsError::Data(msg)))
    }
}
