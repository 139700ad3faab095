//! Scriptable in-memory driver for exercising the adapter without a live
//! Vertica instance. Enabled with the `test-utils` feature.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::ConnectionParams;
use crate::driver::{Driver, DriverError, ErrorKind, NativeConnection, NativeCursor};
use crate::types::{Row, SqlValue};

/// One scripted statement outcome.
#[derive(Debug, Clone)]
pub struct MockResult {
    pub rows: Vec<Row>,
    pub row_count: i64,
}

#[derive(Debug, Default)]
struct ScriptState {
    responses: VecDeque<Result<MockResult, DriverError>>,
    executed: Vec<(String, Vec<Vec<SqlValue>>)>,
    connect_params: Vec<ConnectionParams>,
}

/// Shared script: queued statement outcomes plus a log of everything the
/// adapter sent down. Statements with no queued outcome succeed with an
/// empty result set and an unknown row count.
#[derive(Debug, Clone, Default)]
pub struct MockScript {
    inner: Arc<Mutex<ScriptState>>,
}

impl MockScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result set; the row count mirrors the number of rows.
    pub fn push_rows(&self, rows: Vec<Row>) {
        let row_count = rows.len() as i64;
        self.push_result(MockResult { rows, row_count });
    }

    pub fn push_result(&self, result: MockResult) {
        self.lock().responses.push_back(Ok(result));
    }

    pub fn push_error(&self, kind: ErrorKind, message: &str) {
        self.lock()
            .responses
            .push_back(Err(DriverError::new(kind, message)));
    }

    /// Every statement executed so far, with its parameter sets. A plain
    /// execute is logged as a single set.
    pub fn executed(&self) -> Vec<(String, Vec<Vec<SqlValue>>)> {
        self.lock().executed.clone()
    }

    pub fn connect_params(&self) -> Vec<ConnectionParams> {
        self.lock().connect_params.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptState> {
        self.inner.lock().expect("mock script lock poisoned")
    }

    fn record(&self, sql: &str, param_sets: Vec<Vec<SqlValue>>) {
        self.lock().executed.push((sql.to_string(), param_sets));
    }

    fn take_response(&self) -> Result<MockResult, DriverError> {
        self.lock().responses.pop_front().unwrap_or(Ok(MockResult {
            rows: Vec::new(),
            row_count: -1,
        }))
    }
}

#[derive(Debug, Default)]
pub struct MockDriver {
    pub script: MockScript,
    /// When set, connect fails with this error instead of succeeding.
    pub fail_connect: Option<DriverError>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(script: MockScript) -> Self {
        Self {
            script,
            fail_connect: None,
        }
    }
}

#[async_trait]
impl Driver for MockDriver {
    type Connection = MockConnection;

    async fn connect(&self, params: &ConnectionParams) -> Result<MockConnection, DriverError> {
        self.script.lock().connect_params.push(params.clone());
        if let Some(err) = &self.fail_connect {
            return Err(err.clone());
        }
        Ok(MockConnection {
            script: self.script.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct MockConnection {
    script: MockScript,
}

#[async_trait]
impl NativeConnection for MockConnection {
    type Cursor = MockCursor;

    async fn cursor(&self) -> Result<MockCursor, DriverError> {
        Ok(MockCursor {
            script: self.script.clone(),
            pending: VecDeque::new(),
            row_count: -1,
        })
    }
}

#[derive(Debug)]
pub struct MockCursor {
    script: MockScript,
    pending: VecDeque<Row>,
    row_count: i64,
}

impl MockCursor {
    fn apply(&mut self, result: MockResult) {
        self.pending = result.rows.into();
        self.row_count = result.row_count;
    }
}

#[async_trait]
impl NativeCursor for MockCursor {
    async fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<(), DriverError> {
        self.script.record(sql, vec![params.to_vec()]);
        let result = self.script.take_response()?;
        self.apply(result);
        Ok(())
    }

    async fn execute_many(
        &mut self,
        sql: &str,
        param_sets: &[Vec<SqlValue>],
    ) -> Result<(), DriverError> {
        self.script.record(sql, param_sets.to_vec());
        let result = self.script.take_response()?;
        self.apply(result);
        Ok(())
    }

    async fn fetch_one(&mut self) -> Result<Option<Row>, DriverError> {
        Ok(self.pending.pop_front())
    }

    async fn fetch_many(&mut self, size: usize) -> Result<Vec<Row>, DriverError> {
        let take = size.min(self.pending.len());
        Ok(self.pending.drain(..take).collect())
    }

    async fn fetch_all(&mut self) -> Result<Vec<Row>, DriverError> {
        Ok(self.pending.drain(..).collect())
    }

    fn row_count(&self) -> i64 {
        self.row_count
    }
}
