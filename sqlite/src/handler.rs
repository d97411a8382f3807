//! rusqlite-backed handler

use crate::helpers;
use db_actions_core::{
    Applied, BatchHandler, Handler, Operation, Result, Row, Uri, Value, ValueMap, action_trace,
};
use rusqlite::Connection;

/// Executes actions against a SQLite database through `rusqlite`.
///
/// The target table is the last path segment of the action's URI
/// (`content://notes/items` and plain `items` both address the `items`
/// table). Query results are materialized into owned [`Row`]s, so they
/// outlive the statement that produced them.
#[derive(Debug)]
pub struct SqliteHandler {
    conn: Connection,
}

impl SqliteHandler {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Handler over a fresh in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Connection::open_in_memory()?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn into_connection(self) -> Connection {
        self.conn
    }

    fn execute(&self, sql: &str, values: &ValueMap, args: Option<&[String]>) -> Result<usize> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut index = 1;
        for (_, value) in values.iter() {
            stmt.raw_bind_parameter(index, value)?;
            index += 1;
        }
        for arg in args.unwrap_or_default() {
            stmt.raw_bind_parameter(index, arg)?;
            index += 1;
        }
        Ok(stmt.raw_execute()?)
    }
}

impl From<Connection> for SqliteHandler {
    fn from(conn: Connection) -> Self {
        Self::new(conn)
    }
}

impl Handler for SqliteHandler {
    type Rows = Vec<Row>;

    fn query(
        &self,
        uri: &Uri,
        projection: Option<&[String]>,
        selection: Option<&str>,
        args: Option<&[String]>,
        order_by: Option<&str>,
    ) -> Result<Vec<Row>> {
        let table = helpers::table_name(uri)?;
        let sql = helpers::select_sql(table, projection, selection, order_by);
        action_trace!("query", uri, sql);

        let mut stmt = self.conn.prepare(&sql)?;
        for (idx, arg) in args.unwrap_or_default().iter().enumerate() {
            stmt.raw_bind_parameter(idx + 1, arg)?;
        }
        let columns: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();

        let mut rows = stmt.raw_query();
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record = Row::new();
            for (idx, column) in columns.iter().enumerate() {
                record.set(column.clone(), Value::from(row.get_ref(idx)?));
            }
            out.push(record);
        }
        Ok(out)
    }

    fn insert(&self, uri: &Uri, values: &ValueMap) -> Result<i64> {
        let table = helpers::table_name(uri)?;
        let sql = helpers::insert_sql(table, values);
        action_trace!("insert", uri, sql);

        self.execute(&sql, values, None)?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update(
        &self,
        uri: &Uri,
        values: &ValueMap,
        selection: Option<&str>,
        args: Option<&[String]>,
    ) -> Result<usize> {
        let table = helpers::table_name(uri)?;
        let sql = helpers::update_sql(table, values, selection)?;
        action_trace!("update", uri, sql);

        self.execute(&sql, values, args)
    }

    fn delete(&self, uri: &Uri, selection: Option<&str>, args: Option<&[String]>) -> Result<usize> {
        let table = helpers::table_name(uri)?;
        let sql = helpers::delete_sql(table, selection);
        action_trace!("delete", uri, sql);

        self.execute(&sql, &ValueMap::new(), args)
    }
}

impl BatchHandler for SqliteHandler {
    /// Applies the whole sequence inside one transaction. Any failure rolls
    /// back every earlier operation in the batch.
    fn apply_batch(&self, operations: &[Operation]) -> Result<Vec<Applied>> {
        let tx = self.conn.unchecked_transaction()?;
        let mut results = Vec::with_capacity(operations.len());
        for operation in operations {
            results.push(operation.apply(self)?);
        }
        tx.commit()?;
        Ok(results)
    }
}
