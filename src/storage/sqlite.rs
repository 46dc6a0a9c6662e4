//! SQLite-backed event log table (`id, caseid, ts, apptype, activity, resource, reqamount`).
//! Stands in for the relational source the log is normally queried from.

use crate::error::{MinerError, Result};
use crate::eventlog::{Event, EventLog};
use chrono::{DateTime, Utc};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

pub struct EventStore {
    conn: Mutex<Connection>,
    table: String,
}

fn check_table_name(table: &str) -> Result<()> {
    let ok = !table.is_empty()
        && table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !table.starts_with(|c: char| c.is_ascii_digit());
    if ok {
        Ok(())
    } else {
        Err(MinerError::InvalidParameter(format!(
            "invalid table name '{table}'"
        )))
    }
}

/// Case ids may be stored as text or integers.
fn case_id_from(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    match row.get_ref(idx)? {
        ValueRef::Integer(i) => Ok(i.to_string()),
        ValueRef::Text(t) => Ok(String::from_utf8_lossy(t).into_owned()),
        other => Err(rusqlite::Error::InvalidColumnType(
            idx,
            "caseid".to_string(),
            other.data_type(),
        )),
    }
}

impl EventStore {
    /// Open or create DB at path; creates the event table if missing.
    pub fn open(path: &Path, table: &str) -> Result<Self> {
        check_table_name(table)?;
        let conn = Connection::open(path)?;
        conn.execute_batch(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY,
                caseid TEXT NOT NULL,
                ts TEXT NOT NULL,
                apptype TEXT NOT NULL,
                activity TEXT NOT NULL,
                resource TEXT NOT NULL,
                reqamount REAL NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_{table}_caseid ON {table}(caseid);
            "#
        ))?;
        Ok(Self {
            conn: Mutex::new(conn),
            table: table.to_string(),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        // poisoned lock: the connection itself is still valid
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Insert (or replace) events in a single transaction.
    pub fn insert_events(&self, events: &[Event]) -> Result<usize> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT OR REPLACE INTO {} (id, caseid, ts, apptype, activity, resource, reqamount) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                self.table
            ))?;
            for e in events {
                stmt.execute(params![
                    e.sequence_id,
                    e.case_id,
                    e.ts,
                    e.app_type,
                    e.activity,
                    e.resource,
                    e.amount
                ])?;
            }
        }
        tx.commit()?;
        Ok(events.len())
    }

    /// Read the whole table as an event log, ordered by row id.
    pub fn load_log(&self) -> Result<EventLog> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT id, caseid, ts, apptype, activity, resource, reqamount FROM {} ORDER BY id",
            self.table
        ))?;
        let rows = stmt.query_map([], |row| {
            let ts: DateTime<Utc> = row.get(2)?;
            Ok(Event {
                sequence_id: row.get(0)?,
                case_id: case_id_from(row, 1)?,
                ts,
                app_type: row.get(3)?,
                activity: row.get(4)?,
                resource: row.get(5)?,
                amount: row.get(6)?,
            })
        })?;
        let events = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(table = %self.table, events = events.len(), "loaded event log");
        Ok(EventLog::new(events))
    }

    pub fn count(&self) -> Result<u64> {
        let n: i64 = self
            .conn()
            .query_row(&format!("SELECT COUNT(*) FROM {}", self.table), [], |r| {
                r.get(0)
            })?;
        Ok(u64::try_from(n).unwrap_or(0))
    }
}
