//! Core task management operations.
//!
//! The `Tasks` store implements the service operations: create, list with
//! filtering and pagination, get, partial update, delete, and bulk delete.
//! Every operation validates its input before touching the store and runs
//! inside a single transaction; a transaction that never commits has no
//! effect.

use crate::libs::error::TaskError;
use crate::libs::task::{BulkDeleteOutcome, NewTask, Page, Task, TaskFilter, TaskPage, TaskPatch};
use crate::libs::validation;
use r2d2::PooledConnection;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, OptionalExtension, Row, Transaction};
use std::collections::HashSet;

const TASK_COLUMNS: &str = "id, title, description, is_completed, created_at";
const INSERT_TASK: &str =
    "INSERT INTO tasks (title, description, created_at) VALUES (?, ?, datetime(CURRENT_TIMESTAMP, 'localtime'))";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?, description = ?, is_completed = ? WHERE id = ?";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?";

pub struct Tasks {
    conn: PooledConnection<SqliteConnectionManager>,
}

impl Tasks {
    pub fn new(conn: PooledConnection<SqliteConnectionManager>) -> Self {
        Tasks { conn }
    }

    /// Validates and persists a new task.
    ///
    /// The store assigns `id` and `created_at`; `is_completed` starts as
    /// `false`. Returns the row as persisted.
    pub fn create(&mut self, new_task: NewTask) -> Result<Task, TaskError> {
        validation::validate_new_task(&new_task)?;
        let title = new_task.title.unwrap_or_default();

        let tx = self.conn.transaction()?;
        tx.execute(INSERT_TASK, params![title, new_task.description])?;
        let id = tx.last_insert_rowid();
        let task = tx.query_row(&select_by_id(), params![id], map_task)?;
        tx.commit()?;

        Ok(task)
    }

    /// Returns one page of tasks matching `filter`, newest first, together
    /// with the total match count independent of pagination.
    ///
    /// A page beyond the last one yields an empty slice, not an error.
    pub fn list(&mut self, filter: &TaskFilter, page: Page) -> Result<TaskPage, TaskError> {
        validation::validate_filter(filter)?;
        validation::validate_page(page)?;

        let (clause, args) = filter_clause(filter);
        let tx = self.conn.transaction()?;

        let total: u64 = tx.query_row(
            &format!("SELECT COUNT(*) FROM tasks{}", clause),
            params_from_iter(args.iter()),
            |row| row.get(0),
        )?;

        let mut tasks = Vec::new();
        {
            let sql = format!(
                "SELECT {} FROM tasks{} ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
                TASK_COLUMNS, clause
            );
            let mut page_args = args;
            page_args.push(Value::Integer(i64::from(page.size)));
            page_args.push(Value::Integer(i64::from(page.number - 1) * i64::from(page.size)));

            let mut stmt = tx.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(page_args.iter()), map_task)?;
            for row in rows {
                tasks.push(row?);
            }
        }

        tx.commit()?;

        Ok(TaskPage {
            total,
            page: page.number,
            size: page.size,
            tasks,
        })
    }

    /// Fetches a single task by id.
    pub fn get(&mut self, id: i64) -> Result<Task, TaskError> {
        self.conn
            .query_row(&select_by_id(), params![id], map_task)
            .optional()?
            .ok_or(TaskError::NotFound(id))
    }

    /// Applies a partial update: only fields present in `patch` change,
    /// so re-applying the same patch always yields the same final state.
    pub fn update(&mut self, id: i64, patch: TaskPatch) -> Result<Task, TaskError> {
        validation::validate_patch(&patch)?;

        let tx = self.conn.transaction()?;
        let mut task = tx
            .query_row(&select_by_id(), params![id], map_task)
            .optional()?
            .ok_or(TaskError::NotFound(id))?;

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = Some(description);
        }
        if let Some(is_completed) = patch.is_completed {
            task.is_completed = is_completed;
        }

        tx.execute(UPDATE_TASK, params![task.title, task.description, task.is_completed, id])?;
        tx.commit()?;

        Ok(task)
    }

    /// Deletes a task, returning its id.
    pub fn delete(&mut self, id: i64) -> Result<i64, TaskError> {
        let tx = self.conn.transaction()?;
        let affected = tx.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        tx.commit()?;

        Ok(id)
    }

    /// Deletes every existing task among `ids` in one transaction.
    ///
    /// Duplicate ids are collapsed first. Ids with no matching row are
    /// reported back rather than rejected; only when none of the requested
    /// ids exist does the operation fail.
    pub fn delete_many(&mut self, ids: &[i64]) -> Result<BulkDeleteOutcome, TaskError> {
        let unique = dedupe(ids);

        let tx = self.conn.transaction()?;
        let existing = existing_ids(&tx, &unique)?;
        let (deleted, not_found): (Vec<i64>, Vec<i64>) =
            unique.into_iter().partition(|id| existing.contains(id));

        if deleted.is_empty() {
            return Err(TaskError::NoneExist { missing: not_found });
        }

        let placeholders = vec!["?"; deleted.len()].join(", ");
        tx.execute(
            &format!("DELETE FROM tasks WHERE id IN ({})", placeholders),
            params_from_iter(deleted.iter()),
        )?;
        tx.commit()?;

        Ok(BulkDeleteOutcome { deleted, not_found })
    }
}

fn select_by_id() -> String {
    format!("SELECT {} FROM tasks WHERE id = ?", TASK_COLUMNS)
}

/// Builds the WHERE clause for a filter; criteria combine with AND.
/// Search matches case-insensitively as a substring of the title.
fn filter_clause(filter: &TaskFilter) -> (String, Vec<Value>) {
    let mut conditions = Vec::new();
    let mut args = Vec::new();

    if let Some(completed) = filter.completed {
        conditions.push("is_completed = ?");
        args.push(Value::Integer(i64::from(completed)));
    }
    if let Some(term) = filter.search_term.as_deref() {
        conditions.push("LOWER(title) LIKE '%' || LOWER(?) || '%'");
        args.push(Value::Text(term.to_string()));
    }

    if conditions.is_empty() {
        (String::new(), args)
    } else {
        (format!(" WHERE {}", conditions.join(" AND ")), args)
    }
}

fn existing_ids(tx: &Transaction<'_>, ids: &[i64]) -> Result<HashSet<i64>, TaskError> {
    if ids.is_empty() {
        return Ok(HashSet::new());
    }
    let placeholders = vec!["?"; ids.len()].join(", ");
    let mut stmt = tx.prepare(&format!("SELECT id FROM tasks WHERE id IN ({})", placeholders))?;
    let rows = stmt.query_map(params_from_iter(ids.iter()), |row| row.get(0))?;
    let mut existing = HashSet::new();
    for row in rows {
        existing.insert(row?);
    }
    Ok(existing)
}

/// Collapses duplicates, keeping first-occurrence order.
fn dedupe(ids: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        is_completed: row.get(3)?,
        created_at: row.get(4)?,
    })
}
