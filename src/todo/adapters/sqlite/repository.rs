//! SQLite repository implementation for todo storage.

use super::{
    models::{NewTodoRow, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{
        NewTodo, PersistedTodoData, Priority, StatusFilter, Todo, TodoChanges, TodoFilter, TodoId,
        TodoTitle, iso8601,
    },
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;

/// SQLite connection pool type used by todo adapters.
pub type TodoSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Idempotent DDL applied on every startup.
const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    priority TEXT NOT NULL DEFAULT 'low',
    createdAt TEXT NOT NULL
);
";

diesel::define_sql_function! {
    /// Rowid of the most recent successful insert on this connection.
    fn last_insert_rowid() -> BigInt;
}

/// Applies per-connection pragmas as pooled connections are established.
///
/// SQLite serialises writes; without a busy timeout a second pooled writer
/// fails immediately instead of queueing behind the first.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute("PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds a connection pool for the given SQLite database path.
///
/// # Errors
///
/// Returns [`TodoRepositoryError::Persistence`] when the database cannot be
/// opened.
pub fn build_pool(database_url: &str) -> TodoRepositoryResult<TodoSqlitePool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(ConnectionPragmas))
        .build(manager)
        .map_err(TodoRepositoryError::persistence)
}

/// Creates the todo table if it does not exist yet.
///
/// Safe to call on every startup.
///
/// # Errors
///
/// Returns [`TodoRepositoryError::Persistence`] when the DDL fails.
pub fn ensure_schema(pool: &TodoSqlitePool) -> TodoRepositoryResult<()> {
    let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
    connection
        .batch_execute(SCHEMA)
        .map_err(TodoRepositoryError::persistence)
}

/// SQLite-backed todo repository.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: TodoSqlitePool,
}

impl SqliteTodoRepository {
    /// Creates a new repository from a SQLite connection pool.
    #[must_use]
    pub const fn new(pool: TodoSqlitePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn insert(&self, new_todo: &NewTodo) -> TodoRepositoryResult<Todo> {
        let new_row = NewTodoRow::from_domain(new_todo);

        self.run_blocking(move |connection| {
            diesel::insert_into(todos::table)
                .values(&new_row)
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;

            // The rowid is tracked per connection, so reading it back on the
            // same pooled connection is race-free.
            let assigned_id: i64 = diesel::select(last_insert_rowid())
                .get_result(connection)
                .map_err(TodoRepositoryError::persistence)?;

            let row = todos::table
                .filter(todos::id.eq(assigned_id))
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            row_to_todo(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .filter(todos::id.eq(id.into_inner()))
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_todo).transpose()
        })
        .await
    }

    async fn list(&self, filter: &TodoFilter) -> TodoRepositoryResult<Vec<Todo>> {
        let criteria = filter.clone();

        self.run_blocking(move |connection| {
            let mut query = todos::table.select(TodoRow::as_select()).into_boxed();

            if let Some(term) = criteria.search() {
                query = query.filter(todos::title.like(format!("%{term}%")));
            }
            query = match criteria.status() {
                StatusFilter::All => query,
                StatusFilter::Completed => query.filter(todos::completed.eq(1)),
                StatusFilter::Pending => query.filter(todos::completed.eq(0)),
            };
            if let Some(priority) = criteria.priority() {
                query = query.filter(todos::priority.eq(priority.as_str()));
            }

            let rows = query
                .order(todos::id.desc())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn update(
        &self,
        id: TodoId,
        changes: &TodoChanges,
    ) -> TodoRepositoryResult<Option<Todo>> {
        let overrides = changes.clone();

        self.run_blocking(move |connection| {
            // Immediate transaction: the read and the write of the
            // read-merge-write cannot interleave with a concurrent update.
            connection.immediate_transaction(|txn| {
                let existing = todos::table
                    .filter(todos::id.eq(id.into_inner()))
                    .select(TodoRow::as_select())
                    .first::<TodoRow>(txn)
                    .optional()?;
                let Some(row) = existing else {
                    return Ok(None);
                };

                let merged = merge_row(row, &overrides);
                diesel::update(todos::table.filter(todos::id.eq(id.into_inner())))
                    .set((
                        todos::title.eq(&merged.title),
                        todos::completed.eq(merged.completed),
                        todos::priority.eq(&merged.priority),
                    ))
                    .execute(txn)?;

                row_to_todo(merged).map(Some)
            })
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(todos::table.filter(todos::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(affected > 0)
        })
        .await
    }
}

impl From<diesel::result::Error> for TodoRepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}

/// Applies validated field overrides to an existing row.
fn merge_row(row: TodoRow, overrides: &TodoChanges) -> TodoRow {
    TodoRow {
        id: row.id,
        title: overrides
            .title
            .as_ref()
            .map_or(row.title, |title| title.as_str().to_owned()),
        completed: overrides.completed.map_or(row.completed, i32::from),
        priority: overrides
            .priority
            .map_or(row.priority, |priority| priority.as_str().to_owned()),
        created_at: row.created_at,
    }
}

/// Maps a storage row to the domain aggregate.
fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(TodoRepositoryError::persistence)?;
    let created_at = iso8601::parse(&row.created_at).map_err(TodoRepositoryError::persistence)?;

    Ok(Todo::from_persisted(PersistedTodoData {
        id: TodoId::new(row.id),
        title: TodoTitle::from_persisted(row.title),
        completed: row.completed != 0,
        priority,
        created_at,
    }))
}
