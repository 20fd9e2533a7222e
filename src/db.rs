use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::error::DbError;

pub mod users;

pub use users::{insert_new_user, select_users_with_email};

pub type DbConn = Arc<Mutex<Connection>>;

const USERS_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        password TEXT NOT NULL,
        role TEXT NOT NULL
    );";

/// Opens `path` (or an in-memory database for `:memory:`) and makes sure the
/// `users` table exists.
pub fn prepare_connection(path: &str) -> Result<DbConn, DbError> {
    let conn = Connection::open(path)?;
    conn.execute(USERS_SCHEMA, [])?;
    Ok(Arc::new(Mutex::new(conn)))
}
