use rusqlite::params;

use crate::{
    db::DbConn,
    error::DbError,
    models::user::{NewUser, User},
};

pub fn insert_new_user(db_conn: DbConn, user: &NewUser) -> Result<u64, DbError> {
    let db_conn = db_conn.lock().map_err(|_| DbError::Lock)?;
    let query = "INSERT INTO users (name, email, password, role) VALUES (?1, ?2, ?3, ?4)";
    let mut prepared = db_conn.prepare(query)?;
    prepared.execute(params![user.name, user.email, user.password_hash, user.role])?;

    Ok(db_conn.last_insert_rowid() as u64)
}

pub fn select_users_with_email(db_conn: DbConn, email: &str) -> Result<Vec<User>, DbError> {
    let db_conn = db_conn.lock().map_err(|_| DbError::Lock)?;
    let query = "SELECT id, name, email, password, role FROM users WHERE email = ?1 ORDER BY id";
    let mut prepared = db_conn.prepare(query)?;
    let users = prepared
        .query_map([email], |row| {
            Ok(User {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                password: row.get(3)?,
                role: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(users)
}
