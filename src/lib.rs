pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod registration;
pub mod services;
pub mod templates;
pub mod utils;
pub mod validator;

use db::DbConn;

pub struct AppState {
    pub db_conn: DbConn,
}
