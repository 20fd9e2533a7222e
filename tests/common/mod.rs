use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};
use user_registration::{
    db::{prepare_connection, DbConn},
    services,
    templates::Templates,
    AppState,
};

pub fn bundled_templates() -> Templates {
    Templates::load(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html"))
        .expect("bundled templates should parse")
}

pub fn memory_db() -> DbConn {
    prepare_connection(":memory:").expect("in-memory database should open")
}

pub fn create_app(
    db_conn: DbConn,
    templates: Templates,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(AppState { db_conn }))
        .app_data(web::Data::new(templates))
        .configure(services::configure)
}

pub fn user_count(db_conn: &DbConn) -> i64 {
    db_conn
        .lock()
        .unwrap()
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .unwrap()
}
