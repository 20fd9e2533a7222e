use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use user_registration::{
    config::Config, db::prepare_connection, services, templates::Templates, AppState,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let config = Config::from_env();
    let db_conn = prepare_connection(&config.database_path)
        .map_err(|why| io::Error::new(io::ErrorKind::Other, why))?;
    let templates = web::Data::new(
        Templates::load(&config.template_glob)
            .map_err(|why| io::Error::new(io::ErrorKind::Other, why))?,
    );
    let state = web::Data::new(AppState { db_conn });

    info!("Listening on {}", config.bind_address);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(templates.clone())
            .configure(services::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
