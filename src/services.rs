use actix_web::web;

pub mod health;
pub mod register;

pub const REGISTER_PATH: &str = "/register";

/// Registers every route. `AppState` and `Templates` must already be in the app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health_check).service(
        web::resource(REGISTER_PATH)
            .app_data(
                web::FormConfig::default()
                    .limit(register::FORM_LIMIT)
                    .error_handler(register::form_error),
            )
            .route(web::get().to(register::register_page))
            .route(web::post().to(register::register))
            .default_service(web::to(register::method_not_allowed)),
    );
}
