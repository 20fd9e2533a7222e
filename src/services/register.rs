use actix_web::{
    error::UrlencodedError,
    http::header::{self, ContentType},
    web, HttpRequest, HttpResponse, ResponseError,
};
use log::{debug, error, info};

use crate::{
    db::{insert_new_user, DbConn},
    error::{ErrorKind, RegistrationError},
    models::user::RegistrationForm,
    registration::validate,
    templates::Templates,
    AppState,
};

pub const REGISTER_PAGE: &str = "Register";

/// Largest form body accepted on POST (10 MiB).
pub const FORM_LIMIT: usize = 10 << 20;

pub async fn register_page(templates: web::Data<Templates>) -> HttpResponse {
    let mut body = Vec::new();
    // A failed render still answers 200 with whatever was written.
    if let Err(why) = templates.render_page(REGISTER_PAGE, &mut body) {
        error!("Failed to render template for registration form: {}", why);
    }

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

pub async fn register(
    state: web::Data<AppState>,
    input: web::Form<Vec<(String, String)>>,
) -> HttpResponse {
    let input: RegistrationForm = input.into_inner().into_iter().collect();
    match create_user(state.db_conn.clone(), input).await {
        Ok(id) => {
            info!("Registered user {}", id);
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/"))
                .finish()
        }
        Err(why) => {
            match why.kind() {
                ErrorKind::Internal => error!("{}", why),
                ErrorKind::ClientInput => debug!("Rejected registration: {}", why),
            }
            why.error_response()
        }
    }
}

async fn create_user(db_conn: DbConn, input: RegistrationForm) -> Result<u64, RegistrationError> {
    let registration = validate(input)?;
    debug!(
        "Registering {} <{}>",
        registration.name(),
        registration.email()
    );

    web::block(move || {
        let new_user = registration.into_new_user()?;
        insert_new_user(db_conn, &new_user).map_err(RegistrationError::from)
    })
    .await
    .map_err(|_| RegistrationError::Blocking)?
}

/// A body that is not a readable form counts as a submission with no fields.
pub fn form_error(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Unreadable registration form: {}", err);
    RegistrationError::MissingFields.into()
}

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "GET, POST"))
        .content_type(ContentType::plaintext())
        .body("Method not allowed")
}
