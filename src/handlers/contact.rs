use actix_web::{web, HttpResponse};

use crate::domain::contact::ContactMessage;
use crate::domain::notification::Notification;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /contact
#[utoipa::path(
    post,
    path = "/contact",
    request_body = ContactMessage,
    responses(
        (status = 200, description = "Message acknowledged", body = Notification),
        (status = 422, description = "Field validation failed"),
    ),
    tag = "contact"
)]
pub async fn send_message(
    state: web::Data<AppState>,
    body: web::Json<ContactMessage>,
) -> Result<HttpResponse, AppError> {
    let ack = state.contact.send(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ack))
}
