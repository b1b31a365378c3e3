//! Webhook handlers.

mod ping;
mod push;

#[cfg(test)]
mod tests;

use std::convert::TryFrom;

use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use tracing::error;

use self::{ping::parse_ping_event, push::parse_push_event};
use crate::{
    constants::{GITHUB_EVENT_HEADER, METHOD_NOT_SUPPORTED_MESSAGE},
    event_type::EventType,
    server::AppContext,
    utils::convert_payload_to_string,
    Result, ServerError,
};

#[tracing::instrument(skip_all, fields(event_type = %event_type))]
async fn parse_event(
    ctx: web::Data<AppContext>,
    event_type: EventType,
    body: &str,
) -> Result<HttpResponse> {
    match event_type {
        EventType::Ping => Ok(ping::ping_event(parse_ping_event(body)?)),
        EventType::Push => push::push_event(ctx, parse_push_event(body)?).await,
    }
}

fn parse_event_type<'de, T>(event_type: EventType, body: &'de str) -> Result<T>
where
    T: Deserialize<'de>,
{
    serde_json::from_str(body).map_err(|e| {
        error!(event_type = %event_type, error = %e, "Could not parse webhook payload");
        ServerError::EventParseError {
            event_type,
            source: e,
        }
    })
}

fn extract_event_from_request(req: &HttpRequest) -> Option<EventType> {
    req.headers()
        .get(GITHUB_EVENT_HEADER)
        .and_then(|x| x.to_str().ok())
        .and_then(|x| EventType::try_from(x).ok())
}

#[tracing::instrument(skip_all)]
pub(crate) async fn event_handler(
    req: HttpRequest,
    mut payload: web::Payload,
    ctx: web::Data<AppContext>,
) -> ActixResult<HttpResponse> {
    // Route event depending on header
    if let Some(event_type) = extract_event_from_request(&req) {
        if let Ok(body) = convert_payload_to_string(&mut payload).await {
            parse_event(ctx, event_type, &body)
                .await
                .map_err(Into::into)
        } else {
            let event_type: &str = event_type.into();
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Bad payload for event '{}'.", event_type)
            })))
        }
    } else {
        Ok(HttpResponse::BadRequest().json(serde_json::json!({"error": "Unhandled event."})))
    }
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .content_type("text/plain; charset=utf-8")
        .body(METHOD_NOT_SUPPORTED_MESSAGE)
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(event_handler))
            .default_service(web::to(method_not_allowed)),
    );
}
