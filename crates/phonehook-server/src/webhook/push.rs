//! Push webhook handlers.

use actix_web::{web, HttpResponse};
use phonehook_ghapi_interface::types::GhPushEvent;

use super::parse_event_type;
use crate::{event_type::EventType, pipeline::process_reference, server::AppContext, Result};

pub(crate) fn parse_push_event(body: &str) -> Result<GhPushEvent> {
    parse_event_type(EventType::Push, body)
}

#[tracing::instrument(skip_all, fields(
    reference = %event.reference,
    repository_path = %event.repository.full_name,
    pusher = %event.pusher.name
))]
pub(crate) async fn push_event(
    ctx: web::Data<AppContext>,
    event: GhPushEvent,
) -> Result<HttpResponse> {
    tokio::spawn(async move {
        // Failures are logged and counted by the runner.
        let _ = process_reference(&ctx, &event.reference).await;
    });

    Ok(HttpResponse::Ok().body("OK"))
}
