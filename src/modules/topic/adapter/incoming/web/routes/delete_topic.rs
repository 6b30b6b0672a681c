use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::{
    api::schemas::{ErrorResponse, MessageBody},
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::CurrentUser,
    },
    shared::api::ApiResponse,
    topic::application::{
        domain::entities::TopicId, ports::incoming::use_cases::DeleteTopicError,
    },
    AppState,
};

/// Delete a topic (admin only)
///
/// Only digit-only ids match the route; anything else is a 404 before
/// authentication runs.
#[utoipa::path(
    delete,
    path = "/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = i32, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Topic deleted", body = MessageBody),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorResponse),
        (status = 404, description = "Topic does not exist", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/topics/{topic_id:\\d+}")]
pub async fn delete_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> impl Responder {
    let actor = user.current_user();
    let topic_id = TopicId::from(path.into_inner());

    match data.delete_topic_use_case.execute(actor, topic_id).await {
        Ok(()) => {
            info!(topic_id = %topic_id, user_id = %actor.user_id, "Topic deleted");
            ApiResponse::message("Topic deleted.")
        }
        Err(err) => map_delete_topic_error(&actor, topic_id, err),
    }
}

fn map_delete_topic_error(
    actor: &CurrentUser,
    topic_id: TopicId,
    err: DeleteTopicError,
) -> actix_web::HttpResponse {
    match err {
        DeleteTopicError::AdminRequired => {
            warn!(user_id = %actor.user_id, topic_id = %topic_id, "Non-admin attempted to delete a topic");
            ApiResponse::unauthorized("ADMIN_REQUIRED", "Admin required.")
        }
        DeleteTopicError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic does not exist")
        }
        DeleteTopicError::DatabaseError(msg) => {
            error!(error = %msg, topic_id = %topic_id, "Failed to delete topic");
            ApiResponse::internal_error()
        }
    }
}
