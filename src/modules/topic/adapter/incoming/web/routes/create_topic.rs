use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, TopicResponse},
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::CurrentUser,
    },
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{CreateTopicCommand, CreateTopicError},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Every field is optional; absent fields are stored as null.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    #[schema(example = "Algebra")]
    pub title: Option<String>,
    #[schema(example = 1)]
    pub min_lesson_number: Option<i32>,
    #[schema(example = 10)]
    pub max_lesson_number: Option<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a topic (admin only)
#[utoipa::path(
    post,
    path = "/topics/",
    tag = "topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created", body = TopicResponse),
        (status = 400, description = "Body is not valid JSON", body = ErrorResponse),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/topics/")]
pub async fn create_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: Result<web::Json<CreateTopicRequest>, actix_web::Error>,
) -> impl Responder {
    let actor = user.current_user();

    // Non-admins are refused before the body is looked at
    if !actor.is_admin() {
        return map_create_topic_error(&actor, CreateTopicError::AdminRequired);
    }

    let request = match payload {
        Ok(json) => json.into_inner(),
        Err(err) => return err.error_response(),
    };

    let command = CreateTopicCommand::new(
        request.title,
        request.min_lesson_number,
        request.max_lesson_number,
    );

    match data.create_topic_use_case.execute(actor, command).await {
        Ok(topic) => {
            info!(topic_id = %topic.id, user_id = %actor.user_id, "Topic created");
            ApiResponse::created(topic)
        }
        Err(err) => map_create_topic_error(&actor, err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_topic_error(actor: &CurrentUser, err: CreateTopicError) -> HttpResponse {
    match err {
        CreateTopicError::AdminRequired => {
            warn!(user_id = %actor.user_id, "Non-admin attempted to create a topic");
            ApiResponse::unauthorized("ADMIN_REQUIRED", "Admin required.")
        }
        CreateTopicError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to create topic");
            ApiResponse::internal_error()
        }
    }
}
