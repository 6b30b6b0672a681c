use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, TopicListResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::GetTopicsError,
    AppState,
};

/// List all topics
///
/// Any authenticated user may list topics.
#[utoipa::path(
    get,
    path = "/topics/",
    tag = "topics",
    responses(
        (status = 200, description = "All topics", body = TopicListResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/topics/")]
pub async fn get_topics_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_topics_use_case.execute().await {
        Ok(topics) => ApiResponse::success(topics),
        Err(err) => map_get_topics_error(err),
    }
}

fn map_get_topics_error(err: GetTopicsError) -> actix_web::HttpResponse {
    match err {
        GetTopicsError::QueryFailed(msg) => {
            error!(error = %msg, "Failed to list topics");
            ApiResponse::internal_error()
        }
    }
}
