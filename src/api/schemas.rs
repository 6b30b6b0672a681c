// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::topic::application::domain::entities::Topic;

/// Envelope returned by `GET /topics/`
#[derive(Serialize, ToSchema)]
pub struct TopicListResponse {
    pub data: Vec<Topic>,
}

/// Envelope returned by `POST /topics/`
#[derive(Serialize, ToSchema)]
pub struct TopicResponse {
    pub data: Topic,
}

/// Plain confirmation message
#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Topic deleted.")]
    pub message: String,
}

/// Standard error body
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    #[schema(example = "TOPIC_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Topic does not exist")]
    pub message: String,
}
